//! `gridsearch`: run, generate and benchmark grid search strategies.

mod bench;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{ArgAction, Args, Parser, Subcommand};
use gridsearch_core::GridModel;
use gridsearch_maps::{
    CaseGenerator, read_description, render_map, render_solution, save_description,
};
use gridsearch_paths::{
    Algorithm, BeamRevisit, BeamWidth, SearchConfig, SearchStrategy, Strategy, format_moves,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use bench::Summary;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raise log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search a map file with one strategy
    Run(RunArgs),
    /// Write random map files
    Generate(GenerateArgs),
    /// Run every strategy over random cases and print a summary
    Bench(BenchArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Map file to search
    file: PathBuf,

    /// Search method: dfs, bfs, gbfs, astar, iddfs or beam
    method: Algorithm,

    /// Candidates kept per level (beam only, default 3)
    #[arg(long, value_parser = parse_beam_width)]
    beam_width: Option<BeamWidth>,

    /// Beam search only forbids stepping back onto the parent cell
    #[arg(long)]
    beam_parent_only: bool,

    /// Deepest IDDFS iteration (default rows x cols)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print the search report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Directory the testN.txt files are written to
    #[arg(short, long)]
    out_dir: PathBuf,

    /// Number of cases
    #[arg(short = 'n', long, default_value_t = 20)]
    count: usize,

    /// Seed for reproducible cases
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct BenchArgs {
    /// Number of cases
    #[arg(short = 'n', long, default_value_t = 20)]
    count: usize,

    /// Seed for reproducible cases
    #[arg(long)]
    seed: Option<u64>,

    /// Beam width used for the beam runs
    #[arg(long, value_parser = parse_beam_width, default_value = "3")]
    beam_width: BeamWidth,
}

fn parse_beam_width(s: &str) -> Result<BeamWidth, String> {
    let n: i64 = s.parse().map_err(|e| format!("{e}"))?;
    BeamWidth::new(n).map_err(|e| e.to_string())
}

fn case_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Command::Run(args) => run(&args),
        Command::Generate(args) => generate(&args),
        Command::Bench(args) => bench(&args),
    }
}

fn run_config(args: &RunArgs) -> SearchConfig {
    let mut config = SearchConfig {
        max_depth: args.max_depth,
        ..SearchConfig::default()
    };
    if args.beam_parent_only {
        config.beam_revisit = BeamRevisit::ParentOnly;
    }
    match (args.method, args.beam_width) {
        (Algorithm::Beam, Some(w)) => config.beam_width = w,
        (Algorithm::Beam, None) => {
            log::info!("beam width not provided, using default ({})", config.beam_width)
        }
        (method, Some(w)) => log::debug!("ignoring beam width {w} for {method}"),
        (_, None) => {}
    }
    config
}

fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let grid = GridModel::new(read_description(&args.file)?)?;
    let strategy = Strategy::new(args.method, &run_config(args));
    let report = strategy.search(&grid);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let name = args.method.name().to_uppercase();
    println!("\n--- Initial Grid Map ---");
    print!("{}", render_map(&grid));
    println!("\n--- Search Results ({name}) ---");
    println!("File: {}", args.file.display());
    println!("Algorithm: {name}");
    println!("Nodes visited: {}", report.nodes_visited);
    println!("Nodes generated: {}", report.nodes_generated);
    match report.goal {
        Some(goal) => {
            println!("Goal reached: {goal}");
            println!("Path: {}", format_moves(&report.path));
            println!("\n--- Solution Path ---");
        }
        None => println!("No goal is reachable"),
    }
    print!("{}", render_solution(&grid, &report));
    Ok(())
}

fn case_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("test{}.txt", index + 1))
}

fn generate(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out_dir)?;
    let mut cases = CaseGenerator::new(case_rng(args.seed));
    for (i, case) in cases.suite(args.count).iter().enumerate() {
        let path = case_path(&args.out_dir, i);
        save_description(&path, &case.desc)?;
        println!(
            "{}: {} {}x{}, {} goals, {} walls",
            path.display(),
            case.params.kind,
            case.desc.rows,
            case.desc.cols,
            case.desc.goals.len(),
            case.desc.walls.len()
        );
    }
    Ok(())
}

fn bench(args: &BenchArgs) -> Result<(), Box<dyn Error>> {
    let config = SearchConfig {
        beam_width: args.beam_width,
        ..SearchConfig::default()
    };
    let strategies: Vec<Strategy> = Algorithm::ALL
        .into_iter()
        .map(|a| Strategy::new(a, &config))
        .collect();

    let mut cases = CaseGenerator::new(case_rng(args.seed));
    let mut summary = Summary::new();
    for case in cases.suite(args.count) {
        let grid = match GridModel::new(case.desc) {
            Ok(grid) => grid,
            Err(e) => {
                log::warn!("skipping {} case: {e}", case.params.kind);
                continue;
            }
        };
        for s in &strategies {
            let started = Instant::now();
            let report = s.search(&grid);
            summary.record(&report, case.params.kind.solvable(), started.elapsed());
        }
    }

    println!("{} cases, beam width {}\n", args.count, args.beam_width);
    print!("{summary}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("gridsearch").chain(args.iter().copied()))
    }

    fn run_args(args: &[&str]) -> RunArgs {
        match parse(args).unwrap().command {
            Command::Run(r) => r,
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn run_arguments() {
        let args = run_args(&["run", "map.txt", "AStar", "-v"]);
        assert_eq!(args.method, Algorithm::AStar);
        assert_eq!(args.file, PathBuf::from("map.txt"));
        assert!(args.beam_width.is_none());

        let args = run_args(&["run", "map.txt", "beam", "--beam-width", "5", "--beam-parent-only"]);
        let config = run_config(&args);
        assert_eq!(config.beam_width.get(), 5);
        assert_eq!(config.beam_revisit, BeamRevisit::ParentOnly);
    }

    #[test]
    fn rejects_bad_method_and_width() {
        assert!(parse(&["run", "map.txt", "dijkstra"]).is_err());
        assert!(parse(&["run", "map.txt", "beam", "--beam-width", "0"]).is_err());
        assert!(parse(&["run", "map.txt", "beam", "--beam-width", "x"]).is_err());
    }

    #[test]
    fn default_beam_width() {
        let args = run_args(&["run", "map.txt", "beam"]);
        assert_eq!(run_config(&args).beam_width, BeamWidth::DEFAULT);
        match parse(&["bench"]).unwrap().command {
            Command::Bench(b) => {
                assert_eq!(b.beam_width, BeamWidth::DEFAULT);
                assert_eq!(b.count, 20);
            }
            other => panic!("expected bench, got {other:?}"),
        }
    }

    #[test]
    fn case_files_are_numbered_from_one() {
        assert_eq!(
            case_path(Path::new("out"), 0),
            PathBuf::from("out").join("test1.txt")
        );
    }
}
