//! Per-strategy totals for the `bench` subcommand.

use std::fmt;
use std::time::Duration;

use gridsearch_paths::{Algorithm, SearchReport};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Tally {
    pub runs: usize,
    pub solved: usize,
    pub nodes_visited: usize,
    /// Summed over solved runs only.
    pub path_len: usize,
    /// Runs whose outcome disagreed with the case kind: a miss on a
    /// solvable case or a hit on an unreachable one.
    pub surprises: usize,
    pub elapsed: Duration,
}

impl Tally {
    fn mean_visited(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.nodes_visited as f64 / self.runs as f64
    }

    fn mean_path(&self) -> Option<f64> {
        (self.solved > 0).then(|| self.path_len as f64 / self.solved as f64)
    }
}

/// One [`Tally`] per algorithm, in [`Algorithm::ALL`] order.
#[derive(Clone, Debug)]
pub(crate) struct Summary {
    rows: Vec<(Algorithm, Tally)>,
}

impl Summary {
    pub fn new() -> Self {
        Self {
            rows: Algorithm::ALL
                .into_iter()
                .map(|a| (a, Tally::default()))
                .collect(),
        }
    }

    /// Add one search to the tally of its algorithm.
    pub fn record(&mut self, report: &SearchReport, solvable: bool, elapsed: Duration) {
        let Some((_, t)) = self.rows.iter_mut().find(|(a, _)| *a == report.algorithm) else {
            return;
        };
        t.runs += 1;
        t.nodes_visited += report.nodes_visited;
        t.elapsed += elapsed;
        if report.found() {
            t.solved += 1;
            t.path_len += report.path_len();
        }
        if report.found() != solvable {
            t.surprises += 1;
        }
    }

    #[cfg(test)]
    pub fn get(&self, algorithm: Algorithm) -> Option<&Tally> {
        self.rows
            .iter()
            .find(|(a, _)| *a == algorithm)
            .map(|(_, t)| t)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<8} {:>9} {:>13} {:>10} {:>10} {:>12}",
            "method", "solved", "mean visited", "mean path", "surprises", "total time"
        )?;
        for (algorithm, t) in &self.rows {
            let solved = format!("{}/{}", t.solved, t.runs);
            let path = match t.mean_path() {
                Some(p) => format!("{p:.1}"),
                None => "-".to_string(),
            };
            writeln!(
                f,
                "{:<8} {:>9} {:>13.1} {:>10} {:>10} {:>12}",
                algorithm.name(),
                solved,
                t.mean_visited(),
                path,
                t.surprises,
                format!("{:.3?}", t.elapsed),
            )?;
        }
        Ok(())
    }
}
