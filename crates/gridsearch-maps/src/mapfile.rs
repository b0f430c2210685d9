//! Text map files.
//!
//! A map file is line oriented. Blank lines and lines starting with `//`
//! are skipped; the remaining lines are, in order:
//!
//! ```text
//! [rows,cols]
//! (x,y)                     start
//! (x1,y1) | (x2,y2) | ...   goals
//! (x,y,w,h)                 one wall per line, any number
//! ```
//!
//! Only the unsigned integers on a line matter, everything else is a
//! separator. Extra integers are ignored.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use gridsearch_core::{GridDescription, Point, Wall};

/// Errors raised while reading a map file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("missing {0} line")]
    MissingLine(&'static str),
    #[error("line {line}: {what} needs {need} values, found {found}")]
    TooFewValues {
        line: usize,
        what: &'static str,
        need: usize,
        found: usize,
    },
    #[error("line {line}: invalid goal state {text:?}")]
    InvalidGoal { line: usize, text: String },
    #[error("line {line}: invalid wall {text:?} (needs 4 values)")]
    InvalidWall { line: usize, text: String },
    #[error("line {line}: number {text} is too large")]
    NumberTooLarge { line: usize, text: String },
}

/// A significant line with its 1-based number in the source.
struct Line<'a> {
    number: usize,
    text: &'a str,
}

impl Line<'_> {
    /// The unsigned integers in `text`, in order.
    fn integers_in(&self, text: &str) -> Result<Vec<i32>, ParseError> {
        let mut out = Vec::new();
        for run in text.split(|c: char| !c.is_ascii_digit()) {
            if run.is_empty() {
                continue;
            }
            let n = run.parse().map_err(|_| ParseError::NumberTooLarge {
                line: self.number,
                text: run.to_string(),
            })?;
            out.push(n);
        }
        Ok(out)
    }

    fn at_least(&self, what: &'static str, need: usize) -> Result<Vec<i32>, ParseError> {
        let values = self.integers_in(self.text)?;
        if values.len() < need {
            return Err(ParseError::TooFewValues {
                line: self.number,
                what,
                need,
                found: values.len(),
            });
        }
        Ok(values)
    }
}

/// Parse the text of a map file.
///
/// The result is not validated; build a
/// [`GridModel`](gridsearch_core::GridModel) from it to check bounds and
/// goals.
pub fn parse_description(s: &str) -> Result<GridDescription, ParseError> {
    let mut lines = s
        .lines()
        .enumerate()
        .map(|(i, text)| Line {
            number: i + 1,
            text: text.trim(),
        })
        .filter(|l| !l.text.is_empty() && !l.text.starts_with("//"));

    let size = lines.next().ok_or(ParseError::MissingLine("grid size"))?;
    let size = size.at_least("grid size", 2)?;

    let start = lines.next().ok_or(ParseError::MissingLine("initial position"))?;
    let start = start.at_least("initial position", 2)?;

    let goal_line = lines.next().ok_or(ParseError::MissingLine("goal states"))?;
    let mut goals = Vec::new();
    for part in goal_line.text.split('|') {
        match goal_line.integers_in(part)?[..] {
            [x, y, ..] => goals.push(Point::new(x, y)),
            _ => {
                return Err(ParseError::InvalidGoal {
                    line: goal_line.number,
                    text: part.trim().to_string(),
                });
            }
        }
    }

    let mut walls = Vec::new();
    for line in lines {
        match line.integers_in(line.text)?[..] {
            [x, y, w, h, ..] => walls.push(Wall::new(x, y, w, h)),
            _ => {
                return Err(ParseError::InvalidWall {
                    line: line.number,
                    text: line.text.to_string(),
                });
            }
        }
    }

    Ok(GridDescription {
        rows: size[0],
        cols: size[1],
        start: Point::new(start[0], start[1]),
        goals,
        walls,
    })
}

/// Read and parse a map file.
pub fn read_description(path: impl AsRef<Path>) -> Result<GridDescription, ParseError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let desc = parse_description(&text)?;
    log::debug!(
        "{}: {}x{} grid, {} goals, {} walls",
        path.display(),
        desc.rows,
        desc.cols,
        desc.goals.len(),
        desc.walls.len()
    );
    Ok(desc)
}

/// Format `desc` as a map file.
///
/// Negative coordinates have no representation in the format and will
/// not parse back.
pub fn write_description(desc: &GridDescription) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "[{},{}]", desc.rows, desc.cols);
    let _ = writeln!(out, "({},{})", desc.start.x, desc.start.y);
    let goals: Vec<String> = desc
        .goals
        .iter()
        .map(|g| format!("({},{})", g.x, g.y))
        .collect();
    let _ = writeln!(out, "{}", goals.join(" | "));
    for w in &desc.walls {
        let _ = writeln!(out, "{w}");
    }
    out
}

/// Write `desc` to `path` in map-file format.
pub fn save_description(path: impl AsRef<Path>, desc: &GridDescription) -> io::Result<()> {
    fs::write(path, write_description(desc))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
// A small sample
[5,11]

(0,1)
(7,0) | (10,3)
(2,0,2,2)
(8,0,1,2)
(10,0,1,1)
(2,3,1,2)
(3,4,3,1)
(9,3,1,1)
(8,4,2,1)
";

    #[test]
    fn parses_sample() {
        let desc = parse_description(SAMPLE).unwrap();
        assert_eq!(desc.rows, 5);
        assert_eq!(desc.cols, 11);
        assert_eq!(desc.start, Point::new(0, 1));
        assert_eq!(desc.goals, vec![Point::new(7, 0), Point::new(10, 3)]);
        assert_eq!(desc.walls.len(), 7);
        assert_eq!(desc.walls[0], Wall::new(2, 0, 2, 2));
        assert_eq!(desc.walls[6], Wall::new(8, 4, 2, 1));
    }

    #[test]
    fn separators_are_free_form() {
        let desc = parse_description("rows 3 cols 4\nstart 1 2\n 3,0 ; 0 0 \n").unwrap();
        assert_eq!((desc.rows, desc.cols), (3, 4));
        assert_eq!(desc.start, Point::new(1, 2));
        // One goal part: the extra integers are ignored.
        assert_eq!(desc.goals, vec![Point::new(3, 0)]);
        assert!(desc.walls.is_empty());
    }

    #[test]
    fn missing_lines() {
        assert!(matches!(
            parse_description("// only a comment\n\n"),
            Err(ParseError::MissingLine("grid size"))
        ));
        assert!(matches!(
            parse_description("[2,2]\n(0,0)\n"),
            Err(ParseError::MissingLine("goal states"))
        ));
    }

    #[test]
    fn too_few_values_reports_source_line() {
        let err = parse_description("// header\n[5]\n(0,0)\n(1,1)\n").unwrap_err();
        match err {
            ParseError::TooFewValues {
                line, need, found, ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(need, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn bad_goal_and_wall_entries() {
        let err = parse_description("[3,3]\n(0,0)\n(1,1) | (2)\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidGoal { line: 3, .. }));
        let err = parse_description("[3,3]\n(0,0)\n(1,1) |\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidGoal { .. }));
        let err = parse_description("[3,3]\n(0,0)\n(2,2)\n(1,1,1)\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidWall { line: 4, .. }));
        assert!(err.to_string().contains("needs 4 values"));
    }

    #[test]
    fn huge_number_is_an_error() {
        let err = parse_description("[99999999999,3]\n(0,0)\n(1,1)\n").unwrap_err();
        assert!(matches!(err, ParseError::NumberTooLarge { line: 1, .. }));
    }

    #[test]
    fn written_file_parses_back() {
        let desc = parse_description(SAMPLE).unwrap();
        let text = write_description(&desc);
        assert!(text.starts_with("[5,11]\n(0,1)\n(7,0) | (10,3)\n(2,0,2,2)\n"));
        assert_eq!(parse_description(&text).unwrap(), desc);
    }

    #[test]
    fn wall_at_coordinate_limit_is_a_grid_error() {
        use gridsearch_core::{GridError, GridModel};

        let desc = parse_description("[5,5]\n(0,0)\n(4,4)\n(2147483647,0,5,5)\n").unwrap();
        assert!(matches!(
            GridModel::new(desc),
            Err(GridError::WallOverflow { index: 0, .. })
        ));
    }

    #[test]
    fn unreadable_file() {
        let err = read_description("/nonexistent/map.txt").unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/map.txt"));
    }
}
