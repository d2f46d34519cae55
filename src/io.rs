//! Plain-text point files.
//!
//! One point per line, written as two whitespace separated numbers `x y`.
//! Blank lines and lines starting with `#` are ignored.
//!
//! ```text
//! # unit square
//! 0 0
//! 1 0
//! 1 1
//! 0 1
//! ```
use std::path::Path;

use crate::data::Point;
use crate::Error;

/// Parse the points in `text`.
///
/// # Errors
///
/// [`Error::Parse`] for the first line that does not hold exactly two numbers.
/// Line numbers start at 1.
///
/// # Examples
///
/// ```rust
/// # use convexity::io::parse_points;
/// # use convexity::data::Point;
/// let pts = parse_points("# corners\n0 0\n\n2.5 -1\n").unwrap();
/// assert_eq!(pts, vec![Point::new([0.0, 0.0]), Point::new([2.5, -1.0])]);
/// assert!(parse_points("0 0\n1\n").is_err());
/// ```
pub fn parse_points(text: &str) -> Result<Vec<Point<f64>>, Error> {
  let mut pts = Vec::new();
  for (idx, line) in text.lines().enumerate() {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
      continue;
    }
    pts.push(parse_line(line).map_err(|message| Error::Parse {
      line: idx + 1,
      message,
    })?);
  }
  Ok(pts)
}

fn parse_line(line: &str) -> Result<Point<f64>, String> {
  let fields: Vec<&str> = line.split_whitespace().collect();
  let [x, y] = fields.as_slice() else {
    return Err(format!("expected 2 coordinates, found {}", fields.len()));
  };
  let coord = |field: &str| {
    field
      .parse::<f64>()
      .map_err(|err| format!("invalid coordinate {:?}: {}", field, err))
  };
  Ok(Point::new([coord(x)?, coord(y)?]))
}

/// Read and parse a point file.
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be read, otherwise as [`parse_points`].
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point<f64>>, Error> {
  let text = std::fs::read_to_string(path)?;
  parse_points(&text)
}

/// Render points in the format read by [`parse_points`], one per line.
pub fn format_points(pts: &[Point<f64>]) -> String {
  pts
    .iter()
    .map(|pt| format!("{} {}\n", pt.x_coord(), pt.y_coord()))
    .collect()
}
