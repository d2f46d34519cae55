//! Convex hull constructions.
//!
//! All five algorithms take a slice of points and return a new `Vec`. None of
//! them reorder the caller's slice; the sorting ones sort a private copy.
//! Inputs with fewer than three points are returned unchanged.
//!
//! The algorithms do not agree on output shape:
//!
//! | Algorithm | Output |
//! |---|---|
//! | [`brute_force`] | Flat list of hull edge endpoints, `2 * edges` long |
//! | [`gift_wrapping`] | Walk from the lowest-x point |
//! | [`graham_scan`] | Stack after an angular sweep around the lowest-x point |
//! | [`quick_elimination`] | Stack after a sweep in `(y, x)` order, may be incomplete |
//! | [`chan`] | Skeleton of chunk minima with chunk hulls spliced in |
use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::data::Point;
use crate::{Error, PolygonScalar, TotalOrd};

pub mod brute_force;
pub mod chan;
pub mod gift_wrapping;
pub mod graham_scan;
pub mod quick_elimination;

/// Named hull algorithm, for callers that pick one at runtime.
///
/// ```rust
/// # use convexity::algorithms::HullAlgorithm;
/// # use convexity::data::Point;
/// let algo: HullAlgorithm = "graham-scan".parse().unwrap();
/// let square = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([10.0, 0.0]),
///   Point::new([10.0, 10.0]),
///   Point::new([0.0, 10.0]),
/// ];
/// assert_eq!(algo.run(&square), square);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HullAlgorithm {
  BruteForce,
  JarvisMarch,
  GrahamScan,
  QuickElimination,
  Chan,
}

impl HullAlgorithm {
  pub const ALL: [HullAlgorithm; 5] = [
    HullAlgorithm::JarvisMarch,
    HullAlgorithm::GrahamScan,
    HullAlgorithm::QuickElimination,
    HullAlgorithm::BruteForce,
    HullAlgorithm::Chan,
  ];

  pub const MIN_POINTS: usize = 3;

  pub fn name(self) -> &'static str {
    match self {
      HullAlgorithm::BruteForce => "brute-force",
      HullAlgorithm::JarvisMarch => "jarvis-march",
      HullAlgorithm::GrahamScan => "graham-scan",
      HullAlgorithm::QuickElimination => "quick-elimination",
      HullAlgorithm::Chan => "chan",
    }
  }

  pub fn run<T>(self, pts: &[Point<T>]) -> Vec<Point<T>>
  where
    T: PolygonScalar + Float,
  {
    match self {
      HullAlgorithm::BruteForce => brute_force::convex_hull(pts),
      HullAlgorithm::JarvisMarch => gift_wrapping::convex_hull(pts),
      HullAlgorithm::GrahamScan => graham_scan::convex_hull(pts),
      HullAlgorithm::QuickElimination => quick_elimination::convex_hull(pts),
      HullAlgorithm::Chan => chan::convex_hull(pts),
    }
  }

  /// Like [`HullAlgorithm::run`], but refuses inputs with fewer than
  /// [`HullAlgorithm::MIN_POINTS`] points instead of echoing them.
  pub fn checked_run<T>(self, pts: &[Point<T>]) -> Result<Vec<Point<T>>, Error>
  where
    T: PolygonScalar + Float,
  {
    if pts.len() < HullAlgorithm::MIN_POINTS {
      return Err(Error::InsufficientVertices);
    }
    Ok(self.run(pts))
  }
}

impl fmt::Display for HullAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for HullAlgorithm {
  type Err = Error;
  fn from_str(s: &str) -> Result<HullAlgorithm, Error> {
    let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
    match key.as_str() {
      "brute-force" | "brute" => Ok(HullAlgorithm::BruteForce),
      "jarvis-march" | "jarvis" | "gift-wrapping" => Ok(HullAlgorithm::JarvisMarch),
      "graham-scan" | "graham" | "angular-sweep" => Ok(HullAlgorithm::GrahamScan),
      "quick-elimination" | "incremental-elimination" => Ok(HullAlgorithm::QuickElimination),
      "chan" | "chan-algorithm" | "divide-and-conquer" => Ok(HullAlgorithm::Chan),
      _ => Err(Error::UnknownAlgorithm(s.to_string())),
    }
  }
}

// Lexicographically smallest point (x, then y). First occurrence wins.
// O(n)
pub(crate) fn lowest_point<T>(pts: &[Point<T>]) -> Option<&Point<T>>
where
  T: TotalOrd,
{
  pts.iter().min_by(|a, b| a.lex_cmp(b))
}

// Lexicographically largest point.
// O(n)
pub(crate) fn highest_point<T>(pts: &[Point<T>]) -> Option<&Point<T>>
where
  T: TotalOrd,
{
  pts.iter().max_by(|a, b| a.lex_cmp(b))
}
