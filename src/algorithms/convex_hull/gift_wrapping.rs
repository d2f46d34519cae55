use crate::data::Point;
use crate::PolygonScalar;

use super::lowest_point;

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

/// Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] algorithm, also known as the Jarvis march. The walk
/// starts at the lexicographically smallest point (lowest x, then lowest y)
/// and repeatedly moves to the candidate that has no other point on its
/// counter-clockwise side. Ties are decided by scan order: a later candidate
/// only replaces the current choice if it is strictly more clockwise. The
/// walk stops when it returns to the start point; the start is not repeated.
///
/// For points in general position the result is the hull in
/// counter-clockwise order.
///
/// Inputs with fewer than three points are returned unchanged.
///
/// # Degenerate input
/// Colinear and duplicate points are not special-cased and may yield a short
/// path. The walk is cut off after `n` vertices; if that happens a warning is
/// logged and the partial walk is returned.
///
/// # Time complexity
/// $O(nh)$ where h is the number of points on the convex hull.
///
/// # Examples
///
/// ```rust
/// # use convexity::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use convexity::data::Point;
/// let pts = vec![
///   Point::new([10, 10]),
///   Point::new([0, 10]),
///   Point::new([5, 5]),
///   Point::new([0, 0]),
///   Point::new([10, 0]),
/// ];
/// assert_eq!(convex_hull(&pts), vec![
///   Point::new([0, 0]),
///   Point::new([10, 0]),
///   Point::new([10, 10]),
///   Point::new([0, 10]),
/// ]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(pts: &[Point<T>]) -> Vec<Point<T>>
where
  T: PolygonScalar,
{
  let n = pts.len();
  let start = match lowest_point(pts) {
    Some(start) if n >= 3 => *start,
    _ => return pts.to_vec(),
  };

  let mut hull: Vec<Point<T>> = Vec::with_capacity(n);
  let mut current = start;
  loop {
    if hull.len() == n {
      tracing::warn!(n, "gift wrapping did not return to its start point; walk cut off");
      break;
    }
    hull.push(current);
    let mut next = pts[0];
    for candidate in &pts[1..] {
      if next == current || Point::orient(&current, candidate, &next).is_ccw() {
        next = *candidate;
      }
    }
    current = next;
    if next == start {
      break;
    }
  }
  hull
}
