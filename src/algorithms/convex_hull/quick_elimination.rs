use crate::data::Point;
use crate::{PolygonScalar, TotalOrd};

/// Single-pass stack elimination over points sorted by `(y, x)`.
///
/// The points are copied and sorted bottom to top (ties left to right). The
/// first two seed the result; each later point pops the result until the last
/// two points and the new one make a counter-clockwise turn, then is pushed.
///
/// No angular order is used, so this is not a complete hull construction:
/// for many inputs only part of the boundary survives. For the square
/// `(0,0), (10,0), (10,10), (0,10)` the result is the three corners
/// `(0,0), (10,0), (10,10)`.
///
/// Inputs with fewer than three points are returned unchanged. The input
/// slice is never reordered.
///
/// # Time complexity
/// $O(n \log n)$
pub fn convex_hull<T>(pts: &[Point<T>]) -> Vec<Point<T>>
where
  T: PolygonScalar,
{
  if pts.len() < 3 {
    return pts.to_vec();
  }
  let mut sorted = pts.to_vec();
  sorted.sort_by(|a, b| {
    TotalOrd::total_cmp(&(a.y_coord(), a.x_coord()), &(b.y_coord(), b.x_coord()))
  });

  let mut hull: Vec<Point<T>> = sorted[..2].to_vec();
  for pt in &sorted[2..] {
    while hull.len() > 1
      && !Point::orient(&hull[hull.len() - 2], &hull[hull.len() - 1], pt).is_ccw()
    {
      hull.pop();
    }
    hull.push(*pt);
  }
  hull
}
