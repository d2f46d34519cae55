use num_traits::Float;

use crate::data::Point;
use crate::{PolygonScalar, TotalOrd};

use super::lowest_point;

// https://en.wikipedia.org/wiki/Graham_scan

/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm. The pivot `p0` is the lexicographically
/// smallest point. All points, the pivot included, are sorted by the polar
/// angle `atan2(y - p0.y, x - p0.x)`; equal angles are ordered by the points
/// themselves (x, then y). The first three sorted points seed a stack, and
/// every later point pops the stack until the top two and the new point make
/// a counter-clockwise turn.
///
/// The returned stack is an open polygon: the first point is not repeated at
/// the end.
///
/// Inputs with fewer than three points are returned unchanged. The input
/// slice is never reordered; sorting happens on a copy.
///
/// # Degenerate input
/// The seed triple is not checked. Because the pivot has angle zero, points
/// below and to the right of it (negative angle) sort in front of it, and the
/// result then need not start at the pivot nor be convex.
///
/// # Examples
///
/// ```rust
/// # use convexity::algorithms::convex_hull;
/// # use convexity::data::Point;
/// let pts = vec![
///   Point::new([0.0, 10.0]),
///   Point::new([5.0, 5.0]),
///   Point::new([10.0, 10.0]),
///   Point::new([10.0, 0.0]),
///   Point::new([0.0, 0.0]),
/// ];
/// assert_eq!(convex_hull(&pts), vec![
///   Point::new([0.0, 0.0]),
///   Point::new([10.0, 0.0]),
///   Point::new([10.0, 10.0]),
///   Point::new([0.0, 10.0]),
/// ]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(pts: &[Point<T>]) -> Vec<Point<T>>
where
  T: PolygonScalar + Float,
{
  let n = pts.len();
  if n < 3 {
    return pts.to_vec();
  }
  let sorted = sort_by_angle(pts);

  let mut stack: Vec<Point<T>> = sorted[..3].to_vec();
  for pt in &sorted[3..] {
    while stack.len() >= 2
      && !Point::orient(&stack[stack.len() - 2], &stack[stack.len() - 1], pt).is_ccw()
    {
      stack.pop();
    }
    stack.push(*pt);
  }
  stack
}

// Copy of `pts` ordered by polar angle around the smallest point, ties broken
// by lexicographic point order.
// O(n log n)
fn sort_by_angle<T>(pts: &[Point<T>]) -> Vec<Point<T>>
where
  T: PolygonScalar + Float,
{
  let origin = match lowest_point(pts) {
    Some(origin) => *origin,
    None => return Vec::new(),
  };
  let mut keyed: Vec<(T, Point<T>)> = pts
    .iter()
    .map(|pt| {
      let angle = (*pt.y_coord() - *origin.y_coord()).atan2(*pt.x_coord() - *origin.x_coord());
      (angle, *pt)
    })
    .collect();
  keyed.sort_by(|(angle_a, a), (angle_b, b)| {
    TotalOrd::total_cmp(angle_a, angle_b).then_with(|| a.lex_cmp(b))
  });
  keyed.into_iter().map(|(_, pt)| pt).collect()
}
