use crate::data::Point;
use crate::{Orientation, PolygonScalar};

/// $O(n^3)$ Convex hull edges by exhaustive edge validation.
///
/// Every ordered pair `(i, j)` with `i != j` is a candidate directed edge. It
/// is accepted when no other point lies strictly on its clockwise side, i.e.
/// when [`Orientation::turn_value`] is non-positive for every `k ∉ {i, j}`.
/// Accepted edges contribute `pts[i]` followed by `pts[j]` to the output.
///
/// The result is a flat edge list, not a polygon: its length is twice the
/// number of accepted edges and every hull vertex normally appears twice.
/// Colinear and duplicate points may produce extra edges.
///
/// Inputs with fewer than three points are returned unchanged.
///
/// # Examples
///
/// ```rust
/// # use convexity::algorithms::convex_hull::brute_force::convex_hull;
/// # use convexity::data::Point;
/// let triangle = vec![Point::new([0, 0]), Point::new([4, 0]), Point::new([0, 3])];
/// let edges = convex_hull(&triangle);
/// assert_eq!(edges, vec![
///   Point::new([0, 0]), Point::new([4, 0]),
///   Point::new([4, 0]), Point::new([0, 3]),
///   Point::new([0, 3]), Point::new([0, 0]),
/// ]);
/// ```
pub fn convex_hull<T>(pts: &[Point<T>]) -> Vec<Point<T>>
where
  T: PolygonScalar,
{
  let n = pts.len();
  if n < 3 {
    return pts.to_vec();
  }
  let mut hull = Vec::new();
  for i in 0..n {
    for j in 0..n {
      if i == j {
        continue;
      }
      let (src, dst) = (&pts[i], &pts[j]);
      let is_edge = (0..n)
        .filter(|&k| k != i && k != j)
        .all(|k| Orientation::turn_value(src, dst, &pts[k]) <= T::zero());
      if is_edge {
        hull.push(*src);
        hull.push(*dst);
      }
    }
  }
  hull
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::collection::*;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn square_edges() {
    let square = square_f64();
    let [a, b, c, d] = [square[0], square[1], square[2], square[3]];
    assert_eq!(convex_hull(&square), vec![a, b, b, c, c, d, d, a]);
  }

  #[test]
  fn interior_point_is_dropped() {
    let mut pts = square_f64();
    pts.push(Point::new([5.0, 5.0]));
    let hull = convex_hull(&pts);
    assert_eq!(hull.len(), 8);
    assert!(!hull.contains(&Point::new([5.0, 5.0])));
  }

  #[test]
  fn colinear_boundary_point() {
    // (5,0) sits on the bottom edge. Both the long edge and its two halves pass.
    let pts = vec![
      Point::new([0, 0]),
      Point::new([10, 0]),
      Point::new([10, 10]),
      Point::new([5, 0]),
    ];
    let hull = convex_hull(&pts);
    assert_eq!(
      hull,
      vec![
        Point::new([0, 0]),
        Point::new([10, 0]),
        Point::new([0, 0]),
        Point::new([5, 0]),
        Point::new([10, 0]),
        Point::new([10, 10]),
        Point::new([10, 10]),
        Point::new([0, 0]),
        Point::new([5, 0]),
        Point::new([10, 0]),
      ]
    );
  }

  #[test]
  fn small_inputs() {
    let pts = vec![Point::new([1, 1]), Point::new([2, 2])];
    assert_eq!(convex_hull(&pts), pts);
    assert_eq!(convex_hull::<i32>(&[]), vec![]);
  }

  #[proptest]
  fn output_is_even_and_from_input(#[strategy(vec(any_grid(), 0..20))] pts: Vec<Point<i64>>) {
    let hull = convex_hull(&pts);
    if pts.len() >= 3 {
      prop_assert_eq!(hull.len() % 2, 0);
    }
    for pt in hull.iter() {
      prop_assert!(pts.contains(pt));
    }
  }

  #[proptest]
  fn accepted_edges_keep_points_left(#[strategy(vec(any_grid(), 3..20))] pts: Vec<Point<i64>>) {
    let hull = convex_hull(&pts);
    for edge in hull.chunks(2) {
      for pt in pts.iter() {
        prop_assert!(!Point::orient(&edge[0], &edge[1], pt).is_cw());
      }
    }
  }
}
