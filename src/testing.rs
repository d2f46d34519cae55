// Strategies for property tests:
//  * points on a bounded integer grid
//  * point sets in general position
use crate::data::Point;

use core::ops::Range;
use proptest::collection::*;
use proptest::prelude::*;

// Coordinates are kept small so that orientation products never overflow and
// float copies of grid points stay exact.
const GRID: Range<i64> = -1000..1000;

pub fn any_grid() -> impl Strategy<Value = Point<i64>> {
  (GRID, GRID).prop_map(Point::from)
}

pub fn any_grid_f64() -> impl Strategy<Value = Point<f64>> {
  any_grid().prop_map(|pt| pt.map(|v| v as f64))
}

// Distinct points, no three on a line.
pub fn general_position(size: Range<usize>) -> impl Strategy<Value = Vec<Point<i64>>> {
  vec(any_grid(), size).prop_filter("points must be in general position", |pts| {
    is_general_position(pts)
  })
}

pub fn is_general_position(pts: &[Point<i64>]) -> bool {
  let n = pts.len();
  for i in 0..n {
    for j in i + 1..n {
      if pts[i] == pts[j] {
        return false;
      }
      for k in j + 1..n {
        if Point::orient(&pts[i], &pts[j], &pts[k]).is_colinear() {
          return false;
        }
      }
    }
  }
  true
}

pub fn square_f64() -> Vec<Point<f64>> {
  vec![
    Point::new([0.0, 0.0]),
    Point::new([10.0, 0.0]),
    Point::new([10.0, 10.0]),
    Point::new([0.0, 10.0]),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  use test_strategy::proptest;

  #[test]
  fn colinear_is_rejected() {
    let pts = vec![Point::new([0, 0]), Point::new([1, 1]), Point::new([2, 2])];
    assert!(!is_general_position(&pts));
  }

  #[test]
  fn duplicates_are_rejected() {
    let pts = vec![Point::new([0, 0]), Point::new([0, 0])];
    assert!(!is_general_position(&pts));
  }

  #[proptest]
  fn grid_is_bounded(#[strategy(any_grid())] pt: Point<i64>) {
    prop_assert!(GRID.contains(pt.x_coord()));
    prop_assert!(GRID.contains(pt.y_coord()));
  }
}
