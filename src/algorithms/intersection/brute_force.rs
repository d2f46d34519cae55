use crate::data::Point;
use crate::PolygonScalar;

use super::{folds_back, pairs, polygon_edges, segments_intersect, Crossing};

/// First self-intersection of the closed polygon through `pts`, checking every
/// pair of edges.
///
/// Pairs are visited by ascending first index, then ascending second index.
/// Edges that are not neighbours are tested with [`segments_intersect`].
/// Neighbouring edges always share a vertex, so for them only a fold-back
/// counts: both edges on one line, running back over each other.
///
/// # Time complexity
/// $O(n^2)$
///
/// # Panics
///
/// Panics if `pts` is empty.
pub fn self_intersection<T>(pts: &[Point<T>]) -> Option<Crossing<T>>
where
  T: PolygonScalar,
{
  let edges = polygon_edges(pts);
  let m = edges.len();
  pairs(m)
    .find(|&(i, j)| {
      if j == i + 1 {
        folds_back(&edges[i], &edges[j])
      } else if i == 0 && j + 1 == m {
        folds_back(&edges[j], &edges[i])
      } else {
        segments_intersect(&edges[i], &edges[j])
      }
    })
    .map(|(i, j)| Crossing::new(&edges, i, j))
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  fn pts(coords: &[(i64, i64)]) -> Vec<Point<i64>> {
    coords.iter().map(|&pt| pt.into()).collect()
  }

  #[test]
  fn square_is_simple() {
    assert_eq!(self_intersection(&square_f64()), None);
  }

  #[test]
  fn triangle_is_simple() {
    assert_eq!(self_intersection(&pts(&[(0, 0), (10, 0), (5, 10)])), None);
  }

  #[test]
  fn bowtie() {
    let bowtie = pts(&[(0, 0), (10, 10), (10, 0), (0, 10)]);
    let crossing = self_intersection(&bowtie).unwrap();
    assert_eq!((crossing.first_index, crossing.second_index), (0, 2));
    assert_eq!(crossing.first, ((0, 0), (10, 10)).into());
    assert_eq!(crossing.second, ((10, 0), (0, 10)).into());
  }

  #[test]
  fn closing_edge_crossing() {
    let input = pts(&[(0, 0), (0, 10), (10, 0), (10, 10)]);
    let crossing = self_intersection(&input).unwrap();
    assert_eq!((crossing.first_index, crossing.second_index), (1, 3));
  }

  #[test]
  fn neighbours_folding_back() {
    let input = pts(&[(0, 0), (10, 0), (5, 0), (5, 5)]);
    let crossing = self_intersection(&input).unwrap();
    assert_eq!((crossing.first_index, crossing.second_index), (0, 1));
  }

  #[test]
  fn closing_edge_folding_back() {
    // The closing edge (0,12)->(0,0) covers the first edge (0,0)->(0,8).
    let input = pts(&[(0, 0), (0, 8), (5, 10), (0, 12)]);
    let crossing = self_intersection(&input).unwrap();
    assert_eq!((crossing.first_index, crossing.second_index), (0, 3));
  }

  #[test]
  fn straight_run_is_simple() {
    let input = pts(&[(0, 0), (5, 0), (10, 0), (10, 10), (0, 10)]);
    assert_eq!(self_intersection(&input), None);
  }
}
