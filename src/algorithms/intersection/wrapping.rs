use crate::data::Point;
use crate::PolygonScalar;

use super::{adjacent, pairs, polygon_edges, segments_intersect, Crossing};

/// First self-intersection of the closed polygon through `pts`, skipping
/// neighbouring edges.
///
/// Edge `i` and edge `i + 1` are never compared, nor are the first and the
/// closing edge. Every other pair, including pairs that involve the closing
/// edge, is tested with [`segments_intersect`] in ascending index order. A
/// fold-back between neighbours is therefore only noticed if it also reaches
/// a non-neighbouring edge.
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
    .filter(|&(i, j)| !adjacent(i, j, m))
    .find(|&(i, j)| segments_intersect(&edges[i], &edges[j]))
    .map(|(i, j)| Crossing::new(&edges, i, j))
}
