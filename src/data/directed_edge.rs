use super::Point;
use crate::algorithms::intersection::{segment_contact, Contact};
use crate::{Intersects, PolygonScalar};

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
// Directed edge from A to B, both endpoints included.
pub struct DirectedEdge<T, const N: usize = 2> {
  pub src: Point<T, N>,
  pub dst: Point<T, N>,
}

impl<T, const N: usize> DirectedEdge<T, N> {
  pub fn new(src: Point<T, N>, dst: Point<T, N>) -> DirectedEdge<T, N> {
    DirectedEdge { src, dst }
  }

  #[must_use]
  pub fn reversed(self) -> DirectedEdge<T, N> {
    DirectedEdge {
      src: self.dst,
      dst: self.src,
    }
  }
}

impl<T> DirectedEdge<T, 2> {
  /// True if `pt` is inside the edge's inclusive bounding box. This is the
  /// on-segment test used for colinear contacts; it does not check that `pt`
  /// is on the supporting line.
  pub fn bounds(&self, pt: &Point<T, 2>) -> bool
  where
    T: PolygonScalar,
  {
    pt.within_box(&self.src, &self.dst)
  }
}

impl<T> From<(Point<T, 2>, Point<T, 2>)> for DirectedEdge<T, 2> {
  fn from((src, dst): (Point<T, 2>, Point<T, 2>)) -> DirectedEdge<T, 2> {
    DirectedEdge { src, dst }
  }
}

impl<T> From<((T, T), (T, T))> for DirectedEdge<T, 2> {
  fn from((src, dst): ((T, T), (T, T))) -> DirectedEdge<T, 2> {
    DirectedEdge {
      src: src.into(),
      dst: dst.into(),
    }
  }
}

impl<'a, T> Intersects for &'a DirectedEdge<T, 2>
where
  T: PolygonScalar,
{
  type Result = Contact;
  fn intersect(self, other: &'a DirectedEdge<T, 2>) -> Option<Self::Result> {
    segment_contact(self, other)
  }
}
