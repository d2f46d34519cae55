//! Segment intersection and polygon self-intersection.
//!
//! [`segments_intersect`] is the pairwise test. [`brute_force`] and
//! [`wrapping`] run it over the edges of a closed polygon and report the first
//! crossing pair, in order of the first edge index and then the second.
use std::fmt;
use std::str::FromStr;

use crate::data::{DirectedEdge, Point};
use crate::{Error, PolygonScalar};

pub mod brute_force;
pub mod wrapping;

/// How two segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contact {
  /// Each segment's endpoints are on different sides of the other segment's
  /// line. One endpoint may lie on the line.
  General,
  /// An endpoint of one segment is colinear with the other segment and inside
  /// its bounding box.
  CoLinear,
}

/// Classify how `a` and `b` meet, or `None` if they are disjoint.
///
/// With `a = (p1, q1)` and `b = (p2, q2)`, the four turns
/// `o1 = (p1, q1, p2)`, `o2 = (p1, q1, q2)`, `o3 = (p2, q2, p1)` and
/// `o4 = (p2, q2, q1)` decide. `o1 != o2 && o3 != o4` is a general contact.
/// Otherwise each colinear turn is checked, in order, against the inclusive
/// bounding box of the segment it was measured against.
pub fn segment_contact<T>(a: &DirectedEdge<T>, b: &DirectedEdge<T>) -> Option<Contact>
where
  T: PolygonScalar,
{
  let (p1, q1) = (&a.src, &a.dst);
  let (p2, q2) = (&b.src, &b.dst);
  let o1 = Point::orient(p1, q1, p2);
  let o2 = Point::orient(p1, q1, q2);
  let o3 = Point::orient(p2, q2, p1);
  let o4 = Point::orient(p2, q2, q1);

  if o1 != o2 && o3 != o4 {
    return Some(Contact::General);
  }
  let touching = (o1.is_colinear() && a.bounds(p2))
    || (o2.is_colinear() && a.bounds(q2))
    || (o3.is_colinear() && b.bounds(p1))
    || (o4.is_colinear() && b.bounds(q1));
  touching.then_some(Contact::CoLinear)
}

/// Do the closed segments `a` and `b` share at least one point?
///
/// Shared endpoints count as an intersection.
///
/// # Examples
///
/// ```rust
/// # use convexity::algorithms::segments_intersect;
/// # use convexity::data::DirectedEdge;
/// let a: DirectedEdge<f64> = ((0.0, 0.0), (10.0, 10.0)).into();
/// let b: DirectedEdge<f64> = ((0.0, 10.0), (10.0, 0.0)).into();
/// let c: DirectedEdge<f64> = ((0.0, 5.0), (1.0, 5.0)).into();
/// assert!(segments_intersect(&a, &b));
/// assert!(!segments_intersect(&a, &c));
/// ```
pub fn segments_intersect<T>(a: &DirectedEdge<T>, b: &DirectedEdge<T>) -> bool
where
  T: PolygonScalar,
{
  segment_contact(a, b).is_some()
}

/// Edges of the closed polygon through `pts`: edge `i` runs from `pts[i]` to
/// `pts[i + 1]`, and the last edge closes the ring back to `pts[0]`.
///
/// Self-intersection tests expect at least four points; this is not checked.
///
/// # Panics
///
/// Panics if `pts` is empty.
pub fn polygon_edges<T>(pts: &[Point<T>]) -> Vec<DirectedEdge<T>>
where
  T: Copy,
{
  let last = pts[pts.len() - 1];
  pts
    .windows(2)
    .map(|pair| DirectedEdge::new(pair[0], pair[1]))
    .chain(std::iter::once(DirectedEdge::new(last, pts[0])))
    .collect()
}

/// First pair of polygon edges found to intersect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing<T> {
  pub first_index: usize,
  pub second_index: usize,
  pub first: DirectedEdge<T>,
  pub second: DirectedEdge<T>,
}

impl<T: Copy> Crossing<T> {
  fn new(edges: &[DirectedEdge<T>], first_index: usize, second_index: usize) -> Crossing<T> {
    Crossing {
      first_index,
      second_index,
      first: edges[first_index],
      second: edges[second_index],
    }
  }

  pub fn edges(&self) -> [DirectedEdge<T>; 2] {
    [self.first, self.second]
  }
}

/// Unordered index pairs `i < j` of `m` edges, `i` ascending, then `j`.
fn pairs(m: usize) -> impl Iterator<Item = (usize, usize)> {
  (0..m).flat_map(move |i| (i + 1..m).map(move |j| (i, j)))
}

/// Neighbouring edges in a closed ring of `m` edges: consecutive indices, or
/// the first and the last edge.
fn adjacent(i: usize, j: usize, m: usize) -> bool {
  j == i + 1 || (i == 0 && j + 1 == m)
}

/// Neighbouring edges `prev` and `next`, joined at `prev.dst`, run back over
/// each other: the three vertices are colinear and the segments share more
/// than the joint.
fn folds_back<T>(prev: &DirectedEdge<T>, next: &DirectedEdge<T>) -> bool
where
  T: PolygonScalar,
{
  let joint = &prev.dst;
  Point::orient(&prev.src, joint, &next.dst).is_colinear()
    && ((next.dst != *joint && prev.bounds(&next.dst))
      || (prev.src != *joint && next.bounds(&prev.src)))
}

/// Outer loop used to look for a self-intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionPolicy {
  /// Examine every pair of edges. See [`brute_force`].
  BruteForce,
  /// Skip neighbouring edges. See [`wrapping`].
  Wrapping,
}

impl IntersectionPolicy {
  pub const ALL: [IntersectionPolicy; 2] =
    [IntersectionPolicy::Wrapping, IntersectionPolicy::BruteForce];

  pub const MIN_POINTS: usize = 4;

  pub fn name(self) -> &'static str {
    match self {
      IntersectionPolicy::BruteForce => "brute-force",
      IntersectionPolicy::Wrapping => "jarvis-march",
    }
  }

  /// The policy that is not `self`.
  #[must_use]
  pub fn other(self) -> IntersectionPolicy {
    match self {
      IntersectionPolicy::BruteForce => IntersectionPolicy::Wrapping,
      IntersectionPolicy::Wrapping => IntersectionPolicy::BruteForce,
    }
  }

  /// First self-intersection of the closed polygon through `pts`.
  ///
  /// # Panics
  ///
  /// Panics if `pts` is empty.
  pub fn run<T>(self, pts: &[Point<T>]) -> Option<Crossing<T>>
  where
    T: PolygonScalar,
  {
    match self {
      IntersectionPolicy::BruteForce => brute_force::self_intersection(pts),
      IntersectionPolicy::Wrapping => wrapping::self_intersection(pts),
    }
  }

  /// Like [`IntersectionPolicy::run`], but refuses polygons with fewer than
  /// [`IntersectionPolicy::MIN_POINTS`] vertices.
  pub fn checked_run<T>(self, pts: &[Point<T>]) -> Result<Option<Crossing<T>>, Error>
  where
    T: PolygonScalar,
  {
    if pts.len() < IntersectionPolicy::MIN_POINTS {
      return Err(Error::InsufficientVertices);
    }
    Ok(self.run(pts))
  }
}

impl fmt::Display for IntersectionPolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for IntersectionPolicy {
  type Err = Error;
  fn from_str(s: &str) -> Result<IntersectionPolicy, Error> {
    let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
    match key.as_str() {
      "brute-force" | "brute" => Ok(IntersectionPolicy::BruteForce),
      "jarvis-march" | "jarvis" | "wrapping" => Ok(IntersectionPolicy::Wrapping),
      _ => Err(Error::UnknownAlgorithm(s.to_string())),
    }
  }
}
