use array_init::array_init;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Deref;

use crate::{Orientation, PolygonScalar, TotalOrd};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T, const N: usize = 2> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  pub fn map<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<Point<T, 2>> for (T, T) {
  fn from(point: Point<T, 2>) -> (T, T) {
    let [x, y] = point.array;
    (x, y)
  }
}

// Methods on two-dimensional points.
impl<T> Point<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }
  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  /// Turn taken when walking `p1 -> p2 -> p3`. See [`Orientation::new`].
  pub fn orient(p1: &Point<T, 2>, p2: &Point<T, 2>, p3: &Point<T, 2>) -> Orientation
  where
    T: PolygonScalar,
  {
    Orientation::new(&p1.array, &p2.array, &p3.array)
  }

  /// Lexicographic order: x first, then y. Total even for floats.
  pub fn lex_cmp(&self, other: &Point<T, 2>) -> Ordering
  where
    T: TotalOrd,
  {
    TotalOrd::total_cmp(
      &(self.x_coord(), self.y_coord()),
      &(other.x_coord(), other.y_coord()),
    )
  }

  /// Inclusive bounding-box test: is `self` within the axis-aligned box
  /// spanned by `a` and `b`? Both axes are checked independently.
  pub fn within_box(&self, a: &Point<T, 2>, b: &Point<T, 2>) -> bool
  where
    T: PolygonScalar,
  {
    let within = |v: T, lo: T, hi: T| {
      let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
      lo <= v && v <= hi
    };
    within(self.array[0], a.array[0], b.array[0]) && within(self.array[1], a.array[1], b.array[1])
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}
