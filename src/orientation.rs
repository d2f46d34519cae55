use crate::PolygonScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The sign of [`Orientation::turn_value`] decides: zero is
  /// [`CoLinear`](Orientation::CoLinear), positive is
  /// [`ClockWise`](Orientation::ClockWise) and negative is
  /// [`CounterClockWise`](Orientation::CounterClockWise). The zero test is
  /// exact; no tolerance is applied to floating point input.
  ///
  /// This function works with anything that dereferences to `[T; 2]`. You
  /// should prefer to use [Point::orient](crate::data::Point::orient) when
  /// possible.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use convexity::data::Point;
  /// # use convexity::Orientation;
  /// let p1 = Point::new([ 0, 0 ]);
  /// let p2 = Point::new([ 1, 0 ]); // One unit right of p1.
  /// // (0,0) -> (1,0) -> (2,0) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 2, 0 ])).is_colinear());
  /// // (0,0) -> (1,0) -> (1,1) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1, 1 ])).is_ccw());
  /// // (0,0) -> (1,0) -> (1,-1) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1, -1 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: PolygonScalar,
  {
    let val = Orientation::turn_value(p1, p2, p3);
    if val == T::zero() {
      CoLinear
    } else if val > T::zero() {
      ClockWise
    } else {
      CounterClockWise
    }
  }

  /// Raw cross product `(p2.y-p1.y)*(p3.x-p2.x) - (p2.x-p1.x)*(p3.y-p2.y)`.
  ///
  /// Warning: May cause arithmetic overflow for fixed-precision types.
  pub fn turn_value<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> T
  where
    T: PolygonScalar,
  {
    (p2[1] - p1[1]) * (p3[0] - p2[0]) - (p2[0] - p1[0]) * (p3[1] - p2[1])
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
