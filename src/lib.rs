#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Planar convex hulls and polygon self-intersection tests.
//!
//! Every algorithm is a free function over a slice of [`Point`](data::Point)s.
//! Callers' slices are never reordered: algorithms that sort work on a copy.
use num_traits::*;
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
mod intersection;
pub mod io;
mod orientation;

pub use orientation::Orientation;

pub use intersection::Intersects;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  /// Name did not match any known hull algorithm or intersection policy.
  UnknownAlgorithm(String),
  /// Malformed line in a point file. Lines are 1-based.
  Parse {
    line: usize,
    message: String,
  },
  Io(String),
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::UnknownAlgorithm(name) => write!(f, "Unknown algorithm: {}", name),
      Error::Parse { line, message } => write!(f, "Line {}: {}", line, message),
      Error::Io(message) => write!(f, "I/O error: {}", message),
    }
  }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
  fn from(err: std::io::Error) -> Error {
    Error::Io(err.to_string())
  }
}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Coordinate type accepted by every algorithm in this crate.
///
/// Arithmetic is plain: no exact predicates, no epsilon. Fixed-precision
/// types may overflow on large coordinates.
pub trait PolygonScalar:
  std::fmt::Debug + Copy + NumOps<Self, Self> + Zero + PartialOrd + TotalOrd
{
}

macro_rules! fixed_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl PolygonScalar for $ty {}
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl PolygonScalar for $ty {}
    )*
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl PolygonScalar for $ty {}
    )*
  };
}

fixed_precision!(i8, i16, i32, i64, isize);
wrapped_floating_precision!(ordered_float::OrderedFloat<f32>);
wrapped_floating_precision!(ordered_float::OrderedFloat<f64>);
floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
