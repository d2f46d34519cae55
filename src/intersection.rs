/// Pairwise intersection between geometric objects.
///
/// `None` means the objects are disjoint.
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
