mod directed_edge;
pub(crate) mod point;

pub use directed_edge::*;
pub use point::Point;
