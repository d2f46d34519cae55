pub mod convex_hull;
pub mod intersection;

#[doc(inline)]
pub use convex_hull::{graham_scan::convex_hull, HullAlgorithm};

#[doc(inline)]
pub use intersection::{polygon_edges, segments_intersect, Crossing, IntersectionPolicy};
