//! Floating-point geometric primitives.

mod extent;
mod point2;

pub use extent::{Extent, Viewport};
pub use point2::Point2;
