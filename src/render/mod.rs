//! Figure assembly: axes, shape dispatch, and the directive vocabulary.

mod axis;
mod directive;
mod multi;
mod shape;

pub use axis::Axis;
pub use directive::{CurveFunction, DrawDirective};
pub use multi::MultiAxis;
pub use shape::{DropLine, DropTarget, Marker, Segment, Shape};
