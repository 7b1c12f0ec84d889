//! econsketch is a figure-description engine for instructional economics
//! diagrams.
//!
//! Curves are fit from the constraints an economist states (two points, a
//! point and a slope, a marginal-cost relation), collected on an [`Axis`],
//! and rendered to an ordered list of backend-agnostic [`DrawDirective`]s.
//! Clipping against the axis viewport happens at render time, so the same
//! curve can appear on differently sized axes.
//!
//! ```
//! use econsketch::{Axis, DrawDirective, Line, Marker, Point2};
//!
//! let supply = Line::from_two_points(Point2::new(0.0, 2.0), Point2::new(8.0, 10.0))?;
//! let demand = Line::new(10.0, -1.0);
//! let equilibrium = supply.intersect(&demand)?;
//!
//! let mut axis = Axis::new(11.0, 11.0).with_title("Market");
//! axis.add(supply);
//! axis.add(demand);
//! axis.add_solution_only(Marker::new(equilibrium).with_label("E"));
//!
//! let directives = axis.render(true);
//! assert!(matches!(directives[0], DrawDirective::Frame { .. }));
//! # Ok::<(), econsketch::FigureError>(())
//! ```

pub mod curves;
pub mod error;
pub mod format;
pub mod game;
pub mod primitives;
pub mod render;
pub mod style;

pub use curves::{
    CesIndifferenceCurve, Line, Parabola, PiecewiseCostCurve, QuarterArc, RationalCostCurve,
};
pub use error::FigureError;
pub use format::{format_scaled, NumKind, ScaleSpec, Unit};
pub use game::{NormalForm, QuantityGame};
pub use primitives::{Extent, Point2, Viewport};
pub use render::{
    Axis, CurveFunction, DrawDirective, DropLine, DropTarget, Marker, MultiAxis, Segment, Shape,
};
pub use style::{Color, LabelPos, LabelSize, Style};
