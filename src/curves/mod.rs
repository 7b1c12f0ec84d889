//! Analytic curve families fit from economic constraints.

mod arc;
mod ces;
mod cost;
mod line;
mod parabola;

pub use arc::QuarterArc;
pub use ces::CesIndifferenceCurve;
pub use cost::{PiecewiseCostCurve, RationalCostCurve};
pub use line::Line;
pub use parabola::Parabola;
