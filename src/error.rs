//! Error types for curve fitting and figure construction.

use thiserror::Error;

/// Errors raised by curve fits, evaluations, and figure construction.
///
/// Every kind is detected at the point of the invalid fit or operation and
/// surfaces to the caller; nothing is retried or silently propagated as NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FigureError {
    /// Two fit points coincide in the dimension the fit needs.
    #[error("degenerate geometry: fit points share a coordinate")]
    DegenerateGeometry,

    /// The linear system behind a curve fit has no unique solution.
    #[error("singular fit: linear system has no unique solution")]
    SingularFit,

    /// Inversion requested on a line with zero slope.
    #[error("undefined slope: a flat line cannot be inverted")]
    UndefinedSlope,

    /// Intersection requested on lines with equal slopes.
    #[error("parallel lines do not intersect")]
    ParallelLines,

    /// Inverse evaluation at a value the curve never attains.
    #[error("no real root: the curve never attains the requested value")]
    NoRealRoot,

    /// Minimum requested on a curve configuration without one.
    #[error("undefined minimum for this curve configuration")]
    UndefinedMinimum,

    /// The CES curvature parameter rho must be nonzero.
    #[error("invalid curvature: rho must be nonzero")]
    InvalidCurvature,

    /// The CES share parameter is undefined for these inputs.
    #[error("degenerate fit: share parameter is undefined")]
    DegenerateFit,

    /// Arc extents must be strictly positive.
    #[error("invalid extent: arc extents must be positive")]
    InvalidExtent,
}
