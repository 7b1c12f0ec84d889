//! Affine lines: supply, demand, and marginal-cost relationships.

use num_traits::Float;

use crate::error::FigureError;
use crate::primitives::{Extent, Point2};
use crate::style::Style;

/// An affine curve `y = a + b*x`.
///
/// `a` is the intercept and `b` the slope. A line may have any slope for pure
/// evaluation; inversion and intersection require a nonzero / distinct slope
/// and fail otherwise.
///
/// # Example
///
/// ```
/// use econsketch::{Line, Point2};
///
/// let demand: Line<f64> = Line::from_two_points(
///     Point2::new(0.0, 10.0),
///     Point2::new(10.0, 0.0),
/// ).unwrap();
/// assert_eq!(demand.intercept, 10.0);
/// assert_eq!(demand.slope, -1.0);
/// assert_eq!(demand.eval(5.0), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Line<F> {
    /// Intercept `a`.
    pub intercept: F,
    /// Slope `b`.
    pub slope: F,
    /// Declared visible extent, intersected with the viewport at render time.
    pub extent: Extent<F>,
    pub label: Option<String>,
    pub style: Style,
}

impl<F: Float> Line<F> {
    /// Creates a line from intercept and slope.
    ///
    /// The default extent is `[0, 999] x [0, 999]`, wide enough that the
    /// viewport does the clipping.
    pub fn new(intercept: F, slope: F) -> Self {
        let hi = F::from(999.0).unwrap();
        Self {
            intercept,
            slope,
            extent: Extent::new(F::zero(), hi, F::zero(), hi),
            label: None,
            style: Style::default(),
        }
    }

    /// Fits the line passing through two points.
    ///
    /// Fails with [`FigureError::DegenerateGeometry`] when the points share an
    /// x coordinate (the slope would be undefined).
    pub fn from_two_points(a: Point2<F>, b: Point2<F>) -> Result<Self, FigureError> {
        if a.x == b.x {
            return Err(FigureError::DegenerateGeometry);
        }
        let slope = (a.y - b.y) / (a.x - b.x);
        let intercept = a.y - slope * a.x;
        Ok(Self::new(intercept, slope))
    }

    /// Evaluates `a + b*x`.
    #[inline]
    pub fn eval(&self, x: F) -> F {
        self.intercept + self.slope * x
    }

    /// Inverts the line: the `x` at which the line attains `y`.
    ///
    /// Fails with [`FigureError::UndefinedSlope`] on a flat line.
    pub fn inv_eval(&self, y: F) -> Result<F, FigureError> {
        if self.slope == F::zero() {
            return Err(FigureError::UndefinedSlope);
        }
        Ok(-self.intercept / self.slope + y / self.slope)
    }

    /// Intersects two lines, returning the crossing point.
    ///
    /// Fails with [`FigureError::ParallelLines`] when the slopes coincide.
    pub fn intersect(&self, other: &Self) -> Result<Point2<F>, FigureError> {
        if self.slope == other.slope {
            return Err(FigureError::ParallelLines);
        }
        let x = (self.intercept - other.intercept) / (other.slope - self.slope);
        Ok(Point2::new(x, self.eval(x)))
    }

    /// Returns this line with a different declared extent.
    pub fn with_extent(self, extent: Extent<F>) -> Self {
        Self { extent, ..self }
    }

    /// Returns this line with a label.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }

    /// Returns this line with a style.
    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_two_points() {
        let l: Line<f64> =
            Line::from_two_points(Point2::new(0.0, 10.0), Point2::new(10.0, 0.0)).unwrap();
        assert_relative_eq!(l.intercept, 10.0, epsilon = 1e-12);
        assert_relative_eq!(l.slope, -1.0, epsilon = 1e-12);
        assert_relative_eq!(l.eval(5.0), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_reproduces_both_points() {
        let a = Point2::new(2.0, 7.0);
        let b = Point2::new(9.0, 1.5);
        let l: Line<f64> = Line::from_two_points(a, b).unwrap();
        assert_relative_eq!(l.eval(a.x), a.y, epsilon = 1e-12);
        assert_relative_eq!(l.eval(b.x), b.y, epsilon = 1e-12);
    }

    #[test]
    fn test_from_two_points_degenerate() {
        let r: Result<Line<f64>, _> =
            Line::from_two_points(Point2::new(3.0, 1.0), Point2::new(3.0, 8.0));
        assert_eq!(r.unwrap_err(), FigureError::DegenerateGeometry);
    }

    #[test]
    fn test_inv_eval_roundtrip() {
        let l: Line<f64> = Line::new(10.0, -1.0);
        let y = l.eval(3.0);
        assert_relative_eq!(l.inv_eval(y).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inv_eval_flat() {
        let l: Line<f64> = Line::new(4.0, 0.0);
        assert_eq!(l.inv_eval(4.0).unwrap_err(), FigureError::UndefinedSlope);
    }

    #[test]
    fn test_intersect() {
        let demand: Line<f64> = Line::new(10.0, -1.0);
        let supply = Line::new(2.0, 1.0);
        let eq = demand.intersect(&supply).unwrap();
        assert_relative_eq!(eq.x, 4.0, epsilon = 1e-12);
        assert_relative_eq!(eq.y, 6.0, epsilon = 1e-12);
        // The crossing lies on both lines.
        assert_relative_eq!(demand.eval(eq.x), supply.eval(eq.x), epsilon = 1e-12);
    }

    #[test]
    fn test_intersect_parallel() {
        let a: Line<f64> = Line::new(10.0, -1.0);
        let b = Line::new(4.0, -1.0);
        assert_eq!(a.intersect(&b).unwrap_err(), FigureError::ParallelLines);
    }

    #[test]
    fn test_default_extent_is_wide() {
        let l: Line<f64> = Line::new(0.0, 1.0);
        assert_eq!(l.extent.xmax, 999.0);
        assert_eq!(l.extent.xmin, 0.0);
    }
}
