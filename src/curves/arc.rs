//! Quarter-ellipse boundary curves (production possibility frontiers).

use num_traits::Float;

use crate::error::FigureError;
use crate::primitives::Extent;
use crate::style::Style;

/// A quarter-ellipse `y = ymax*sqrt(1 - (x/xmax)^2)` over `[xmin, xmax]`.
///
/// The extents double as the ellipse radii: the curve runs from `(0, ymax)`
/// down to `(xmax, 0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterArc<F> {
    /// Declared visible extent; `xmax`/`ymax` are also the ellipse radii.
    pub extent: Extent<F>,
    pub label: Option<String>,
    pub style: Style,
}

impl<F: Float> QuarterArc<F> {
    /// Creates a quarter-ellipse with the given radii.
    ///
    /// Fails with [`FigureError::InvalidExtent`] unless both radii are
    /// strictly positive.
    pub fn new(xmax: F, ymax: F) -> Result<Self, FigureError> {
        if xmax <= F::zero() || ymax <= F::zero() {
            return Err(FigureError::InvalidExtent);
        }
        Ok(Self {
            extent: Extent::new(F::zero(), xmax, F::zero(), ymax),
            label: None,
            style: Style::default(),
        })
    }

    /// Evaluates the arc at `x`.
    ///
    /// Fails with [`FigureError::NoRealRoot`] outside `[-xmax, xmax]`.
    pub fn eval(&self, x: F) -> Result<F, FigureError> {
        let t = x / self.extent.xmax;
        let radicand = F::one() - t * t;
        if radicand < F::zero() {
            return Err(FigureError::NoRealRoot);
        }
        Ok(self.extent.ymax * radicand.sqrt())
    }

    /// Returns this arc with a label.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }

    /// Returns this arc with a style.
    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints() {
        let arc: QuarterArc<f64> = QuarterArc::new(8.0, 6.0).unwrap();
        assert_relative_eq!(arc.eval(0.0).unwrap(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(arc.eval(8.0).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_on_ellipse() {
        let arc: QuarterArc<f64> = QuarterArc::new(8.0, 6.0).unwrap();
        let x = 4.0;
        let y = arc.eval(x).unwrap();
        let lhs = (x / 8.0).powi(2) + (y / 6.0).powi(2);
        assert_relative_eq!(lhs, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_extent() {
        assert_eq!(
            QuarterArc::<f64>::new(0.0, 6.0).unwrap_err(),
            FigureError::InvalidExtent
        );
        assert_eq!(
            QuarterArc::<f64>::new(8.0, -1.0).unwrap_err(),
            FigureError::InvalidExtent
        );
    }

    #[test]
    fn test_eval_outside_domain() {
        let arc: QuarterArc<f64> = QuarterArc::new(8.0, 6.0).unwrap();
        assert_eq!(arc.eval(9.0).unwrap_err(), FigureError::NoRealRoot);
    }
}
