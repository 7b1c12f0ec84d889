//! Constant-elasticity-of-substitution indifference curves.

use num_traits::Float;

use crate::error::FigureError;
use crate::primitives::{Extent, Point2};
use crate::style::Style;

/// A CES indifference curve, the level set
///
/// ```text
/// alpha*x^rho + (1 - alpha)*y^rho = u0^rho
/// ```
///
/// fit from a point on the curve, the slope of the curve at that point, and
/// the curvature parameter `rho`. The fit solves for the share parameter
/// `alpha` and the utility level `u0`:
///
/// ```text
/// alpha = -y0^(rho-1)*m / (x0^(rho-1) - y0^(rho-1)*m)
/// u0    = (alpha*x0^rho + (1 - alpha)*y0^rho)^(1/rho)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CesIndifferenceCurve<F> {
    /// Share parameter `alpha`.
    pub alpha: F,
    /// Utility level `u0`.
    pub utility: F,
    /// Curvature parameter `rho`.
    pub rho: F,
    /// Declared visible extent, intersected with the viewport at render time.
    pub extent: Extent<F>,
    pub label: Option<String>,
    pub style: Style,
}

impl<F: Float> CesIndifferenceCurve<F> {
    /// Fits the curve through `point` with the given `slope` there.
    ///
    /// Fails with [`FigureError::InvalidCurvature`] when `rho == 0` and with
    /// [`FigureError::DegenerateFit`] when the share parameter is undefined
    /// for these inputs.
    pub fn from_point_slope(point: Point2<F>, slope: F, rho: F) -> Result<Self, FigureError> {
        if rho == F::zero() {
            return Err(FigureError::InvalidCurvature);
        }

        let one = F::one();
        let xp = point.x.powf(rho - one);
        let yp = point.y.powf(rho - one);
        let denom = xp - yp * slope;
        if denom == F::zero() {
            return Err(FigureError::DegenerateFit);
        }
        let alpha = -yp * slope / denom;
        if alpha == one {
            // The level set would have no y term left to solve for.
            return Err(FigureError::DegenerateFit);
        }
        let utility = (alpha * point.x.powf(rho) + (one - alpha) * point.y.powf(rho))
            .powf(one / rho);

        let lo = one;
        let hi = F::from(99.0).unwrap();
        Ok(Self {
            alpha,
            utility,
            rho,
            extent: Extent::new(lo, hi, lo, hi),
            label: None,
            style: Style::default(),
        })
    }

    /// Solves the level set for `y` at the given `x`.
    ///
    /// Fails with [`FigureError::NoRealRoot`] when the radicand is negative,
    /// i.e. the indifference curve has no point above `x`.
    pub fn eval(&self, x: F) -> Result<F, FigureError> {
        let one = F::one();
        let radicand =
            (self.utility.powf(self.rho) - self.alpha * x.powf(self.rho)) / (one - self.alpha);
        if radicand < F::zero() {
            return Err(FigureError::NoRealRoot);
        }
        Ok(radicand.powf(one / self.rho))
    }

    /// The slope `dy/dx` of the level set at `x` (implicit differentiation).
    pub fn slope(&self, x: F) -> Result<F, FigureError> {
        let one = F::one();
        let y = self.eval(x)?;
        Ok(-self.alpha * x.powf(self.rho - one) / ((one - self.alpha) * y.powf(self.rho - one)))
    }

    /// Returns this curve with a different declared extent.
    pub fn with_extent(self, extent: Extent<F>) -> Self {
        Self { extent, ..self }
    }

    /// Returns this curve with a label.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }

    /// Returns this curve with a style.
    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }
}
