//! Average/total cost curves derived from marginal curves.
//!
//! Both curve families here carry a hyperbolic `F/x` term, the per-unit share
//! of a fixed cost, plus the running average of the marginal curve they were
//! fit from.

use num_traits::Float;

use crate::curves::{Line, Parabola};
use crate::error::FigureError;
use crate::primitives::{Extent, Point2};
use crate::style::Style;

/// An average-cost style curve `y = F/x + a + 0.5*b*x`.
///
/// Fit from a linear marginal curve `MC(x) = a + b*x` and one point known to
/// lie on this curve; the fixed-cost constant is the unique `F` making the
/// curve pass through that point:
///
/// ```text
/// F = (y0 - a)*x0 - 0.5*b*x0^2
/// ```
///
/// # Example
///
/// ```
/// use econsketch::{Line, Point2, RationalCostCurve};
///
/// let mc: Line<f64> = Line::new(2.0, 0.25);
/// let atc = RationalCostCurve::from_marginal(&mc, Point2::new(4.0, 10.0));
/// assert_eq!(atc.fixed, 30.0);
/// assert_eq!(atc.eval(4.0), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RationalCostCurve<F> {
    /// Fixed-cost constant `F`.
    pub fixed: F,
    /// Marginal intercept `a`.
    pub a: F,
    /// Marginal slope `b`.
    pub b: F,
    /// Declared visible extent, intersected with the viewport at render time.
    pub extent: Extent<F>,
    pub label: Option<String>,
    pub style: Style,
}

impl<F: Float> RationalCostCurve<F> {
    /// Fits the curve from a linear marginal curve and one point on the curve.
    pub fn from_marginal(marginal: &Line<F>, point: Point2<F>) -> Self {
        let half = F::from(0.5).unwrap();
        let fixed =
            (point.y - marginal.intercept) * point.x - half * marginal.slope * point.x * point.x;
        let hi = F::from(999.0).unwrap();
        Self {
            fixed,
            a: marginal.intercept,
            b: marginal.slope,
            extent: Extent::new(F::one(), hi, F::zero(), hi),
            label: None,
            style: Style::default(),
        }
    }

    /// Evaluates `F/x + a + 0.5*b*x`.
    #[inline]
    pub fn eval(&self, x: F) -> F {
        let half = F::from(0.5).unwrap();
        self.fixed / x + self.a + half * self.b * x
    }

    /// Evaluates the derivative `-F/x^2 + 0.5*b`.
    #[inline]
    pub fn slope(&self, x: F) -> F {
        let half = F::from(0.5).unwrap();
        -self.fixed / (x * x) + half * self.b
    }

    /// Inverts the curve: the quantity at which the curve attains `y`.
    ///
    /// Solves `0.5*b*x^2 + (a - y)*x + F = 0` by the quadratic formula and
    /// takes the `+sqrt` root, which lies on the rising branch of the curve
    /// (`x >= minimum()` when the minimum exists). Fails with
    /// [`FigureError::NoRealRoot`] when the curve never attains `y`.
    pub fn inv_eval(&self, y: F) -> Result<F, FigureError> {
        let two = F::one() + F::one();
        let four = two + two;
        let qa = self.b / two;
        let qb = self.a - y;
        let qc = self.fixed;

        if qa == F::zero() {
            // Flat marginal curve: the equation is linear.
            if qb == F::zero() {
                return Err(FigureError::NoRealRoot);
            }
            return Ok(-qc / qb);
        }

        let disc = qb * qb - four * qa * qc;
        if disc < F::zero() {
            return Err(FigureError::NoRealRoot);
        }
        Ok((-qb + disc.sqrt()) / (two * qa))
    }

    /// The quantity minimizing the curve, `sqrt(2F/b)`.
    ///
    /// Fails with [`FigureError::UndefinedMinimum`] when `b <= 0` or `F < 0`
    /// (the radicand would be negative or the curve has no interior minimum).
    pub fn minimum(&self) -> Result<F, FigureError> {
        if self.b <= F::zero() || self.fixed < F::zero() {
            return Err(FigureError::UndefinedMinimum);
        }
        let two = F::one() + F::one();
        Ok((two * self.fixed / self.b).sqrt())
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

/// A cost curve `y = F/x + (a/3)*x^2 + (b/2)*x + c` derived from a quadratic
/// marginal curve.
///
/// With an efficient scale `s` the fixed-cost constant is
/// `F = (2/3)*a*s^3 + 0.5*b*s^2`, which makes the curve tangent to the
/// marginal curve at `s`. Without a scale the constant is zero, giving the
/// average-variable-cost variant.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseCostCurve<F> {
    /// Fixed-cost constant `F`.
    pub fixed: F,
    /// Marginal quadratic coefficient `a`.
    pub a: F,
    /// Marginal linear coefficient `b`.
    pub b: F,
    /// Marginal constant coefficient `c`.
    pub c: F,
    /// Declared visible extent, intersected with the viewport at render time.
    pub extent: Extent<F>,
    pub label: Option<String>,
    pub style: Style,
}

impl<F: Float> PiecewiseCostCurve<F> {
    /// Fits the curve from a quadratic marginal curve and an optional
    /// efficient scale.
    pub fn from_marginal(marginal: &Parabola<F>, efficient_scale: Option<F>) -> Self {
        let fixed = match efficient_scale {
            Some(s) => {
                let half = F::from(0.5).unwrap();
                let two_thirds = F::from(2.0 / 3.0).unwrap();
                two_thirds * marginal.a * s * s * s + half * marginal.b * s * s
            }
            None => F::zero(),
        };
        let hi = F::from(999.0).unwrap();
        Self {
            fixed,
            a: marginal.a,
            b: marginal.b,
            c: marginal.c,
            extent: Extent::new(F::one(), hi, F::zero(), hi),
            label: None,
            style: Style::default(),
        }
    }

    /// Evaluates `F/x + (a/3)*x^2 + (b/2)*x + c`.
    #[inline]
    pub fn eval(&self, x: F) -> F {
        let two = F::one() + F::one();
        let three = two + F::one();
        self.fixed / x + self.a / three * x * x + self.b / two * x + self.c
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_curve() -> RationalCostCurve<f64> {
        // F = (10 - 2)*4 - 0.5*0.25*16 = 30
        let mc = Line::new(2.0, 0.25);
        RationalCostCurve::from_marginal(&mc, Point2::new(4.0, 10.0))
    }

    #[test]
    fn test_fixed_constant() {
        let c = sample_curve();
        assert_relative_eq!(c.fixed, 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_passes_through_fit_point() {
        let c = sample_curve();
        assert_relative_eq!(c.eval(4.0), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_minimum_has_zero_slope() {
        let c = sample_curve();
        let q = c.minimum().unwrap();
        assert_relative_eq!(q, (2.0 * 30.0 / 0.25f64).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(c.slope(q), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_minimum_undefined() {
        let mc = Line::new(10.0, -1.0);
        let c = RationalCostCurve::from_marginal(&mc, Point2::new(2.0, 20.0));
        assert_eq!(c.minimum().unwrap_err(), FigureError::UndefinedMinimum);
    }

    #[test]
    fn test_inv_eval_roundtrip_on_rising_branch() {
        let c = sample_curve();
        let q_min = c.minimum().unwrap();
        for x in [q_min, q_min + 1.0, 20.0, 40.0] {
            let y = c.eval(x);
            assert_relative_eq!(c.inv_eval(y).unwrap(), x, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_inv_eval_picks_positive_sqrt_root() {
        // eval(12) == eval(20) == 6; the +sqrt branch returns the larger root.
        let c = sample_curve();
        assert_relative_eq!(c.eval(12.0), 6.0, epsilon = 1e-12);
        assert_relative_eq!(c.eval(20.0), 6.0, epsilon = 1e-12);
        assert_relative_eq!(c.inv_eval(6.0).unwrap(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inv_eval_below_minimum() {
        let c = sample_curve();
        let q_min = c.minimum().unwrap();
        let y_min = c.eval(q_min);
        assert_eq!(c.inv_eval(y_min - 1.0).unwrap_err(), FigureError::NoRealRoot);
    }

    #[test]
    fn test_inv_eval_linear_when_marginal_flat() {
        // MC constant at 2: curve is F/x + 2, F = (10-2)*4 = 32.
        let mc = Line::new(2.0, 0.0);
        let c = RationalCostCurve::from_marginal(&mc, Point2::new(4.0, 10.0));
        assert_relative_eq!(c.inv_eval(10.0).unwrap(), 4.0, epsilon = 1e-12);
        assert_eq!(c.inv_eval(2.0).unwrap_err(), FigureError::NoRealRoot);
    }

    #[test]
    fn test_piecewise_without_scale_is_avc() {
        let mc: Parabola<f64> =
            Parabola::from_vertex(Point2::new(2.0, 2.0), Point2::new(6.0, 6.0)).unwrap();
        let avc = PiecewiseCostCurve::from_marginal(&mc, None);
        assert_eq!(avc.fixed, 0.0);
        // No hyperbolic term: the value at x is the running average of MC.
        assert_relative_eq!(
            avc.eval(3.0),
            mc.a / 3.0 * 9.0 + mc.b / 2.0 * 3.0 + mc.c,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_piecewise_with_scale() {
        let mc: Parabola<f64> =
            Parabola::from_vertex(Point2::new(2.0, 2.0), Point2::new(6.0, 6.0)).unwrap();
        let s = 6.0;
        let atc = PiecewiseCostCurve::from_marginal(&mc, Some(s));
        let expected = (2.0 / 3.0) * mc.a * s.powi(3) + 0.5 * mc.b * s * s;
        assert_relative_eq!(atc.fixed, expected, epsilon = 1e-12);
    }
}
