//! Backend-agnostic drawing directives.
//!
//! A rendered figure is an ordered `Vec<DrawDirective>`. Each directive
//! carries only numeric/geometric data (already clipped) plus style metadata;
//! turning the sequence into markup or pixels is the job of an external
//! renderer.

use num_traits::Float;

use crate::primitives::Point2;
use crate::style::Style;

/// The analytic function behind a [`DrawDirective::PlotCurve`], as kind plus
/// coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveFunction<F> {
    /// `y = intercept + slope*x`.
    Line { intercept: F, slope: F },
    /// `y = a*x^2 + b*x + c`.
    Parabola { a: F, b: F, c: F },
    /// `y = fixed/x + intercept + 0.5*slope*x`.
    RationalCost { fixed: F, intercept: F, slope: F },
    /// `y = fixed/x + quadratic*x^2 + linear*x + constant`.
    ///
    /// The polynomial coefficients arrive already folded (`a/3`, `b/2`, `c`
    /// of the originating marginal curve).
    PiecewiseCost {
        fixed: F,
        quadratic: F,
        linear: F,
        constant: F,
    },
    /// The CES level set `alpha*x^rho + (1-alpha)*y^rho = utility^rho`,
    /// solved for `y`.
    Ces { alpha: F, utility: F, rho: F },
    /// `y = ry*sqrt(1 - (x/rx)^2)`.
    QuarterEllipse { rx: F, ry: F },
}

impl<F: Float> CurveFunction<F> {
    /// Samples the curve at `x`.
    ///
    /// Returns `None` where the function is undefined (negative radicand);
    /// renderers use this to sample the emitted domain.
    pub fn eval(&self, x: F) -> Option<F> {
        let one = F::one();
        match *self {
            CurveFunction::Line { intercept, slope } => Some(intercept + slope * x),
            CurveFunction::Parabola { a, b, c } => Some(a * x * x + b * x + c),
            CurveFunction::RationalCost {
                fixed,
                intercept,
                slope,
            } => {
                let half = F::from(0.5).unwrap();
                Some(fixed / x + intercept + half * slope * x)
            }
            CurveFunction::PiecewiseCost {
                fixed,
                quadratic,
                linear,
                constant,
            } => Some(fixed / x + quadratic * x * x + linear * x + constant),
            CurveFunction::Ces {
                alpha,
                utility,
                rho,
            } => {
                let radicand = (utility.powf(rho) - alpha * x.powf(rho)) / (one - alpha);
                if radicand < F::zero() {
                    None
                } else {
                    Some(radicand.powf(one / rho))
                }
            }
            CurveFunction::QuarterEllipse { rx, ry } => {
                let t = x / rx;
                let radicand = one - t * t;
                if radicand < F::zero() {
                    None
                } else {
                    Some(ry * radicand.sqrt())
                }
            }
        }
    }
}

/// One drawing instruction in a rendered figure.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawDirective<F> {
    /// Axis lines, axis labels, extents, and optional title for one axis.
    Frame {
        xmin: F,
        xmax: F,
        ymin: F,
        ymax: F,
        xlabel: String,
        ylabel: String,
        title: Option<String>,
    },
    /// A dotted guide line (gridline or drop line), optionally labelled at
    /// its endpoint.
    GridLine {
        from: Point2<F>,
        to: Point2<F>,
        label: Option<String>,
    },
    /// An analytic curve over an already-clipped domain and range.
    PlotCurve {
        function: CurveFunction<F>,
        domain: (F, F),
        range: (F, F),
        label: Option<String>,
        style: Style,
    },
    /// A filled dot with an optional label.
    FillPoint {
        point: Point2<F>,
        label: Option<String>,
        style: Style,
    },
    /// A straight segment between two points, labelled at the midpoint.
    Segment {
        from: Point2<F>,
        to: Point2<F>,
        label: Option<String>,
        style: Style,
    },
    /// Free-standing annotation text.
    Text {
        at: Point2<F>,
        text: String,
        style: Style,
    },
    /// An axis-aligned ellipse outline (best-response highlights).
    Ellipse {
        center: Point2<F>,
        rx: F,
        ry: F,
        style: Style,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_line_eval() {
        let f: CurveFunction<f64> = CurveFunction::Line {
            intercept: 10.0,
            slope: -1.0,
        };
        assert_relative_eq!(f.eval(4.0).unwrap(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rational_eval_matches_formula() {
        let f: CurveFunction<f64> = CurveFunction::RationalCost {
            fixed: 30.0,
            intercept: 2.0,
            slope: 0.25,
        };
        assert_relative_eq!(f.eval(4.0).unwrap(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_ellipse_undefined_outside() {
        let f: CurveFunction<f64> = CurveFunction::QuarterEllipse { rx: 8.0, ry: 6.0 };
        assert!(f.eval(9.0).is_none());
        assert_relative_eq!(f.eval(0.0).unwrap(), 6.0, epsilon = 1e-12);
    }
}
