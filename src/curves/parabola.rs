//! Quadratic curves fit through a vertex, for U-shaped marginal cost.

use num_traits::Float;

use crate::error::FigureError;
use crate::primitives::{Extent, Point2};
use crate::style::Style;

/// A quadratic curve `y = a*x^2 + b*x + c` fit from its vertex and one other
/// point.
///
/// The fit solves the 3x3 linear system
///
/// ```text
/// f(xv)  = yv
/// f(x2)  = y2
/// f'(xv) = 0
/// ```
///
/// so the vertex constraint (zero slope at `xv`) is enforced exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Parabola<F> {
    pub a: F,
    pub b: F,
    pub c: F,
    /// Declared visible extent, intersected with the viewport at render time.
    pub extent: Extent<F>,
    pub label: Option<String>,
    pub style: Style,
}

impl<F: Float> Parabola<F> {
    /// Fits a parabola from its vertex and a second point.
    ///
    /// Fails with [`FigureError::SingularFit`] when the two x coordinates
    /// coincide (the system has no unique solution).
    pub fn from_vertex(vertex: Point2<F>, other: Point2<F>) -> Result<Self, FigureError> {
        let one = F::one();
        let two = one + one;
        let matrix = [
            [vertex.x * vertex.x, vertex.x, one],
            [other.x * other.x, other.x, one],
            [two * vertex.x, one, F::zero()],
        ];
        let rhs = [vertex.y, other.y, F::zero()];
        let [a, b, c] = solve3(matrix, rhs).ok_or(FigureError::SingularFit)?;

        let hi = F::from(999.0).unwrap();
        Ok(Self {
            a,
            b,
            c,
            extent: Extent::new(one, hi, F::zero(), hi),
            label: None,
            style: Style::default(),
        })
    }

    /// Evaluates `a*x^2 + b*x + c`.
    #[inline]
    pub fn eval(&self, x: F) -> F {
        self.a * x * x + self.b * x + self.c
    }

    /// Evaluates the derivative `2a*x + b`.
    #[inline]
    pub fn slope(&self, x: F) -> F {
        let two = F::one() + F::one();
        two * self.a * x + self.b
    }

    /// Returns this parabola with a different declared extent.
    pub fn with_extent(self, extent: Extent<F>) -> Self {
        Self { extent, ..self }
    }

    /// Returns this parabola with a label.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }

    /// Returns this parabola with a style.
    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }
}

/// Solves a 3x3 linear system by Gaussian elimination with partial pivoting.
///
/// Returns `None` when a pivot vanishes (singular matrix).
fn solve3<F: Float>(mut m: [[F; 3]; 3], mut v: [F; 3]) -> Option<[F; 3]> {
    for col in 0..3 {
        // Pick the largest remaining pivot in this column.
        let mut pivot = col;
        for row in (col + 1)..3 {
            if m[row][col].abs() > m[pivot][col].abs() {
                pivot = row;
            }
        }
        if m[pivot][col].abs() <= F::epsilon() {
            return None;
        }
        m.swap(col, pivot);
        v.swap(col, pivot);

        for row in (col + 1)..3 {
            let factor = m[row][col] / m[col][col];
            for k in col..3 {
                m[row][k] = m[row][k] - factor * m[col][k];
            }
            v[row] = v[row] - factor * v[col];
        }
    }

    // Back substitution.
    let mut x = [F::zero(); 3];
    for col in (0..3).rev() {
        let mut acc = v[col];
        for k in (col + 1)..3 {
            acc = acc - m[col][k] * x[k];
        }
        x[col] = acc / m[col][col];
    }
    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_reproduces_points() {
        let v = Point2::new(2.0, 2.0);
        let p = Point2::new(6.0, 6.0);
        let curve: Parabola<f64> = Parabola::from_vertex(v, p).unwrap();
        assert_relative_eq!(curve.eval(v.x), v.y, epsilon = 1e-10);
        assert_relative_eq!(curve.eval(p.x), p.y, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_slope_at_vertex() {
        let curve: Parabola<f64> =
            Parabola::from_vertex(Point2::new(3.0, 1.0), Point2::new(8.0, 9.0)).unwrap();
        assert_relative_eq!(curve.slope(3.0), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_known_coefficients() {
        // Vertex (0, 1) and point (2, 5): y = x^2 + 1.
        let curve: Parabola<f64> =
            Parabola::from_vertex(Point2::new(0.0, 1.0), Point2::new(2.0, 5.0)).unwrap();
        assert_relative_eq!(curve.a, 1.0, epsilon = 1e-10);
        assert_relative_eq!(curve.b, 0.0, epsilon = 1e-10);
        assert_relative_eq!(curve.c, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_singular_fit() {
        let r: Result<Parabola<f64>, _> =
            Parabola::from_vertex(Point2::new(2.0, 2.0), Point2::new(2.0, 6.0));
        assert_eq!(r.unwrap_err(), FigureError::SingularFit);
    }

    #[test]
    fn test_solve3_identity() {
        let m = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let x = solve3(m, [4.0, 5.0, 6.0]).unwrap();
        assert_eq!(x, [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_solve3_requires_pivoting() {
        // Zero in the leading position forces a row swap.
        let m = [[0.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 0.0]];
        let x = solve3(m, [3.0, 4.0, 5.0]).unwrap();
        assert_relative_eq!(x[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solve3_singular() {
        let m = [[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]];
        assert!(solve3(m, [1.0, 2.0, 3.0]).is_none());
    }
}
