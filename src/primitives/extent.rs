//! Declared extents and the first-quadrant viewport.

use num_traits::Float;

use super::Point2;

/// The rectangular region a shape declares itself visible over.
///
/// Every curve carries an extent; at render time it is intersected with the
/// containing [`Viewport`] to produce the emitted domain and range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent<F> {
    pub xmin: F,
    pub xmax: F,
    pub ymin: F,
    pub ymax: F,
}

impl<F: Float> Extent<F> {
    /// Creates a new extent.
    ///
    /// Does not validate ordering; an inverted extent simply clips to nothing.
    #[inline]
    pub fn new(xmin: F, xmax: F, ymin: F, ymax: F) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Creates an extent covering a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self {
            xmin: p.x,
            xmax: p.x,
            ymin: p.y,
            ymax: p.y,
        }
    }

    /// Creates an extent from two arbitrary corner points.
    #[inline]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            xmin: a.x.min(b.x),
            xmax: a.x.max(b.x),
            ymin: a.y.min(b.y),
            ymax: a.y.max(b.y),
        }
    }

    /// Intersects this extent with a viewport.
    ///
    /// Returns the clipped extent, or `None` when the intersection is empty.
    /// An empty intersection is a defined no-op at render time, not an error.
    pub fn clip(self, viewport: Viewport<F>) -> Option<Self> {
        let xmin = self.xmin.max(F::zero());
        let xmax = self.xmax.min(viewport.xmax);
        let ymin = self.ymin.max(F::zero());
        let ymax = self.ymax.min(viewport.ymax);

        if xmin <= xmax && ymin <= ymax {
            Some(Self {
                xmin,
                xmax,
                ymin,
                ymax,
            })
        } else {
            None
        }
    }
}

/// A first-quadrant coordinate bound `[0, xmax] x [0, ymax]`.
///
/// Instructional economics diagrams live in the first quadrant, so the lower
/// bounds are always zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport<F> {
    pub xmax: F,
    pub ymax: F,
}

impl<F: Float> Viewport<F> {
    /// Creates a viewport with the given upper bounds.
    #[inline]
    pub fn new(xmax: F, ymax: F) -> Self {
        Self { xmax, ymax }
    }

    /// Returns `true` if the point lies inside the viewport (boundary included).
    #[inline]
    pub fn contains(self, p: Point2<F>) -> bool {
        p.x >= F::zero() && p.x <= self.xmax && p.y >= F::zero() && p.y <= self.ymax
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_inside() {
        let e: Extent<f64> = Extent::new(1.0, 5.0, 0.0, 5.0);
        let c = e.clip(Viewport::new(11.0, 11.0)).unwrap();
        assert_eq!(c, e);
    }

    #[test]
    fn test_clip_truncates_to_viewport() {
        let e: Extent<f64> = Extent::new(0.0, 999.0, 0.0, 999.0);
        let c = e.clip(Viewport::new(11.0, 8.0)).unwrap();
        assert_eq!(c.xmax, 11.0);
        assert_eq!(c.ymax, 8.0);
        assert_eq!(c.xmin, 0.0);
    }

    #[test]
    fn test_clip_clamps_negative_min() {
        let e: Extent<f64> = Extent::new(-5.0, 5.0, -2.0, 2.0);
        let c = e.clip(Viewport::new(10.0, 10.0)).unwrap();
        assert_eq!(c.xmin, 0.0);
        assert_eq!(c.ymin, 0.0);
    }

    #[test]
    fn test_clip_empty() {
        let e: Extent<f64> = Extent::new(20.0, 30.0, 0.0, 5.0);
        assert!(e.clip(Viewport::new(11.0, 11.0)).is_none());
    }

    #[test]
    fn test_clip_empty_in_y() {
        let e: Extent<f64> = Extent::new(0.0, 5.0, 12.0, 20.0);
        assert!(e.clip(Viewport::new(11.0, 11.0)).is_none());
    }

    #[test]
    fn test_viewport_contains() {
        let vp: Viewport<f64> = Viewport::new(11.0, 11.0);
        assert!(vp.contains(Point2::new(5.0, 5.0)));
        assert!(vp.contains(Point2::new(0.0, 11.0)));
        assert!(!vp.contains(Point2::new(-0.5, 5.0)));
        assert!(!vp.contains(Point2::new(5.0, 11.5)));
    }

    #[test]
    fn test_from_corners() {
        let e: Extent<f64> = Extent::from_corners(Point2::new(4.0, 1.0), Point2::new(2.0, 3.0));
        assert_eq!(e.xmin, 2.0);
        assert_eq!(e.xmax, 4.0);
        assert_eq!(e.ymin, 1.0);
        assert_eq!(e.ymax, 3.0);
    }
}
