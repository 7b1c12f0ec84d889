//! The closed set of renderable shapes and their clipping behavior.

use num_traits::Float;

use crate::curves::{CesIndifferenceCurve, Line, Parabola, PiecewiseCostCurve, QuarterArc, RationalCostCurve};
use crate::primitives::{Extent, Point2, Viewport};
use crate::render::directive::{CurveFunction, DrawDirective};
use crate::style::Style;

/// A labelled, styled dot.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker<F> {
    pub point: Point2<F>,
    pub label: Option<String>,
    pub style: Style,
}

impl<F: Float> Marker<F> {
    /// Creates an unlabelled marker.
    pub fn new(point: Point2<F>) -> Self {
        Self {
            point,
            label: None,
            style: Style::default(),
        }
    }

    /// Returns this marker with a label.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }

    /// Returns this marker with a style.
    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }
}

/// A straight segment between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<F> {
    pub from: Point2<F>,
    pub to: Point2<F>,
    pub label: Option<String>,
    pub style: Style,
}

impl<F: Float> Segment<F> {
    /// Creates an unlabelled segment.
    pub fn new(from: Point2<F>, to: Point2<F>) -> Self {
        Self {
            from,
            to,
            label: None,
            style: Style::default(),
        }
    }

    /// The midpoint, where renderers anchor the label.
    #[inline]
    pub fn midpoint(&self) -> Point2<F> {
        self.from.midpoint(self.to)
    }

    /// Returns this segment with a label.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }

    /// Returns this segment with a style.
    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }
}

/// Which axis a [`DropLine`] drops to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Straight down to the x axis.
    XAxis,
    /// Straight left to the y axis.
    YAxis,
}

/// A dotted guide from a point to one axis, labelled at the axis.
///
/// Annotating a point on both axes takes two drop lines.
#[derive(Debug, Clone, PartialEq)]
pub struct DropLine<F> {
    pub point: Point2<F>,
    pub target: DropTarget,
    pub label: Option<String>,
}

impl<F: Float> DropLine<F> {
    /// Drops from `point` to the x axis, labelling the quantity there.
    pub fn to_x_axis(point: Point2<F>, label: impl Into<String>) -> Self {
        Self {
            point,
            target: DropTarget::XAxis,
            label: Some(label.into()),
        }
    }

    /// Drops from `point` to the y axis, labelling the price there.
    pub fn to_y_axis(point: Point2<F>, label: impl Into<String>) -> Self {
        Self {
            point,
            target: DropTarget::YAxis,
            label: Some(label.into()),
        }
    }

    /// Where the drop line meets its axis.
    #[inline]
    pub fn foot(&self) -> Point2<F> {
        match self.target {
            DropTarget::XAxis => Point2::new(self.point.x, F::zero()),
            DropTarget::YAxis => Point2::new(F::zero(), self.point.y),
        }
    }
}

/// The closed polymorphic set of shapes an axis can hold.
///
/// Every variant exposes the same two capabilities: a declared extent, and
/// rendering against a viewport. Rendering clips the declared extent to the
/// viewport first; an empty intersection renders to `None`, a defined no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<F> {
    Marker(Marker<F>),
    Line(Line<F>),
    Parabola(Parabola<F>),
    RationalCost(RationalCostCurve<F>),
    PiecewiseCost(PiecewiseCostCurve<F>),
    Ces(CesIndifferenceCurve<F>),
    Arc(QuarterArc<F>),
    Segment(Segment<F>),
    DropLine(DropLine<F>),
}

impl<F: Float> Shape<F> {
    /// The extent this shape declares itself visible over.
    pub fn declared_extent(&self) -> Extent<F> {
        match self {
            Shape::Marker(m) => Extent::from_point(m.point),
            Shape::Line(c) => c.extent,
            Shape::Parabola(c) => c.extent,
            Shape::RationalCost(c) => c.extent,
            Shape::PiecewiseCost(c) => c.extent,
            Shape::Ces(c) => c.extent,
            Shape::Arc(c) => c.extent,
            Shape::Segment(s) => Extent::from_corners(s.from, s.to),
            Shape::DropLine(d) => Extent::from_corners(d.point, d.foot()),
        }
    }

    /// Renders the shape against a viewport.
    ///
    /// Returns `None` when the clipped visible domain is empty; otherwise the
    /// directive's domain and range are the intersection of the declared
    /// extent and the viewport.
    pub fn render(&self, viewport: Viewport<F>) -> Option<DrawDirective<F>> {
        match self {
            Shape::Marker(m) => viewport.contains(m.point).then(|| DrawDirective::FillPoint {
                point: m.point,
                label: m.label.clone(),
                style: m.style,
            }),
            Shape::Line(c) => {
                let clipped = c.extent.clip(viewport)?;
                Some(plot(
                    CurveFunction::Line {
                        intercept: c.intercept,
                        slope: c.slope,
                    },
                    clipped,
                    &c.label,
                    c.style,
                ))
            }
            Shape::Parabola(c) => {
                let clipped = c.extent.clip(viewport)?;
                Some(plot(
                    CurveFunction::Parabola {
                        a: c.a,
                        b: c.b,
                        c: c.c,
                    },
                    clipped,
                    &c.label,
                    c.style,
                ))
            }
            Shape::RationalCost(c) => {
                let clipped = c.extent.clip(viewport)?;
                Some(plot(
                    CurveFunction::RationalCost {
                        fixed: c.fixed,
                        intercept: c.a,
                        slope: c.b,
                    },
                    clipped,
                    &c.label,
                    c.style,
                ))
            }
            Shape::PiecewiseCost(c) => {
                let clipped = c.extent.clip(viewport)?;
                let two = F::one() + F::one();
                let three = two + F::one();
                Some(plot(
                    CurveFunction::PiecewiseCost {
                        fixed: c.fixed,
                        quadratic: c.a / three,
                        linear: c.b / two,
                        constant: c.c,
                    },
                    clipped,
                    &c.label,
                    c.style,
                ))
            }
            Shape::Ces(c) => {
                let clipped = c.extent.clip(viewport)?;
                Some(plot(
                    CurveFunction::Ces {
                        alpha: c.alpha,
                        utility: c.utility,
                        rho: c.rho,
                    },
                    clipped,
                    &c.label,
                    c.style,
                ))
            }
            Shape::Arc(c) => {
                let clipped = c.extent.clip(viewport)?;
                Some(plot(
                    CurveFunction::QuarterEllipse {
                        rx: c.extent.xmax,
                        ry: c.extent.ymax,
                    },
                    clipped,
                    &c.label,
                    c.style,
                ))
            }
            Shape::Segment(s) => {
                // Directive carries endpoints rather than a domain; emit it
                // whenever the bounding box reaches into the viewport.
                Extent::from_corners(s.from, s.to).clip(viewport)?;
                Some(DrawDirective::Segment {
                    from: s.from,
                    to: s.to,
                    label: s.label.clone(),
                    style: s.style,
                })
            }
            Shape::DropLine(d) => viewport.contains(d.point).then(|| DrawDirective::GridLine {
                from: d.point,
                to: d.foot(),
                label: d.label.clone(),
            }),
        }
    }
}

fn plot<F: Float>(
    function: CurveFunction<F>,
    clipped: Extent<F>,
    label: &Option<String>,
    style: Style,
) -> DrawDirective<F> {
    DrawDirective::PlotCurve {
        function,
        domain: (clipped.xmin, clipped.xmax),
        range: (clipped.ymin, clipped.ymax),
        label: label.clone(),
        style,
    }
}

impl<F> From<Marker<F>> for Shape<F> {
    fn from(m: Marker<F>) -> Self {
        Shape::Marker(m)
    }
}

impl<F> From<Line<F>> for Shape<F> {
    fn from(c: Line<F>) -> Self {
        Shape::Line(c)
    }
}

impl<F> From<Parabola<F>> for Shape<F> {
    fn from(c: Parabola<F>) -> Self {
        Shape::Parabola(c)
    }
}

impl<F> From<RationalCostCurve<F>> for Shape<F> {
    fn from(c: RationalCostCurve<F>) -> Self {
        Shape::RationalCost(c)
    }
}

impl<F> From<PiecewiseCostCurve<F>> for Shape<F> {
    fn from(c: PiecewiseCostCurve<F>) -> Self {
        Shape::PiecewiseCost(c)
    }
}

impl<F> From<CesIndifferenceCurve<F>> for Shape<F> {
    fn from(c: CesIndifferenceCurve<F>) -> Self {
        Shape::Ces(c)
    }
}

impl<F> From<QuarterArc<F>> for Shape<F> {
    fn from(c: QuarterArc<F>) -> Self {
        Shape::Arc(c)
    }
}

impl<F> From<Segment<F>> for Shape<F> {
    fn from(s: Segment<F>) -> Self {
        Shape::Segment(s)
    }
}

impl<F> From<DropLine<F>> for Shape<F> {
    fn from(d: DropLine<F>) -> Self {
        Shape::DropLine(d)
    }
}
