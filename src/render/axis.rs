//! A single labelled figure: viewport, gridlines, and an ordered shape list.

use num_traits::{Float, ToPrimitive};

use crate::format::{format_scaled, NumKind, ScaleSpec};
use crate::primitives::{Point2, Viewport};
use crate::render::directive::DrawDirective;
use crate::render::shape::Shape;
use crate::style::{LabelPos, Style};

/// One self-contained diagram.
///
/// Shapes are rendered in insertion order, clipped to the viewport. A second
/// list holds solution-only shapes that render only when the solution flag is
/// raised, so the same axis produces both the blank and the worked figure.
#[derive(Debug, Clone)]
pub struct Axis<F> {
    pub viewport: Viewport<F>,
    pub xlabel: String,
    pub ylabel: String,
    pub scale: ScaleSpec,
    pub grid: bool,
    /// Label every `skip`-th gridline; intermediate gridlines stay unlabelled.
    pub skip: usize,
    pub title: Option<String>,
    shapes: Vec<Shape<F>>,
    solution_shapes: Vec<Shape<F>>,
}

impl<F: Float> Axis<F> {
    /// Creates an axis over `[0, xmax] x [0, ymax]` with the conventional
    /// quantity/price labels.
    pub fn new(xmax: F, ymax: F) -> Self {
        Self {
            viewport: Viewport::new(xmax, ymax),
            xlabel: "Q".to_string(),
            ylabel: "P".to_string(),
            scale: ScaleSpec::default(),
            grid: true,
            skip: 1,
            title: None,
            shapes: Vec::new(),
            solution_shapes: Vec::new(),
        }
    }

    /// Returns this axis with the given axis labels.
    pub fn with_labels(self, xlabel: impl Into<String>, ylabel: impl Into<String>) -> Self {
        Self {
            xlabel: xlabel.into(),
            ylabel: ylabel.into(),
            ..self
        }
    }

    /// Returns this axis with a scale spec for tick labels.
    pub fn with_scale(self, scale: ScaleSpec) -> Self {
        Self { scale, ..self }
    }

    /// Returns this axis with a title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }

    /// Returns this axis with gridlines enabled or disabled.
    pub fn with_grid(self, grid: bool) -> Self {
        Self { grid, ..self }
    }

    /// Returns this axis labelling only every `skip`-th gridline.
    ///
    /// A `skip` of zero is treated as one.
    pub fn with_skip(self, skip: usize) -> Self {
        Self {
            skip: skip.max(1),
            ..self
        }
    }

    /// Appends a shape to the figure.
    pub fn add(&mut self, shape: impl Into<Shape<F>>) -> &mut Self {
        self.shapes.push(shape.into());
        self
    }

    /// Appends a shape that only appears when rendering with solutions.
    pub fn add_solution_only(&mut self, shape: impl Into<Shape<F>>) -> &mut Self {
        self.solution_shapes.push(shape.into());
        self
    }

    /// Renders the axis to an ordered directive list.
    ///
    /// Emission order is frame, gridlines, shapes, then solution shapes when
    /// `show_solution` is set. Shapes whose extent misses the viewport are
    /// silently omitted.
    pub fn render(&self, show_solution: bool) -> Vec<DrawDirective<F>> {
        let mut out = Vec::new();

        out.push(DrawDirective::Frame {
            xmin: F::zero(),
            xmax: self.viewport.xmax,
            ymin: F::zero(),
            ymax: self.viewport.ymax,
            xlabel: self.xlabel.clone(),
            ylabel: self.ylabel.clone(),
            title: self.title.clone(),
        });

        if self.grid {
            self.push_gridlines(&mut out);
        }

        for shape in &self.shapes {
            if let Some(directive) = shape.render(self.viewport) {
                out.push(directive);
            }
        }
        if show_solution {
            for shape in &self.solution_shapes {
                if let Some(directive) = shape.render(self.viewport) {
                    out.push(directive);
                }
            }
        }
        out
    }

    /// Interior gridlines at integer ticks, strictly inside the bounds,
    /// plus the "0" label at the origin.
    ///
    /// Vertical lines are labelled (below the x axis) as quantities and
    /// horizontal lines (left of the y axis) as prices, both thinned by
    /// `skip`.
    fn push_gridlines(&self, out: &mut Vec<DrawDirective<F>>) {
        let mut i = 1usize;
        loop {
            let x = match F::from(i) {
                Some(x) if x < self.viewport.xmax => x,
                _ => break,
            };
            out.push(DrawDirective::GridLine {
                from: Point2::new(x, self.viewport.ymax),
                to: Point2::new(x, F::zero()),
                label: self.tick_label(i, NumKind::Quantity),
            });
            i += 1;
        }

        let mut j = 1usize;
        loop {
            let y = match F::from(j) {
                Some(y) if y < self.viewport.ymax => y,
                _ => break,
            };
            out.push(DrawDirective::GridLine {
                from: Point2::new(self.viewport.xmax, y),
                to: Point2::new(F::zero(), y),
                label: self.tick_label(j, NumKind::Price),
            });
            j += 1;
        }

        out.push(DrawDirective::Text {
            at: Point2::origin(),
            text: "0".to_string(),
            style: Style::default().with_label_pos(LabelPos::BelowLeft),
        });
    }

    fn tick_label(&self, tick: usize, kind: NumKind) -> Option<String> {
        // A zero skip labels every tick, same as one.
        if tick % self.skip.max(1) == 0 {
            tick.to_f64()
                .map(|v| format_scaled(v, &self.scale, kind))
        } else {
            None
        }
    }
}
