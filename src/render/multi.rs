//! Side-by-side composition of axes into one figure.

use num_traits::Float;

use crate::render::axis::Axis;
use crate::render::directive::DrawDirective;

/// A horizontal row of independent axes rendered as one figure.
///
/// Each child keeps its own frame, gridlines, and coordinate system; the
/// composite render is simply the concatenation of the child renders in
/// insertion order. Layout (spacing between panels) is the consuming
/// renderer's concern.
#[derive(Debug, Clone)]
pub struct MultiAxis<F> {
    axes: Vec<Axis<F>>,
}

impl<F> Default for MultiAxis<F> {
    fn default() -> Self {
        Self { axes: Vec::new() }
    }
}

impl<F: Float> MultiAxis<F> {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self { axes: Vec::new() }
    }

    /// Appends an axis panel.
    pub fn push(&mut self, axis: Axis<F>) -> &mut Self {
        self.axes.push(axis);
        self
    }

    /// Number of panels.
    #[inline]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Renders every panel in order into one directive list.
    pub fn render(&self, show_solution: bool) -> Vec<DrawDirective<F>> {
        self.axes
            .iter()
            .flat_map(|axis| axis.render(show_solution))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::Line;

    #[test]
    fn test_concatenates_in_order() {
        let mut left: Axis<f64> = Axis::new(5.0, 5.0).with_grid(false).with_title("Firm");
        left.add(Line::new(4.0, -1.0));
        let right: Axis<f64> = Axis::new(8.0, 8.0).with_grid(false).with_title("Market");

        let mut multi = MultiAxis::new();
        multi.push(left).push(right);
        let out = multi.render(false);

        assert_eq!(out.len(), 3);
        assert!(
            matches!(&out[0], DrawDirective::Frame { title: Some(t), .. } if t == "Firm")
        );
        assert!(matches!(out[1], DrawDirective::PlotCurve { .. }));
        assert!(
            matches!(&out[2], DrawDirective::Frame { title: Some(t), .. } if t == "Market")
        );
    }

    #[test]
    fn test_empty_renders_nothing() {
        let multi: MultiAxis<f64> = MultiAxis::new();
        assert!(multi.render(true).is_empty());
    }
}
