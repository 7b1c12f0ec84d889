//! Style metadata attached to shapes and directives.
//!
//! Styles are plain immutable value structs; there is no process-wide default
//! state. Everything here is advisory for the external renderer and carries no
//! geometric meaning.

/// Stroke and label color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Black,
    Red,
    Blue,
    Gray,
}

/// Where a label anchors relative to its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPos {
    Left,
    #[default]
    Right,
    Above,
    Below,
    AboveLeft,
    AboveRight,
    BelowLeft,
    BelowRight,
}

/// Label text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelSize {
    Footnote,
    #[default]
    Small,
    Normal,
}

/// Combined style for one shape.
///
/// Line width and dot radius are in printer's points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Color,
    pub line_width: f32,
    pub dot_radius: f32,
    pub label_pos: LabelPos,
    pub label_size: LabelSize,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color::Black,
            line_width: 0.8,
            dot_radius: 2.0,
            label_pos: LabelPos::default(),
            label_size: LabelSize::default(),
        }
    }
}

impl Style {
    /// The conventional style for solution-only annotations.
    pub fn solution() -> Self {
        Self {
            color: Color::Red,
            ..Self::default()
        }
    }

    /// Returns this style with a different color.
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Returns this style with a different label anchor.
    pub fn with_label_pos(self, label_pos: LabelPos) -> Self {
        Self { label_pos, ..self }
    }
}
