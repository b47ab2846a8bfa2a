//! Drawable primitives - the building blocks of scenes.

use serde::{Deserialize, Serialize};

use crate::geometry::{sub, Vec3, ORIGIN};

/// Geometry of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// A single marker.
    Point {
        /// Marker position.
        position: Vec3,
    },

    /// A line segment. `start == end` is legal and draws a zero-length vector.
    Segment {
        /// Start of the segment.
        start: Vec3,
        /// End of the segment.
        end: Vec3,
    },
}

impl Shape {
    /// The kind of this shape.
    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Point { .. } => PrimitiveKind::Point,
            Self::Segment { .. } => PrimitiveKind::Segment,
        }
    }
}

/// Point vs. segment, as seen by the style machinery.
///
/// Variant order matters: segments sort before points so that markers are
/// drawn on top of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// Line segment, drawn with `vectors`.
    Segment,
    /// Point marker, drawn with `points`.
    Point,
}

/// Arrow head of a segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadAttribute {
    /// Solid arrow head at the end of the segment.
    FilledHead,
    /// Plain line without arrow head.
    NoHead,
    /// Raw attribute text passed through to the plotting tool.
    Other(String),
}

impl HeadAttribute {
    /// The attribute as written in the script.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::FilledHead => "filled head",
            Self::NoHead => "nohead",
            Self::Other(attr) => attr,
        }
    }
}

impl From<&str> for HeadAttribute {
    fn from(attr: &str) -> Self {
        match attr {
            "filled head" => Self::FilledHead,
            "nohead" => Self::NoHead,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Drawing style of a primitive as set by the caller.
///
/// Unset fields are resolved by [`crate::style::canonicalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Color name or `#RRGGBB`. `None` or empty means black.
    pub color: Option<String>,
    /// Line width or point size; `0` means unset.
    pub width: u32,
    /// Arrow head for segments.
    pub head: Option<HeadAttribute>,
    /// Point attribute (e.g. `pointtype 7`) for points.
    pub point_attr: Option<String>,
}

/// A point or segment with style and optional label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// Geometry.
    pub shape: Shape,
    /// Optional annotation text.
    pub label: Option<String>,
    /// Drawing style.
    pub style: Style,
}

impl Default for Primitive {
    /// A zero-length segment at the origin with an unset style.
    fn default() -> Self {
        Self::segment(ORIGIN, ORIGIN)
    }
}

impl Primitive {
    /// Create a point primitive with default style.
    #[must_use]
    pub fn point(position: Vec3) -> Self {
        Self {
            shape: Shape::Point { position },
            label: None,
            style: Style::default(),
        }
    }

    /// Create a segment primitive with default style.
    #[must_use]
    pub fn segment(start: Vec3, end: Vec3) -> Self {
        Self {
            shape: Shape::Segment { start, end },
            label: None,
            style: Style::default(),
        }
    }

    /// Set the style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Point or segment.
    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        self.shape.kind()
    }

    /// First coordinate: the point itself, or the segment start.
    #[must_use]
    pub fn origin(&self) -> Vec3 {
        match self.shape {
            Shape::Point { position } => position,
            Shape::Segment { start, .. } => start,
        }
    }

    /// `end - start` for segments, zero for points.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        match self.shape {
            Shape::Point { .. } => ORIGIN,
            Shape::Segment { start, end } => sub(end, start),
        }
    }

    /// Where a path continuing from this primitive begins.
    #[must_use]
    pub fn trailing_position(&self) -> Vec3 {
        match self.shape {
            Shape::Point { position } => position,
            Shape::Segment { end, .. } => end,
        }
    }

    /// Move the trailing position (see [`Self::trailing_position`]).
    pub fn set_trailing_position(&mut self, to: Vec3) {
        match &mut self.shape {
            Shape::Point { position } => *position = to,
            Shape::Segment { end, .. } => *end = to,
        }
    }

    /// The label, if present and non-empty.
    #[must_use]
    pub fn visible_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|text| !text.is_empty())
    }
}
