//! Scene builder with cursor semantics.
//!
//! A [`Scene`] records primitives in call order. Style and label setters act
//! on the *cursor*: the primitive most recently drawn, or a detached scratch
//! copy after [`Scene::break_path`]. New primitives inherit the cursor's style,
//! so a chain like
//!
//! ```
//! use splot_core::Scene;
//!
//! let mut scene = Scene::new();
//! scene
//!     .line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]).color("red").label("x")
//!     .line_to([1.0, 1.0, 0.0])
//!     .move_to([0.0, 0.0, 1.0]).color("blue")
//!     .line_to([0.0, 0.0, 2.0]);
//!
//! assert_eq!(scene.len(), 3);
//! assert_eq!(scene.primitives()[0].style.color.as_deref(), Some("red"));
//! assert_eq!(scene.primitives()[1].style.color.as_deref(), Some("red"));
//! assert_eq!(scene.primitives()[2].style.color.as_deref(), Some("blue"));
//! ```
//!
//! draws two red segments and one blue one, with the pen lifted in between.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::geometry::{add, cross, dot, normalize, scale, Vec3};
use crate::palette::standard_color;
use crate::primitive::{HeadAttribute, Primitive, PrimitiveKind, Shape};
use crate::style::clamp_width;
use crate::{SceneError, SceneResult};

/// Arc sampling density.
const SEGMENTS_PER_TURN: f32 = 60.0;

/// Upper bound on the segments a single arc is sampled into.
pub const MAX_ARC_SEGMENTS: u32 = 1 << 16;

/// Which primitive the cursor refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorState {
    /// Nothing drawn yet. Edits go to a scratch primitive that seeds the
    /// first real one.
    #[default]
    Empty,
    /// Edits go to the last drawn primitive.
    Committed,
    /// Edits go to a detached scratch primitive; the drawn ones are frozen.
    Editing,
}

/// An ordered collection of primitives plus a title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Script title.
    title: Option<String>,
    /// Drawn primitives, in call order.
    primitives: Vec<Primitive>,
    /// Cursor target while not `Committed`.
    scratch: Primitive,
    /// Current cursor state.
    cursor: CursorState,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    /// Current cursor state.
    #[must_use]
    pub fn cursor_state(&self) -> CursorState {
        self.cursor
    }

    /// The primitive style and label edits currently apply to.
    #[must_use]
    pub fn cursor(&self) -> &Primitive {
        match self.cursor {
            CursorState::Committed => self.primitives.last().unwrap_or(&self.scratch),
            CursorState::Empty | CursorState::Editing => &self.scratch,
        }
    }

    fn cursor_mut(&mut self) -> &mut Primitive {
        match self.cursor {
            CursorState::Committed => match self.primitives.last_mut() {
                Some(last) => last,
                None => &mut self.scratch,
            },
            CursorState::Empty | CursorState::Editing => &mut self.scratch,
        }
    }

    /// Detach the cursor from the last drawn primitive.
    ///
    /// Subsequent edits and moves act on a copy, so they do not alter what is
    /// already drawn. No effect unless the cursor is `Committed`.
    pub fn break_path(&mut self) -> &mut Self {
        if self.cursor == CursorState::Committed {
            if let Some(last) = self.primitives.last() {
                self.scratch = last.clone();
                self.cursor = CursorState::Editing;
                tracing::trace!("cursor detached after primitive {}", self.primitives.len() - 1);
            }
        }
        self
    }

    /// Where the next [`Self::line_to`] starts.
    #[must_use]
    pub fn current_position(&self) -> Vec3 {
        self.cursor().trailing_position()
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Append a primitive seeded from the cursor and make it the cursor.
    fn begin(&mut self, shape: Shape) -> &mut Self {
        let mut next = self.cursor().clone();
        next.shape = shape;
        next.label = None;
        self.primitives.push(next);
        self.cursor = CursorState::Committed;
        self
    }

    /// Draw a point.
    pub fn point(&mut self, position: Vec3) -> &mut Self {
        self.begin(Shape::Point { position })
    }

    /// Draw a segment from `from` to `to`.
    pub fn line(&mut self, from: Vec3, to: Vec3) -> &mut Self {
        self.begin(Shape::Segment {
            start: from,
            end: to,
        })
    }

    /// Draw a segment from the current position to `to`.
    pub fn line_to(&mut self, to: Vec3) -> &mut Self {
        let from = self.current_position();
        self.line(from, to)
    }

    /// Draw a segment from `origin` along `direction`.
    pub fn vector(&mut self, origin: Vec3, direction: Vec3) -> &mut Self {
        self.line(origin, add(origin, direction))
    }

    /// Lift the pen and move to `position` without drawing.
    pub fn move_to(&mut self, position: Vec3) -> &mut Self {
        self.break_path();
        self.cursor_mut().set_trailing_position(position);
        self
    }

    /// Draw an arc as a polyline.
    ///
    /// The arc lies in the plane through `center` perpendicular to `normal`
    /// and runs from `angle0` to `angle1` (radians), in that direction.
    #[allow(
        clippy::float_cmp,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn arc(
        &mut self,
        center: Vec3,
        normal: Vec3,
        radius: f32,
        angle0: f32,
        angle1: f32,
    ) -> &mut Self {
        if angle0 == angle1 {
            return self;
        }

        let normal = normalize(normal);
        let x_axis = [1.0, 0.0, 0.0];
        let (tangent, bitangent) = if dot(normal, x_axis).abs() < 0.9 {
            let bitangent = normalize(cross(normal, x_axis));
            (normalize(cross(bitangent, normal)), bitangent)
        } else {
            let tangent = normalize(cross([0.0, 1.0, 0.0], normal));
            (tangent, normalize(cross(normal, tangent)))
        };

        let sweep = angle1 - angle0;
        let segments = ((sweep / (TAU / SEGMENTS_PER_TURN)).abs().round() as u32)
            .clamp(1, MAX_ARC_SEGMENTS);
        let step = sweep / segments as f32;

        for i in 0..=segments {
            let (sin, cos) = (angle0 + step * i as f32).sin_cos();
            let offset = add(scale(tangent, radius * cos), scale(bitangent, radius * sin));
            let sample = add(center, offset);
            if i == 0 {
                self.move_to(sample);
            } else {
                self.line_to(sample);
            }
        }
        self
    }

    /// Draw a full circle.
    pub fn circle(&mut self, center: Vec3, normal: Vec3, radius: f32) -> &mut Self {
        self.arc(center, normal, radius, 0.0, TAU)
    }

    // ========================================================================
    // Style
    // ========================================================================

    /// Set the cursor color, e.g. `"#RRGGBB"`, `"red"`.
    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.cursor_mut().style.color = Some(color.into());
        self
    }

    /// Set the cursor color from [`crate::palette::STANDARD_COLORS`].
    pub fn std_color(&mut self, index: i32) -> &mut Self {
        self.color(standard_color(index))
    }

    /// Set the cursor line width or point size, clamped to `[1, 99]`.
    ///
    /// Widths above 99 wrap to unset; see [`clamp_width`].
    pub fn width(&mut self, width: i32) -> &mut Self {
        self.cursor_mut().style.width = clamp_width(width);
        self
    }

    /// Give the cursor segment a filled arrow head.
    pub fn filled_head(&mut self) -> &mut Self {
        self.cursor_mut().style.head = Some(HeadAttribute::FilledHead);
        self
    }

    /// Draw the cursor segment without an arrow head.
    pub fn no_head(&mut self) -> &mut Self {
        self.cursor_mut().style.head = Some(HeadAttribute::NoHead);
        self
    }

    /// Set a raw attribute: the point attribute for points, the head
    /// attribute for segments.
    pub fn attr(&mut self, attr: &str) -> &mut Self {
        let cursor = self.cursor_mut();
        match cursor.kind() {
            PrimitiveKind::Point => cursor.style.point_attr = Some(attr.to_string()),
            PrimitiveKind::Segment => cursor.style.head = Some(HeadAttribute::from(attr)),
        }
        self
    }

    /// Label the cursor primitive.
    pub fn label(&mut self, text: impl Into<String>) -> &mut Self {
        self.cursor_mut().label = Some(text.into());
        self
    }

    /// Set the script title.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The title, if set.
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Drawn primitives in call order.
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of drawn primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Serialize the scene to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> SceneResult<String> {
        serde_json::to_string(self).map_err(SceneError::Serialization)
    }

    /// Deserialize a scene from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        serde_json::from_str(json).map_err(SceneError::Serialization)
    }
}
