//! # splot core
//!
//! Scene accumulation for 3D plot scripts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 splot-core                  │
//! ├─────────────────────────────────────────────┤
//! │  Scene builder   │  Style canonicalizer     │
//! │  - Primitives    │  - Default resolution    │
//! │  - Cursor        │  - Width clamp           │
//! │  - Pen-up moves  │  - Grouping / ordering   │
//! ├─────────────────────────────────────────────┤
//! │  Palette         │  Geometry                │
//! │  - Color indices │  - Vec3 helpers          │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod geometry;
pub mod palette;
pub mod primitive;
pub mod scene;
pub mod style;

pub use error::{SceneError, SceneResult};
pub use geometry::Vec3;
pub use palette::{standard_color, Palette, PaletteEntry, STANDARD_COLORS};
pub use primitive::{HeadAttribute, Primitive, PrimitiveKind, Shape, Style};
pub use scene::{CursorState, Scene, MAX_ARC_SEGMENTS};
pub use style::{canonicalize, clamp_width, StyleGroup, StyleGroups, StyleKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
