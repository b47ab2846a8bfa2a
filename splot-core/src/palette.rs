//! Palette assignment and the standard color table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::style::StyleKey;

/// Twelve distinguishable colors, gray and black first.
pub const STANDARD_COLORS: [&str; 12] = [
    "#808080", "#000000", "#C20A0A", "#C2780A", "#9DC20A", "#2FC20A", "#0AC253", "#0AC2C2",
    "#0A53C2", "#2F0AC2", "#9D0AC2", "#C20A78",
];

/// Look up a standard color. Indices wrap in both directions.
#[must_use]
pub fn standard_color(index: i32) -> &'static str {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let len = STANDARD_COLORS.len() as i32;
    #[allow(clippy::cast_sign_loss)]
    let idx = index.rem_euclid(len) as usize;
    STANDARD_COLORS[idx]
}

/// One palette slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Literal color string.
    pub color: String,
    /// Dense index used as the numeric color channel.
    pub index: usize,
}

/// Dense mapping from color strings to indices `0..K`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    lookup: HashMap<String, usize>,
}

impl Palette {
    /// Assign indices to colors in first-seen order over sorted keys.
    ///
    /// `keys` must already be in canonical order; the assignment depends on it.
    pub fn from_sorted_keys<'a>(keys: impl IntoIterator<Item = &'a StyleKey>) -> Self {
        let mut palette = Self::default();
        for key in keys {
            if palette.lookup.contains_key(&key.color) {
                continue;
            }
            let index = palette.entries.len();
            palette.lookup.insert(key.color.clone(), index);
            palette.entries.push(PaletteEntry {
                color: key.color.clone(),
                index,
            });
        }
        palette
    }

    /// Index of a color, if present.
    #[must_use]
    pub fn index_of(&self, color: &str) -> Option<usize> {
        self.lookup.get(color).copied()
    }

    /// Entries ordered by index.
    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
