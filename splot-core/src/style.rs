//! Style canonicalization and grouping.
//!
//! Two primitives are drawn by the same plot clause iff their [`StyleKey`]s
//! are equal. Keys are built after default resolution, so a style with an
//! explicit `"black"` and one with no color at all land in the same group.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::primitive::{Primitive, PrimitiveKind, Style};

/// Color used when none is set.
pub const DEFAULT_COLOR: &str = "black";

/// Point size used when none is set.
pub const DEFAULT_POINT_WIDTH: u32 = 3;

/// Line width used when none is set.
pub const DEFAULT_SEGMENT_WIDTH: u32 = 1;

/// Head attribute used for segments when none is set.
pub const DEFAULT_HEAD: &str = "nohead";

/// Largest width that survives clamping. Anything above wraps to `0` (unset).
pub const MAX_WIDTH: u32 = 99;

/// Clamp a requested width into `[1, 99]`.
///
/// Values below 1 become 1. Values above 99 become `0`, which the
/// canonicalizer later resolves to the kind's default width. The wrap is kept
/// for compatibility with scripts produced by earlier releases.
#[must_use]
pub fn clamp_width(width: i32) -> u32 {
    match u32::try_from(width) {
        Ok(w) if w > MAX_WIDTH => 0,
        Ok(w) => w.max(1),
        Err(_) => 1,
    }
}

/// Canonical, totally ordered style.
///
/// Field order defines the sort: segments before points, then width, color
/// and attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StyleKey {
    /// Point or segment.
    pub kind: PrimitiveKind,
    /// Resolved width, in `1..=99`.
    pub width: u32,
    /// Resolved color.
    pub color: String,
    /// Head attribute for segments, point attribute for points.
    pub attr: String,
}

/// Resolve defaults and build the canonical key for a style.
#[must_use]
pub fn canonicalize(kind: PrimitiveKind, style: &Style) -> StyleKey {
    let color = match style.color.as_deref() {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => DEFAULT_COLOR.to_string(),
    };

    let width = if style.width > MAX_WIDTH { 0 } else { style.width };

    let (width, attr) = match kind {
        PrimitiveKind::Point => {
            let width = if width == 0 { DEFAULT_POINT_WIDTH } else { width };
            (width, style.point_attr.clone().unwrap_or_default())
        }
        PrimitiveKind::Segment => {
            let width = if width == 0 {
                DEFAULT_SEGMENT_WIDTH
            } else {
                width
            };
            let head = style
                .head
                .as_ref()
                .map_or(DEFAULT_HEAD, |h| h.as_str())
                .to_string();
            (width, head)
        }
    };

    StyleKey {
        kind,
        width,
        color,
        attr,
    }
}

/// Canonical key of a primitive's style.
#[must_use]
pub fn key_of(primitive: &Primitive) -> StyleKey {
    canonicalize(primitive.kind(), &primitive.style)
}

/// One group of equivalent styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleGroup {
    /// The shared canonical style.
    pub key: StyleKey,
    /// Indices of member primitives, in insertion order.
    pub members: Vec<usize>,
}

/// Partition of a primitive sequence by canonical style, in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleGroups {
    groups: Vec<StyleGroup>,
    /// Group position of each primitive.
    group_of: Vec<usize>,
}

impl StyleGroups {
    /// Group primitives by canonical style.
    #[must_use]
    pub fn from_primitives(primitives: &[Primitive]) -> Self {
        let mut by_key: BTreeMap<StyleKey, Vec<usize>> = BTreeMap::new();
        for (i, prim) in primitives.iter().enumerate() {
            by_key.entry(key_of(prim)).or_default().push(i);
        }

        let mut group_of = vec![0; primitives.len()];
        let groups: Vec<StyleGroup> = by_key
            .into_iter()
            .enumerate()
            .map(|(pos, (key, members))| {
                for &m in &members {
                    group_of[m] = pos;
                }
                StyleGroup { key, members }
            })
            .collect();

        Self { groups, group_of }
    }

    /// Groups in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleGroup> {
        self.groups.iter()
    }

    /// Sorted distinct keys.
    pub fn keys(&self) -> impl Iterator<Item = &StyleKey> {
        self.groups.iter().map(|g| &g.key)
    }

    /// The group a primitive belongs to.
    #[must_use]
    pub fn group_of(&self, primitive_index: usize) -> Option<&StyleGroup> {
        self.group_of
            .get(primitive_index)
            .and_then(|&pos| self.groups.get(pos))
    }

    /// Number of distinct styles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
