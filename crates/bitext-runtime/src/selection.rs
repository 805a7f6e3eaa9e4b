#![forbid(unsafe_code)]

//! Per-side segment selection.
//!
//! A [`Selection`] answers "is this position picked?" with absence meaning
//! no. Only picked positions are stored, so toggling a position twice leaves
//! the selection exactly as it was.
//!
//! Backed by [`im::OrdSet`]: cloning is O(1) and an edited selection shares
//! structure with the snapshot it came from.

use std::collections::BTreeSet;

use bitext_core::Position;
use im::OrdSet;

/// Positions the annotator has picked on one side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    picked: OrdSet<Position>,
}

impl Selection {
    /// An empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `position` is picked.
    #[inline]
    pub fn is_selected(&self, position: Position) -> bool {
        self.picked.contains(&position)
    }

    /// Copy with `position` flipped.
    #[must_use]
    pub fn toggled(&self, position: Position) -> Self {
        if self.is_selected(position) {
            self.deselected(position)
        } else {
            self.selected(position)
        }
    }

    /// Copy with `position` picked.
    #[must_use]
    pub fn selected(&self, position: Position) -> Self {
        let mut picked = self.picked.clone();
        picked.insert(position);
        Self { picked }
    }

    /// Copy with `position` not picked.
    #[must_use]
    pub fn deselected(&self, position: Position) -> Self {
        let mut picked = self.picked.clone();
        picked.remove(&position);
        Self { picked }
    }

    /// Number of picked positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.picked.len()
    }

    /// True when nothing is picked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    /// Picked positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.picked.iter().copied()
    }

    /// Picked positions as an owned set, ready for a link intent.
    pub fn to_set(&self) -> BTreeSet<Position> {
        self.iter().collect()
    }
}

impl FromIterator<Position> for Selection {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            picked: iter.into_iter().collect(),
        }
    }
}
