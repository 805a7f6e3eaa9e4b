#![forbid(unsafe_code)]

//! The alignment aggregate.
//!
//! [`AlignmentState`] is replaced, never edited: the engine reads one value
//! and returns another. All containers are persistent `im` collections, so a
//! new state shares every untouched field with the one it was derived from
//! and old snapshots stay valid for comparison.
//!
//! # Invariants
//!
//! 1. Every (side, position) pair appears in at most one entry of `links`
//!    once the engine has produced the state, provided the seeded links did.
//! 2. Selections store only picked positions.
//! 3. `focused_links` is keyed by link membership ([`LinkKey`]); entries for
//!    links that were merged away or removed are dropped by the engine.

use bitext_core::{
    Direction, Link, LinkKey, Position, Side, ViewMode, find_link_for, find_link_index,
};
use im::{OrdMap, Vector};

use crate::selection::Selection;

/// Everything the presentation layer renders from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlignmentState {
    pub(crate) links: Vector<Link>,
    pub(crate) selected_source: Selection,
    pub(crate) selected_target: Selection,
    pub(crate) focused_links: OrdMap<LinkKey, bool>,
    pub(crate) source_direction: Direction,
    pub(crate) target_direction: Direction,
    pub(crate) view: ViewMode,
    pub(crate) in_progress_link: Option<Link>,
}

impl AlignmentState {
    /// Seed a state with `links` and nothing selected or focused.
    #[must_use]
    pub fn new<I>(links: I) -> Self
    where
        I: IntoIterator<Item = Link>,
    {
        Self {
            links: links.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Set the initial view mode.
    #[must_use]
    pub fn with_view(mut self, view: ViewMode) -> Self {
        self.view = view;
        self
    }

    /// Set the initial writing direction of one side.
    #[must_use]
    pub fn with_direction(mut self, side: Side, direction: Direction) -> Self {
        match side {
            Side::Source => self.source_direction = direction,
            Side::Target => self.target_direction = direction,
        }
        self
    }

    // --- Links ---------------------------------------------------------------

    /// Links in display order.
    #[inline]
    pub fn links(&self) -> &Vector<Link> {
        &self.links
    }

    /// The link owning `position` on `side`, if any.
    pub fn link_for(&self, side: Side, position: Position) -> Option<&Link> {
        find_link_for(&self.links, side, position)
    }

    /// Index of the link owning `position` on `side`, if any.
    pub fn link_index_for(&self, side: Side, position: Position) -> Option<usize> {
        find_link_index(&self.links, side, position)
    }

    // --- Selection -----------------------------------------------------------

    /// Selection on one side.
    #[inline]
    pub fn selection(&self, side: Side) -> &Selection {
        match side {
            Side::Source => &self.selected_source,
            Side::Target => &self.selected_target,
        }
    }

    /// Whether `position` on `side` is picked.
    #[inline]
    pub fn is_selected(&self, side: Side, position: Position) -> bool {
        self.selection(side).is_selected(position)
    }

    // --- Focus ---------------------------------------------------------------

    /// The focus map, keyed by link membership.
    #[inline]
    pub fn focused_links(&self) -> &OrdMap<LinkKey, bool> {
        &self.focused_links
    }

    /// Whether `link` is focused. Links never focused read as false.
    pub fn is_link_focused(&self, link: &Link) -> bool {
        self.focused_links.get(&link.key()).copied().unwrap_or(false)
    }

    /// Whether the link owning the segment is focused.
    pub fn is_segment_focused(&self, side: Side, position: Position) -> bool {
        self.link_for(side, position)
            .is_some_and(|link| self.is_link_focused(link))
    }

    // --- Display -------------------------------------------------------------

    /// Writing direction of one side.
    #[inline]
    pub fn direction(&self, side: Side) -> Direction {
        match side {
            Side::Source => self.source_direction,
            Side::Target => self.target_direction,
        }
    }

    /// Active view mode.
    #[inline]
    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// The link draft, if one is in progress.
    #[inline]
    pub fn in_progress_link(&self) -> Option<&Link> {
        self.in_progress_link.as_ref()
    }
}
