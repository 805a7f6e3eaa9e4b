#![forbid(unsafe_code)]

//! Intents: the requests the presentation layer sends to the engine.

use std::collections::BTreeSet;

use bitext_core::{Direction, Link, Position, Side, ViewMode};

/// A named request to move the alignment state forward.
///
/// Each intent is applied whole by [`reduce`](crate::engine::reduce) or not
/// at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Replace the link list wholesale.
    SetLinks(Vec<Link>),
    /// Switch between paragraph and line layout.
    SwitchView(ViewMode),
    /// Flip one segment's selection.
    ToggleSelectedSegment { side: Side, position: Position },
    /// Pick one segment. Idempotent, for drag-select gestures.
    SelectSegment { side: Side, position: Position },
    /// Un-pick one segment. Idempotent.
    DeselectSegment { side: Side, position: Position },
    /// Link the given positions, merging with every link they touch.
    AddLink {
        sources: BTreeSet<Position>,
        targets: BTreeSet<Position>,
    },
    /// Drop every link sharing a position with the given sets.
    RemoveLink {
        sources: BTreeSet<Position>,
        targets: BTreeSet<Position>,
    },
    /// Clear both selections and the draft.
    ResetSelections,
    /// Mark a link as focused (hovered or highlighted).
    FocusLink(Link),
    /// Clear a link's focus.
    UnfocusLink(Link),
    /// Set one side's writing direction.
    SetDirection { side: Side, direction: Direction },
    /// Replace the link draft.
    SetInProgressLink(Option<Link>),
    /// An intent kind this engine does not know. Applied as a no-op.
    Unrecognized(String),
}

impl Intent {
    /// Build an [`Intent::AddLink`].
    pub fn add_link<S, T>(sources: S, targets: T) -> Self
    where
        S: IntoIterator<Item = Position>,
        T: IntoIterator<Item = Position>,
    {
        Self::AddLink {
            sources: sources.into_iter().collect(),
            targets: targets.into_iter().collect(),
        }
    }

    /// Build an [`Intent::RemoveLink`].
    pub fn remove_link<S, T>(sources: S, targets: T) -> Self
    where
        S: IntoIterator<Item = Position>,
        T: IntoIterator<Item = Position>,
    {
        Self::RemoveLink {
            sources: sources.into_iter().collect(),
            targets: targets.into_iter().collect(),
        }
    }

    /// Build an [`Intent::RemoveLink`] covering every member of `link`.
    pub fn remove(link: &Link) -> Self {
        Self::RemoveLink {
            sources: link.sources.clone(),
            targets: link.targets.clone(),
        }
    }

    /// Build an [`Intent::ToggleSelectedSegment`].
    #[inline]
    pub const fn toggle(side: Side, position: Position) -> Self {
        Self::ToggleSelectedSegment { side, position }
    }

    /// Build an [`Intent::SelectSegment`].
    #[inline]
    pub const fn select(side: Side, position: Position) -> Self {
        Self::SelectSegment { side, position }
    }

    /// Build an [`Intent::DeselectSegment`].
    #[inline]
    pub const fn deselect(side: Side, position: Position) -> Self {
        Self::DeselectSegment { side, position }
    }

    /// Short stable name, used as the `kind` field in traces.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SetLinks(_) => "set_links",
            Self::SwitchView(_) => "switch_view",
            Self::ToggleSelectedSegment { .. } => "toggle_selected_segment",
            Self::SelectSegment { .. } => "select_segment",
            Self::DeselectSegment { .. } => "deselect_segment",
            Self::AddLink { .. } => "add_link",
            Self::RemoveLink { .. } => "remove_link",
            Self::ResetSelections => "reset_selections",
            Self::FocusLink(_) => "focus_link",
            Self::UnfocusLink(_) => "unfocus_link",
            Self::SetDirection { .. } => "set_direction",
            Self::SetInProgressLink(_) => "set_in_progress_link",
            Self::Unrecognized(_) => "unrecognized",
        }
    }

    /// Whether applying this intent can change `links`.
    pub const fn touches_links(&self) -> bool {
        matches!(
            self,
            Self::SetLinks(_) | Self::AddLink { .. } | Self::RemoveLink { .. }
        )
    }
}
