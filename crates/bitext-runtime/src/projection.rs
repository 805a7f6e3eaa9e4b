#![forbid(unsafe_code)]

//! Per-segment render facts.
//!
//! The presentation layer paints segments; this module tells it what each
//! one should look like without it having to query links itself.

use bitext_core::{GroupPalette, Position, Segment, Side};

use crate::state::AlignmentState;

/// What the presentation layer needs to draw one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentView {
    /// Stream the segment belongs to.
    pub side: Side,
    /// Segment position.
    pub position: Position,
    /// Index of the owning link, if any.
    pub link_index: Option<usize>,
    /// Palette group for coloring.
    pub group: usize,
    /// Owning link is focused.
    pub is_focused: bool,
    /// Picked in the current selection.
    pub is_selected: bool,
    /// Non-content-bearing segment; drawn muted but still selectable.
    pub is_disabled: bool,
}

impl SegmentView {
    /// Whether the segment belongs to some link.
    #[inline]
    pub fn is_linked(&self) -> bool {
        self.link_index.is_some()
    }
}

/// Project one segment shown at `display_index`.
pub fn project_segment(
    state: &AlignmentState,
    segment: &Segment,
    display_index: usize,
    palette: GroupPalette,
) -> SegmentView {
    let link_index = state.link_index_for(segment.side, segment.position);
    let is_focused = link_index
        .and_then(|index| state.links().get(index))
        .is_some_and(|link| state.is_link_focused(link));
    SegmentView {
        side: segment.side,
        position: segment.position,
        link_index,
        group: palette.group_of(link_index.unwrap_or(display_index)),
        is_focused,
        is_selected: state.is_selected(segment.side, segment.position),
        is_disabled: segment.is_disabled(),
    }
}

/// Project every segment of one stream, in display order.
///
/// Segments whose `side` differs from `side` are skipped; display indices
/// count only the segments kept.
pub fn project_side(
    state: &AlignmentState,
    side: Side,
    segments: &[Segment],
    palette: GroupPalette,
) -> Vec<SegmentView> {
    segments
        .iter()
        .filter(|segment| segment.side == side)
        .enumerate()
        .map(|(display_index, segment)| project_segment(state, segment, display_index, palette))
        .collect()
}
