#![forbid(unsafe_code)]

//! Cyclic group ids for painting links.
//!
//! A link's group is its index in the link list modulo the palette size, so
//! neighbouring links get different swatches while the palette stays small.
//!
//! Segments that own no link are assigned a group from their own display
//! index instead. This is a display convention only: an unlinked segment can
//! land on the same group number as some link, and the presentation layer is
//! expected to style linked and unlinked segments differently anyway. Nothing
//! in the engine depends on group numbers.

use std::num::NonZeroUsize;

use crate::link::Link;
use crate::locate::find_link_index;
use crate::segment::Segment;

/// Palette size used when none is configured.
pub const DEFAULT_GROUP_COUNT: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(n) => n,
    None => unreachable!(),
};

/// A fixed-size cyclic palette of group ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupPalette {
    size: NonZeroUsize,
}

impl Default for GroupPalette {
    fn default() -> Self {
        Self::new(DEFAULT_GROUP_COUNT)
    }
}

impl GroupPalette {
    /// Create a palette with `size` groups.
    #[inline]
    pub const fn new(size: NonZeroUsize) -> Self {
        Self { size }
    }

    /// Create a palette, rejecting a size of zero.
    #[inline]
    pub fn with_size(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(Self::new)
    }

    /// Number of distinct groups.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size.get()
    }

    /// Group id for the link at `link_index`.
    #[inline]
    pub const fn group_of(&self, link_index: usize) -> usize {
        link_index % self.size.get()
    }

    /// Group id for a segment shown at `display_index` in its stream.
    ///
    /// Linked segments take their link's group; unlinked ones fall back to
    /// `display_index`.
    pub fn group_for_segment<'a, I>(&self, links: I, segment: &Segment, display_index: usize) -> usize
    where
        I: IntoIterator<Item = &'a Link>,
    {
        let index = find_link_index(links, segment.side, segment.position).unwrap_or(display_index);
        self.group_of(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_palette_rejected() {
        assert!(GroupPalette::with_size(0).is_none());
        assert_eq!(GroupPalette::with_size(3).map(|p| p.size()), Some(3));
        assert_eq!(GroupPalette::default().size(), 8);
    }

    #[test]
    fn group_cycles_with_palette_size() {
        let palette = GroupPalette::with_size(4).unwrap();
        let groups: Vec<usize> = (0..10).map(|i| palette.group_of(i)).collect();
        assert_eq!(groups, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn segment_group_prefers_link_index() {
        let palette = GroupPalette::with_size(4).unwrap();
        let links = vec![
            Link::manual([0], [0]),
            Link::manual([1], [1]),
            Link::manual([2], [2]),
        ];
        // Linked: link index 2, regardless of display index.
        assert_eq!(palette.group_for_segment(&links, &Segment::source(2), 9), 2);
        // Unlinked: display index 5 -> 5 % 4.
        assert_eq!(palette.group_for_segment(&links, &Segment::source(7), 5), 1);
    }
}
