#![forbid(unsafe_code)]

//! Find the link that owns a segment.
//!
//! Both lookups scan in order and stop at the first hit. Under the
//! partition invariant there is at most one hit anyway. Link counts are
//! document-scale, so a linear scan is fine.

use crate::link::Link;
use crate::segment::{Position, Segment, Side};

/// The first link whose `side` set contains `position`, if any.
pub fn find_link_for<'a, I>(links: I, side: Side, position: Position) -> Option<&'a Link>
where
    I: IntoIterator<Item = &'a Link>,
{
    links
        .into_iter()
        .find(|link| link.contains(side, position))
}

/// Index of the first link whose `side` set contains `position`, if any.
pub fn find_link_index<'a, I>(links: I, side: Side, position: Position) -> Option<usize>
where
    I: IntoIterator<Item = &'a Link>,
{
    links
        .into_iter()
        .position(|link| link.contains(side, position))
}

/// [`find_link_for`] keyed by a segment.
#[inline]
pub fn find_link_for_segment<'a, I>(links: I, segment: &Segment) -> Option<&'a Link>
where
    I: IntoIterator<Item = &'a Link>,
{
    find_link_for(links, segment.side, segment.position)
}
