#![forbid(unsafe_code)]

//! Links between source and target positions.
//!
//! A [`Link`] associates a set of source positions with a set of target
//! positions. Both sets are ordered and deduplicated, so unioning two links
//! never produces repeated members.
//!
//! Links are compared by value. The focus bookkeeping in the runtime keys on
//! [`LinkKey`], the link's membership, rather than on where a particular
//! `Link` value happens to live in memory.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::segment::{Position, Side};

/// Where a link came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Origin {
    /// Created or edited by an annotator.
    #[default]
    Manual,
    /// Supplied by an external aligner. Never produced by the engine.
    Automatic,
}

/// A many-to-many association between source and target positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Link {
    /// Source positions.
    pub sources: BTreeSet<Position>,
    /// Target positions.
    pub targets: BTreeSet<Position>,
    /// Provenance; serialized as `type` to match the interchange format.
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub origin: Origin,
}

impl Link {
    /// Create a link from any position iterables.
    pub fn new<S, T>(origin: Origin, sources: S, targets: T) -> Self
    where
        S: IntoIterator<Item = Position>,
        T: IntoIterator<Item = Position>,
    {
        Self {
            sources: sources.into_iter().collect(),
            targets: targets.into_iter().collect(),
            origin,
        }
    }

    /// Create an annotator-made link.
    pub fn manual<S, T>(sources: S, targets: T) -> Self
    where
        S: IntoIterator<Item = Position>,
        T: IntoIterator<Item = Position>,
    {
        Self::new(Origin::Manual, sources, targets)
    }

    /// Create an aligner-supplied link.
    pub fn automatic<S, T>(sources: S, targets: T) -> Self
    where
        S: IntoIterator<Item = Position>,
        T: IntoIterator<Item = Position>,
    {
        Self::new(Origin::Automatic, sources, targets)
    }

    /// Positions on one side.
    #[inline]
    pub fn positions(&self, side: Side) -> &BTreeSet<Position> {
        match side {
            Side::Source => &self.sources,
            Side::Target => &self.targets,
        }
    }

    /// Whether this link owns `position` on `side`.
    #[inline]
    pub fn contains(&self, side: Side, position: Position) -> bool {
        self.positions(side).contains(&position)
    }

    /// Whether the link shares at least one source or one target with the
    /// given sets.
    pub fn overlaps(&self, sources: &BTreeSet<Position>, targets: &BTreeSet<Position>) -> bool {
        !self.sources.is_disjoint(sources) || !self.targets.is_disjoint(targets)
    }

    /// Add positions in place. The result is always [`Origin::Manual`].
    pub fn absorb(&mut self, sources: &BTreeSet<Position>, targets: &BTreeSet<Position>) {
        self.sources.extend(sources.iter().copied());
        self.targets.extend(targets.iter().copied());
        self.origin = Origin::Manual;
    }

    /// True when the link has no members on either side.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.targets.is_empty()
    }

    /// Content identity of this link.
    #[must_use]
    pub fn key(&self) -> LinkKey {
        LinkKey {
            sources: self.sources.clone(),
            targets: self.targets.clone(),
        }
    }
}

/// Membership-based identity of a [`Link`].
///
/// Two links with the same members have the same key regardless of origin.
/// A merge changes membership and therefore produces a new key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkKey {
    sources: BTreeSet<Position>,
    targets: BTreeSet<Position>,
}

impl LinkKey {
    /// Source members.
    pub fn sources(&self) -> &BTreeSet<Position> {
        &self.sources
    }

    /// Target members.
    pub fn targets(&self) -> &BTreeSet<Position> {
        &self.targets
    }
}

impl From<&Link> for LinkKey {
    fn from(link: &Link) -> Self {
        link.key()
    }
}
