#![forbid(unsafe_code)]

//! The transition engine.
//!
//! [`reduce`] is the only code that produces a changed [`AlignmentState`].
//! It never mutates its input; every arm builds a new state that shares
//! untouched fields with the old one.
//!
//! # Linking
//!
//! Adding a link is transitively merging. Every existing link that shares a
//! source or a target with the incoming sets is pulled in, and all of them
//! are coalesced with the incoming positions into a single manual link that
//! takes the place of the first one touched. When nothing is touched, the
//! new link is appended.
//!
//! ```text
//! links:  [A{1}/{4}]  [B{2}/{6}]  [C{3}/{8}]
//! add:    {1,2}/{9}
//! result: [AB{1,2}/{4,6,9}]  [C{3}/{8}]
//! ```
//!
//! Coalescing is what keeps the partition invariant: enlarging A and B
//! separately would leave source 1, source 2 and target 9 in both.
//!
//! Removing is the inverse filter: every link sharing any source or target
//! with the inputs is dropped.
//!
//! # Failure Modes
//!
//! None. Every intent is total. An [`Intent::Unrecognized`] intent and an
//! add with an empty side return the state unchanged and are logged.

use std::collections::BTreeSet;

use bitext_core::{Link, LinkKey, Origin, Position, Side, check_partition, is_partitioned};
use im::{OrdMap, Vector};

use crate::intent::Intent;
use crate::selection::Selection;
use crate::state::AlignmentState;

/// Apply one intent, returning the next state.
#[must_use]
pub fn reduce(state: &AlignmentState, intent: Intent) -> AlignmentState {
    let _span = tracing::debug_span!("bitext.intent", kind = intent.kind()).entered();

    match intent {
        Intent::SetLinks(links) => {
            if let Err(violation) = check_partition(&links) {
                tracing::warn!(
                    target: "bitext.engine",
                    %violation,
                    "set_links received overlapping links"
                );
            }
            let links: Vector<Link> = links.into_iter().collect();
            AlignmentState {
                focused_links: retain_present(&state.focused_links, &links),
                links,
                ..state.clone()
            }
        }
        Intent::SwitchView(view) => AlignmentState {
            view,
            ..state.clone()
        },
        Intent::ToggleSelectedSegment { side, position } => {
            with_selection(state, side, state.selection(side).toggled(position))
        }
        Intent::SelectSegment { side, position } => {
            with_selection(state, side, state.selection(side).selected(position))
        }
        Intent::DeselectSegment { side, position } => {
            with_selection(state, side, state.selection(side).deselected(position))
        }
        Intent::AddLink { sources, targets } => add_link(state, &sources, &targets),
        Intent::RemoveLink { sources, targets } => remove_link(state, &sources, &targets),
        Intent::ResetSelections => AlignmentState {
            selected_source: Selection::new(),
            selected_target: Selection::new(),
            in_progress_link: None,
            ..state.clone()
        },
        Intent::FocusLink(link) => set_focus(state, &link, true),
        Intent::UnfocusLink(link) => set_focus(state, &link, false),
        Intent::SetDirection { side, direction } => state.clone().with_direction(side, direction),
        Intent::SetInProgressLink(draft) => AlignmentState {
            in_progress_link: draft,
            ..state.clone()
        },
        Intent::Unrecognized(kind) => {
            tracing::warn!(
                target: "bitext.engine",
                kind = %kind,
                "ignoring unrecognized intent"
            );
            state.clone()
        }
    }
}

/// Apply intents in order, returning the final state.
#[must_use]
pub fn reduce_all<I>(state: &AlignmentState, intents: I) -> AlignmentState
where
    I: IntoIterator<Item = Intent>,
{
    intents
        .into_iter()
        .fold(state.clone(), |acc, intent| reduce(&acc, intent))
}

// ---------------------------------------------------------------------------
// Link list algorithms
// ---------------------------------------------------------------------------

/// Result of merging incoming positions into a link list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    /// The new link list.
    pub links: Vector<Link>,
    /// How many existing links were folded into the new one.
    pub absorbed: usize,
    /// Index of the merged or appended link.
    pub index: usize,
}

/// Merge `sources`/`targets` into `links`.
///
/// All links overlapping the inputs are coalesced with them into one manual
/// link at the index of the first overlap; when there is no overlap the new
/// link is appended. Callers must reject empty inputs first.
pub fn merge_links(
    links: &Vector<Link>,
    sources: &BTreeSet<Position>,
    targets: &BTreeSet<Position>,
) -> Merged {
    let mut combined = Link::new(Origin::Manual, sources.iter().copied(), targets.iter().copied());
    let mut kept = Vector::new();
    let mut first = None;
    let mut absorbed = 0;

    for link in links {
        if link.overlaps(sources, targets) {
            first.get_or_insert(kept.len());
            combined.absorb(&link.sources, &link.targets);
            absorbed += 1;
        } else {
            kept.push_back(link.clone());
        }
    }

    let index = first.unwrap_or(kept.len());
    kept.insert(index, combined);
    Merged {
        links: kept,
        absorbed,
        index,
    }
}

/// Drop every link sharing a source or target with the inputs.
///
/// Returns the surviving links in their original order.
pub fn drop_overlapping(
    links: &Vector<Link>,
    sources: &BTreeSet<Position>,
    targets: &BTreeSet<Position>,
) -> Vector<Link> {
    links
        .iter()
        .filter(|link| !link.overlaps(sources, targets))
        .cloned()
        .collect()
}

fn add_link(
    state: &AlignmentState,
    sources: &BTreeSet<Position>,
    targets: &BTreeSet<Position>,
) -> AlignmentState {
    if sources.is_empty() || targets.is_empty() {
        tracing::debug!(
            target: "bitext.engine",
            sources = sources.len(),
            targets = targets.len(),
            "add_link with an empty side ignored"
        );
        return state.clone();
    }

    let merged = merge_links(&state.links, sources, targets);
    tracing::debug!(
        target: "bitext.engine",
        links_before = state.links.len(),
        links_after = merged.links.len(),
        absorbed = merged.absorbed,
        index = merged.index,
        "link added"
    );
    debug_assert_partition_kept(&state.links, &merged.links);

    AlignmentState {
        focused_links: retain_present(&state.focused_links, &merged.links),
        links: merged.links,
        selected_source: Selection::new(),
        selected_target: Selection::new(),
        in_progress_link: None,
        ..state.clone()
    }
}

fn remove_link(
    state: &AlignmentState,
    sources: &BTreeSet<Position>,
    targets: &BTreeSet<Position>,
) -> AlignmentState {
    let links = drop_overlapping(&state.links, sources, targets);
    let removed = state.links.len() - links.len();
    tracing::debug!(
        target: "bitext.engine",
        links_before = state.links.len(),
        removed,
        "links removed"
    );
    debug_assert_partition_kept(&state.links, &links);

    // Nothing matched: keep the original vector so the snapshot is shared.
    let links = if removed == 0 {
        state.links.clone()
    } else {
        links
    };
    AlignmentState {
        focused_links: retain_present(&state.focused_links, &links),
        links,
        in_progress_link: None,
        ..state.clone()
    }
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn with_selection(state: &AlignmentState, side: Side, selection: Selection) -> AlignmentState {
    match side {
        Side::Source => AlignmentState {
            selected_source: selection,
            ..state.clone()
        },
        Side::Target => AlignmentState {
            selected_target: selection,
            ..state.clone()
        },
    }
}

fn set_focus(state: &AlignmentState, link: &Link, focused: bool) -> AlignmentState {
    AlignmentState {
        focused_links: state.focused_links.update(link.key(), focused),
        ..state.clone()
    }
}

/// Keep focus entries only for links still present.
fn retain_present(focused: &OrdMap<LinkKey, bool>, links: &Vector<Link>) -> OrdMap<LinkKey, bool> {
    if focused.is_empty() {
        return focused.clone();
    }
    let present: BTreeSet<_> = links.iter().map(Link::key).collect();
    focused
        .iter()
        .filter(|(key, _)| present.contains(*key))
        .map(|(key, value)| (key.clone(), *value))
        .collect()
}

/// Debug builds check that a link edit never breaks a partitioned list.
fn debug_assert_partition_kept(before: &Vector<Link>, after: &Vector<Link>) {
    if cfg!(debug_assertions) && is_partitioned(before) {
        if let Err(violation) = check_partition(after) {
            panic!("link edit broke the partition invariant: {violation}");
        }
    }
}
