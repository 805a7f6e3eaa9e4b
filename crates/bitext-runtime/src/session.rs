#![forbid(unsafe_code)]

//! The editing session: the one owner of an alignment state.
//!
//! A [`Session`] is what the presentation layer holds. It is seeded once
//! with the two segment streams and the initial links, then moved forward
//! only through intents:
//!
//! - [`Session::dispatch`] applies an intent immediately.
//! - [`IntentSender`] handles, cloned from [`Session::sender`], queue
//!   intents from anywhere (including other threads); [`Session::drain`]
//!   applies everything queued, in submission order.
//!
//! Components that only render read [`Session::state`] or
//! [`Session::project`]. Nothing is shared through globals; a component that
//! needs to emit intents is handed a sender.
//!
//! # Revisions
//!
//! `revision` starts at 0 and increments by exactly 1 each time an intent
//! changes the state. An intent that leaves the state equal (an ignored add,
//! an unrecognized kind, re-selecting a picked segment) does not bump it, so
//! hosts can compare revisions to decide whether to redraw.

use std::fmt;
use std::sync::mpsc;

use bitext_core::{GroupPalette, Link, Position, Segment, Side};

use crate::config::EditorConfig;
use crate::engine::reduce;
use crate::intent::Intent;
use crate::projection::{SegmentView, project_side};
use crate::state::AlignmentState;

/// A cloneable handle for queueing intents into a [`Session`].
#[derive(Debug, Clone)]
pub struct IntentSender {
    inner: mpsc::Sender<Intent>,
}

impl IntentSender {
    /// Queue an intent. Returns false if the session is gone.
    pub fn send(&self, intent: Intent) -> bool {
        self.inner.send(intent).is_ok()
    }
}

/// Owner of the alignment state for one document.
pub struct Session {
    source_segments: Vec<Segment>,
    target_segments: Vec<Segment>,
    state: AlignmentState,
    palette: GroupPalette,
    revision: u64,
    sender: mpsc::Sender<Intent>,
    receiver: mpsc::Receiver<Intent>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("source_segments", &self.source_segments.len())
            .field("target_segments", &self.target_segments.len())
            .field("links", &self.state.links().len())
            .field("palette", &self.palette)
            .field("revision", &self.revision)
            .finish()
    }
}

impl Session {
    /// Start a session with default editor settings.
    pub fn new<S, T, L>(source_segments: S, target_segments: T, links: L) -> Self
    where
        S: IntoIterator<Item = Segment>,
        T: IntoIterator<Item = Segment>,
        L: IntoIterator<Item = Link>,
    {
        Self::with_config(&EditorConfig::default(), source_segments, target_segments, links)
    }

    /// Start a session using `config` for the palette and display defaults.
    pub fn with_config<S, T, L>(
        config: &EditorConfig,
        source_segments: S,
        target_segments: T,
        links: L,
    ) -> Self
    where
        S: IntoIterator<Item = Segment>,
        T: IntoIterator<Item = Segment>,
        L: IntoIterator<Item = Link>,
    {
        let (sender, receiver) = mpsc::channel();
        let session = Self {
            source_segments: source_segments.into_iter().collect(),
            target_segments: target_segments.into_iter().collect(),
            state: config.initial_state(links),
            palette: config.palette(),
            revision: 0,
            sender,
            receiver,
        };
        tracing::debug!(
            target: "bitext.session",
            source_segments = session.source_segments.len(),
            target_segments = session.target_segments.len(),
            links = session.state.links().len(),
            groups = session.palette.size(),
            "session started"
        );
        session
    }

    // --- Reading -------------------------------------------------------------

    /// The current state.
    #[inline]
    pub fn state(&self) -> &AlignmentState {
        &self.state
    }

    /// Number of state-changing intents applied so far.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Palette used for group ids.
    #[inline]
    pub fn palette(&self) -> GroupPalette {
        self.palette
    }

    /// Segments of one stream, in display order.
    pub fn segments(&self, side: Side) -> &[Segment] {
        match side {
            Side::Source => &self.source_segments,
            Side::Target => &self.target_segments,
        }
    }

    /// Render facts for every segment of one stream.
    pub fn project(&self, side: Side) -> Vec<SegmentView> {
        project_side(&self.state, side, self.segments(side), self.palette)
    }

    // --- Writing -------------------------------------------------------------

    /// Apply one intent now. Returns whether the state changed.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let kind = intent.kind();
        let next = reduce(&self.state, intent);
        let changed = next != self.state;
        if changed {
            self.state = next;
            self.revision += 1;
        }
        tracing::debug!(
            target: "bitext.session",
            kind,
            changed,
            revision = self.revision,
            "intent dispatched"
        );
        changed
    }

    /// Apply intents in order. Returns how many changed the state.
    pub fn dispatch_all<I>(&mut self, intents: I) -> usize
    where
        I: IntoIterator<Item = Intent>,
    {
        intents
            .into_iter()
            .map(|intent| self.dispatch(intent))
            .filter(|changed| *changed)
            .count()
    }

    /// Decode a JSON envelope and apply it.
    ///
    /// Unknown intent names are applied as a logged no-op; only malformed
    /// envelopes are errors, and they leave the state untouched.
    #[cfg(feature = "wire")]
    pub fn dispatch_json(&mut self, json: &str) -> Result<bool, crate::wire::WireError> {
        let intent = crate::wire::decode_intent(json).inspect_err(|err| {
            tracing::warn!(target: "bitext.session", error = %err, "rejected intent envelope");
        })?;
        Ok(self.dispatch(intent))
    }

    /// A handle for queueing intents from elsewhere.
    pub fn sender(&self) -> IntentSender {
        IntentSender {
            inner: self.sender.clone(),
        }
    }

    /// Apply every queued intent in FIFO order. Returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(intent) = self.receiver.try_recv() {
            self.dispatch(intent);
            applied += 1;
        }
        if applied > 0 {
            tracing::debug!(
                target: "bitext.session",
                applied,
                revision = self.revision,
                "queued intents drained"
            );
        }
        applied
    }

    // --- Editor controls -----------------------------------------------------

    /// Link everything currently selected on both sides.
    ///
    /// Does nothing unless both sides have a selection. Returns whether a
    /// link was added.
    pub fn commit_selection(&mut self) -> bool {
        let sources = self.state.selection(Side::Source).to_set();
        let targets = self.state.selection(Side::Target).to_set();
        if sources.is_empty() || targets.is_empty() {
            return false;
        }
        self.dispatch(Intent::AddLink { sources, targets })
    }

    /// Switch to the other view mode.
    pub fn toggle_view(&mut self) -> bool {
        let view = self.state.view().toggled();
        self.dispatch(Intent::SwitchView(view))
    }

    /// Flip one side's writing direction.
    pub fn flip_direction(&mut self, side: Side) -> bool {
        let direction = self.state.direction(side).flipped();
        self.dispatch(Intent::SetDirection { side, direction })
    }

    /// Focus or unfocus the link owning a hovered segment.
    ///
    /// Hovering an unlinked segment does nothing.
    pub fn hover_segment(&mut self, side: Side, position: Position, hovered: bool) -> bool {
        let Some(link) = self.state.link_for(side, position).cloned() else {
            return false;
        };
        if hovered {
            self.dispatch(Intent::FocusLink(link))
        } else {
            self.dispatch(Intent::UnfocusLink(link))
        }
    }
}
