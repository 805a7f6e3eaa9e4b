#![forbid(unsafe_code)]

//! Tracing contract for the engine and session.
//!
//! Verify that every transition runs inside a `bitext.intent` span carrying
//! the intent kind, that link edits log their outcome inside that span, and
//! that ignored or suspicious input is reported at warn.
//!
//! Run:
//!   cargo test -p bitext-runtime --test tracing_intent_spans

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bitext_core::{Link, Side};
use bitext_runtime::{AlignmentState, Intent, Session, reduce};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    target: String,
    message: String,
    fields: HashMap<String, String>,
    parent_span_name: Option<String>,
}

#[derive(Default, Clone)]
struct Captured {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl Captured {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    fn events_with_message(&self, message: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.message == message)
            .collect()
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

struct CaptureLayer(Captured);

impl<S> tracing_subscriber::Layer<S> for CaptureLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.0.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);

        let message = visitor
            .0
            .iter()
            .find(|(k, _)| k == "message")
            .map(|(_, v)| v.clone())
            .unwrap_or_default();
        let parent_span_name = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span_ref| span_ref.name().to_string());

        self.0.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message,
            fields: visitor.0.into_iter().collect(),
            parent_span_name,
        });
    }
}

fn with_captured<F>(f: F) -> Captured
where
    F: FnOnce(),
{
    let captured = Captured::default();
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::TRACE)
        .with(CaptureLayer(captured.clone()));
    tracing::subscriber::with_default(subscriber, f);
    captured
}

// ============================================================================
// Spans
// ============================================================================

#[test]
fn every_reduce_opens_an_intent_span() {
    let captured = with_captured(|| {
        let state = AlignmentState::default();
        let state = reduce(&state, Intent::toggle(Side::Source, 1));
        let state = reduce(&state, Intent::add_link([1], [2]));
        let _ = reduce(&state, Intent::ResetSelections);
    });

    let kinds: Vec<String> = captured
        .spans()
        .into_iter()
        .filter(|s| s.name == "bitext.intent")
        .map(|s| s.fields.get("kind").cloned().unwrap_or_default())
        .collect();
    assert_eq!(kinds, vec!["toggle_selected_segment", "add_link", "reset_selections"]);
}

#[test]
fn link_edits_log_inside_the_intent_span() {
    let captured = with_captured(|| {
        let state = AlignmentState::new([Link::automatic([1], [4]), Link::automatic([2], [6])]);
        let state = reduce(&state, Intent::add_link([1, 2], [9]));
        let _ = reduce(&state, Intent::remove_link([1], []));
    });

    let added = captured.events_with_message("link added");
    assert_eq!(added.len(), 1);
    let added = &added[0];
    assert_eq!(added.level, tracing::Level::DEBUG);
    assert_eq!(added.target, "bitext.engine");
    assert_eq!(added.parent_span_name.as_deref(), Some("bitext.intent"));
    assert_eq!(added.fields.get("links_before").map(String::as_str), Some("2"));
    assert_eq!(added.fields.get("links_after").map(String::as_str), Some("1"));
    assert_eq!(added.fields.get("absorbed").map(String::as_str), Some("2"));

    let removed = captured.events_with_message("links removed");
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].fields.get("removed").map(String::as_str), Some("1"));
}

// ============================================================================
// Warnings
// ============================================================================

#[test]
fn unrecognized_intent_warns_with_its_name() {
    let captured = with_captured(|| {
        let state = AlignmentState::default();
        let next = reduce(&state, Intent::Unrecognized("addParentRef".into()));
        assert_eq!(next, state);
    });

    let warnings: Vec<CapturedEvent> = captured
        .events()
        .into_iter()
        .filter(|e| e.level == tracing::Level::WARN)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message, "ignoring unrecognized intent");
    assert_eq!(
        warnings[0].fields.get("kind").map(String::as_str),
        Some("addParentRef")
    );
}

#[test]
fn overlapping_set_links_warns_but_applies() {
    let captured = with_captured(|| {
        let state = AlignmentState::default();
        let overlapping = vec![Link::automatic([1], [1]), Link::automatic([1], [2])];
        let next = reduce(&state, Intent::SetLinks(overlapping));
        assert_eq!(next.links().len(), 2);
    });

    let warned = captured.events_with_message("set_links received overlapping links");
    assert_eq!(warned.len(), 1);
    assert_eq!(warned[0].level, tracing::Level::WARN);
    assert_eq!(
        warned[0].fields.get("violation").map(String::as_str),
        Some("source position 1 is claimed by links 0 and 1")
    );
}

#[test]
fn ignored_add_is_logged_at_debug() {
    let captured = with_captured(|| {
        let _ = reduce(&AlignmentState::default(), Intent::add_link([1], []));
    });
    let ignored = captured.events_with_message("add_link with an empty side ignored");
    assert_eq!(ignored.len(), 1);
    assert_eq!(ignored[0].level, tracing::Level::DEBUG);
}

// ============================================================================
// Session
// ============================================================================

#[test]
fn session_logs_revision_per_dispatch() {
    let captured = with_captured(|| {
        let mut session = Session::new([], [], []);
        session.dispatch(Intent::select(Side::Source, 1));
        session.dispatch(Intent::select(Side::Source, 1));
    });

    let dispatched = captured.events_with_message("intent dispatched");
    let changed: Vec<&str> = dispatched
        .iter()
        .filter_map(|e| e.fields.get("changed").map(String::as_str))
        .collect();
    assert_eq!(changed, vec!["true", "false"]);
    assert!(
        dispatched
            .iter()
            .all(|e| e.fields.get("revision").map(String::as_str) == Some("1"))
    );
}

#[test]
fn drain_reports_how_many_were_applied() {
    let captured = with_captured(|| {
        let mut session = Session::new([], [], []);
        let sender = session.sender();
        sender.send(Intent::ResetSelections);
        sender.send(Intent::toggle(Side::Target, 3));
        assert_eq!(session.drain(), 2);
    });

    let drained = captured.events_with_message("queued intents drained");
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].target, "bitext.session");
    assert_eq!(drained[0].fields.get("applied").map(String::as_str), Some("2"));
}
