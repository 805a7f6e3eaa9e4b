#![forbid(unsafe_code)]

//! JSON intent envelopes.
//!
//! Hosts that talk to the engine over a message boundary send intents as
//! `{"type": "<name>", "payload": {...}}` objects using the editor's
//! historical action names:
//!
//! | `type` | `payload` |
//! |---|---|
//! | `setLinks` | `{"links": [Link]}` |
//! | `switchView` | `{"view": "paragraph" \| "line"}` |
//! | `toggleSelectedSourceTextSegment`, `toggleSelectedTargetTextSegment` | `{"position": n}` |
//! | `selectSourceTextSegment`, `selectTargetTextSegment` | `{"position": n}` |
//! | `deselectSourceTextSegment`, `deselectTargetTextSegment` | `{"position": n}` |
//! | `addLink`, `removeLink` | `{"sources": [n], "targets": [n]}` |
//! | `resetSelectedSegments` | none |
//! | `focusLink`, `unFocusLink` | `{"link": Link}` |
//! | `changeSourceTextDirection`, `changeTargetTextDirection` | `{"textDirection": "ltr" \| "rtl"}` |
//! | `setInProgressLink` | `Link` or `null` |
//!
//! A `Link` is `{"sources": [n], "targets": [n], "type": "manual" | "automatic"}`.
//!
//! Any other `type` decodes to [`Intent::Unrecognized`] so the engine can log
//! and ignore it. Broken JSON, a missing `type`, or a payload that does not
//! fit a known `type` is a [`WireError`].

use std::collections::BTreeSet;
use std::fmt;

use bitext_core::{Direction, Link, Position, Side, ViewMode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::intent::Intent;

#[derive(Deserialize)]
struct LinksPayload {
    links: Vec<Link>,
}

#[derive(Deserialize)]
struct ViewPayload {
    view: ViewMode,
}

#[derive(Deserialize)]
struct PositionPayload {
    position: Position,
}

#[derive(Deserialize)]
struct LinkSetsPayload {
    #[serde(default)]
    sources: BTreeSet<Position>,
    #[serde(default)]
    targets: BTreeSet<Position>,
}

#[derive(Deserialize)]
struct LinkPayload {
    link: Link,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DirectionPayload {
    text_direction: Direction,
}

/// Decode one intent from JSON text.
pub fn decode_intent(json: &str) -> Result<Intent, WireError> {
    let value: Value = serde_json::from_str(json).map_err(WireError::Json)?;
    decode_value(value)
}

/// Decode one intent from an already-parsed JSON value.
pub fn decode_value(mut value: Value) -> Result<Intent, WireError> {
    let kind = match value.get("type").and_then(Value::as_str) {
        Some(kind) => kind.to_owned(),
        None => return Err(WireError::MissingType),
    };
    let payload = value
        .as_object_mut()
        .and_then(|object| object.remove("payload"))
        .unwrap_or(Value::Null);

    let intent = match kind.as_str() {
        "setLinks" => Intent::SetLinks(payload_as::<LinksPayload>(&kind, payload)?.links),
        "switchView" => Intent::SwitchView(payload_as::<ViewPayload>(&kind, payload)?.view),
        "toggleSelectedSourceTextSegment" => {
            Intent::toggle(Side::Source, position(&kind, payload)?)
        }
        "toggleSelectedTargetTextSegment" => {
            Intent::toggle(Side::Target, position(&kind, payload)?)
        }
        "selectSourceTextSegment" => Intent::select(Side::Source, position(&kind, payload)?),
        "selectTargetTextSegment" => Intent::select(Side::Target, position(&kind, payload)?),
        "deselectSourceTextSegment" => Intent::deselect(Side::Source, position(&kind, payload)?),
        "deselectTargetTextSegment" => Intent::deselect(Side::Target, position(&kind, payload)?),
        "addLink" => {
            let sets = payload_as::<LinkSetsPayload>(&kind, payload)?;
            Intent::AddLink {
                sources: sets.sources,
                targets: sets.targets,
            }
        }
        "removeLink" => {
            let sets = payload_as::<LinkSetsPayload>(&kind, payload)?;
            Intent::RemoveLink {
                sources: sets.sources,
                targets: sets.targets,
            }
        }
        "resetSelectedSegments" => Intent::ResetSelections,
        "focusLink" => Intent::FocusLink(payload_as::<LinkPayload>(&kind, payload)?.link),
        "unFocusLink" => Intent::UnfocusLink(payload_as::<LinkPayload>(&kind, payload)?.link),
        "changeSourceTextDirection" => Intent::SetDirection {
            side: Side::Source,
            direction: payload_as::<DirectionPayload>(&kind, payload)?.text_direction,
        },
        "changeTargetTextDirection" => Intent::SetDirection {
            side: Side::Target,
            direction: payload_as::<DirectionPayload>(&kind, payload)?.text_direction,
        },
        "setInProgressLink" => Intent::SetInProgressLink(payload_as(&kind, payload)?),
        _ => Intent::Unrecognized(kind),
    };
    Ok(intent)
}

fn payload_as<T: DeserializeOwned>(kind: &str, payload: Value) -> Result<T, WireError> {
    serde_json::from_value(payload).map_err(|source| WireError::Payload {
        kind: kind.to_owned(),
        source,
    })
}

fn position(kind: &str, payload: Value) -> Result<Position, WireError> {
    payload_as::<PositionPayload>(kind, payload).map(|p| p.position)
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when decoding an intent envelope.
#[derive(Debug)]
pub enum WireError {
    /// The text is not valid JSON.
    Json(serde_json::Error),
    /// The value has no string `type` field.
    MissingType,
    /// The payload does not fit the named intent.
    Payload {
        /// The envelope's `type`.
        kind: String,
        /// Why the payload was rejected.
        source: serde_json::Error,
    },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::MissingType => f.write_str("intent envelope has no `type` field"),
            Self::Payload { kind, source } => write!(f, "bad payload for `{kind}`: {source}"),
        }
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::MissingType => None,
            Self::Payload { source, .. } => Some(source),
        }
    }
}
