#![forbid(unsafe_code)]

//! bitext runtime
//!
//! This crate owns the alignment state and everything that moves it.
//!
//! # Key Components
//!
//! - [`AlignmentState`] - Persistent aggregate of links, selections, focus, and display settings
//! - [`Intent`] - The closed set of requests the presentation layer may send
//! - [`reduce`] - The pure transition function, including link merging
//! - [`Session`] - Owner of one document's state; in-order dispatch and intent queueing
//! - [`SegmentView`] - Per-segment render facts for the presentation layer
//! - [`EditorConfig`] - Palette size and display defaults, loadable from TOML/JSON
//!
//! # How it fits in the system
//! `bitext-core` supplies the value types and lookups. The presentation layer
//! (out of tree) holds a [`Session`], renders from [`Session::project`], and
//! turns gestures into [`Intent`]s. This crate performs no I/O apart from
//! optional config file loading.

pub mod config;
pub mod engine;
pub mod intent;
pub mod projection;
pub mod selection;
pub mod session;
pub mod state;
#[cfg(feature = "wire")]
pub mod wire;

pub use config::{ConfigError, EditorConfig};
pub use engine::{Merged, drop_overlapping, merge_links, reduce, reduce_all};
pub use intent::Intent;
pub use projection::{SegmentView, project_segment, project_side};
pub use selection::Selection;
pub use session::{IntentSender, Session};
pub use state::AlignmentState;
#[cfg(feature = "wire")]
pub use wire::{WireError, decode_intent, decode_value};
