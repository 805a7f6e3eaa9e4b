#![forbid(unsafe_code)]

//! bitext public facade crate.
//!
//! Re-exports the types a host needs to drive an alignment editor and offers
//! a small prelude for day-to-day use.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use bitext_core::{
    Direction, GroupPalette, Link, LinkKey, Origin, PartitionViolation, Position, Segment, Side,
    ViewMode, check_partition, find_link_for, find_link_index,
};

// --- Runtime re-exports ----------------------------------------------------

pub use bitext_runtime::{
    AlignmentState, ConfigError, EditorConfig, Intent, IntentSender, SegmentView, Selection,
    Session, reduce, reduce_all,
};
#[cfg(feature = "wire")]
pub use bitext_runtime::{WireError, decode_intent};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for bitext hosts.
#[derive(Debug)]
pub enum Error {
    /// Editor configuration could not be loaded.
    Config(ConfigError),
    /// An intent envelope could not be decoded.
    #[cfg(feature = "wire")]
    Wire(WireError),
    /// Links handed in from outside claim a position twice.
    Partition(PartitionViolation),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            #[cfg(feature = "wire")]
            Self::Wire(err) => write!(f, "{err}"),
            Self::Partition(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            #[cfg(feature = "wire")]
            Self::Wire(err) => Some(err),
            Self::Partition(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(feature = "wire")]
impl From<WireError> for Error {
    fn from(err: WireError) -> Self {
        Self::Wire(err)
    }
}

impl From<PartitionViolation> for Error {
    fn from(err: PartitionViolation) -> Self {
        Self::Partition(err)
    }
}

/// Standard result type for bitext APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Start a session from externally loaded links, rejecting links that claim
/// a position twice.
pub fn open_session<S, T>(
    config: &EditorConfig,
    source_segments: S,
    target_segments: T,
    links: Vec<Link>,
) -> Result<Session>
where
    S: IntoIterator<Item = Segment>,
    T: IntoIterator<Item = Segment>,
{
    config.clone().validated()?;
    check_partition(&links)?;
    Ok(Session::with_config(config, source_segments, target_segments, links))
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AlignmentState, Direction, EditorConfig, Error, Intent, Link, Origin, Result, Segment,
        SegmentView, Session, Side, ViewMode,
    };

    pub use crate::{core, runtime};
}

pub use bitext_core as core;
pub use bitext_runtime as runtime;
