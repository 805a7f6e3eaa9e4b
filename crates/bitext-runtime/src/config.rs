#![forbid(unsafe_code)]

//! Editor defaults as data.
//!
//! [`EditorConfig`] holds the knobs a host may want to set per document
//! without recompiling: palette size and the initial display state.
//!
//! # Loading
//!
//! ```toml
//! # bitext.toml
//! group_count = 12
//! view = "line"
//! target_direction = "rtl"
//! ```
//!
//! ```rust,ignore
//! let config = EditorConfig::load_toml_file("bitext.toml")?;
//! let config = EditorConfig::from_json_str(json)?;
//! ```
//!
//! Every field has a default, so a partial file only overrides what it
//! names and `EditorConfig::default()` matches the built-in behavior.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use bitext_core::{DEFAULT_GROUP_COUNT, Direction, GroupPalette, Link, Side, ViewMode};

use crate::state::AlignmentState;

/// Per-document editor defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct EditorConfig {
    /// Number of cyclic link groups the presentation layer has colors for.
    pub group_count: usize,
    /// Initial view mode.
    pub view: ViewMode,
    /// Initial source writing direction.
    pub source_direction: Direction,
    /// Initial target writing direction.
    pub target_direction: Direction,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            group_count: DEFAULT_GROUP_COUNT.get(),
            view: ViewMode::default(),
            source_direction: Direction::default(),
            target_direction: Direction::default(),
        }
    }
}

impl EditorConfig {
    /// Parse from a TOML string. Does not validate.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Parse from a TOML file. Does not validate.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse from a JSON string. Does not validate.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Parse from a JSON file. Does not validate.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a TOML string.
    #[cfg(feature = "config")]
    pub fn load_toml_str(s: &str) -> Result<Self, ConfigError> {
        Self::from_toml_str(s)?.validated()
    }

    /// Parse and validate a TOML file.
    #[cfg(feature = "config")]
    pub fn load_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)?.validated()
    }

    /// Parse and validate a JSON string.
    #[cfg(feature = "config")]
    pub fn load_json_str(s: &str) -> Result<Self, ConfigError> {
        Self::from_json_str(s)?.validated()
    }

    /// Check every field is in range.
    ///
    /// Returns a list of problems; empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.group_count == 0 {
            errors.push("group_count must be > 0".into());
        }
        errors
    }

    /// `self` if valid, otherwise [`ConfigError::Validation`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// The group palette. An invalid `group_count` falls back to the default
    /// size.
    pub fn palette(&self) -> GroupPalette {
        GroupPalette::with_size(self.group_count).unwrap_or_default()
    }

    /// Seed an alignment state with `links` and these display defaults.
    pub fn initial_state<I>(&self, links: I) -> AlignmentState
    where
        I: IntoIterator<Item = Link>,
    {
        AlignmentState::new(links)
            .with_view(self.view)
            .with_direction(Side::Source, self.source_direction)
            .with_direction(Side::Target, self.target_direction)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when loading an editor configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
