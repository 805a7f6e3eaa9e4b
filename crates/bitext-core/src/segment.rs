#![forbid(unsafe_code)]

//! Segments and the display enums attached to each text stream.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position of a segment within its side.
///
/// Positions are unique per side but need not be contiguous or sorted.
pub type Position = u32;

/// Which of the two parallel streams a segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// The text being aligned from.
    Source,
    /// The text being aligned to.
    Target,
}

impl Side {
    /// Both sides, source first.
    pub const ALL: [Side; 2] = [Side::Source, Side::Target];

    /// The opposite stream.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Source => Self::Target,
            Self::Target => Self::Source,
        }
    }

    /// Lowercase name, used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writing direction of one stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl Direction {
    /// The other direction.
    #[inline]
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ltr => Self::Rtl,
            Self::Rtl => Self::Ltr,
        }
    }
}

/// How the presentation layer lays the two streams out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewMode {
    /// Streams wrapped as running paragraphs.
    #[default]
    Paragraph,
    /// Streams laid out line by line.
    Line,
}

impl ViewMode {
    /// The other view mode.
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Paragraph => Self::Line,
            Self::Line => Self::Paragraph,
        }
    }
}

/// An immutable unit of one text stream.
///
/// The text itself is owned by the presentation layer; the core only needs
/// the segment's identity and whether it carries content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    /// Stream this segment belongs to.
    pub side: Side,
    /// Stable identity within `side`.
    pub position: Position,
    /// False for punctuation-only and similar segments. Such segments are
    /// rendered disabled but link exactly like any other segment.
    #[cfg_attr(feature = "serde", serde(default = "content_default"))]
    pub is_content_bearing: bool,
}

#[cfg(feature = "serde")]
fn content_default() -> bool {
    true
}

impl Segment {
    /// Create a content-bearing segment.
    #[inline]
    pub const fn new(side: Side, position: Position) -> Self {
        Self {
            side,
            position,
            is_content_bearing: true,
        }
    }

    /// Create a source-side segment.
    #[inline]
    pub const fn source(position: Position) -> Self {
        Self::new(Side::Source, position)
    }

    /// Create a target-side segment.
    #[inline]
    pub const fn target(position: Position) -> Self {
        Self::new(Side::Target, position)
    }

    /// Mark whether the segment carries content.
    #[inline]
    #[must_use]
    pub const fn with_content(mut self, is_content_bearing: bool) -> Self {
        self.is_content_bearing = is_content_bearing;
        self
    }

    /// True when the segment should be rendered disabled.
    #[inline]
    pub const fn is_disabled(&self) -> bool {
        !self.is_content_bearing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_other_round_trips() {
        for side in Side::ALL {
            assert_eq!(side.other().other(), side);
            assert_ne!(side.other(), side);
        }
    }

    #[test]
    fn direction_flip_and_view_toggle() {
        assert_eq!(Direction::Ltr.flipped(), Direction::Rtl);
        assert_eq!(Direction::Rtl.flipped(), Direction::Ltr);
        assert_eq!(ViewMode::Paragraph.toggled(), ViewMode::Line);
        assert_eq!(ViewMode::Line.toggled(), ViewMode::Paragraph);
        assert_eq!(Direction::default(), Direction::Ltr);
        assert_eq!(ViewMode::default(), ViewMode::Paragraph);
    }

    #[test]
    fn punctuation_segment_is_disabled() {
        let seg = Segment::source(4).with_content(false);
        assert!(seg.is_disabled());
        assert!(!Segment::target(4).is_disabled());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn segment_content_flag_defaults_to_true() {
        let seg: Segment = serde_json::from_str(r#"{"side":"target","position":9}"#).unwrap();
        assert_eq!(seg, Segment::target(9));
    }
}
