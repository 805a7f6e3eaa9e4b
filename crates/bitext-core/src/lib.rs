#![forbid(unsafe_code)]

//! Core: segments, links, and the lookups the alignment engine builds on.
//!
//! # Role in bitext
//! `bitext-core` holds the value types shared by every layer: [`Segment`]
//! and [`Link`], the display enums ([`Side`], [`Direction`], [`ViewMode`]),
//! and the pure helpers that read a link list ([`find_link_for`],
//! [`GroupPalette`], [`check_partition`]).
//!
//! # How it fits in the system
//! `bitext-runtime` owns the alignment state and the transition engine and
//! uses these types throughout. Nothing here allocates state or logs; every
//! function is a pure read of its arguments.

pub mod group;
pub mod link;
pub mod locate;
pub mod partition;
pub mod segment;

pub use group::{DEFAULT_GROUP_COUNT, GroupPalette};
pub use link::{Link, LinkKey, Origin};
pub use locate::{find_link_for, find_link_for_segment, find_link_index};
pub use partition::{PartitionViolation, check_partition, is_partitioned};
pub use segment::{Direction, Position, Segment, Side, ViewMode};
