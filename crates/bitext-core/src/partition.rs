#![forbid(unsafe_code)]

//! The partition invariant over a link list.
//!
//! A (side, position) pair may belong to at most one link. The engine keeps
//! this true by construction; [`check_partition`] exists so tests, debug
//! assertions, and hosts receiving links from outside can verify it.

use std::collections::HashMap;
use std::fmt;

use crate::link::Link;
use crate::segment::{Position, Side};

/// Two links claim the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionViolation {
    /// Side of the shared position.
    pub side: Side,
    /// The shared position.
    pub position: Position,
    /// Index of the earlier claiming link.
    pub first: usize,
    /// Index of the later claiming link.
    pub second: usize,
}

impl fmt::Display for PartitionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} position {} is claimed by links {} and {}",
            self.side, self.position, self.first, self.second
        )
    }
}

impl std::error::Error for PartitionViolation {}

/// Verify that no position appears in two links.
///
/// Reports the first conflict found in link order.
pub fn check_partition<'a, I>(links: I) -> Result<(), PartitionViolation>
where
    I: IntoIterator<Item = &'a Link>,
{
    let mut owners: HashMap<(Side, Position), usize> = HashMap::new();
    for (index, link) in links.into_iter().enumerate() {
        for side in Side::ALL {
            for &position in link.positions(side) {
                if let Some(&first) = owners.get(&(side, position)) {
                    return Err(PartitionViolation {
                        side,
                        position,
                        first,
                        second: index,
                    });
                }
                owners.insert((side, position), index);
            }
        }
    }
    Ok(())
}

/// Convenience wrapper around [`check_partition`].
#[inline]
pub fn is_partitioned<'a, I>(links: I) -> bool
where
    I: IntoIterator<Item = &'a Link>,
{
    check_partition(links).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_links_pass() {
        let links = vec![
            Link::manual([1, 2], [5]),
            Link::manual([3], [6]),
            // Same number on the other side is not a conflict.
            Link::automatic([5], [1]),
        ];
        assert_eq!(check_partition(&links), Ok(()));
    }

    #[test]
    fn shared_target_is_reported() {
        let links = vec![
            Link::manual([1], [4]),
            Link::manual([2], [6]),
            Link::manual([3], [4]),
        ];
        let err = check_partition(&links).unwrap_err();
        assert_eq!(
            err,
            PartitionViolation {
                side: Side::Target,
                position: 4,
                first: 0,
                second: 2,
            }
        );
        assert_eq!(err.to_string(), "target position 4 is claimed by links 0 and 2");
        assert!(!is_partitioned(&links));
    }

    #[test]
    fn empty_list_is_partitioned() {
        assert!(is_partitioned(&[] as &[Link]));
    }
}
