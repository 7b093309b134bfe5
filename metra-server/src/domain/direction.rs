//! Travel direction for a trip.

use std::fmt;

/// Direction of travel.
///
/// Metra's schedule data encodes direction as a GTFS `direction_id`:
/// `0` is in-bound (towards the downtown terminal), anything else is
/// out-bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    /// Map a GTFS `direction_id` to a direction.
    pub fn from_gtfs(direction_id: u8) -> Self {
        if direction_id == 0 {
            Direction::Inbound
        } else {
            Direction::Outbound
        }
    }

    pub fn is_inbound(self) -> bool {
        matches!(self, Direction::Inbound)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Inbound => f.write_str("In-Bound"),
            Direction::Outbound => f.write_str("Out-Bound"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gtfs_mapping() {
        assert_eq!(Direction::from_gtfs(0), Direction::Inbound);
        assert_eq!(Direction::from_gtfs(1), Direction::Outbound);
        // Anything non-zero is out-bound
        assert_eq!(Direction::from_gtfs(2), Direction::Outbound);
    }

    #[test]
    fn is_inbound() {
        assert!(Direction::Inbound.is_inbound());
        assert!(!Direction::Outbound.is_inbound());
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Inbound.to_string(), "In-Bound");
        assert_eq!(Direction::Outbound.to_string(), "Out-Bound");
    }
}
