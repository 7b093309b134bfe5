//! Metra trip identifier type.

use std::fmt;

/// Error returned when parsing an invalid trip id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid trip id: {reason}")]
pub struct InvalidTripId {
    reason: &'static str,
}

/// A Metra GTFS trip identifier.
///
/// Trip ids are structured strings like `UP-NW_UPNW620V1_V1_A`: the first
/// underscore-separated component is the line (route) short name, and the
/// digits of the second component form the public train number. Both
/// derived values are available as accessors so that callers never parse
/// the id themselves.
///
/// # Examples
///
/// ```
/// use metra_server::domain::TripId;
///
/// let trip = TripId::new("UP-NW_UPNW620V1_V1_A".to_string()).unwrap();
/// assert_eq!(trip.line(), "UP-NW");
/// assert_eq!(trip.train_number(), "6201");
///
/// // Empty strings are rejected
/// assert!(TripId::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TripId(String);

impl TripId {
    /// Create a new trip id from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidTripId> {
        if s.is_empty() {
            return Err(InvalidTripId {
                reason: "trip id cannot be empty",
            });
        }
        Ok(TripId(s))
    }

    /// Returns the trip id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The line (route) short name: everything before the first underscore.
    ///
    /// A trip id without an underscore is its own line name.
    pub fn line(&self) -> &str {
        self.0.split('_').next().unwrap_or(&self.0)
    }

    /// The public train number: the digits of the second underscore
    /// component.
    ///
    /// Returns an empty string if the id has no second component or the
    /// component carries no digits.
    pub fn train_number(&self) -> String {
        self.0
            .split('_')
            .nth(1)
            .map(|part| part.chars().filter(|c| c.is_ascii_digit()).collect())
            .unwrap_or_default()
    }
}

impl fmt::Debug for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripId({})", self.0)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty string is a valid trip id
        #[test]
        fn nonempty_always_valid(s in ".+") {
            prop_assert!(TripId::new(s).is_ok());
        }

        /// The derived line never contains an underscore
        #[test]
        fn line_has_no_underscore(s in ".+") {
            let trip = TripId::new(s).unwrap();
            prop_assert!(!trip.line().contains('_'));
        }

        /// The derived train number is always pure digits
        #[test]
        fn train_number_is_digits(s in ".+") {
            let trip = TripId::new(s).unwrap();
            prop_assert!(trip.train_number().chars().all(|c| c.is_ascii_digit()));
        }
    }
}
