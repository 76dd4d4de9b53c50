//! Integer row identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A primary key taken from one of the league relations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(i64);

impl RowId {
    /// Wrap a raw key.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw key.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RowId({})", self.0)
    }
}

impl From<i64> for RowId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for RowId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

/// Type alias for player IDs
pub type PlayerId = RowId;

/// Type alias for season IDs
pub type SeasonId = RowId;

/// Type alias for weekly matchup IDs
pub type MatchupId = RowId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_id_display() {
        assert_eq!(format!("{}", RowId::new(42)), "42");
    }

    #[test]
    fn test_row_id_debug() {
        let debug_str = format!("{:?}", RowId::new(7));
        assert!(debug_str.contains('7'));
    }

    #[test]
    fn test_row_id_parse() {
        assert_eq!("12".parse::<RowId>().unwrap(), RowId::new(12));
        assert_eq!(" 3 ".parse::<RowId>().unwrap(), RowId::new(3));
        assert!("abc".parse::<RowId>().is_err());
        assert!("".parse::<RowId>().is_err());
    }

    #[test]
    fn test_row_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&RowId::new(5)).unwrap();
        assert_eq!(json, "5");

        let parsed: RowId = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, RowId::new(5));
    }

    #[test]
    fn test_row_id_ordering() {
        let mut ids = vec![RowId::from(3), RowId::from(1), RowId::from(2)];
        ids.sort();
        assert_eq!(ids, vec![RowId::new(1), RowId::new(2), RowId::new(3)]);
    }
}
