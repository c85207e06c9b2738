//! Location identifiers.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named place in the transport network.
///
/// Locations are compared by exact value: no trimming and no case folding,
/// so `"Delhi"` and `"delhi"` are two different places.
///
/// # Examples
///
/// ```
/// use travel_planner::domain::Location;
///
/// let delhi = Location::new("Delhi");
/// assert_eq!(delhi.as_str(), "Delhi");
/// assert_ne!(delhi, Location::new("delhi"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Create a location from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the location name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({})", self.0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashSet};

    #[test]
    fn exact_value_equality() {
        assert_eq!(Location::new("Pune"), Location::from("Pune"));
        assert_ne!(Location::new("Pune"), Location::new("pune"));
        assert_ne!(Location::new("Pune"), Location::new("Pune "));
    }

    #[test]
    fn display_and_debug() {
        let loc = Location::new("Mumbai");
        assert_eq!(format!("{}", loc), "Mumbai");
        assert_eq!(format!("{:?}", loc), "Location(Mumbai)");
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(Location::new("Delhi"), 1);
        assert_eq!(map.get("Delhi"), Some(&1));
        assert_eq!(map.get("Tokyo"), None);
    }

    #[test]
    fn hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(Location::new("Delhi"));
        assert!(set.contains(&Location::from(String::from("Delhi"))));
        assert!(!set.contains(&Location::new("Mumbai")));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Location::new("Goa")).unwrap();
        assert_eq!(json, "\"Goa\"");
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "Goa");
    }
}
