//! Transport modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown transport mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transport mode: {name:?} (expected road, train or airplane)")]
pub struct InvalidMode {
    name: String,
}

/// How a route is travelled.
///
/// Each mode has its own rules for which attributes are supplied and which
/// are derived when a route is registered.
///
/// # Examples
///
/// ```
/// use travel_planner::domain::TransportMode;
///
/// let mode: TransportMode = "train".parse().unwrap();
/// assert_eq!(mode, TransportMode::Train);
/// assert_eq!(mode.to_string(), "train");
///
/// assert!("boat".parse::<TransportMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Road,
    Train,
    Airplane,
}

impl TransportMode {
    /// Every mode, in declaration order.
    pub const ALL: [TransportMode; 3] = [Self::Road, Self::Train, Self::Airplane];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Road => "road",
            Self::Train => "train",
            Self::Airplane => "airplane",
        }
    }
}

impl FromStr for TransportMode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidMode { name: s.to_string() })
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
