//! Optimisation criteria for route search.

use std::fmt;
use std::str::FromStr;

/// Error returned when a criterion name is not recognised.
///
/// This is a caller error: criteria are never silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid criterion: {name:?} (expected cost, distance or time)")]
pub struct InvalidCriterion {
    name: String,
}

/// The single edge attribute used to weight one shortest-path search.
///
/// # Examples
///
/// ```
/// use travel_planner::domain::Criterion;
///
/// assert_eq!("time".parse::<Criterion>().unwrap(), Criterion::Time);
/// assert!("speed".parse::<Criterion>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Cost,
    Distance,
    Time,
}

impl Criterion {
    /// Every criterion, in declaration order.
    pub const ALL: [Criterion; 3] = [Self::Cost, Self::Distance, Self::Time];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::Distance => "distance",
            Self::Time => "time",
        }
    }
}

impl FromStr for Criterion {
    type Err = InvalidCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|criterion| criterion.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidCriterion { name: s.to_string() })
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_names() {
        assert_eq!("cost".parse(), Ok(Criterion::Cost));
        assert_eq!("Distance".parse(), Ok(Criterion::Distance));
        assert_eq!("TIME".parse(), Ok(Criterion::Time));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "fastest".parse::<Criterion>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid criterion: \"fastest\" (expected cost, distance or time)"
        );
    }

    #[test]
    fn display() {
        assert_eq!(Criterion::Cost.to_string(), "cost");
        assert_eq!(Criterion::Distance.to_string(), "distance");
        assert_eq!(Criterion::Time.to_string(), "time");
    }
}
