//! Directed route edges and their attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Criterion, DomainError, Location, TransportMode};

/// The three scalar attributes every route carries.
///
/// Cost is in currency units, distance in kilometres and time in hours.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteAttributes {
    pub cost: f64,
    pub distance: f64,
    pub time: f64,
}

impl RouteAttributes {
    /// Create a new attribute triple.
    pub fn new(cost: f64, distance: f64, time: f64) -> Self {
        Self {
            cost,
            distance,
            time,
        }
    }

    /// Check that every attribute is finite and non-negative.
    ///
    /// Shortest-path search is only correct (and only guaranteed to
    /// terminate) over non-negative weights.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (attribute, value) in [
            ("cost", self.cost),
            ("distance", self.distance),
            ("time", self.time),
        ] {
            if !value.is_finite() {
                return Err(DomainError::NonFiniteAttribute { attribute, value });
            }
            if value < 0.0 {
                return Err(DomainError::NegativeAttribute { attribute, value });
            }
        }
        Ok(())
    }

    /// The attribute selected by `criterion`.
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Cost => self.cost,
            Criterion::Distance => self.distance,
            Criterion::Time => self.time,
        }
    }
}

/// One directed hop between two locations by one transport mode.
///
/// Edges are immutable once built. Every constructed edge has finite,
/// non-negative attributes.
///
/// # Examples
///
/// ```
/// use travel_planner::domain::{Criterion, RouteAttributes, RouteEdge, TransportMode};
///
/// let edge = RouteEdge::new(
///     "Mumbai",
///     "Delhi",
///     TransportMode::Train,
///     RouteAttributes::new(1500.0, 1400.0, 16.0),
/// )
/// .unwrap();
/// assert_eq!(edge.weight(Criterion::Time), 16.0);
///
/// let back = edge.reversed();
/// assert_eq!(back.source().as_str(), "Delhi");
/// assert_eq!(back.attributes(), edge.attributes());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEdge {
    source: Location,
    destination: Location,
    mode: TransportMode,
    attributes: RouteAttributes,
}

impl RouteEdge {
    /// Build an edge, rejecting negative or non-finite attributes.
    pub fn new(
        source: impl Into<Location>,
        destination: impl Into<Location>,
        mode: TransportMode,
        attributes: RouteAttributes,
    ) -> Result<Self, DomainError> {
        attributes.validate()?;
        Ok(Self {
            source: source.into(),
            destination: destination.into(),
            mode,
            attributes,
        })
    }

    /// The twin edge travelling the other way with identical attributes.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
            mode: self.mode,
            attributes: self.attributes,
        }
    }

    pub fn source(&self) -> &Location {
        &self.source
    }

    pub fn destination(&self) -> &Location {
        &self.destination
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    pub fn attributes(&self) -> RouteAttributes {
        self.attributes
    }

    pub fn cost(&self) -> f64 {
        self.attributes.cost
    }

    pub fn distance(&self) -> f64 {
        self.attributes.distance
    }

    pub fn time(&self) -> f64 {
        self.attributes.time
    }

    /// Search weight of this edge under `criterion`: exactly one attribute.
    pub fn weight(&self, criterion: Criterion) -> f64 {
        self.attributes.get(criterion)
    }
}

impl fmt::Display for RouteEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} by {} (₹{:.2}, {:.2}km, {:.2}h)",
            self.source,
            self.destination,
            self.mode,
            self.attributes.cost,
            self.attributes.distance,
            self.attributes.time
        )
    }
}
