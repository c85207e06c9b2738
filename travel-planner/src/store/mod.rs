//! Persistent route storage.
//!
//! The planner depends on storage only through [`RouteStore`]: a full scan
//! at startup and a single insert per registered route. Two backends are
//! provided, an in-memory store and a JSON file.

mod error;
mod json;
mod memory;

pub use error::StoreError;
pub use json::{JsonRouteStore, JsonStoreConfig};
pub use memory::MemoryRouteStore;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Location, RouteAttributes, RouteEdge, TransportMode};

/// One stored logical route.
///
/// A record is undirected: it expands to an edge in each direction when
/// loaded. Its values are final; nothing is re-derived on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub source: Location,
    pub destination: Location,
    pub mode: TransportMode,
    pub cost: f64,
    pub distance: f64,
    pub time: f64,
}

impl RouteRecord {
    /// Create a record from its parts.
    pub fn new(
        source: impl Into<Location>,
        destination: impl Into<Location>,
        mode: TransportMode,
        attributes: RouteAttributes,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            mode,
            cost: attributes.cost,
            distance: attributes.distance,
            time: attributes.time,
        }
    }

    /// Record describing the logical route of `edge`.
    pub fn from_edge(edge: &RouteEdge) -> Self {
        Self::new(
            edge.source().clone(),
            edge.destination().clone(),
            edge.mode(),
            edge.attributes(),
        )
    }

    pub fn attributes(&self) -> RouteAttributes {
        RouteAttributes::new(self.cost, self.distance, self.time)
    }

    /// The forward (source to destination) edge of this record.
    pub fn to_edge(&self) -> Result<RouteEdge, DomainError> {
        RouteEdge::new(
            self.source.clone(),
            self.destination.clone(),
            self.mode,
            self.attributes(),
        )
    }

    /// Returns true if `other` has the same (source, destination, mode) key.
    pub fn same_key(&self, other: &RouteRecord) -> bool {
        self.source == other.source
            && self.destination == other.destination
            && self.mode == other.mode
    }

    /// Error reporting `self` as a duplicate.
    pub(crate) fn duplicate_error(&self) -> StoreError {
        StoreError::Duplicate {
            from: self.source.clone(),
            to: self.destination.clone(),
            mode: self.mode,
        }
    }
}

/// Storage backend for route records.
///
/// This abstraction allows the planner to be tested without touching disk.
pub trait RouteStore {
    /// Read every stored route.
    fn load_all_routes(&self) -> Result<Vec<RouteRecord>, StoreError>;

    /// Persist one logical route.
    ///
    /// Must fail with [`StoreError::Duplicate`] if a record with the same
    /// (source, destination, mode) already exists, leaving the store unchanged.
    fn insert_route(&mut self, record: &RouteRecord) -> Result<(), StoreError>;
}

/// The rows a freshly created store starts with.
pub fn seed_routes() -> Vec<RouteRecord> {
    vec![
        RouteRecord::new(
            "Mumbai",
            "Delhi",
            TransportMode::Airplane,
            RouteAttributes::new(5000.0, 0.0, 2.5),
        ),
        RouteRecord::new(
            "Mumbai",
            "Delhi",
            TransportMode::Train,
            RouteAttributes::new(1500.0, 1400.0, 16.0),
        ),
        RouteRecord::new(
            "Mumbai",
            "Pune",
            TransportMode::Road,
            RouteAttributes::new(0.0, 150.0, 2.5),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_to_edge_keeps_values() {
        let record = RouteRecord::new(
            "Mumbai",
            "Delhi",
            TransportMode::Train,
            RouteAttributes::new(1500.0, 1400.0, 16.0),
        );
        let edge = record.to_edge().unwrap();
        assert_eq!(edge.source().as_str(), "Mumbai");
        assert_eq!(edge.destination().as_str(), "Delhi");
        assert_eq!(edge.cost(), 1500.0);
        assert_eq!(RouteRecord::from_edge(&edge), record);
    }

    #[test]
    fn record_with_negative_value_has_no_edge() {
        let record = RouteRecord::new(
            "A",
            "B",
            TransportMode::Airplane,
            RouteAttributes::new(-10.0, 0.0, 1.0),
        );
        assert!(record.to_edge().is_err());
    }

    #[test]
    fn key_is_direction_and_mode_sensitive() {
        let attrs = RouteAttributes::new(1.0, 1.0, 1.0);
        let ab_train = RouteRecord::new("A", "B", TransportMode::Train, attrs);
        let ab_train_other_values =
            RouteRecord::new("A", "B", TransportMode::Train, RouteAttributes::default());
        let ba_train = RouteRecord::new("B", "A", TransportMode::Train, attrs);
        let ab_road = RouteRecord::new("A", "B", TransportMode::Road, attrs);

        assert!(ab_train.same_key(&ab_train_other_values));
        assert!(!ab_train.same_key(&ba_train));
        assert!(!ab_train.same_key(&ab_road));
    }

    #[test]
    fn record_json_shape() {
        let record = RouteRecord::new(
            "Mumbai",
            "Pune",
            TransportMode::Road,
            RouteAttributes::new(300.0, 150.0, 2.5),
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "source": "Mumbai",
                "destination": "Pune",
                "mode": "road",
                "cost": 300.0,
                "distance": 150.0,
                "time": 2.5
            })
        );
    }

    #[test]
    fn seed_rows() {
        let seed = seed_routes();
        assert_eq!(seed.len(), 3);
        assert!(seed.iter().all(|r| r.to_edge().is_ok()));
    }
}
