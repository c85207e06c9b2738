//! Route registration.
//!
//! Turns per-mode route input into a symmetric pair of graph edges and
//! persists the logical route. Also seeds a graph from stored records at
//! startup.
//!
//! Registration is transactional by default: if the store rejects the
//! route, the two edges just inserted are removed again so memory and
//! store agree.

mod config;
mod input;

pub use config::RegistrarConfig;
pub use input::RouteInput;

use tracing::{debug, info, warn};

use crate::domain::{Location, RouteEdge, TransportMode};
use crate::graph::RouteGraph;
use crate::store::{RouteRecord, RouteStore};

/// Registers routes into a graph and a store.
pub struct RouteRegistrar<'a, S: RouteStore> {
    graph: &'a mut RouteGraph,
    store: &'a mut S,
    config: &'a RegistrarConfig,
}

impl<'a, S: RouteStore> RouteRegistrar<'a, S> {
    /// Create a new registrar.
    pub fn new(graph: &'a mut RouteGraph, store: &'a mut S, config: &'a RegistrarConfig) -> Self {
        Self {
            graph,
            store,
            config,
        }
    }

    /// Add a road route; cost and time are derived from `distance`.
    pub fn add_road_route(
        &mut self,
        source: impl Into<Location>,
        destination: impl Into<Location>,
        distance: f64,
    ) -> bool {
        self.register_route(source, destination, RouteInput::Road { distance })
    }

    /// Add a train route with explicit fare, distance and time.
    pub fn add_train_route(
        &mut self,
        source: impl Into<Location>,
        destination: impl Into<Location>,
        fare: f64,
        distance: f64,
        time: f64,
    ) -> bool {
        self.register_route(
            source,
            destination,
            RouteInput::Train {
                fare,
                distance,
                time,
            },
        )
    }

    /// Add an airplane route; distance is recorded as zero.
    pub fn add_airplane_route(
        &mut self,
        source: impl Into<Location>,
        destination: impl Into<Location>,
        fare: f64,
        time: f64,
    ) -> bool {
        self.register_route(source, destination, RouteInput::Airplane { fare, time })
    }

    /// Register a route in both directions and persist it once.
    ///
    /// Returns false, without panicking, when the input cannot form a valid
    /// edge or when the store write fails.
    pub fn register_route(
        &mut self,
        source: impl Into<Location>,
        destination: impl Into<Location>,
        input: RouteInput,
    ) -> bool {
        let source = source.into();
        let destination = destination.into();
        let mode = input.mode();

        if let RouteInput::Road { distance } = input
            && !(distance > 0.0)
        {
            warn!(%source, %destination, distance, "Road distance must be positive");
            return false;
        }

        let attributes = input.derive(self.config);
        let forward = match RouteEdge::new(source.clone(), destination.clone(), mode, attributes) {
            Ok(edge) => edge,
            Err(e) => {
                warn!(%source, %destination, %mode, error = %e, "Rejected route");
                return false;
            }
        };
        let record = RouteRecord::from_edge(&forward);
        let reverse = forward.reversed();

        self.graph.add_directed_edge(forward);
        self.graph.add_directed_edge(reverse);

        match self.store.insert_route(&record) {
            Ok(()) => {
                debug!(%source, %destination, %mode, "Registered route");
                true
            }
            Err(e) => {
                if self.config.rollback_on_store_failure {
                    self.rollback(&source, &destination, mode);
                    warn!(
                        %source, %destination, %mode, error = %e,
                        "Failed to persist route, rolled back"
                    );
                } else {
                    warn!(
                        %source, %destination, %mode, error = %e,
                        "Failed to persist route, graph now differs from store"
                    );
                }
                false
            }
        }
    }

    /// Remove the edge pair appended by the last registration.
    fn rollback(&mut self, source: &Location, destination: &Location, mode: TransportMode) {
        let reverse = self.graph.pop_edge(destination.as_str());
        let forward = self.graph.pop_edge(source.as_str());
        debug_assert!(reverse.is_some_and(|e| e.mode() == mode));
        debug_assert!(forward.is_some_and(|e| e.mode() == mode));
    }
}

/// Outcome of seeding a graph from stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Records inserted as edge pairs.
    pub loaded: usize,
    /// Records skipped because their values cannot form an edge.
    pub skipped: usize,
}

/// Insert stored routes into `graph` as symmetric edge pairs.
///
/// Stored values are final: nothing is re-derived and nothing is written
/// back to the store.
pub fn load_routes(
    graph: &mut RouteGraph,
    records: impl IntoIterator<Item = RouteRecord>,
) -> LoadSummary {
    let mut summary = LoadSummary::default();

    for record in records {
        match record.to_edge() {
            Ok(forward) => {
                let reverse = forward.reversed();
                graph.add_directed_edge(forward);
                graph.add_directed_edge(reverse);
                summary.loaded += 1;
            }
            Err(e) => {
                warn!(
                    source = %record.source,
                    destination = %record.destination,
                    mode = %record.mode,
                    error = %e,
                    "Skipping invalid stored route"
                );
                summary.skipped += 1;
            }
        }
    }

    info!(
        loaded = summary.loaded,
        skipped = summary.skipped,
        "Loaded routes"
    );
    summary
}
