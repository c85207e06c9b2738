//! The planner as seen by a user interface.
//!
//! `TravelPlanner` owns one graph and one store and exposes the three
//! operations a front end needs: plan a trip, add a route, and list the
//! network for drawing.

use tracing::info;

use crate::domain::{InvalidCriterion, Location, RouteEdge};
use crate::graph::RouteGraph;
use crate::planner::{self, PathResult, RouteOptions};
use crate::registrar::{RegistrarConfig, RouteInput, RouteRegistrar, load_routes};
use crate::store::{RouteStore, StoreError};

/// A loaded transport network bound to its store.
pub struct TravelPlanner<S: RouteStore> {
    graph: RouteGraph,
    store: S,
    config: RegistrarConfig,
}

impl<S: RouteStore> TravelPlanner<S> {
    /// Load every stored route and return a ready planner.
    ///
    /// Fails only if the store cannot be read. Stored routes with invalid
    /// values are skipped.
    pub fn open(store: S, config: RegistrarConfig) -> Result<Self, StoreError> {
        let records = store.load_all_routes()?;
        let mut graph = RouteGraph::new();
        load_routes(&mut graph, records);

        info!(
            locations = graph.node_count(),
            edges = graph.edge_count(),
            "Travel planner ready"
        );

        Ok(Self {
            graph,
            store,
            config,
        })
    }

    /// Best routes from `start` to `end` by cost, time and distance.
    pub fn plan(&self, start: &str, end: &str) -> RouteOptions {
        planner::find_all_routes(&self.graph, start, end)
    }

    /// Best route for a criterion given by name.
    pub fn plan_by(
        &self,
        start: &str,
        end: &str,
        criterion: &str,
    ) -> Result<PathResult, InvalidCriterion> {
        planner::find_shortest_path_by_name(&self.graph, start, end, criterion)
    }

    /// Register and persist a route. Returns false if it was not added.
    pub fn add_route(
        &mut self,
        source: impl Into<Location>,
        destination: impl Into<Location>,
        input: RouteInput,
    ) -> bool {
        RouteRegistrar::new(&mut self.graph, &mut self.store, &self.config).register_route(
            source,
            destination,
            input,
        )
    }

    /// All known locations.
    pub fn nodes(&self) -> impl Iterator<Item = &Location> {
        self.graph.nodes()
    }

    /// All directed edges.
    pub fn edges(&self) -> impl Iterator<Item = &RouteEdge> {
        self.graph.all_edges()
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
