//! Adjacency store for the transport network.
//!
//! The graph maps each location to its outgoing edges. It knows nothing
//! about symmetry or persistence; those policies live in the registrar.

use std::collections::BTreeMap;

use crate::domain::{Location, RouteEdge};

/// Directed multigraph of route edges keyed by source location.
///
/// Parallel edges are allowed: a pair of locations may be served by road
/// and by train at once, and both edges coexist. Per-location insertion
/// order is preserved. Locations are iterated in name order.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: BTreeMap<Location, Vec<RouteEdge>>,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `edge` to its source's outgoing list.
    ///
    /// The source location is created if absent. No duplicate detection.
    pub fn add_directed_edge(&mut self, edge: RouteEdge) {
        self.adjacency
            .entry(edge.source().clone())
            .or_default()
            .push(edge);
    }

    /// Remove the most recently added edge leaving `location`.
    ///
    /// Drops the location entirely once its list is empty, so undoing an
    /// insertion restores the graph exactly.
    pub(crate) fn pop_edge(&mut self, location: &str) -> Option<RouteEdge> {
        let edges = self.adjacency.get_mut(location)?;
        let edge = edges.pop();
        if edges.is_empty() {
            self.adjacency.remove(location);
        }
        edge
    }

    /// All locations that have at least one outgoing edge.
    pub fn nodes(&self) -> impl Iterator<Item = &Location> {
        self.adjacency.keys()
    }

    /// Outgoing edges of `location`, or an empty slice if unknown.
    pub fn edges_from(&self, location: &str) -> &[RouteEdge] {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every edge in the graph, grouped by source location.
    pub fn all_edges(&self) -> impl Iterator<Item = &RouteEdge> {
        self.adjacency.values().flatten()
    }

    /// Returns true if `location` is a node of the graph.
    pub fn contains(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Number of locations.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteAttributes, TransportMode};

    fn edge(from: &str, to: &str, mode: TransportMode) -> RouteEdge {
        RouteEdge::new(from, to, mode, RouteAttributes::new(1.0, 2.0, 3.0)).unwrap()
    }

    #[test]
    fn empty_graph() {
        let graph = RouteGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.edges_from("Anywhere").is_empty());
        assert_eq!(graph.nodes().count(), 0);
    }

    #[test]
    fn add_creates_source_only() {
        let mut graph = RouteGraph::new();
        graph.add_directed_edge(edge("A", "B", TransportMode::Road));

        assert!(graph.contains("A"));
        // A destination that never acts as a source is not a node.
        assert!(!graph.contains("B"));
        assert_eq!(graph.edges_from("A").len(), 1);
        assert!(graph.edges_from("B").is_empty());
    }

    #[test]
    fn parallel_edges_coexist() {
        let mut graph = RouteGraph::new();
        graph.add_directed_edge(edge("A", "B", TransportMode::Road));
        graph.add_directed_edge(edge("A", "B", TransportMode::Train));
        graph.add_directed_edge(edge("A", "B", TransportMode::Road));

        let modes: Vec<_> = graph.edges_from("A").iter().map(RouteEdge::mode).collect();
        assert_eq!(
            modes,
            vec![
                TransportMode::Road,
                TransportMode::Train,
                TransportMode::Road
            ]
        );
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn nodes_and_all_edges() {
        let mut graph = RouteGraph::new();
        graph.add_directed_edge(edge("B", "A", TransportMode::Train));
        graph.add_directed_edge(edge("A", "B", TransportMode::Train));
        graph.add_directed_edge(edge("A", "C", TransportMode::Airplane));

        let nodes: Vec<_> = graph.nodes().map(Location::as_str).collect();
        assert_eq!(nodes, vec!["A", "B"]);

        let pairs: Vec<_> = graph
            .all_edges()
            .map(|e| (e.source().as_str(), e.destination().as_str()))
            .collect();
        assert_eq!(pairs, vec![("A", "B"), ("A", "C"), ("B", "A")]);
    }

    #[test]
    fn pop_edge_restores_previous_state() {
        let mut graph = RouteGraph::new();
        graph.add_directed_edge(edge("A", "B", TransportMode::Road));
        graph.add_directed_edge(edge("A", "C", TransportMode::Train));

        let popped = graph.pop_edge("A").unwrap();
        assert_eq!(popped.destination().as_str(), "C");
        assert_eq!(graph.edges_from("A").len(), 1);

        graph.pop_edge("A").unwrap();
        assert!(!graph.contains("A"));
        assert!(graph.is_empty());

        assert!(graph.pop_edge("A").is_none());
    }
}
