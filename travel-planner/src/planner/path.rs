//! Search results.

use std::fmt;

use crate::domain::{Location, RouteEdge};

/// A path between two locations with its summed attributes.
///
/// An empty path with zero totals means "no route": an unknown location,
/// a disconnected graph, or a start equal to the end.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathResult {
    /// Edges in travel order.
    pub path: Vec<RouteEdge>,
    pub total_cost: f64,
    pub total_distance: f64,
    pub total_time: f64,
}

impl PathResult {
    /// The "no route" result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a result from an ordered path, summing all three attributes
    /// independently of the criterion that chose the path.
    pub fn from_path(path: Vec<RouteEdge>) -> Self {
        let mut result = Self::empty();
        for edge in &path {
            result.total_cost += edge.cost();
            result.total_distance += edge.distance();
            result.total_time += edge.time();
        }
        result.path = path;
        result
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of edges travelled.
    pub fn hop_count(&self) -> usize {
        self.path.len()
    }

    /// First location of the path, if any.
    pub fn start(&self) -> Option<&Location> {
        self.path.first().map(RouteEdge::source)
    }

    /// Last location of the path, if any.
    pub fn end(&self) -> Option<&Location> {
        self.path.last().map(RouteEdge::destination)
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.path {
            writeln!(f, "{}", edge)?;
        }
        write!(
            f,
            "Total: ₹{:.2} | {:.2}km | {:.2}h",
            self.total_cost, self.total_distance, self.total_time
        )
    }
}

/// The best path under each criterion for one pair of locations.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOptions {
    /// Lowest total cost.
    pub cheapest: PathResult,
    /// Lowest total time.
    pub fastest: PathResult,
    /// Lowest total distance.
    pub shortest: PathResult,
}

impl RouteOptions {
    /// Results labelled for display, in cheapest/fastest/shortest order.
    pub fn labelled(&self) -> [(&'static str, &PathResult); 3] {
        [
            ("Cheapest Route", &self.cheapest),
            ("Fastest Route", &self.fastest),
            ("Shortest Distance", &self.shortest),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteAttributes, TransportMode};

    fn edge(from: &str, to: &str, cost: f64, distance: f64, time: f64) -> RouteEdge {
        RouteEdge::new(
            from,
            to,
            TransportMode::Train,
            RouteAttributes::new(cost, distance, time),
        )
        .unwrap()
    }

    #[test]
    fn empty_result() {
        let result = PathResult::empty();
        assert!(result.is_empty());
        assert_eq!(result.hop_count(), 0);
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.total_distance, 0.0);
        assert_eq!(result.total_time, 0.0);
        assert!(result.start().is_none());
        assert!(result.end().is_none());
    }

    #[test]
    fn totals_sum_every_attribute() {
        let result = PathResult::from_path(vec![
            edge("A", "B", 10.0, 100.0, 1.0),
            edge("B", "C", 5.0, 50.0, 0.5),
        ]);
        assert_eq!(result.hop_count(), 2);
        assert_eq!(result.total_cost, 15.0);
        assert_eq!(result.total_distance, 150.0);
        assert_eq!(result.total_time, 1.5);
        assert_eq!(result.start().map(Location::as_str), Some("A"));
        assert_eq!(result.end().map(Location::as_str), Some("C"));
    }

    #[test]
    fn display_lists_hops_then_totals() {
        let result = PathResult::from_path(vec![edge("Mumbai", "Delhi", 1500.0, 1400.0, 16.0)]);
        assert_eq!(
            result.to_string(),
            "Mumbai → Delhi by train (₹1500.00, 1400.00km, 16.00h)\n\
             Total: ₹1500.00 | 1400.00km | 16.00h"
        );
        assert_eq!(
            PathResult::empty().to_string(),
            "Total: ₹0.00 | 0.00km | 0.00h"
        );
    }
}
