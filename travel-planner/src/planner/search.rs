//! Single-criterion shortest-path search.
//!
//! Dijkstra over the route graph with a binary heap frontier. The heap has
//! no decrease-key, so an improved location is pushed again and the older
//! entry is skipped as stale when popped.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::domain::{Criterion, InvalidCriterion, RouteEdge};
use crate::graph::RouteGraph;

use super::path::{PathResult, RouteOptions};

/// Frontier entry: a location and the tentative distance it was pushed with.
#[derive(Debug)]
struct FrontierEntry<'a> {
    distance: f64,
    /// Push order, so entries with equal distance pop first-in first-out.
    seq: u64,
    location: &'a str,
}

// Reversed so the max-heap pops the smallest distance first.
impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry<'_> {}

/// Find the path from `start` to `end` minimising `criterion`.
///
/// Returns [`PathResult::empty`] when either location is unknown or `end`
/// cannot be reached. Totals always cover cost, distance and time of the
/// chosen path, whichever criterion chose it.
///
/// Among paths of equal weight the one returned is unspecified, but
/// repeated calls on the same graph return the same path.
pub fn find_shortest_path(
    graph: &RouteGraph,
    start: &str,
    end: &str,
    criterion: Criterion,
) -> PathResult {
    if !graph.contains(start) || !graph.contains(end) {
        trace!(start, end, %criterion, "Unknown location, no path");
        return PathResult::empty();
    }

    let mut best: HashMap<&str, f64> = HashMap::new();
    let mut previous: HashMap<&str, &RouteEdge> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;
    let mut settled = 0usize;

    best.insert(start, 0.0);
    frontier.push(FrontierEntry {
        distance: 0.0,
        seq,
        location: start,
    });

    while let Some(FrontierEntry {
        distance, location, ..
    }) = frontier.pop()
    {
        if location == end {
            break;
        }

        let known = best.get(location).copied().unwrap_or(f64::INFINITY);
        if distance > known {
            continue;
        }
        settled += 1;

        for edge in graph.edges_from(location) {
            let neighbour = edge.destination().as_str();
            let candidate = distance + edge.weight(criterion);
            let current = best.get(neighbour).copied().unwrap_or(f64::INFINITY);

            if candidate < current {
                best.insert(neighbour, candidate);
                previous.insert(neighbour, edge);
                seq += 1;
                frontier.push(FrontierEntry {
                    distance: candidate,
                    seq,
                    location: neighbour,
                });
            }
        }
    }

    let path = reconstruct(&previous, start, end);

    debug!(
        start,
        end,
        %criterion,
        hops = path.len(),
        settled,
        "Shortest path search complete"
    );

    if path.is_empty() {
        return PathResult::empty();
    }
    PathResult::from_path(path)
}

/// Walk predecessor edges back from `end` and return them in travel order.
fn reconstruct(previous: &HashMap<&str, &RouteEdge>, start: &str, end: &str) -> Vec<RouteEdge> {
    let mut path = Vec::new();
    let mut current = end;

    while current != start {
        let Some(edge) = previous.get(current) else {
            // End was never reached.
            return Vec::new();
        };
        path.push((*edge).clone());
        current = edge.source().as_str();
    }

    path.reverse();
    path
}

/// Find the best path under every criterion.
pub fn find_all_routes(graph: &RouteGraph, start: &str, end: &str) -> RouteOptions {
    RouteOptions {
        cheapest: find_shortest_path(graph, start, end, Criterion::Cost),
        fastest: find_shortest_path(graph, start, end, Criterion::Time),
        shortest: find_shortest_path(graph, start, end, Criterion::Distance),
    }
}

/// Like [`find_shortest_path`], with the criterion given by name.
///
/// An unknown name is rejected before any search work is done.
pub fn find_shortest_path_by_name(
    graph: &RouteGraph,
    start: &str,
    end: &str,
    criterion: &str,
) -> Result<PathResult, InvalidCriterion> {
    let criterion: Criterion = criterion.parse()?;
    Ok(find_shortest_path(graph, start, end, criterion))
}
