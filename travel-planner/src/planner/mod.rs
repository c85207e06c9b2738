//! Route planner using single-criterion Dijkstra search.
//!
//! This module answers: "what is the best way from A to B?" once per
//! criterion (cost, distance, time). Each search weights every edge by
//! exactly one attribute; results report all three totals.

mod path;
mod search;

pub use crate::domain::{Criterion, InvalidCriterion};
pub use path::{PathResult, RouteOptions};
pub use search::{find_all_routes, find_shortest_path, find_shortest_path_by_name};
