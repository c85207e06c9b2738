//! Multi-modal travel planner.
//!
//! Locations are joined by road, train and airplane routes. Each route
//! carries a cost, a distance and a travel time, and the planner answers
//! "what is the cheapest, fastest or shortest way from here to there?"

pub mod app;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod registrar;
pub mod store;

pub use app::TravelPlanner;
