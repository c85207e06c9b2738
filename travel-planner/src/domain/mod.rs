//! Domain types for the travel planner.
//!
//! This module contains the value types that describe the transport
//! network. Edges enforce their invariants at construction time, so code
//! that receives a `RouteEdge` can trust its weights are usable by search.

mod criterion;
mod edge;
mod error;
mod location;
mod mode;

pub use criterion::{Criterion, InvalidCriterion};
pub use edge::{RouteAttributes, RouteEdge};
pub use error::DomainError;
pub use location::Location;
pub use mode::{InvalidMode, TransportMode};
