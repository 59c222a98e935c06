//! # cvrp-construct
//!
//! Constructive heuristics that build initial solutions for the Capacitated
//! Vehicle Routing Problem: a depot, clients with coordinates and demands, a
//! per-vehicle capacity and a fleet size go in; a partition of clients into
//! vehicle routes comes out.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Client, Instance, RoutePartition)
//! - [`distance`] — Euclidean distance and depot/client distance matrices
//! - [`split`] — Capacity split of a client order with fleet-size repair
//! - [`constructive`] — Cheapest insertion, route-first-cluster-second, Clarke-Wright savings
//! - [`evaluation`] — Route distance, load, and violation reporting
//! - [`error`] — Construction errors
//!
//! Every builder is a pure, single-threaded computation over a borrowed
//! [`models::Instance`]; separate calls share no mutable state and may run
//! concurrently.

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod split;

pub use constructive::Heuristic;
pub use error::ConstructionError;
pub use models::{Instance, RoutePartition};
