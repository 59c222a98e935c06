//! Domain model types for capacitated vehicle routing.
//!
//! Provides the instance consumed by the builders (depot, clients with
//! demands, capacity and fleet size) and the route partition they produce.

mod client;
mod instance;
mod partition;

pub use client::{Client, Point};
pub(crate) use instance::fits;
pub use instance::{Instance, InstanceBuilder};
pub use partition::RoutePartition;
