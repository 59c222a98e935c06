//! Constructive heuristics for building initial CVRP route partitions.
//!
//! - [`cheapest_insertion`] — Cheapest insertion order, then capacity split, O(n³)
//! - [`route_first_cluster_second`] — Nearest-neighbor giant tour, then capacity split, O(n²)
//! - [`clarke_wright_savings`] — Clarke-Wright savings algorithm (1964), O(n² log n)
//!
//! Every builder is independent, owns its scratch state, and returns a
//! partition covering each client exactly once. [`Heuristic`] selects one of
//! them by value.

mod cheapest_insertion;
mod clarke_wright;
mod route_first;

pub use cheapest_insertion::{cheapest_insertion, insertion_order, InsertionVariant};
pub use clarke_wright::clarke_wright_savings;
pub use route_first::{giant_tour, route_first_cluster_second};

use serde::{Deserialize, Serialize};

use crate::error::ConstructionError;
use crate::models::{Instance, RoutePartition};

/// A constructive heuristic, selectable from configuration.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::Instance;
/// use cvrp_construct::constructive::Heuristic;
///
/// let instance = Instance::builder()
///     .depot(0.0, 0.0)
///     .client(1.0, 0.0, 5)
///     .client(2.0, 0.0, 5)
///     .capacity(10)
///     .build()
///     .unwrap();
///
/// for heuristic in Heuristic::ALL {
///     let partition = heuristic.build(&instance).unwrap();
///     assert_eq!(partition.num_served(), 2);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heuristic {
    /// Cheapest insertion with the given route-cutting variant.
    CheapestInsertion(InsertionVariant),
    /// Nearest-neighbor giant tour split by capacity.
    RouteFirstClusterSecond,
    /// Clarke-Wright savings.
    Savings,
}

impl Heuristic {
    /// The three heuristics, each in its default configuration.
    pub const ALL: [Heuristic; 3] = [
        Heuristic::CheapestInsertion(InsertionVariant::OrderThenSplit),
        Heuristic::RouteFirstClusterSecond,
        Heuristic::Savings,
    ];

    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::CheapestInsertion(InsertionVariant::OrderThenSplit) => "insertion",
            Heuristic::CheapestInsertion(InsertionVariant::Interleaved) => {
                "insertion-interleaved"
            }
            Heuristic::RouteFirstClusterSecond => "route-first-cluster-second",
            Heuristic::Savings => "savings",
        }
    }

    /// Runs the heuristic on `instance`.
    ///
    /// Only [`Heuristic::Savings`] can fail; see [`clarke_wright_savings`].
    pub fn build(&self, instance: &Instance) -> Result<RoutePartition, ConstructionError> {
        match self {
            Heuristic::CheapestInsertion(variant) => Ok(cheapest_insertion(instance, *variant)),
            Heuristic::RouteFirstClusterSecond => Ok(route_first_cluster_second(instance)),
            Heuristic::Savings => clarke_wright_savings(instance),
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
