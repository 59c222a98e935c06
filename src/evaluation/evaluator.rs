//! Partition evaluator that computes distance, load, and violations.

use serde::{Deserialize, Serialize};

use crate::distance::{DistanceMatrix, Stop};
use crate::models::{Instance, RoutePartition};

/// A constraint or structural violation in a route partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// Route load exceeds vehicle capacity.
    CapacityExceeded {
        /// Route index in the partition.
        route_index: usize,
        /// Summed demand on the route.
        load: u64,
        /// Vehicle capacity.
        capacity: u32,
    },
    /// More routes than the declared fleet size.
    FleetExceeded {
        /// Number of routes in the partition.
        routes: usize,
        /// Declared fleet size.
        max_vehicles: usize,
    },
    /// A client is served by no route.
    MissingClient {
        /// Client index.
        client: usize,
    },
    /// A client appears more than once.
    DuplicateClient {
        /// Client index.
        client: usize,
    },
    /// A route references an index outside the client sequence.
    UnknownClient {
        /// Offending index.
        client: usize,
    },
}

/// Result of evaluating a route partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Sum of route lengths, each from the depot back to the depot.
    pub total_distance: f64,
    /// Number of routes.
    pub num_routes: usize,
    /// Everything wrong with the partition, empty if feasible.
    pub violations: Vec<Violation>,
}

impl Evaluation {
    /// Returns `true` if there are no violations.
    pub fn is_feasible(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Evaluates route partitions against an instance: route lengths, loads,
/// capacity and fleet limits, and partition completeness.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::{Instance, RoutePartition};
/// use cvrp_construct::distance::DistanceMatrix;
/// use cvrp_construct::evaluation::PartitionEvaluator;
///
/// let instance = Instance::builder()
///     .depot(0.0, 0.0)
///     .client(3.0, 4.0, 10)
///     .client(6.0, 8.0, 20)
///     .capacity(100)
///     .build()
///     .unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
///
/// let evaluator = PartitionEvaluator::new(&instance, &dm);
/// let eval = evaluator.evaluate(&RoutePartition::new(vec![vec![0, 1]]));
/// assert!(eval.is_feasible());
/// assert!((eval.total_distance - 20.0).abs() < 1e-10);
/// ```
pub struct PartitionEvaluator<'a> {
    instance: &'a Instance,
    distances: &'a DistanceMatrix,
}

impl<'a> PartitionEvaluator<'a> {
    /// Creates a new evaluator for the given instance data.
    pub fn new(instance: &'a Instance, distances: &'a DistanceMatrix) -> Self {
        Self {
            instance,
            distances,
        }
    }

    /// Length of depot → route → depot. Zero for an empty route.
    pub fn route_distance(&self, route: &[usize]) -> f64 {
        if route.is_empty() {
            return 0.0;
        }
        let mut total = 0.0;
        let mut prev = Stop::Depot;
        for &cid in route {
            total += self.distances.between(prev, Stop::Client(cid));
            prev = Stop::Client(cid);
        }
        total + self.distances.between(prev, Stop::Depot)
    }

    /// Summed demand of a route.
    pub fn route_load(&self, route: &[usize]) -> u64 {
        route
            .iter()
            .map(|&cid| u64::from(self.instance.demand(cid)))
            .sum()
    }

    /// Sum of all route lengths.
    pub fn total_distance(&self, partition: &RoutePartition) -> f64 {
        partition.iter().map(|r| self.route_distance(r)).sum()
    }

    /// Evaluates a partition, collecting every violation found.
    ///
    /// Routes containing unknown client indices are reported and excluded
    /// from the distance and load totals.
    pub fn evaluate(&self, partition: &RoutePartition) -> Evaluation {
        let n = self.instance.num_clients();
        let mut violations = Vec::new();
        let mut seen = vec![0usize; n];
        let mut total_distance = 0.0;

        for (route_index, route) in partition.iter().enumerate() {
            let unknown: Vec<usize> = route.iter().copied().filter(|&c| c >= n).collect();
            if !unknown.is_empty() {
                violations.extend(
                    unknown
                        .into_iter()
                        .map(|client| Violation::UnknownClient { client }),
                );
                continue;
            }

            for &cid in route {
                seen[cid] += 1;
            }
            total_distance += self.route_distance(route);

            let load = self.route_load(route);
            if let Some(capacity) = self.instance.capacity() {
                if !self.instance.fits(load) {
                    violations.push(Violation::CapacityExceeded {
                        route_index,
                        load,
                        capacity,
                    });
                }
            }
        }

        for (client, &count) in seen.iter().enumerate() {
            match count {
                0 => violations.push(Violation::MissingClient { client }),
                1 => {}
                _ => violations.push(Violation::DuplicateClient { client }),
            }
        }

        let max_vehicles = self.instance.num_vehicles();
        if max_vehicles > 0 && partition.num_routes() > max_vehicles {
            violations.push(Violation::FleetExceeded {
                routes: partition.num_routes(),
                max_vehicles,
            });
        }

        Evaluation {
            total_distance,
            num_routes: partition.num_routes(),
            violations,
        }
    }
}
