//! Route-first-cluster-second constructive heuristic.
//!
//! # Algorithm
//!
//! Builds a giant tour by pure nearest neighbor: start at the client nearest
//! the depot, then repeatedly move to the nearest unvisited client (ties go
//! to the smallest index). The tour is then cut into routes by the greedy
//! capacity split, with surplus routes tail-merged to honor the fleet size.
//!
//! # Complexity
//!
//! O(n²) where n = number of clients.
//!
//! # Reference
//!
//! Beasley, J.E. (1983). "Route first-cluster second methods for vehicle
//! routing", *Omega* 11(4), 403-408.

use log::debug;

use crate::distance::{DistanceMatrix, Stop};
use crate::models::{Instance, RoutePartition};
use crate::split::split;

/// Constructs a route partition using route-first-cluster-second.
///
/// Never fails: a client whose demand exceeds capacity ends up alone in a
/// capacity-infeasible route.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::Instance;
/// use cvrp_construct::constructive::route_first_cluster_second;
///
/// let instance = Instance::builder()
///     .depot(0.0, 0.0)
///     .client(1.0, 0.0, 10)
///     .client(2.0, 0.0, 10)
///     .client(3.0, 0.0, 10)
///     .capacity(20)
///     .vehicles(2)
///     .build()
///     .unwrap();
///
/// let partition = route_first_cluster_second(&instance);
/// assert_eq!(partition.routes(), &[vec![0, 1], vec![2]]);
/// ```
pub fn route_first_cluster_second(instance: &Instance) -> RoutePartition {
    debug!(
        "route-first-cluster-second: {} clients, capacity {:?}, fleet {}",
        instance.num_clients(),
        instance.capacity(),
        instance.num_vehicles()
    );

    let distances = DistanceMatrix::from_instance(instance);
    let tour = giant_tour(&distances);
    let routes = split(
        &tour,
        &instance.demands(),
        instance.capacity(),
        instance.num_vehicles(),
    );

    debug!("route-first-cluster-second built {} routes", routes.len());
    RoutePartition::new(routes)
}

/// Builds a nearest-neighbor giant tour over all clients, starting from the
/// depot.
///
/// Returns a permutation of `0..n`, empty when there are no clients.
pub fn giant_tour(distances: &DistanceMatrix) -> Vec<usize> {
    let n = distances.size();
    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    let mut current = Stop::Depot;

    while let Some(next) =
        distances.nearest_client(current, (0..n).filter(|&c| !visited[c]))
    {
        visited[next] = true;
        tour.push(next);
        current = Stop::Client(next);
    }

    tour
}
