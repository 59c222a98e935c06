//! Greedy capacity split with fleet-size repair.
//!
//! # Algorithm
//!
//! Scans a client order left to right with a running load. When the next
//! client would push a non-empty route over capacity, that route is closed
//! and a new one is opened with the client. A client whose own demand exceeds
//! capacity therefore ends up alone in an infeasible route.
//!
//! If the scan yields more routes than the fleet allows, every route from
//! position `max_vehicles - 1` onward is concatenated into one final route
//! (tail-merge). The merged route may exceed capacity.
//!
//! # Complexity
//!
//! O(n) where n = length of the order.

use log::warn;

use crate::models::fits;

/// Splits `order` into contiguous capacity-feasible routes, then applies the
/// tail-merge repair if the route count exceeds `max_vehicles`.
///
/// # Arguments
///
/// * `order` — Client indices in visiting order
/// * `demands` — Demand per client index
/// * `capacity` — Vehicle capacity (`None` = unbounded)
/// * `max_vehicles` — Fleet size (0 = unconstrained)
///
/// # Examples
///
/// ```
/// use cvrp_construct::split::split;
///
/// let demands: [u32; 5] = [5; 5];
/// // Capacity 10 gives [0,1] [2,3] [4]; two vehicles merge the tail.
/// let routes = split(&[0, 1, 2, 3, 4], &demands, Some(10), 2);
/// assert_eq!(routes, vec![vec![0, 1], vec![2, 3, 4]]);
/// ```
pub fn split(
    order: &[usize],
    demands: &[u32],
    capacity: Option<u32>,
    max_vehicles: usize,
) -> Vec<Vec<usize>> {
    let mut routes = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut load: u64 = 0;

    for &client in order {
        let demand = u64::from(demands[client]);
        if !current.is_empty() && !fits(load + demand, capacity) {
            routes.push(std::mem::take(&mut current));
            load = 0;
        }
        current.push(client);
        load += demand;
    }
    if !current.is_empty() {
        routes.push(current);
    }

    merge_tail(&mut routes, max_vehicles);
    routes
}

/// Concatenates every route from index `max_vehicles - 1` onward into a
/// single final route when there are more than `max_vehicles` routes.
///
/// Does nothing when `max_vehicles` is 0. Returns `true` if a merge happened.
pub fn merge_tail(routes: &mut Vec<Vec<usize>>, max_vehicles: usize) -> bool {
    if max_vehicles == 0 || routes.len() <= max_vehicles {
        return false;
    }
    let before = routes.len();
    let merged: Vec<usize> = routes.drain(max_vehicles - 1..).flatten().collect();
    routes.push(merged);
    warn!(
        "{} routes exceed fleet size {}, merged tail into route {}",
        before, max_vehicles, max_vehicles - 1
    );
    true
}

/// Concatenates all routes into a single one when there are more than
/// `max_vehicles` routes.
///
/// Does nothing when `max_vehicles` is 0. Returns `true` if a merge happened.
pub fn collapse(routes: &mut Vec<Vec<usize>>, max_vehicles: usize) -> bool {
    if max_vehicles == 0 || routes.len() <= max_vehicles {
        return false;
    }
    let before = routes.len();
    let merged: Vec<usize> = routes.drain(..).flatten().collect();
    routes.push(merged);
    warn!(
        "{} routes exceed fleet size {}, collapsed into a single route",
        before, max_vehicles
    );
    true
}
