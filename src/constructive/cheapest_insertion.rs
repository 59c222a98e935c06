//! Cheapest insertion constructive heuristic.
//!
//! # Algorithm
//!
//! Builds one global visiting order, ignoring capacity. The order starts with
//! the client nearest to the depot. At every step, each unplaced client is
//! tried at every position of the current order (depot at both boundaries),
//! and the pair with the smallest detour
//!
//! ```text
//! delta = d(prev, c) + d(c, next) - d(prev, next)
//! ```
//!
//! is inserted. Clients are enumerated in ascending index and positions left
//! to right; only a strictly smaller delta replaces the incumbent, so the
//! first-encountered pair wins ties.
//!
//! The finished order is then cut into routes, either by the shared capacity
//! split ([`InsertionVariant::OrderThenSplit`]) or by an inline walk that only
//! closes a route while fleet headroom remains ([`InsertionVariant::Interleaved`]).
//!
//! # Complexity
//!
//! O(n³) where n = number of clients (n steps, each trying up to n clients at
//! up to n + 1 positions).

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::distance::{DistanceMatrix, Stop};
use crate::models::{fits, Instance, RoutePartition};
use crate::split::{collapse, split};

/// How the cheapest-insertion order is cut into vehicle routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsertionVariant {
    /// Hand the order to the capacity split; surplus routes are tail-merged.
    #[default]
    OrderThenSplit,
    /// Walk the order closing routes on capacity only while another vehicle
    /// is available; otherwise keep appending over capacity. Surplus routes,
    /// if any, are collapsed into one.
    Interleaved,
}

/// Constructs a route partition using cheapest insertion.
///
/// Never fails: a client whose demand exceeds capacity is placed anyway and
/// its route is left capacity-infeasible.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::Instance;
/// use cvrp_construct::constructive::{cheapest_insertion, InsertionVariant};
///
/// let instance = Instance::builder()
///     .depot(0.0, 0.0)
///     .client(1.0, 0.0, 10)
///     .client(2.0, 0.0, 10)
///     .client(3.0, 0.0, 10)
///     .capacity(20)
///     .build()
///     .unwrap();
///
/// let partition = cheapest_insertion(&instance, InsertionVariant::OrderThenSplit);
/// assert_eq!(partition.routes(), &[vec![2, 1], vec![0]]);
/// ```
pub fn cheapest_insertion(instance: &Instance, variant: InsertionVariant) -> RoutePartition {
    debug!(
        "cheapest insertion ({:?}): {} clients, capacity {:?}, fleet {}",
        variant,
        instance.num_clients(),
        instance.capacity(),
        instance.num_vehicles()
    );

    let distances = DistanceMatrix::from_instance(instance);
    let order = insertion_order(&distances);
    let demands = instance.demands();

    let routes = match variant {
        InsertionVariant::OrderThenSplit => split(
            &order,
            &demands,
            instance.capacity(),
            instance.num_vehicles(),
        ),
        InsertionVariant::Interleaved => split_with_headroom(
            &order,
            &demands,
            instance.capacity(),
            instance.num_vehicles(),
        ),
    };

    debug!("cheapest insertion built {} routes", routes.len());
    RoutePartition::new(routes)
}

/// Builds a single visiting order over all clients by cheapest insertion.
///
/// Returns an empty order when there are no clients.
pub fn insertion_order(distances: &DistanceMatrix) -> Vec<usize> {
    let n = distances.size();
    let Some(first) = distances.nearest_client(Stop::Depot, 0..n) else {
        return Vec::new();
    };

    let mut order = Vec::with_capacity(n);
    let mut placed = vec![false; n];
    order.push(first);
    placed[first] = true;

    while order.len() < n {
        // (client, position, delta)
        let mut best: Option<(usize, usize, f64)> = None;

        for client in (0..n).filter(|&c| !placed[c]) {
            let candidate = Stop::Client(client);
            let mut prev = Stop::Depot;
            for pos in 0..=order.len() {
                let next = order.get(pos).map_or(Stop::Depot, |&c| Stop::Client(c));
                let delta = distances.between(prev, candidate)
                    + distances.between(candidate, next)
                    - distances.between(prev, next);
                if best.map_or(true, |(_, _, d)| delta < d) {
                    best = Some((client, pos, delta));
                }
                prev = next;
            }
        }

        let Some((client, pos, delta)) = best else {
            break;
        };
        trace!("insert client {} at {} (+{:.3})", client, pos, delta);
        order.insert(pos, client);
        placed[client] = true;
    }

    order
}

/// Cuts `order` into routes, closing a route on capacity only while the
/// closed routes plus the newly opened one still fit the fleet.
fn split_with_headroom(
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
        let headroom = max_vehicles == 0 || routes.len() + 2 <= max_vehicles;
        if !current.is_empty() && !fits(load + demand, capacity) && headroom {
            routes.push(std::mem::take(&mut current));
            load = 0;
        }
        current.push(client);
        load += demand;
    }
    if !current.is_empty() {
        routes.push(current);
    }

    // Last-resort fleet repair; the headroom rule already keeps routes within the fleet.
    collapse(&mut routes, max_vehicles);
    routes
}
