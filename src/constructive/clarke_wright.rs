//! Clarke-Wright savings algorithm.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) starts with each client
//! on its own route (depot → client → depot). It then merges routes by
//! computing the "savings" of serving two clients on one route:
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! Every unordered pair is considered in decreasing order of savings, ties
//! broken by ascending `(i, j)`. A pair merges its two routes when both
//! clients sit at route endpoints, the routes differ, and the combined load
//! fits the vehicle. Surplus routes beyond the fleet size are tail-merged
//! afterwards.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of clients (dominated by sorting savings),
//! plus O(route length) remapping per merge.
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use log::{debug, trace};

use crate::distance::DistanceMatrix;
use crate::error::ConstructionError;
use crate::models::{Instance, RoutePartition};
use crate::split::merge_tail;

/// A savings value for merging two clients' routes.
#[derive(Debug)]
struct Saving {
    i: usize,
    j: usize,
    value: f64,
}

/// Constructs a route partition using the Clarke-Wright savings algorithm.
///
/// # Errors
///
/// Returns [`ConstructionError::DemandExceedsCapacity`] before any merge if a
/// single client's demand exceeds the vehicle capacity.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::Instance;
/// use cvrp_construct::constructive::clarke_wright_savings;
///
/// let instance = Instance::builder()
///     .depot(0.0, 0.0)
///     .client(1.0, 0.0, 5)
///     .client(2.0, 0.0, 5)
///     .client(3.0, 0.0, 5)
///     .capacity(10)
///     .vehicles(2)
///     .build()
///     .unwrap();
///
/// let partition = clarke_wright_savings(&instance).unwrap();
/// assert_eq!(partition.routes(), &[vec![0], vec![1, 2]]);
/// ```
pub fn clarke_wright_savings(instance: &Instance) -> Result<RoutePartition, ConstructionError> {
    debug!(
        "savings: {} clients, capacity {:?}, fleet {}",
        instance.num_clients(),
        instance.capacity(),
        instance.num_vehicles()
    );

    check_demands(instance)?;

    let n = instance.num_clients();
    let distances = DistanceMatrix::from_instance(instance);
    let savings = sorted_savings(&distances);

    // Routes stay at their original singleton slot; merged-away slots are
    // left empty.
    let mut route_of: Vec<usize> = (0..n).collect();
    let mut route_load: Vec<u64> = instance.demands().into_iter().map(u64::from).collect();
    let mut route_members: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();

    for saving in &savings {
        let ri = route_of[saving.i];
        let rj = route_of[saving.j];

        if ri == rj || route_members[ri].is_empty() || route_members[rj].is_empty() {
            continue;
        }

        let combined_load = route_load[ri] + route_load[rj];
        if !instance.fits(combined_load) {
            continue;
        }

        let i_at_start = route_members[ri].first() == Some(&saving.i);
        let i_at_end = route_members[ri].last() == Some(&saving.i);
        let j_at_start = route_members[rj].first() == Some(&saving.j);
        let j_at_end = route_members[rj].last() == Some(&saving.j);

        // (merge_from, merge_into, reverse_from, reverse_into); the donor is
        // appended to the survivor so that i and j become adjacent.
        let (merge_from, merge_into, reverse_from, reverse_into) =
            if i_at_end && j_at_start {
                (rj, ri, false, false)
            } else if i_at_start && j_at_end {
                (ri, rj, false, false)
            } else if i_at_start && j_at_start {
                (rj, ri, false, true)
            } else if i_at_end && j_at_end {
                (rj, ri, true, false)
            } else {
                continue;
            };

        let mut from_members = std::mem::take(&mut route_members[merge_from]);
        if reverse_from {
            from_members.reverse();
        }
        if reverse_into {
            route_members[merge_into].reverse();
        }

        for &cid in &from_members {
            route_of[cid] = merge_into;
        }
        route_members[merge_into].append(&mut from_members);
        route_load[merge_into] = combined_load;
        route_load[merge_from] = 0;

        trace!(
            "merged route {} into {} on ({}, {}) saving {:.3}",
            merge_from,
            merge_into,
            saving.i,
            saving.j,
            saving.value
        );
    }

    let mut routes: Vec<Vec<usize>> = route_members
        .into_iter()
        .filter(|members| !members.is_empty())
        .collect();
    merge_tail(&mut routes, instance.num_vehicles());

    debug!("savings built {} routes", routes.len());
    Ok(RoutePartition::new(routes))
}

/// Fails on the first client (by index) whose demand alone exceeds capacity.
fn check_demands(instance: &Instance) -> Result<(), ConstructionError> {
    let Some(capacity) = instance.capacity() else {
        return Ok(());
    };
    match instance.clients().iter().position(|c| c.demand() > capacity) {
        Some(client) => Err(ConstructionError::DemandExceedsCapacity {
            client,
            demand: instance.demand(client),
            capacity,
        }),
        None => Ok(()),
    }
}

/// All pairwise savings, i < j, in decreasing value with ascending `(i, j)`
/// on ties.
fn sorted_savings(distances: &DistanceMatrix) -> Vec<Saving> {
    let n = distances.size();
    let mut savings = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            let value = distances.depot(i) + distances.depot(j) - distances.get(i, j);
            savings.push(Saving { i, j, value });
        }
    }

    savings.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .expect("savings should not be NaN")
            .then_with(|| (a.i, a.j).cmp(&(b.i, b.j)))
    });
    savings
}
