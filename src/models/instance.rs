//! CVRP instance and its builder.

use serde::{Deserialize, Serialize};

use super::{Client, Point};
use crate::error::ConstructionError;

/// An immutable CVRP instance: one depot, a client sequence, a per-vehicle
/// capacity and a fleet size.
///
/// A `capacity` of `None` means the instance declares no capacity dimension
/// and vehicles are unbounded. A `num_vehicles` of 0 means the fleet is
/// unconstrained.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::Instance;
///
/// let instance = Instance::builder()
///     .depot(0.0, 0.0)
///     .client(1.0, 0.0, 5)
///     .client(2.0, 0.0, 5)
///     .capacity(10)
///     .vehicles(2)
///     .build()
///     .unwrap();
/// assert_eq!(instance.num_clients(), 2);
/// assert_eq!(instance.capacity(), Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    depot: Point,
    clients: Vec<Client>,
    capacity: Option<u32>,
    num_vehicles: usize,
}

impl Instance {
    /// Creates an instance from its parts.
    pub fn new(
        depot: Point,
        clients: Vec<Client>,
        capacity: Option<u32>,
        num_vehicles: usize,
    ) -> Self {
        Self {
            depot,
            clients,
            capacity,
            num_vehicles,
        }
    }

    /// Starts an [`InstanceBuilder`].
    pub fn builder() -> InstanceBuilder {
        InstanceBuilder::default()
    }

    /// Depot location.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// Clients in index order.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Number of clients (the depot is not counted).
    pub fn num_clients(&self) -> usize {
        self.clients.len()
    }

    /// Demand of client `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn demand(&self, i: usize) -> u32 {
        self.clients[i].demand()
    }

    /// Demands of all clients in index order.
    pub fn demands(&self) -> Vec<u32> {
        self.clients.iter().map(Client::demand).collect()
    }

    /// Per-vehicle capacity, `None` if unbounded.
    pub fn capacity(&self) -> Option<u32> {
        self.capacity
    }

    /// Declared fleet size, 0 if unconstrained.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Returns `true` if a load fits the vehicle capacity.
    pub fn fits(&self, load: u64) -> bool {
        fits(load, self.capacity)
    }
}

/// Returns `true` if `load` does not exceed `capacity` (`None` is unbounded).
pub(crate) fn fits(load: u64, capacity: Option<u32>) -> bool {
    capacity.map_or(true, |c| load <= u64::from(c))
}

/// Incremental builder for [`Instance`].
///
/// Several depots may be declared; only the first one is used. Building
/// without any depot fails with [`ConstructionError::NoDepot`].
#[derive(Debug, Clone, Default)]
pub struct InstanceBuilder {
    depots: Vec<Point>,
    clients: Vec<Client>,
    capacity: Option<u32>,
    num_vehicles: usize,
}

impl InstanceBuilder {
    /// Declares a depot.
    pub fn depot(mut self, x: f64, y: f64) -> Self {
        self.depots.push(Point::new(x, y));
        self
    }

    /// Appends a client with the given coordinates and demand.
    pub fn client(mut self, x: f64, y: f64, demand: u32) -> Self {
        self.clients.push(Client::new(x, y, demand));
        self
    }

    /// Appends several clients.
    pub fn clients(mut self, clients: impl IntoIterator<Item = Client>) -> Self {
        self.clients.extend(clients);
        self
    }

    /// Sets the vehicle capacity.
    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sets the fleet size (0 = unconstrained).
    pub fn vehicles(mut self, num_vehicles: usize) -> Self {
        self.num_vehicles = num_vehicles;
        self
    }

    /// Builds the instance.
    pub fn build(self) -> Result<Instance, ConstructionError> {
        let depot = *self.depots.first().ok_or(ConstructionError::NoDepot)?;
        Ok(Instance::new(
            depot,
            self.clients,
            self.capacity,
            self.num_vehicles,
        ))
    }
}
