//! Point and client types.

use serde::{Deserialize, Serialize};

/// A location in the plane.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::Point;
///
/// let p = Point::new(3.0, 4.0);
/// assert_eq!(p.x(), 3.0);
/// assert!((p.distance_to(&Point::new(0.0, 0.0)) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A client to be served by exactly one route.
///
/// Clients are identified by their 0-based position in the instance's
/// client sequence; the depot is not a client.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::Client;
///
/// let c = Client::new(41.0, 49.0, 10);
/// assert_eq!(c.demand(), 10);
///
/// let no_demand = Client::at(1.0, 2.0);
/// assert_eq!(no_demand.demand(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Client {
    position: Point,
    #[serde(default)]
    demand: u32,
}

impl Client {
    /// Creates a client with the given coordinates and demand.
    pub fn new(x: f64, y: f64, demand: u32) -> Self {
        Self {
            position: Point::new(x, y),
            demand,
        }
    }

    /// Creates a client that declares no demand (treated as 0).
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, 0)
    }

    /// Location of this client.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Demand of this client (first load dimension).
    pub fn demand(&self) -> u32 {
        self.demand
    }
}
