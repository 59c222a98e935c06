//! Dense depot/client distance matrix.

use crate::models::{Instance, Point};

/// Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use cvrp_construct::distance::distance;
/// use cvrp_construct::models::Point;
///
/// assert!((distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)) - 5.0).abs() < 1e-10);
/// ```
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance_to(&p2)
}

/// An endpoint of a leg: the depot or a 0-based client index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stop {
    /// The depot.
    Depot,
    /// A client, by index into the instance's client sequence.
    Client(usize),
}

/// Euclidean distances for one instance: a depot row of length n and a dense
/// n×n client block stored in row-major order.
///
/// Built once per builder call and discarded with it.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::Instance;
/// use cvrp_construct::distance::{DistanceMatrix, Stop};
///
/// let instance = Instance::builder()
///     .depot(0.0, 0.0)
///     .client(3.0, 4.0, 10)
///     .client(0.0, 8.0, 20)
///     .build()
///     .unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
/// assert!((dm.depot(0) - 5.0).abs() < 1e-10);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!((dm.between(Stop::Client(1), Stop::Depot) - 8.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    depot: Vec<f64>,
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the depot row and the client block from coordinates.
    pub fn from_instance(instance: &Instance) -> Self {
        Self::from_points(instance.depot(), instance.clients().iter().map(|c| c.position()))
    }

    /// Computes the matrices from a depot and client positions in index order.
    pub fn from_points(depot: Point, clients: impl IntoIterator<Item = Point>) -> Self {
        let points: Vec<Point> = clients.into_iter().collect();
        let n = points.len();
        let depot_row = points.iter().map(|&p| distance(depot, p)).collect();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance(points[i], points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self {
            depot: depot_row,
            data,
            size: n,
        }
    }

    /// Distance between clients `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    /// Distance between the depot and client `i`.
    pub fn depot(&self, i: usize) -> f64 {
        self.depot[i]
    }

    /// Distance between two stops.
    pub fn between(&self, from: Stop, to: Stop) -> f64 {
        match (from, to) {
            (Stop::Depot, Stop::Depot) => 0.0,
            (Stop::Depot, Stop::Client(i)) | (Stop::Client(i), Stop::Depot) => self.depot(i),
            (Stop::Client(i), Stop::Client(j)) => self.get(i, j),
        }
    }

    /// Number of clients covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the client block is symmetric within the given
    /// tolerance and zero on its diagonal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            if self.get(i, i).abs() > tol {
                return false;
            }
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the candidate client nearest to `from`.
    ///
    /// Ties go to the candidate with the smallest index, regardless of the
    /// order candidates are supplied in. Returns `None` if `candidates` is
    /// empty.
    pub fn nearest_client(
        &self,
        from: Stop,
        candidates: impl IntoIterator<Item = usize>,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for c in candidates {
            let d = self.between(from, Stop::Client(c));
            let better = match best {
                None => true,
                Some((b, bd)) => d < bd || (d == bd && c < b),
            };
            if better {
                best = Some((c, d));
            }
        }
        best.map(|(c, _)| c)
    }
}
