//! Route partition produced by the constructive builders.

use serde::{Deserialize, Serialize};

/// An ordered sequence of routes, each an ordered sequence of 0-based client
/// indices. The depot is implicit at both ends of every route and is never
/// stored.
///
/// The builders guarantee that every client index appears exactly once
/// across all routes.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::RoutePartition;
///
/// let p = RoutePartition::new(vec![vec![2, 1], vec![0]]);
/// assert_eq!(p.num_routes(), 2);
/// assert_eq!(p.num_served(), 3);
/// assert_eq!(p.routes()[0], vec![2, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePartition {
    routes: Vec<Vec<usize>>,
}

impl RoutePartition {
    /// Wraps a list of routes.
    pub fn new(routes: Vec<Vec<usize>>) -> Self {
        Self { routes }
    }

    /// Routes in order.
    pub fn routes(&self) -> &[Vec<usize>] {
        &self.routes
    }

    /// Number of routes.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of client visits across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Vec::len).sum()
    }

    /// Returns `true` if there are no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates over the routes.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<usize>> {
        self.routes.iter()
    }

    /// Consumes the partition, returning the raw routes.
    pub fn into_routes(self) -> Vec<Vec<usize>> {
        self.routes
    }
}

impl From<Vec<Vec<usize>>> for RoutePartition {
    fn from(routes: Vec<Vec<usize>>) -> Self {
        Self::new(routes)
    }
}

impl<'a> IntoIterator for &'a RoutePartition {
    type Item = &'a Vec<usize>;
    type IntoIter = std::slice::Iter<'a, Vec<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let p = RoutePartition::default();
        assert!(p.is_empty());
        assert_eq!(p.num_routes(), 0);
        assert_eq!(p.num_served(), 0);
    }

    #[test]
    fn test_into_routes() {
        let p: RoutePartition = vec![vec![0, 1], vec![2]].into();
        assert_eq!(p.iter().count(), 2);
        assert_eq!(p.into_routes(), vec![vec![0, 1], vec![2]]);
    }
}
