//! Error type for route construction.

/// Errors surfaced by instance building and route construction.
///
/// Both variants are structural: the algorithms are deterministic and
/// single-pass, so nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// The instance declares no depot.
    NoDepot,
    /// A single client's demand exceeds the vehicle capacity.
    DemandExceedsCapacity {
        /// 0-based client index.
        client: usize,
        /// Demand of that client.
        demand: u32,
        /// Vehicle capacity.
        capacity: u32,
    },
}

impl std::fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstructionError::NoDepot => write!(f, "instance declares no depot"),
            ConstructionError::DemandExceedsCapacity {
                client,
                demand,
                capacity,
            } => write!(
                f,
                "client {} has demand {} exceeding vehicle capacity {}",
                client, demand, capacity
            ),
        }
    }
}

impl std::error::Error for ConstructionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_no_depot() {
        assert_eq!(
            ConstructionError::NoDepot.to_string(),
            "instance declares no depot"
        );
    }

    #[test]
    fn test_display_names_client() {
        let err = ConstructionError::DemandExceedsCapacity {
            client: 4,
            demand: 20,
            capacity: 10,
        };
        assert_eq!(
            err.to_string(),
            "client 4 has demand 20 exceeding vehicle capacity 10"
        );
    }
}
