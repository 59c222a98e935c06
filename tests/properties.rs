use cvrp_construct::constructive::InsertionVariant;
use cvrp_construct::distance::DistanceMatrix;
use cvrp_construct::evaluation::PartitionEvaluator;
use cvrp_construct::models::{Client, Instance, Point};
use cvrp_construct::split::split;
use cvrp_construct::Heuristic;
use proptest::prelude::*;

const HEURISTICS: [Heuristic; 4] = [
    Heuristic::CheapestInsertion(InsertionVariant::OrderThenSplit),
    Heuristic::CheapestInsertion(InsertionVariant::Interleaved),
    Heuristic::RouteFirstClusterSecond,
    Heuristic::Savings,
];

prop_compose! {
    /// Instances whose individual demands always fit a vehicle.
    fn instance()(
        clients in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0, 0u32..=30), 0..25),
        capacity in prop::option::of(30u32..=120),
        vehicles in 0usize..6,
    ) -> Instance {
        let clients = clients
            .into_iter()
            .map(|(x, y, d)| Client::new(x, y, d))
            .collect();
        Instance::new(Point::new(0.0, 0.0), clients, capacity, vehicles)
    }
}

fn sorted_clients(routes: &[Vec<usize>]) -> Vec<usize> {
    let mut all: Vec<usize> = routes.iter().flatten().copied().collect();
    all.sort_unstable();
    all
}

proptest! {
    #[test]
    fn partition_is_complete(inst in instance()) {
        for heuristic in HEURISTICS {
            let p = heuristic.build(&inst).expect("demands fit");
            let expected: Vec<usize> = (0..inst.num_clients()).collect();
            prop_assert_eq!(sorted_clients(p.routes()), expected);
            prop_assert!(p.iter().all(|r| !r.is_empty()));
        }
    }

    #[test]
    fn fleet_ceiling_holds(inst in instance()) {
        for heuristic in HEURISTICS {
            let p = heuristic.build(&inst).expect("demands fit");
            if inst.num_vehicles() > 0 {
                prop_assert!(p.num_routes() <= inst.num_vehicles());
            }
        }
    }

    #[test]
    fn only_repaired_route_may_exceed_capacity(inst in instance()) {
        let dm = DistanceMatrix::from_instance(&inst);
        let evaluator = PartitionEvaluator::new(&inst, &dm);
        for heuristic in HEURISTICS {
            let p = heuristic.build(&inst).expect("demands fit");
            let routes = p.routes();
            for (idx, route) in routes.iter().enumerate() {
                let repaired = inst.num_vehicles() > 0
                    && routes.len() == inst.num_vehicles()
                    && idx + 1 == routes.len();
                if !repaired {
                    prop_assert!(inst.fits(evaluator.route_load(route)));
                }
            }
        }
    }

    #[test]
    fn builders_are_deterministic(inst in instance()) {
        for heuristic in HEURISTICS {
            let first = heuristic.build(&inst).expect("demands fit");
            let second = heuristic.build(&inst.clone()).expect("demands fit");
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn distance_matrix_is_symmetric(inst in instance()) {
        let dm = DistanceMatrix::from_instance(&inst);
        for i in 0..dm.size() {
            prop_assert_eq!(dm.get(i, i), 0.0);
            for j in 0..dm.size() {
                prop_assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
    }

    #[test]
    fn split_preserves_order(
        demands in prop::collection::vec(0u32..=20, 0..30),
        capacity in 20u32..=60,
        vehicles in 0usize..5,
    ) {
        let order: Vec<usize> = (0..demands.len()).rev().collect();
        let routes = split(&order, &demands, Some(capacity), vehicles);
        let flat: Vec<usize> = routes.iter().flatten().copied().collect();
        prop_assert_eq!(flat, order);
        if vehicles > 0 {
            prop_assert!(routes.len() <= vehicles);
        }
    }
}
