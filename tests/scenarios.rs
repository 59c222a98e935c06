use cvrp_construct::constructive::{
    cheapest_insertion, clarke_wright_savings, route_first_cluster_second, InsertionVariant,
};
use cvrp_construct::distance::DistanceMatrix;
use cvrp_construct::evaluation::{PartitionEvaluator, Violation};
use cvrp_construct::models::{Client, Instance, Point};
use cvrp_construct::split::split;
use cvrp_construct::{ConstructionError, Heuristic};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_instance(seed: u64, n: usize, capacity: Option<u32>, vehicles: usize) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let clients = (0..n)
        .map(|_| {
            Client::new(
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..100.0),
                rng.random_range(1..=20),
            )
        })
        .collect();
    Instance::new(Point::new(50.0, 50.0), clients, capacity, vehicles)
}

#[test]
fn test_savings_two_routes_on_a_line() {
    init_logger();
    let inst = Instance::builder()
        .depot(0.0, 0.0)
        .client(1.0, 0.0, 5)
        .client(2.0, 0.0, 5)
        .client(3.0, 0.0, 5)
        .capacity(10)
        .vehicles(2)
        .build()
        .expect("has depot");

    let p = clarke_wright_savings(&inst).expect("all demands fit");
    assert_eq!(p.routes(), &[vec![0], vec![1, 2]]);

    let dm = DistanceMatrix::from_instance(&inst);
    let eval = PartitionEvaluator::new(&inst, &dm).evaluate(&p);
    assert!(eval.is_feasible());
    // [0]: 1 + 1, [1, 2]: 2 + 1 + 3
    assert!((eval.total_distance - 8.0).abs() < 1e-10);
}

#[test]
fn test_unbounded_capacity_single_route() {
    init_logger();
    let inst = random_instance(7, 30, None, 4);

    for variant in [InsertionVariant::OrderThenSplit, InsertionVariant::Interleaved] {
        let p = cheapest_insertion(&inst, variant);
        assert_eq!(p.num_routes(), 1);
        assert_eq!(p.num_served(), 30);
    }

    let p = route_first_cluster_second(&inst);
    assert_eq!(p.num_routes(), 1);
    assert_eq!(p.num_served(), 30);
}

#[test]
fn test_oversized_client_reported_only_by_savings() {
    init_logger();
    let inst = Instance::builder()
        .depot(0.0, 0.0)
        .client(4.0, 3.0, 20)
        .capacity(10)
        .build()
        .expect("has depot");

    assert_eq!(
        clarke_wright_savings(&inst),
        Err(ConstructionError::DemandExceedsCapacity {
            client: 0,
            demand: 20,
            capacity: 10,
        })
    );

    let dm = DistanceMatrix::from_instance(&inst);
    let evaluator = PartitionEvaluator::new(&inst, &dm);
    for p in [
        cheapest_insertion(&inst, InsertionVariant::OrderThenSplit),
        route_first_cluster_second(&inst),
    ] {
        assert_eq!(p.routes(), &[vec![0]]);
        assert_eq!(
            evaluator.evaluate(&p).violations,
            vec![Violation::CapacityExceeded {
                route_index: 0,
                load: 20,
                capacity: 10,
            }]
        );
    }
}

#[test]
fn test_tail_merge_five_on_a_line() {
    init_logger();
    let demands: [u32; 5] = [5; 5];
    let order: [usize; 5] = [0, 1, 2, 3, 4];

    let unlimited = split(&order, &demands, Some(10), 0);
    assert_eq!(unlimited, vec![vec![0, 1], vec![2, 3], vec![4]]);

    let limited = split(&order, &demands, Some(10), 2);
    assert_eq!(limited, vec![vec![0, 1], vec![2, 3, 4]]);

    let inst = Instance::builder()
        .depot(0.0, 0.0)
        .clients((1..=5).map(|x: u32| Client::new(f64::from(x), 0.0, 5)))
        .capacity(10)
        .vehicles(2)
        .build()
        .expect("has depot");
    let p = route_first_cluster_second(&inst);
    assert_eq!(p.routes(), &[vec![0, 1], vec![2, 3, 4]]);

    let dm = DistanceMatrix::from_instance(&inst);
    let eval = PartitionEvaluator::new(&inst, &dm).evaluate(&p);
    assert_eq!(
        eval.violations,
        vec![Violation::CapacityExceeded {
            route_index: 1,
            load: 15,
            capacity: 10,
        }]
    );
}

#[test]
fn test_no_depot() {
    let result = Instance::builder()
        .client(1.0, 1.0, 1)
        .capacity(10)
        .build();
    assert_eq!(result, Err(ConstructionError::NoDepot));
}

#[test]
fn test_all_heuristics_cover_random_instance() {
    init_logger();
    let inst = random_instance(42, 60, Some(50), 0);
    let dm = DistanceMatrix::from_instance(&inst);
    let evaluator = PartitionEvaluator::new(&inst, &dm);

    let mut heuristics = Heuristic::ALL.to_vec();
    heuristics.push(Heuristic::CheapestInsertion(InsertionVariant::Interleaved));

    for heuristic in heuristics {
        let p = heuristic.build(&inst).expect("all demands fit");
        let eval = evaluator.evaluate(&p);
        assert!(eval.is_feasible(), "{}: {:?}", heuristic, eval.violations);
        assert_eq!(p.num_served(), 60);
        assert_eq!(p, heuristic.build(&inst).expect("all demands fit"));
    }
}

#[test]
fn test_savings_beats_separate_trips() {
    init_logger();
    let inst = random_instance(3, 40, Some(60), 0);
    let dm = DistanceMatrix::from_instance(&inst);
    let evaluator = PartitionEvaluator::new(&inst, &dm);

    let p = clarke_wright_savings(&inst).expect("all demands fit");
    let separate: f64 = (0..inst.num_clients()).map(|i| 2.0 * dm.depot(i)).sum();
    // Savings are non-negative by the triangle inequality
    assert!(evaluator.total_distance(&p) <= separate + 1e-9);
}
