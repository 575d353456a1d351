use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use proptest::prelude::*;
use u_tsp_bnb::bnb::{BnbConfig, BnbRunner, Termination};
use u_tsp_bnb::constructive::nearest_neighbor_tour;
use u_tsp_bnb::distance::CostMatrix;
use u_tsp_bnb::models::{random_cities, tour_cost, City, Location};
use u_tsp_bnb::TspError;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn brute_force(costs: &CostMatrix) -> f64 {
    let n = costs.size();
    let mut rest: Vec<usize> = (1..n).collect();
    let mut best = f64::INFINITY;
    heap_permutations(&mut rest, n - 1, &mut |perm| {
        let mut order = vec![0];
        order.extend_from_slice(perm);
        best = best.min(tour_cost(&order, |a, b| costs.get(a, b)));
    });
    best
}

fn heap_permutations(items: &mut [usize], k: usize, visit: &mut dyn FnMut(&[usize])) {
    if k <= 1 {
        visit(items);
        return;
    }
    heap_permutations(items, k - 1, visit);
    for i in 0..k - 1 {
        if k % 2 == 0 {
            items.swap(i, k - 1);
        } else {
            items.swap(0, k - 1);
        }
        heap_permutations(items, k - 1, visit);
    }
}

#[test]
fn unit_square_costs_four() {
    init_logger();
    let cities = vec![
        City::new(0, 0.0, 0.0),
        City::new(1, 0.0, 1.0),
        City::new(2, 1.0, 1.0),
        City::new(3, 1.0, 0.0),
    ];
    let result = u_tsp_bnb::solve(&cities, 10).expect("solvable");
    assert_eq!(result.best.cost(), 4.0);
    let ids: Vec<usize> = result.best.cities(&cities).iter().map(|c| c.id()).collect();
    assert_eq!(ids.len(), 4);
    assert_eq!(ids[0], 0);
}

#[test]
fn single_city_costs_zero() {
    init_logger();
    let result = u_tsp_bnb::solve(&[City::new(0, 9.0, 9.0)], 1).expect("one city");
    assert_eq!(result.best.cost(), 0.0);
    assert_eq!(result.best.len(), 1);
}

#[test]
fn empty_instance_is_an_error() {
    let cities: Vec<City> = Vec::new();
    assert_eq!(
        u_tsp_bnb::solve(&cities, 1).unwrap_err(),
        TspError::EmptyInstance
    );
}

#[test]
fn zero_budget_returns_greedy_tour() {
    let cities = random_cities(9, 21);
    let greedy = nearest_neighbor_tour(&CostMatrix::from_locations(&cities)).expect("complete");
    let result = u_tsp_bnb::solve(&cities, 0).expect("zero budget is not an error");
    assert_eq!(result.stats.termination, Termination::TimedOut);
    assert_eq!(result.best, greedy);
}

#[test]
fn small_instances_reach_the_optimum() {
    init_logger();
    for seed in 100..108 {
        let cities = random_cities(8, seed);
        let costs = CostMatrix::from_locations(&cities);
        let config = BnbConfig::default().without_time_limit();
        let result = BnbRunner::run(&costs, &config).expect("solvable");
        assert!(matches!(
            result.stats.termination,
            Termination::Exhausted | Termination::Optimal
        ));
        let optimum = brute_force(&costs);
        assert!(
            (result.best.cost() - optimum).abs() < 1e-9,
            "seed {seed}: {} vs {optimum}",
            result.best.cost()
        );
    }
}

/// A caller-defined oracle: Manhattan distance with a one-way toll.
struct Depot {
    x: i32,
    y: i32,
}

impl Location for Depot {
    fn cost_to(&self, other: &Self) -> f64 {
        let base = ((self.x - other.x).abs() + (self.y - other.y).abs()) as f64;
        if other.x < self.x {
            base + 2.0
        } else {
            base
        }
    }
}

#[test]
fn custom_asymmetric_oracle() {
    init_logger();
    let depots = vec![
        Depot { x: 0, y: 0 },
        Depot { x: 3, y: 1 },
        Depot { x: 1, y: 4 },
        Depot { x: 5, y: 5 },
        Depot { x: 2, y: 2 },
        Depot { x: 6, y: 0 },
    ];
    let costs = CostMatrix::from_locations(&depots);
    assert!(!costs.is_symmetric(1e-9));
    let result = BnbRunner::run(&costs, &BnbConfig::default().without_time_limit())
        .expect("solvable");
    assert!((result.best.cost() - brute_force(&costs)).abs() < 1e-9);
}

#[test]
fn external_cancel_stops_large_search() {
    init_logger();
    let costs = CostMatrix::from_locations(&random_cities(40, 4));
    let greedy = nearest_neighbor_tour(&costs).expect("complete graph");
    let flag = Arc::new(AtomicBool::new(false));
    let canceller = {
        let flag = Arc::clone(&flag);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            flag.store(true, Ordering::Relaxed);
        })
    };
    let config = BnbConfig::default().without_time_limit();
    let result = BnbRunner::run_with_cancel(&costs, &config, Some(flag)).expect("ok");
    canceller.join().expect("canceller thread");

    assert_eq!(result.stats.termination, Termination::TimedOut);
    assert!(result.best.is_permutation_of(40));
    assert!(result.best.cost() <= greedy.cost());
}

#[test]
fn time_budget_is_respected() {
    init_logger();
    let costs = CostMatrix::from_locations(&random_cities(40, 8));
    let config = BnbConfig::default().with_time_limit_ms(50);
    let result = BnbRunner::run(&costs, &config).expect("ok");
    assert!(result.stats.elapsed < Duration::from_secs(5));
    assert!(result.best.is_permutation_of(40));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn tours_are_permutations_no_worse_than_greedy(n in 1usize..9, seed in 0u64..1000) {
        let costs = CostMatrix::from_locations(&random_cities(n, seed));
        let config = BnbConfig::default().with_time_limit_secs(5);
        let result = BnbRunner::run(&costs, &config).expect("solvable");
        prop_assert!(result.best.is_permutation_of(n));
        prop_assert!(result.best.cost() <= result.stats.greedy_cost + 1e-9);
        let recomputed = tour_cost(result.best.order(), |a, b| costs.get(a, b));
        prop_assert_eq!(recomputed, result.best.cost());
    }
}
