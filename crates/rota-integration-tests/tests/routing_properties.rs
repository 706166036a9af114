//! # Routing Properties
//!
//! Property tests over random graphs: both selection strategies, the
//! Dijkstra invariant on directed graphs, path well-formedness, and
//! single-run planning versus repeated single routes.

use proptest::prelude::*;

use rota_core::{Metric, NodeId, WeightBundle};
use rota_engine::{
    compute_shortest_paths, reconstruct_path, RoutePlanner, SelectionStrategy,
    ShortestPathRequest,
};
use rota_graph::Graph;

fn node(i: usize) -> NodeId {
    NodeId::new(format!("v{i:02}")).unwrap()
}

/// Random mixed directed/undirected graph with two metrics on every edge.
///
/// Weights are small integers so sums are exact.
fn arb_graph() -> impl Strategy<Value = Graph> {
    (
        1usize..12,
        prop::collection::vec(
            (0usize..12, 0usize..12, 0u32..50, 0u32..50, any::<bool>()),
            0..40,
        ),
    )
        .prop_map(|(n, edges)| {
            let mut g = Graph::new();
            for i in 0..n {
                g.add_node(node(i), None);
            }
            for (a, b, time, distance, directed) in edges {
                let weights = WeightBundle::new()
                    .with("time", f64::from(time))
                    .and_then(|w| w.with("distance", f64::from(distance)))
                    .unwrap();
                let (a, b) = (node(a % n), node(b % n));
                if directed {
                    g.add_directed_edge(a, b, weights);
                } else {
                    g.add_edge(a, b, weights);
                }
            }
            g
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn strategies_produce_identical_tables(g in arb_graph(), src in 0usize..12) {
        let source = node(src % g.node_count());
        for criterion in [Metric::time(), Metric::distance()] {
            let base = ShortestPathRequest::new(source.clone(), criterion);
            let scan = compute_shortest_paths(&g, &base).unwrap();
            let heap = compute_shortest_paths(
                &g,
                &base.with_strategy(SelectionStrategy::BinaryHeap),
            )
            .unwrap();
            prop_assert_eq!(scan.distances(), heap.distances());
            prop_assert_eq!(scan.predecessors(), heap.predecessors());
        }
    }

    #[test]
    fn self_distance_is_zero_and_invariant_holds(g in arb_graph(), src in 0usize..12) {
        let source = node(src % g.node_count());
        let sp = compute_shortest_paths(&g, &ShortestPathRequest::new(source.clone(), Metric::time()))
            .unwrap();
        prop_assert_eq!(sp.distance(source.as_str()), 0.0);
        for (u, record) in g.records() {
            let du = sp.distance(u.as_str());
            if !du.is_finite() {
                continue;
            }
            for (v, weights) in record.adjacency() {
                let w = weights.get("time").unwrap();
                prop_assert!(sp.distance(v.as_str()) <= du + w);
            }
        }
    }

    #[test]
    fn reconstructed_paths_are_well_formed(g in arb_graph(), src in 0usize..12) {
        let source = node(src % g.node_count());
        let sp = compute_shortest_paths(&g, &ShortestPathRequest::new(source.clone(), Metric::distance()))
            .unwrap();
        for dest in g.nodes() {
            let path = reconstruct_path(sp.predecessors(), &source, dest);
            if sp.is_reachable(dest.as_str()) {
                prop_assert_eq!(path.first(), Some(&source));
                prop_assert_eq!(path.last(), Some(dest));
                let cost: f64 = path
                    .windows(2)
                    .map(|p| g.edge(p[0].as_str(), p[1].as_str()).and_then(|w| w.get("distance")).unwrap())
                    .sum();
                prop_assert_eq!(cost, sp.distance(dest.as_str()));
            } else {
                prop_assert!(path.is_empty());
            }
        }
    }

    #[test]
    fn early_exit_agrees_with_full_run(g in arb_graph(), src in 0usize..12, dst in 0usize..12) {
        let source = node(src % g.node_count());
        let target = node(dst % g.node_count());
        let full = compute_shortest_paths(&g, &ShortestPathRequest::new(source.clone(), Metric::time()))
            .unwrap();
        let early = compute_shortest_paths(
            &g,
            &ShortestPathRequest::new(source.clone(), Metric::time()).with_target(target.clone()),
        )
        .unwrap();
        prop_assert_eq!(full.distance(target.as_str()), early.distance(target.as_str()));
        prop_assert!(early.settled_count() <= full.settled_count());
    }

    #[test]
    fn plan_equals_repeated_find_route(g in arb_graph(), src in 0usize..12) {
        let origin = node(src % g.node_count());
        let destinations: Vec<NodeId> = g.nodes().cloned().collect();
        let planner = RoutePlanner::new(&g);
        let plan = planner.plan_routes(&origin, &destinations, &Metric::time()).unwrap();
        for (route, dest) in plan.iter().zip(&destinations) {
            let single = planner.find_route(&origin, dest, &Metric::time()).unwrap();
            prop_assert_eq!(route, &single);
        }
    }

    #[test]
    fn criterion_total_is_never_beaten_by_other_criterion(g in arb_graph(), src in 0usize..12, dst in 0usize..12) {
        let origin = node(src % g.node_count());
        let dest = node(dst % g.node_count());
        let planner = RoutePlanner::new(&g);
        let by_time = planner.find_route(&origin, &dest, &Metric::time()).unwrap();
        let by_distance = planner.find_route(&origin, &dest, &Metric::distance()).unwrap();
        prop_assert_eq!(by_time.is_reachable(), by_distance.is_reachable());
        if let (Some(t_on_time), Some(t_on_distance)) = (by_time.total("time"), by_distance.total("time")) {
            prop_assert!(t_on_time <= t_on_distance);
        }
    }
}
