//! Property tests checking searches against `petgraph`'s Dijkstra on
//! random graphs with small integer weights.

use std::collections::BTreeMap;

use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;
use waypath_core::prelude::*;

const MAX_NODES: usize = 12;
const MAX_WEIGHT: u32 = 20;

#[derive(Debug, Clone)]
struct Case {
    node_count: usize,
    edges: BTreeMap<(usize, usize), u32>,
    source: usize,
}

fn case_strategy() -> impl Strategy<Value = Case> {
    (1..=MAX_NODES).prop_flat_map(|n| {
        (
            proptest::collection::vec((0..n, 0..n, 0..MAX_WEIGHT), 0..n * 3),
            0..n,
        )
            .prop_map(move |(raw_edges, source)| Case {
                node_count: n,
                // Later duplicates overwrite, as in `Graph::add_edge`
                edges: raw_edges
                    .into_iter()
                    .map(|(from, to, weight)| ((from, to), weight))
                    .collect(),
                source,
            })
    })
}

fn build(case: &Case) -> (Graph<usize, u32>, DiGraph<(), u32>, Vec<NodeIndex>) {
    let mut graph = Graph::new();
    let mut oracle = DiGraph::new();
    let indices: Vec<NodeIndex> = (0..case.node_count).map(|_| oracle.add_node(())).collect();

    for (&(from, to), &weight) in &case.edges {
        graph.add_edge(from, to, weight);
        oracle.add_edge(indices[from], indices[to], weight);
    }

    (graph, oracle, indices)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn costs_match_reference(case in case_strategy()) {
        let (graph, oracle, indices) = build(&case);
        let expected = petgraph::algo::dijkstra(&oracle, indices[case.source], None, |e| *e.weight());

        let tree = shortest_path_tree(&graph, &case.source, None, &SearchConfig::default()).unwrap();
        for node in 0..case.node_count {
            prop_assert_eq!(tree.cost_to(&node), expected.get(&indices[node]).copied());
        }
    }

    #[test]
    fn predecessors_hold_reachable_nodes_except_source(case in case_strategy()) {
        let (graph, oracle, indices) = build(&case);
        let expected = petgraph::algo::dijkstra(&oracle, indices[case.source], None, |e| *e.weight());

        let predecessors = single_source_shortest_paths(&graph, &case.source, None).unwrap();
        prop_assert!(!predecessors.contains_key(&case.source));
        for node in 0..case.node_count {
            let reachable = expected.contains_key(&indices[node]);
            prop_assert_eq!(predecessors.contains_key(&node), reachable && node != case.source);
        }
    }

    #[test]
    fn paths_are_consistent_with_costs(case in case_strategy()) {
        let (graph, _, _) = build(&case);
        let tree = shortest_path_tree(&graph, &case.source, None, &SearchConfig::default()).unwrap();

        for (&destination, cost) in tree.reached() {
            let path = find_path(&graph, &case.source, &destination).unwrap();
            prop_assert_eq!(path.first(), Some(&case.source));
            prop_assert_eq!(path.last(), Some(&destination));
            prop_assert_eq!(path_cost(&graph, &path), Some(cost));
        }
    }

    #[test]
    fn configurations_agree(case in case_strategy()) {
        let (graph, _, _) = build(&case);
        let baseline = shortest_path_tree(&graph, &case.source, None, &SearchConfig::default()).unwrap();

        let configs = [
            SearchConfig::default().with_queue(QueueStrategy::SortedVec),
            SearchConfig::default().with_skip_stale(false),
        ];
        for config in configs {
            let tree = shortest_path_tree(&graph, &case.source, None, &config).unwrap();
            prop_assert_eq!(tree.costs(), baseline.costs());
            prop_assert_eq!(tree.predecessors(), baseline.predecessors());
        }
    }

    #[test]
    fn early_exit_keeps_the_same_path(case in case_strategy(), target in 0..MAX_NODES) {
        let (graph, _, _) = build(&case);
        let target = target % case.node_count;
        let early = SearchConfig::default().with_stop_at_destination(true);

        match find_route(&graph, &case.source, &target, &SearchConfig::default()) {
            Ok(full) => {
                prop_assert_eq!(find_route(&graph, &case.source, &target, &early).unwrap(), full);
            }
            Err(_) => {
                prop_assert!(find_route(&graph, &case.source, &target, &early).is_err());
            }
        }
    }
}
