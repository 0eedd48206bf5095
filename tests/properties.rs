use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_postman::distance::PairCostMatrix;
use u_postman::evaluation::RouteEvaluator;
use u_postman::generate::random_connected_graph;
use u_postman::matching::{min_cost_pairing, odd_vertices};
use u_postman::models::{Multigraph, Weight};

/// Connected graphs, sometimes carrying self-loops and zero-weight edges.
fn arb_graph() -> impl Strategy<Value = Multigraph> {
    let loops = proptest::collection::vec((any::<usize>(), 0u64..20), 0..3);
    let free_edges = proptest::collection::vec((any::<usize>(), any::<usize>()), 0..3);
    (any::<u64>(), 2usize..9, 0usize..8, 1u64..20, loops, free_edges).prop_map(
        |(seed, n, extra, max_w, loops, free_edges)| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut g = random_connected_graph(n, extra, max_w, &mut rng);
            for (v, w) in loops {
                g.insert_edge(v % n, v % n, w);
            }
            for (u, v) in free_edges {
                g.insert_edge(u % n, v % n, 0);
            }
            g
        },
    )
}

fn arb_cost_table() -> impl Strategy<Value = PairCostMatrix> {
    (1usize..5).prop_flat_map(|half| {
        let k = half * 2;
        proptest::collection::vec(0u64..50, k * (k - 1) / 2).prop_map(move |upper| {
            let mut costs = vec![0; k * k];
            let mut it = upper.into_iter();
            for i in 0..k {
                for j in (i + 1)..k {
                    let c = it.next().unwrap_or(0);
                    costs[i * k + j] = c;
                    costs[j * k + i] = c;
                }
            }
            PairCostMatrix::from_costs((0..k).collect(), costs).expect("square table")
        })
    })
}

/// Minimum over every permutation read as consecutive pairs.
fn brute_force_optimum(table: &PairCostMatrix) -> Weight {
    fn permute(items: &mut Vec<usize>, at: usize, table: &PairCostMatrix, best: &mut Weight) {
        if at == items.len() {
            let cost: Weight = items.chunks(2).map(|p| table.cost(p[0], p[1])).sum();
            *best = (*best).min(cost);
            return;
        }
        for i in at..items.len() {
            items.swap(at, i);
            permute(items, at + 1, table, best);
            items.swap(at, i);
        }
    }
    let mut items: Vec<usize> = (0..table.size()).collect();
    let mut best = Weight::MAX;
    permute(&mut items, 0, table, &mut best);
    best
}

fn degree_sum(g: &Multigraph) -> usize {
    g.degrees().iter().sum()
}

proptest! {
    #[test]
    fn resolve_walk_covers_every_original_edge(graph in arb_graph(), start_seed in any::<usize>()) {
        let original = graph.clone();
        let mut graph = graph;
        let start = start_seed % graph.size();
        let route = graph.resolve(start).expect("connected graph is solvable");

        let violations = RouteEvaluator::new(&original).evaluate(route.vertices(), start);
        prop_assert!(violations.is_empty(), "violations: {:?}", violations);
        prop_assert!(graph.is_eulerian());
        prop_assert_eq!(route.circuit.num_edges(), graph.edge_count());
        prop_assert_eq!(
            route.total_cost(),
            route.original_cost + route.augmentation.added_cost
        );
        prop_assert_eq!(route.augmentation.added_cost, route.matching.total_cost);
        prop_assert_eq!(Some(route.original_cost), original.total_weight().ok());
    }

    #[test]
    fn handshake_holds_across_mutations(
        graph in arb_graph(),
        u in 0usize..12,
        v in 0usize..12,
        w in 0u64..10,
    ) {
        let mut graph = graph;
        prop_assert_eq!(degree_sum(&graph) % 2, 0);
        prop_assert_eq!(odd_vertices(&graph).len() % 2, 0);
        graph.insert_edge(u, v, w);
        prop_assert_eq!(degree_sum(&graph) % 2, 0);
        graph.delete_edge(v, u);
        prop_assert_eq!(degree_sum(&graph) % 2, 0);
        graph.resolve(0).expect("connected graph is solvable");
        prop_assert_eq!(degree_sum(&graph) % 2, 0);
    }

    #[test]
    fn insert_grows_and_preserves_edges(
        graph in arb_graph(),
        u in 0usize..15,
        v in 0usize..15,
        w in 1u64..10,
    ) {
        let before = graph.clone();
        let mut graph = graph;
        graph.insert_edge(u, v, w);
        prop_assert_eq!(graph.size(), before.size().max(u.max(v) + 1));
        for (a, b, _) in before.edges() {
            prop_assert!(graph.weights(a, b).starts_with(before.weights(a, b)));
        }
        prop_assert_eq!(graph.weights(u, v).last().copied(), Some(w));
    }

    #[test]
    fn insert_then_delete_restores(
        graph in arb_graph(),
        u in 0usize..15,
        v in 0usize..15,
        w in 1u64..10,
    ) {
        let before = graph.clone();
        let mut graph = graph;
        graph.insert_edge(u, v, w);
        prop_assert_eq!(graph.delete_edge(u, v), Some(w));
        prop_assert_eq!(graph, before);
    }

    #[test]
    fn matching_equals_brute_force(table in arb_cost_table()) {
        let indices: Vec<usize> = (0..table.size()).collect();
        let (cost, pairs) = min_cost_pairing(&table, &indices).expect("even table");
        prop_assert_eq!(cost, brute_force_optimum(&table));
        let recomputed: Weight = pairs.iter().map(|&(a, b)| table.cost(a, b)).sum();
        prop_assert_eq!(recomputed, cost);
        let mut seen: Vec<usize> = pairs.iter().flat_map(|&(a, b)| [a, b]).collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, indices);
    }
}
