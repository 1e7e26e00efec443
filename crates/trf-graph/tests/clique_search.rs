use proptest::prelude::*;
use trf_core::rng::RngHandle;
use trf_graph::{find_clique, first_clique, generate, is_clique, Clique, FieldGraph};

/// Lexicographically smallest k-clique found by scanning every vertex subset
/// as a bitmask. Independent of the combination walk used by the finder.
fn brute_force_first(graph: &FieldGraph, k: usize) -> Option<Vec<usize>> {
    let n = graph.vertex_count();
    let mut best: Option<Vec<usize>> = None;
    for mask in 0u32..(1u32 << n) {
        if mask.count_ones() as usize != k {
            continue;
        }
        let members: Vec<usize> = (0..n).filter(|v| mask & (1 << v) != 0).collect();
        if is_clique(graph, &members) && best.as_ref().map_or(true, |b| members < *b) {
            best = Some(members);
        }
    }
    best
}

#[test]
fn complete_graph_yields_leading_vertices() {
    let graph = FieldGraph::complete(4).unwrap();
    let clique = first_clique(&graph, 4).expect("complete graph contains K4");
    assert_eq!(clique.vertices(), &[0, 1, 2, 3]);
}

#[test]
fn edgeless_graph_has_no_pair() {
    let graph = FieldGraph::empty(3).unwrap();
    let search = find_clique(&graph, 2);
    assert_eq!(search.clique, None);
    assert_eq!(search.subsets_tested, 3);
}

#[test]
fn oversized_target_is_not_found_without_search() {
    let graph = FieldGraph::complete(5).unwrap();
    let search = find_clique(&graph, 6);
    assert!(!search.is_found());
    assert_eq!(search.subsets_tested, 0);
    assert!(!find_clique(&graph, 0).is_found());
}

#[test]
fn single_vertex_clique_is_vertex_zero() {
    let graph = FieldGraph::empty(1).unwrap();
    assert_eq!(first_clique(&graph, 1).unwrap().vertices(), &[0]);
}

#[test]
fn first_clique_prefers_lexicographic_order() {
    // Triangles {1, 2, 4} and {0, 3, 5}; the latter starts with the smaller vertex.
    let graph =
        FieldGraph::from_edges(6, &[(1, 2), (1, 4), (2, 4), (0, 3), (0, 5), (3, 5)]).unwrap();
    assert_eq!(first_clique(&graph, 3).unwrap().vertices(), &[0, 3, 5]);
}

#[test]
fn clique_json_is_a_plain_array() {
    let clique = Clique::new(vec![1, 4, 9]).unwrap();
    assert_eq!(serde_json::to_string(&clique).unwrap(), "[1,4,9]");
    assert!(serde_json::from_str::<Clique>("[4,1]").is_err());
    assert!(serde_json::from_str::<Clique>("[]").is_err());
}

proptest! {
    #[test]
    fn finder_matches_brute_force(seed in any::<u64>(), n in 1usize..10, k in 1usize..6) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = generate(n, &mut rng).unwrap();
        let found = first_clique(&graph, k).map(Vec::from);
        prop_assert_eq!(found, brute_force_first(&graph, k));
    }

    #[test]
    fn found_cliques_are_complete_and_increasing(seed in any::<u64>(), n in 4usize..16, k in 2usize..5) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = generate(n, &mut rng).unwrap();
        if let Some(clique) = first_clique(&graph, k) {
            prop_assert_eq!(clique.len(), k);
            prop_assert!(clique.vertices().windows(2).all(|w| w[0] < w[1]));
            prop_assert!(clique.holds_in(&graph));
        }
    }

    #[test]
    fn search_is_deterministic(seed in any::<u64>(), n in 1usize..14, k in 1usize..6) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = generate(n, &mut rng).unwrap();
        prop_assert_eq!(find_clique(&graph, k), find_clique(&graph, k));
    }

    #[test]
    fn oversized_targets_never_match(seed in any::<u64>(), n in 1usize..12, extra in 1usize..4) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = generate(n, &mut rng).unwrap();
        prop_assert!(first_clique(&graph, n + extra).is_none());
    }
}
