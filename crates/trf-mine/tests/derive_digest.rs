use proptest::prelude::*;
use trf_graph::{Clique, FieldGraph};
use trf_mine::{derive_digest, digest_preimage, work_value, Digest, ResultRecord};

fn clique(vertices: &[usize]) -> Clique {
    Clique::new(vertices.to_vec()).unwrap()
}

#[test]
fn complete_k4_digest_is_pinned() {
    let field = FieldGraph::complete(4).unwrap();
    let work = work_value(field.field_complexity(), 4);
    let k4 = clique(&[0, 1, 2, 3]);

    assert_eq!(digest_preimage(&k4, work), "[0, 1, 2, 3]-1.00520593");
    assert_eq!(
        derive_digest(&k4, work).to_hex(),
        "aa910dab5dd0da6ce0f4f8aa78e9f12b48297a1cd5e1b266020a1d46137c4d60"
    );
}

#[test]
fn work_value_divides_by_clique_complexity_plus_one() {
    let expected = 10.0 / (3.0 * 3f64.ln() + 1.0);
    assert!((work_value(10.0, 3) - expected).abs() < 1e-12);
    assert_eq!(work_value(10.0, 1), 10.0);
}

#[test]
fn digest_ignores_noise_beyond_eighth_decimal() {
    let triangle = clique(&[2, 5, 9]);
    assert_eq!(
        derive_digest(&triangle, 3.141_592_650_1),
        derive_digest(&triangle, 3.141_592_650_4)
    );
    assert_ne!(
        derive_digest(&triangle, 3.141_592_65),
        derive_digest(&triangle, 3.141_592_66)
    );
}

#[test]
fn record_fields_are_consistent() {
    let field = FieldGraph::complete(5).unwrap();
    let record = ResultRecord::derive(3, &field, clique(&[0, 1, 2]), "hash".into());
    assert_eq!(record.round, 3);
    assert_eq!(record.vertex_count, 5);
    assert_eq!(record.field_complexity, field.field_complexity());
    assert_eq!(record.work_value, work_value(field.field_complexity(), 3));
    assert_eq!(record.digest, derive_digest(&record.clique, record.work_value));
}

#[test]
fn record_json_round_trip() {
    let field = FieldGraph::complete(6).unwrap();
    let record = ResultRecord::derive(1, &field, clique(&[0, 1, 2, 3]), "abc".into());
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains(&format!("\"digest\":\"{}\"", record.digest)));
    assert!(json.contains("\"clique\":[0,1,2,3]"));
    let decoded: ResultRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, record);
}

proptest! {
    #[test]
    fn derivation_is_pure(vertices in proptest::collection::btree_set(0usize..200, 1..8), work in 0.0f64..1e6) {
        let c = Clique::new(vertices.into_iter().collect()).unwrap();
        prop_assert_eq!(derive_digest(&c, work), derive_digest(&c.clone(), work));
    }

    #[test]
    fn changing_a_vertex_changes_the_digest(
        vertices in proptest::collection::btree_set(0usize..200, 2..8),
        work in 0.0f64..1e6,
    ) {
        let original: Vec<usize> = vertices.into_iter().collect();
        let mut shifted = original.clone();
        let last = shifted.len() - 1;
        shifted[last] += 1;
        let a = Clique::new(original).unwrap();
        let b = Clique::new(shifted).unwrap();
        prop_assert_ne!(derive_digest(&a, work), derive_digest(&b, work));
    }

    #[test]
    fn changing_the_work_value_changes_the_digest(work in 0.0f64..1e6) {
        let c = Clique::new(vec![0, 1, 2, 3]).unwrap();
        prop_assert_ne!(derive_digest(&c, work), derive_digest(&c, work + 1e-7));
    }
}

#[test]
fn digest_rejects_malformed_json() {
    assert!(serde_json::from_str::<Digest>("\"abcd\"").is_err());
}
