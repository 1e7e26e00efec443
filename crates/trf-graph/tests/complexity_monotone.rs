use proptest::prelude::*;
use trf_graph::{field_complexity, ln_factorial, ComplexityModel, FieldGraph, STIRLING_THRESHOLD};

#[test]
fn empty_field_has_zero_complexity() {
    assert_eq!(field_complexity(0), 0.0);
    assert_eq!(ComplexityModel::StirlingThreshold.field_complexity(0), 0.0);
    assert_eq!(FieldGraph::empty(4).unwrap().field_complexity(), 0.0);
}

#[test]
fn complete_k4_complexity_is_ln_720() {
    let graph = FieldGraph::complete(4).unwrap();
    assert_eq!(graph.edge_count(), 6);
    assert!((graph.field_complexity() - 720f64.ln()).abs() < 1e-12);
}

#[test]
fn large_edge_counts_stay_finite() {
    let value = field_complexity(1_000_000);
    assert!(value.is_finite());
    assert!(value > 0.0);
}

#[test]
fn both_models_are_monotone_across_threshold() {
    for model in [ComplexityModel::LogFactorial, ComplexityModel::StirlingThreshold] {
        let mut previous = 0.0;
        for m in 0..(STIRLING_THRESHOLD * 3) {
            let value = model.field_complexity(m);
            assert!(value >= previous, "{model:?} decreased at {m}");
            previous = value;
        }
    }
}

proptest! {
    #[test]
    fn complexity_is_non_negative_and_non_decreasing(m in 0usize..50_000) {
        let here = field_complexity(m);
        prop_assert!(here >= 0.0);
        prop_assert!(field_complexity(m + 1) >= here);
    }

    #[test]
    fn log_factorial_recurrence(m in 1usize..5_000) {
        let step = ln_factorial(m) - ln_factorial(m - 1);
        prop_assert!((step - (m as f64).ln()).abs() < 1e-6);
    }
}
