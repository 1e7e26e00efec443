use rand::RngCore;
use trf_core::rng::{derive_substream_seed, ConstantSource, RandomSource, RngHandle};

#[test]
fn rng_emits_reproducible_sequence() {
    let mut rng_a = RngHandle::from_seed(1234);
    let mut rng_b = RngHandle::from_seed(1234);

    let seq_a: Vec<u64> = (0..100).map(|_| rng_a.next_u64()).collect();
    let seq_b: Vec<u64> = (0..100).map(|_| rng_b.next_u64()).collect();

    assert_eq!(seq_a, seq_b);
}

#[test]
fn unit_samples_stay_in_half_open_interval() {
    let mut rng = RngHandle::from_seed(7);
    for _ in 0..10_000 {
        let u = rng.next_unit();
        assert!((0.0..1.0).contains(&u), "sample {u} escaped [0, 1)");
    }
}

#[test]
fn distinct_seeds_do_not_interfere() {
    let mut rng_a = RngHandle::from_seed(1);
    let mut rng_b = RngHandle::from_seed(2);
    let mut reference = RngHandle::from_seed(1);

    let mut seq_a = Vec::new();
    for _ in 0..32 {
        seq_a.push(rng_a.next_unit());
        // interleaved draws on another handle must not perturb the first stream
        rng_b.next_unit();
    }
    let seq_ref: Vec<f64> = (0..32).map(|_| reference.next_unit()).collect();
    assert_eq!(seq_a, seq_ref);
}

#[test]
fn substream_seeds_are_stable_and_distinct() {
    assert_eq!(derive_substream_seed(42, 0), derive_substream_seed(42, 0));
    assert_ne!(derive_substream_seed(42, 0), derive_substream_seed(42, 1));
    assert_ne!(derive_substream_seed(42, 0), derive_substream_seed(43, 0));

    let mut direct = RngHandle::from_seed(derive_substream_seed(9, 3));
    let mut via_helper = RngHandle::substream(9, 3);
    assert_eq!(direct.next_u64(), via_helper.next_u64());
}

#[test]
fn constant_source_repeats_value_through_references() {
    let mut source = ConstantSource::ALL_EDGES;
    let borrowed: &mut dyn RandomSource = &mut source;
    assert_eq!(borrowed.next_unit(), 0.75);
    assert_eq!(borrowed.next_unit(), 0.75);
    let mut empty = ConstantSource::NO_EDGES;
    assert_eq!(empty.next_unit(), 0.25);
}
