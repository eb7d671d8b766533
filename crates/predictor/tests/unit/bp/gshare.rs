//! GShare predictor tests.

use bpred::bp::{BranchPredictor, GSharePredictor};
use bpred::sim;
use bpred::trace::Branch;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_fresh_table_predicts_not_taken() {
    let bp = GSharePredictor::new(4, 2);
    assert_eq!(bp.table_size(), 16);
    assert_eq!(bp.history().value(), 0);
    for idx in 0..16 {
        assert_eq!(bp.counter_at(idx).value(), 1);
    }
    assert!(!bp.predict(0x1234));
}

#[test]
fn test_two_bit_history_walkthrough() {
    let mut bp = GSharePredictor::new(2, 2);

    // index = 01 ^ 00 = 01, counter = Weakly Not Taken
    assert_eq!(bp.index(0b01), 1);
    assert!(!bp.predict(0b01));

    bp.train(0b01, true);
    assert_eq!(bp.counter_at(1).value(), 2);
    assert_eq!(bp.history().value(), 0b01);

    // index = 01 ^ 01 = 00, still untouched
    assert_eq!(bp.index(0b01), 0);
    assert_eq!(bp.counter_at(0).value(), 1);
    assert!(!bp.predict(0b01));
}

#[test]
fn test_only_low_pc_bits_index() {
    let bp = GSharePredictor::new(3, 2);
    assert_eq!(bp.index(0b1010_0101), 0b101);
    assert_eq!(bp.index(0xFFFF_FFFF_FFFF_FFF8), 0);
}

#[test]
fn test_learns_always_taken_branch() {
    let mut bp = GSharePredictor::new(4, 2);
    for _ in 0..10 {
        bp.train(0x10, true);
    }
    assert_eq!(bp.history().value(), 0b1111);
    // (0x10 & 0xF) ^ 0b1111
    assert_eq!(bp.index(0x10), 15);
    assert!(bp.counter_at(15).read());
    assert!(bp.predict(0x10));
}

#[test]
fn test_predict_does_not_mutate() {
    let mut bp = GSharePredictor::new(3, 2);
    bp.train(5, true);
    let before = (bp.history(), bp.counter(5));
    for _ in 0..10 {
        bp.predict(5);
    }
    assert_eq!((bp.history(), bp.counter(5)), before);
}

proptest! {
    #[test]
    fn prop_replay_is_deterministic(
        bits in 1u32..=10,
        trace in prop::collection::vec((0u64..4096, any::<bool>()), 1..300),
    ) {
        let branches: Vec<Branch> = trace.iter().map(|&(pc, t)| Branch::new(pc, t)).collect();

        let first = sim::predictions(&mut GSharePredictor::new(bits, 2), &branches);
        let second = sim::predictions(&mut GSharePredictor::new(bits, 2), &branches);
        prop_assert_eq!(first, second);
    }
}
