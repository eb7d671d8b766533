//! History register tests.

use bpred::bp::HistoryRegister;
use proptest::prelude::*;

#[test]
fn test_shift_in_discards_oldest() {
    let mut h = HistoryRegister::new(3);
    assert_eq!(h.value(), 0);

    h.shift_in(true);
    assert_eq!(h.value(), 0b001);
    h.shift_in(false);
    assert_eq!(h.value(), 0b010);
    h.shift_in(true);
    assert_eq!(h.value(), 0b101);
    h.shift_in(true);
    assert_eq!(h.value(), 0b011);

    assert!(h.bit(0));
    assert!(h.bit(1));
    assert!(!h.bit(2));
}

#[test]
fn test_full_width_register() {
    let mut h = HistoryRegister::new(64);
    for _ in 0..64 {
        h.shift_in(true);
    }
    assert_eq!(h.value(), u64::MAX);
    h.shift_in(false);
    assert_eq!(h.value(), u64::MAX - 1);
    assert!(!h.bit(0));
    assert!(h.bit(63));
}

#[test]
fn test_display_is_oldest_first() {
    let mut h = HistoryRegister::new(4);
    h.shift_in(true);
    h.shift_in(false);
    assert_eq!(h.to_string(), "0010");
    assert_eq!(h.width(), 4);
}

proptest! {
    #[test]
    fn prop_no_bits_above_width(
        width in 1u32..=64,
        outcomes in prop::collection::vec(any::<bool>(), 0..200),
    ) {
        let mut h = HistoryRegister::new(width);
        for &taken in &outcomes {
            h.shift_in(taken);
            prop_assert_eq!(h.value().checked_shr(width).unwrap_or(0), 0);
            prop_assert_eq!(h.bit(0), taken);
        }
    }
}
