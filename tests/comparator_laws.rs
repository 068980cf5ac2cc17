#![cfg(feature = "specialized")]
//! Property-based tests for `Comparator` laws.
//!
//! - **Reversal Involution**: `c.reversed().reversed() == c`
//! - **Reversal Antisymmetry**: `c.reversed().compare(a, b) == c.compare(b, a)`
//! - **Natural Order Agreement**: `natural_order().compare(a, b) == a.cmp(b)`
//! - **Sequence Neutral Element**: `sequence([c, always_equal]) == c`

use callable::specialized::Comparator;
use proptest::prelude::*;

fn by_magnitude_then_sign() -> Comparator<i64> {
    Comparator::comparing(|value: &i64| value.unsigned_abs())
        .then_comparing_by(|value: &i64| value.signum())
}

proptest! {
    #[test]
    fn prop_reversal_involution(left in any::<i64>(), right in any::<i64>()) {
        let comparator = by_magnitude_then_sign();
        let twice = comparator.reversed().reversed();

        prop_assert_eq!(
            twice.compare(&left, &right),
            comparator.compare(&left, &right)
        );
    }

    #[test]
    fn prop_reversal_swaps_operands(left in any::<i64>(), right in any::<i64>()) {
        let comparator = by_magnitude_then_sign();
        let reversed = comparator.reversed();

        prop_assert_eq!(
            reversed.compare(&left, &right),
            comparator.compare(&right, &left)
        );
    }

    #[test]
    fn prop_natural_order_agrees_with_ord(left in any::<String>(), right in any::<String>()) {
        let natural = Comparator::<String>::natural_order();

        prop_assert_eq!(natural.compare(&left, &right), left.cmp(&right));
    }

    #[test]
    fn prop_always_equal_is_sequence_neutral(left in any::<i64>(), right in any::<i64>()) {
        let comparator = by_magnitude_then_sign();
        let padded = Comparator::sequence([
            Comparator::always_equal(),
            comparator.clone(),
            Comparator::always_equal(),
        ]);

        prop_assert_eq!(
            padded.compare(&left, &right),
            comparator.compare(&left, &right)
        );
    }

    #[test]
    fn prop_sorted_with_comparator_is_sorted(values in prop::collection::vec(any::<i64>(), 0..50)) {
        let comparator = by_magnitude_then_sign();
        let mut values = values;
        values.sort_by(comparator.as_fn());

        prop_assert!(
            values
                .windows(2)
                .all(|pair| comparator.compare(&pair[0], &pair[1]).is_le())
        );
    }
}
