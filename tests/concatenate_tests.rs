//! Tests for same-type concatenation with a dynamic number of stages.

#![cfg(feature = "compose")]

use callable::Callable;
use callable::compose::{concatenate, concatenate_then};
use rstest::rstest;

fn stages(count: usize) -> Vec<Callable<i32, i32>> {
    (0..count)
        .map(|index| {
            let offset = i32::try_from(index).unwrap_or(i32::MAX);
            Callable::new(move |value: i32| value * 2 + offset)
        })
        .collect()
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
fn test_concatenate_equals_manual_fold(#[case] count: usize) {
    let functions = stages(count);
    let combined = concatenate(&functions);

    let expected = functions
        .iter()
        .fold(3, |accumulator, function| function.invoke(accumulator));
    assert_eq!(combined.invoke(3), expected);
}

#[rstest]
fn test_concatenate_then_applies_tail_last() {
    let combined = concatenate_then(stages(2), |value: i32| -value);

    // ((3 * 2 + 0) * 2 + 1) = 13, negated
    assert_eq!(combined.invoke(3), -13);
}

#[rstest]
fn test_empty_concatenation_is_identity() {
    let combined = concatenate(Vec::<Callable<String, String>>::new());
    assert_eq!(combined.invoke("unchanged".to_string()), "unchanged");
}
