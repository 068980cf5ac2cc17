//! Tests for `Predicate` combinators and constructors.

#![cfg(feature = "specialized")]

use callable::specialized::Predicate;
use callable::{Callable, pipeline};
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

fn is_even() -> Predicate<i32> {
    Predicate::new(|value: i32| value % 2 == 0)
}

fn is_positive() -> Predicate<i32> {
    Predicate::greater_than(0)
}

fn counted(result: bool) -> (Predicate<i32>, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let predicate = Predicate::new(move |_: i32| {
        counter.set(counter.get() + 1);
        result
    });
    (predicate, calls)
}

// =============================================================================
// all_of / any_of
// =============================================================================

#[rstest]
fn test_all_of_even_positive_multiple_of_three() {
    let all = Predicate::all_of_then([is_even(), is_positive()], |value: i32| value % 3 == 0);
    let matching: Vec<i32> = (-15..=15).filter(all.as_filter()).collect();

    assert_eq!(matching, vec![6, 12]);
}

#[rstest]
fn test_any_of_matches_either() {
    let any = Predicate::any_of([Predicate::less_than(-10), Predicate::greater_than(10)]);
    let matching: Vec<i32> = (-12..=12).filter(any.as_filter()).collect();

    assert_eq!(matching, vec![-12, -11, 11, 12]);
}

#[rstest]
fn test_all_of_stops_at_first_false() {
    let (second, second_calls) = counted(true);
    let all = Predicate::all_of([Predicate::always_false(), second]);

    assert!(!all.invoke(0));
    assert_eq!(second_calls.get(), 0);
}

#[rstest]
fn test_empty_sequences() {
    let all = Predicate::<i32>::all_of(Vec::<Predicate<i32>>::new());
    let any = Predicate::<i32>::any_of(Vec::<Predicate<i32>>::new());

    assert!(all.invoke(1));
    assert!(!any.invoke(1));
}

// =============================================================================
// and / or / negate
// =============================================================================

#[rstest]
fn test_and_short_circuits() {
    let (counted_predicate, calls) = counted(true);
    let combined = Predicate::always_false().and(&counted_predicate);

    assert!(!combined.invoke(3));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn test_or_short_circuits() {
    let (counted_predicate, calls) = counted(false);
    let combined = Predicate::always_true().or(&counted_predicate);

    assert!(combined.invoke(3));
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(4, false)]
#[case(-4, true)]
#[case(3, true)]
fn test_negate_of_conjunction(#[case] input: i32, #[case] expected: bool) {
    let not_even_positive = is_even().and(is_positive()).negate();
    assert_eq!(not_even_positive.invoke(input), expected);
}

#[rstest]
fn test_operator_sugar() {
    let odd_or_large = !is_even() | Predicate::greater_than(100);

    assert!(odd_or_large.invoke(3));
    assert!(odd_or_large.invoke(102));
    assert!(!odd_or_large.invoke(4));
}

// =============================================================================
// Constructors
// =============================================================================

#[rstest]
#[case(0, true)]
#[case(9, true)]
#[case(10, false)]
#[case(-1, false)]
fn test_in_range_is_half_open(#[case] input: i32, #[case] expected: bool) {
    assert_eq!(Predicate::in_range(0..10).invoke(input), expected);
}

#[rstest]
fn test_in_closed_range_includes_upper_bound() {
    assert!(Predicate::in_closed_range(0..=10).invoke(10));
}

#[rstest]
fn test_equal_to_on_strings() {
    let is_admin = Predicate::equal_to("admin".to_string());

    assert!(is_admin.invoke("admin".to_string()));
    assert!(!is_admin.invoke("guest".to_string()));
}

// =============================================================================
// Interaction with composition
// =============================================================================

#[rstest]
fn test_predicate_after_projection() {
    let length = Callable::new(|text: String| text.len());
    let is_short = pipeline!(length, Predicate::less_than(4));

    assert!(is_short.invoke("abc".to_string()));
    assert!(!is_short.invoke("abcd".to_string()));
}

#[rstest]
fn test_as_filter_with_retain() {
    let mut values: Vec<i32> = (1..=10).collect();
    values.retain(is_even().as_filter());

    assert_eq!(values, vec![2, 4, 6, 8, 10]);
}
