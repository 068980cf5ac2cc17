#![cfg(feature = "compose")]
//! Property-based tests for function composition laws.
//!
//! ## Pipe Laws
//! - **Left Identity**: `pipe(identity, f) == f`
//! - **Right Identity**: `pipe(f, identity) == f`
//! - **Associativity**: `pipe(pipe(f, g), h) == pipe(f, pipe(g, h))`
//!
//! ## Compose Laws
//! - **Consistency with Pipe**: `compose(g, f) == pipe(f, g)`
//!
//! ## Constant Law
//! - `constant(v).invoke(x) == v`
//!
//! ## Curry Laws
//! - **Round Trip**: `uncurry2(curry2(f)) == f`
//! - **Reverse Round Trip**: `curry2(uncurry2(c)) == c`
//!
//! ## Flip Laws
//! - **Flip Definition**: `flip(c).invoke(b).invoke(a) == c.invoke(a).invoke(b)`
//! - **Double Flip Identity**: `flip(flip(c)) == c`
//!
//! ## Concatenate Laws
//! - **Fold**: `concatenate(fs).invoke(x) == fs.fold(x, apply)`

use callable::Callable;
use callable::compose::{compose, concatenate, constant, curry2, flip, identity, pipe, uncurry2};
use proptest::prelude::*;

fn increment(value: i32) -> i32 {
    value.wrapping_add(1)
}

fn double(value: i32) -> i32 {
    value.wrapping_mul(2)
}

fn decrement_by_three(value: i32) -> i32 {
    value.wrapping_sub(3)
}

fn weighted((left, right): (i32, i32)) -> i32 {
    left.wrapping_mul(31).wrapping_sub(right)
}

fn weighted_chain() -> Callable<i32, Callable<i32, i32>> {
    Callable::new(|left: i32| Callable::new(move |right: i32| weighted((left, right))))
}

// =============================================================================
// Pipe and compose
// =============================================================================

proptest! {
    /// Left Identity Law: pipe(identity, f)(x) == f(x)
    #[test]
    fn prop_pipe_left_identity(x in any::<i32>()) {
        let piped = pipe(identity::<i32>, double);
        prop_assert_eq!(piped.invoke(x), double(x));
    }

    /// Right Identity Law: pipe(f, identity)(x) == f(x)
    #[test]
    fn prop_pipe_right_identity(x in any::<i32>()) {
        let piped = pipe(double, identity::<i32>);
        prop_assert_eq!(piped.invoke(x), double(x));
    }

    /// Associativity Law: pipe(pipe(f, g), h) == pipe(f, pipe(g, h))
    #[test]
    fn prop_pipe_associativity(x in any::<i32>()) {
        let left_grouped = pipe(pipe(increment, double), decrement_by_three);
        let right_grouped = pipe(increment, pipe(double, decrement_by_three));

        prop_assert_eq!(left_grouped.invoke(x), right_grouped.invoke(x));
    }

    /// compose(g, f) == pipe(f, g)
    #[test]
    fn prop_compose_pipe_consistency(x in any::<i32>()) {
        let composed = compose(double, increment);
        let piped = pipe(increment, double);

        prop_assert_eq!(composed.invoke(x), piped.invoke(x));
    }

    /// Identity callable matches identity function
    #[test]
    fn prop_identity_callable(x in any::<String>()) {
        let wrapped = Callable::<String, String>::identity();

        prop_assert_eq!(wrapped.invoke(x.clone()), identity(x));
    }
}

// =============================================================================
// Constant
// =============================================================================

proptest! {
    #[test]
    fn prop_constant_ignores_input(value in any::<i64>(), input in any::<String>()) {
        let always: Callable<String, i64> = constant(value);
        prop_assert_eq!(always.invoke(input), value);
    }
}

// =============================================================================
// Curry and flip
// =============================================================================

proptest! {
    #[test]
    fn prop_curry_round_trip(left in any::<i32>(), right in any::<i32>()) {
        let round_trip = uncurry2(curry2(weighted));
        prop_assert_eq!(round_trip.invoke((left, right)), weighted((left, right)));
    }

    #[test]
    fn prop_uncurry_then_curry_round_trip(left in any::<i32>(), right in any::<i32>()) {
        let chain = weighted_chain();
        let round_trip = curry2(uncurry2(chain.clone()));

        prop_assert_eq!(
            round_trip.invoke(left).invoke(right),
            chain.invoke(left).invoke(right)
        );
    }

    #[test]
    fn prop_uncurry_then_curry_partial_application(
        left in any::<i32>(),
        rights in prop::collection::vec(any::<i32>(), 1..5)
    ) {
        let chain = weighted_chain();
        let partial = curry2(uncurry2(chain.clone())).invoke(left);
        let expected = chain.invoke(left);

        for right in rights {
            prop_assert_eq!(partial.invoke(right), expected.invoke(right));
        }
    }

    #[test]
    fn prop_curry_matches_tuple_call(left in any::<i32>(), right in any::<i32>()) {
        let curried = curry2(weighted);

        prop_assert_eq!(curried.invoke(left).invoke(right), weighted((left, right)));
    }

    #[test]
    fn prop_flip_definition(left in any::<i32>(), right in any::<i32>()) {
        let curried = curry2(weighted);
        let flipped = flip(&curried);

        prop_assert_eq!(
            flipped.invoke(right).invoke(left),
            curried.invoke(left).invoke(right)
        );
    }

    #[test]
    fn prop_double_flip_identity(left in any::<i32>(), right in any::<i32>()) {
        let curried = curry2(weighted);
        let restored = flip(flip(&curried));

        prop_assert_eq!(
            restored.invoke(left).invoke(right),
            curried.invoke(left).invoke(right)
        );
    }
}

// =============================================================================
// Concatenate
// =============================================================================

proptest! {
    #[test]
    fn prop_concatenate_is_fold(
        x in any::<i32>(),
        offsets in prop::collection::vec(any::<i32>(), 0..10)
    ) {
        let step = |value: i32, offset: i32| value.wrapping_mul(3).wrapping_add(offset);
        let stages: Vec<Callable<i32, i32>> = offsets
            .iter()
            .map(|&offset| Callable::new(move |value: i32| step(value, offset)))
            .collect();

        let expected = offsets
            .iter()
            .fold(x, |accumulator, &offset| step(accumulator, offset));

        prop_assert_eq!(concatenate(stages).invoke(x), expected);
    }
}
