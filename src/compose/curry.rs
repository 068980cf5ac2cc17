//! Currying and uncurrying.
//!
//! [`curry2`] through [`curry6`] turn a `Callable` over an argument tuple
//! `(A1, ..., An) -> R` into a right-nested chain
//! `Callable<A1, Callable<A2, ... Callable<An, R>>>`. Each partial application
//! is a new `Callable` holding the arguments supplied so far; the original
//! function only runs once the chain is saturated.
//!
//! [`uncurry2`] through [`uncurry6`] are the duals.
//!
//! # Laws
//!
//! - **Round trip**: `uncurryN(curryN(f)).invoke(args) == f.invoke(args)`
//! - **Reverse round trip**: `curryN(uncurryN(c))` applied to every argument
//!   gives the same result as `c`
//!
//! # Type Requirements
//!
//! Every argument except the last must implement [`Clone`], so partial
//! applications can be invoked any number of times.

use crate::callable::{Callable, IntoCallable};

/// The type of a curried chain: `curried!(R; A, B, C)` is
/// `Callable<A, Callable<B, Callable<C, R>>>`.
macro_rules! curried {
    ($result:ty; $head:ident) => {
        Callable<$head, $result>
    };
    ($result:ty; $head:ident, $($tail:ident),+) => {
        Callable<$head, curried!($result; $($tail),+)>
    };
}

/// Curries a function over a pair.
///
/// # Examples
///
/// ```
/// use callable::compose::curry2;
///
/// let add = curry2(|(first, second): (i32, i32)| first + second);
/// let add_five = add.invoke(5);
///
/// assert_eq!(add_five.invoke(3), 8);
/// assert_eq!(add_five.invoke(10), 15);
/// ```
#[must_use]
pub fn curry2<A, B, R, F>(function: F) -> curried!(R; A, B)
where
    F: IntoCallable<(A, B), R>,
    A: Clone + 'static,
    B: 'static,
    R: 'static,
{
    let function = function.into_callable();
    Callable::new(move |first: A| {
        let function = function.clone();
        Callable::new(move |second: B| function.invoke((first.clone(), second)))
    })
}

/// Generates `curryN` for N >= 3 by fixing the first argument and handing
/// the remaining tuple to `curry(N - 1)`.
macro_rules! curry_functions {
    ($(
        $arity:literal from $previous:literal:
            ($head_value:ident: $head:ident, $($value:ident: $type:ident),+)
            clone [$($cloned:ident),+];
    )+) => {
        paste::paste! {
            $(
                /// Curries a function over a tuple, one argument per `Callable`.
                #[must_use]
                #[allow(clippy::type_complexity)]
                pub fn [<curry $arity>]<$head, $($type,)+ R, F>(
                    function: F,
                ) -> curried!(R; $head, $($type),+)
                where
                    F: IntoCallable<($head, $($type,)+), R>,
                    $($cloned: Clone,)+
                    $head: 'static,
                    $($type: 'static,)+
                    R: 'static,
                {
                    let function = function.into_callable();
                    Callable::new(move |$head_value: $head| {
                        let function = function.clone();
                        [<curry $previous>](Callable::new(move |($($value,)+): ($($type,)+)| {
                            function.invoke(($head_value.clone(), $($value,)+))
                        }))
                    })
                }
            )+
        }
    };
}

curry_functions! {
    3 from 2: (first: A, second: B, third: C) clone [A, B];
    4 from 3: (first: A, second: B, third: C, fourth: D) clone [A, B, C];
    5 from 4: (first: A, second: B, third: C, fourth: D, fifth: E) clone [A, B, C, D];
    6 from 5: (first: A, second: B, third: C, fourth: D, fifth: E, sixth: G) clone [A, B, C, D, E];
}

/// Generates `uncurryN`, which saturates a curried chain from a tuple.
macro_rules! uncurry_functions {
    ($(
        $arity:literal: ($($value:ident: $type:ident),+);
    )+) => {
        paste::paste! {
            $(
                /// Collapses a curried chain into a single function over the argument tuple.
                #[must_use]
                #[allow(clippy::type_complexity)]
                pub fn [<uncurry $arity>]<$($type,)+ R>(
                    chain: curried!(R; $($type),+),
                ) -> Callable<($($type,)+), R>
                where
                    $($type: 'static,)+
                    R: 'static,
                {
                    Callable::new(move |($($value,)+): ($($type,)+)| {
                        chain$(.invoke($value))+
                    })
                }
            )+
        }
    };
}

uncurry_functions! {
    2: (first: A, second: B);
    3: (first: A, second: B, third: C);
    4: (first: A, second: B, third: C, fourth: D);
    5: (first: A, second: B, third: C, fourth: D, fifth: E);
    6: (first: A, second: B, third: C, fourth: D, fifth: E, sixth: G);
}
