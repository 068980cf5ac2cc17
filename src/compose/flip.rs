//! Argument flipping for curried chains.

use crate::callable::{Callable, IntoCallable};

/// Swaps the order in which the first two arguments of a curried chain are
/// supplied.
///
/// Given `f: A -> (B -> C)`, returns `B -> (A -> C)` such that
/// `flip(f).invoke(b).invoke(a) == f.invoke(a).invoke(b)`.
///
/// Only the first position moves. `B` may be a tuple carrying the rest of
/// the arguments, or `C` may be a further chain; either way the first
/// argument is exchanged with the entire second one, not permuted further.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f))` behaves like `f`
/// - **Flip definition**: `flip(f)(b)(a) == f(a)(b)`
///
/// # Examples
///
/// ```
/// use callable::compose::{curry2, flip};
///
/// let divide = curry2(|(numerator, denominator): (i32, i32)| numerator / denominator);
/// let divide_by = flip(&divide);
///
/// let halve = divide_by.invoke(2);
/// assert_eq!(halve.invoke(10), 5);
/// assert_eq!(divide.invoke(10).invoke(2), 5);
/// ```
///
/// The second argument may be a tuple of the remaining arguments:
///
/// ```
/// use callable::Callable;
/// use callable::compose::flip;
///
/// let clamp: Callable<i32, Callable<(i32, i32), i32>> = Callable::new(|value: i32| {
///     Callable::new(move |(low, high): (i32, i32)| value.clamp(low, high))
/// });
/// let clamp_into = flip(clamp);
///
/// assert_eq!(clamp_into.invoke((0, 10)).invoke(42), 10);
/// ```
#[must_use]
pub fn flip<A, B, C>(function: impl IntoCallable<A, Callable<B, C>>) -> Callable<B, Callable<A, C>>
where
    A: 'static,
    B: Clone + 'static,
    C: 'static,
{
    let function = function.into_callable();
    Callable::new(move |second: B| {
        let function = function.clone();
        Callable::new(move |first: A| function.invoke(first).invoke(second.clone()))
    })
}
