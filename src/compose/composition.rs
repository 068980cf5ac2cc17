//! Backward composition: the outer function is written first.
//!
//! `compose(g, f)(x) = g(f(x))`, the same result as `pipe(f, g)` with the
//! arguments in mathematical order. [`compose3`] through [`compose6`] apply
//! the last argument first, and [`composition!`](crate::composition)
//! accepts any number of functions.

use crate::callable::{Callable, IntoCallable};

impl<In, Out> Callable<In, Out>
where
    In: 'static,
    Out: 'static,
{
    /// Runs `inner` first and feeds its output into `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::Callable;
    ///
    /// let add_one: Callable<i32, i32> = Callable::new(|value| value + 1);
    /// let composed = add_one.compose(|value: i32| value * 2);
    ///
    /// // add_one(double(5))
    /// assert_eq!(composed.invoke(5), 11);
    /// ```
    #[must_use]
    pub fn compose<Previous, G>(&self, inner: G) -> Callable<Previous, Out>
    where
        G: IntoCallable<Previous, In>,
        Previous: 'static,
    {
        inner.into_callable().pipe(self)
    }
}

/// Composes two functions right to left: `compose(g, f)(x) = g(f(x))`.
///
/// # Laws
///
/// - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
/// - **Left Identity**: `compose(identity, f) == f`
/// - **Right Identity**: `compose(f, identity) == f`
///
/// # Examples
///
/// ```
/// use callable::compose::compose;
///
/// fn to_string(value: i32) -> String { value.to_string() }
/// fn get_length(text: String) -> usize { text.len() }
///
/// let composed = compose(get_length, to_string);
/// assert_eq!(composed.invoke(12345), 5);
/// ```
#[must_use]
pub fn compose<A, B, C>(
    outer: impl IntoCallable<B, C>,
    inner: impl IntoCallable<A, B>,
) -> Callable<A, C>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    outer.into_callable().compose(inner)
}

/// Composes three functions right to left: `compose3(f, g, h)(x) = f(g(h(x)))`.
///
/// # Examples
///
/// ```
/// use callable::compose::compose3;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn double(value: i32) -> i32 { value * 2 }
/// fn square(value: i32) -> i32 { value * value }
///
/// // add_one(double(square(3))) = 19
/// assert_eq!(compose3(add_one, double, square).invoke(3), 19);
/// ```
#[must_use]
pub fn compose3<A, B, C, D>(
    first: impl IntoCallable<C, D>,
    second: impl IntoCallable<B, C>,
    third: impl IntoCallable<A, B>,
) -> Callable<A, D>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    compose(first, compose(second, third))
}

/// Composes four functions right to left.
#[must_use]
pub fn compose4<A, B, C, D, E>(
    first: impl IntoCallable<D, E>,
    second: impl IntoCallable<C, D>,
    third: impl IntoCallable<B, C>,
    fourth: impl IntoCallable<A, B>,
) -> Callable<A, E>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    E: 'static,
{
    compose(first, compose3(second, third, fourth))
}

/// Composes five functions right to left.
#[must_use]
pub fn compose5<A, B, C, D, E, F>(
    first: impl IntoCallable<E, F>,
    second: impl IntoCallable<D, E>,
    third: impl IntoCallable<C, D>,
    fourth: impl IntoCallable<B, C>,
    fifth: impl IntoCallable<A, B>,
) -> Callable<A, F>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    E: 'static,
    F: 'static,
{
    compose(first, compose4(second, third, fourth, fifth))
}

/// Composes six functions right to left.
#[must_use]
pub fn compose6<A, B, C, D, E, F, G>(
    first: impl IntoCallable<F, G>,
    second: impl IntoCallable<E, F>,
    third: impl IntoCallable<D, E>,
    fourth: impl IntoCallable<C, D>,
    fifth: impl IntoCallable<B, C>,
    sixth: impl IntoCallable<A, B>,
) -> Callable<A, G>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    E: 'static,
    F: 'static,
    G: 'static,
{
    compose(first, compose5(second, third, fourth, fifth, sixth))
}
