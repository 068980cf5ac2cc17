//! Forward composition: the first function runs first.
//!
//! `pipe(f, g)(x) = g(f(x))`. The fixed-arity builders [`pipe3`] through
//! [`pipe6`] fold left to right, and [`pipeline!`](crate::pipeline) accepts
//! any number of stages.

use crate::callable::{Callable, IntoCallable};

impl<In, Out> Callable<In, Out>
where
    In: 'static,
    Out: 'static,
{
    /// Feeds the output of `self` into `next`.
    ///
    /// `self` is left untouched; the returned `Callable` shares it.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::Callable;
    ///
    /// fn to_string(value: i32) -> String { value.to_string() }
    ///
    /// let double: Callable<i32, i32> = Callable::new(|value| value * 2);
    /// let rendered = double.pipe(to_string);
    ///
    /// assert_eq!(rendered.invoke(21), "42");
    /// assert_eq!(double.invoke(21), 42);
    /// ```
    #[must_use]
    pub fn pipe<Next, G>(&self, next: G) -> Callable<In, Next>
    where
        G: IntoCallable<Out, Next>,
        Next: 'static,
    {
        let first = self.clone();
        let second = next.into_callable();
        Callable::new(move |input| second.invoke(first.invoke(input)))
    }
}

/// Composes two functions left to right: `pipe(f, g)(x) = g(f(x))`.
///
/// Either argument may be a `Callable`, a reference to one, a closure, or a
/// function item.
///
/// # Examples
///
/// ```
/// use callable::compose::pipe;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn double(value: i32) -> i32 { value * 2 }
///
/// // double runs first
/// let piped = pipe(double, add_one);
/// assert_eq!(piped.invoke(5), 11);
/// ```
#[must_use]
pub fn pipe<A, B, C>(
    first: impl IntoCallable<A, B>,
    second: impl IntoCallable<B, C>,
) -> Callable<A, C>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    first.into_callable().pipe(second)
}

/// Composes three functions left to right.
///
/// # Examples
///
/// ```
/// use callable::compose::pipe3;
///
/// fn square(value: i32) -> i32 { value * value }
/// fn double(value: i32) -> i32 { value * 2 }
/// fn add_one(value: i32) -> i32 { value + 1 }
///
/// // 3 -> 9 -> 18 -> 19
/// assert_eq!(pipe3(square, double, add_one).invoke(3), 19);
/// ```
#[must_use]
pub fn pipe3<A, B, C, D>(
    first: impl IntoCallable<A, B>,
    second: impl IntoCallable<B, C>,
    third: impl IntoCallable<C, D>,
) -> Callable<A, D>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    pipe(pipe(first, second), third)
}

/// Composes four functions left to right.
#[must_use]
pub fn pipe4<A, B, C, D, E>(
    first: impl IntoCallable<A, B>,
    second: impl IntoCallable<B, C>,
    third: impl IntoCallable<C, D>,
    fourth: impl IntoCallable<D, E>,
) -> Callable<A, E>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    E: 'static,
{
    pipe(pipe3(first, second, third), fourth)
}

/// Composes five functions left to right.
#[must_use]
pub fn pipe5<A, B, C, D, E, F>(
    first: impl IntoCallable<A, B>,
    second: impl IntoCallable<B, C>,
    third: impl IntoCallable<C, D>,
    fourth: impl IntoCallable<D, E>,
    fifth: impl IntoCallable<E, F>,
) -> Callable<A, F>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    E: 'static,
    F: 'static,
{
    pipe(pipe4(first, second, third, fourth), fifth)
}

/// Composes six functions left to right.
///
/// For longer pipelines use [`pipeline!`](crate::pipeline).
#[must_use]
pub fn pipe6<A, B, C, D, E, F, G>(
    first: impl IntoCallable<A, B>,
    second: impl IntoCallable<B, C>,
    third: impl IntoCallable<C, D>,
    fourth: impl IntoCallable<D, E>,
    fifth: impl IntoCallable<E, F>,
    sixth: impl IntoCallable<F, G>,
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
    pipe(pipe5(first, second, third, fourth, fifth), sixth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_one(value: i32) -> i32 {
        value + 1
    }

    fn double(value: i32) -> i32 {
        value * 2
    }

    #[test]
    fn test_pipe_method_keeps_operand_usable() {
        let doubled: Callable<i32, i32> = Callable::new(double);
        let piped = doubled.pipe(add_one);

        assert_eq!(piped.invoke(5), 11);
        assert_eq!(doubled.invoke(5), 10);
    }

    #[test]
    fn test_pipe_changes_type() {
        let length = pipe(|value: i32| value.to_string(), |text: String| text.len());
        assert_eq!(length.invoke(12345), 5);
    }

    #[test]
    fn test_pipe6_applies_in_order() {
        let piped = pipe6(add_one, double, add_one, double, add_one, double);
        // 1 -> 2 -> 4 -> 5 -> 10 -> 11 -> 22
        assert_eq!(piped.invoke(1), 22);
    }
}
