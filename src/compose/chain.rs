//! Optional chaining: composition that stops at the first absent value.
//!
//! `chain(f, g)` applies `f`; if the result is `None` it returns `None`
//! without invoking `g`, otherwise it returns `g` applied to the present
//! value. Later stages are never invoked once a stage yields `None`.
//!
//! [`try_chain`] is the `Result` counterpart: the first `Err` is returned
//! unchanged and the remaining stages are skipped.

use crate::callable::{Callable, IntoCallable};

impl<In, Mid> Callable<In, Option<Mid>>
where
    In: 'static,
    Mid: 'static,
{
    /// Chains `next` after `self`, short-circuiting on `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::Callable;
    ///
    /// let parse: Callable<&str, Option<i32>> = Callable::new(|text: &str| text.parse().ok());
    /// let reciprocal = parse.chain(|value: i32| (value != 0).then(|| 100 / value));
    ///
    /// assert_eq!(reciprocal.invoke("4"), Some(25));
    /// assert_eq!(reciprocal.invoke("0"), None);
    /// assert_eq!(reciprocal.invoke("four"), None);
    /// ```
    #[must_use]
    pub fn chain<Out, G>(&self, next: G) -> Callable<In, Option<Out>>
    where
        G: IntoCallable<Mid, Option<Out>>,
        Out: 'static,
    {
        let first = self.clone();
        let second = next.into_callable();
        Callable::new(move |input| first.invoke(input).and_then(|value| second.invoke(value)))
    }
}

impl<In, Mid, E> Callable<In, Result<Mid, E>>
where
    In: 'static,
    Mid: 'static,
    E: 'static,
{
    /// Chains `next` after `self`, short-circuiting on `Err`.
    ///
    /// The error produced by a stage is passed through as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::Callable;
    /// use std::num::ParseIntError;
    ///
    /// let parse: Callable<&str, Result<i32, String>> =
    ///     Callable::new(|text: &str| text.parse().map_err(|error: ParseIntError| error.to_string()));
    /// let positive = parse.try_chain(|value: i32| {
    ///     if value > 0 { Ok(value) } else { Err(format!("{value} is not positive")) }
    /// });
    ///
    /// assert_eq!(positive.invoke("7"), Ok(7));
    /// assert_eq!(positive.invoke("-7"), Err("-7 is not positive".to_string()));
    /// ```
    #[must_use]
    pub fn try_chain<Out, G>(&self, next: G) -> Callable<In, Result<Out, E>>
    where
        G: IntoCallable<Mid, Result<Out, E>>,
        Out: 'static,
    {
        let first = self.clone();
        let second = next.into_callable();
        Callable::new(move |input| first.invoke(input).and_then(|value| second.invoke(value)))
    }
}

/// Chains two optional-returning functions.
///
/// # Examples
///
/// ```
/// use callable::compose::chain;
///
/// fn first_char(text: String) -> Option<char> { text.chars().next() }
/// fn digit(character: char) -> Option<u32> { character.to_digit(10) }
///
/// let leading_digit = chain(first_char, digit);
/// assert_eq!(leading_digit.invoke("7up".to_string()), Some(7));
/// assert_eq!(leading_digit.invoke("up7".to_string()), None);
/// assert_eq!(leading_digit.invoke(String::new()), None);
/// ```
#[must_use]
pub fn chain<A, B, C>(
    first: impl IntoCallable<A, Option<B>>,
    second: impl IntoCallable<B, Option<C>>,
) -> Callable<A, Option<C>>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    first.into_callable().chain(second)
}

/// Chains three optional-returning functions.
#[must_use]
pub fn chain3<A, B, C, D>(
    first: impl IntoCallable<A, Option<B>>,
    second: impl IntoCallable<B, Option<C>>,
    third: impl IntoCallable<C, Option<D>>,
) -> Callable<A, Option<D>>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    chain(chain(first, second), third)
}

/// Chains four optional-returning functions.
#[must_use]
pub fn chain4<A, B, C, D, E>(
    first: impl IntoCallable<A, Option<B>>,
    second: impl IntoCallable<B, Option<C>>,
    third: impl IntoCallable<C, Option<D>>,
    fourth: impl IntoCallable<D, Option<E>>,
) -> Callable<A, Option<E>>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    E: 'static,
{
    chain(chain3(first, second, third), fourth)
}

/// Chains five optional-returning functions.
#[must_use]
pub fn chain5<A, B, C, D, E, F>(
    first: impl IntoCallable<A, Option<B>>,
    second: impl IntoCallable<B, Option<C>>,
    third: impl IntoCallable<C, Option<D>>,
    fourth: impl IntoCallable<D, Option<E>>,
    fifth: impl IntoCallable<E, Option<F>>,
) -> Callable<A, Option<F>>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    E: 'static,
    F: 'static,
{
    chain(chain4(first, second, third, fourth), fifth)
}

/// Chains six optional-returning functions.
///
/// For longer chains use [`chain!`](crate::chain).
#[must_use]
pub fn chain6<A, B, C, D, E, F, G>(
    first: impl IntoCallable<A, Option<B>>,
    second: impl IntoCallable<B, Option<C>>,
    third: impl IntoCallable<C, Option<D>>,
    fourth: impl IntoCallable<D, Option<E>>,
    fifth: impl IntoCallable<E, Option<F>>,
    sixth: impl IntoCallable<F, Option<G>>,
) -> Callable<A, Option<G>>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    E: 'static,
    F: 'static,
    G: 'static,
{
    chain(chain5(first, second, third, fourth, fifth), sixth)
}

/// Chains two `Result`-returning functions with a shared error type.
#[must_use]
pub fn try_chain<A, B, C, E>(
    first: impl IntoCallable<A, Result<B, E>>,
    second: impl IntoCallable<B, Result<C, E>>,
) -> Callable<A, Result<C, E>>
where
    A: 'static,
    B: 'static,
    C: 'static,
    E: 'static,
{
    first.into_callable().try_chain(second)
}
