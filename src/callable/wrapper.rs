//! The [`Callable`] wrapper and the [`IntoCallable`] promotion trait.

use std::fmt;
use std::rc::Rc;

/// A shareable wrapper around a single-argument function `In -> Out`.
///
/// A `Callable` is immutable once built. Every combinator in this crate
/// returns a *new* `Callable` that captures its operands, so the operands
/// stay valid and can be reused. Cloning is a reference-count bump.
///
/// # Type Parameters
///
/// - `In`: The input type
/// - `Out`: The output type
///
/// # Examples
///
/// ```rust
/// use callable::Callable;
///
/// let double: Callable<i32, i32> = Callable::new(|value| value * 2);
/// assert_eq!(double.invoke(21), 42);
///
/// // A Callable can be invoked any number of times
/// assert_eq!(double.invoke(0), 0);
/// ```
pub struct Callable<In, Out>
where
    In: 'static,
    Out: 'static,
{
    function: Rc<dyn Fn(In) -> Out>,
}

impl<In, Out> Callable<In, Out>
where
    In: 'static,
    Out: 'static,
{
    /// Wraps a function.
    ///
    /// No validation is performed. If the function panics for some input,
    /// invoking the `Callable` with that input panics the same way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use callable::Callable;
    ///
    /// let length: Callable<String, usize> = Callable::new(|text: String| text.len());
    /// assert_eq!(length.invoke("hello".to_string()), 5);
    /// ```
    #[must_use]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(In) -> Out + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Applies the wrapped function to `input`.
    #[inline]
    pub fn invoke(&self, input: In) -> Out {
        (self.function)(input)
    }

    /// Borrows this `Callable` as a plain closure.
    ///
    /// Useful for handing it to APIs that expect `Fn`, such as
    /// [`Iterator::map`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use callable::Callable;
    ///
    /// let square: Callable<i32, i32> = Callable::new(|value| value * value);
    /// let squares: Vec<i32> = (1..=3).map(square.as_fn()).collect();
    /// assert_eq!(squares, vec![1, 4, 9]);
    /// ```
    #[must_use]
    pub fn as_fn(&self) -> impl Fn(In) -> Out + '_ {
        move |input| self.invoke(input)
    }

    /// Converts this `Callable` into an owning closure.
    #[must_use]
    pub fn into_fn(self) -> impl Fn(In) -> Out {
        move |input| self.invoke(input)
    }
}

impl<T> Callable<T, T>
where
    T: 'static,
{
    /// The `Callable` that returns its input unchanged.
    ///
    /// It is the unit of [`pipe`](Callable::pipe) and
    /// [`compose`](Callable::compose).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use callable::Callable;
    ///
    /// let identity: Callable<&str, &str> = Callable::identity();
    /// assert_eq!(identity.invoke("unchanged"), "unchanged");
    /// ```
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|value| value)
    }
}

impl<In, Out> Clone for Callable<In, Out>
where
    In: 'static,
    Out: 'static,
{
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<In, Out> fmt::Debug for Callable<In, Out>
where
    In: 'static,
    Out: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Callable")
            .field("input", &std::any::type_name::<In>())
            .field("output", &std::any::type_name::<Out>())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Callable<i32, String>: Clone, fmt::Debug);
static_assertions::assert_not_impl_any!(Callable<i32, String>: Send, Sync);

/// Conversion into a [`Callable`].
///
/// Every combinator in this crate accepts `impl IntoCallable<In, Out>`, so a
/// plain function, a closure, a `Callable`, or a reference to a `Callable`
/// can be passed wherever a `Callable` is expected.
///
/// # Examples
///
/// ```rust
/// use callable::{Callable, IntoCallable};
///
/// fn increment(value: i32) -> i32 {
///     value + 1
/// }
///
/// let from_function: Callable<i32, i32> = increment.into_callable();
/// let from_closure: Callable<i32, i32> = (|value: i32| value - 1).into_callable();
/// let from_reference: Callable<i32, i32> = (&from_function).into_callable();
///
/// assert_eq!(from_function.invoke(1), 2);
/// assert_eq!(from_closure.invoke(1), 0);
/// assert_eq!(from_reference.invoke(1), 2);
/// ```
pub trait IntoCallable<In, Out>
where
    In: 'static,
    Out: 'static,
{
    /// Performs the conversion.
    fn into_callable(self) -> Callable<In, Out>;
}

impl<In, Out> IntoCallable<In, Out> for Callable<In, Out>
where
    In: 'static,
    Out: 'static,
{
    #[inline]
    fn into_callable(self) -> Callable<In, Out> {
        self
    }
}

impl<In, Out> IntoCallable<In, Out> for &Callable<In, Out>
where
    In: 'static,
    Out: 'static,
{
    #[inline]
    fn into_callable(self) -> Callable<In, Out> {
        self.clone()
    }
}

impl<In, Out, F> IntoCallable<In, Out> for F
where
    In: 'static,
    Out: 'static,
    F: Fn(In) -> Out + 'static,
{
    #[inline]
    fn into_callable(self) -> Callable<In, Out> {
        Callable::new(self)
    }
}
