use std::fmt;
use std::rc::Rc;

use crate::callable::Callable;

/// A shareable function that mutates its argument in place.
///
/// Cloning shares the wrapped function. Combinators build new instances and
/// leave their operands untouched.
pub struct InoutCallable<T>
where
    T: 'static,
{
    function: Rc<dyn Fn(&mut T)>,
}

impl<T> InoutCallable<T>
where
    T: 'static,
{
    /// Wraps a mutating function.
    #[must_use]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&mut T) + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Applies the mutation to `target`.
    #[inline]
    pub fn invoke(&self, target: &mut T) {
        (self.function)(target);
    }

    /// Applies the mutation to an owned value and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::inout::InoutCallable;
    ///
    /// let push_zero = InoutCallable::new(|values: &mut Vec<i32>| values.push(0));
    /// assert_eq!(push_zero.apply(vec![1]), vec![1, 0]);
    /// ```
    #[must_use]
    pub fn apply(&self, mut value: T) -> T {
        self.invoke(&mut value);
        value
    }

    /// A mutation that leaves its target unchanged.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    /// Applies `self`, then `next`, to the same target.
    #[must_use]
    pub fn then<G>(&self, next: G) -> Self
    where
        G: IntoInoutCallable<T>,
    {
        let first = self.clone();
        let next = next.into_inout_callable();
        Self::new(move |target: &mut T| {
            first.invoke(target);
            next.invoke(target);
        })
    }

    /// Applies every mutation in `mutations`, in order, to the same target.
    ///
    /// An empty sequence produces a no-op.
    #[must_use]
    pub fn concatenate<I>(mutations: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoInoutCallable<T>,
    {
        Self::concatenate_then(mutations, Self::noop())
    }

    /// Like [`concatenate`](Self::concatenate), with `last` applied after
    /// every mutation in `mutations`.
    #[must_use]
    pub fn concatenate_then<I, G>(mutations: I, last: G) -> Self
    where
        I: IntoIterator,
        I::Item: IntoInoutCallable<T>,
        G: IntoInoutCallable<T>,
    {
        let stages: Vec<Self> = mutations
            .into_iter()
            .map(IntoInoutCallable::into_inout_callable)
            .collect();
        let last = last.into_inout_callable();

        Self::new(move |target: &mut T| {
            for stage in &stages {
                stage.invoke(target);
            }
            last.invoke(target);
        })
    }

    /// Converts to a pure function: the input is moved in, mutated, and
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::inout::InoutCallable;
    ///
    /// let increment = InoutCallable::new(|value: &mut i32| *value += 1);
    /// let pure = increment.to_pure();
    ///
    /// assert_eq!(pure.invoke(41), 42);
    /// ```
    #[must_use]
    pub fn to_pure(&self) -> Callable<T, T> {
        let mutation = self.clone();
        Callable::new(move |value: T| mutation.apply(value))
    }
}

impl<T> Callable<T, T>
where
    T: Clone + 'static,
{
    /// Converts to a mutating function that assigns the result back to its
    /// target. Each call clones the target to produce the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::Callable;
    ///
    /// let double = Callable::new(|value: i32| value * 2);
    /// let mut value = 21;
    /// double.to_mutating().invoke(&mut value);
    ///
    /// assert_eq!(value, 42);
    /// ```
    #[must_use]
    pub fn to_mutating(&self) -> InoutCallable<T> {
        let function = self.clone();
        InoutCallable::new(move |target: &mut T| *target = function.invoke(target.clone()))
    }
}

impl<T> Clone for InoutCallable<T>
where
    T: 'static,
{
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<T> fmt::Debug for InoutCallable<T>
where
    T: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("InoutCallable")
            .field("target", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// Conversion into an [`InoutCallable`], accepted by every mutating
/// combinator.
pub trait IntoInoutCallable<T>
where
    T: 'static,
{
    /// Performs the conversion.
    fn into_inout_callable(self) -> InoutCallable<T>;
}

impl<T> IntoInoutCallable<T> for InoutCallable<T>
where
    T: 'static,
{
    #[inline]
    fn into_inout_callable(self) -> InoutCallable<T> {
        self
    }
}

impl<T> IntoInoutCallable<T> for &InoutCallable<T>
where
    T: 'static,
{
    #[inline]
    fn into_inout_callable(self) -> InoutCallable<T> {
        self.clone()
    }
}

impl<T, F> IntoInoutCallable<T> for F
where
    T: 'static,
    F: Fn(&mut T) + 'static,
{
    fn into_inout_callable(self) -> InoutCallable<T> {
        InoutCallable::new(self)
    }
}

static_assertions::assert_impl_all!(InoutCallable<Vec<u8>>: Clone, fmt::Debug);
static_assertions::assert_not_impl_any!(InoutCallable<Vec<u8>>: Send, Sync);
