//! Input-less [`Callable`]s.

use crate::callable::Callable;

/// A function producing a value from nothing.
///
/// `Provider<Out>` is an alias for `Callable<(), Out>`; [`provide`](Callable::provide)
/// calls it without spelling out the unit argument.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use callable::specialized::Provider;
///
/// let next_id = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&next_id);
/// let ids = Provider::from_fn(move || {
///     counter.set(counter.get() + 1);
///     counter.get()
/// });
///
/// assert_eq!(ids.provide(), 1);
/// assert_eq!(ids.provide(), 2);
/// ```
pub type Provider<Out> = Callable<(), Out>;

impl<Out> Callable<(), Out>
where
    Out: 'static,
{
    /// Wraps a zero-argument closure.
    #[must_use]
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn() -> Out + 'static,
    {
        Self::new(move |()| function())
    }

    /// Produces a value.
    #[inline]
    pub fn provide(&self) -> Out {
        self.invoke(())
    }
}
