//! Side-effecting [`Callable`]s that return nothing.

use crate::callable::{Callable, IntoCallable};

/// A function run for its effect on its input.
///
/// `Consumer<In>` is an alias for `Callable<In, ()>`.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use callable::specialized::Consumer;
///
/// let log = Rc::new(RefCell::new(Vec::new()));
///
/// let first_log = Rc::clone(&log);
/// let record: Consumer<i32> = Consumer::new(move |value: i32| first_log.borrow_mut().push(value));
/// let second_log = Rc::clone(&log);
/// let record_double = move |value: i32| second_log.borrow_mut().push(value * 2);
///
/// record.then(record_double).invoke(5);
/// assert_eq!(*log.borrow(), vec![5, 10]);
/// ```
pub type Consumer<In> = Callable<In, ()>;

impl<In> Callable<In, ()>
where
    In: 'static,
{
    /// A consumer that does nothing.
    #[must_use]
    pub fn ignore() -> Self {
        Self::new(|_| ())
    }
}

impl<In> Callable<In, ()>
where
    In: Clone + 'static,
{
    /// Runs `self`, then `next`, on the same input.
    #[must_use]
    pub fn then<G>(&self, next: G) -> Self
    where
        G: IntoCallable<In, ()>,
    {
        let first = self.clone();
        let next = next.into_callable();
        Self::new(move |input: In| {
            first.invoke(input.clone());
            next.invoke(input);
        })
    }
}
