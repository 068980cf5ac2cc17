//! Concatenation: piping functions whose input and output types agree.
//!
//! Because every stage is `T -> T`, the number of stages does not have to be
//! known at compile time: [`concatenate`] accepts any iterator of stages.

use super::utils::identity;
use crate::callable::{Callable, IntoCallable};

/// Pipes every function in `functions`, in order, into a single `T -> T`.
///
/// An empty sequence produces the identity.
///
/// # Examples
///
/// ```
/// use callable::compose::concatenate;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn double(value: i32) -> i32 { value * 2 }
///
/// let steps = concatenate([add_one as fn(i32) -> i32, double, add_one]);
/// // ((3 + 1) * 2) + 1
/// assert_eq!(steps.invoke(3), 9);
/// ```
#[must_use]
pub fn concatenate<T, I>(functions: I) -> Callable<T, T>
where
    T: 'static,
    I: IntoIterator,
    I::Item: IntoCallable<T, T>,
{
    concatenate_then(functions, identity::<T>)
}

/// Pipes every function in `functions`, in order, and then `tail`.
///
/// `concatenate_then(fs, tail)(x) == tail(fs.fold(x, |acc, f| f(acc)))`.
///
/// # Examples
///
/// ```
/// use callable::Callable;
/// use callable::compose::concatenate_then;
///
/// let trims: Vec<Callable<String, String>> = vec![
///     Callable::new(|text: String| text.trim().to_string()),
///     Callable::new(|text: String| text.to_lowercase()),
/// ];
/// let normalize = concatenate_then(trims, |text: String| text.replace(' ', "-"));
///
/// assert_eq!(normalize.invoke("  Hello World ".to_string()), "hello-world");
/// ```
#[must_use]
pub fn concatenate_then<T, I, G>(functions: I, tail: G) -> Callable<T, T>
where
    T: 'static,
    I: IntoIterator,
    I::Item: IntoCallable<T, T>,
    G: IntoCallable<T, T>,
{
    let stages: Vec<Callable<T, T>> = functions
        .into_iter()
        .map(IntoCallable::into_callable)
        .collect();
    let tail = tail.into_callable();

    Callable::new(move |input| {
        let folded = stages
            .iter()
            .fold(input, |accumulator, stage| stage.invoke(accumulator));
        tail.invoke(folded)
    })
}
