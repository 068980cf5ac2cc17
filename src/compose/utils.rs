//! Elementary combinators.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: A `Callable` that ignores its input (K combinator)

use crate::callable::Callable;

/// Returns the value unchanged.
///
/// As a plain `fn` item it promotes to a `Callable` wherever one is
/// expected, and it is the unit of composition:
/// - `pipe(identity, f)` behaves like `f`
/// - `pipe(f, identity)` behaves like `f`
///
/// # Examples
///
/// ```
/// use callable::compose::{identity, pipe};
///
/// fn double(value: i32) -> i32 { value * 2 }
///
/// let piped = pipe(identity, double);
/// assert_eq!(piped.invoke(5), double(5));
/// ```
#[inline]
#[must_use]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a `Callable` that always returns `value`, ignoring its input.
///
/// The value is cloned on every invocation.
///
/// # Examples
///
/// ```
/// use callable::compose::constant;
///
/// let always_five = constant::<i32, &str>(5);
/// assert_eq!(always_five.invoke("ignored"), 5);
/// assert_eq!(always_five.invoke("anything"), 5);
/// ```
#[must_use]
pub fn constant<T, U>(value: T) -> Callable<U, T>
where
    T: Clone + 'static,
    U: 'static,
{
    Callable::new(move |_| value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_constant_with_reference() {
        let always_hello = constant::<&str, i32>("hello");
        assert_eq!(always_hello.invoke(42), "hello");
    }

    #[test]
    fn test_constant_clones_owned_value() {
        let always_list = constant::<Vec<i32>, ()>(vec![1, 2, 3]);
        let first = always_list.invoke(());
        let second = always_list.invoke(());
        assert_eq!(first, second);
    }
}
