//! The `chain!` macro for optional chaining of any length.

/// Chains optional-returning functions into a single [`Callable`](crate::Callable).
///
/// The result is `None` as soon as any stage returns `None`; the stages
/// after it are not invoked. Otherwise it is the last stage's result.
///
/// # Examples
///
/// ```
/// use callable::chain;
///
/// fn parse(text: &str) -> Option<i32> { text.parse().ok() }
/// fn non_zero(value: i32) -> Option<i32> { (value != 0).then_some(value) }
/// fn reciprocal(value: i32) -> Option<f64> { Some(1.0 / f64::from(value)) }
///
/// let safe_reciprocal = chain!(parse, non_zero, reciprocal);
///
/// assert_eq!(safe_reciprocal.invoke("4"), Some(0.25));
/// assert_eq!(safe_reciprocal.invoke("0"), None);
/// assert_eq!(safe_reciprocal.invoke("x"), None);
/// ```
#[macro_export]
macro_rules! chain {
    ($function:expr $(,)?) => {
        $crate::IntoCallable::into_callable($function)
    };

    ($first:expr, $second:expr $(, $remaining:expr)* $(,)?) => {
        $crate::chain!($crate::compose::chain($first, $second) $(, $remaining)*)
    };
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_chain_macro_short_circuits() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let chained = chain!(
            |value: i32| (value > 0).then_some(value),
            |value: i32| Some(value * 2),
            move |value: i32| {
                counter.set(counter.get() + 1);
                Some(value + 1)
            },
        );

        assert_eq!(chained.invoke(-3), None);
        assert_eq!(calls.get(), 0);
        assert_eq!(chained.invoke(3), Some(7));
        assert_eq!(calls.get(), 1);
    }
}
