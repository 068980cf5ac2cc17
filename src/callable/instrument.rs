//! Tracing instrumentation for [`Callable`].
//!
//! Requires the `tracing` feature.

use super::Callable;

impl<In, Out> Callable<In, Out>
where
    In: 'static,
    Out: 'static,
{
    /// Returns a `Callable` that records every invocation with `tracing`.
    ///
    /// Each call enters a `trace`-level span named `callable` carrying the
    /// given `name`, and emits a `trace` event once the wrapped function
    /// returns. The output is exactly that of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use callable::Callable;
    ///
    /// let parse: Callable<&str, Option<i32>> = Callable::new(|text: &str| text.parse().ok());
    /// let traced = parse.instrument("parse_number");
    ///
    /// assert_eq!(traced.invoke("42"), Some(42));
    /// ```
    #[must_use]
    pub fn instrument(&self, name: &'static str) -> Self {
        let inner = self.clone();
        Self::new(move |input| {
            let span = tracing::trace_span!("callable", name);
            let _entered = span.enter();
            let output = inner.invoke(input);
            tracing::trace!(name, "invocation finished");
            output
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_instrument_preserves_output() {
        let double: Callable<i32, i32> = Callable::new(|value| value * 2);
        let traced = double.instrument("double");

        for value in -5..5 {
            assert_eq!(traced.invoke(value), double.invoke(value));
        }
    }
}
