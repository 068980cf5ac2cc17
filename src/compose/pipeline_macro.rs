//! The `pipeline!` macro for left-to-right composition of any length.

/// Composes functions from left to right into a single [`Callable`](crate::Callable).
///
/// `pipeline!(f, g, h).invoke(x)` is equivalent to `h(g(f(x)))`.
///
/// Each stage may be a `Callable`, a reference to one, a closure, or a
/// function item. The macro folds with [`pipe`](crate::compose::pipe):
/// `pipeline!(f, g, h) == pipe(pipe(f, g), h)`.
///
/// # Syntax
///
/// - `pipeline!(f)` - Promotes `f` to a `Callable`
/// - `pipeline!(f, g)` - Returns `pipe(f, g)`
/// - `pipeline!(f, g, h, ...)` - Pipes any number of functions
///
/// # Examples
///
/// ```
/// use callable::pipeline;
///
/// fn square(value: i32) -> i32 { value * value }
/// fn double(value: i32) -> i32 { value * 2 }
/// fn add_one(value: i32) -> i32 { value + 1 }
///
/// // 3 -> 9 -> 18 -> 19
/// let steps = pipeline!(square, double, add_one);
/// assert_eq!(steps.invoke(3), 19);
/// ```
///
/// ## Type conversion through the pipeline
///
/// ```
/// use callable::pipeline;
///
/// let describe = pipeline!(
///     |value: i32| value.to_string(),
///     |text: String| text.len(),
///     |length: usize| format!("{length} digits"),
/// );
/// assert_eq!(describe.invoke(12345), "5 digits");
/// ```
#[macro_export]
macro_rules! pipeline {
    ($function:expr $(,)?) => {
        $crate::IntoCallable::into_callable($function)
    };

    ($first:expr, $second:expr $(, $remaining:expr)* $(,)?) => {
        $crate::pipeline!($crate::compose::pipe($first, $second) $(, $remaining)*)
    };
}
