//! The `composition!` macro for right-to-left composition of any length.

/// Composes functions from right to left into a single [`Callable`](crate::Callable).
///
/// `composition!(f, g, h).invoke(x)` is equivalent to `f(g(h(x)))`: the
/// rightmost function runs first.
///
/// # Laws
///
/// - **Associativity**: `composition!(f, composition!(g, h)) == composition!(composition!(f, g), h)`
/// - **Left Identity**: `composition!(identity, f) == f`
/// - **Right Identity**: `composition!(f, identity) == f`
///
/// # Examples
///
/// ```
/// use callable::composition;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn double(value: i32) -> i32 { value * 2 }
/// fn square(value: i32) -> i32 { value * value }
///
/// // add_one(double(square(3))) = 19
/// let composed = composition!(add_one, double, square);
/// assert_eq!(composed.invoke(3), 19);
/// ```
#[macro_export]
macro_rules! composition {
    ($function:expr $(,)?) => {
        $crate::IntoCallable::into_callable($function)
    };

    ($outer:expr, $($remaining:expr),+ $(,)?) => {
        $crate::compose::compose($outer, $crate::composition!($($remaining),+))
    };
}
