//! Procedural macros for the `callable` crate.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Converts a multi-argument closure or function into a
//!   right-nested chain of `callable::Callable` values
//!
//! # Example
//!
//! ```rust,ignore
//! use callable::curry;
//!
//! let add = curry!(|a: i32, b: i32| a + b);
//! assert_eq!(add.invoke(5).invoke(3), 8);
//!
//! // Partial application
//! let add_five = add.invoke(5);
//! assert_eq!(add_five.invoke(10), 15);
//! assert_eq!(add_five.invoke(20), 25);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Converts a multi-argument closure into a chain of curried `Callable`s.
///
/// `curry!(|a, b, c| body)` produces a
/// `Callable<A, Callable<B, Callable<C, R>>>`. Every intermediate value is a
/// `Callable`, so partial applications compose with `pipe`, `compose`, `flip`
/// and the rest of the crate.
///
/// # Syntax
///
/// - `curry!(|a, b| body)`: a closure with at least two parameters
/// - `curry!(function_name, arity)`: a function path plus its argument count
///
/// # Examples
///
/// ```rust,ignore
/// use callable::curry;
///
/// let curried = curry!(|a: i32, b: i32, c: i32| a + b + c);
/// assert_eq!(curried.invoke(1).invoke(2).invoke(3), 6);
///
/// fn volume(width: i32, height: i32, depth: i32) -> i32 {
///     width * height * depth
/// }
///
/// let curried_volume = curry!(volume, 3);
/// let square_base = curried_volume.invoke(2).invoke(2);
/// assert_eq!(square_base.invoke(5), 20);
/// ```
///
/// # Type constraints
///
/// - **Arguments (except the last)**: must implement `Clone`
/// - **All arguments and the result**: must be `'static`
///
/// Captured arguments are kept in `Rc` and handed to the function with
/// `Rc::unwrap_or_clone`, so a partial application can be invoked any number
/// of times.
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    TokenStream::from(curry::curry_impl(input.into()))
}
