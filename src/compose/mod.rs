//! Function composition utilities.
//!
//! This module provides the combinators that build new [`Callable`](crate::Callable)s out of
//! existing ones. Every combinator accepts plain functions and closures as
//! well as `Callable`s (see [`IntoCallable`](crate::IntoCallable)), and none of them consumes or
//! mutates its operands.
//!
//! # Overview
//!
//! - [`pipe`], [`pipe3`]..[`pipe6`], [`pipeline!`]: Compose left to right (data flow style)
//! - [`compose`], [`compose3`]..[`compose6`], [`composition!`]: Compose right to left
//!   (mathematical style)
//! - [`chain`], [`chain3`]..[`chain6`], [`chain!`]: Compose `Option`-returning functions,
//!   stopping at `None`
//! - [`try_chain`]: Compose `Result`-returning functions, stopping at the first `Err`
//! - [`concatenate`], [`concatenate_then`]: Compose a dynamic number of `T -> T` functions
//! - [`curry2`]..[`curry6`] and [`uncurry2`]..[`uncurry6`]: Convert between tuple and curried form
//! - [`flip`]: Swap the first two arguments of a curried chain
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: A `Callable` that always returns the same value
//!
//! # Examples
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use callable::compose::pipe;
//!
//! fn add_one(value: i32) -> i32 { value + 1 }
//! fn double(value: i32) -> i32 { value * 2 }
//!
//! // pipe(f, g)(x) = g(f(x))
//! let piped = pipe(double, add_one);
//! assert_eq!(piped.invoke(5), 11);
//! ```
//!
//! ## Composition (right-to-left)
//!
//! ```
//! use callable::compose::compose;
//!
//! fn add_one(value: i32) -> i32 { value + 1 }
//! fn double(value: i32) -> i32 { value * 2 }
//!
//! // compose(f, g)(x) = f(g(x))
//! let composed = compose(add_one, double);
//! assert_eq!(composed.invoke(5), 11);
//! ```
//!
//! ## Currying
//!
//! ```
//! use callable::compose::{curry2, uncurry2};
//!
//! let add = curry2(|(first, second): (i32, i32)| first + second);
//! let add_five = add.invoke(5);
//! assert_eq!(add_five.invoke(3), 8);
//!
//! let tupled = uncurry2(add);
//! assert_eq!(tupled.invoke((5, 3)), 8);
//! ```
//!
//! # Laws
//!
//! ## Composition Laws
//!
//! - **Associativity**: `pipe(pipe(f, g), h) == pipe(f, pipe(g, h))`
//! - **Left Identity**: `pipe(identity, f) == f`
//! - **Right Identity**: `pipe(f, identity) == f`
//!
//! ## Curry Laws
//!
//! - **Round trip**: `uncurry2(curry2(f)) == f`
//! - **Reverse round trip**: `curry2(uncurry2(g)) == g`
//! - **Equivalence**: `curry2(f)(a)(b) == f((a, b))`
//!
//! ## Flip Laws
//!
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(b)(a) == f(a)(b)`
//!
//! All laws hold pointwise: the composed `Callable`s are distinct values that
//! produce equal outputs for equal inputs.

mod chain;
mod chain_macro;
mod composition;
mod composition_macro;
mod concatenate;
mod curry;
mod flip;
mod pipe;
mod pipeline_macro;
mod utils;

pub use chain::{chain, chain3, chain4, chain5, chain6, try_chain};
pub use composition::{compose, compose3, compose4, compose5, compose6};
pub use concatenate::{concatenate, concatenate_then};
pub use curry::{
    curry2, curry3, curry4, curry5, curry6, uncurry2, uncurry3, uncurry4, uncurry5, uncurry6,
};
pub use flip::flip;
pub use pipe::{pipe, pipe3, pipe4, pipe5, pipe6};
pub use utils::{constant, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::chain;
pub use crate::composition;
pub use crate::pipeline;
