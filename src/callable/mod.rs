//! The core function wrapper.
//!
//! [`Callable<In, Out>`](Callable) owns a single function `In -> Out` and
//! exposes [`invoke`](Callable::invoke). Everything else in the crate is built
//! from it: composition returns new `Callable`s, predicates are
//! `Callable<In, bool>`, consumers are `Callable<In, ()>` and providers are
//! `Callable<(), Out>`.
//!
//! [`IntoCallable`] is the promotion rule used at every combinator entry
//! point, so plain functions and closures mix freely with wrapped ones.
//!
//! # Examples
//!
//! ```rust
//! use callable::Callable;
//!
//! fn add_one(value: i32) -> i32 { value + 1 }
//!
//! let double: Callable<i32, i32> = Callable::new(|value| value * 2);
//! let pipeline = double.pipe(add_one);
//!
//! assert_eq!(pipeline.invoke(5), 11);
//! ```

#[cfg(feature = "tracing")]
mod instrument;
mod wrapper;

pub use wrapper::{Callable, IntoCallable};
