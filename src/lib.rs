//! # callable
//!
//! Single-argument functions as first-class, composable values.
//!
//! ## Overview
//!
//! [`Callable<In, Out>`](Callable) wraps one function `In -> Out`. The rest of
//! the crate builds on it:
//!
//! - **Composition**: `pipe`, `compose`, `chain`, `try_chain`, `concatenate`,
//!   curry/uncurry, `flip`, and the `pipeline!`, `composition!`, `chain!` macros
//! - **Specialized forms**: `Predicate`, `Comparator`, `Consumer`, `Provider`
//! - **In-place mutation**: `InoutCallable` and conversions to and from pure functions
//! - **Collection adapters**: iterator and slice methods taking callables and comparators
//!
//! Plain functions and closures are accepted wherever a `Callable` is, through
//! [`IntoCallable`]. Combinators never consume or mutate their operands.
//!
//! ## Feature Flags
//!
//! - `compose`: Function composition utilities
//! - `specialized`: Predicate, Comparator, Consumer, Provider
//! - `inout`: In-place mutating callables
//! - `collection`: Iterator and slice adapters
//! - `derive`: The `curry!` procedural macro
//! - `tracing`: [`Callable::instrument`] spans
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use callable::prelude::*;
//!
//! fn add_one(value: i32) -> i32 { value + 1 }
//!
//! let double: Callable<i32, i32> = Callable::new(|value| value * 2);
//! let is_large: Predicate<i32> = Predicate::greater_than(10);
//!
//! let check = pipeline!(double, add_one, is_large);
//! assert!(check.invoke(5));
//! assert!(!check.invoke(4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros.
///
/// # Usage
///
/// ```rust
/// use callable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::callable::{Callable, IntoCallable};

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "specialized")]
    pub use crate::specialized::*;

    #[cfg(feature = "inout")]
    pub use crate::inout::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "derive")]
    pub use callable_derive::curry;
}

pub mod callable;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "specialized")]
pub mod specialized;

#[cfg(feature = "inout")]
pub mod inout;

#[cfg(feature = "collection")]
pub mod collection;

pub use callable::{Callable, IntoCallable};

#[cfg(feature = "derive")]
pub use callable_derive::curry;
