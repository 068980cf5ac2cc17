//! Specialized forms of [`Callable`](crate::Callable) for common shapes.
//!
//! - [`Predicate`]: `In -> bool`, with logical combinators and comparison constructors
//! - [`Comparator`]: an ordering of borrowed values, with key extraction and tie-breaking
//! - [`Consumer`]: `In -> ()`, run for its side effect
//! - [`Provider`]: `() -> Out`, producing values on demand
//!
//! `Predicate`, `Consumer` and `Provider` are type aliases: every method of
//! `Callable` applies to them, and every function accepting a `Callable`
//! accepts them.

mod comparator;
mod consumer;
mod predicate;
mod provider;

pub use comparator::Comparator;
pub use consumer::Consumer;
pub use predicate::Predicate;
pub use provider::Provider;
