//! In-place mutation as a composable value.
//!
//! [`InoutCallable<T>`] wraps a function `&mut T -> ()`. It is the mutating
//! counterpart of [`Callable<T, T>`](crate::Callable): where a pure stage
//! takes a value and returns a new one, a mutating stage edits the value it
//! is lent.
//!
//! ```
//! use callable::inout::InoutCallable;
//!
//! let trim = InoutCallable::new(|text: &mut String| *text = text.trim().to_string());
//! let shout = InoutCallable::new(|text: &mut String| text.make_ascii_uppercase());
//! let normalize = InoutCallable::concatenate([trim, shout]);
//!
//! let mut text = "  hello ".to_string();
//! normalize.invoke(&mut text);
//! assert_eq!(text, "HELLO");
//! ```
//!
//! [`InoutCallable::to_pure`] and [`Callable::to_mutating`](crate::Callable::to_mutating)
//! convert between the two forms.

mod mutation;

pub use mutation::{InoutCallable, IntoInoutCallable};
