//! Adapters that let iterators and slices consume [`Callable`](crate::Callable)s
//! and [`Comparator`](crate::specialized::Comparator)s directly.
//!
//! - [`CallableIteratorExt`]: `map_with`, `filter_with`, `flat_map_with`,
//!   `compact_map_with`, `fold_with`, `reduce_with`, `for_each_with`,
//!   `sorted_with`, `min_with`, `max_with`
//! - [`CallableSliceExt`]: `sort_with`, `sort_unstable_with`, `is_sorted_with`
//!
//! Every adapter is a thin wrapper over the standard library method of the
//! same shape. Sorting by a comparator is stable unless the method name says
//! otherwise.
//!
//! # Examples
//!
//! ```
//! use callable::collection::CallableIteratorExt;
//! use callable::specialized::{Comparator, Predicate};
//!
//! let is_even: Predicate<i32> = Predicate::new(|value: i32| value % 2 == 0);
//! let descending = Comparator::<i32>::reverse_order();
//!
//! let result = (1..=6)
//!     .filter_with(&is_even)
//!     .map_with(|value: i32| value * 10)
//!     .sorted_with(&descending);
//!
//! assert_eq!(result, vec![60, 40, 20]);
//! ```

mod iterator;
mod slice;

pub use iterator::CallableIteratorExt;
pub use slice::CallableSliceExt;
