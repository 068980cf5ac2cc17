//! Orderings as first-class values.
//!
//! A [`Comparator<T>`] decides how two borrowed `T`s are ordered. Unlike the
//! other specialized forms it is not an alias of [`Callable`]: comparisons
//! take their operands by reference so that sorting never clones elements.
//! [`Comparator::into_callable`] and [`Comparator::from_callable`] convert
//! between the two representations.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::callable::{Callable, IntoCallable};

/// A reusable, composable ordering of `T`.
///
/// The wrapped function is expected to define a strict weak ordering.
/// Combinators do not check this.
///
/// # Examples
///
/// ```
/// use callable::specialized::Comparator;
///
/// struct Person { first: &'static str, last: &'static str }
///
/// let by_name = Comparator::comparing(|person: &Person| person.first)
///     .then_comparing_by(|person: &Person| person.last);
///
/// let mut people = vec![
///     Person { first: "Michael", last: "Pangburn" },
///     Person { first: "Alison", last: "Brie" },
///     Person { first: "Michael", last: "Jordan" },
/// ];
/// people.sort_by(by_name.as_fn());
///
/// let names: Vec<_> = people.iter().map(|p| (p.first, p.last)).collect();
/// assert_eq!(
///     names,
///     vec![("Alison", "Brie"), ("Michael", "Jordan"), ("Michael", "Pangburn")]
/// );
/// ```
pub struct Comparator<T>
where
    T: ?Sized + 'static,
{
    function: Rc<dyn Fn(&T, &T) -> Ordering>,
}

impl<T> Comparator<T>
where
    T: ?Sized + 'static,
{
    /// Wraps an ordering function.
    #[must_use]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Orders `left` relative to `right`.
    #[inline]
    #[must_use]
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.function)(left, right)
    }

    /// A comparator that considers every pair equal.
    ///
    /// Useful as the neutral element of [`sequence`](Self::sequence) and as a
    /// way to keep input order in a stable sort.
    #[must_use]
    pub fn always_equal() -> Self {
        Self::new(|_, _| Ordering::Equal)
    }

    /// Orders by a key extracted from each operand, using the key's [`Ord`].
    ///
    /// The key function is invoked twice per comparison. As with
    /// [`slice::sort_by_key`], the key is returned by value and cannot borrow
    /// from the operand. Use [`comparing_by_ref`](Self::comparing_by_ref) for
    /// keys such as string fields.
    #[must_use]
    pub fn comparing<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        Self::new(move |left, right| key(left).cmp(&key(right)))
    }

    /// Orders by a key borrowed from each operand, using the key's [`Ord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::specialized::Comparator;
    ///
    /// struct Person {
    ///     name: String,
    /// }
    ///
    /// let by_name = Comparator::comparing_by_ref(|person: &Person| person.name.as_str());
    ///
    /// let mut people = vec![
    ///     Person { name: "Troy".to_string() },
    ///     Person { name: "Annie".to_string() },
    /// ];
    /// people.sort_by(by_name.as_fn());
    /// assert_eq!(people[0].name, "Annie");
    /// ```
    #[must_use]
    pub fn comparing_by_ref<K, F>(key: F) -> Self
    where
        K: Ord + ?Sized,
        F: for<'a> Fn(&'a T) -> &'a K + 'static,
    {
        Self::new(move |left, right| key(left).cmp(key(right)))
    }

    /// Orders by a key extracted from each operand, using `comparator` on the
    /// keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::specialized::Comparator;
    ///
    /// let by_length_descending =
    ///     Comparator::comparing_with(|word: &&str| word.len(), Comparator::reverse_order());
    ///
    /// let mut words = vec!["a", "ccc", "bb"];
    /// words.sort_by(by_length_descending.as_fn());
    /// assert_eq!(words, vec!["ccc", "bb", "a"]);
    /// ```
    #[must_use]
    pub fn comparing_with<K, F>(key: F, comparator: Comparator<K>) -> Self
    where
        K: 'static,
        F: Fn(&T) -> K + 'static,
    {
        Self::new(move |left, right| comparator.compare(&key(left), &key(right)))
    }

    /// Breaks ties of `self` with `next`.
    ///
    /// `next` is not invoked unless `self` reports [`Ordering::Equal`].
    #[must_use]
    pub fn then_comparing(&self, next: &Self) -> Self {
        let first = self.clone();
        let next = next.clone();
        Self::new(move |left, right| {
            first
                .compare(left, right)
                .then_with(|| next.compare(left, right))
        })
    }

    /// Breaks ties of `self` by the natural order of a key.
    #[must_use]
    pub fn then_comparing_by<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.then_comparing(&Self::comparing(key))
    }

    /// Breaks ties of `self` by the natural order of a borrowed key.
    #[must_use]
    pub fn then_comparing_by_ref<K, F>(&self, key: F) -> Self
    where
        K: Ord + ?Sized,
        F: for<'a> Fn(&'a T) -> &'a K + 'static,
    {
        self.then_comparing(&Self::comparing_by_ref(key))
    }

    /// The first non-equal result among `comparators`, evaluated left to
    /// right. An empty sequence considers every pair equal.
    #[must_use]
    pub fn sequence<I>(comparators: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::sequence_then(comparators, Self::always_equal())
    }

    /// Like [`sequence`](Self::sequence), with `last` consulted when every
    /// comparator in `comparators` reports equality.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::specialized::Comparator;
    ///
    /// let by_parity = Comparator::comparing(|value: &i32| value.rem_euclid(2));
    /// let by_size = Comparator::comparing(|value: &i32| value.abs());
    /// let order = Comparator::sequence_then([by_parity, by_size], Comparator::natural_order());
    ///
    /// let mut values = vec![3, -2, 2, 1, -1];
    /// values.sort_by(order.as_fn());
    /// assert_eq!(values, vec![-2, 2, -1, 1, 3]);
    /// ```
    #[must_use]
    pub fn sequence_then<I>(comparators: I, last: Self) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let comparators: Vec<Self> = comparators.into_iter().collect();
        Self::new(move |left, right| {
            comparators
                .iter()
                .map(|comparator| comparator.compare(left, right))
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| last.compare(left, right))
        })
    }

    /// The same ordering with its direction inverted.
    ///
    /// Reversing twice gives back the original ordering.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let inner = self.clone();
        Self::new(move |left, right| inner.compare(left, right).reverse())
    }

    /// The lesser operand. Returns `left` when the two are equal.
    #[must_use]
    pub fn min_of<'a>(&self, left: &'a T, right: &'a T) -> &'a T {
        match self.compare(left, right) {
            Ordering::Greater => right,
            Ordering::Less | Ordering::Equal => left,
        }
    }

    /// The greater operand. Returns `right` when the two are equal.
    #[must_use]
    pub fn max_of<'a>(&self, left: &'a T, right: &'a T) -> &'a T {
        match self.compare(left, right) {
            Ordering::Greater => left,
            Ordering::Less | Ordering::Equal => right,
        }
    }

    /// Borrows this comparator as a closure, the shape expected by
    /// [`slice::sort_by`] and friends.
    #[must_use]
    pub fn as_fn(&self) -> impl Fn(&T, &T) -> Ordering + '_ {
        move |left, right| self.compare(left, right)
    }
}

impl<T> Comparator<T>
where
    T: Ord + ?Sized + 'static,
{
    /// Ascending order according to [`Ord`].
    #[must_use]
    pub fn natural_order() -> Self {
        Self::new(|left, right| left.cmp(right))
    }

    /// Descending order according to [`Ord`].
    #[must_use]
    pub fn reverse_order() -> Self {
        Self::new(|left, right| right.cmp(left))
    }
}

impl<T> Comparator<T>
where
    T: 'static,
{
    /// Extends this ordering to `Option<T>`, placing `None` before every
    /// `Some`. Two `None`s are equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::specialized::Comparator;
    ///
    /// let order = Comparator::<i32>::natural_order().nil_values_first();
    ///
    /// let mut values = vec![Some(2), None, Some(1)];
    /// values.sort_by(order.as_fn());
    /// assert_eq!(values, vec![None, Some(1), Some(2)]);
    /// ```
    #[must_use]
    pub fn nil_values_first(&self) -> Comparator<Option<T>> {
        self.with_nil_ordering(Ordering::Less)
    }

    /// Extends this ordering to `Option<T>`, placing `None` after every
    /// `Some`. Two `None`s are equal.
    #[must_use]
    pub fn nil_values_last(&self) -> Comparator<Option<T>> {
        self.with_nil_ordering(Ordering::Greater)
    }

    fn with_nil_ordering(&self, none_before_some: Ordering) -> Comparator<Option<T>> {
        let inner = self.clone();
        Comparator::<Option<T>>::new(move |left, right| match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => none_before_some,
            (Some(_), None) => none_before_some.reverse(),
            (Some(left), Some(right)) => inner.compare(left, right),
        })
    }

    /// Converts to a [`Callable`] over an owned pair.
    #[must_use]
    pub fn into_callable(self) -> Callable<(T, T), Ordering> {
        Callable::new(move |(left, right): (T, T)| self.compare(&left, &right))
    }

    /// Wraps a [`Callable`] over an owned pair. Each comparison clones both
    /// operands.
    #[must_use]
    pub fn from_callable<G>(function: G) -> Self
    where
        T: Clone,
        G: IntoCallable<(T, T), Ordering>,
    {
        let function = function.into_callable();
        Self::new(move |left: &T, right: &T| function.invoke((left.clone(), right.clone())))
    }
}

impl<T> Clone for Comparator<T>
where
    T: ?Sized + 'static,
{
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<T> fmt::Debug for Comparator<T>
where
    T: ?Sized + 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Comparator")
            .field("operand", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Comparator<str>: Clone, fmt::Debug);
