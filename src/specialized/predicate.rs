//! Boolean-valued [`Callable`]s and their logical combinators.

use std::ops::{BitAnd, BitOr, BitXor, Not, Range, RangeInclusive};

use crate::callable::{Callable, IntoCallable};

/// A function classifying its input as `true` or `false`.
///
/// `Predicate<In>` is an alias for `Callable<In, bool>`, so predicates
/// compose with [`pipe`](Callable::pipe) and every other combinator.
///
/// Logical combinators evaluate left to right and short-circuit like `&&`
/// and `||`. They assume the wrapped functions have no side effects that
/// callers rely on beyond that order.
///
/// # Examples
///
/// ```
/// use callable::specialized::Predicate;
///
/// let is_even: Predicate<i32> = Predicate::new(|value: i32| value % 2 == 0);
/// let is_positive = Predicate::greater_than(0);
///
/// let both = is_even.and(&is_positive);
/// assert!(both.invoke(4));
/// assert!(!both.invoke(-4));
/// assert!(!both.invoke(3));
/// ```
pub type Predicate<In> = Callable<In, bool>;

impl<In> Callable<In, bool>
where
    In: 'static,
{
    /// A predicate that accepts everything.
    #[must_use]
    pub fn always_true() -> Self {
        Self::new(|_| true)
    }

    /// A predicate that rejects everything.
    #[must_use]
    pub fn always_false() -> Self {
        Self::new(|_| false)
    }

    /// Logical NOT.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::specialized::Predicate;
    ///
    /// let is_empty: Predicate<String> = Predicate::new(|text: String| text.is_empty());
    /// let is_present = is_empty.negate();
    ///
    /// assert!(is_present.invoke("text".to_string()));
    /// ```
    #[must_use]
    pub fn negate(&self) -> Self {
        let inner = self.clone();
        Self::new(move |input| !inner.invoke(input))
    }

    /// Borrows this predicate as a closure over `&In`, the shape expected by
    /// [`Iterator::filter`] and [`Vec::retain`].
    ///
    /// Each call clones the borrowed input.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::specialized::Predicate;
    ///
    /// let is_odd: Predicate<i32> = Predicate::new(|value: i32| value % 2 != 0);
    /// let mut values = vec![1, 2, 3, 4, 5];
    /// values.retain(is_odd.as_filter());
    ///
    /// assert_eq!(values, vec![1, 3, 5]);
    /// ```
    #[must_use]
    pub fn as_filter(&self) -> impl Fn(&In) -> bool + '_
    where
        In: Clone,
    {
        move |input| self.invoke(input.clone())
    }
}

impl<In> Callable<In, bool>
where
    In: Clone + 'static,
{
    /// Logical AND. `other` is not invoked when `self` returns `false`.
    #[must_use]
    pub fn and<G>(&self, other: G) -> Self
    where
        G: IntoCallable<In, bool>,
    {
        let left = self.clone();
        let right = other.into_callable();
        Self::new(move |input: In| left.invoke(input.clone()) && right.invoke(input))
    }

    /// Logical OR. `other` is not invoked when `self` returns `true`.
    #[must_use]
    pub fn or<G>(&self, other: G) -> Self
    where
        G: IntoCallable<In, bool>,
    {
        let left = self.clone();
        let right = other.into_callable();
        Self::new(move |input: In| left.invoke(input.clone()) || right.invoke(input))
    }

    /// Logical XOR. Both sides are always invoked.
    #[must_use]
    pub fn xor<G>(&self, other: G) -> Self
    where
        G: IntoCallable<In, bool>,
    {
        let left = self.clone();
        let right = other.into_callable();
        Self::new(move |input: In| left.invoke(input.clone()) != right.invoke(input))
    }

    /// Accepts an input only when every predicate accepts it.
    ///
    /// Evaluates left to right and stops at the first `false`. An empty
    /// sequence accepts everything.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::specialized::Predicate;
    ///
    /// let checks: Vec<Predicate<i32>> = vec![
    ///     Predicate::new(|value: i32| value % 2 == 0),
    ///     Predicate::greater_than(0),
    ///     Predicate::new(|value: i32| value % 3 == 0),
    /// ];
    /// let all = Predicate::all_of(checks);
    ///
    /// let matching: Vec<i32> = (-15..=15).filter(all.as_filter()).collect();
    /// assert_eq!(matching, vec![6, 12]);
    /// ```
    #[must_use]
    pub fn all_of<I>(predicates: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoCallable<In, bool>,
    {
        Self::all_of_then(predicates, Self::always_true())
    }

    /// Like [`all_of`](Self::all_of), with `last` evaluated after every
    /// predicate in `predicates` has accepted the input.
    #[must_use]
    pub fn all_of_then<I, G>(predicates: I, last: G) -> Self
    where
        I: IntoIterator,
        I::Item: IntoCallable<In, bool>,
        G: IntoCallable<In, bool>,
    {
        let predicates: Vec<Self> = predicates
            .into_iter()
            .map(IntoCallable::into_callable)
            .collect();
        let last = last.into_callable();

        Self::new(move |input: In| {
            predicates
                .iter()
                .all(|predicate| predicate.invoke(input.clone()))
                && last.invoke(input)
        })
    }

    /// Accepts an input as soon as any predicate accepts it.
    ///
    /// Evaluates left to right and stops at the first `true`. An empty
    /// sequence rejects everything.
    #[must_use]
    pub fn any_of<I>(predicates: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoCallable<In, bool>,
    {
        Self::any_of_then(predicates, Self::always_false())
    }

    /// Like [`any_of`](Self::any_of), with `last` evaluated only when every
    /// predicate in `predicates` has rejected the input.
    #[must_use]
    pub fn any_of_then<I, G>(predicates: I, last: G) -> Self
    where
        I: IntoIterator,
        I::Item: IntoCallable<In, bool>,
        G: IntoCallable<In, bool>,
    {
        let predicates: Vec<Self> = predicates
            .into_iter()
            .map(IntoCallable::into_callable)
            .collect();
        let last = last.into_callable();

        Self::new(move |input: In| {
            predicates
                .iter()
                .any(|predicate| predicate.invoke(input.clone()))
                || last.invoke(input)
        })
    }
}

impl<In> Callable<In, bool>
where
    In: PartialEq + 'static,
{
    /// Accepts inputs equal to `value`.
    #[must_use]
    pub fn equal_to(value: In) -> Self {
        Self::new(move |input| input == value)
    }

    /// Accepts inputs not equal to `value`.
    #[must_use]
    pub fn not_equal_to(value: In) -> Self {
        Self::new(move |input| input != value)
    }
}

impl<In> Callable<In, bool>
where
    In: PartialOrd + 'static,
{
    /// Accepts inputs strictly less than `bound`.
    #[must_use]
    pub fn less_than(bound: In) -> Self {
        Self::new(move |input| input < bound)
    }

    /// Accepts inputs less than or equal to `bound`.
    #[must_use]
    pub fn less_than_or_equal_to(bound: In) -> Self {
        Self::new(move |input| input <= bound)
    }

    /// Accepts inputs strictly greater than `bound`.
    #[must_use]
    pub fn greater_than(bound: In) -> Self {
        Self::new(move |input| input > bound)
    }

    /// Accepts inputs greater than or equal to `bound`.
    #[must_use]
    pub fn greater_than_or_equal_to(bound: In) -> Self {
        Self::new(move |input| input >= bound)
    }

    /// Accepts inputs inside the half-open `range`.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::specialized::Predicate;
    ///
    /// let is_digit_value = Predicate::in_range(0..10);
    /// assert!(is_digit_value.invoke(0));
    /// assert!(!is_digit_value.invoke(10));
    /// ```
    #[must_use]
    pub fn in_range(range: Range<In>) -> Self {
        Self::new(move |input| range.contains(&input))
    }

    /// Accepts inputs inside the closed `range`.
    #[must_use]
    pub fn in_closed_range(range: RangeInclusive<In>) -> Self {
        Self::new(move |input| range.contains(&input))
    }
}

impl<In> Not for Callable<In, bool>
where
    In: 'static,
{
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl<In, G> BitAnd<G> for Callable<In, bool>
where
    In: Clone + 'static,
    G: IntoCallable<In, bool>,
{
    type Output = Self;

    fn bitand(self, other: G) -> Self::Output {
        self.and(other)
    }
}

impl<In, G> BitOr<G> for Callable<In, bool>
where
    In: Clone + 'static,
    G: IntoCallable<In, bool>,
{
    type Output = Self;

    fn bitor(self, other: G) -> Self::Output {
        self.or(other)
    }
}

impl<In, G> BitXor<G> for Callable<In, bool>
where
    In: Clone + 'static,
    G: IntoCallable<In, bool>,
{
    type Output = Self;

    fn bitxor(self, other: G) -> Self::Output {
        self.xor(other)
    }
}
