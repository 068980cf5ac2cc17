use crate::callable::IntoCallable;
use crate::specialized::Comparator;

/// Iterator methods taking [`Callable`](crate::Callable)s (or anything
/// [`IntoCallable`]) in place of closures.
///
/// Implemented for every [`Iterator`].
pub trait CallableIteratorExt: Iterator + Sized {
    /// Transforms each item.
    fn map_with<Out, G>(self, function: G) -> impl Iterator<Item = Out>
    where
        Self::Item: 'static,
        Out: 'static,
        G: IntoCallable<Self::Item, Out>,
    {
        let function = function.into_callable();
        self.map(move |item| function.invoke(item))
    }

    /// Keeps the items accepted by `predicate`. Each test clones the item.
    fn filter_with<G>(self, predicate: G) -> impl Iterator<Item = Self::Item>
    where
        Self::Item: Clone + 'static,
        G: IntoCallable<Self::Item, bool>,
    {
        let predicate = predicate.into_callable();
        self.filter(move |item| predicate.invoke(item.clone()))
    }

    /// Transforms each item into an iterable and flattens the results.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::collection::CallableIteratorExt;
    ///
    /// let words: Vec<char> = ["ab", "c"]
    ///     .into_iter()
    ///     .flat_map_with(|word: &'static str| word.chars().collect::<Vec<_>>())
    ///     .collect();
    ///
    /// assert_eq!(words, vec!['a', 'b', 'c']);
    /// ```
    fn flat_map_with<Out, G>(self, function: G) -> impl Iterator<Item = Out::Item>
    where
        Self::Item: 'static,
        Out: IntoIterator + 'static,
        G: IntoCallable<Self::Item, Out>,
    {
        let function = function.into_callable();
        self.flat_map(move |item| function.invoke(item))
    }

    /// Transforms each item, dropping those mapped to `None`.
    fn compact_map_with<Out, G>(self, function: G) -> impl Iterator<Item = Out>
    where
        Self::Item: 'static,
        Out: 'static,
        G: IntoCallable<Self::Item, Option<Out>>,
    {
        let function = function.into_callable();
        self.filter_map(move |item| function.invoke(item))
    }

    /// Folds the items left to right. `function` receives
    /// `(accumulator, item)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use callable::collection::CallableIteratorExt;
    ///
    /// let sum = (1..=4).fold_with(0, |(total, value): (i32, i32)| total + value);
    /// assert_eq!(sum, 10);
    /// ```
    fn fold_with<Acc, G>(self, initial: Acc, function: G) -> Acc
    where
        Self::Item: 'static,
        Acc: 'static,
        G: IntoCallable<(Acc, Self::Item), Acc>,
    {
        let function = function.into_callable();
        self.fold(initial, |accumulator, item| {
            function.invoke((accumulator, item))
        })
    }

    /// Folds the items using the first one as the initial accumulator.
    /// Returns `None` for an empty iterator.
    fn reduce_with<G>(self, function: G) -> Option<Self::Item>
    where
        Self::Item: 'static,
        G: IntoCallable<(Self::Item, Self::Item), Self::Item>,
    {
        let function = function.into_callable();
        self.reduce(|accumulator, item| function.invoke((accumulator, item)))
    }

    /// Runs `consumer` on each item.
    fn for_each_with<G>(self, consumer: G)
    where
        Self::Item: 'static,
        G: IntoCallable<Self::Item, ()>,
    {
        let consumer = consumer.into_callable();
        self.for_each(|item| consumer.invoke(item));
    }

    /// Collects the items and sorts them with `comparator`. Equal items keep
    /// their iteration order.
    fn sorted_with(self, comparator: &Comparator<Self::Item>) -> Vec<Self::Item>
    where
        Self::Item: 'static,
    {
        let mut items: Vec<Self::Item> = self.collect();
        items.sort_by(comparator.as_fn());
        items
    }

    /// The least item according to `comparator`, the first one on ties.
    fn min_with(self, comparator: &Comparator<Self::Item>) -> Option<Self::Item>
    where
        Self::Item: 'static,
    {
        self.min_by(comparator.as_fn())
    }

    /// The greatest item according to `comparator`, the last one on ties.
    fn max_with(self, comparator: &Comparator<Self::Item>) -> Option<Self::Item>
    where
        Self::Item: 'static,
    {
        self.max_by(comparator.as_fn())
    }
}

impl<I> CallableIteratorExt for I where I: Iterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Callable;
    use rstest::rstest;

    #[rstest]
    fn test_compact_map_with_drops_none() {
        let parse = Callable::new(|text: &'static str| text.parse::<i32>().ok());
        let parsed: Vec<i32> = ["1", "x", "3"]
            .into_iter()
            .compact_map_with(&parse)
            .collect();

        assert_eq!(parsed, vec![1, 3]);
    }

    #[rstest]
    fn test_reduce_with_empty_is_none() {
        let longest = |(left, right): (String, String)| {
            if right.len() > left.len() {
                right
            } else {
                left
            }
        };

        assert_eq!(Vec::<String>::new().into_iter().reduce_with(longest), None);
        assert_eq!(
            vec!["a".to_string(), "ccc".to_string(), "bb".to_string()]
                .into_iter()
                .reduce_with(longest),
            Some("ccc".to_string())
        );
    }

    #[rstest]
    fn test_min_and_max_with_ties() {
        let by_length = Comparator::comparing(|text: &&'static str| text.len());

        let words = ["ab", "cd", "e"];

        assert_eq!(words.into_iter().min_with(&by_length), Some("e"));
        assert_eq!(words.into_iter().max_with(&by_length), Some("cd"));
    }

    #[rstest]
    fn test_sorted_with_is_stable() {
        let by_first_letter = Comparator::comparing(|text: &&'static str| text.chars().next());
        let sorted = ["bx", "a", "by", "bz", "c"]
            .into_iter()
            .sorted_with(&by_first_letter);

        assert_eq!(sorted, vec!["a", "bx", "by", "bz", "c"]);
    }
}
