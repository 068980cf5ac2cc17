use crate::specialized::Comparator;

/// Slice methods ordering elements by a [`Comparator`].
pub trait CallableSliceExt<T>
where
    T: 'static,
{
    /// Sorts in place. Equal elements keep their relative order.
    fn sort_with(&mut self, comparator: &Comparator<T>);

    /// Sorts in place without preserving the order of equal elements.
    fn sort_unstable_with(&mut self, comparator: &Comparator<T>);

    /// Whether the elements are in non-descending order according to
    /// `comparator`.
    fn is_sorted_with(&self, comparator: &Comparator<T>) -> bool;
}

impl<T> CallableSliceExt<T> for [T]
where
    T: 'static,
{
    fn sort_with(&mut self, comparator: &Comparator<T>) {
        self.sort_by(comparator.as_fn());
    }

    fn sort_unstable_with(&mut self, comparator: &Comparator<T>) {
        self.sort_unstable_by(comparator.as_fn());
    }

    fn is_sorted_with(&self, comparator: &Comparator<T>) -> bool {
        self.is_sorted_by(|left, right| comparator.compare(left, right).is_le())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![3, 1, 2], vec![1, 2, 3])]
    #[case(vec![], vec![])]
    #[case(vec![5, 5, -1], vec![-1, 5, 5])]
    fn test_sort_with(#[case] values: Vec<i32>, #[case] expected: Vec<i32>) {
        let mut values = values;
        let order = Comparator::natural_order();
        values.sort_with(&order);

        assert_eq!(values, expected);
        assert!(values.is_sorted_with(&order));
    }

    #[rstest]
    fn test_sort_unstable_with_reversed() {
        let order = Comparator::<i32>::natural_order().reversed();
        let mut values = vec![2, 9, 4];
        values.sort_unstable_with(&order);

        assert_eq!(values, vec![9, 4, 2]);
        assert!(!values.is_sorted_with(&Comparator::natural_order()));
    }
}
