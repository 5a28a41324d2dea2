use crate::{Error, Sequence};
use std::ops::Add;

/// Folds `seq` into a single value, combining elements strictly left to right.
///
/// Starting from `init`, applies `combine` once per element in ascending
/// index order and returns the final accumulator. An empty sequence folds to
/// `init` without `combine` ever being invoked.
///
/// Fails with [Error::InvalidArgument] if `seq` cannot produce an element
/// for an index below its claimed length; elements combined up to that point
/// are discarded.
///
/// # Example
///
/// ```rust
/// use seq_fold::fold;
///
/// let product = fold(&[1, 2, 3, 4], 1u64, |acc, x| acc * x)?;
/// assert_eq!(product, 24);
/// # Ok::<(), seq_fold::Error>(())
/// ```
pub fn fold<S, A, F>(seq: &S, init: A, mut combine: F) -> Result<A, Error>
where
    S: Sequence + ?Sized,
    F: FnMut(A, &S::Item) -> A,
{
    fold_indexed(seq, init, |acc, item, _| combine(acc, item))
}

/// [fold], except `combine` also receives the current element's index.
///
/// Indices are delivered in ascending order starting at zero.
pub fn fold_indexed<S, A, F>(seq: &S, init: A, mut combine: F) -> Result<A, Error>
where
    S: Sequence + ?Sized,
    F: FnMut(A, &S::Item, usize) -> A,
{
    let len = seq.len();
    let mut acc = init;

    for index in 0..len {
        match seq.get(index) {
            Some(item) => acc = combine(acc, item, index),
            None => return Err(Error::InvalidArgument { index, len }),
        }
    }

    Ok(acc)
}

/// Derived traversals available on every [Sequence].
pub trait Fold: Sequence {
    /// Method form of [fold].
    fn fold<A, F: FnMut(A, &Self::Item) -> A>(&self, init: A, f: F) -> Result<A, Error>;

    /// Feeds every element through `f` and adds up the results.
    ///
    /// The default value of `N` is assumed to be the additive identity
    /// (i.e. _zero_).
    #[inline]
    fn sum<N: Default + Add<Output = N>, F: FnMut(&Self::Item) -> N>(
        &self,
        mut f: F,
    ) -> Result<N, Error> {
        self.fold(N::default(), |n, i| n + f(i))
    }

    /// Counts this [Sequence]'s elements by traversing them.
    #[inline]
    fn count(&self) -> Result<usize, Error> {
        self.sum(|_| 1)
    }
}

impl<S: Sequence + ?Sized> Fold for S {
    fn fold<A, F: FnMut(A, &Self::Item) -> A>(&self, init: A, mut f: F) -> Result<A, Error> {
        fold_indexed(self, init, |acc, item, _| f(acc, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockSequence;
    use assert_matches::assert_matches;
    use proptest::prelude::Arbitrary;
    use test_strategy::proptest;

    #[proptest]
    fn an_empty_sequence_folds_to_the_initial_accumulator(init: i64) {
        let mut calls = 0usize;

        let folded = fold(&[] as &[u8], init, |acc, _| {
            calls += 1;
            acc
        });

        assert_eq!(folded, Ok(init));
        assert_eq!(calls, 0);
    }

    #[proptest]
    fn a_combine_that_returns_its_accumulator_leaves_the_seed_unchanged(s: Vec<u8>, init: i64) {
        assert_eq!(fold(&s, init, |acc, _| acc), Ok(init));
    }

    #[proptest]
    fn a_single_element_sequence_folds_to_that_element(a: u32) {
        assert_eq!(fold(&[a], 0, |acc, x| acc + u64::from(*x)), Ok(a.into()));
    }

    #[test]
    fn elements_are_combined_strictly_left_to_right() {
        let joined = fold(&[1, 2, 3], String::new(), |acc, x: &i32| format!("{acc},{x}"));
        assert_eq!(joined.as_deref(), Ok(",1,2,3"));
    }

    #[proptest]
    fn fold_agrees_with_the_standard_iterator_fold(s: Vec<u64>) {
        assert_eq!(
            fold(&s, 0, |acc, x| acc ^ x),
            Ok(s.iter().fold(0, |acc, x| acc ^ x)),
        );
    }

    #[proptest]
    fn every_element_is_combined_exactly_once_in_ascending_order(s: Vec<u8>) {
        let indices = fold_indexed(&s, Vec::new(), |mut acc, _, i| {
            acc.push(i);
            acc
        });

        assert_eq!(indices, Ok((0..s.len()).collect()));
    }

    #[proptest]
    fn the_input_sequence_is_left_untouched(s: Vec<u8>, init: u64) {
        let before = s.clone();
        assert_matches!(fold(&s, init, |acc, x| acc + u64::from(*x)), Ok(_));
        assert_eq!(s, before);
    }

    #[proptest]
    fn a_sequence_claiming_more_elements_than_it_has_is_an_invalid_argument(
        #[strategy(1usize..8)] excess: usize,
        #[strategy(MockSequence::<u8>::arbitrary_with(#excess))] s: MockSequence<u8>,
    ) {
        assert_matches!(
            fold(&s, 0, |acc, x| acc + u64::from(*x)),
            Err(Error::InvalidArgument { index, len }) => {
                assert_eq!(len, s.len());
                assert_eq!(index, len - excess);
            }
        );
    }

    #[proptest]
    fn every_element_before_the_first_missing_one_is_still_combined(
        #[strategy(1usize..8)] excess: usize,
        #[strategy(MockSequence::<u8>::arbitrary_with(#excess))] s: MockSequence<u8>,
    ) {
        let mut calls = 0usize;

        let folded = fold(&s, (), |acc, _| {
            calls += 1;
            acc
        });

        assert_matches!(folded, Err(Error::InvalidArgument { .. }));
        assert_eq!(calls, s.len() - excess);
    }

    #[proptest]
    fn count_equals_the_number_of_elements(s: Vec<u8>) {
        assert_eq!(Fold::count(&s), Ok(s.len()));
    }

    #[proptest]
    fn sum_adds_up_whatever_the_projection_yields(s: Vec<u8>) {
        assert_eq!(
            s.sum(|x| u64::from(*x)),
            Ok(s.iter().map(|x| u64::from(*x)).sum()),
        );
    }
}
