/// An abstraction for a finite, index-addressable, ordered sequence.
///
/// A [Sequence] promises exactly [len][Sequence::len] elements, addressable
/// in ascending order starting at index zero. Traversals borrow the sequence
/// immutably and never reorder, skip or revisit an element.
///
/// # Example
///
/// ```rust
/// use seq_fold::Sequence;
///
/// struct Repeated<T> {
///     value: T,
///     times: usize,
/// }
///
/// impl<T> Sequence for Repeated<T> {
///     type Item = T;
///
///     fn len(&self) -> usize {
///         self.times
///     }
///
///     fn get(&self, index: usize) -> Option<&T> {
///         (index < self.times).then_some(&self.value)
///     }
/// }
/// ```
pub trait Sequence {
    /// The type of this [Sequence]'s elements.
    type Item;

    /// Returns the number of elements in this [Sequence].
    fn len(&self) -> usize;

    /// Returns the element at `index`, or [None] at or past the end.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns whether this [Sequence] has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for Box<[T]> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        (**self).get(index)
    }
}


#[cfg(test)]
pub(crate) use tests::MockSequence;
