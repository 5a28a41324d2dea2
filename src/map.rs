use crate::{fold_indexed, Error, Sequence};

/// Maps `seq` into a new sequence by transforming every element in place of
/// its index.
///
/// The output has exactly one element per input element, in the same order:
/// element *i* is `transform(&seq[i], i)`. The input is borrowed immutably
/// and never modified; an empty sequence maps to an empty sequence.
///
/// Shares [fold][crate::fold]'s traversal, and with it the
/// [Error::InvalidArgument] failure for sequences that cannot back their
/// claimed length.
///
/// # Example
///
/// ```rust
/// use seq_fold::map;
///
/// let shifted = map(&[1usize, 2, 3], |x, i| x + i)?;
/// assert_eq!(&*shifted, &[1, 3, 5]);
/// # Ok::<(), seq_fold::Error>(())
/// ```
pub fn map<S, U, F>(seq: &S, mut transform: F) -> Result<Box<[U]>, Error>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize) -> U,
{
    let out = fold_indexed(seq, Vec::with_capacity(seq.len()), |mut out, item, index| {
        out.push(transform(item, index));
        out
    })?;

    Ok(out.into_boxed_slice())
}
