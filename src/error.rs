use thiserror::Error;

/// The reason a traversal refused its input.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The sequence is not a valid finite ordered sequence.
    ///
    /// Raised when a [Sequence][crate::Sequence] reports a length it cannot
    /// back with elements, i.e. [get][crate::Sequence::get] returned [None]
    /// for an index strictly below [len][crate::Sequence::len]. The traversal
    /// guards every access, so a misbehaving sequence surfaces here rather
    /// than as a panic halfway through the fold.
    #[error("no element at index {index} of a sequence claiming {len}")]
    InvalidArgument {
        /// The first index the sequence failed to produce an element for.
        index: usize,

        /// The length the sequence claimed.
        len: usize,
    },
}
