//! # Overview
//!
//! This crate provides a generic [left fold][fold] (better known as _reduce_)
//! and an index-aware map over finite ordered sequences, parameterized by a
//! combining function and a caller-supplied initial accumulator. Both
//! traversals visit every element exactly once, strictly in ascending index
//! order, and never mutate their input; the fold of an empty sequence is the
//! initial accumulator itself.
//!
//! [fold]: https://en.wikipedia.org/wiki/Fold_(higher-order_function)
//!
//! Any finite index-addressable collection can be traversed by implementing
//! [Sequence]; slices, arrays, vectors and boxed slices come ready-made.
//!
//! # Example
//!
//! ```rust
//! use seq_fold::*;
//!
//! let line = ["fold", "is", "just", "a", "loop"];
//!
//! let lengths = map(&line, |w, _| w.len())?;
//! assert_eq!(&*lengths, &[4, 2, 4, 1, 4]);
//!
//! let letters = fold(&line, 0, |n, w| n + w.len())?;
//! assert_eq!(letters, 15);
//!
//! let sentence = fold_indexed(&line, String::new(), |mut s, w, i| {
//!     if i > 0 {
//!         s.push(' ');
//!     }
//!     s.push_str(w);
//!     s
//! })?;
//! assert_eq!(sentence, "fold is just a loop");
//! # Ok::<(), seq_fold::Error>(())
//! ```

mod error;
mod fold;
mod map;
mod sequence;

pub use error::*;
pub use fold::*;
pub use map::*;
pub use sequence::*;
