//! # lazyseq: lazy, possibly-infinite sequences
//!
//! A [`Seq`] describes an ordered production of values that is computed on
//! demand. Sequences are built from generators and composed with
//! combinators; nothing is evaluated until a consumer pulls elements, and no
//! element past the last one pulled is ever computed.
//!
//! ## Key Principles
//!
//! - **Views, not streams**: consuming a sequence never changes it. Every
//!   traversal opens its own [`Cursor`].
//! - **Structural extents**: every sequence knows whether it is finite,
//!   infinite, or unknown ([`Extent`]), so strict operations such as
//!   [`Seq::to_list`] refuse infinite sequences instead of looping forever.
//! - **Fail fast**: malformed arguments (negative counts, empty cycles) are
//!   rejected when the sequence is built, not when it is consumed.
//! - **Single-threaded**: sequences share their generation rules through
//!   `Rc` and are neither `Send` nor `Sync`.
//!
//! ## Architecture
//!
//! - [`seq`]: the [`Seq`] and [`Cursor`] types plus generators
//!   (`from_step`, `cycle_of`, `from_range`, `range_from`, `unfold`)
//! - [`combinators`]: `map`, `filter`, `zip_with`, `take`, `drop`, `cycle`,
//!   `flat_map`, `scan`, `fold_left`, `to_list`, ...
//! - [`materialize`]: [`slice`] and the ceiling-enforcing [`Materializer`]
//! - [`tree`]: lazy rose trees with pruning
//! - [`state`]: state threading through folds and point-free composition
//!
//! ## Example
//!
//! ```
//! use lazyseq::Seq;
//!
//! let fizz = Seq::cycle_of(vec!["", "", "fizz"])?;
//! let buzz = Seq::cycle_of(vec!["", "", "", "", "buzz"])?;
//! let words = fizz.zip_with(&buzz, |a, b| format!("{a}{b}"));
//!
//! assert_eq!(words.slice(12, 3)?, vec!["", "", "fizzbuzz"]);
//! # Ok::<(), lazyseq::SeqError>(())
//! ```

pub mod combinators;
pub mod error;
pub mod extent;
pub mod materialize;
pub mod seq;
pub mod state;
pub mod tree;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use error::SeqError;
pub use extent::{Extent, IntoCount};
pub use materialize::{Materializer, slice};
pub use seq::{Cursor, Seq};
pub use state::{Transition, compose, run_state, trajectory};
pub use tree::Tree;
