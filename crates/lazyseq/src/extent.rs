//! Structural length knowledge for sequences.
//!
//! Every [`crate::Seq`] carries an [`Extent`] computed when it is built, never
//! by pulling elements. Combinators derive the extent of their output from
//! the extents of their inputs, so `to_list` can refuse an infinite sequence
//! before it starts looping.

use std::fmt;

use crate::error::SeqError;

/// What is known about the length of a sequence without evaluating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
    /// Exactly this many elements.
    Exact(usize),
    /// Finite, with no more than this many elements.
    AtMost(usize),
    /// Finiteness cannot be established structurally.
    Unknown,
    /// Never ends.
    Infinite,
}

impl Extent {
    /// Returns true if the sequence is known to end.
    pub fn is_finite(self) -> bool {
        matches!(self, Extent::Exact(_) | Extent::AtMost(_))
    }

    /// Returns the exact length, if known.
    pub fn exact(self) -> Option<usize> {
        match self {
            Extent::Exact(n) => Some(n),
            _ => None,
        }
    }

    /// Returns an upper bound on the length, if one is known.
    pub fn upper_bound(self) -> Option<usize> {
        match self {
            Extent::Exact(n) | Extent::AtMost(n) => Some(n),
            Extent::Unknown | Extent::Infinite => None,
        }
    }

    /// Extent after dropping elements that fail a predicate.
    pub(crate) fn filtered(self) -> Self {
        match self {
            Extent::Exact(n) | Extent::AtMost(n) => Extent::AtMost(n),
            other => other,
        }
    }

    /// Extent of a pairwise combination: the shorter side wins.
    pub(crate) fn zipped(self, other: Self) -> Self {
        use Extent::{AtMost, Exact, Infinite, Unknown};
        match (self, other) {
            (Exact(a), Exact(b)) => Exact(a.min(b)),
            (Exact(a) | AtMost(a), Exact(b) | AtMost(b)) => AtMost(a.min(b)),
            (Infinite, x) | (x, Infinite) => x,
            (Exact(n) | AtMost(n), Unknown) | (Unknown, Exact(n) | AtMost(n)) => AtMost(n),
            (Unknown, Unknown) => Unknown,
        }
    }

    /// Extent of the first `n` elements.
    pub(crate) fn taken(self, n: usize) -> Self {
        match self {
            Extent::Exact(m) => Extent::Exact(m.min(n)),
            Extent::AtMost(m) => Extent::AtMost(m.min(n)),
            Extent::Unknown => Extent::AtMost(n),
            Extent::Infinite => Extent::Exact(n),
        }
    }

    /// Extent after skipping `n` elements.
    pub(crate) fn dropped(self, n: usize) -> Self {
        match self {
            Extent::Exact(m) => Extent::Exact(m.saturating_sub(n)),
            Extent::AtMost(m) => Extent::AtMost(m.saturating_sub(n)),
            other => other,
        }
    }

    /// Extent of `self` followed by `other`.
    pub(crate) fn chained(self, other: Self) -> Self {
        use Extent::{AtMost, Exact, Infinite, Unknown};
        match (self, other) {
            (Infinite, _) | (_, Infinite) => Infinite,
            (Unknown, _) | (_, Unknown) => Unknown,
            (Exact(a), Exact(b)) => Exact(a.saturating_add(b)),
            (Exact(a) | AtMost(a), Exact(b) | AtMost(b)) => AtMost(a.saturating_add(b)),
        }
    }

    /// Extent of a prefix cut by a predicate.
    pub(crate) fn prefix(self) -> Self {
        match self {
            Extent::Exact(n) | Extent::AtMost(n) => Extent::AtMost(n),
            Extent::Unknown | Extent::Infinite => Extent::Unknown,
        }
    }

    /// Extent of a running accumulation that also yields its seed.
    pub(crate) fn scanned(self) -> Self {
        match self {
            Extent::Exact(n) => Extent::Exact(n.saturating_add(1)),
            Extent::AtMost(n) => Extent::AtMost(n.saturating_add(1)),
            other => other,
        }
    }

    /// Extent of a flattened sequence of sequences.
    pub(crate) fn flattened(self) -> Self {
        match self {
            Extent::Exact(0) | Extent::AtMost(0) => Extent::Exact(0),
            Extent::Infinite => Extent::Infinite,
            _ => Extent::Unknown,
        }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Exact(n) => write!(f, "exactly {n}"),
            Extent::AtMost(n) => write!(f, "at most {n}"),
            Extent::Unknown => write!(f, "unknown"),
            Extent::Infinite => write!(f, "infinite"),
        }
    }
}

// ============================================================================
// Counts
// ============================================================================

/// Integer types accepted wherever a sequence operation takes a count or an
/// offset.
///
/// Signed values are accepted so that a negative count coming from caller
/// arithmetic is reported as [`SeqError::InvalidArgument`] rather than
/// silently wrapping.
pub trait IntoCount: Copy + fmt::Display {
    /// Converts to `usize`, naming the parameter in the error.
    fn into_count(self, name: &'static str) -> Result<usize, SeqError>;
}

macro_rules! impl_into_count {
    (unsigned: $($ty:ty),*) => {
        $(
            impl IntoCount for $ty {
                fn into_count(self, name: &'static str) -> Result<usize, SeqError> {
                    usize::try_from(self).map_err(|_| {
                        SeqError::invalid_argument(
                            name,
                            format!("does not fit in usize (got {self})"),
                        )
                    })
                }
            }
        )*
    };
    (signed: $($ty:ty),*) => {
        $(
            impl IntoCount for $ty {
                fn into_count(self, name: &'static str) -> Result<usize, SeqError> {
                    if self < 0 {
                        return Err(SeqError::invalid_argument(
                            name,
                            format!("must not be negative (got {self})"),
                        ));
                    }
                    usize::try_from(self).map_err(|_| {
                        SeqError::invalid_argument(
                            name,
                            format!("does not fit in usize (got {self})"),
                        )
                    })
                }
            }
        )*
    };
}

impl_into_count!(unsigned: usize, u32, u64);
impl_into_count!(signed: i32, i64, isize);
