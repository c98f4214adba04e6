//! Bounded materialization: the boundary between lazy sequences and strict
//! consumers such as printing and assertions.

use crate::error::SeqError;
use crate::extent::{Extent, IntoCount};
use crate::seq::Seq;

/// Up to `count` elements of `seq`, starting at `offset`.
///
/// Equivalent to `seq.drop(offset)?.take(count)?.to_list()`. Always safe on
/// infinite sequences, since the result is bounded by `count`.
pub fn slice<T: 'static>(
    seq: &Seq<T>,
    offset: impl IntoCount,
    count: impl IntoCount,
) -> Result<Vec<T>, SeqError> {
    let offset = offset.into_count("offset")?;
    let count = count.into_count("count")?;
    tracing::trace!(offset, count, extent = %seq.extent(), "slicing sequence");

    seq.drop(offset)?.take(count)?.to_list()
}

impl<T: 'static> Seq<T> {
    /// Up to `count` elements starting at `offset`. See [`slice`].
    pub fn slice(&self, offset: impl IntoCount, count: impl IntoCount) -> Result<Vec<T>, SeqError> {
        slice(self, offset, count)
    }
}

/// Materializes sequences under an optional element ceiling.
///
/// A sequence whose extent is [`Extent::Unknown`] may be arbitrarily long.
/// With a limit set, at most `limit + 1` elements are ever pulled and going
/// past the limit fails with [`SeqError::LimitExceeded`] instead of growing
/// without bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Materializer {
    limit: Option<usize>,
}

impl Materializer {
    /// A materializer with no ceiling; behaves like [`Seq::to_list`].
    pub fn unbounded() -> Self {
        Self { limit: None }
    }

    /// A materializer that refuses to produce more than `limit` elements.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }

    /// The configured ceiling, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Collects every element of `seq`, subject to the ceiling.
    pub fn collect<T: 'static>(&self, seq: &Seq<T>) -> Result<Vec<T>, SeqError> {
        let Some(limit) = self.limit else {
            return seq.to_list();
        };

        match seq.extent() {
            Extent::Infinite => Err(SeqError::invalid_operation(
                "materialize",
                Extent::Infinite,
            )),
            Extent::Exact(n) if n > limit => Err(SeqError::LimitExceeded { limit }),
            Extent::Exact(_) => seq.to_list(),
            Extent::AtMost(_) | Extent::Unknown => {
                let out: Vec<T> = seq.cursor().take(limit.saturating_add(1)).collect();
                if out.len() > limit {
                    tracing::debug!(limit, "materialization ceiling reached");
                    return Err(SeqError::LimitExceeded { limit });
                }
                Ok(out)
            }
        }
    }

    /// Like [`slice`], but `count` may not exceed the ceiling.
    pub fn slice<T: 'static>(
        &self,
        seq: &Seq<T>,
        offset: impl IntoCount,
        count: impl IntoCount,
    ) -> Result<Vec<T>, SeqError> {
        let count = count.into_count("count")?;
        if let Some(limit) = self.limit {
            if count > limit {
                return Err(SeqError::LimitExceeded { limit });
            }
        }
        slice(seq, offset, count)
    }
}
