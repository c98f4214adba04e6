//! Error types for sequence construction and materialization.

use crate::extent::Extent;

/// Errors raised by sequence operations.
///
/// All of them are raised eagerly at the point of misuse. Non-termination
/// (filtering or folding an unbounded sequence whose length cannot be
/// established) is not represented here: it cannot be detected at runtime
/// and bounding such traversals with [`crate::Seq::take`] is the caller's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// A parameter was malformed (negative count, empty cycle source).
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A strict, full traversal was requested on a sequence that never ends.
    #[error("cannot {operation} a sequence with {extent} extent; bound it with `take` first")]
    InvalidOperation {
        operation: &'static str,
        extent: Extent,
    },

    /// A [`crate::Materializer`] ceiling was hit.
    #[error("materialization limit of {limit} elements exceeded")]
    LimitExceeded { limit: usize },
}

impl SeqError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_operation(operation: &'static str, extent: Extent) -> Self {
        Self::InvalidOperation { operation, extent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_parameter() {
        let err = SeqError::invalid_argument("count", "must not be negative (got -3)");
        assert_eq!(
            err.to_string(),
            "invalid argument `count`: must not be negative (got -3)"
        );
    }

    #[test]
    fn invalid_operation_mentions_extent() {
        let err = SeqError::invalid_operation("materialize", Extent::Infinite);
        assert!(err.to_string().contains("infinite"));
        assert!(err.to_string().contains("take"));
    }
}
