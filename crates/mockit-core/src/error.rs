//! Error types for mockit
//!
//! Every failure the engine detects is local and recoverable. Errors are
//! reported through the owning test's [`TestContext`](crate::TestContext)
//! rather than unwinding the caller; the enums here carry the details and the
//! rendered message.

use crate::value::ValueType;
use std::fmt;

/// Which side of a signature an arity check concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Pattern or verification arguments
    Arguments,
    /// Mocked return values
    Results,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arguments => f.write_str("arguments"),
            Self::Results => f.write_str("return values"),
        }
    }
}

/// Main mock error type
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    /// Target handed to the constructor is not callable
    #[error("mock target must be a function, got {kind} value {rendered}")]
    NotCallable {
        /// Kind of the offending value
        kind: &'static str,
        /// Rendered offending value
        rendered: String,
    },

    /// Wrong number of arguments or return values
    #[error("wrong number of {position}: expected {expected}, got {got}")]
    ArityMismatch {
        /// Arguments or results
        position: Arity,
        /// Count required by the signature
        expected: usize,
        /// Count supplied
        got: usize,
    },

    /// Mocked return value not assignable to its result type
    #[error("return value {index} has the wrong type: expected {expected}, got {got}")]
    TypeMismatch {
        /// Result position
        index: usize,
        /// Declared result type
        expected: ValueType,
        /// Rendered supplied value
        got: String,
    },

    /// No logged call matches the verified arguments
    #[error("{mock} was never called with {args}{observed}")]
    VerificationMiss {
        /// Mock label
        mock: String,
        /// Rendered argument vector
        args: String,
        /// Rendered summary of observed calls (may be empty)
        observed: String,
    },

    /// The patcher could not redirect the target
    #[error("patch failed: {0}")]
    Patch(#[from] PatchError),
}

impl MockError {
    /// Check if error came from a rejected registration
    #[inline]
    #[must_use]
    pub fn is_registration(&self) -> bool {
        matches!(self, Self::ArityMismatch { .. } | Self::TypeMismatch { .. })
    }

    /// Check if error leaves no usable controller behind
    #[inline]
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NotCallable { .. } | Self::Patch(_))
    }
}

/// Patcher errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    /// Target already redirected by another patch
    #[error("function {name} is already patched")]
    AlreadyPatched {
        /// Function name
        name: String,
    },

    /// Patcher-specific failure
    #[error("cannot patch {name}: {reason}")]
    Unsupported {
        /// Function name
        name: String,
        /// Why the patcher refused
        reason: String,
    },
}
