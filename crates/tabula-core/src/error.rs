//! Error types for the clustering core.
//!
//! Uses [`thiserror`] for error derivation. Every failure is a precondition
//! violation surfaced synchronously at the call site; no operation leaves a
//! partial mutation behind when it returns an error.

use thiserror::Error;

/// Errors raised by layout operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A text-element operation received an entity of another kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Kind the operation requires.
        expected: &'static str,
        /// Kind that was supplied.
        found: &'static str,
    },

    /// A statistic or construction is undefined for the given geometry.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

/// Result alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
