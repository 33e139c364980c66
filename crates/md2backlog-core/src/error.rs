//! Error types for document conversion.

use thiserror::Error;

/// The pipeline itself is total over arbitrary text; the only failure mode
/// is configuration-side, caught before any pass runs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("indent unit must be at least 1 space per nesting level (got {value})")]
    InvalidIndentUnit { value: usize },
}
