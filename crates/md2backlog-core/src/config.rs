//! Configuration for document conversion.

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Options for Markdown → Backlog conversion.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g., `indent-unit`). This naming
/// convention is part of the public API contract for config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConvertOptions {
    /// Number of literal space characters that count as one nesting level
    /// when a nested list line is indented with spaces. Tab-indented lines
    /// always nest one level per tab. Default: 2.
    pub indent_unit: usize,
}

impl ConvertOptions {
    /// Reject configurations the list pass cannot evaluate.
    ///
    /// A zero indent unit would make the space-indented nesting depth
    /// (`floor(spaces / indent_unit) + 1`) undefined.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.indent_unit == 0 {
            return Err(ConvertError::InvalidIndentUnit { value: 0 });
        }
        Ok(())
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { indent_unit: 2 }
    }
}
