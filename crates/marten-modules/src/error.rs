//! Error types for table construction.

use thiserror::Error;

/// Error raised while freezing a built-in module table.
#[derive(Debug, Clone, Error)]
pub enum InittabError {
    /// An entry carried an empty module name.
    #[error("empty module name at table index {index}")]
    EmptyName {
        /// Position of the offending entry in insertion order.
        index: usize,
    },

    /// Two entries carried the same module name.
    #[error("duplicate built-in module name: {0}")]
    DuplicateName(String),
}
