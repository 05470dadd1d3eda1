//! Error types for strict parsing of core values.
//!
//! The engine paths in `dhub-urn` never surface these; they degrade to
//! "unchanged" instead. `CoreError` is for callers that want validation at
//! their own boundaries (CLI arguments, config files).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// String is not shaped `urn:li:<type>:<id>`.
    #[error("Invalid URN '{urn}': {reason}")]
    InvalidUrn { urn: String, reason: String },

    /// Entity type outside the supported set.
    #[error("Unknown entity type: {0}")]
    UnknownEntityType(String),
}
