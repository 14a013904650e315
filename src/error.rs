//! Map compilation errors.

use thiserror::Error;

/// Errors raised while compiling a document's map blocks.
///
/// Only payload-level failures surface here. Missing or mistyped fields
/// inside a payload fall back to defaults and never produce an error.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("invalid map config in `{widget_id}`: {source}")]
    ConfigParse {
        widget_id: String,
        #[source]
        source: serde_json::Error,
    },
}

impl MapError {
    /// Widget identifier of the block that failed.
    pub fn widget_id(&self) -> &str {
        match self {
            Self::ConfigParse { widget_id, .. } => widget_id,
        }
    }
}
