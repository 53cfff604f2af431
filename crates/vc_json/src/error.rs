use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Errors produced at the text boundary.
///
/// Field-level mismatches are never reported here, a reader simply
/// leaves the target untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JsonError {
    #[error("malformed json document: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to encode json value: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("json writer finished with {open} scope(s) still open")]
    Unbalanced { open: usize },
}
