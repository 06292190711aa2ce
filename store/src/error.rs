//! Store-internal errors.
//!
//! Load and save failures never reach callers of the store's public
//! operations (they are logged and recovered locally); this error type only
//! plumbs the file round-trip internally.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid ledger JSON: {0}")]
    Json(#[from] serde_json::Error),
}
