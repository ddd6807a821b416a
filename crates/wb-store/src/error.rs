use std::io;
use std::path::PathBuf;

use wb_ledger::LedgerError;

/// Internal store failures.
///
/// These never cross the public `load`/`save` boundary; they exist so the
/// fallback policy can be applied in one place, with the cause logged.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("another writer holds {path}")]
    Locked { path: PathBuf },

    #[error(transparent)]
    Codec(#[from] LedgerError),
}

/// Result alias for internal store plumbing.
pub type StoreResult<T> = Result<T, StoreError>;
