use std::io;

/// Errors produced while decoding or encoding ledger bytes.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("save data ended early while reading {field}")]
    UnexpectedEof { field: &'static str },

    #[error("i/o error while reading {field}: {source}")]
    Read {
        field: &'static str,
        source: io::Error,
    },

    #[error("i/o error while writing ledger: {0}")]
    Write(#[from] io::Error),
}

/// Result alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
