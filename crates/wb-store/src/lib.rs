//! Save-file store for Waybill.
//!
//! The store owns the load/save lifecycle and is the only Waybill crate
//! that touches the filesystem. It resolves one save file per world under a
//! configured root, bootstraps fresh ledgers for worlds that have never
//! been saved, and absorbs every I/O and decode failure into a usable
//! fallback ledger.
//!
//! # Failure policy
//!
//! `load` and `save` never return `Err`. The host calls them from its game
//! loop and must keep running with whatever ledger it gets, so failures are
//! logged at `warn!` and reported through [`LoadOutcome`] / [`SaveOutcome`]
//! instead of being propagated. A missing file is not a failure: the store
//! creates and persists a fresh version-1 ledger. A corrupt or unreadable
//! file degrades to an empty ledger at the current version, trading silent
//! data loss for availability.

pub mod config;
pub mod error;
pub mod store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use store::{LoadOutcome, SaveOutcome, SaveStore};
