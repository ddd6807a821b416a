//! In-transit inventory ledger for Waybill.
//!
//! This crate is the heart of Waybill. It provides:
//! - [`Entry`] — one (item id, count, last-update tick) record with a fixed
//!   binary layout
//! - [`Ledger`] — the per-world collection of entries, ordered by insertion
//!   and uniquely indexed by item id
//! - The versioned binary codec and the decode-time merge-on-duplicate policy
//! - [`migrate`] — the pure schema-migration step applied per decoded entry
//!
//! Everything here is a pure in-memory transformation over `Read`/`Write`
//! streams; filesystem I/O lives in `wb-store`.
//!
//! # On-disk format
//!
//! All integers little-endian:
//!
//! ```text
//! ledger := version:i32, seed:i32, entry_count:i32, entry[entry_count]
//! entry  := item_id:i32, count:i32, last_updated:i64
//! ```
//!
//! No magic number, no checksum, no framing beyond `entry_count`.

pub mod codec;
pub mod entry;
pub mod error;
pub mod ledger;
pub mod migrate;

pub use entry::Entry;
pub use error::{LedgerError, LedgerResult};
pub use ledger::{Ledger, RemoveOutcome};
pub use migrate::migrate;
