//! Save-file schema versions.
//!
//! The version is the first field of every save file. Two versions exist:
//!
//! - version 1 predates per-entry timestamps being trustworthy; decoding a
//!   v1 file backfills every entry's `last_updated` with the current tick.
//! - version 2 is the current format; no transformation applies.
//!
//! Versions above [`CURRENT_VERSION`] are reserved. They decode without any
//! migration and are written back unchanged, so a newer producer's files
//! survive a round trip through an older reader.

/// The original schema, without reliable per-entry timestamps.
pub const VERSION_1: i32 = 1;

/// The current schema.
pub const VERSION_2: i32 = 2;

/// The version stamped on freshly constructed ledgers.
pub const CURRENT_VERSION: i32 = VERSION_2;
