//! Per-entry schema migration applied during decode.
//!
//! Kept as a pure function so version-specific logic stays out of the merge
//! and I/O paths; a future schema bump adds a branch here and nothing else.

use wb_types::{Tick, VERSION_1};

use crate::entry::Entry;

/// Apply the migration for `version` to one freshly decoded entry.
///
/// Version 1 files carry meaningless `last_updated` values, so every entry
/// is restamped with the current tick. Every other version, including
/// reserved future ones, passes through unchanged.
///
/// This runs on the raw decoded entry before the merge-on-duplicate
/// decision. When a duplicate is discarded by the merge, its restamped tick
/// is discarded with it and the surviving entry keeps the tick it was given
/// on its own decode. That matches the behavior of existing save files and
/// is deliberate; see `Ledger::decode`.
pub fn migrate(version: i32, mut entry: Entry, now: Tick) -> Entry {
    if version == VERSION_1 {
        entry.last_updated = now;
    }
    entry
}

#[cfg(test)]
mod tests {
    use wb_types::{ItemId, VERSION_2};

    use super::*;

    #[test]
    fn version_1_restamps_last_updated() {
        let entry = Entry::new(ItemId(7), 3, Tick(123));
        let migrated = migrate(VERSION_1, entry, Tick(9000));
        assert_eq!(migrated.last_updated, Tick(9000));
        assert_eq!(migrated.count, 3);
    }

    #[test]
    fn version_2_is_identity() {
        let entry = Entry::new(ItemId(7), 3, Tick(123));
        assert_eq!(migrate(VERSION_2, entry.clone(), Tick(9000)), entry);
    }

    #[test]
    fn future_versions_are_identity() {
        let entry = Entry::new(ItemId(7), 3, Tick(123));
        assert_eq!(migrate(17, entry.clone(), Tick(9000)), entry);
    }
}
