use std::collections::HashMap;
use std::fmt;
use std::io::{Read, Write};

use tracing::{debug, warn};
use wb_types::{GameClock, ItemCatalog, ItemId, WorldId, CURRENT_VERSION, VERSION_1, VERSION_2};

use crate::codec::{read_i32, write_i32};
use crate::entry::Entry;
use crate::error::LedgerResult;
use crate::migrate::migrate;

/// The per-world ledger of in-transit items.
///
/// Entries live in an insertion-ordered arena (`Vec<Entry>`, which is also
/// the persisted order) with an item-id → slot index alongside. Both
/// structures are private and every mutation goes through methods that
/// update the pair together, so they cannot diverge.
pub struct Ledger {
    /// Schema version. Non-decreasing for the life of the object; a file is
    /// never written back with a lower version than it was read with.
    version: i32,
    /// The world this ledger belongs to. Immutable; also picks the file name.
    seed: WorldId,
    entries: Vec<Entry>,
    index: HashMap<ItemId, usize>,
}

/// What [`Ledger::remove`] actually did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The entry was tracked and has been removed.
    Removed(Entry),
    /// No entry existed for the item id; the call was a no-op.
    NotTracked,
}

impl Ledger {
    /// An empty ledger at the current schema version.
    ///
    /// This is also the fallback shape returned when a save file cannot be
    /// decoded.
    pub fn new(seed: WorldId) -> Self {
        Self {
            version: CURRENT_VERSION,
            seed,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// An empty ledger at schema version 1.
    ///
    /// Brand-new worlds are persisted at version 1; the file is promoted to
    /// the current version the first time it is decoded.
    pub fn bootstrap(seed: WorldId) -> Self {
        Self {
            version: VERSION_1,
            ..Self::new(seed)
        }
    }

    /// The schema version this ledger will be written with.
    pub fn version(&self) -> i32 {
        self.version
    }

    /// The world this ledger belongs to.
    pub fn seed(&self) -> WorldId {
        self.seed
    }

    /// Number of tracked entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by item id.
    pub fn get(&self, item_id: ItemId) -> Option<&Entry> {
        self.index.get(&item_id).map(|&slot| &self.entries[slot])
    }

    /// Returns `true` if an entry exists for the item id.
    pub fn contains(&self, item_id: ItemId) -> bool {
        self.index.contains_key(&item_id)
    }

    /// Entries in insertion order, which is also the persisted order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Insert an entry, replacing any existing entry for the same item id.
    ///
    /// A replacement keeps the original entry's position in the persisted
    /// order; the displaced entry is returned.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        match self.index.get(&entry.item_id) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot], entry)),
            None => {
                self.index.insert(entry.item_id, self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    /// Remove the entry for `item_id`.
    ///
    /// Removing an untracked id is not an error: it is reported on the
    /// warning channel and the call is a no-op, so removing the same entry
    /// twice is safe.
    pub fn remove(&mut self, item_id: ItemId) -> RemoveOutcome {
        match self.index.remove(&item_id) {
            Some(slot) => {
                let entry = self.entries.remove(slot);
                for idx in self.index.values_mut() {
                    if *idx > slot {
                        *idx -= 1;
                    }
                }
                RemoveOutcome::Removed(entry)
            }
            None => {
                warn!(
                    item_id = item_id.raw(),
                    seed = self.seed.raw(),
                    "remove requested for an item id the ledger does not track"
                );
                RemoveOutcome::NotTracked
            }
        }
    }

    /// Decode a ledger from `reader`.
    ///
    /// Reads the `version, seed, entry_count` header and then `entry_count`
    /// entries. Each raw decoded entry is passed through [`migrate`] before
    /// the merge decision:
    ///
    /// - new item id: the entry is inserted;
    /// - duplicate item id: its count is added to the surviving entry and
    ///   the decoded entry is dropped, taking its (possibly restamped)
    ///   `last_updated` with it. The survivor keeps its own timestamp. This
    ///   ordering is load-bearing for compatibility with files written by
    ///   earlier releases; do not migrate after merging.
    ///
    /// A version 1 ledger is promoted to version 2 after all entries are
    /// read. Versions above 2 are reserved and pass through untouched.
    pub fn decode<R, C, K>(reader: &mut R, catalog: &C, clock: &K) -> LedgerResult<Self>
    where
        R: Read,
        C: ItemCatalog,
        K: GameClock,
    {
        let version = read_i32(reader, "ledger.version")?;
        let seed = WorldId(read_i32(reader, "ledger.seed")?);
        let entry_count = read_i32(reader, "ledger.entry_count")?;
        debug!(version, seed = seed.raw(), entry_count, "decoding ledger");

        let mut ledger = Self {
            version,
            seed,
            entries: Vec::new(),
            index: HashMap::new(),
        };
        let now = clock.current_tick();

        // A negative count decodes like zero entries, as the original
        // format's reader treated it.
        for _ in 0..entry_count.max(0) {
            let decoded = Entry::decode(reader, catalog)?;
            let decoded = migrate(ledger.version, decoded, now);

            match ledger.index.get(&decoded.item_id) {
                Some(&slot) => {
                    let survivor = &mut ledger.entries[slot];
                    warn!(
                        item_id = decoded.item_id.raw(),
                        "duplicate ledger entries for one item id, combining counts"
                    );
                    // Wrapping matches the unchecked arithmetic of the
                    // format's originating runtime.
                    survivor.count = survivor.count.wrapping_add(decoded.count);
                }
                None => {
                    ledger.index.insert(decoded.item_id, ledger.entries.len());
                    ledger.entries.push(decoded);
                }
            }
        }

        if ledger.version < VERSION_2 {
            ledger.version = VERSION_2;
            debug!(from = version, to = VERSION_2, "migrated ledger version");
        }

        Ok(ledger)
    }

    /// Encode this ledger: header, then entries in insertion order.
    pub fn encode<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        write_i32(writer, self.version)?;
        write_i32(writer, self.seed.raw())?;
        write_i32(writer, self.entries.len() as i32)?;

        for entry in &self.entries {
            entry.encode(writer)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("version", &self.version)
            .field("seed", &self.seed)
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "version={}, seed={}, entries={}",
            self.version,
            self.seed,
            self.entries.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use wb_types::{EmptyCatalog, FixedClock, StaticCatalog, Tick};

    use super::*;

    fn encoded(version: i32, seed: i32, entries: &[(i32, i32, i64)]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&version.to_le_bytes());
        bytes.extend_from_slice(&seed.to_le_bytes());
        bytes.extend_from_slice(&(entries.len() as i32).to_le_bytes());
        for &(id, count, tick) in entries {
            bytes.extend_from_slice(&id.to_le_bytes());
            bytes.extend_from_slice(&count.to_le_bytes());
            bytes.extend_from_slice(&tick.to_le_bytes());
        }
        bytes
    }

    fn decode(bytes: &[u8], tick: i64) -> LedgerResult<Ledger> {
        Ledger::decode(&mut &bytes[..], &EmptyCatalog, &FixedClock::at(tick))
    }

    #[test]
    fn empty_ledger_round_trips() {
        let ledger = Ledger::new(WorldId(42));
        let mut bytes = Vec::new();
        ledger.encode(&mut bytes).unwrap();

        let decoded = decode(&bytes, 0).unwrap();
        assert_eq!(decoded.version(), CURRENT_VERSION);
        assert_eq!(decoded.seed(), WorldId(42));
        assert!(decoded.is_empty());
    }

    #[test]
    fn duplicate_item_ids_merge_by_addition() {
        let bytes = encoded(2, 7, &[(1101, 30, 100), (1101, 12, 999), (1102, 5, 50)]);
        let ledger = decode(&bytes, 0).unwrap();

        assert_eq!(ledger.len(), 2);
        let merged = ledger.get(ItemId(1101)).unwrap();
        assert_eq!(merged.count, 42);
        assert_eq!(ledger.get(ItemId(1102)).unwrap().count, 5);
    }

    #[test]
    fn merge_survivor_keeps_its_own_timestamp() {
        let bytes = encoded(2, 7, &[(1101, 30, 100), (1101, 12, 999)]);
        let ledger = decode(&bytes, 0).unwrap();

        // The duplicate's later timestamp is dropped with it.
        assert_eq!(ledger.get(ItemId(1101)).unwrap().last_updated, Tick(100));
    }

    #[test]
    fn version_1_is_promoted_and_entries_restamped() {
        let bytes = encoded(1, 7, &[(1101, 30, 100), (1102, 5, 50)]);
        let ledger = decode(&bytes, 12345).unwrap();

        assert_eq!(ledger.version(), VERSION_2);
        for entry in ledger.iter() {
            assert_eq!(entry.last_updated, Tick(12345));
        }
    }

    #[test]
    fn version_1_duplicates_still_merge_counts() {
        let bytes = encoded(1, 7, &[(1101, 30, 100), (1101, 12, 999)]);
        let ledger = decode(&bytes, 12345).unwrap();

        let merged = ledger.get(ItemId(1101)).unwrap();
        assert_eq!(merged.count, 42);
        assert_eq!(merged.last_updated, Tick(12345));
    }

    #[test]
    fn future_versions_pass_through_unmigrated() {
        let bytes = encoded(9, 7, &[(1101, 30, 100)]);
        let ledger = decode(&bytes, 12345).unwrap();

        assert_eq!(ledger.version(), 9);
        assert_eq!(ledger.get(ItemId(1101)).unwrap().last_updated, Tick(100));
    }

    #[test]
    fn truncated_entry_list_is_an_error() {
        let mut bytes = encoded(2, 7, &[(1101, 30, 100)]);
        // Claim two entries but provide one.
        bytes[8..12].copy_from_slice(&2i32.to_le_bytes());

        assert!(decode(&bytes, 0).is_err());
    }

    #[test]
    fn negative_entry_count_decodes_as_empty() {
        let mut bytes = encoded(2, 7, &[]);
        bytes[8..12].copy_from_slice(&(-3i32).to_le_bytes());

        let ledger = decode(&bytes, 0).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn decode_resolves_names_for_display() {
        let mut catalog = StaticCatalog::new();
        catalog.insert(ItemId(1101), "iron ingot");

        let bytes = encoded(2, 7, &[(1101, 30, 100)]);
        let ledger =
            Ledger::decode(&mut &bytes[..], &catalog, &FixedClock::at(0)).unwrap();
        assert_eq!(ledger.get(ItemId(1101)).unwrap().item_name, "iron ingot");
    }

    #[test]
    fn remove_is_idempotent() {
        let bytes = encoded(2, 7, &[(1101, 30, 100), (1102, 5, 50)]);
        let mut ledger = decode(&bytes, 0).unwrap();

        let first = ledger.remove(ItemId(1101));
        assert!(matches!(first, RemoveOutcome::Removed(_)));
        assert_eq!(ledger.remove(ItemId(1101)), RemoveOutcome::NotTracked);

        assert_eq!(ledger.len(), 1);
        assert!(ledger.get(ItemId(1102)).is_some());
    }

    #[test]
    fn remove_keeps_index_and_order_in_sync() {
        let bytes = encoded(2, 7, &[(1, 10, 0), (2, 20, 0), (3, 30, 0)]);
        let mut ledger = decode(&bytes, 0).unwrap();

        ledger.remove(ItemId(1));
        assert_eq!(ledger.get(ItemId(3)).unwrap().count, 30);

        let order: Vec<i32> = ledger.iter().map(|e| e.item_id.raw()).collect();
        assert_eq!(order, vec![2, 3]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut ledger = Ledger::new(WorldId(1));
        ledger.insert(Entry::new(ItemId(1), 10, Tick(0)));
        ledger.insert(Entry::new(ItemId(2), 20, Tick(0)));

        let displaced = ledger.insert(Entry::new(ItemId(1), 99, Tick(5)));
        assert_eq!(displaced.unwrap().count, 10);

        let order: Vec<i32> = ledger.iter().map(|e| e.item_id.raw()).collect();
        assert_eq!(order, vec![1, 2]);
        assert_eq!(ledger.get(ItemId(1)).unwrap().count, 99);
    }

    proptest! {
        #[test]
        fn round_trip_preserves_everything(
            seed in any::<i32>(),
            raw in proptest::collection::hash_map(
                any::<i32>(),
                (any::<i32>(), any::<i64>()),
                0..16,
            ),
        ) {
            let mut ledger = Ledger::new(WorldId(seed));
            for (id, (count, tick)) in raw {
                ledger.insert(Entry::new(ItemId(id), count, Tick(tick)));
            }

            let mut bytes = Vec::new();
            ledger.encode(&mut bytes).unwrap();
            let decoded = decode(&bytes, 0).unwrap();

            prop_assert_eq!(decoded.version(), ledger.version());
            prop_assert_eq!(decoded.seed(), ledger.seed());
            prop_assert_eq!(decoded.entries(), ledger.entries());
        }
    }
}
