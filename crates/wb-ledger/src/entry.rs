use std::fmt;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use wb_types::{ItemCatalog, ItemId, Tick};

use crate::codec::{read_i32, read_i64, write_i32, write_i64};
use crate::error::LedgerResult;

/// One ledger line: an item in transit, its quantity, and when it was last
/// touched.
///
/// Binary layout (little-endian): `item_id:i32, count:i32, last_updated:i64`.
/// The display name is resolved from the host catalog at decode time and is
/// never written back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// External catalog identifier; unique within a ledger.
    pub item_id: ItemId,
    /// Quantity in transit. Duplicate decode merges by addition.
    pub count: i32,
    /// Tick of the last update, from the host clock.
    pub last_updated: Tick,
    /// Display name; empty when the catalog could not resolve the id.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub item_name: String,
}

impl Entry {
    /// Create an entry with an unresolved name.
    pub fn new(item_id: ItemId, count: i32, last_updated: Tick) -> Self {
        Self {
            item_id,
            count,
            last_updated,
            item_name: String::new(),
        }
    }

    /// Decode one entry from `reader`, resolving its display name.
    ///
    /// A catalog miss is not an error; the name stays empty.
    pub fn decode<R: Read>(reader: &mut R, catalog: &impl ItemCatalog) -> LedgerResult<Self> {
        let item_id = ItemId(read_i32(reader, "entry.item_id")?);
        let count = read_i32(reader, "entry.count")?;
        let last_updated = Tick(read_i64(reader, "entry.last_updated")?);

        let item_name = catalog.item_name(item_id).unwrap_or_default();

        Ok(Self {
            item_id,
            count,
            last_updated,
            item_name,
        })
    }

    /// Encode this entry. The name is display-only and is not written.
    pub fn encode<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        write_i32(writer, self.item_id.raw())?;
        write_i32(writer, self.count)?;
        write_i64(writer, self.last_updated.raw())?;
        Ok(())
    }

    /// Whole seconds since this entry was last updated, given the current
    /// tick. Unclamped: negative if the entry is from the caller's future.
    pub fn age_in_seconds(&self, current_tick: Tick) -> i64 {
        current_tick.seconds_since(self.last_updated)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.item_name.is_empty() {
            write!(f, "item {} x{}", self.item_id, self.count)
        } else {
            write!(f, "{} x{}", self.item_name, self.count)
        }
    }
}
