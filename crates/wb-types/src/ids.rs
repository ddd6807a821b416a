use std::fmt;

use serde::{Deserialize, Serialize};

/// External catalog identifier for a tracked good.
///
/// Item ids are assigned by the host's item catalog; Waybill treats them as
/// opaque. Within one [ledger](crate) at most one entry exists per `ItemId`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i32);

impl ItemId {
    /// The raw signed 32-bit value written to disk.
    pub fn raw(&self) -> i32 {
        self.0
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ItemId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

/// Logical world/save identifier.
///
/// Stored in the save-file header as the `seed` field and embedded in the
/// save-file name, so one file exists per world.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldId(pub i32);

impl WorldId {
    /// The raw signed 32-bit value written to disk.
    pub fn raw(&self) -> i32 {
        self.0
    }
}

impl fmt::Debug for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WorldId({})", self.0)
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for WorldId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}
