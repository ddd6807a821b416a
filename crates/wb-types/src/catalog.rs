use std::collections::HashMap;

use crate::ids::ItemId;

/// Capability trait for the host's item catalog.
///
/// Resolves an item id to a human-readable name at decode time. Resolution
/// is best effort: names are display-only, never persisted, and a miss is
/// not an error.
pub trait ItemCatalog {
    /// The display name for `id`, or `None` if the catalog has no entry.
    fn item_name(&self, id: ItemId) -> Option<String>;
}

/// A catalog that resolves nothing. Decoded entries keep empty names.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyCatalog;

impl ItemCatalog for EmptyCatalog {
    fn item_name(&self, _id: ItemId) -> Option<String> {
        None
    }
}

/// A map-backed catalog for tests and offline tools.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    names: HashMap<ItemId, String>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name for an item id, replacing any previous name.
    pub fn insert(&mut self, id: ItemId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no names are registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(ItemId, String)> for StaticCatalog {
    fn from_iter<I: IntoIterator<Item = (ItemId, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl ItemCatalog for StaticCatalog {
    fn item_name(&self, id: ItemId) -> Option<String> {
        self.names.get(&id).cloned()
    }
}

impl<C: ItemCatalog + ?Sized> ItemCatalog for &C {
    fn item_name(&self, id: ItemId) -> Option<String> {
        (**self).item_name(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_catalog_resolves_registered_names() {
        let mut catalog = StaticCatalog::new();
        catalog.insert(ItemId(1101), "iron ingot");
        assert_eq!(catalog.item_name(ItemId(1101)).as_deref(), Some("iron ingot"));
        assert_eq!(catalog.item_name(ItemId(9999)), None);
    }

    #[test]
    fn empty_catalog_resolves_nothing() {
        assert_eq!(EmptyCatalog.item_name(ItemId(1101)), None);
    }
}
