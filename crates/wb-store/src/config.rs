use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wb_types::WorldId;

/// Where save files live and what they are called.
///
/// Built once at startup from the host's configuration and passed into
/// [`SaveStore`](crate::SaveStore); there is no process-global path cache.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the save files. Created on first access if absent.
    pub root: PathBuf,
    /// Naming scope for this host; files are named `<prefix>.<world>.save`.
    pub prefix: String,
}

impl StoreConfig {
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.into(),
        }
    }

    /// The file name for a world's ledger, without the root.
    pub fn file_name(&self, world: WorldId) -> String {
        format!("{}.{}.save", self.prefix, world)
    }

    /// The full path for a world's ledger.
    pub fn path_for(&self, world: WorldId) -> PathBuf {
        self.root.join(self.file_name(world))
    }

    /// If `path` names a save file under this config, the world id it
    /// belongs to.
    pub fn world_of(&self, path: &Path) -> Option<WorldId> {
        let name = path.file_name()?.to_str()?;
        let middle = name
            .strip_prefix(&self.prefix)?
            .strip_prefix('.')?
            .strip_suffix(".save")?;
        middle.parse::<i32>().ok().map(WorldId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_the_fixed_naming_pattern() {
        let config = StoreConfig::new("/saves", "PersonalLogistics");
        assert_eq!(
            config.path_for(WorldId(1444058024)),
            PathBuf::from("/saves/PersonalLogistics.1444058024.save")
        );
    }

    #[test]
    fn world_of_inverts_path_for() {
        let config = StoreConfig::new("/saves", "Waybill");
        let path = config.path_for(WorldId(-7));
        assert_eq!(config.world_of(&path), Some(WorldId(-7)));
    }

    #[test]
    fn world_of_rejects_foreign_files() {
        let config = StoreConfig::new("/saves", "Waybill");
        assert_eq!(config.world_of(Path::new("/saves/Other.1.save")), None);
        assert_eq!(config.world_of(Path::new("/saves/Waybill.x.save")), None);
        assert_eq!(config.world_of(Path::new("/saves/Waybill.1.bak")), None);
    }
}
