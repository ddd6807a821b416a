use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use fs2::FileExt;
use tracing::{debug, info, warn};
use wb_ledger::Ledger;
use wb_types::{GameClock, ItemCatalog, WorldId};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

/// Loads and saves per-world ledgers under a configured root directory.
///
/// All I/O is synchronous and blocking on the calling thread. The only
/// concurrency safeguard is an exclusive advisory lock taken for the
/// duration of each save; a concurrent load racing a save of the same file
/// may read short and will come back through the empty-ledger fallback.
pub struct SaveStore {
    config: StoreConfig,
}

/// How `load` produced its ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// An existing save file decoded cleanly.
    Loaded,
    /// No save file existed; a fresh version-1 ledger was created and
    /// persisted.
    Bootstrapped,
    /// The save file could not be read or decoded; an empty ledger at the
    /// current version stands in for it.
    RecoveredEmpty,
}

/// Whether `save` actually reached the disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The failure was logged and absorbed; the on-disk state is whatever
    /// it was before the call.
    Failed,
}

impl SaveStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The save-file path for `world`, creating the root directory if it
    /// does not exist yet.
    pub fn resolve_path(&self, world: WorldId) -> StoreResult<PathBuf> {
        fs::create_dir_all(&self.config.root)?;
        Ok(self.config.path_for(world))
    }

    /// Load the ledger for `world`. Never fails.
    ///
    /// A missing file bootstraps a fresh version-1 ledger and persists it
    /// before returning. Any other failure, from path resolution through
    /// decode, is logged and absorbed into an empty ledger carrying the
    /// requested world id; the outcome value is the only way to tell the
    /// paths apart.
    pub fn load<C, K>(&self, world: WorldId, catalog: &C, clock: &K) -> (Ledger, LoadOutcome)
    where
        C: ItemCatalog,
        K: GameClock,
    {
        debug!(world = world.raw(), "loading ledger");
        match self.try_load(world, catalog, clock) {
            Ok(loaded) => loaded,
            Err(err) => {
                warn!(
                    world = world.raw(),
                    error = %err,
                    "failed to load saved ledger, recovering with an empty one"
                );
                (Ledger::new(world), LoadOutcome::RecoveredEmpty)
            }
        }
    }

    /// Persist `ledger` to its world's save file. Never fails.
    ///
    /// The write takes an exclusive advisory lock, so a second writer on
    /// the same path gets [`SaveOutcome::Failed`] instead of interleaving.
    pub fn save(&self, ledger: &Ledger) -> SaveOutcome {
        match self.try_save(ledger) {
            Ok(()) => SaveOutcome::Saved,
            Err(err) => {
                warn!(
                    world = ledger.seed().raw(),
                    error = %err,
                    "failed to save ledger"
                );
                SaveOutcome::Failed
            }
        }
    }

    /// World ids that currently have a save file under the root.
    pub fn worlds(&self) -> StoreResult<Vec<WorldId>> {
        let mut worlds = Vec::new();
        for dir_entry in fs::read_dir(&self.config.root)? {
            if let Some(world) = self.config.world_of(&dir_entry?.path()) {
                worlds.push(world);
            }
        }
        worlds.sort();
        Ok(worlds)
    }

    fn try_load<C, K>(
        &self,
        world: WorldId,
        catalog: &C,
        clock: &K,
    ) -> StoreResult<(Ledger, LoadOutcome)>
    where
        C: ItemCatalog,
        K: GameClock,
    {
        let path = self.resolve_path(world)?;

        if !path.exists() {
            info!(world = world.raw(), path = %path.display(), "no save file, bootstrapping");
            let ledger = Ledger::bootstrap(world);
            // Fire and forget, like every other save.
            self.save(&ledger);
            return Ok((ledger, LoadOutcome::Bootstrapped));
        }

        let file = File::open(&path)?;
        let mut reader = BufReader::new(file);
        let ledger = Ledger::decode(&mut reader, catalog, clock)?;
        debug!(world = world.raw(), %ledger, "loaded ledger");
        Ok((ledger, LoadOutcome::Loaded))
    }

    fn try_save(&self, ledger: &Ledger) -> StoreResult<()> {
        let path = self.resolve_path(ledger.seed())?;

        let file = OpenOptions::new().write(true).create(true).open(&path)?;
        file.try_lock_exclusive()
            .map_err(|_| StoreError::Locked { path: path.clone() })?;
        // Truncate only once the lock is held; a contended save must leave
        // the previous contents untouched.
        file.set_len(0)?;

        let mut writer = BufWriter::new(file);
        ledger.encode(&mut writer)?;
        writer.flush()?;

        debug!(world = ledger.seed().raw(), path = %path.display(), "saved ledger");
        Ok(())
    }
}
