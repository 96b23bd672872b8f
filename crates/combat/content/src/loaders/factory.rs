//! Content factory for building registries from data files.

use std::path::{Path, PathBuf};

use combat_core::{AbilityRegistry, StatRegistry};

use crate::loaders::{AbilityLoader, LoadResult, StatLoader};

/// Builds both registries from the bundled canonical definition set.
///
/// This is the default content used by the service when no data directory
/// override is configured.
pub fn bundled_registries() -> LoadResult<(StatRegistry, AbilityRegistry)> {
    let stats = StatLoader::bundled()?;
    let abilities = AbilityLoader::bundled(&stats)?;
    Ok((stats, abilities))
}

/// Content factory that loads combat definitions from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── stats.ron
/// └── abilities.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing definition files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the stat registry from `stats.ron`.
    pub fn load_stats(&self) -> LoadResult<StatRegistry> {
        let path = self.data_dir.join("stats.ron");
        StatLoader::load(&path)
    }

    /// Load the ability registry from `abilities.ron`.
    ///
    /// # Arguments
    ///
    /// * `stats` - Stat registry the definitions are validated against
    ///   (load via `load_stats()`)
    pub fn load_abilities(&self, stats: &StatRegistry) -> LoadResult<AbilityRegistry> {
        let path = self.data_dir.join("abilities.ron");
        AbilityLoader::load(&path, stats)
    }

    /// Load both registries in dependency order.
    pub fn load_registries(&self) -> LoadResult<(StatRegistry, AbilityRegistry)> {
        let stats = self.load_stats()?;
        let abilities = self.load_abilities(&stats)?;
        Ok((stats, abilities))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
