//! Stat definition loader.

use std::path::Path;

use combat_core::{StatDefinition, StatRegistry};

use crate::loaders::{LoadResult, read_file};

/// Top-level shape of a stat definition file.
#[derive(Debug, serde::Deserialize)]
struct StatsFile {
    stats: Vec<StatDefinition>,
}

/// Loader for stat definitions from RON files.
pub struct StatLoader;

impl StatLoader {
    /// Load a stat registry from a RON file.
    pub fn load(path: &Path) -> LoadResult<StatRegistry> {
        let content = read_file(path)?;
        Self::from_ron(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    /// Load the bundled canonical stat set embedded in this crate.
    pub fn bundled() -> LoadResult<StatRegistry> {
        Self::from_ron(include_str!("../../data/stats.ron"))
    }

    fn from_ron(source: &str) -> LoadResult<StatRegistry> {
        let file: StatsFile = ron::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse stat definitions: {}", e))?;
        Ok(StatRegistry::from_definitions(file.stats)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::StatId;

    #[test]
    fn bundled_stats_load() {
        let registry = StatLoader::bundled().expect("bundled stats must load");

        assert!(registry.contains(&StatId::from("stat.attackPower")));
        assert!(registry.contains(&StatId::from("stat.defense")));
        assert!(registry.contains(&StatId::from("stat.magic")));
    }

    #[test]
    fn duplicate_stats_fail_to_load() {
        let source = r#"(
            stats: [
                (id: "stat.magic", name: "Magic"),
                (id: "stat.magic", name: "Magic Again"),
            ],
        )"#;

        assert!(StatLoader::from_ron(source).is_err());
    }

    #[test]
    fn derived_stats_resolve_their_baseline() {
        let registry = StatLoader::bundled().unwrap();

        // stat.spellResist derives from stat.magic at factor 0.5
        let baseline = registry.default_value(&StatId::from("stat.spellResist"));
        let magic = registry.default_value(&StatId::from("stat.magic"));
        assert!((baseline - magic * 0.5).abs() < 1e-12);
    }
}
