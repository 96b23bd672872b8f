//! Ability definition loader.

use std::path::Path;

use combat_core::{AbilityDefinition, AbilityRegistry, StatRegistry};

use crate::loaders::{LoadResult, read_file};

/// Top-level shape of an ability definition file.
#[derive(Debug, serde::Deserialize)]
struct AbilitiesFile {
    abilities: Vec<AbilityDefinition>,
}

/// Loader for ability definitions from RON files.
///
/// Graph validation happens inside the registry constructor, so any dangling
/// node reference, unknown stat, or malformed parameter fails the load.
pub struct AbilityLoader;

impl AbilityLoader {
    /// Load an ability registry from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ability definitions
    /// * `stats` - Stat registry the definitions are validated against
    pub fn load(path: &Path, stats: &StatRegistry) -> LoadResult<AbilityRegistry> {
        let content = read_file(path)?;
        Self::from_ron(&content, stats)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    /// Load the bundled canonical ability set embedded in this crate.
    pub fn bundled(stats: &StatRegistry) -> LoadResult<AbilityRegistry> {
        Self::from_ron(include_str!("../../data/abilities.ron"), stats)
    }

    fn from_ron(source: &str, stats: &StatRegistry) -> LoadResult<AbilityRegistry> {
        let file: AbilitiesFile = ron::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse ability definitions: {}", e))?;
        Ok(AbilityRegistry::from_definitions(file.abilities, stats)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::StatLoader;
    use combat_core::AbilityId;

    #[test]
    fn bundled_abilities_load() {
        let stats = StatLoader::bundled().unwrap();
        let registry = AbilityLoader::bundled(&stats).expect("bundled abilities must load");

        assert!(registry.get(&AbilityId::from("ability.powerStrike")).is_some());
        assert!(
            registry
                .get(&AbilityId::from("ability.spiritBlessing"))
                .is_some()
        );
        assert!(registry.get(&AbilityId::from("ability.chaosBolt")).is_some());
    }

    #[test]
    fn dangling_successor_fails_to_load() {
        let stats = StatLoader::bundled().unwrap();
        let source = r#"(
            abilities: [
                (
                    id: "ability.broken",
                    name: "Broken",
                    summary: "",
                    graph: (
                        entryNodeId: "select",
                        nodes: [
                            (
                                id: "select",
                                kind: selectTargets((selector: primaryEnemy)),
                                next: ["missing"],
                            ),
                        ],
                    ),
                ),
            ],
        )"#;

        assert!(AbilityLoader::from_ron(source, &stats).is_err());
    }

    #[test]
    fn unknown_stat_reference_fails_to_load() {
        let stats = StatLoader::bundled().unwrap();
        let source = r#"(
            abilities: [
                (
                    id: "ability.broken",
                    name: "Broken",
                    summary: "",
                    graph: (
                        entryNodeId: "select",
                        nodes: [
                            (
                                id: "select",
                                kind: selectTargets((selector: primaryEnemy)),
                                next: ["hit"],
                            ),
                            (
                                id: "hit",
                                kind: dealDamage((
                                    baseDamage: 5.0,
                                    scaling: Some((stat: "stat.doesNotExist", multiplier: 1.0)),
                                )),
                            ),
                        ],
                    ),
                ),
            ],
        )"#;

        assert!(AbilityLoader::from_ron(source, &stats).is_err());
    }

    #[test]
    fn negative_duration_fails_to_load() {
        let stats = StatLoader::bundled().unwrap();
        let source = r#"(
            abilities: [
                (
                    id: "ability.broken",
                    name: "Broken",
                    summary: "",
                    graph: (
                        entryNodeId: "select",
                        nodes: [
                            (
                                id: "select",
                                kind: selectTargets((selector: allAllies)),
                                next: ["curse"],
                            ),
                            (
                                id: "curse",
                                kind: applyState((state: "state.cursed", durationSeconds: -1.0)),
                            ),
                        ],
                    ),
                ),
            ],
        )"#;

        assert!(AbilityLoader::from_ron(source, &stats).is_err());
    }
}
