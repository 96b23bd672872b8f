//! Stat definitions and the stat registry.
//!
//! The registry holds the canonical stat identifiers referenced by ability
//! effect nodes. It is built once from static definition data at startup and
//! is read-only afterwards. Effect nodes are validated against it at
//! ability-registry load time; at execution time the executor reads raw stat
//! values straight from participant snapshots (missing values read as 0).

use std::collections::HashMap;
use std::fmt;

use crate::error::{EngineError, ErrorSeverity};

/// Unique identifier of a stat (e.g. `stat.attackPower`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatId(pub String);

impl StatId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StatId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for StatId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ============================================================================
// Stat Definition
// ============================================================================

/// Resolution metadata for a stat whose baseline follows another stat.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DerivedFrom {
    /// Source stat the baseline is derived from.
    pub stat: StatId,

    /// Factor applied to the source stat's default value.
    pub factor: f64,
}

/// Canonical description of one stat. Immutable after registry load.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StatDefinition {
    /// Globally unique stat identifier.
    pub id: StatId,

    /// Display name.
    pub name: String,

    /// Baseline value for participants that do not carry the stat explicitly.
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_value: f64,

    /// Optional single-level derivation rule for the baseline.
    #[cfg_attr(feature = "serde", serde(default))]
    pub derived_from: Option<DerivedFrom>,
}

// ============================================================================
// Stat Registry
// ============================================================================

/// Registry mapping stat ids to their definitions.
///
/// Constructed once from static definition data; read-only for the process
/// lifetime and safely shared across concurrent executions.
#[derive(Clone, Debug)]
pub struct StatRegistry {
    definitions: HashMap<StatId, StatDefinition>,
}

impl StatRegistry {
    /// Builds a registry from a definition list.
    ///
    /// Fails fast on duplicate ids or derivation rules naming unknown stats;
    /// a failure here must block service startup.
    pub fn from_definitions(
        definitions: Vec<StatDefinition>,
    ) -> Result<Self, StatRegistryError> {
        let mut map = HashMap::with_capacity(definitions.len());
        for definition in definitions {
            let id = definition.id.clone();
            if map.insert(id.clone(), definition).is_some() {
                return Err(StatRegistryError::DuplicateStat(id));
            }
        }

        // Derivation targets may be declared in any order, so check them after
        // the full map is built.
        for definition in map.values() {
            if let Some(derived) = &definition.derived_from {
                if !map.contains_key(&derived.stat) {
                    return Err(StatRegistryError::UnknownDerivedStat {
                        stat: definition.id.clone(),
                        source_stat: derived.stat.clone(),
                    });
                }
            }
        }

        tracing::info!(stats = map.len(), "stat registry loaded");
        Ok(Self { definitions: map })
    }

    /// Returns the definition for a stat id, if registered.
    pub fn get(&self, id: &StatId) -> Option<&StatDefinition> {
        self.definitions.get(id)
    }

    /// Returns true if the stat id is registered.
    pub fn contains(&self, id: &StatId) -> bool {
        self.definitions.contains_key(id)
    }

    /// Resolves the baseline value of a stat.
    ///
    /// A derived stat resolves as `source.default_value * factor` (one level;
    /// chained derivations intentionally do not recurse). Unknown ids resolve
    /// to 0, matching the executor's missing-stat behavior.
    pub fn default_value(&self, id: &StatId) -> f64 {
        match self.get(id) {
            Some(definition) => match &definition.derived_from {
                Some(derived) => {
                    let source = self
                        .get(&derived.stat)
                        .map(|d| d.default_value)
                        .unwrap_or(0.0);
                    source * derived.factor
                }
                None => definition.default_value,
            },
            None => 0.0,
        }
    }

    /// Returns an iterator over all registered stat ids.
    pub fn ids(&self) -> impl Iterator<Item = &StatId> {
        self.definitions.keys()
    }

    /// Returns the number of registered stats.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if no stats are registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while building the stat registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatRegistryError {
    /// Two definitions share the same id.
    #[error("duplicate stat definition `{0}`")]
    DuplicateStat(StatId),

    /// A derivation rule names a stat that is not in the definition set.
    #[error("stat `{stat}` derives from unknown stat `{source_stat}`")]
    UnknownDerivedStat { stat: StatId, source_stat: StatId },
}

impl EngineError for StatRegistryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateStat(_) => "STAT_REGISTRY_DUPLICATE_STAT",
            Self::UnknownDerivedStat { .. } => "STAT_REGISTRY_UNKNOWN_DERIVED_STAT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(id: &str, default_value: f64) -> StatDefinition {
        StatDefinition {
            id: StatId::from(id),
            name: id.to_owned(),
            default_value,
            derived_from: None,
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result =
            StatRegistry::from_definitions(vec![stat("stat.magic", 1.0), stat("stat.magic", 2.0)]);

        assert_eq!(
            result.unwrap_err(),
            StatRegistryError::DuplicateStat(StatId::from("stat.magic"))
        );
    }

    #[test]
    fn unknown_derivation_source_is_rejected() {
        let mut derived = stat("stat.spellResist", 0.0);
        derived.derived_from = Some(DerivedFrom {
            stat: StatId::from("stat.missing"),
            factor: 0.5,
        });

        let result = StatRegistry::from_definitions(vec![derived]);
        assert!(matches!(
            result,
            Err(StatRegistryError::UnknownDerivedStat { .. })
        ));
    }

    #[test]
    fn default_value_resolves_one_derivation_level() {
        let mut derived = stat("stat.spellResist", 0.0);
        derived.derived_from = Some(DerivedFrom {
            stat: StatId::from("stat.magic"),
            factor: 0.5,
        });

        let registry =
            StatRegistry::from_definitions(vec![stat("stat.magic", 10.0), derived]).unwrap();

        assert_eq!(registry.default_value(&StatId::from("stat.magic")), 10.0);
        assert_eq!(registry.default_value(&StatId::from("stat.spellResist")), 5.0);
        assert_eq!(registry.default_value(&StatId::from("stat.missing")), 0.0);
    }
}
