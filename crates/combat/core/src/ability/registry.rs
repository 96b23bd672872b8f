//! Ability registry.
//!
//! Maps ability ids to their immutable definitions. Built once from static
//! definition data at startup; every graph invariant is enforced here so the
//! executor never encounters a malformed graph.

use std::collections::HashMap;

use crate::error::{EngineError, ErrorSeverity};
use crate::stats::StatRegistry;

use super::definition::{AbilityDefinition, AbilityId, GraphError};

/// Registry mapping ability ids to their definitions.
///
/// Read-only for the process lifetime and safely shared across concurrent
/// executions.
#[derive(Clone, Debug)]
pub struct AbilityRegistry {
    definitions: HashMap<AbilityId, AbilityDefinition>,
}

impl AbilityRegistry {
    /// Builds a registry from a definition list.
    ///
    /// Every graph is validated against the stat registry (see
    /// [`AbilityGraph::validate`](super::AbilityGraph::validate)); duplicate
    /// ability ids are rejected. A failure here must block service startup.
    pub fn from_definitions(
        definitions: Vec<AbilityDefinition>,
        stats: &StatRegistry,
    ) -> Result<Self, RegistryError> {
        let mut map = HashMap::with_capacity(definitions.len());
        for definition in definitions {
            definition
                .graph
                .validate(stats)
                .map_err(|source| RegistryError::Graph {
                    ability: definition.id.clone(),
                    source,
                })?;

            let id = definition.id.clone();
            if map.insert(id.clone(), definition).is_some() {
                return Err(RegistryError::DuplicateAbility(id));
            }
        }

        tracing::info!(abilities = map.len(), "ability registry loaded");
        Ok(Self { definitions: map })
    }

    /// Returns the definition for an ability id, if registered.
    pub fn get(&self, id: &AbilityId) -> Option<&AbilityDefinition> {
        self.definitions.get(id)
    }

    /// Returns an iterator over all registered ability ids.
    pub fn ids(&self) -> impl Iterator<Item = &AbilityId> {
        self.definitions.keys()
    }

    /// Returns the number of registered abilities.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if no abilities are registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Errors raised while building the ability registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two definitions share the same id.
    #[error("duplicate ability definition `{0}`")]
    DuplicateAbility(AbilityId),

    /// A definition's graph violates a structural invariant.
    #[error("ability `{ability}`: {source}")]
    Graph {
        ability: AbilityId,
        #[source]
        source: GraphError,
    },
}

impl EngineError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateAbility(_) => "ABILITY_REGISTRY_DUPLICATE_ABILITY",
            Self::Graph { .. } => "ABILITY_REGISTRY_INVALID_GRAPH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::definition::{AbilityGraph, EffectNode, NodeId};
    use crate::ability::effect::{EffectKind, SelectTargetsEffect};
    use crate::ability::targeting::TargetSelector;

    fn ability(id: &str) -> AbilityDefinition {
        AbilityDefinition {
            id: AbilityId::from(id),
            name: id.to_owned(),
            summary: String::new(),
            graph: AbilityGraph {
                entry_node_id: NodeId::from("select"),
                nodes: vec![EffectNode {
                    id: NodeId::from("select"),
                    kind: EffectKind::SelectTargets(SelectTargetsEffect {
                        selector: TargetSelector::PrimaryEnemy,
                        include_caster: false,
                    }),
                    next: Vec::new(),
                }],
            },
        }
    }

    fn empty_stats() -> StatRegistry {
        StatRegistry::from_definitions(Vec::new()).unwrap()
    }

    #[test]
    fn lookup_by_id() {
        let registry =
            AbilityRegistry::from_definitions(vec![ability("ability.jab")], &empty_stats())
                .unwrap();

        assert!(registry.get(&AbilityId::from("ability.jab")).is_some());
        assert!(registry.get(&AbilityId::from("ability.uppercut")).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_ability_ids_are_rejected() {
        let result = AbilityRegistry::from_definitions(
            vec![ability("ability.jab"), ability("ability.jab")],
            &empty_stats(),
        );

        assert_eq!(
            result.unwrap_err(),
            RegistryError::DuplicateAbility(AbilityId::from("ability.jab"))
        );
    }

    #[test]
    fn graph_faults_carry_the_ability_id() {
        let mut broken = ability("ability.jab");
        broken.graph.entry_node_id = NodeId::from("missing");

        let result = AbilityRegistry::from_definitions(vec![broken], &empty_stats());
        assert!(matches!(
            result,
            Err(RegistryError::Graph { ability, .. }) if ability == AbilityId::from("ability.jab")
        ));
    }
}
