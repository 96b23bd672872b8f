//! Ability definitions and effect-node graphs.
//!
//! A definition is declarative data: a chain of effect nodes owned by the
//! [`AbilityRegistry`](crate::ability::AbilityRegistry) and shared read-only by
//! every execution. All structural invariants are enforced here at load time so
//! that a malformed graph is never reachable at execution time.

use std::collections::HashSet;
use std::fmt;

use crate::error::{EngineError, ErrorSeverity};
use crate::stats::{StatId, StatRegistry};

use super::effect::EffectKind;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier of an ability (e.g. `ability.powerStrike`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AbilityId(pub String);

impl AbilityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AbilityId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for AbilityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier of one effect node, unique within its graph.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ============================================================================
// Graph Structure
// ============================================================================

/// One step in an ability graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EffectNode {
    /// Node identifier, unique within the graph.
    pub id: NodeId,

    /// The effect this node applies.
    pub kind: EffectKind,

    /// Successor node ids. Traversal follows the first entry; longer lists are
    /// reserved for future fan-out.
    #[cfg_attr(feature = "serde", serde(default))]
    pub next: Vec<NodeId>,
}

/// The effect graph of one ability: an entry node plus a node list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AbilityGraph {
    /// Id of the first node to evaluate.
    pub entry_node_id: NodeId,

    /// Effect nodes in authoring order.
    pub nodes: Vec<EffectNode>,
}

impl AbilityGraph {
    /// Looks up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&EffectNode> {
        self.nodes.iter().find(|node| node.id == *id)
    }

    /// Validates every structural invariant of the graph.
    ///
    /// Checked here, once, at registry load:
    /// - node ids are unique within the graph
    /// - `entry_node_id` and every `next` reference resolve to a node
    /// - the entry chain (first successors) terminates without revisiting
    /// - node parameters are well-formed and reference registered stats
    pub fn validate(&self, stats: &StatRegistry) -> Result<(), GraphError> {
        let mut ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(&node.id) {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }
        }

        if self.node(&self.entry_node_id).is_none() {
            return Err(GraphError::MissingEntryNode {
                entry: self.entry_node_id.clone(),
            });
        }

        for node in &self.nodes {
            for next in &node.next {
                if self.node(next).is_none() {
                    return Err(GraphError::UnknownSuccessor {
                        node: node.id.clone(),
                        next: next.clone(),
                    });
                }
            }
            node.kind.validate(&node.id, stats)?;
        }

        // The executor follows first successors until a terminal node, so the
        // entry chain revisiting a node would never terminate.
        let mut visited = HashSet::new();
        let mut current = Some(&self.entry_node_id);
        while let Some(id) = current {
            if !visited.insert(id) {
                return Err(GraphError::CyclicChain { node: id.clone() });
            }
            current = self.node(id).and_then(|node| node.next.first());
        }

        Ok(())
    }
}

/// Complete definition of one ability. Immutable after registry load.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AbilityDefinition {
    /// Globally unique ability identifier.
    pub id: AbilityId,

    /// Display name.
    pub name: String,

    /// One-line description for tooling and logs.
    pub summary: String,

    /// The effect graph executed when the ability is cast.
    pub graph: AbilityGraph,
}

// ============================================================================
// Errors
// ============================================================================

/// Structural faults detected while validating an ability graph.
///
/// All variants are load-time failures that must block service startup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Two nodes share the same id.
    #[error("duplicate node id `{0}`")]
    DuplicateNode(NodeId),

    /// The entry node id does not resolve.
    #[error("entry node `{entry}` is not in the graph")]
    MissingEntryNode { entry: NodeId },

    /// A `next` reference does not resolve.
    #[error("node `{node}` references unknown successor `{next}`")]
    UnknownSuccessor { node: NodeId, next: NodeId },

    /// The entry chain revisits a node and would never terminate.
    #[error("node `{node}` is revisited by the entry chain")]
    CyclicChain { node: NodeId },

    /// An effect references a stat missing from the stat registry.
    #[error("node `{node}` references unknown stat `{stat}`")]
    UnknownStat { node: NodeId, stat: StatId },

    /// A node parameter is out of its valid domain.
    #[error("node `{node}` has an invalid parameter: {reason}")]
    InvalidParameter { node: NodeId, reason: &'static str },
}

impl EngineError for GraphError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateNode(_) => "GRAPH_DUPLICATE_NODE",
            Self::MissingEntryNode { .. } => "GRAPH_MISSING_ENTRY_NODE",
            Self::UnknownSuccessor { .. } => "GRAPH_UNKNOWN_SUCCESSOR",
            Self::CyclicChain { .. } => "GRAPH_CYCLIC_CHAIN",
            Self::UnknownStat { .. } => "GRAPH_UNKNOWN_STAT",
            Self::InvalidParameter { .. } => "GRAPH_INVALID_PARAMETER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::effect::SelectTargetsEffect;
    use crate::ability::targeting::TargetSelector;
    use crate::stats::StatRegistry;

    fn empty_stats() -> StatRegistry {
        StatRegistry::from_definitions(Vec::new()).unwrap()
    }

    fn select_node(id: &str, next: &[&str]) -> EffectNode {
        EffectNode {
            id: NodeId::from(id),
            kind: EffectKind::SelectTargets(SelectTargetsEffect {
                selector: TargetSelector::PrimaryEnemy,
                include_caster: false,
            }),
            next: next.iter().copied().map(NodeId::from).collect(),
        }
    }

    #[test]
    fn valid_chain_passes() {
        let graph = AbilityGraph {
            entry_node_id: NodeId::from("a"),
            nodes: vec![select_node("a", &["b"]), select_node("b", &[])],
        };

        assert!(graph.validate(&empty_stats()).is_ok());
    }

    #[test]
    fn dangling_successor_is_rejected() {
        let graph = AbilityGraph {
            entry_node_id: NodeId::from("a"),
            nodes: vec![select_node("a", &["missing"])],
        };

        assert!(matches!(
            graph.validate(&empty_stats()),
            Err(GraphError::UnknownSuccessor { .. })
        ));
    }

    #[test]
    fn missing_entry_is_rejected() {
        let graph = AbilityGraph {
            entry_node_id: NodeId::from("nope"),
            nodes: vec![select_node("a", &[])],
        };

        assert!(matches!(
            graph.validate(&empty_stats()),
            Err(GraphError::MissingEntryNode { .. })
        ));
    }

    #[test]
    fn duplicate_node_ids_are_rejected() {
        let graph = AbilityGraph {
            entry_node_id: NodeId::from("a"),
            nodes: vec![select_node("a", &[]), select_node("a", &[])],
        };

        assert!(matches!(
            graph.validate(&empty_stats()),
            Err(GraphError::DuplicateNode(_))
        ));
    }

    #[test]
    fn cyclic_entry_chain_is_rejected() {
        let graph = AbilityGraph {
            entry_node_id: NodeId::from("a"),
            nodes: vec![select_node("a", &["b"]), select_node("b", &["a"])],
        };

        assert!(matches!(
            graph.validate(&empty_stats()),
            Err(GraphError::CyclicChain { .. })
        ));
    }
}
