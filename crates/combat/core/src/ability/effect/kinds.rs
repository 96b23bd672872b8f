//! Effect kind enum and dispatcher.
//!
//! This module defines the [`EffectKind`] enum which wraps all concrete effect
//! types. It provides serialization support and dispatches to individual
//! effect implementations.

use crate::ability::definition::{GraphError, NodeId};
use crate::ability::error::ExecuteError;
use crate::ability::execute::EffectContext;
use crate::stats::StatRegistry;

use super::damage::DealDamageEffect;
use super::healing::ApplyHealingEffect;
use super::select::SelectTargetsEffect;
use super::state::ApplyStateEffect;

/// The effect a graph node applies.
///
/// This enum wraps all concrete effect types and provides serialization
/// support. Each variant delegates to its corresponding struct implementation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum EffectKind {
    /// Resolve a target set for subsequent nodes.
    SelectTargets(SelectTargetsEffect),

    /// Deal mitigated damage to the resolved targets.
    DealDamage(DealDamageEffect),

    /// Heal the resolved targets.
    ApplyHealing(ApplyHealingEffect),

    /// Append a state entry to the resolved targets.
    ApplyState(ApplyStateEffect),
}

impl EffectKind {
    /// Stable kind name matching the serialized variant tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectTargets(_) => "selectTargets",
            Self::DealDamage(_) => "dealDamage",
            Self::ApplyHealing(_) => "applyHealing",
            Self::ApplyState(_) => "applyState",
        }
    }

    /// Load-time validation of kind-specific parameters.
    ///
    /// Dispatches to the individual effect's validate method. Runs once at
    /// registry construction; execution never re-validates parameters.
    pub(crate) fn validate(&self, node: &NodeId, stats: &StatRegistry) -> Result<(), GraphError> {
        match self {
            Self::SelectTargets(e) => e.validate(node, stats),
            Self::DealDamage(e) => e.validate(node, stats),
            Self::ApplyHealing(e) => e.validate(node, stats),
            Self::ApplyState(e) => e.validate(node, stats),
        }
    }

    /// Apply the effect within the current traversal.
    ///
    /// Dispatches to the individual effect's apply method.
    pub(crate) fn apply(
        &self,
        node: &NodeId,
        ctx: &mut EffectContext<'_>,
    ) -> Result<(), ExecuteError> {
        match self {
            Self::SelectTargets(e) => e.apply(node, ctx),
            Self::DealDamage(e) => e.apply(node, ctx),
            Self::ApplyHealing(e) => e.apply(node, ctx),
            Self::ApplyState(e) => e.apply(node, ctx),
        }
    }
}
