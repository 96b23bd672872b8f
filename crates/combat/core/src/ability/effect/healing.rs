//! Healing effect implementation.

use crate::ability::definition::{GraphError, NodeId};
use crate::ability::error::ExecuteError;
use crate::ability::event::AbilityEvent;
use crate::ability::execute::EffectContext;
use crate::ability::scaling::StatScaling;
use crate::stats::StatRegistry;

/// Heal every resolved target.
///
/// The amount depends only on the caster's stats, so one evaluation yields one
/// shared magnitude for every target. Health is not clamped to `max_health`;
/// overheal handling belongs to the caller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ApplyHealingEffect {
    /// Flat base heal before scaling.
    pub base_heal: f64,

    /// Optional caster-stat scaling.
    #[cfg_attr(feature = "serde", serde(default))]
    pub scaling: Option<StatScaling>,

    /// Optional jitter magnitude; one `rng() * jitter` roll per evaluation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub jitter: Option<f64>,
}

impl ApplyHealingEffect {
    /// Load-time validation of parameters and stat references.
    pub(crate) fn validate(&self, node: &NodeId, stats: &StatRegistry) -> Result<(), GraphError> {
        if !self.base_heal.is_finite() {
            return Err(GraphError::InvalidParameter {
                node: node.clone(),
                reason: "baseHeal must be finite",
            });
        }
        if let Some(scaling) = &self.scaling {
            if !scaling.multiplier.is_finite() {
                return Err(GraphError::InvalidParameter {
                    node: node.clone(),
                    reason: "scaling multiplier must be finite",
                });
            }
            if !stats.contains(&scaling.stat) {
                return Err(GraphError::UnknownStat {
                    node: node.clone(),
                    stat: scaling.stat.clone(),
                });
            }
        }
        if let Some(jitter) = self.jitter {
            if !jitter.is_finite() || jitter < 0.0 {
                return Err(GraphError::InvalidParameter {
                    node: node.clone(),
                    reason: "jitter must be finite and non-negative",
                });
            }
        }
        Ok(())
    }

    /// Apply healing to each resolved target, in selection order.
    pub(crate) fn apply(
        &self,
        node: &NodeId,
        ctx: &mut EffectContext<'_>,
    ) -> Result<(), ExecuteError> {
        let amount = {
            let jitter_roll = self
                .jitter
                .map(|jitter| ctx.rng.next_unit() * jitter)
                .unwrap_or(0.0);
            let caster = ctx.caster();
            self.base_heal
                + self
                    .scaling
                    .as_ref()
                    .map(|s| s.contribution(caster))
                    .unwrap_or(0.0)
                + jitter_roll
        };

        let targets = ctx.targets(node)?.to_vec();
        for target_id in targets {
            if let Some(target) = ctx.participant_mut(&target_id) {
                target.health += amount;
            }
            ctx.push_event(AbilityEvent::Heal {
                target: target_id,
                amount,
            });
        }
        Ok(())
    }
}
