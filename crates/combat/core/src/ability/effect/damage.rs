//! Damage effect implementation.

use crate::ability::definition::{GraphError, NodeId};
use crate::ability::error::ExecuteError;
use crate::ability::event::AbilityEvent;
use crate::ability::execute::EffectContext;
use crate::ability::scaling::{Mitigation, StatScaling};
use crate::stats::StatRegistry;

/// Deal damage to every resolved target.
///
/// `raw = base_damage + caster_stat * scaling.multiplier (+ jitter roll)`,
/// then per target `amount = max(raw - target_stat * mitigation.multiplier, 0)`.
/// The amount is subtracted from target health without clamping - health below
/// 0 is the caller's concern.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DealDamageEffect {
    /// Flat base damage before scaling.
    pub base_damage: f64,

    /// Optional caster-stat scaling.
    #[cfg_attr(feature = "serde", serde(default))]
    pub scaling: Option<StatScaling>,

    /// Optional flat mitigation from the target's stats.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mitigation: Option<Mitigation>,

    /// Optional jitter magnitude; one `rng() * jitter` roll per evaluation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub jitter: Option<f64>,
}

impl DealDamageEffect {
    /// Load-time validation of parameters and stat references.
    pub(crate) fn validate(&self, node: &NodeId, stats: &StatRegistry) -> Result<(), GraphError> {
        if !self.base_damage.is_finite() {
            return Err(GraphError::InvalidParameter {
                node: node.clone(),
                reason: "baseDamage must be finite",
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
        if let Some(mitigation) = &self.mitigation {
            if !mitigation.multiplier.is_finite() {
                return Err(GraphError::InvalidParameter {
                    node: node.clone(),
                    reason: "mitigation multiplier must be finite",
                });
            }
            if !stats.contains(&mitigation.stat) {
                return Err(GraphError::UnknownStat {
                    node: node.clone(),
                    stat: mitigation.stat.clone(),
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

    /// Apply damage to each resolved target, in selection order.
    pub(crate) fn apply(
        &self,
        node: &NodeId,
        ctx: &mut EffectContext<'_>,
    ) -> Result<(), ExecuteError> {
        let jitter_roll = self
            .jitter
            .map(|jitter| ctx.rng.next_unit() * jitter)
            .unwrap_or(0.0);
        let raw = {
            let caster = ctx.caster();
            self.base_damage
                + self
                    .scaling
                    .as_ref()
                    .map(|s| s.contribution(caster))
                    .unwrap_or(0.0)
                + jitter_roll
        };

        let targets = ctx.targets(node)?.to_vec();
        for target_id in targets {
            let reduction = self
                .mitigation
                .as_ref()
                .zip(ctx.participant(&target_id))
                .map(|(mitigation, target)| mitigation.reduction(target))
                .unwrap_or(0.0);
            let amount = (raw - reduction).max(0.0);

            if let Some(target) = ctx.participant_mut(&target_id) {
                target.health -= amount;
            }
            ctx.push_event(AbilityEvent::Damage {
                target: target_id,
                amount,
            });
        }
        Ok(())
    }
}
