//! State application effect implementation.

use crate::ability::definition::{GraphError, NodeId};
use crate::ability::error::ExecuteError;
use crate::ability::event::AbilityEvent;
use crate::ability::execute::EffectContext;
use crate::participant::{ActiveState, StateId};
use crate::stats::StatRegistry;

/// Append a state entry to every resolved target.
///
/// Duplicate application of the same state appends again - no dedup or
/// refresh. Stacking semantics are intentionally left to the state's consumer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ApplyStateEffect {
    /// Which state to apply.
    pub state: StateId,

    /// Duration of the new entry, in seconds.
    pub duration_seconds: f64,
}

impl ApplyStateEffect {
    /// Load-time validation of the duration.
    pub(crate) fn validate(&self, node: &NodeId, _stats: &StatRegistry) -> Result<(), GraphError> {
        if !self.duration_seconds.is_finite() || self.duration_seconds < 0.0 {
            return Err(GraphError::InvalidParameter {
                node: node.clone(),
                reason: "durationSeconds must be finite and non-negative",
            });
        }
        Ok(())
    }

    /// Append the state to each resolved target, in selection order.
    pub(crate) fn apply(
        &self,
        node: &NodeId,
        ctx: &mut EffectContext<'_>,
    ) -> Result<(), ExecuteError> {
        let targets = ctx.targets(node)?.to_vec();
        for target_id in targets {
            if let Some(target) = ctx.participant_mut(&target_id) {
                target
                    .states
                    .push(ActiveState::new(self.state.clone(), self.duration_seconds));
            }
            ctx.push_event(AbilityEvent::StateApplied {
                target: target_id,
                state: self.state.clone(),
                duration_seconds: self.duration_seconds,
            });
        }
        Ok(())
    }
}
