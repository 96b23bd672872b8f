//! Target selection effect implementation.

use crate::ability::definition::{GraphError, NodeId};
use crate::ability::error::ExecuteError;
use crate::ability::execute::EffectContext;
use crate::ability::targeting::{self, TargetSelector};
use crate::stats::StatRegistry;

/// Resolve a target set and store it as working state for later nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SelectTargetsEffect {
    /// How targets are picked.
    pub selector: TargetSelector,

    /// Whether the caster joins the resolved set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub include_caster: bool,
}

impl SelectTargetsEffect {
    /// Load-time validation: selectors carry no numeric parameters.
    pub(crate) fn validate(&self, _node: &NodeId, _stats: &StatRegistry) -> Result<(), GraphError> {
        Ok(())
    }

    /// Resolve targets and replace the working target set.
    pub(crate) fn apply(
        &self,
        _node: &NodeId,
        ctx: &mut EffectContext<'_>,
    ) -> Result<(), ExecuteError> {
        let targets = targeting::resolve_targets(
            self.selector,
            self.include_caster,
            &ctx.caster_id,
            &ctx.caster_team,
            ctx.primary_target_id.as_ref(),
            &ctx.explicit_target_ids,
            ctx.participants,
        );

        tracing::trace!(
            selector = %self.selector,
            count = targets.len(),
            "targets resolved"
        );
        ctx.resolved_targets = Some(targets);
        Ok(())
    }
}
