//! Ability execution.
//!
//! This module implements the execution flow:
//! 1. **Lookup**: Resolve the ability definition from the registry
//! 2. **Context validation**: Confirm the caster is in the snapshot
//! 3. **Traversal**: Evaluate effect nodes along first-successor edges
//! 4. **Result**: Return the mutated snapshots plus the ordered event log
//!
//! ## Effect Context
//!
//! Effects execute within an [`EffectContext`] that provides:
//! - The working participant copy (mutable)
//! - The caster's identity and team
//! - The target set resolved by the most recent `selectTargets` node
//! - The execution's random source and event sink
//!
//! ## Error Handling
//!
//! `AbilityNotFound` and `CasterMissing` abort before any mutation. Missing
//! per-participant stats are never errors - they read as 0 so new stats can be
//! introduced without breaking older participants.

mod context;
mod pipeline;

use std::sync::Arc;

use crate::ability::definition::AbilityId;
use crate::ability::error::ExecuteError;
use crate::ability::event::ExecutionResult;
use crate::ability::registry::AbilityRegistry;
use crate::stats::StatRegistry;

pub use context::{EffectContext, ExecutionContext, TargetPoint};

/// Executes abilities against participant snapshots.
///
/// Holds shared read-only references to the two registries (constructed once
/// at startup). The executor itself carries no per-call state, so one instance
/// serves concurrent executions without locking - each call owns its context
/// exclusively.
#[derive(Clone, Debug)]
pub struct AbilityExecutor {
    stats: Arc<StatRegistry>,
    abilities: Arc<AbilityRegistry>,
}

impl AbilityExecutor {
    /// Creates an executor over the given registries.
    pub fn new(stats: Arc<StatRegistry>, abilities: Arc<AbilityRegistry>) -> Self {
        Self { stats, abilities }
    }

    /// Returns the stat registry this executor was built with.
    pub fn stats(&self) -> &StatRegistry {
        &self.stats
    }

    /// Returns the ability registry this executor was built with.
    pub fn abilities(&self) -> &AbilityRegistry {
        &self.abilities
    }

    /// Executes one ability against one context.
    ///
    /// The context is consumed: its participant list becomes the working copy
    /// that is mutated during traversal and returned in the result. Health is
    /// never clamped (it may go below 0 or above `max_health`); clamping,
    /// death handling, and persistence belong to the caller.
    ///
    /// Deterministic given the context's random source: identical inputs and
    /// an identical random sequence produce an identical result.
    ///
    /// ## Errors
    /// - [`ExecuteError::AbilityNotFound`] - unknown ability id
    /// - [`ExecuteError::CasterMissing`] - caster absent from the snapshot
    /// - [`ExecuteError::EffectBeforeSelection`] - a damage/heal/state node ran
    ///   before any `selectTargets` node (data-authoring bug)
    pub fn execute(
        &self,
        ability: &AbilityId,
        context: ExecutionContext,
    ) -> Result<ExecutionResult, ExecuteError> {
        let definition = self
            .abilities
            .get(ability)
            .ok_or_else(|| ExecuteError::AbilityNotFound(ability.clone()))?;

        pipeline::run(definition, context)
    }
}
