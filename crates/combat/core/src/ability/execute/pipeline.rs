//! Graph traversal orchestration.
//!
//! ## Design Principles
//!
//! - **Stateless**: All state passed explicitly (no hidden globals)
//! - **Deterministic**: Same inputs and random sequence, same outputs
//! - **Fail-fast**: Any error stops traversal and propagates up
//!
//! Traversal is strictly sequential: evaluate the current node, then follow
//! the first entry of its `next` list until a terminal node. Longer `next`
//! lists are reserved for future fan-out and are not followed today.

use crate::ability::definition::AbilityDefinition;
use crate::ability::error::ExecuteError;
use crate::ability::event::ExecutionResult;

use super::context::{EffectContext, ExecutionContext};

/// Runs one ability definition against one context.
///
/// ## Execution Flow
/// 1. Validate that the caster is in the participant list (abort before any
///    mutation otherwise)
/// 2. Walk the graph from `entry_node_id`, applying each node's effect
/// 3. Return the mutated participants and the accumulated events
pub(super) fn run(
    definition: &AbilityDefinition,
    context: ExecutionContext,
) -> Result<ExecutionResult, ExecuteError> {
    let ExecutionContext {
        caster_id,
        primary_target_id,
        explicit_target_ids,
        target_point: _,
        mut participants,
        mut rng,
    } = context;

    let caster_team = participants
        .iter()
        .find(|p| p.id == caster_id)
        .map(|p| p.team.clone())
        .ok_or_else(|| ExecuteError::CasterMissing(caster_id.clone()))?;

    tracing::debug!(ability = %definition.id, caster = %caster_id, "executing ability");

    let mut events = Vec::new();
    let mut ctx = EffectContext {
        caster_id,
        caster_team,
        primary_target_id,
        explicit_target_ids,
        participants: &mut participants,
        resolved_targets: None,
        events: &mut events,
        rng: rng.as_mut(),
    };

    let graph = &definition.graph;
    let mut current = Some(&graph.entry_node_id);
    while let Some(node_id) = current {
        let node = graph
            .node(node_id)
            .ok_or_else(|| ExecuteError::NodeMissing {
                node: node_id.clone(),
            })?;

        tracing::trace!(node = %node.id, kind = node.kind.name(), "evaluating effect node");
        node.kind.apply(&node.id, &mut ctx)?;

        current = node.next.first();
    }

    drop(ctx);
    tracing::debug!(events = events.len(), "ability resolved");

    Ok(ExecutionResult {
        participants,
        events,
    })
}
