//! Execution contexts.
//!
//! [`ExecutionContext`] is the caller-supplied input for one execution;
//! [`EffectContext`] is the internal working state effects mutate while the
//! pipeline walks the graph.

use std::fmt;

use crate::ability::definition::NodeId;
use crate::ability::error::ExecuteError;
use crate::ability::event::AbilityEvent;
use crate::participant::{ParticipantId, ParticipantSnapshot, TeamId};
use crate::rng::RandomSource;

// ============================================================================
// Execution Context
// ============================================================================

/// A world-space point supplied with ground-targeted casts.
///
/// Carried on the context for symmetry with the other targeting inputs;
/// consumed once area selectors land.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Caller-supplied input for one ability execution.
///
/// The executor takes the context by value: the participant list inside it is
/// the working copy for the call and comes back (mutated) in the result.
pub struct ExecutionContext {
    /// The participant casting the ability. Must be present in `participants`.
    pub caster_id: ParticipantId,

    /// Optional explicit primary target (consumed by `primaryEnemy`).
    pub primary_target_id: Option<ParticipantId>,

    /// Optional explicit target list (consumed by the `explicit` selector).
    pub explicit_target_ids: Vec<ParticipantId>,

    /// Optional ground-target point.
    pub target_point: Option<TargetPoint>,

    /// Snapshot of every combat participant.
    pub participants: Vec<ParticipantSnapshot>,

    /// Random source for jitter rolls. Supply a deterministic source to make
    /// the execution reproducible.
    pub rng: Box<dyn RandomSource>,
}

impl ExecutionContext {
    /// Creates a context with no optional targeting input.
    pub fn new(
        caster_id: impl Into<ParticipantId>,
        participants: Vec<ParticipantSnapshot>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            caster_id: caster_id.into(),
            primary_target_id: None,
            explicit_target_ids: Vec::new(),
            target_point: None,
            participants,
            rng,
        }
    }

    /// Builder: set the primary target.
    #[must_use]
    pub fn with_primary_target(mut self, id: impl Into<ParticipantId>) -> Self {
        self.primary_target_id = Some(id.into());
        self
    }

    /// Builder: set the explicit target list.
    #[must_use]
    pub fn with_explicit_targets(mut self, ids: Vec<ParticipantId>) -> Self {
        self.explicit_target_ids = ids;
        self
    }

    /// Builder: set the ground-target point.
    #[must_use]
    pub fn with_target_point(mut self, point: TargetPoint) -> Self {
        self.target_point = Some(point);
        self
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("caster_id", &self.caster_id)
            .field("primary_target_id", &self.primary_target_id)
            .field("explicit_target_ids", &self.explicit_target_ids)
            .field("target_point", &self.target_point)
            .field("participants", &self.participants)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Effect Context
// ============================================================================

/// Working state for one traversal, passed to every effect.
///
/// Tracks the mutable participant copy, the target set resolved by the most
/// recent `selectTargets` node, and the event log accumulated so far.
pub struct EffectContext<'a> {
    /// The casting participant's id.
    pub caster_id: ParticipantId,

    /// The caster's team, captured at context validation.
    pub caster_team: TeamId,

    /// Primary target from the caller, if any.
    pub primary_target_id: Option<ParticipantId>,

    /// Explicit target list from the caller.
    pub explicit_target_ids: Vec<ParticipantId>,

    /// Mutable working copy of the participant list.
    pub participants: &'a mut Vec<ParticipantSnapshot>,

    /// Targets resolved by the most recent `selectTargets` node, if any.
    pub resolved_targets: Option<Vec<ParticipantId>>,

    /// Events emitted so far, in evaluation order.
    pub events: &'a mut Vec<AbilityEvent>,

    /// The execution's random source.
    pub rng: &'a mut dyn RandomSource,
}

impl EffectContext<'_> {
    /// Returns the caster's snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the caster is missing, which the pipeline rules out before
    /// constructing the context.
    pub fn caster(&self) -> &ParticipantSnapshot {
        self.participants
            .iter()
            .find(|p| p.id == self.caster_id)
            .expect("caster presence is validated before traversal")
    }

    /// Looks up a participant by id.
    pub fn participant(&self, id: &ParticipantId) -> Option<&ParticipantSnapshot> {
        self.participants.iter().find(|p| p.id == *id)
    }

    /// Looks up a participant mutably by id.
    pub fn participant_mut(&mut self, id: &ParticipantId) -> Option<&mut ParticipantSnapshot> {
        self.participants.iter_mut().find(|p| p.id == *id)
    }

    /// Returns the resolved target set, or the hard error mandated for graphs
    /// that apply effects before selecting targets.
    pub fn targets(&self, node: &NodeId) -> Result<&[ParticipantId], ExecuteError> {
        self.resolved_targets
            .as_deref()
            .ok_or_else(|| ExecuteError::EffectBeforeSelection { node: node.clone() })
    }

    /// Appends an event to the execution log.
    pub fn push_event(&mut self, event: AbilityEvent) {
        self.events.push(event);
    }
}
