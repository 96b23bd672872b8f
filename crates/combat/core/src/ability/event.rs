//! Execution events and results.
//!
//! Every effect application emits one event per affected target, in node
//! evaluation order. The ordered event list plus the mutated participant
//! snapshots form the complete output of one execution; the caller clamps
//! health, persists the snapshots, and broadcasts the events to clients.

use crate::participant::{ParticipantId, ParticipantSnapshot, StateId};

/// One entry in the ordered event log of an execution.
///
/// Serialized with a `kind` tag and camelCase fields so the service layer can
/// forward events to clients without re-mapping.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum AbilityEvent {
    /// Damage applied to a target (already mitigated, floored at 0).
    Damage { target: ParticipantId, amount: f64 },

    /// Healing applied to a target.
    Heal { target: ParticipantId, amount: f64 },

    /// A state entry appended to a target.
    StateApplied {
        target: ParticipantId,
        state: StateId,
        duration_seconds: f64,
    },
}

impl AbilityEvent {
    /// The participant this event affected.
    pub fn target(&self) -> &ParticipantId {
        match self {
            Self::Damage { target, .. } => target,
            Self::Heal { target, .. } => target,
            Self::StateApplied { target, .. } => target,
        }
    }

    /// Stable kind name matching the serialized tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Damage { .. } => "damage",
            Self::Heal { .. } => "heal",
            Self::StateApplied { .. } => "stateApplied",
        }
    }
}

/// Output of one ability execution: mutated snapshots plus the event log.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ExecutionResult {
    /// Final participant snapshots, in the order they were supplied.
    pub participants: Vec<ParticipantSnapshot>,

    /// Emitted events in node evaluation order.
    pub events: Vec<AbilityEvent>,
}

impl ExecutionResult {
    /// Looks up a participant in the result by id.
    pub fn participant(&self, id: &ParticipantId) -> Option<&ParticipantSnapshot> {
        self.participants.iter().find(|p| p.id == *id)
    }

    /// Sum of all damage amounts in the event log.
    pub fn total_damage(&self) -> f64 {
        self.events
            .iter()
            .filter_map(|event| match event {
                AbilityEvent::Damage { amount, .. } => Some(*amount),
                _ => None,
            })
            .sum()
    }

    /// Sum of all heal amounts in the event log.
    pub fn total_healing(&self) -> f64 {
        self.events
            .iter()
            .filter_map(|event| match event {
                AbilityEvent::Heal { amount, .. } => Some(*amount),
                _ => None,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_per_event_kind() {
        let result = ExecutionResult {
            participants: Vec::new(),
            events: vec![
                AbilityEvent::Damage {
                    target: ParticipantId::from("e1"),
                    amount: 10.0,
                },
                AbilityEvent::Heal {
                    target: ParticipantId::from("a1"),
                    amount: 4.0,
                },
                AbilityEvent::Damage {
                    target: ParticipantId::from("e2"),
                    amount: 2.5,
                },
            ],
        };

        assert!((result.total_damage() - 12.5).abs() < 1e-12);
        assert!((result.total_healing() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn kind_names_are_stable() {
        let event = AbilityEvent::StateApplied {
            target: ParticipantId::from("a1"),
            state: StateId::from("state.rejuvenation"),
            duration_seconds: 6.0,
        };

        assert_eq!(event.kind(), "stateApplied");
        assert_eq!(event.target(), &ParticipantId::from("a1"));
    }
}
