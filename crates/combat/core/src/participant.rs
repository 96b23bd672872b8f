//! Participant snapshots and identity types.
//!
//! A [`ParticipantSnapshot`] captures the combat-relevant state of one entity
//! at the moment an ability executes. The executor takes ownership of the
//! snapshot list for the duration of one call and hands the mutated copy back
//! in the result; callers are responsible for clamping health, handling death,
//! and persisting the outcome.

use std::collections::HashMap;
use std::fmt;

use crate::stats::StatId;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for one combat participant.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParticipantId(pub String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Team tag shared by allied participants.
///
/// Teams are opaque labels; two participants are allies when their tags are
/// equal and enemies otherwise.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TeamId(pub String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Identifier of a state-effect kind (e.g. `state.rejuvenation`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StateId(pub String);

impl StateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

// ============================================================================
// Active States
// ============================================================================

/// One state entry active on a participant.
///
/// Entries stack by appending; refresh/merge semantics belong to the state's
/// consumer, not to the executor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActiveState {
    /// Which state is active.
    pub state: StateId,

    /// Seconds until the entry expires.
    pub remaining_seconds: f64,
}

impl ActiveState {
    pub fn new(state: impl Into<StateId>, remaining_seconds: f64) -> Self {
        Self {
            state: state.into(),
            remaining_seconds,
        }
    }
}

// ============================================================================
// Participant Snapshot
// ============================================================================

/// The combat-relevant state of one entity at the moment of ability execution.
///
/// The executor owns the snapshot exclusively for the duration of one call.
/// Health is intentionally never clamped by the executor - it may drop below 0
/// or exceed `max_health`; the caller decides what that means.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParticipantSnapshot {
    /// Unique participant identifier.
    pub id: ParticipantId,

    /// Team tag used by target selection.
    pub team: TeamId,

    /// Current health (unclamped).
    pub health: f64,

    /// Maximum health, carried for the caller's clamping logic.
    pub max_health: f64,

    /// Raw stat values keyed by stat id. Missing stats read as 0.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: HashMap<StatId, f64>,

    /// Currently active state entries, in application order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub states: Vec<ActiveState>,
}

impl ParticipantSnapshot {
    /// Creates a snapshot with empty stats and no active states.
    pub fn new(
        id: impl Into<ParticipantId>,
        team: impl Into<TeamId>,
        health: f64,
        max_health: f64,
    ) -> Self {
        Self {
            id: id.into(),
            team: team.into(),
            health,
            max_health,
            stats: HashMap::new(),
            states: Vec::new(),
        }
    }

    /// Builder: set one stat value.
    #[must_use]
    pub fn with_stat(mut self, stat: impl Into<StatId>, value: f64) -> Self {
        self.stats.insert(stat.into(), value);
        self
    }

    /// Builder: start with a state entry already active.
    #[must_use]
    pub fn with_state(mut self, state: ActiveState) -> Self {
        self.states.push(state);
        self
    }

    /// Returns the raw value of a stat, or 0 if the participant lacks it.
    ///
    /// Missing stats are not an error so that new stats can be introduced on
    /// some participants without breaking abilities cast by the others.
    pub fn stat(&self, stat: &StatId) -> f64 {
        self.stats.get(stat).copied().unwrap_or(0.0)
    }

    /// Returns true if at least one entry of the given state is active.
    pub fn has_state(&self, state: &StateId) -> bool {
        self.states.iter().any(|s| s.state == *state)
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<String> for TeamId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<String> for StateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
