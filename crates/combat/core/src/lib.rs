//! Deterministic ability resolution shared by the combat service and tools.
//!
//! `combat-core` defines the canonical combat rules: stat and ability
//! definitions, participant snapshots, and the executor that walks an
//! ability's effect graph to produce damage/heal/state events. All APIs are
//! pure and synchronous; registries are built once at startup and shared
//! read-only across concurrent executions.
pub mod ability;
pub mod error;
pub mod participant;
pub mod rng;
pub mod stats;

pub use ability::{
    AbilityDefinition, AbilityEvent, AbilityExecutor, AbilityGraph, AbilityId, AbilityRegistry,
    ApplyHealingEffect, ApplyStateEffect, DealDamageEffect, EffectKind, EffectNode, ExecuteError,
    ExecutionContext, ExecutionResult, GraphError, Mitigation, NodeId, RegistryError,
    SelectTargetsEffect, StatScaling, TargetPoint, TargetSelector,
};
pub use error::{EngineError, ErrorSeverity};
pub use participant::{ActiveState, ParticipantId, ParticipantSnapshot, StateId, TeamId};
pub use rng::{FnSource, PcgRng, RandomSource, SequenceSource};
pub use stats::{DerivedFrom, StatDefinition, StatId, StatRegistry, StatRegistryError};
