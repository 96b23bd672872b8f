//! Ability definitions and the execution engine.
//!
//! An ability is a small directed graph of effect nodes (select targets, deal
//! damage, apply healing, apply state). Definitions are loaded once into the
//! [`AbilityRegistry`] and validated there; [`AbilityExecutor::execute`] walks
//! a graph against one [`ExecutionContext`] and emits an ordered event log.

pub mod definition;
pub mod effect;
pub mod error;
pub mod event;
pub mod execute;
pub mod registry;
pub mod scaling;
pub mod targeting;

pub use definition::{AbilityDefinition, AbilityGraph, AbilityId, EffectNode, GraphError, NodeId};
pub use effect::{
    ApplyHealingEffect, ApplyStateEffect, DealDamageEffect, EffectKind, SelectTargetsEffect,
};
pub use error::ExecuteError;
pub use event::{AbilityEvent, ExecutionResult};
pub use execute::{AbilityExecutor, EffectContext, ExecutionContext, TargetPoint};
pub use registry::{AbilityRegistry, RegistryError};
pub use scaling::{Mitigation, StatScaling};
pub use targeting::TargetSelector;
