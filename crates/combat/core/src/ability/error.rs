//! Ability execution errors.

use crate::error::{EngineError, ErrorSeverity};
use crate::participant::ParticipantId;

use super::definition::{AbilityId, NodeId};

/// Errors that can occur during ability execution.
///
/// `AbilityNotFound` and `CasterMissing` abort the call before any mutation.
/// The graph-shaped variants indicate data-authoring bugs that registry
/// validation should have made unreachable; they surface as hard errors rather
/// than silently producing empty-target events.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    /// The requested ability id is not in the registry.
    #[error("ability `{0}` is not registered")]
    AbilityNotFound(AbilityId),

    /// The context's caster id is absent from the participant list.
    #[error("caster `{0}` is not in the participant snapshot")]
    CasterMissing(ParticipantId),

    /// A node id failed to resolve mid-traversal.
    #[error("graph node `{node}` does not exist")]
    NodeMissing { node: NodeId },

    /// An effect consumed targets before any `selectTargets` node ran.
    #[error("node `{node}` applies an effect before any targets were selected")]
    EffectBeforeSelection { node: NodeId },
}

impl EngineError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AbilityNotFound(_) | Self::CasterMissing(_) => ErrorSeverity::Validation,
            Self::NodeMissing { .. } | Self::EffectBeforeSelection { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AbilityNotFound(_) => "EXECUTE_ABILITY_NOT_FOUND",
            Self::CasterMissing(_) => "EXECUTE_CASTER_MISSING",
            Self::NodeMissing { .. } => "EXECUTE_NODE_MISSING",
            Self::EffectBeforeSelection { .. } => "EXECUTE_EFFECT_BEFORE_SELECTION",
        }
    }
}
