//! Common error infrastructure for combat-core.
//!
//! This module provides the shared severity/code classification implemented by
//! every error type in the crate. Domain-specific errors (e.g. `ExecuteError`,
//! `GraphError`) are defined in their respective modules alongside the
//! operations they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Stable Codes**: Every variant maps to a static code for metrics and logs

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected inconsistencies that indicate a bug
/// - **Fatal**: Unrecoverable errors that must block service startup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown ability id, caster missing from the snapshot
    Validation,

    /// Internal error - unexpected inconsistency.
    ///
    /// Examples: a graph node vanishing between load and execution
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - definition data is unusable, cannot continue.
    ///
    /// Examples: duplicate ability ids, dangling graph references
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all combat-core errors.
///
/// This trait provides a uniform interface for error classification across all
/// error types in the crate, so the embedding service can map errors to
/// responses and metrics without matching on concrete variants.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str;
}
