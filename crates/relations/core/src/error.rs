//! Common error infrastructure for relations-core.
//!
//! Relation queries themselves are total: missing faction data, reputation
//! records or configuration values resolve to documented defaults and never
//! surface as errors. Errors only arise while building the reference tables
//! and the entity registry, or when the id-keyed convenience surface is handed
//! an id nothing is registered under.

/// Severity level of an error, used for categorization and logging.
///
/// - **Validation**: Invalid input that should be rejected
/// - **Fatal**: Reference data is unusable, the host cannot serve queries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: unknown entity id, duplicate registration
    Validation,

    /// Reference data is corrupt and cannot be loaded.
    ///
    /// Examples: duplicate faction template, overflowing link list
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all relations-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait RelationsError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
