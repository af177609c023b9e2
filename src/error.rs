//! Error handling module for winpatable
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Only `UnknownApplication` and `CyclicDependency` are fatal to an operation;
//! every other variant is recovered inside the installer and recorded as a
//! failed step.

use thiserror::Error;

use crate::installer::InstallStep;

/// Main error type for winpatable
#[derive(Error, Debug)]
pub enum WinpatableError {
    /// Requested key is not in the catalog
    #[error("Unknown application: {0}")]
    UnknownApplication(String),

    /// Resolver could not make progress; carries the keys stuck in the cycle
    #[error("Cyclic dependency between: {}", .0.join(", "))]
    CyclicDependency(Vec<String>),

    /// One installation step failed (non-fatal, recorded in the report)
    #[error("{step} step failed: {message}")]
    Step { step: InstallStep, message: String },

    /// A required external tool is not available on PATH
    #[error("Required tool not available: {0}")]
    ResourceUnavailable(String),

    /// A subprocess exceeded its declared timeout
    #[error("{program} timed out after {seconds}s")]
    Timeout { program: String, seconds: u64 },

    /// Catalog or settings validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors (prefix layout, registry file, config.json)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for winpatable operations
pub type Result<T> = std::result::Result<T, WinpatableError>;

// Convenient error constructors
impl WinpatableError {
    /// Create an unknown application error
    pub fn unknown_application(key: impl Into<String>) -> Self {
        Self::UnknownApplication(key.into())
    }

    /// Create a step failure error
    pub fn step(step: InstallStep, message: impl Into<String>) -> Self {
        Self::Step {
            step,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns true for errors that must abort the whole operation.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::UnknownApplication(_) | Self::CyclicDependency(_)
        )
    }

    /// Process exit code used by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownApplication(_) => 2,
            Self::CyclicDependency(_) => 3,
            _ => 1,
        }
    }
}
