//! Error types for audit operations.
//!
//! Errors fall into three groups:
//!
//! - **Fatal**: the metric extraction capability is missing
//!   ([`AuditError::CapabilityUnavailable`]). The run stops before any file
//!   is touched.
//! - **Per-file**: a single file could not be read, decoded or parsed
//!   ([`AuditError::Io`], [`AuditError::Decode`], [`AuditError::Parse`]).
//!   Callers log these, print them as [`crate::core::SkippedFile`] lines and
//!   move on to the next file.
//! - **Setup**: configuration and root directory problems surfaced before
//!   scanning.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = AuditError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AuditError {
    /// The selected extraction engine cannot run on this machine.
    #[error("the '{engine}' analysis engine is not available")]
    CapabilityUnavailable { engine: String, hint: String },

    #[error("directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    Decode { path: PathBuf },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("{tool} failed: {message}")]
    ExternalTool { tool: String, message: String },
}

impl AuditError {
    pub fn capability(engine: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::CapabilityUnavailable {
            engine: engine.into(),
            hint: hint.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        // read_to_string reports bad UTF-8 as InvalidData
        let path = path.into();
        if source.kind() == std::io::ErrorKind::InvalidData {
            Self::Decode { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn external(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalTool {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// The cause of a per-file failure, without the path it happened on.
    pub fn reason(&self) -> String {
        match self {
            Self::Io { source, .. } => source.to_string(),
            Self::Decode { .. } => "not valid UTF-8".to_string(),
            Self::Parse { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Installation hint for a missing capability.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::CapabilityUnavailable { hint, .. } => Some(hint),
            _ => None,
        }
    }
}
