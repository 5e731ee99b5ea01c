//! Errors raised while building a pipeline plan
//!
//! Every variant is fatal: plan assembly stops at the first one and no partial plan
//! is ever returned.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering entries or assembling a plan
#[derive(Debug, Error)]
pub enum PlanError {
    /// Invalid input to the planner (path outside the root, empty entry set, ...)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Two distinct source files normalize to the same bundle name
    #[error(
        "Bundle name collision for '{name}': {} and {} both map to the same entry",
        first.display(),
        second.display()
    )]
    Collision {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// The source root is missing, unreadable or not a directory
    #[error("File system error at {}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PlanError {
    pub fn configuration(message: impl Into<String>) -> Self {
        PlanError::Configuration {
            message: message.into(),
        }
    }

    pub fn file_system(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PlanError::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable kind, used by the CLI output
    pub fn kind(&self) -> &'static str {
        match self {
            PlanError::Configuration { .. } => "configuration",
            PlanError::Collision { .. } => "collision",
            PlanError::FileSystem { .. } => "file_system",
        }
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
