//! Configuration error types.

use thiserror::Error;

/// Failure of a single cast, independent of which variable was being read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CastError {
    #[error("invalid boolean token {0:?}")]
    InvalidBool(String),
    #[error("invalid integer {0:?}")]
    InvalidInt(String),
    #[error("invalid regular expression {pattern:?}: {message}")]
    InvalidRegex { pattern: String, message: String },
    #[error("expected {expected} elements, found {found}")]
    TupleArity { expected: usize, found: usize },
    #[error("dict entry {0:?} is missing '='")]
    DictEntry(String),
}

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: expected {expected}: {reason}")]
    InvalidValue {
        var: String,
        expected: String,
        #[source]
        reason: CastError,
    },
    #[error("{var}: value is not valid unicode")]
    NotUnicode { var: String },
    #[error("failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
    #[error("failed to render settings as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to render settings as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConfigError {
    /// Name of the environment variable the error refers to, if any.
    pub fn var(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { var, .. } | Self::NotUnicode { var } => Some(var),
            _ => None,
        }
    }
}
