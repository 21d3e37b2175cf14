//! Error types
//!
//! Every failure during a parse pass is fatal: the pass is aborted and the
//! error is handed to the caller rather than emitting a guessed record.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for forge-apidoc operations
pub type ApiDocResult<T> = Result<T, ApiDocError>;

/// Main error type for forge-apidoc
#[derive(Debug, Error)]
pub enum ApiDocError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TypeScript parse error
    #[error("TypeScript parse error in {file}: {message}")]
    TypeScriptParse { file: PathBuf, message: String },

    /// Invalid path
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// A symbol's declarations match no documentation kind
    #[error("Cannot classify export `{name}` in {module}: {reason}")]
    Classification {
        module: String,
        name: String,
        reason: String,
    },

    /// The checker could not produce a type for a node
    #[error("Cannot resolve type at {}:{line}:{col}: {message}", file.display())]
    TypeResolution {
        file: PathBuf,
        line: usize,
        col: usize,
        message: String,
    },

    /// A symbol lacks the declaration its kind requires
    #[error("Export `{name}` in {module} has no {expected} declaration")]
    MissingDeclaration {
        module: String,
        name: String,
        expected: &'static str,
    },

    /// An export could not be traced back to any declaration
    #[error("Cannot resolve export `{name}` of {module}: {reason}")]
    UnresolvedExport {
        module: String,
        name: String,
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiDocError {
    /// Create a TypeScript parse error
    pub fn parse(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ApiDocError::TypeScriptParse {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a classification error
    pub fn classification(
        module: impl Into<String>,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ApiDocError::Classification {
            module: module.into(),
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a type resolution error at a location
    pub fn type_resolution(
        file: impl Into<PathBuf>,
        line: usize,
        col: usize,
        message: impl Into<String>,
    ) -> Self {
        ApiDocError::TypeResolution {
            file: file.into(),
            line,
            col,
            message: message.into(),
        }
    }

    /// Create a missing declaration error
    pub fn missing_declaration(
        module: impl Into<String>,
        name: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        ApiDocError::MissingDeclaration {
            module: module.into(),
            name: name.into(),
            expected,
        }
    }

    /// Create an unresolved export error
    pub fn unresolved(
        module: impl Into<String>,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ApiDocError::UnresolvedExport {
            module: module.into(),
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        ApiDocError::Config(message.into())
    }
}
