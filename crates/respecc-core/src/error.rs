//! Error types and result aliases for the Respecc++ compiler.

use crate::Span;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Main error type for the Respecc++ compiler.
///
/// Semantic analysis is fail-fast: the first failed check is returned as a
/// `SemanticWithSpan` error and the whole program is rejected.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Semantic error: {0}")]
    Semantic(String),

    #[error("{0}")]
    #[diagnostic(code(respecc::semantic))]
    SemanticWithSpan(String, #[label("here")] Span),
}

impl Error {
    /// Returns the human-readable message without the error-kind prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Io(err) => err.to_string(),
            Self::Config(message) | Self::Semantic(message) => message.clone(),
            Self::SemanticWithSpan(message, _) => message.clone(),
        }
    }

    /// Returns the source span attached to this error, if any.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::SemanticWithSpan(_, span) => Some(*span),
            _ => None,
        }
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::from(span.start.offset..span.end.offset)
    }
}

/// Result type alias using the Respecc++ Error type.
pub type Result<T> = std::result::Result<T, Error>;
