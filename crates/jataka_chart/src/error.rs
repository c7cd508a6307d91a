//! Error types for chart assembly.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use thiserror::Error;

/// The external collaborator a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Ephemeris,
    Houses,
    Navamsa,
}

impl Display for Collaborator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ephemeris => "ephemeris provider",
            Self::Houses => "house generator",
            Self::Navamsa => "navamsa generator",
        };
        f.write_str(name)
    }
}

/// Failure reported by an external collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{collaborator} failed: {message}")]
pub struct CollaboratorError {
    pub collaborator: Collaborator,
    pub message: String,
}

impl CollaboratorError {
    pub fn new(collaborator: Collaborator, message: impl Into<String>) -> Self {
        Self {
            collaborator,
            message: message.into(),
        }
    }
}

/// Errors that abort a chart request.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// The request was incomplete or out of range.
    #[error("invalid input: {0}")]
    Validation(String),
    /// An external collaborator failed; the request cannot be completed.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

impl ChartError {
    /// HTTP-style status class: 400 for caller errors, 500 otherwise.
    pub fn status(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Collaborator(_) => 500,
        }
    }

    /// True when the caller can fix the request.
    pub fn is_client_error(&self) -> bool {
        self.status() == 400
    }
}

/// Errors loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors loading recorded collaborator output.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid fixture: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes() {
        assert_eq!(ChartError::Validation("x".into()).status(), 400);
        let e: ChartError = CollaboratorError::new(Collaborator::Houses, "boom").into();
        assert_eq!(e.status(), 500);
        assert!(!e.is_client_error());
    }

    #[test]
    fn collaborator_message_names_source() {
        let e = CollaboratorError::new(Collaborator::Ephemeris, "kernel missing");
        assert_eq!(e.to_string(), "ephemeris provider failed: kernel missing");
        assert_eq!(
            ChartError::from(e).to_string(),
            "ephemeris provider failed: kernel missing"
        );
    }
}
