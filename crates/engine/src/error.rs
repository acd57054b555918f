//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`Read`] thrown when a document of the vault cannot be read.
//! - [`Lookup`] thrown when a path of the vault cannot be inspected.
//! - [`Settings`] thrown when the persisted settings cannot be loaded or saved.
//!
//! Missing vault age sources and unknown currencies are not errors: they
//! degrade to `0` days and to the default currency entry respectively.
//!
//!  [`Read`]: EngineError::Read
//!  [`Lookup`]: EngineError::Lookup
//!  [`Settings`]: EngineError::Settings
use std::{io, path::PathBuf};

use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("cannot read \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot inspect \"{}\": {source}", .path.display())]
    Lookup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Settings error: {0}")]
    Settings(String),
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),
    #[error("Background task failed: {0}")]
    Task(String),
}

impl EngineError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn lookup(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Lookup {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(value: serde_json::Error) -> Self {
        Self::Settings(value.to_string())
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Read { path: a, source: x }, Self::Read { path: b, source: y }) => {
                a == b && x.kind() == y.kind()
            }
            (Self::Lookup { path: a, source: x }, Self::Lookup { path: b, source: y }) => {
                a == b && x.kind() == y.kind()
            }
            (Self::Settings(a), Self::Settings(b)) => a == b,
            (Self::MissingCollaborator(a), Self::MissingCollaborator(b)) => a == b,
            (Self::Task(a), Self::Task(b)) => a == b,
            _ => false,
        }
    }
}
