use std::path::PathBuf;

use thiserror::Error;

use crate::detection::domain::classifier_set::ClassifierSetError;
use crate::shared::app_config::ConfigError;

type BoxError = Box<dyn std::error::Error>;

/// Startup failures. Nothing has been processed when one of these is
/// returned, and every collaborator opened so far has been released.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to set up frame processing: {0}")]
    Processing(#[source] BoxError),
    #[error("failed to open display: {0}")]
    Display(#[source] BoxError),
    #[error("failed to load classifier {}: {source}", .path.display())]
    ClassifierLoad {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
    #[error("no classifiers configured")]
    NoClassifiers,
    #[error("failed to open {source_desc}: {source}")]
    SourceOpen {
        source_desc: String,
        #[source]
        source: BoxError,
    },
}

impl From<ClassifierSetError> for InitError {
    fn from(err: ClassifierSetError) -> Self {
        match err {
            ClassifierSetError::Load { path, source } => Self::ClassifierLoad { path, source },
            ClassifierSetError::Empty => Self::NoClassifiers,
        }
    }
}

/// Why a session stopped without an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The source failed to deliver a frame or delivered an empty one.
    EndOfStream,
    EscapePressed,
    WindowClosed,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::EndOfStream => "end of stream",
            Self::EscapePressed => "exit key pressed",
            Self::WindowClosed => "window closed",
        };
        f.write_str(text)
    }
}

/// A collaborator failed mid-run. The run is aborted.
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("frame capture failed: {0}")]
    Capture(#[source] BoxError),
    #[error("preprocessing failed: {0}")]
    Preprocess(#[source] BoxError),
    #[error("detection with {classifier} failed: {source}")]
    Detection {
        classifier: String,
        #[source]
        source: BoxError,
    },
    #[error("drawing detections failed: {0}")]
    Annotation(#[source] BoxError),
    #[error("display failed: {0}")]
    Display(#[source] BoxError),
}

/// Any failure that ends the program with a nonzero exit code.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Init(#[from] InitError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
