use thiserror::Error;

/// Errors that can occur while exporting the canvas to disk
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("the canvas has not been created yet")]
    NotInitialized,
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during editor state transitions
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StateTransitionError {
    #[error("cannot transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}
