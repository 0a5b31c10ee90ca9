//! Run-time errors surfaced by generated clients.

use thiserror::Error;

/// Error type returned by every generated client method.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client was constructed without a processor.
    #[error("remote client requires a request processor")]
    MissingProcessor,

    /// A method was invoked after the client was disposed.
    #[error("remote client is already disposed")]
    Disposed,

    /// A parameter value could not be converted into a wire value.
    #[error("failed to encode parameter value: {0}")]
    Encode(#[from] serde_json::Error),

    /// The processor failed to carry out the request.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ClientError {
    /// Wrap a processor-level failure message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}
