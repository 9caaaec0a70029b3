//! Error types for fragment writing

use tpf_turtle::EncodeError;

/// Downstream sink rejected a write or its completion signal
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The sink's consumer went away
    #[error("sink closed")]
    Closed,

    /// The sink failed to accept a chunk
    #[error("sink write failed: {0}")]
    Write(String),
}

/// Upstream triple source signaled a failure in-band
#[derive(Clone, Debug, thiserror::Error)]
#[error("triple source failed: {0}")]
pub struct SourceError(pub String);

impl SourceError {
    /// Create a source error from any message
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Caller-facing error for one `write_fragment` invocation
///
/// Any of these aborts the write: the sink is left uncompleted and the
/// producer handle is disconnected.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// A triple term could not be encoded
    #[error("malformed term: {0}")]
    MalformedTerm(#[from] EncodeError),

    /// The sink rejected a write
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// The triple source reported an error
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The stream ended and the metadata sender was dropped without a value,
    /// so the metadata event can provably never arrive
    #[error("triple stream ended but no metadata event was delivered")]
    MissingMetadata,
}
