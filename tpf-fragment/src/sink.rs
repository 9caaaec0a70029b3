//! Downstream text sinks.
//!
//! A `FragmentSink` consumes the ordered text chunks of one serialized
//! fragment. `finish` is called exactly once, after the description block
//! has been fully written, and never before; an aborted write leaves the
//! sink unfinished.

use crate::error::SinkError;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Consumer of ordered text chunks with completion signaling
///
/// Both methods are fallible; a failure aborts the surrounding fragment
/// write. Backpressure is expressed by `write` not resolving until the
/// chunk has been accepted.
#[async_trait]
pub trait FragmentSink: Send {
    /// Accept the next text chunk
    async fn write(&mut self, chunk: &str) -> Result<(), SinkError>;

    /// Signal that the fragment is complete
    async fn finish(&mut self) -> Result<(), SinkError>;
}

// ============================================================================
// BufferSink
// ============================================================================

#[derive(Debug, Default)]
struct BufferState {
    contents: String,
    finished: bool,
}

/// In-memory sink that accumulates chunks into a string
///
/// Observe the output through a [`BufferView`] obtained from
/// [`BufferSink::view`], which stays valid after the sink has been moved
/// into a writer.
#[derive(Debug, Default)]
pub struct BufferSink {
    state: Arc<Mutex<BufferState>>,
}

impl BufferSink {
    /// Create an empty buffer sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a shared view of the captured output
    pub fn view(&self) -> BufferView {
        BufferView {
            state: Arc::clone(&self.state),
        }
    }
}

/// Shared read-only view of a [`BufferSink`]'s captured output
#[derive(Clone, Debug)]
pub struct BufferView {
    state: Arc<Mutex<BufferState>>,
}

impl BufferView {
    /// Everything written so far
    pub fn contents(&self) -> String {
        self.state.lock().expect("buffer lock poisoned").contents.clone()
    }

    /// Whether the sink's completion signal has fired
    pub fn is_finished(&self) -> bool {
        self.state.lock().expect("buffer lock poisoned").finished
    }
}

#[async_trait]
impl FragmentSink for BufferSink {
    async fn write(&mut self, chunk: &str) -> Result<(), SinkError> {
        self.state
            .lock()
            .expect("buffer lock poisoned")
            .contents
            .push_str(chunk);
        Ok(())
    }

    async fn finish(&mut self) -> Result<(), SinkError> {
        self.state.lock().expect("buffer lock poisoned").finished = true;
        Ok(())
    }
}

// ============================================================================
// ChannelSink
// ============================================================================

/// Sink that forwards chunks into a bounded channel
///
/// Useful for streaming a fragment through to an HTTP response body writer:
/// the channel's capacity provides backpressure, and dropping the sender on
/// `finish` closes the stream for the receiver.
#[derive(Debug)]
pub struct ChannelSink {
    sender: Option<mpsc::Sender<String>>,
}

impl ChannelSink {
    /// Wrap a channel sender
    pub fn new(sender: mpsc::Sender<String>) -> Self {
        Self {
            sender: Some(sender),
        }
    }
}

#[async_trait]
impl FragmentSink for ChannelSink {
    async fn write(&mut self, chunk: &str) -> Result<(), SinkError> {
        let sender = self.sender.as_ref().ok_or(SinkError::Closed)?;
        sender
            .send(chunk.to_string())
            .await
            .map_err(|_| SinkError::Closed)
    }

    async fn finish(&mut self) -> Result<(), SinkError> {
        // Dropping the sender closes the receiver's stream.
        self.sender.take().ok_or(SinkError::Closed).map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_buffer_sink_captures_and_finishes() {
        let mut sink = BufferSink::new();
        let view = sink.view();

        sink.write("hello ").await.unwrap();
        sink.write("world").await.unwrap();
        assert_eq!(view.contents(), "hello world");
        assert!(!view.is_finished());

        sink.finish().await.unwrap();
        assert!(view.is_finished());
    }

    #[tokio::test]
    async fn test_channel_sink_forwards_and_closes() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut sink = ChannelSink::new(tx);

        sink.write("chunk").await.unwrap();
        assert_eq!(rx.recv().await.as_deref(), Some("chunk"));

        sink.finish().await.unwrap();
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_channel_sink_errors_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let mut sink = ChannelSink::new(tx);
        assert!(matches!(sink.write("x").await, Err(SinkError::Closed)));
    }
}
