//! Upstream triple source.
//!
//! A `TripleStream` is the writer-side view of one fragment's input: an
//! ordered, backpressured sequence of triples plus the single out-of-band
//! metadata event. The producer side holds a `TripleStreamHandle`.
//!
//! The metadata event rides a oneshot channel, so delivering it twice is
//! structurally impossible; a second `metadata()` call on the handle is
//! ignored (first-one-wins). Dropping the handle without calling
//! `metadata()` tells the writer the event can never arrive.

use crate::error::SourceError;
use crate::settings::FragmentMetadata;
use tpf_graph::Triple;
use tokio::sync::{mpsc, oneshot};

/// The writer is no longer consuming this stream
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("fragment writer is no longer consuming this stream")]
pub struct StreamClosed;

/// Writer-side view of one fragment's input sequence
#[derive(Debug)]
pub struct TripleStream {
    pub(crate) triples: mpsc::Receiver<Result<Triple, SourceError>>,
    pub(crate) metadata: oneshot::Receiver<FragmentMetadata>,
}

impl TripleStream {
    /// Create a bounded triple stream plus its producer handle
    ///
    /// `capacity` bounds the number of triples in flight between producer
    /// and writer; a slow sink backpressures through it.
    pub fn channel(capacity: usize) -> (TripleStreamHandle, TripleStream) {
        let (triple_tx, triple_rx) = mpsc::channel(capacity);
        let (meta_tx, meta_rx) = oneshot::channel();
        (
            TripleStreamHandle {
                triples: Some(triple_tx),
                metadata: Some(meta_tx),
            },
            TripleStream {
                triples: triple_rx,
                metadata: meta_rx,
            },
        )
    }
}

/// Producer side of a [`TripleStream`]
#[derive(Debug)]
pub struct TripleStreamHandle {
    triples: Option<mpsc::Sender<Result<Triple, SourceError>>>,
    metadata: Option<oneshot::Sender<FragmentMetadata>>,
}

impl TripleStreamHandle {
    /// Send the next triple, waiting for channel capacity
    ///
    /// Fails once the stream has been finished or the writer has aborted.
    pub async fn send(&self, triple: Triple) -> Result<(), StreamClosed> {
        let sender = self.triples.as_ref().ok_or(StreamClosed)?;
        sender.send(Ok(triple)).await.map_err(|_| StreamClosed)
    }

    /// Deliver the single metadata event
    ///
    /// The first call wins; later calls are ignored with a debug log, per
    /// the first-event-wins contract.
    pub fn metadata(&mut self, metadata: FragmentMetadata) {
        match self.metadata.take() {
            Some(sender) => {
                // The writer may already have aborted; nothing to do then.
                let _ = sender.send(metadata);
            }
            None => {
                tracing::debug!(
                    total_count = metadata.total_count,
                    "ignoring duplicate metadata event"
                );
            }
        }
    }

    /// Signal a source failure and end the sequence
    pub async fn fail(&mut self, error: SourceError) -> Result<(), StreamClosed> {
        let sender = self.triples.take().ok_or(StreamClosed)?;
        sender.send(Err(error)).await.map_err(|_| StreamClosed)
    }

    /// Signal end-of-sequence
    ///
    /// The metadata event may still be delivered afterwards; the writer
    /// will not complete the sink until it is.
    pub fn finish(&mut self) {
        self.triples = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tpf_graph::Term;

    fn triple() -> Triple {
        Triple::new(
            Term::iri("http://ex.org/s"),
            Term::iri("http://ex.org/p"),
            Term::iri("http://ex.org/o"),
        )
    }

    #[tokio::test]
    async fn test_send_after_finish_fails() {
        let (mut handle, _stream) = TripleStream::channel(4);
        handle.send(triple()).await.unwrap();
        handle.finish();
        assert_eq!(handle.send(triple()).await, Err(StreamClosed));
    }

    #[tokio::test]
    async fn test_send_after_writer_drop_fails() {
        let (handle, stream) = TripleStream::channel(1);
        drop(stream);
        assert_eq!(handle.send(triple()).await, Err(StreamClosed));
    }

    #[tokio::test]
    async fn test_duplicate_metadata_is_ignored() {
        let (mut handle, stream) = TripleStream::channel(1);
        handle.metadata(FragmentMetadata { total_count: 7 });
        handle.metadata(FragmentMetadata { total_count: 8 });

        let received = stream.metadata.await.unwrap();
        assert_eq!(received.total_count, 7);
    }
}
