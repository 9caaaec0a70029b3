//! The fragment synchronizer.
//!
//! Merges two independently-timed inputs - the ordered triple sequence and
//! the single metadata event - into one ordered Turtle output. The merge is
//! an explicit two-flag state machine: `metadata_written` and
//! `stream_ended`, with the finalize transition guarded by both. Triples
//! are forwarded the moment they arrive; the description block is written
//! at the earliest point the metadata value is known; the sink's
//! completion signal fires only after both conditions hold.

use crate::description::fragment_description;
use crate::emitter::TurtleEmitter;
use crate::error::WriteError;
use crate::links::page_links;
use crate::settings::WriteSettings;
use crate::sink::FragmentSink;
use crate::source::TripleStream;

/// Streaming Turtle writer for paged triple pattern fragments
///
/// The writer itself carries no state: every [`write_fragment`] call owns
/// an independent emitter and state machine, so one writer value can serve
/// concurrent calls.
///
/// [`write_fragment`]: Self::write_fragment
#[derive(Clone, Copy, Debug, Default)]
pub struct TurtleFragmentWriter;

impl TurtleFragmentWriter {
    /// Create a fragment writer
    pub fn new() -> Self {
        Self
    }

    /// Serialize one fragment: consume `stream` until both the triple
    /// sequence has ended and the metadata event has been written, then
    /// complete the sink.
    ///
    /// Triples are encoded and forwarded immediately in arrival order. The
    /// description block lands wherever the metadata event falls relative
    /// to the triples already forwarded; an empty stream still produces a
    /// valid fragment once metadata arrives. If the stream ends and the
    /// producer has dropped its metadata sender without a value, the write
    /// fails with [`WriteError::MissingMetadata`] rather than waiting
    /// forever.
    ///
    /// On any error the sink is left uncompleted and the stream's producer
    /// handle is disconnected.
    pub async fn write_fragment<S: FragmentSink>(
        &self,
        sink: S,
        stream: TripleStream,
        settings: &WriteSettings,
    ) -> Result<(), WriteError> {
        let TripleStream {
            mut triples,
            mut metadata,
        } = stream;
        let mut emitter = TurtleEmitter::new(sink, &settings.prefixes);

        let mut metadata_written = false;
        let mut metadata_lost = false;
        let mut stream_ended = false;
        let mut triple_count: u64 = 0;
        let mut total_count: u64 = 0;

        tracing::debug!(fragment = %settings.fragment.url, "starting fragment write");

        loop {
            if stream_ended {
                if metadata_written {
                    break;
                }
                if metadata_lost {
                    return Err(WriteError::MissingMetadata);
                }
            }
            // Biased: the description block must land at the earliest point
            // the metadata value is known.
            tokio::select! {
                biased;

                received = &mut metadata, if !metadata_written && !metadata_lost => {
                    match received {
                        Ok(meta) => {
                            let links =
                                page_links(&settings.query, &settings.fragment, meta.total_count);
                            let block = fragment_description(settings, links, meta.total_count);
                            emitter.write_description(&block).await?;
                            total_count = meta.total_count;
                            metadata_written = true;
                        }
                        // Sender dropped without a value. Keep draining
                        // triples; the write fails once the stream ends.
                        Err(_) => metadata_lost = true,
                    }
                }

                item = triples.recv(), if !stream_ended => {
                    match item {
                        Some(Ok(triple)) => {
                            emitter.write_triple(&triple).await?;
                            triple_count += 1;
                        }
                        Some(Err(error)) => return Err(error.into()),
                        None => stream_ended = true,
                    }
                }
            }
        }

        emitter.finish().await?;
        tracing::debug!(
            fragment = %settings.fragment.url,
            triples = triple_count,
            total_count,
            "fragment write complete"
        );
        Ok(())
    }
}
