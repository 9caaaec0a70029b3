//! Streaming Turtle writer for paged triple pattern fragments.
//!
//! A linked-data fragment server answers a triple pattern query with one
//! page of matching triples plus metadata: the total match count, dataset
//! provenance, and first/next/previous page links. The triples stream in
//! from a backing store while the total count arrives out-of-band at an
//! unpredictable time - before the first triple, interleaved, or after the
//! stream has ended. This crate serializes both into a single-pass Turtle
//! document without buffering the stream.
//!
//! The entry point is [`TurtleFragmentWriter::write_fragment`], which takes
//! a [`FragmentSink`] for the output text, a [`TripleStream`] carrying the
//! triples and the metadata event, and the per-fragment [`WriteSettings`].
//!
//! ```ignore
//! use tpf_fragment::{
//!     BufferSink, FragmentMetadata, TripleStream, TurtleFragmentWriter, WriteSettings,
//! };
//!
//! let writer = TurtleFragmentWriter::new();
//! let (mut handle, stream) = TripleStream::channel(16);
//! let sink = BufferSink::new();
//! let view = sink.view();
//!
//! let write = tokio::spawn(async move {
//!     writer.write_fragment(sink, stream, &settings).await
//! });
//!
//! handle.send(triple).await?;
//! handle.metadata(FragmentMetadata { total_count: 1234 });
//! handle.finish();
//!
//! write.await??;
//! println!("{}", view.contents());
//! ```

mod description;
mod emitter;
mod error;
mod links;
mod settings;
mod sink;
mod source;
mod writer;

pub use description::fragment_description;
pub use emitter::TurtleEmitter;
pub use error::{SinkError, SourceError, WriteError};
pub use links::{page_links, PageLinks};
pub use settings::{DatasourceInfo, FragmentMetadata, FragmentUrls, PageQuery, WriteSettings};
pub use sink::{BufferSink, BufferView, ChannelSink, FragmentSink};
pub use source::{StreamClosed, TripleStream, TripleStreamHandle};
pub use writer::TurtleFragmentWriter;
