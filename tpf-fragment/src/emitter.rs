//! Stateful Turtle emitter.
//!
//! Accumulates encoded terms into valid Turtle blocks: the prefix prologue
//! is written once, lazily, before the first content write; consecutive
//! statements sharing a subject merge into one subject block (`;`
//! continuations), and statements sharing subject and predicate merge into
//! object lists (`,`). The emitter holds only the identity of the open
//! (subject, predicate) pair, never a triple, so memory stays O(1) in the
//! stream length.

use crate::error::WriteError;
use crate::sink::FragmentSink;
use tpf_graph::{PrefixMap, Triple};
use tpf_turtle::{encode, TermRole};

#[derive(Debug)]
struct OpenBlock {
    subject: String,
    predicate: String,
}

/// Writes one fragment's Turtle text to a sink
///
/// Owns the sink for the duration of one fragment write; dropping the
/// emitter without calling [`finish`](Self::finish) leaves the sink
/// unfinished, which is the abort path.
pub struct TurtleEmitter<'a, S: FragmentSink> {
    sink: S,
    prefixes: &'a PrefixMap,
    prologue_written: bool,
    open: Option<OpenBlock>,
}

impl<'a, S: FragmentSink> TurtleEmitter<'a, S> {
    /// Create an emitter writing to `sink` with the given prefix mapping
    pub fn new(sink: S, prefixes: &'a PrefixMap) -> Self {
        Self {
            sink,
            prefixes,
            prologue_written: false,
            open: None,
        }
    }

    /// Append one data triple, grouping it into the open subject block
    /// where possible
    pub async fn write_triple(&mut self, triple: &Triple) -> Result<(), WriteError> {
        let subject = encode(&triple.subject, TermRole::Subject, self.prefixes)?;
        let predicate = encode(&triple.predicate, TermRole::Predicate, self.prefixes)?;
        let object = encode(&triple.object, TermRole::Object, self.prefixes)?;
        self.write_grouped(subject, predicate, object).await
    }

    /// Append the description block as a self-contained set of statements
    ///
    /// Any open data block is terminated first, and the block's own final
    /// statement is terminated before returning, so surrounding data
    /// triples never merge into it.
    pub async fn write_description(&mut self, triples: &[Triple]) -> Result<(), WriteError> {
        self.write_prologue_once().await?;
        self.close_block().await?;
        for triple in triples {
            self.write_triple(triple).await?;
        }
        self.close_block().await?;
        Ok(())
    }

    /// Terminate the open block and signal sink completion
    pub async fn finish(mut self) -> Result<(), WriteError> {
        self.close_block().await?;
        self.sink.finish().await?;
        Ok(())
    }

    async fn write_grouped(
        &mut self,
        subject: String,
        predicate: String,
        object: String,
    ) -> Result<(), WriteError> {
        self.write_prologue_once().await?;
        let chunk = match self.open.take() {
            Some(open) if open.subject == subject && open.predicate == predicate => {
                let chunk = format!(", {object}");
                self.open = Some(open);
                chunk
            }
            Some(open) if open.subject == subject => {
                let chunk = format!(";\n    {predicate} {object}");
                self.open = Some(OpenBlock {
                    subject: open.subject,
                    predicate,
                });
                chunk
            }
            Some(_) => {
                let chunk = format!(".\n{subject} {predicate} {object}");
                self.open = Some(OpenBlock { subject, predicate });
                chunk
            }
            None => {
                let chunk = format!("{subject} {predicate} {object}");
                self.open = Some(OpenBlock { subject, predicate });
                chunk
            }
        };
        self.sink.write(&chunk).await?;
        Ok(())
    }

    async fn write_prologue_once(&mut self) -> Result<(), WriteError> {
        if self.prologue_written {
            return Ok(());
        }
        self.prologue_written = true;
        if self.prefixes.is_empty() {
            return Ok(());
        }
        let mut prologue = String::new();
        for (label, namespace) in self.prefixes.iter() {
            prologue.push_str(&format!("@prefix {label}: <{namespace}>.\n"));
        }
        self.sink.write(&prologue).await?;
        Ok(())
    }

    async fn close_block(&mut self) -> Result<(), WriteError> {
        if self.open.take().is_some() {
            self.sink.write(".\n").await?;
        }
        Ok(())
    }
}
