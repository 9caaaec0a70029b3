//! RDF graph data model for triple pattern fragment serialization
//!
//! This crate provides the canonical types a fragment writer consumes:
//! terms, triples, and prefix mappings.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form.
//!    Compaction is handled by formatters at output time.
//!
//! 2. **Explicit datatypes** - Literals always have an explicit datatype,
//!    never optional. Plain strings use `xsd:string`, language-tagged
//!    strings use `rdf:langString`.
//!
//! 3. **Deterministic prefixes** - `PrefixMap` iterates in label order, so
//!    prefix declarations serialize stably.
//!
//! # Example
//!
//! ```
//! use tpf_graph::{Term, Triple};
//!
//! let triple = Triple::new(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//! );
//! assert!(triple.predicate.is_iri());
//! ```

mod datatype;
mod prefix;
mod term;
mod triple;

pub use datatype::Datatype;
pub use prefix::PrefixMap;
pub use term::{BlankId, Term};
pub use triple::Triple;
