//! Turtle text encoding for RDF terms.
//!
//! This crate provides the pure, stateless half of Turtle serialization:
//! mapping one term plus its syntactic role to its textual form, using a
//! prefix mapping to shorten known vocabulary IRIs. It performs no I/O and
//! holds no state; statement assembly (subject grouping, prefix
//! declarations) lives in `tpf-fragment`.
//!
//! # Example
//!
//! ```
//! use tpf_graph::{PrefixMap, Term};
//! use tpf_turtle::{encode, TermRole};
//!
//! let prefixes: PrefixMap =
//!     [("foaf", "http://xmlns.com/foaf/0.1/")].into_iter().collect();
//!
//! let name = Term::iri("http://xmlns.com/foaf/0.1/name");
//! assert_eq!(encode(&name, TermRole::Predicate, &prefixes).unwrap(), "foaf:name");
//! ```

pub mod chars;
pub mod encode;
pub mod error;

pub use encode::{encode, TermRole};
pub use error::{EncodeError, Result};
