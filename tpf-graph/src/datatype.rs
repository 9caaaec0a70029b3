//! RDF datatype representation
//!
//! Datatypes are always explicit in this model - there is no "untyped"
//! literal. Plain strings default to `xsd:string`, and language-tagged
//! strings use `rdf:langString`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// RDF literal datatype (always an expanded IRI)
///
/// Use `Datatype::xsd_string()` for plain strings and
/// `Datatype::rdf_lang_string()` for language-tagged strings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:string - default for plain string literals
    pub fn xsd_string() -> Self {
        Self::from_iri(tpf_vocab::xsd::STRING)
    }

    /// xsd:integer
    pub fn xsd_integer() -> Self {
        Self::from_iri(tpf_vocab::xsd::INTEGER)
    }

    /// xsd:boolean
    pub fn xsd_boolean() -> Self {
        Self::from_iri(tpf_vocab::xsd::BOOLEAN)
    }

    /// rdf:langString - for language-tagged literals
    pub fn rdf_lang_string() -> Self {
        Self::from_iri(tpf_vocab::rdf::LANG_STRING)
    }

    /// Get the IRI representation of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Check if this is the xsd:string datatype
    pub fn is_xsd_string(&self) -> bool {
        self.0.as_ref() == tpf_vocab::xsd::STRING
    }

    /// Check if this is the rdf:langString datatype
    pub fn is_lang_string(&self) -> bool {
        self.0.as_ref() == tpf_vocab::rdf::LANG_STRING
    }
}

impl PartialEq for Datatype {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Datatype {}

impl std::hash::Hash for Datatype {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
