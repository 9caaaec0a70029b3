//! RDF Vocabulary Constants for Triple Pattern Fragments
//!
//! This crate provides a centralized location for the RDF vocabulary IRIs
//! used when serializing paged fragments of a linked-data collection.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `hydra` - Hydra Core hypermedia vocabulary (http://www.w3.org/ns/hydra/core#)
//! - `void` - VoID dataset vocabulary (http://rdfs.org/ns/void#)
//! - `dcterms` - Dublin Core terms (http://purl.org/dc/terms/)
//!
//! Each vocabulary module also exposes a `NAMESPACE` constant for prefix
//! declarations.

/// RDF vocabulary constants
pub mod rdf {
    /// RDF namespace IRI
    pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:subject IRI
    pub const SUBJECT: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#subject";

    /// rdf:predicate IRI
    pub const PREDICATE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#predicate";

    /// rdf:object IRI
    pub const OBJECT: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#object";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// XSD vocabulary constants
pub mod xsd {
    /// XSD namespace IRI
    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
}

/// Hydra Core hypermedia vocabulary constants
pub mod hydra {
    /// Hydra namespace IRI
    pub const NAMESPACE: &str = "http://www.w3.org/ns/hydra/core#";

    /// hydra:Collection IRI
    pub const COLLECTION: &str = "http://www.w3.org/ns/hydra/core#Collection";

    /// hydra:PagedCollection IRI
    pub const PAGED_COLLECTION: &str = "http://www.w3.org/ns/hydra/core#PagedCollection";

    /// hydra:search IRI
    pub const SEARCH: &str = "http://www.w3.org/ns/hydra/core#search";

    /// hydra:template IRI
    pub const TEMPLATE: &str = "http://www.w3.org/ns/hydra/core#template";

    /// hydra:mapping IRI
    pub const MAPPING: &str = "http://www.w3.org/ns/hydra/core#mapping";

    /// hydra:variable IRI
    pub const VARIABLE: &str = "http://www.w3.org/ns/hydra/core#variable";

    /// hydra:property IRI
    pub const PROPERTY: &str = "http://www.w3.org/ns/hydra/core#property";

    /// hydra:totalItems IRI
    pub const TOTAL_ITEMS: &str = "http://www.w3.org/ns/hydra/core#totalItems";

    /// hydra:itemsPerPage IRI
    pub const ITEMS_PER_PAGE: &str = "http://www.w3.org/ns/hydra/core#itemsPerPage";

    /// hydra:firstPage IRI
    pub const FIRST_PAGE: &str = "http://www.w3.org/ns/hydra/core#firstPage";

    /// hydra:nextPage IRI
    pub const NEXT_PAGE: &str = "http://www.w3.org/ns/hydra/core#nextPage";

    /// hydra:previousPage IRI
    pub const PREVIOUS_PAGE: &str = "http://www.w3.org/ns/hydra/core#previousPage";
}

/// VoID dataset vocabulary constants
pub mod void {
    /// VoID namespace IRI
    pub const NAMESPACE: &str = "http://rdfs.org/ns/void#";

    /// void:Dataset IRI
    pub const DATASET: &str = "http://rdfs.org/ns/void#Dataset";

    /// void:subset IRI
    pub const SUBSET: &str = "http://rdfs.org/ns/void#subset";

    /// void:triples IRI
    pub const TRIPLES: &str = "http://rdfs.org/ns/void#triples";
}

/// Dublin Core terms constants
pub mod dcterms {
    /// Dublin Core terms namespace IRI
    pub const NAMESPACE: &str = "http://purl.org/dc/terms/";

    /// dcterms:title IRI
    pub const TITLE: &str = "http://purl.org/dc/terms/title";

    /// dcterms:source IRI
    pub const SOURCE: &str = "http://purl.org/dc/terms/source";

    /// dcterms:description IRI
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
}
