//! Error types for Turtle encoding

use crate::encode::TermRole;

/// Error type for Turtle encoding operations
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// IRI term with an empty value
    #[error("Empty IRI in {role} position")]
    EmptyIri { role: TermRole },

    /// Term kind is not allowed in its syntactic role
    #[error("{kind} is not valid in {role} position")]
    InvalidRole { kind: &'static str, role: TermRole },

    /// Language tag is not a well-formed BCP 47 tag
    #[error("Invalid language tag: {0:?}")]
    InvalidLanguageTag(String),
}

/// Result type for Turtle encoding operations
pub type Result<T> = std::result::Result<T, EncodeError>;
