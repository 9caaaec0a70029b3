//! RDF triple - the atomic unit of the serialized graph

use crate::Term;
use serde::{Deserialize, Serialize};

/// A subject-predicate-object statement
///
/// Triples are immutable once constructed and are serialized in arrival
/// order; grouping by subject is a formatting concern, never a reordering
/// concern.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Subject (IRI or blank node)
    pub subject: Term,
    /// Predicate (IRI only)
    pub predicate: Term,
    /// Object (any term)
    pub object: Term,
}

impl Triple {
    /// Create a new triple
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
