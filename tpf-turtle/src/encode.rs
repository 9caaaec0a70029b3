//! Role-aware Turtle term encoding.
//!
//! `encode()` maps one RDF term plus its syntactic role to its Turtle text
//! form, shortening IRIs through a prefix mapping where the remainder is a
//! valid local name. Encoding is pure and stateless: the same term with the
//! same prefix mapping always yields byte-identical text.

use crate::chars::{is_iri_char, is_valid_local_name};
use crate::error::{EncodeError, Result};
use tpf_graph::{PrefixMap, Term};

/// Syntactic role of a term within a triple
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermRole {
    Subject,
    Predicate,
    Object,
}

impl std::fmt::Display for TermRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermRole::Subject => write!(f, "subject"),
            TermRole::Predicate => write!(f, "predicate"),
            TermRole::Object => write!(f, "object"),
        }
    }
}

/// Encode a term for the given role.
///
/// - IRIs compact to `prefix:local` when a configured namespace matches and
///   the remainder is a valid local name; otherwise `<iri>`.
/// - `rdf:type` in predicate position encodes as `a`.
/// - Blank nodes encode as `_:label` (invalid as predicate).
/// - Literals encode as `"escaped"` plus `@lang` or `^^datatype` (invalid as
///   subject or predicate; the `xsd:string` suffix is omitted).
pub fn encode(term: &Term, role: TermRole, prefixes: &PrefixMap) -> Result<String> {
    match term {
        Term::Iri(iri) => {
            if iri.is_empty() {
                return Err(EncodeError::EmptyIri { role });
            }
            if role == TermRole::Predicate && iri.as_ref() == tpf_vocab::rdf::TYPE {
                return Ok("a".to_string());
            }
            Ok(encode_iri(iri, prefixes))
        }
        Term::BlankNode(id) => {
            if role == TermRole::Predicate {
                return Err(EncodeError::InvalidRole {
                    kind: "blank node",
                    role,
                });
            }
            Ok(format!("_:{}", id.as_str()))
        }
        Term::Literal {
            lexical,
            datatype,
            language,
        } => {
            if role != TermRole::Object {
                return Err(EncodeError::InvalidRole {
                    kind: "literal",
                    role,
                });
            }
            let mut out = format!("\"{}\"", escape_string(lexical));
            if let Some(lang) = language.as_deref() {
                if !is_valid_language_tag(lang) {
                    return Err(EncodeError::InvalidLanguageTag(lang.to_string()));
                }
                out.push('@');
                out.push_str(lang);
            } else if !datatype.is_xsd_string() {
                out.push_str("^^");
                out.push_str(&encode_iri(datatype.as_iri(), prefixes));
            }
            Ok(out)
        }
    }
}

/// Encode an IRI, preferring the shortened `prefix:local` form.
fn encode_iri(iri: &str, prefixes: &PrefixMap) -> String {
    if let Some((label, local)) = prefixes.shorten(iri) {
        if is_valid_local_name(local) {
            return format!("{}:{}", label, local);
        }
    }
    let mut out = String::with_capacity(iri.len() + 2);
    out.push('<');
    for c in iri.chars() {
        if is_iri_char(c) {
            out.push(c);
        } else if (c as u32) <= 0xFFFF {
            out.push_str(&format!("\\u{:04X}", c as u32));
        } else {
            out.push_str(&format!("\\U{:08X}", c as u32));
        }
    }
    out.push('>');
    out
}

/// Escape a string for a double-quoted Turtle literal.
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// Check a language tag against the Turtle LANGTAG production:
/// `[a-zA-Z]+ ('-' [a-zA-Z0-9]+)*`.
fn is_valid_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let first = match subtags.next() {
        Some(s) => s,
        None => return false,
    };
    if first.is_empty() || !first.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    subtags.all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()))
}
