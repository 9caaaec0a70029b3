//! Description block construction.
//!
//! Builds the self-contained set of statements describing the fragment
//! itself: dataset provenance, the hypermedia search control, pagination
//! links, and the total item count. Absent settings fields suppress their
//! statements; only the fragment URL is always present.

use crate::links::PageLinks;
use crate::settings::WriteSettings;
use tpf_graph::{Datatype, Term, Triple};
use tpf_vocab::{dcterms, hydra, rdf, void};

fn integer(value: u64) -> Term {
    Term::typed(value.to_string(), Datatype::xsd_integer())
}

/// Build the description block for one fragment.
///
/// Statements are ordered so that all statements about one subject are
/// consecutive, letting the emitter group them into single subject blocks.
pub fn fragment_description(
    settings: &WriteSettings,
    links: PageLinks,
    total_count: u64,
) -> Vec<Triple> {
    let ds = &settings.datasource;
    let frag = &settings.fragment;
    let page = Term::iri(frag.page());
    let mut triples = Vec::new();

    // Dataset provenance and the hypermedia search control
    if let Some(ds_url) = ds.url.as_deref() {
        let dataset = Term::iri(ds_url);
        triples.push(Triple::new(
            dataset.clone(),
            Term::iri(rdf::TYPE),
            Term::iri(void::DATASET),
        ));
        triples.push(Triple::new(
            dataset.clone(),
            Term::iri(rdf::TYPE),
            Term::iri(hydra::COLLECTION),
        ));
        if let Some(title) = ds.title.as_deref() {
            triples.push(Triple::new(
                dataset.clone(),
                Term::iri(dcterms::TITLE),
                Term::string(title),
            ));
        }
        if ds.template_url.is_some() {
            triples.push(Triple::new(
                dataset.clone(),
                Term::iri(hydra::SEARCH),
                Term::blank("pattern"),
            ));
        }
        triples.push(Triple::new(
            dataset,
            Term::iri(void::SUBSET),
            Term::iri(&frag.url),
        ));
        if let Some(template) = ds.template_url.as_deref() {
            triples.extend(search_control(template));
        }
    }

    // Fragment and page metadata
    if frag.page_url.as_deref().is_some_and(|p| p != frag.url) {
        triples.push(Triple::new(
            Term::iri(&frag.url),
            Term::iri(void::SUBSET),
            page.clone(),
        ));
    }
    triples.push(Triple::new(
        page.clone(),
        Term::iri(rdf::TYPE),
        Term::iri(hydra::PAGED_COLLECTION),
    ));
    if let Some(ds_url) = ds.url.as_deref() {
        triples.push(Triple::new(
            page.clone(),
            Term::iri(dcterms::SOURCE),
            Term::iri(ds_url),
        ));
    }
    if let Some(pattern) = settings.query.pattern_string.as_deref() {
        triples.push(Triple::new(
            page.clone(),
            Term::iri(dcterms::DESCRIPTION),
            Term::string(format!("Triples matching the pattern {}", pattern)),
        ));
    }
    triples.push(Triple::new(
        page.clone(),
        Term::iri(void::TRIPLES),
        integer(total_count),
    ));
    triples.push(Triple::new(
        page.clone(),
        Term::iri(hydra::TOTAL_ITEMS),
        integer(total_count),
    ));
    if let Some(limit) = settings.query.limit {
        triples.push(Triple::new(
            page.clone(),
            Term::iri(hydra::ITEMS_PER_PAGE),
            integer(limit),
        ));
    }
    if links.first {
        if let Some(url) = frag.first_page_url.as_deref() {
            triples.push(Triple::new(
                page.clone(),
                Term::iri(hydra::FIRST_PAGE),
                Term::iri(url),
            ));
        }
    }
    if links.previous {
        if let Some(url) = frag.previous_page_url.as_deref() {
            triples.push(Triple::new(
                page.clone(),
                Term::iri(hydra::PREVIOUS_PAGE),
                Term::iri(url),
            ));
        }
    }
    if links.next {
        if let Some(url) = frag.next_page_url.as_deref() {
            triples.push(Triple::new(
                page,
                Term::iri(hydra::NEXT_PAGE),
                Term::iri(url),
            ));
        }
    }

    triples
}

/// The hydra search control: template plus one variable mapping per
/// triple pattern position.
fn search_control(template: &str) -> Vec<Triple> {
    let pattern = Term::blank("pattern");
    let mut triples = vec![Triple::new(
        pattern.clone(),
        Term::iri(hydra::TEMPLATE),
        Term::string(template),
    )];
    for position in ["subject", "predicate", "object"] {
        triples.push(Triple::new(
            pattern.clone(),
            Term::iri(hydra::MAPPING),
            Term::blank(position),
        ));
    }
    for (position, property) in [
        ("subject", rdf::SUBJECT),
        ("predicate", rdf::PREDICATE),
        ("object", rdf::OBJECT),
    ] {
        let mapping = Term::blank(position);
        triples.push(Triple::new(
            mapping.clone(),
            Term::iri(hydra::VARIABLE),
            Term::string(position),
        ));
        triples.push(Triple::new(
            mapping,
            Term::iri(hydra::PROPERTY),
            Term::iri(property),
        ));
    }
    triples
}
