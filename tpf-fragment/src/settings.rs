//! Per-invocation write settings.
//!
//! `WriteSettings` describes one fragment to be written: the dataset it
//! belongs to, the fragment's own URL and navigation links, the prefix
//! mapping for IRI shortening, and the pagination cursor. Field names
//! deserialize from camelCase so LDF-server-style JSON configuration maps
//! directly onto these types.

use serde::{Deserialize, Serialize};
use tpf_graph::PrefixMap;

/// Settings for one fragment-write invocation
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WriteSettings {
    /// The overall dataset this fragment is a page of
    pub datasource: DatasourceInfo,
    /// The fragment's identity and navigation URLs
    pub fragment: FragmentUrls,
    /// Prefix label → namespace mapping for IRI shortening
    pub prefixes: PrefixMap,
    /// Pagination cursor for the current page
    pub query: PageQuery,
}

/// Description of the overall dataset
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatasourceInfo {
    /// Human-readable dataset title
    pub title: Option<String>,
    /// Dataset URL
    pub url: Option<String>,
    /// URI template for triple pattern search over the dataset
    pub template_url: Option<String>,
}

/// Page identity and navigation URLs
///
/// `url` is the only required field in the whole settings object; absent
/// optional fields suppress the corresponding output statements.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FragmentUrls {
    /// Canonical fragment URL
    pub url: String,
    /// URL of the current page (defaults to `url` when absent)
    pub page_url: Option<String>,
    /// URL of the first page
    pub first_page_url: Option<String>,
    /// URL of the next page
    pub next_page_url: Option<String>,
    /// URL of the previous page
    pub previous_page_url: Option<String>,
}

impl FragmentUrls {
    /// The URL identifying the current page
    pub fn page(&self) -> &str {
        self.page_url.as_deref().unwrap_or(&self.url)
    }
}

/// Pagination cursor for the current page
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageQuery {
    /// Number of triples skipped before this page
    pub offset: Option<u64>,
    /// Maximum number of triples on one page
    pub limit: Option<u64>,
    /// Human-readable rendering of the triple pattern
    pub pattern_string: Option<String>,
}

/// The out-of-band metadata record: total triples in the unpaged result set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentMetadata {
    /// Total number of triples matching the pattern across all pages
    pub total_count: u64,
}
