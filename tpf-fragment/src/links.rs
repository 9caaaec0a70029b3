//! Page-link decision logic.
//!
//! Computes which of the first/next/previous navigation links apply to a
//! page, given the pagination cursor and the total result count. Pure and
//! only meaningful once the metadata event has delivered `total_count`.

use crate::settings::{FragmentUrls, PageQuery};

/// Which navigation links the description block should include
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageLinks {
    /// Link to the first page
    pub first: bool,
    /// Link to the next page (only when unseen triples remain)
    pub next: bool,
    /// Link to the previous page (only when offset > 0)
    pub previous: bool,
}

/// Decide the applicable navigation links.
///
/// - `first`: whenever a first-page URL is configured.
/// - `next`: whenever a next-page URL is configured and
///   `offset + limit < total_count`; an absent limit means the page is
///   unbounded, so there is no next page.
/// - `previous`: whenever a previous-page URL is configured and the offset
///   is positive (an absent offset counts as 0).
pub fn page_links(query: &PageQuery, fragment: &FragmentUrls, total_count: u64) -> PageLinks {
    let offset = query.offset.unwrap_or(0);
    let has_more = match query.limit {
        Some(limit) => offset.saturating_add(limit) < total_count,
        None => false,
    };
    PageLinks {
        first: fragment.first_page_url.is_some(),
        next: fragment.next_page_url.is_some() && has_more,
        previous: fragment.previous_page_url.is_some() && offset > 0,
    }
}
