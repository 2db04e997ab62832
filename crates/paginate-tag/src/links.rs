// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Previous/next link construction.
//!
//! Links are the current URL with its query string replaced by a single page
//! parameter. `previous` is emitted unless the current page is the first one,
//! `next` unless it is the last one. An empty collection (zero pages) emits
//! neither.

use crate::metadata::NavLink;
use crate::options::PaginateOptions;
use crate::request::CurrentUrl;

/// Previous and next links for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLinks {
    /// Link to `current_page - 1`.
    pub previous: Option<NavLink>,
    /// Link to `current_page + 1`.
    pub next: Option<NavLink>,
}

/// Builds the navigation links for `current_page` of `total_pages`.
pub fn build_links(
    url: &CurrentUrl,
    current_page: usize,
    total_pages: usize,
    options: &PaginateOptions,
) -> NavLinks {
    if total_pages == 0 {
        return NavLinks::default();
    }

    let previous = (current_page != 1).then(|| NavLink {
        title: options.previous_label.clone(),
        url: page_url(url, &options.page_param, current_page - 1),
    });

    let next = (current_page != total_pages).then(|| NavLink {
        title: options.next_label.clone(),
        url: page_url(url, &options.page_param, current_page.saturating_add(1)),
    });

    NavLinks { previous, next }
}

/// Returns `scheme://host/path?<param>=<page>`.
pub fn page_url(url: &CurrentUrl, param: &str, page: usize) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(param, &page.to_string())
        .finish();
    format!("{}?{}", url.base(), query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> CurrentUrl {
        CurrentUrl::new("https", "example.com", "/blog")
    }

    #[test]
    fn test_first_page_has_only_next() {
        let links = build_links(&url(), 1, 4, &PaginateOptions::default());
        assert!(links.previous.is_none());
        let next = links.next.unwrap();
        assert_eq!(next.title, "Next »");
        assert_eq!(next.url, "https://example.com/blog?page=2");
    }

    #[test]
    fn test_last_page_has_only_previous() {
        let links = build_links(&url(), 4, 4, &PaginateOptions::default());
        assert!(links.next.is_none());
        let previous = links.previous.unwrap();
        assert_eq!(previous.title, "« Previous");
        assert_eq!(previous.url, "https://example.com/blog?page=3");
    }

    #[test]
    fn test_middle_page_has_both() {
        let links = build_links(&url(), 2, 4, &PaginateOptions::default());
        assert_eq!(links.previous.unwrap().url, "https://example.com/blog?page=1");
        assert_eq!(links.next.unwrap().url, "https://example.com/blog?page=3");
    }

    #[test]
    fn test_single_page_has_none() {
        let links = build_links(&url(), 1, 1, &PaginateOptions::default());
        assert_eq!(links, NavLinks::default());
    }

    #[test]
    fn test_empty_collection_has_none() {
        assert_eq!(build_links(&url(), 1, 0, &PaginateOptions::default()), NavLinks::default());
        assert_eq!(build_links(&url(), 3, 0, &PaginateOptions::default()), NavLinks::default());
    }

    #[test]
    fn test_page_past_end_keeps_literal_comparison() {
        let links = build_links(&url(), 99, 4, &PaginateOptions::default());
        assert_eq!(links.previous.unwrap().url, "https://example.com/blog?page=98");
        assert_eq!(links.next.unwrap().url, "https://example.com/blog?page=100");
    }

    #[test]
    fn test_custom_options() {
        let options = PaginateOptions {
            page_param: "p g".into(),
            previous_label: "Back".into(),
            next_label: "More".into(),
        };
        let links = build_links(&url(), 2, 3, &options);
        let next = links.next.unwrap();
        assert_eq!(next.title, "More");
        assert_eq!(next.url, "https://example.com/blog?p+g=3");
        assert_eq!(links.previous.unwrap().title, "Back");
    }
}
