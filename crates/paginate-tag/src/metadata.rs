// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The `paginate` record published into the context.

use serde::{Serialize, Serializer};
use serde_json::{json, Value};

/// A previous/next navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Link label.
    pub title: String,
    /// Absolute URL of the target page.
    pub url: String,
}

/// Pagination metadata for one render.
///
/// Absent links serialize as `false` so templates can test them directly:
///
/// ```json
/// { "page_size": 3, "current_page": 1, "current_offset": 0, "pages": 4,
///   "items": 10, "previous": false,
///   "next": { "title": "Next »", "url": "http://localhost/?page=2" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMetadata {
    /// Items per page.
    pub page_size: usize,
    /// The page being rendered (1-based).
    pub current_page: usize,
    /// Index of the first item of the current page.
    pub current_offset: usize,
    /// Total number of pages.
    pub pages: usize,
    /// Total number of items in the collection.
    pub items: usize,
    /// Link to the previous page.
    #[serde(serialize_with = "link_or_false")]
    pub previous: Option<NavLink>,
    /// Link to the next page.
    #[serde(serialize_with = "link_or_false")]
    pub next: Option<NavLink>,
}

impl PaginationMetadata {
    /// Converts the metadata to the JSON value stored in the context.
    pub fn to_value(&self) -> Value {
        json!({
            "page_size": self.page_size,
            "current_page": self.current_page,
            "current_offset": self.current_offset,
            "pages": self.pages,
            "items": self.items,
            "previous": link_value(&self.previous),
            "next": link_value(&self.next),
        })
    }
}

fn link_value(link: &Option<NavLink>) -> Value {
    match link {
        Some(link) => json!({ "title": link.title, "url": link.url }),
        None => Value::Bool(false),
    }
}

fn link_or_false<S: Serializer>(link: &Option<NavLink>, serializer: S) -> Result<S::Ok, S::Error> {
    match link {
        Some(link) => link.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_links_are_false() {
        let meta = PaginationMetadata {
            page_size: 5,
            current_page: 1,
            current_offset: 0,
            pages: 0,
            items: 0,
            previous: None,
            next: None,
        };
        assert_eq!(
            meta.to_value(),
            json!({
                "page_size": 5,
                "current_page": 1,
                "current_offset": 0,
                "pages": 0,
                "items": 0,
                "previous": false,
                "next": false,
            })
        );
    }

    #[test]
    fn test_present_link_is_object() {
        let meta = PaginationMetadata {
            page_size: 2,
            current_page: 2,
            current_offset: 2,
            pages: 2,
            items: 4,
            previous: Some(NavLink {
                title: "« Previous".into(),
                url: "http://localhost/?page=1".into(),
            }),
            next: None,
        };
        let value = meta.to_value();
        assert_eq!(value["previous"]["url"], "http://localhost/?page=1");
        assert_eq!(value["next"], json!(false));
    }

    #[test]
    fn test_to_value_matches_serialize() {
        let meta = PaginationMetadata {
            page_size: 3,
            current_page: 2,
            current_offset: 3,
            pages: 3,
            items: 9,
            previous: Some(NavLink {
                title: "« Previous".into(),
                url: "http://localhost/?page=1".into(),
            }),
            next: Some(NavLink {
                title: "Next »".into(),
                url: "http://localhost/?page=3".into(),
            }),
        };
        assert_eq!(meta.to_value(), serde_json::to_value(&meta).unwrap());
        assert!(meta.to_value().is_object());
    }
}
