// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Directive markup parser.
//!
//! Parses the text following the `paginate` keyword:
//!
//! ```text
//! blog.articles by 5 window:3
//! ^^^^^^^^^^^^^    ^ ^^^^^^^^
//! collection    size attributes (handed to an AttributeExtractor)
//! ```

use crate::error::{PaginateError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroUsize;

lazy_static! {
    static ref MARKUP_RE: Regex =
        Regex::new(r"(?s)^\s*([A-Za-z0-9_.\-]+)\s+by\s+(\w+)(\s.*)?$").unwrap();
    static ref ATTRIBUTE_RE: Regex =
        Regex::new(r#"(\w+)\s*:\s*("[^"]*"|'[^']*'|[^\s,]+)"#).unwrap();
}

/// A validated dotted reference to a collection in the context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionPath {
    raw: String,
    segments: Vec<String>,
}

impl CollectionPath {
    /// Parses a dotted path. Segments must be non-empty runs of
    /// `[A-Za-z0-9_-]`.
    pub fn parse(raw: &str) -> Option<Self> {
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty() || !s.bytes().all(is_segment_byte)) {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The path as written in the markup.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The dot-separated segments of the path.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

fn is_segment_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// The fields extracted from directive markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMarkup {
    /// Collection to paginate.
    pub collection_path: CollectionPath,
    /// Items per page.
    pub page_size: NonZeroUsize,
    /// Markup left after the grammar match, trimmed.
    pub rest: String,
}

/// Parses trailing `key:value` attributes from directive markup.
///
/// Supplied by the host engine; [`KeyValueAttributes`] is the default.
pub trait AttributeExtractor {
    /// Extracts attributes from the markup that follows the grammar match.
    fn extract(&self, markup: &str) -> BTreeMap<String, String>;
}

/// Default attribute extractor.
///
/// Accepts `key:value`, `key:"quoted value"` and `key:'quoted value'`,
/// separated by whitespace or commas.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyValueAttributes;

impl AttributeExtractor for KeyValueAttributes {
    fn extract(&self, markup: &str) -> BTreeMap<String, String> {
        ATTRIBUTE_RE
            .captures_iter(markup)
            .map(|cap| {
                let value = &cap[2];
                let value = value
                    .strip_prefix('"')
                    .and_then(|v| v.strip_suffix('"'))
                    .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                    .unwrap_or(value);
                (cap[1].to_string(), value.to_string())
            })
            .collect()
    }
}

/// Parses `<identifier-path> by <integer>` markup.
///
/// # Errors
///
/// Returns [`PaginateError::Syntax`] when `by` is missing, the path is
/// malformed, or the size is not a positive decimal integer.
pub fn parse_markup(markup: &str) -> Result<ParsedMarkup> {
    let caps = MARKUP_RE
        .captures(markup)
        .ok_or_else(|| PaginateError::syntax(markup))?;

    let collection_path = CollectionPath::parse(&caps[1]).ok_or_else(|| PaginateError::syntax(markup))?;

    let size = &caps[2];
    if !size.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PaginateError::syntax(markup));
    }
    let page_size = size
        .parse::<NonZeroUsize>()
        .map_err(|_| PaginateError::syntax(markup))?;

    let rest = caps.get(3).map(|m| m.as_str().trim()).unwrap_or_default().to_string();

    Ok(ParsedMarkup {
        collection_path,
        page_size,
        rest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let parsed = parse_markup("articles by 5").unwrap();
        assert_eq!(parsed.collection_path.as_str(), "articles");
        assert_eq!(parsed.collection_path.segments(), ["articles"]);
        assert_eq!(parsed.page_size.get(), 5);
        assert_eq!(parsed.rest, "");
    }

    #[test]
    fn test_parse_dotted_path() {
        let parsed = parse_markup(" blog.articles by 12 ").unwrap();
        assert_eq!(parsed.collection_path.segments(), ["blog", "articles"]);
        assert_eq!(parsed.page_size.get(), 12);
    }

    #[test]
    fn test_parse_deep_path_is_accepted() {
        // Segment count is checked when binding, not here.
        let parsed = parse_markup("shop.collection.products by 3").unwrap();
        assert_eq!(parsed.collection_path.segments().len(), 3);
    }

    #[test]
    fn test_parse_keeps_rest() {
        let parsed = parse_markup("search.results by 10 window: 3, label:'Go on'").unwrap();
        assert_eq!(parsed.rest, "window: 3, label:'Go on'");
    }

    #[test]
    fn test_missing_by() {
        assert!(matches!(parse_markup("articles 5"), Err(PaginateError::Syntax { .. })));
        assert!(matches!(parse_markup("articles per 5"), Err(PaginateError::Syntax { .. })));
    }

    #[test]
    fn test_non_numeric_size() {
        assert!(matches!(parse_markup("articles by five"), Err(PaginateError::Syntax { .. })));
        assert!(matches!(parse_markup("articles by 5x"), Err(PaginateError::Syntax { .. })));
        assert!(matches!(parse_markup("articles by -5"), Err(PaginateError::Syntax { .. })));
    }

    #[test]
    fn test_zero_size() {
        assert!(matches!(parse_markup("articles by 0"), Err(PaginateError::Syntax { .. })));
    }

    #[test]
    fn test_malformed_path() {
        for markup in ["blog..articles by 5", ".articles by 5", "articles. by 5", "art!cles by 5", "artículos by 5", "blog.artículos by 5", "by 5", ""] {
            assert!(
                matches!(parse_markup(markup), Err(PaginateError::Syntax { .. })),
                "expected syntax error for {markup:?}"
            );
        }
    }

    #[test]
    fn test_collection_path_is_ascii_only() {
        assert!(CollectionPath::parse("blog.articles_2-x").is_some());
        assert!(CollectionPath::parse("artículos").is_none());
        assert!(CollectionPath::parse("blog.ärticles").is_none());
    }

    #[test]
    fn test_syntax_error_carries_markup() {
        match parse_markup("nope") {
            Err(PaginateError::Syntax { markup, message }) => {
                assert_eq!(markup, "nope");
                assert_eq!(message, crate::error::SYNTAX_HINT);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_key_value_attributes() {
        let attrs = KeyValueAttributes.extract(r#"window: 3, label:"Read more" style:'compact'"#);
        assert_eq!(attrs.get("window").map(String::as_str), Some("3"));
        assert_eq!(attrs.get("label").map(String::as_str), Some("Read more"));
        assert_eq!(attrs.get("style").map(String::as_str), Some("compact"));
    }

    #[test]
    fn test_no_attributes() {
        assert!(KeyValueAttributes.extract("").is_empty());
        assert!(KeyValueAttributes.extract("just words").is_empty());
    }
}
