// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! # paginate-tag
//!
//! A Liquid-style `paginate` block directive for template engines.
//!
//! The directive splits a collection from the rendering context into pages,
//! rebinds the current page under the collection's original name and
//! publishes a `paginate` record with page counts and previous/next links.
//!
//! ## Features
//!
//! - `paginate <collection> by <size>` markup with trailing `key:value` attributes
//! - One- and two-segment collection paths (`articles`, `blog.articles`)
//! - Lenient page handling: bad page numbers render page 1, pages past the end
//!   render empty
//! - Request state is passed explicitly; nothing is read from globals
//!
//! ## Quick Start
//!
//! ```rust
//! use paginate_tag::{Context, JsonContext, PaginateDirective, RenderRequestContext, Renderable};
//! use serde_json::json;
//!
//! let directive = PaginateDirective::parse("blog.articles by 2")?;
//!
//! let mut context = JsonContext::from_value(json!({
//!     "blog": { "title": "News", "articles": ["a", "b", "c"] }
//! }));
//! let request = RenderRequestContext::from_request_uri("https", "example.com", "/blog?page=2", "page");
//!
//! let body = |ctx: &dyn Context| -> paginate_tag::Result<String> {
//!     Ok(ctx.get("paginate.previous.url").unwrap_or_default().to_string())
//! };
//! let html = directive.render(&mut context, &request, &body)?;
//!
//! assert_eq!(html, r#""https://example.com/blog?page=1""#);
//! assert_eq!(context.get("blog"), Some(json!({ "articles": ["c"] })));
//! # Ok::<(), paginate_tag::PaginateError>(())
//! ```

/// Collection lookup and page rebinding.
pub mod binder;
/// Rendering context abstraction.
pub mod context;
/// The paginate directive.
pub mod directive;
/// Error types.
pub mod error;
/// Previous/next link construction.
pub mod links;
/// The published pagination record.
pub mod metadata;
/// Link and parameter options.
pub mod options;
/// Page arithmetic.
pub mod pager;
/// Directive markup parser.
pub mod parser;
/// Per-render request state.
pub mod request;

pub use binder::METADATA_KEY;
pub use context::{Context, JsonContext};
pub use directive::{ChildRenderer, EmptyBody, PageRender, PaginateDirective, Renderable};
pub use error::{PaginateError, Result, SYNTAX_HINT};
pub use links::NavLinks;
pub use metadata::{NavLink, PaginationMetadata};
pub use options::PaginateOptions;
pub use pager::PageWindow;
pub use parser::{AttributeExtractor, CollectionPath, KeyValueAttributes, ParsedMarkup};
pub use request::{CurrentUrl, RenderRequestContext};
