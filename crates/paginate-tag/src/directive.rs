// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The `paginate` block directive.
//!
//! ```text
//! {% paginate blog.articles by 5 %}
//!   {% for article in blog.articles %} ... {% endfor %}
//!   {% if paginate.next %}<a href="{{ paginate.next.url }}">{{ paginate.next.title }}</a>{% endif %}
//! {% endpaginate %}
//! ```
//!
//! A [`PaginateDirective`] is parsed once and rendered any number of times.
//! Each render resolves the current page from its [`RenderRequestContext`],
//! rebinds the collection to that page and publishes a `paginate` record
//! before handing the context to the child block.

use crate::binder::{bind_page, resolve_collection};
use crate::context::Context;
use crate::error::{PaginateError, Result};
use crate::links::build_links;
use crate::metadata::PaginationMetadata;
use crate::options::PaginateOptions;
use crate::pager::{resolve_current_page, PageWindow};
use crate::parser::{parse_markup, AttributeExtractor, CollectionPath, KeyValueAttributes};
use crate::request::RenderRequestContext;
use serde_json::Value;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

/// Renders the body nested inside a block directive.
pub trait ChildRenderer {
    /// Renders the body against the updated context.
    fn render(&self, context: &dyn Context) -> Result<String>;
}

impl<F> ChildRenderer for F
where
    F: Fn(&dyn Context) -> Result<String>,
{
    fn render(&self, context: &dyn Context) -> Result<String> {
        self(context)
    }
}

/// A child renderer for directives with an empty body.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyBody;

impl ChildRenderer for EmptyBody {
    fn render(&self, _context: &dyn Context) -> Result<String> {
        Ok(String::new())
    }
}

/// Something a host engine can render as part of a template.
pub trait Renderable {
    /// Renders against `context`, delegating nested markup to `children`.
    fn render(
        &self,
        context: &mut dyn Context,
        request: &RenderRequestContext,
        children: &dyn ChildRenderer,
    ) -> Result<String>;
}

/// The outcome of paginating a collection, before the body is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRender {
    /// The items bound under the collection path.
    pub slice: Vec<Value>,
    /// The record bound under `paginate`.
    pub metadata: PaginationMetadata,
}

/// A parsed `paginate <collection> by <size>` directive.
///
/// Immutable after construction; safe to share between concurrent renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginateDirective {
    collection_path: CollectionPath,
    page_size: NonZeroUsize,
    attributes: BTreeMap<String, String>,
    options: PaginateOptions,
}

impl PaginateDirective {
    /// Parses directive markup with default options and attribute extraction.
    ///
    /// # Example
    ///
    /// ```rust
    /// use paginate_tag::{JsonContext, PaginateDirective, RenderRequestContext};
    /// use serde_json::json;
    ///
    /// let directive = PaginateDirective::parse("articles by 2")?;
    /// let mut context = JsonContext::from_value(json!({ "articles": [1, 2, 3] }));
    /// let request = RenderRequestContext::default().with_requested_page("2");
    ///
    /// let page = directive.paginate(&mut context, &request)?;
    /// assert_eq!(page.slice, vec![json!(3)]);
    /// assert_eq!(page.metadata.pages, 2);
    /// # Ok::<(), paginate_tag::PaginateError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PaginateError::Syntax`] if the markup is invalid.
    pub fn parse(markup: &str) -> Result<Self> {
        Self::parse_with(markup, &KeyValueAttributes, PaginateOptions::default())
    }

    /// Parses directive markup with explicit options.
    pub fn parse_with_options(markup: &str, options: PaginateOptions) -> Result<Self> {
        Self::parse_with(markup, &KeyValueAttributes, options)
    }

    /// Parses directive markup using the host's attribute extractor.
    pub fn parse_with(
        markup: &str,
        extractor: &dyn AttributeExtractor,
        options: PaginateOptions,
    ) -> Result<Self> {
        let parsed = parse_markup(markup)?;
        let attributes = extractor.extract(&parsed.rest);

        tracing::debug!(
            "Parsed paginate directive: collection={} page_size={} attributes={:?}",
            parsed.collection_path,
            parsed.page_size,
            attributes
        );

        Ok(Self {
            collection_path: parsed.collection_path,
            page_size: parsed.page_size,
            attributes,
            options,
        })
    }

    /// The collection being paginated.
    pub fn collection_path(&self) -> &CollectionPath {
        &self.collection_path
    }

    /// Items per page.
    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Trailing attributes found in the markup.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Options used to build links.
    pub fn options(&self) -> &PaginateOptions {
        &self.options
    }

    /// Builds the request context for a raw request URI, reading the page
    /// from the same query parameter this directive writes into its links.
    ///
    /// ```rust
    /// use paginate_tag::{PaginateDirective, PaginateOptions};
    ///
    /// let options = PaginateOptions { page_param: "p".into(), ..PaginateOptions::default() };
    /// let directive = PaginateDirective::parse_with_options("items by 5", options)?;
    /// let request = directive.request_from_uri("https", "example.com", "/list?p=3");
    /// assert_eq!(request.requested_page.as_deref(), Some("3"));
    /// # Ok::<(), paginate_tag::PaginateError>(())
    /// ```
    pub fn request_from_uri(&self, scheme: &str, host: &str, request_uri: &str) -> RenderRequestContext {
        RenderRequestContext::from_request_uri(scheme, host, request_uri, &self.options.page_param)
    }

    /// Rebinds the collection to the requested page and publishes metadata,
    /// without rendering a body.
    ///
    /// # Errors
    ///
    /// Returns [`PaginateError::ContextBinding`] if the collection is not a
    /// sequence or its path cannot be rebound. The context is left untouched.
    pub fn paginate(&self, context: &mut dyn Context, request: &RenderRequestContext) -> Result<PageRender> {
        let current_page = resolve_current_page(request.requested_page.as_deref());
        let mut collection = resolve_collection(&*context, &self.collection_path)?;
        let window = PageWindow::compute(collection.len(), self.page_size, current_page);

        tracing::debug!(
            "Paginating {}: page {} of {} ({} items, offset {})",
            self.collection_path,
            current_page,
            window.total_pages,
            collection.len(),
            window.current_offset
        );

        let links = build_links(&request.current_url, current_page.get(), window.total_pages, &self.options);
        let metadata = PaginationMetadata {
            page_size: self.page_size.get(),
            current_page: current_page.get(),
            current_offset: window.current_offset,
            pages: window.total_pages,
            items: collection.len(),
            previous: links.previous,
            next: links.next,
        };

        let slice: Vec<Value> = collection.drain(window.range()).collect();
        bind_page(context, &self.collection_path, slice.clone(), &metadata)?;

        Ok(PageRender { slice, metadata })
    }
}

impl Renderable for PaginateDirective {
    fn render(
        &self,
        context: &mut dyn Context,
        request: &RenderRequestContext,
        children: &dyn ChildRenderer,
    ) -> Result<String> {
        self.paginate(context, request)?;
        children.render(&*context)
    }
}

impl std::str::FromStr for PaginateDirective {
    type Err = PaginateError;

    fn from_str(markup: &str) -> Result<Self> {
        Self::parse(markup)
    }
}
