// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Per-render request state.
//!
//! The directive never reads process-wide request globals. Adapters (HTTP
//! servers, the CLI, tests) build a [`RenderRequestContext`] and pass it into
//! every render.

/// Scheme, host and path of the request being rendered.
///
/// The query string is never stored; links are rebuilt from these three
/// parts plus a single page parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUrl {
    /// URL scheme (e.g., "https").
    pub scheme: String,
    /// Host, including the port if any (e.g., "example.com:8080").
    pub host: String,
    /// Request path without query or fragment (e.g., "/blog").
    pub path: String,
}

impl CurrentUrl {
    /// Creates a URL from its parts.
    ///
    /// Any query string or fragment left on `path` is dropped.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, path: &str) -> Self {
        let (path, _) = split_request_uri(path);
        Self {
            scheme: scheme.into(),
            host: host.into(),
            path: path.to_string(),
        }
    }

    /// Returns `scheme://host/path` with an empty path rendered as `/`.
    pub fn base(&self) -> String {
        let path = if self.path.is_empty() { "/" } else { self.path.as_str() };
        format!("{}://{}{}", self.scheme, self.host, path)
    }
}

impl Default for CurrentUrl {
    fn default() -> Self {
        Self::new("http", "localhost", "/")
    }
}

/// Request signals consumed by a single render.
///
/// # Example
///
/// ```rust
/// use paginate_tag::RenderRequestContext;
///
/// let request = RenderRequestContext::from_request_uri("https", "example.com", "/blog?page=3", "page");
/// assert_eq!(request.requested_page.as_deref(), Some("3"));
/// assert_eq!(request.current_url.path, "/blog");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderRequestContext {
    /// Raw value of the page query parameter, if present.
    pub requested_page: Option<String>,
    /// The URL links are built from.
    pub current_url: CurrentUrl,
}

impl RenderRequestContext {
    /// Creates a request context for `current_url` with no page requested.
    pub fn new(current_url: CurrentUrl) -> Self {
        Self {
            requested_page: None,
            current_url,
        }
    }

    /// Builds a request context from a raw request URI such as
    /// `/blog?page=2&sort=new`.
    ///
    /// The page is read from `page_param`; every other query parameter is
    /// discarded.
    pub fn from_request_uri(scheme: &str, host: &str, request_uri: &str, page_param: &str) -> Self {
        let (path, query) = split_request_uri(request_uri);

        let requested_page = query.and_then(|q| {
            form_urlencoded::parse(q.as_bytes())
                .find(|(k, _)| k == page_param)
                .map(|(_, v)| v.into_owned())
        });

        Self {
            requested_page,
            current_url: CurrentUrl::new(scheme, host, path),
        }
    }

    /// Sets the raw requested page.
    pub fn with_requested_page(mut self, page: impl Into<String>) -> Self {
        self.requested_page = Some(page.into());
        self
    }

    /// Sets the current URL.
    pub fn with_current_url(mut self, current_url: CurrentUrl) -> Self {
        self.current_url = current_url;
        self
    }
}

/// Splits `/path?query#fragment` into the path and the optional query.
fn split_request_uri(uri: &str) -> (&str, Option<&str>) {
    let uri = uri.split('#').next().unwrap_or_default();
    match uri.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (uri, None),
    }
}
