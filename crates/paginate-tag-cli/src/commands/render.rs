// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use crate::body::PlaceholderBody;
use crate::config::Config;
use anyhow::Context as _;
use paginate_tag::{JsonContext, PaginateDirective, RenderRequestContext, Renderable};
use std::fs;
use std::path::PathBuf;
use url::Url;

/// Inputs of the `render` command.
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// JSON file holding the rendering context.
    pub context: PathBuf,
    /// Directive markup, e.g. `blog.articles by 5`.
    pub markup: String,
    /// Request URL the page and links are taken from.
    ///
    /// Either absolute (`https://example.com/blog?page=2`) or a path
    /// (`/blog?page=2`) resolved against the `[request]` config section.
    pub url: String,
    /// Explicit page, overriding the one in `url`.
    pub page: Option<String>,
    /// Body source with `{{ path }}` placeholders.
    pub body: Option<String>,
}

/// Runs the directive and returns what should be printed.
///
/// Without a body, that is the rebound context as pretty JSON; with one, the
/// rendered body.
pub fn run(args: &RenderArgs, config: &Config) -> anyhow::Result<String> {
    let directive = PaginateDirective::parse_with_options(&args.markup, config.pagination.clone())?;

    let source = fs::read_to_string(&args.context)
        .with_context(|| format!("Failed to read context file {}", args.context.display()))?;
    let value: serde_json::Value = serde_json::from_str(&source)
        .with_context(|| format!("Invalid JSON in {}", args.context.display()))?;
    if !value.is_object() {
        anyhow::bail!("Context file {} must contain a JSON object", args.context.display());
    }
    let mut context = JsonContext::from_value(value);

    let mut request = request_for(&directive, &args.url, config)?;
    if let Some(page) = &args.page {
        request = request.with_requested_page(page.clone());
    }

    tracing::info!(
        "Rendering '{}' for {} (page {:?})",
        args.markup,
        request.current_url.base(),
        request.requested_page
    );

    match &args.body {
        Some(body) => Ok(directive.render(&mut context, &request, &PlaceholderBody::new(body.as_str()))?),
        None => {
            directive.paginate(&mut context, &request)?;
            Ok(serde_json::to_string_pretty(&context.into_value())?)
        }
    }
}

/// Builds the request context for `url`.
///
/// Absolute URLs supply their own scheme and host; paths fall back to the
/// `[request]` config section.
pub fn request_for(directive: &PaginateDirective, url: &str, config: &Config) -> anyhow::Result<RenderRequestContext> {
    if url.starts_with('/') {
        return Ok(directive.request_from_uri(&config.request.scheme, &config.request.host, url));
    }

    let parsed = Url::parse(url).with_context(|| format!("Invalid request URL {}", url))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| anyhow::anyhow!("Request URL {} has no host", url))?;
    let host = match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };
    let request_uri = match parsed.query() {
        Some(query) => format!("{}?{}", parsed.path(), query),
        None => parsed.path().to_string(),
    };

    Ok(directive.request_from_uri(parsed.scheme(), &host, &request_uri))
}
