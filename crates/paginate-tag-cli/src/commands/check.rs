// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use paginate_tag::PaginateDirective;
use serde_json::json;

/// Parses `markup` and returns its fields as pretty JSON.
pub fn run(markup: &str) -> anyhow::Result<String> {
    let directive = PaginateDirective::parse(markup)?;

    let report = json!({
        "collection": directive.collection_path().as_str(),
        "segments": directive.collection_path().segments(),
        "page_size": directive.page_size().get(),
        "attributes": directive.attributes(),
    });

    Ok(serde_json::to_string_pretty(&report)?)
}
