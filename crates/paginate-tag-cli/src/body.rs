// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Placeholder body renderer.
//!
//! Substitutes `{{ path }}` with the value at `path` in the context. Strings
//! are inserted as-is, missing values and `null` as nothing, everything else
//! as compact JSON. There is no other template syntax.

use lazy_static::lazy_static;
use paginate_tag::{ChildRenderer, Context, Result};
use regex::{Captures, Regex};
use serde_json::Value;

lazy_static! {
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"\{\{\s*([\w.\-]+)\s*\}\}").unwrap();
}

/// A child body made of text and `{{ path }}` placeholders.
#[derive(Debug, Clone)]
pub struct PlaceholderBody {
    source: String,
}

impl PlaceholderBody {
    /// Wraps body source.
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into() }
    }
}

impl ChildRenderer for PlaceholderBody {
    fn render(&self, context: &dyn Context) -> Result<String> {
        let rendered = PLACEHOLDER_RE.replace_all(&self.source, |caps: &Captures| {
            match context.get(&caps[1]) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s,
                Some(other) => other.to_string(),
            }
        });
        Ok(rendered.into_owned())
    }
}
