// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Rendering context abstraction.
//!
//! The directive reads its collection through [`Context::get`] and writes the
//! page slice and metadata back through [`Context::set`]. Hosts with their own
//! variable scopes implement the trait; [`JsonContext`] is the in-memory
//! implementation used by the CLI and the tests.

use serde_json::{Map, Value};

/// Key-value environment a template renders against.
pub trait Context {
    /// Looks up a value by dotted path (e.g. `blog.articles`).
    ///
    /// Returns `None` if any segment is missing.
    fn get(&self, path: &str) -> Option<Value>;

    /// Stores a value under a flat top-level key.
    ///
    /// `name` is never split on dots; nesting is the caller's concern.
    fn set(&mut self, name: &str, value: Value);
}

/// In-memory context backed by a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonContext {
    vars: Map<String, Value>,
}

impl JsonContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context from a JSON value.
    ///
    /// Non-object values yield an empty context.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(vars) => Self { vars },
            _ => Self::default(),
        }
    }

    /// Returns the top-level variables.
    pub fn vars(&self) -> &Map<String, Value> {
        &self.vars
    }

    /// Consumes the context and returns it as a JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.vars)
    }
}

impl From<Map<String, Value>> for JsonContext {
    fn from(vars: Map<String, Value>) -> Self {
        Self { vars }
    }
}

impl Context for JsonContext {
    fn get(&self, path: &str) -> Option<Value> {
        let mut segments = path.split('.');
        let mut current = self.vars.get(segments.next()?)?;

        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(current.clone())
    }

    fn set(&mut self, name: &str, value: Value) {
        self.vars.insert(name.to_string(), value);
    }
}
