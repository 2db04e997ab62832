// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Reading the collection out of the context and writing the page back.

use crate::context::Context;
use crate::error::{PaginateError, Result};
use crate::metadata::PaginationMetadata;
use crate::parser::CollectionPath;
use serde_json::{Map, Value};

/// Context key the metadata is published under.
pub const METADATA_KEY: &str = "paginate";

/// Looks up the collection at `path`.
///
/// A missing or `null` value is an empty collection.
///
/// # Errors
///
/// Returns [`PaginateError::ContextBinding`] if the value is not an array.
pub fn resolve_collection(context: &dyn Context, path: &CollectionPath) -> Result<Vec<Value>> {
    match context.get(path.as_str()) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(PaginateError::ContextBinding(format!(
            "'{}' is {}, expected a sequence",
            path,
            kind(&other)
        ))),
    }
}

/// Rebinds `path` to `slice` and publishes `metadata` under [`METADATA_KEY`].
///
/// A two-segment path replaces its parent with a one-key object; sibling
/// fields of the parent are dropped.
///
/// # Errors
///
/// Returns [`PaginateError::ContextBinding`] for paths that are not one or two
/// segments long. Nothing is written in that case.
pub fn bind_page(
    context: &mut dyn Context,
    path: &CollectionPath,
    slice: Vec<Value>,
    metadata: &PaginationMetadata,
) -> Result<()> {
    match path.segments() {
        [name] => context.set(name, Value::Array(slice)),
        [parent, child] => {
            let mut container = Map::new();
            container.insert(child.clone(), Value::Array(slice));
            context.set(parent, Value::Object(container));
        }
        segments => {
            return Err(PaginateError::ContextBinding(format!(
                "'{}' has {} segments, only 1 or 2 are supported",
                path,
                segments.len()
            )))
        }
    }

    context.set(METADATA_KEY, metadata.to_value());
    Ok(())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
