// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for the paginate directive.
//!
//! # Error Categories
//!
//! - **Syntax errors**: directive markup does not match
//!   `paginate [collection] by [items]`. Raised while constructing the
//!   directive; the host must not attempt to render it.
//! - **Context binding errors**: the collection path has an unsupported
//!   segment count, or the value it resolves to is not a sequence. Raised
//!   while rendering.
//! - **Render errors**: the child block failed to render.
//!
//! Non-numeric or out-of-range page requests are not errors. They resolve to
//! page 1 and to an empty slice respectively.

use thiserror::Error;

/// The fixed grammar hint carried by every syntax error.
pub const SYNTAX_HINT: &str = "Syntax Error - Valid syntax: paginate [collection] by [items]";

/// The main error type for paginate operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginateError {
    /// Directive markup did not match the required grammar.
    #[error("{message} (markup: {markup:?})")]
    Syntax {
        /// The markup that failed to parse.
        markup: String,
        /// Description of the expected grammar.
        message: String,
    },

    /// The collection could not be read from or written back to the context.
    #[error("Context binding error: {0}")]
    ContextBinding(String),

    /// The child block reported a failure.
    #[error("Render error: {0}")]
    Render(String),
}

impl PaginateError {
    /// Builds a syntax error for `markup` with the fixed grammar hint.
    pub fn syntax(markup: impl Into<String>) -> Self {
        PaginateError::Syntax {
            markup: markup.into(),
            message: SYNTAX_HINT.to_string(),
        }
    }
}

/// Convenience type alias for Results with [`PaginateError`].
pub type Result<T> = std::result::Result<T, PaginateError>;
