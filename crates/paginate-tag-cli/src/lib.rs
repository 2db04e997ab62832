// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! paginate-tag CLI library.
//!
//! Drives the `paginate` directive from the command line against a JSON
//! context file.
//!
//! # Usage
//!
//! ```bash
//! paginate-tag check "blog.articles by 5"
//! paginate-tag render --context site.json --markup "blog.articles by 5" --url "https://example.com/blog?page=2"
//! ```
//!
//! # Configuration
//!
//! Link labels, the page parameter and the link host are configured via
//! `paginate-tag.toml`.

/// Placeholder body renderer for `render --body`.
pub mod body;
/// CLI commands (check, render).
pub mod commands;
/// Configuration from `paginate-tag.toml`.
pub mod config;
