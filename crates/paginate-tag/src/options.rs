// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Tunables for link construction.
//!
//! Loadable from TOML or JSON; every field falls back to its default.
//!
//! ```toml
//! page_param = "page"
//! previous_label = "« Previous"
//! next_label = "Next »"
//! ```

use serde::{Deserialize, Serialize};

/// Options shared by every render of a directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginateOptions {
    /// Query parameter carrying the page number (default: "page").
    #[serde(default = "default_page_param")]
    pub page_param: String,
    /// Title of the previous link (default: "« Previous").
    #[serde(default = "default_previous_label")]
    pub previous_label: String,
    /// Title of the next link (default: "Next »").
    #[serde(default = "default_next_label")]
    pub next_label: String,
}

fn default_page_param() -> String {
    "page".to_string()
}

fn default_previous_label() -> String {
    "« Previous".to_string()
}

fn default_next_label() -> String {
    "Next »".to_string()
}

impl Default for PaginateOptions {
    fn default() -> Self {
        Self {
            page_param: default_page_param(),
            previous_label: default_previous_label(),
            next_label: default_next_label(),
        }
    }
}
