// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! CLI configuration.
//!
//! Configuration is loaded from `paginate-tag.toml` in the current directory,
//! or from the path given with `--config`.
//!
//! # Example Configuration
//!
//! ```toml
//! [pagination]
//! page_param = "page"
//! previous_label = "« Previous"
//! next_label = "Next »"
//!
//! [request]
//! scheme = "https"
//! host = "example.com"
//! ```

use anyhow::Context as _;
use paginate_tag::PaginateOptions;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "paginate-tag.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Link labels and the page query parameter.
    #[serde(default)]
    pub pagination: PaginateOptions,
    /// Where rendered links point to.
    #[serde(default)]
    pub request: RequestConfig,
}

/// Scheme and host used to build absolute links.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RequestConfig {
    /// URL scheme (default: "http").
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Host, optionally with port (default: "localhost").
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_scheme() -> String {
    "http".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            host: default_host(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from [`CONFIG_FILE`] when `None`.
    ///
    /// A missing default file yields the default configuration; an explicit
    /// path must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match path {
            Some(path) => path,
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if !default_path.exists() {
                    return Ok(Config::default());
                }
                default_path
            }
        };

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file {}", config_path.display()))
    }

    /// Parses configuration from TOML source.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
