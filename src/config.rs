//! Display configuration for paginators
//!
//! This module contains the configuration structure that controls how a
//! paginator builds URLs and renders markup. It can be loaded from YAML or
//! JSON, every field falls back to its default when omitted.

use crate::error::{check_max_pages_to_show, Error, Result};
use crate::types::View;
use crate::url::{DEFAULT_PLACEHOLDER, DEFAULT_URL_PATTERN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default maximum number of visible pages
pub const DEFAULT_MAX_PAGES_TO_SHOW: i64 = 10;

/// Default previous-link label
pub const DEFAULT_PREVIOUS_TEXT: &str = "&laquo; Previous";

/// Default next-link label
pub const DEFAULT_NEXT_TEXT: &str = "Next &raquo;";

/// Default ellipsis label
pub const DEFAULT_ELLIPSIS: &str = "...";

// ============================================================================
// Paginator Config
// ============================================================================

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginatorConfig {
    /// Maximum number of page numbers shown (at least 3)
    pub max_pages_to_show: i64,

    /// Label of the previous-page link (inserted as raw markup)
    pub previous_text: String,

    /// Label of the next-page link (inserted as raw markup)
    pub next_text: String,

    /// Label of ellipsis markers (inserted as raw markup)
    pub ellipsis: String,

    /// Built-in markup style
    pub view: View,

    /// URL template for page links
    pub url_pattern: String,

    /// Token in `url_pattern` replaced by the page number
    pub placeholder: String,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            max_pages_to_show: DEFAULT_MAX_PAGES_TO_SHOW,
            previous_text: DEFAULT_PREVIOUS_TEXT.to_string(),
            next_text: DEFAULT_NEXT_TEXT.to_string(),
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
            view: View::List,
            url_pattern: DEFAULT_URL_PATTERN.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl PaginatorConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        check_max_pages_to_show(self.max_pages_to_show)?;
        Ok(())
    }
}

/// Load a config file: `.json` files are parsed as JSON, everything else as YAML
pub fn load_config(path: impl AsRef<Path>) -> Result<PaginatorConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    tracing::info!("Loading paginator config from {}", path.display());
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        PaginatorConfig::from_json_str(&content)
    } else {
        PaginatorConfig::from_yaml_str(&content)
    }
}
