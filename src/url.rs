//! Page URL resolution
//!
//! Substitutes a placeholder token in a URL template with a page number,
//! e.g. `/category/{page}` or the default `?page=(:page)`.
//! Templates are trusted caller input and are not URL-encoded.

use serde::{Deserialize, Serialize};

/// Default placeholder token
pub const DEFAULT_PLACEHOLDER: &str = "(:page)";

/// Default URL template
pub const DEFAULT_URL_PATTERN: &str = "?page=(:page)";

/// Replace every occurrence of `placeholder` in `template` with `page_number`.
///
/// An empty placeholder leaves the template untouched.
pub fn resolve(template: &str, placeholder: &str, page_number: i64) -> String {
    if placeholder.is_empty() {
        return template.to_string();
    }
    template.replace(placeholder, &page_number.to_string())
}

/// A URL template together with its placeholder token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlPattern {
    /// Template containing zero or more placeholders
    pub template: String,
    /// Token replaced by the page number
    pub placeholder: String,
}

impl Default for UrlPattern {
    fn default() -> Self {
        Self {
            template: DEFAULT_URL_PATTERN.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl UrlPattern {
    /// Create a pattern using the default placeholder
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Default::default()
        }
    }

    /// Create a pattern with a custom placeholder
    pub fn with_placeholder(template: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            placeholder: placeholder.into(),
        }
    }

    /// URL of the given page
    pub fn url_for(&self, page_number: i64) -> String {
        resolve(&self.template, &self.placeholder, page_number)
    }

    /// Check if the template contains the placeholder at all
    pub fn has_placeholder(&self) -> bool {
        !self.placeholder.is_empty() && self.template.contains(&self.placeholder)
    }
}
