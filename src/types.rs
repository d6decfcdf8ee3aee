//! Common types used throughout the paginator
//!
//! This module contains the value types produced by the window calculator
//! and consumed by the renderers.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Page Markers
// ============================================================================

/// One entry of a page window, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageMarker {
    /// A real page with its 1-based number
    Page {
        /// Page number
        number: i64,
        /// Whether this is the current page
        is_current: bool,
    },
    /// Skipped page numbers
    Ellipsis,
}

impl PageMarker {
    /// Create a page entry
    pub fn page(number: i64, is_current: bool) -> Self {
        Self::Page { number, is_current }
    }

    /// Page number, or `None` for an ellipsis
    pub fn number(&self) -> Option<i64> {
        match self {
            Self::Page { number, .. } => Some(*number),
            Self::Ellipsis => None,
        }
    }

    /// Check if this marker is the current page
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Page { is_current: true, .. })
    }

    /// Check if this marker is an ellipsis
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

// ============================================================================
// Resolved Window Entries
// ============================================================================

/// A page marker paired with its display label and resolved URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageItem {
    /// Page number (`None` for an ellipsis)
    pub number: Option<i64>,
    /// Text shown for the entry
    pub label: String,
    /// Page URL (`None` for an ellipsis)
    pub url: Option<String>,
    /// Whether this is the current page
    pub is_current: bool,
}

/// A previous/next link, present only when the adjacent page exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationLink {
    /// Target page number
    pub page: i64,
    /// Target page URL
    pub url: String,
}

/// 1-based, inclusive index range of the items shown on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemRange {
    /// First item index
    pub first: i64,
    /// Last item index
    pub last: i64,
}

impl ItemRange {
    /// Number of items in the range
    pub fn len(&self) -> i64 {
        self.last - self.first + 1
    }

    /// Check if the range holds no items
    pub fn is_empty(&self) -> bool {
        self.len() <= 0
    }
}

// ============================================================================
// View Style
// ============================================================================

/// Built-in markup style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum View {
    /// `<ul>` list of links
    #[default]
    List,
    /// Compact `<select>` box
    SelectBox,
}

impl View {
    /// Resolve a view name, case-insensitively.
    ///
    /// `selectbox`, `select` and `mobile` map to [`View::SelectBox`];
    /// every other name maps to [`View::List`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "selectbox" | "select" | "mobile" => Self::SelectBox,
            "list" => Self::List,
            other => {
                tracing::warn!(view = other, "Unknown view, falling back to list");
                Self::List
            }
        }
    }

    /// Canonical name of the view
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::SelectBox => "selectbox",
        }
    }
}

impl From<String> for View {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<&str> for View {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
