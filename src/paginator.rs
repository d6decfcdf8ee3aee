//! Paginator state
//!
//! [`Paginator`] owns the totals, page size, current page and display
//! configuration of one page-number control. The page count is derived from
//! the totals and recomputed whenever they change; everything else is
//! computed on demand from the [`window`](crate::window) functions.
//!
//! The paginator has no interior mutability. Callers sharing one across
//! threads must provide their own exclusive access for the setters.

use crate::config::PaginatorConfig;
use crate::error::{check_max_pages_to_show, Result};
use crate::render::{HtmlRenderer, Renderer};
use crate::types::{ItemRange, NavigationLink, PageItem, PageMarker, View};
use crate::url;
use crate::window;
use serde::Serialize;
use std::fmt;

// ============================================================================
// Paginator
// ============================================================================

/// Pagination state for a linear collection split into fixed-size pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    total_items: i64,
    items_per_page: i64,
    current_page: i64,
    num_pages: i64,
    config: PaginatorConfig,
}

impl Paginator {
    /// Create a paginator with the default display configuration
    pub fn new(total_items: i64, items_per_page: i64, current_page: i64) -> Self {
        let mut paginator = Self {
            total_items,
            items_per_page,
            current_page,
            num_pages: 0,
            config: PaginatorConfig::default(),
        };
        paginator.compute_num_pages();
        paginator
    }

    /// Create a paginator with an explicit display configuration
    pub fn with_config(
        total_items: i64,
        items_per_page: i64,
        current_page: i64,
        config: PaginatorConfig,
    ) -> Result<Self> {
        config.validate()?;
        let mut paginator = Self::new(total_items, items_per_page, current_page);
        paginator.config = config;
        Ok(paginator)
    }

    /// Start building a paginator (current page defaults to 1)
    pub fn builder(total_items: i64, items_per_page: i64) -> PaginatorBuilder {
        PaginatorBuilder::new(total_items, items_per_page)
    }

    fn compute_num_pages(&mut self) {
        self.num_pages = window::num_pages(self.total_items, self.items_per_page);
        tracing::debug!(
            total_items = self.total_items,
            items_per_page = self.items_per_page,
            num_pages = self.num_pages,
            "Recomputed page count"
        );
    }

    // ------------------------------------------------------------------------
    // Totals
    // ------------------------------------------------------------------------

    /// Total number of items
    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    /// Set the total number of items and recompute the page count
    pub fn set_total_items(&mut self, total_items: i64) -> &mut Self {
        self.total_items = total_items;
        self.compute_num_pages();
        self
    }

    /// Items per page
    pub fn items_per_page(&self) -> i64 {
        self.items_per_page
    }

    /// Set the page size and recompute the page count
    pub fn set_items_per_page(&mut self, items_per_page: i64) -> &mut Self {
        self.items_per_page = items_per_page;
        self.compute_num_pages();
        self
    }

    /// Number of pages
    pub fn num_pages(&self) -> i64 {
        self.num_pages
    }

    /// Current page number (not validated against the page count)
    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    /// Set the current page
    pub fn set_current_page(&mut self, current_page: i64) -> &mut Self {
        self.current_page = current_page;
        self
    }

    // ------------------------------------------------------------------------
    // Display configuration
    // ------------------------------------------------------------------------

    /// Display configuration
    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    /// Maximum number of page numbers shown
    pub fn max_pages_to_show(&self) -> i64 {
        self.config.max_pages_to_show
    }

    /// Set the maximum number of page numbers shown.
    ///
    /// Fails with [`Error::InvalidMaxPagesToShow`](crate::Error::InvalidMaxPagesToShow)
    /// for values below 3, leaving the paginator unchanged.
    pub fn set_max_pages_to_show(&mut self, max_pages_to_show: i64) -> Result<&mut Self> {
        self.config.max_pages_to_show = check_max_pages_to_show(max_pages_to_show)?;
        Ok(self)
    }

    pub fn url_pattern(&self) -> &str {
        &self.config.url_pattern
    }

    pub fn set_url_pattern(&mut self, url_pattern: impl Into<String>) -> &mut Self {
        self.config.url_pattern = url_pattern.into();
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self {
        self.config.placeholder = placeholder.into();
        self
    }

    pub fn previous_text(&self) -> &str {
        &self.config.previous_text
    }

    pub fn set_previous_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.config.previous_text = text.into();
        self
    }

    pub fn next_text(&self) -> &str {
        &self.config.next_text
    }

    pub fn set_next_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.config.next_text = text.into();
        self
    }

    pub fn ellipsis(&self) -> &str {
        &self.config.ellipsis
    }

    pub fn set_ellipsis(&mut self, text: impl Into<String>) -> &mut Self {
        self.config.ellipsis = text.into();
        self
    }

    pub fn view(&self) -> View {
        self.config.view
    }

    /// Set the markup style; accepts a [`View`] or any view name
    pub fn set_view(&mut self, view: impl Into<View>) -> &mut Self {
        self.config.view = view.into();
        self
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// URL of the given page
    pub fn page_url(&self, page_number: i64) -> String {
        url::resolve(&self.config.url_pattern, &self.config.placeholder, page_number)
    }

    pub fn prev_page(&self) -> Option<i64> {
        window::prev_page(self.current_page)
    }

    pub fn next_page(&self) -> Option<i64> {
        window::next_page(self.current_page, self.num_pages)
    }

    pub fn prev_url(&self) -> Option<String> {
        self.prev_page().map(|page| self.page_url(page))
    }

    pub fn next_url(&self) -> Option<String> {
        self.next_page().map(|page| self.page_url(page))
    }

    /// Link to the previous page, if there is one
    pub fn prev_link(&self) -> Option<NavigationLink> {
        self.link_to(self.prev_page())
    }

    /// Link to the next page, if there is one
    pub fn next_link(&self) -> Option<NavigationLink> {
        self.link_to(self.next_page())
    }

    fn link_to(&self, page: Option<i64>) -> Option<NavigationLink> {
        page.map(|page| NavigationLink {
            page,
            url: self.page_url(page),
        })
    }

    // ------------------------------------------------------------------------
    // Window
    // ------------------------------------------------------------------------

    /// Ordered page markers for the current state
    pub fn page_markers(&self) -> Vec<PageMarker> {
        let markers = window::page_window(
            self.num_pages,
            self.current_page,
            self.config.max_pages_to_show,
        );
        tracing::debug!(
            num_pages = self.num_pages,
            current_page = self.current_page,
            markers = markers.len(),
            "Computed page window"
        );
        markers
    }

    /// Page markers with their labels and URLs resolved
    pub fn pages(&self) -> Vec<PageItem> {
        self.page_markers()
            .into_iter()
            .map(|marker| match marker {
                PageMarker::Page { number, is_current } => PageItem {
                    number: Some(number),
                    label: number.to_string(),
                    url: Some(self.page_url(number)),
                    is_current,
                },
                PageMarker::Ellipsis => PageItem {
                    number: None,
                    label: self.config.ellipsis.clone(),
                    url: None,
                    is_current: false,
                },
            })
            .collect()
    }

    // ------------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------------

    /// Item index range of the current page, `None` past the end of the data
    pub fn current_page_item_range(&self) -> Option<ItemRange> {
        window::current_page_item_range(self.current_page, self.items_per_page, self.total_items)
    }

    pub fn current_page_first_item(&self) -> Option<i64> {
        self.current_page_item_range().map(|range| range.first)
    }

    pub fn current_page_last_item(&self) -> Option<i64> {
        self.current_page_item_range().map(|range| range.last)
    }

    /// Serializable view of the full paginator state
    pub fn snapshot(&self) -> PaginatorSnapshot {
        PaginatorSnapshot {
            total_items: self.total_items,
            items_per_page: self.items_per_page,
            current_page: self.current_page,
            num_pages: self.num_pages,
            max_pages_to_show: self.config.max_pages_to_show,
            view: self.config.view,
            item_range: self.current_page_item_range(),
            prev: self.prev_link(),
            next: self.next_link(),
            pages: self.pages(),
        }
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    /// Render with the built-in markup for the configured view
    pub fn render(&self) -> Result<String> {
        HtmlRenderer::new().render(self)
    }

    /// Render with a caller-supplied strategy
    pub fn render_with<R: Renderer + ?Sized>(&self, renderer: &R) -> Result<String> {
        renderer.render(self)
    }
}

impl fmt::Display for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let html = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&html)
    }
}

/// Point-in-time state of a paginator, as handed to renderers and the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginatorSnapshot {
    pub total_items: i64,
    pub items_per_page: i64,
    pub current_page: i64,
    pub num_pages: i64,
    pub max_pages_to_show: i64,
    pub view: View,
    pub item_range: Option<ItemRange>,
    pub prev: Option<NavigationLink>,
    pub next: Option<NavigationLink>,
    pub pages: Vec<PageItem>,
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`Paginator`]
#[derive(Debug, Clone)]
pub struct PaginatorBuilder {
    total_items: i64,
    items_per_page: i64,
    current_page: i64,
    config: PaginatorConfig,
}

impl PaginatorBuilder {
    /// Create a builder with the default configuration
    pub fn new(total_items: i64, items_per_page: i64) -> Self {
        Self {
            total_items,
            items_per_page,
            current_page: 1,
            config: PaginatorConfig::default(),
        }
    }

    pub fn current_page(mut self, current_page: i64) -> Self {
        self.current_page = current_page;
        self
    }

    /// Replace the whole display configuration
    pub fn config(mut self, config: PaginatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Maximum number of page numbers shown, validated by [`build`](Self::build)
    pub fn max_pages_to_show(mut self, max_pages_to_show: i64) -> Self {
        self.config.max_pages_to_show = max_pages_to_show;
        self
    }

    pub fn url_pattern(mut self, url_pattern: impl Into<String>) -> Self {
        self.config.url_pattern = url_pattern.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    pub fn previous_text(mut self, text: impl Into<String>) -> Self {
        self.config.previous_text = text.into();
        self
    }

    pub fn next_text(mut self, text: impl Into<String>) -> Self {
        self.config.next_text = text.into();
        self
    }

    pub fn ellipsis(mut self, text: impl Into<String>) -> Self {
        self.config.ellipsis = text.into();
        self
    }

    pub fn view(mut self, view: impl Into<View>) -> Self {
        self.config.view = view.into();
        self
    }

    /// Validate the configuration and build the paginator
    pub fn build(self) -> Result<Paginator> {
        Paginator::with_config(
            self.total_items,
            self.items_per_page,
            self.current_page,
            self.config,
        )
    }
}
