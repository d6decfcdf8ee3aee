//! Rendering module
//!
//! Turns a [`Paginator`] into a string representation.
//!
//! # Overview
//!
//! [`Renderer`] is the strategy seam: the built-in [`HtmlRenderer`] produces
//! list or select-box markup, [`JsonRenderer`] serializes the paginator
//! state, and callers override either by implementing the trait and passing
//! it to [`Paginator::render_with`].

mod templates;

use crate::error::Result;
use crate::paginator::Paginator;
use crate::types::View;
use askama::Template;
use templates::{ListTemplate, PaginationModel, SelectBoxTemplate};

/// Strategy producing a rendered representation of a paginator
pub trait Renderer {
    /// Render the paginator
    fn render(&self, paginator: &Paginator) -> Result<String>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, paginator: &Paginator) -> Result<String> {
        (**self).render(paginator)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&self, paginator: &Paginator) -> Result<String> {
        (**self).render(paginator)
    }
}

// ============================================================================
// HTML
// ============================================================================

/// Built-in HTML markup.
///
/// Uses the paginator's configured view unless a view is forced with
/// [`HtmlRenderer::with_view`]. A paginator with at most one page renders as
/// the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    view: Option<View>,
}

impl HtmlRenderer {
    /// Renderer following the paginator's view
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer that always uses `view`
    pub fn with_view(view: View) -> Self {
        Self { view: Some(view) }
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, paginator: &Paginator) -> Result<String> {
        if paginator.num_pages() <= 1 {
            return Ok(String::new());
        }

        let model = PaginationModel::from_paginator(paginator);
        let html = match self.view.unwrap_or_else(|| paginator.view()) {
            View::List => ListTemplate { model: &model }.render()?,
            View::SelectBox => SelectBoxTemplate { model: &model }.render()?,
        };
        Ok(html)
    }
}

// ============================================================================
// JSON
// ============================================================================

/// Paginator state as JSON (see [`PaginatorSnapshot`](crate::PaginatorSnapshot))
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    /// Pretty-print the output
    pub pretty: bool,
}

impl JsonRenderer {
    /// Pretty-printing JSON renderer
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, paginator: &Paginator) -> Result<String> {
        let snapshot = paginator.snapshot();
        let json = if self.pretty {
            serde_json::to_string_pretty(&snapshot)?
        } else {
            serde_json::to_string(&snapshot)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests;
