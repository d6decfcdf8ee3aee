//! Askama templates for the built-in markup styles
//!
//! URLs and page numbers go through askama's HTML escaper; labels are
//! emitted with `|safe` so entities like `&laquo;` survive.

use crate::paginator::Paginator;
use crate::types::{NavigationLink, PageItem};
use askama::Template;

/// One rendered window entry
#[derive(Debug, Clone)]
pub(crate) struct PageEntry {
    pub label: String,
    pub url: Option<String>,
    pub current: bool,
    pub first: bool,
    pub last: bool,
}

/// Everything a template needs, resolved up front
#[derive(Debug, Clone)]
pub(crate) struct PaginationModel {
    pub prev: Option<NavigationLink>,
    pub next: Option<NavigationLink>,
    pub previous_text: String,
    pub next_text: String,
    pub pages: Vec<PageEntry>,
}

impl PaginationModel {
    pub fn from_paginator(paginator: &Paginator) -> Self {
        let num_pages = paginator.num_pages();
        let pages = paginator
            .pages()
            .into_iter()
            .map(|PageItem { number, label, url, is_current }| PageEntry {
                label,
                url,
                current: is_current,
                first: number == Some(1),
                last: number == Some(num_pages),
            })
            .collect();

        Self {
            prev: paginator.prev_link(),
            next: paginator.next_link(),
            previous_text: paginator.previous_text().to_string(),
            next_text: paginator.next_text().to_string(),
            pages,
        }
    }
}

/// `<ul class="pagination">` list of links
#[derive(Template)]
#[template(path = "pagination/list.html")]
pub(crate) struct ListTemplate<'a> {
    pub model: &'a PaginationModel,
}

/// `<div class="pagination">` with a `<select>` of pages
#[derive(Template)]
#[template(path = "pagination/selectbox.html")]
pub(crate) struct SelectBoxTemplate<'a> {
    pub model: &'a PaginationModel,
}
