//! Tests for rendering module

use super::*;
use crate::types::View;
use pretty_assertions::assert_eq;

fn ellipsis_paginator() -> Paginator {
    Paginator::builder(100, 10)
        .current_page(5)
        .max_pages_to_show(3)
        .build()
        .unwrap()
}

// ============================================================================
// List View Tests
// ============================================================================

#[test]
fn test_list_all_pages() {
    let html = Paginator::new(30, 10, 2).render().unwrap();
    assert_eq!(
        html,
        concat!(
            r#"<ul class="pagination">"#,
            r#"<li class="page-previous"><a href="?page=1">&laquo; Previous</a></li>"#,
            r#"<li class="page-item first"><a href="?page=1">1</a></li>"#,
            r#"<li class="page-item active"><a href="?page=2">2</a></li>"#,
            r#"<li class="page-item last"><a href="?page=3">3</a></li>"#,
            r#"<li class="page-next"><a href="?page=3">Next &raquo;</a></li>"#,
            r#"</ul>"#,
        )
    );
}

#[test]
fn test_list_with_ellipses() {
    let html = ellipsis_paginator().render().unwrap();
    assert_eq!(
        html,
        concat!(
            r#"<ul class="pagination">"#,
            r#"<li class="page-previous"><a href="?page=4">&laquo; Previous</a></li>"#,
            r#"<li class="page-item first"><a href="?page=1">1</a></li>"#,
            r#"<li class="page-item disabled"><span>...</span></li>"#,
            r#"<li class="page-item active"><a href="?page=5">5</a></li>"#,
            r#"<li class="page-item disabled"><span>...</span></li>"#,
            r#"<li class="page-item last"><a href="?page=10">10</a></li>"#,
            r#"<li class="page-next"><a href="?page=6">Next &raquo;</a></li>"#,
            r#"</ul>"#,
        )
    );
}

#[test]
fn test_list_first_page_has_no_previous_link() {
    let html = Paginator::new(100, 10, 1).render().unwrap();
    assert!(html.starts_with(r#"<ul class="pagination"><li class="page-item first active">"#));
    assert!(!html.contains("page-previous"));
    assert!(html.ends_with(r#"<li class="page-next"><a href="?page=2">Next &raquo;</a></li></ul>"#));
}

#[test]
fn test_list_last_page_has_no_next_link() {
    let html = Paginator::new(100, 10, 10).render().unwrap();
    assert!(!html.contains("page-next"));
    assert!(html.contains(r#"<li class="page-item last active"><a href="?page=10">10</a></li>"#));
}

#[test]
fn test_list_custom_labels_and_pattern() {
    let paginator = Paginator::builder(1000, 10)
        .current_page(3)
        .previous_text("Prev")
        .next_text("Next")
        .placeholder("{page}")
        .url_pattern("/category/{page}")
        .build()
        .unwrap();

    let html = paginator.render().unwrap();
    assert!(html.contains(r#"<li class="page-previous"><a href="/category/2">Prev</a></li>"#));
    assert!(html.contains(r#"<li class="page-item active"><a href="/category/3">3</a></li>"#));
    assert!(html.contains(r#"<li class="page-item last"><a href="/category/100">100</a></li>"#));
    assert!(html.contains(r#"<li class="page-next"><a href="/category/4">Next</a></li>"#));
}

// ============================================================================
// Select Box View Tests
// ============================================================================

#[test]
fn test_selectbox_with_ellipses() {
    let mut paginator = ellipsis_paginator();
    paginator.set_view("mobile");

    assert_eq!(
        paginator.render().unwrap(),
        concat!(
            r#"<div class="pagination">"#,
            r#"<span class="page-previous"><a href="?page=4">&laquo; Previous</a></span>"#,
            r#"<select class="page-select">"#,
            r#"<option value="?page=1">1</option>"#,
            r#"<option disabled>...</option>"#,
            r#"<option value="?page=5" selected>5</option>"#,
            r#"<option disabled>...</option>"#,
            r#"<option value="?page=10">10</option>"#,
            r#"</select>"#,
            r#"<span class="page-next"><a href="?page=6">Next &raquo;</a></span>"#,
            r#"</div>"#,
        )
    );
}

#[test]
fn test_forced_view_overrides_configured_view() {
    let paginator = Paginator::new(30, 10, 1);
    assert_eq!(paginator.view(), View::List);

    let html = paginator
        .render_with(&HtmlRenderer::with_view(View::SelectBox))
        .unwrap();
    assert!(html.starts_with(r#"<div class="pagination"><select class="page-select">"#));
    assert!(html.contains(r#"<option value="?page=1" selected>1</option>"#));
}

// ============================================================================
// Escaping Tests
// ============================================================================

#[test]
fn test_urls_are_escaped() {
    let mut paginator = Paginator::new(30, 10, 2);
    paginator.set_url_pattern(r#"/find?q="<b>"&tag='x'&page=(:page)"#);

    let html = paginator.render().unwrap();
    assert!(html.contains(
        r#"href="/find?q=&quot;&lt;b&gt;&quot;&amp;tag=&#x27;x&#x27;&amp;page=2""#
    ));
    assert!(!html.contains("<b>"));
}

#[test]
fn test_labels_are_raw_markup() {
    let mut paginator = ellipsis_paginator();
    paginator
        .set_previous_text("<i>prev</i>")
        .set_next_text("<i>next</i>")
        .set_ellipsis("&hellip;");

    let html = paginator.render().unwrap();
    assert!(html.contains(r#"<a href="?page=4"><i>prev</i></a>"#));
    assert!(html.contains(r#"<a href="?page=6"><i>next</i></a>"#));
    assert!(html.contains("<span>&hellip;</span>"));
}

// ============================================================================
// Degenerate State Tests
// ============================================================================

#[test]
fn test_single_page_renders_empty() {
    assert_eq!(Paginator::new(5, 10, 1).render().unwrap(), "");
    assert_eq!(Paginator::new(0, 10, 1).render().unwrap(), "");
    assert_eq!(Paginator::new(100, 0, 1).render().unwrap(), "");

    let mut paginator = Paginator::new(5, 10, 1);
    paginator.set_view(View::SelectBox);
    assert_eq!(paginator.render().unwrap(), "");
}

#[test]
fn test_out_of_range_current_page_renders() {
    let html = Paginator::new(100, 10, 42).render().unwrap();
    assert!(!html.contains("active"));
    assert!(!html.contains("page-next"));
    assert!(html.contains(r#"<li class="page-previous"><a href="?page=41">"#));
}

#[test]
fn test_display_matches_render() {
    let paginator = ellipsis_paginator();
    assert_eq!(paginator.to_string(), paginator.render().unwrap());
}

// ============================================================================
// Strategy Tests
// ============================================================================

struct SummaryRenderer;

impl Renderer for SummaryRenderer {
    fn render(&self, paginator: &Paginator) -> Result<String> {
        Ok(format!(
            "page {} of {}",
            paginator.current_page(),
            paginator.num_pages()
        ))
    }
}

#[test]
fn test_custom_renderer() {
    let paginator = Paginator::new(95, 10, 4);
    assert_eq!(paginator.render_with(&SummaryRenderer).unwrap(), "page 4 of 10");

    let boxed: Box<dyn Renderer> = Box::new(SummaryRenderer);
    assert_eq!(paginator.render_with(&boxed).unwrap(), "page 4 of 10");
    assert_eq!(paginator.render_with(boxed.as_ref()).unwrap(), "page 4 of 10");
}

#[test]
fn test_json_renderer() {
    let paginator = ellipsis_paginator();
    let json = paginator.render_with(&JsonRenderer::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["num_pages"], 10);
    assert_eq!(value["current_page"], 5);
    assert_eq!(value["view"], "list");
    assert_eq!(value["item_range"]["first"], 41);
    assert_eq!(value["item_range"]["last"], 50);
    assert_eq!(value["prev"]["url"], "?page=4");
    assert_eq!(value["pages"].as_array().unwrap().len(), 5);
    assert_eq!(value["pages"][1]["label"], "...");
    assert!(value["pages"][1]["url"].is_null());

    let pretty = paginator.render_with(&JsonRenderer::pretty()).unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(serde_json::from_str::<serde_json::Value>(&pretty).unwrap(), value);
}
