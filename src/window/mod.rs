//! Page window module
//!
//! Pure functions turning (total items, items per page, current page,
//! maximum visible pages) into a page count and an ordered list of page
//! markers for a page-number control.
//!
//! # Overview
//!
//! When every page fits into the budget, the window lists all pages.
//! Otherwise page 1 and the last page are always shown, a sliding block of
//! pages is centered on the current page, and ellipsis markers fill the gaps
//! where the block does not touch either end.

mod calculator;

pub use calculator::{
    current_page_item_range, next_page, num_adjacent, num_pages, page_window, prev_page,
};
