//! Page window calculations
//!
//! Every function here is a pure function of its arguments. Out-of-range
//! current pages never panic: arithmetic saturates and the window degrades
//! to a clamped block.

use crate::types::{ItemRange, PageMarker};

// ============================================================================
// Page Count
// ============================================================================

/// Number of pages needed for `total_items` split into pages of `items_per_page`.
///
/// Returns 0 when either input is zero or negative, otherwise the exact
/// integer ceiling of `total_items / items_per_page`.
pub fn num_pages(total_items: i64, items_per_page: i64) -> i64 {
    if total_items <= 0 || items_per_page <= 0 {
        return 0;
    }
    total_items / items_per_page + i64::from(total_items % items_per_page != 0)
}

/// Pages shown on each side of the sliding block.
///
/// Three slots are reserved for the first page, the last page and at least
/// one ellipsis.
pub fn num_adjacent(max_pages_to_show: i64) -> i64 {
    max_pages_to_show.saturating_sub(3).div_euclid(2)
}

// ============================================================================
// Page Window
// ============================================================================

/// Compute the ordered page markers for a page-number control.
///
/// - `num_pages <= 1`: empty
/// - `num_pages <= max_pages_to_show`: every page `1..=num_pages`
/// - otherwise: page 1, a sliding block around `current_page` clamped to
///   `[2, num_pages - 1]`, the last page, and an ellipsis on each side where
///   the block does not touch the end page
///
/// `max_pages_to_show` is validated where it is configured; this function
/// assumes it is at least 3.
pub fn page_window(num_pages: i64, current_page: i64, max_pages_to_show: i64) -> Vec<PageMarker> {
    if num_pages <= 1 {
        return Vec::new();
    }

    if num_pages <= max_pages_to_show {
        return (1..=num_pages)
            .map(|number| PageMarker::page(number, number == current_page))
            .collect();
    }

    let adjacent = num_adjacent(max_pages_to_show);

    let mut sliding_start = if current_page.saturating_add(adjacent) > num_pages {
        num_pages.saturating_sub(max_pages_to_show).saturating_add(2)
    } else {
        current_page.saturating_sub(adjacent)
    };
    if sliding_start < 2 {
        sliding_start = 2;
    }

    let mut sliding_end = sliding_start.saturating_add(max_pages_to_show.saturating_sub(3));
    if sliding_end >= num_pages {
        sliding_end = num_pages - 1;
    }

    let mut markers = Vec::new();

    markers.push(PageMarker::page(1, current_page == 1));
    if sliding_start > 2 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.extend(
        (sliding_start..=sliding_end).map(|number| PageMarker::page(number, number == current_page)),
    );
    if sliding_end < num_pages - 1 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.push(PageMarker::page(num_pages, current_page == num_pages));

    markers
}

// ============================================================================
// Item Range
// ============================================================================

/// 1-based item range shown on `current_page`, or `None` when the page lies
/// beyond the data.
pub fn current_page_item_range(
    current_page: i64,
    items_per_page: i64,
    total_items: i64,
) -> Option<ItemRange> {
    let first = current_page
        .saturating_sub(1)
        .saturating_mul(items_per_page)
        .saturating_add(1);

    if first > total_items {
        return None;
    }

    let last = first
        .saturating_add(items_per_page)
        .saturating_sub(1)
        .min(total_items);

    Some(ItemRange { first, last })
}

// ============================================================================
// Adjacent Pages
// ============================================================================

/// Previous page number, if the current page is past the first page
pub fn prev_page(current_page: i64) -> Option<i64> {
    (current_page > 1).then(|| current_page - 1)
}

/// Next page number, if the current page is before the last page
pub fn next_page(current_page: i64, num_pages: i64) -> Option<i64> {
    (current_page < num_pages).then(|| current_page + 1)
}
