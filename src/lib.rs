#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # Paginator
//!
//! Page-number controls for a linear collection split into fixed-size pages.
//!
//! ## Features
//!
//! - **Page Count**: exact integer ceiling of items over page size
//! - **Sliding Window**: first and last page always shown, a block centered
//!   on the current page, ellipsis markers where pages are skipped
//! - **Item Range**: first/last item index of the current page
//! - **URL Templates**: placeholder substitution such as `?page=(:page)`
//! - **Markup**: list or select-box HTML, or any custom [`Renderer`]
//!
//! ## Quick Start
//!
//! ```rust
//! use paginator::Paginator;
//!
//! let paginator = Paginator::builder(1000, 10)
//!     .current_page(3)
//!     .url_pattern("/category/{page}")
//!     .placeholder("{page}")
//!     .build()?;
//!
//! assert_eq!(paginator.num_pages(), 100);
//! assert_eq!(paginator.next_url().as_deref(), Some("/category/4"));
//!
//! let html = paginator.render()?;
//! assert!(html.starts_with(r#"<ul class="pagination">"#));
//! # Ok::<(), paginator::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Paginator                         │
//! │  totals · page size · current page · PaginatorConfig     │
//! └──────────────────────────────────────────────────────────┘
//!                │                 │                │
//!          ┌─────┴─────┐     ┌─────┴─────┐    ┌─────┴─────┐
//!          │  window   │     │    url    │    │  render   │
//!          ├───────────┤     ├───────────┤    ├───────────┤
//!          │ num_pages │     │ resolve   │    │ Html      │
//!          │ page_win… │     │ UrlPattern│    │ Json      │
//!          │ item range│     │           │    │ Renderer  │
//!          └───────────┘     └───────────┘    └───────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Page window calculations
pub mod window;

/// URL template resolution
pub mod url;

/// Display configuration
pub mod config;

/// Paginator state and builder
pub mod paginator;

/// Markup and JSON renderers
pub mod render;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::{load_config, PaginatorConfig};
pub use paginator::{Paginator, PaginatorBuilder, PaginatorSnapshot};
pub use render::{HtmlRenderer, JsonRenderer, Renderer};
pub use url::UrlPattern;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
