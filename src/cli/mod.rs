//! CLI module
//!
//! Command-line interface for computing and rendering paginators.
//!
//! # Commands
//!
//! - `render` - Print pagination markup
//! - `pages` - Print the page window
//! - `info` - Print page count, item range and adjacent pages

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PaginateArgs};
pub use runner::Runner;
