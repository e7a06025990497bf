//! UI primitives for the Solid CLI.
//!
//! This module provides:
//! - **Context**: Terminal detection and resolved settings (width, color, unicode)
//! - **Mode**: Output mode selection (json, plain, pretty)
//! - **Theme**: Badges, frame symbols, color styles
//! - **Render**: Banners, tables, narration, error messages
//! - **Format**: String utilities (truncate, single-line, product lines)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::{Terminal, UiContext};
pub use mode::Format;

pub use render::{banner, narration, print, print_error, table, write_stdout};

pub use format::{product_line, single_line};
