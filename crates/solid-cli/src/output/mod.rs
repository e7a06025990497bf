//! Printers for the demo runs.
//!
//! This module provides the [`solid_core::Printer`] implementations the CLI
//! injects into the demos: a terminal printer (plain or pretty) and a JSON
//! collector.

mod json;
mod text;

pub use json::JsonPrinter;
pub use text::TerminalPrinter;
