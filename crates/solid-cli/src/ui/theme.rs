//! Theme definitions for colors, symbols, and badges.

use owo_colors::{OwoColorize, Style};
use solid_core::Color;

/// Symbol pair for ASCII and Unicode variants.
#[derive(Debug, Clone)]
pub struct SymbolPair {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl SymbolPair {
    pub const fn new(ascii: &'static str, unicode: &'static str) -> Self {
        Self { ascii, unicode }
    }

    /// Get the appropriate symbol based on unicode flag.
    pub fn get(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

/// Box-drawing symbols for banners.
pub mod frame {
    use super::SymbolPair;

    pub const TOP_LEFT: SymbolPair = SymbolPair::new("+", "\u{250C}"); // ┌
    pub const TOP_RIGHT: SymbolPair = SymbolPair::new("+", "\u{2510}"); // ┐
    pub const BOTTOM_LEFT: SymbolPair = SymbolPair::new("+", "\u{2514}"); // └
    pub const BOTTOM_RIGHT: SymbolPair = SymbolPair::new("+", "\u{2518}"); // ┘
    pub const HORIZONTAL: SymbolPair = SymbolPair::new("-", "\u{2500}"); // ─
    pub const VERTICAL: SymbolPair = SymbolPair::new("|", "\u{2502}"); // │
}

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Err,
}

impl Badge {
    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match self {
            Self::Err => {
                if unicode {
                    "[\u{2717}]" // [✗]
                } else {
                    "[ERR]"
                }
            }
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Err => styles::red(),
        }
    }
}

/// Reusable styles.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn red() -> Style {
        Style::new().red()
    }
}

/// Style matching a product colour.
pub fn product_color_style(color: Color) -> Style {
    match color {
        Color::Red => Style::new().red(),
        Color::Green => Style::new().green(),
        Color::Blue => Style::new().blue(),
    }
}

/// Apply `style` when color output is enabled.
pub fn styled(text: &str, style: Style, enabled: bool) -> String {
    if enabled {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
