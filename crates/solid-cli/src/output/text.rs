//! Plain and pretty terminal output.

use solid_core::{Journal, Printer, Product};

use crate::ui::theme::{product_color_style, styled};
use crate::ui::{banner, narration, print, product_line, single_line, table, UiContext};

/// Writes demo steps to stdout as they happen.
pub struct TerminalPrinter {
    ctx: UiContext,
    quiet: bool,
    started: bool,
}

impl TerminalPrinter {
    pub fn new(ctx: UiContext, quiet: bool) -> Self {
        Self {
            ctx,
            quiet,
            started: false,
        }
    }

    fn product_rows(&self, products: &[&Product]) -> Vec<Vec<String>> {
        products
            .iter()
            .map(|p| {
                vec![
                    p.name().to_string(),
                    styled(p.color().as_str(), product_color_style(p.color()), self.ctx.color),
                    p.size().as_str().to_string(),
                ]
            })
            .collect()
    }
}

impl Printer for TerminalPrinter {
    fn banner(&mut self, title: &str) {
        if self.started {
            print(&self.ctx, "");
        }
        self.started = true;
        if !self.quiet {
            print(&self.ctx, &banner(&self.ctx, title));
        }
    }

    fn line(&mut self, text: &str) {
        print(&self.ctx, &narration(&self.ctx, text));
    }

    fn blank(&mut self) {
        print(&self.ctx, "");
    }

    fn journal(&mut self, journal: &Journal) {
        if self.ctx.mode.is_pretty() {
            let rows: Vec<Vec<String>> = journal
                .entries()
                .iter()
                .map(|e| vec![e.sequence.to_string(), single_line(&e.text)])
                .collect();
            print(&self.ctx, &table(&self.ctx, &["#", "Entry"], &rows));
        } else if !journal.is_empty() {
            print(&self.ctx, &journal.to_display_string());
        }
    }

    fn products(&mut self, products: &[&Product]) {
        if self.ctx.mode.is_pretty() {
            let rows = self.product_rows(products);
            print(&self.ctx, &table(&self.ctx, &["Name", "Color", "Size"], &rows));
        } else {
            for product in products {
                print(&self.ctx, &product_line(product));
            }
            print(&self.ctx, "");
        }
    }
}
