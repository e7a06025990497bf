//! Scripted runs of the two examples.
//!
//! Each run drives the core types through a fixed sequence of operations and
//! reports every step through a [`Printer`]. The printer decides how the
//! plain data is shown; nothing here formats for a terminal.

mod open_closed;
mod single_responsibility;

pub use open_closed::OpenClosed;
pub use single_responsibility::SingleResponsibility;

use crate::error::Result;
use crate::journal::Journal;
use crate::product::Product;

/// Presentation capability injected into the demos.
pub trait Printer {
    /// Section title for a demo.
    fn banner(&mut self, title: &str);

    /// A line of narration (e.g., "Initial data:").
    fn line(&mut self, text: &str);

    /// A visual gap between steps.
    fn blank(&mut self);

    /// Current state of a journal.
    fn journal(&mut self, journal: &Journal);

    /// A list of products, usually a filter result.
    fn products(&mut self, products: &[&Product]);
}

/// The available demos, in the order `all` runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    SingleResponsibility,
    OpenClosed,
}

impl Demo {
    pub const ALL: [Demo; 2] = [Demo::SingleResponsibility, Demo::OpenClosed];

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SingleResponsibility => "srp",
            Self::OpenClosed => "ocp",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::SingleResponsibility => SingleResponsibility::TITLE,
            Self::OpenClosed => OpenClosed::TITLE,
        }
    }

    /// Run the demo, reporting through `printer`.
    ///
    /// # Errors
    ///
    /// Propagates any core error raised by the scripted steps.
    pub fn run(&self, printer: &mut dyn Printer) -> Result<()> {
        tracing::info!(demo = self.name(), "running demo");
        match self {
            Self::SingleResponsibility => SingleResponsibility::run(printer),
            Self::OpenClosed => OpenClosed::run(printer),
        }
    }
}

/// Printer that records every call, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingPrinter {
    pub events: Vec<String>,
}

#[cfg(test)]
impl Printer for RecordingPrinter {
    fn banner(&mut self, title: &str) {
        self.events.push(format!("banner:{}", title));
    }

    fn line(&mut self, text: &str) {
        self.events.push(format!("line:{}", text));
    }

    fn blank(&mut self) {
        self.events.push("blank".to_string());
    }

    fn journal(&mut self, journal: &Journal) {
        self.events
            .push(format!("journal:{}", journal.to_display_string()));
    }

    fn products(&mut self, products: &[&Product]) {
        let names: Vec<&str> = products.iter().map(|p| p.name()).collect();
        self.events.push(format!("products:{}", names.join(",")));
    }
}
