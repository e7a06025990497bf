//! JSON output: demo steps collected into one array of events.

use solid_core::{Journal, Printer, Product};

/// Collects demo steps as JSON events.
///
/// Blank lines carry no data and are not recorded.
#[derive(Debug, Default)]
pub struct JsonPrinter {
    events: Vec<serde_json::Value>,
}

impl JsonPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in order.
    pub fn finish(self) -> serde_json::Value {
        serde_json::Value::Array(self.events)
    }
}

impl Printer for JsonPrinter {
    fn banner(&mut self, title: &str) {
        self.events
            .push(serde_json::json!({ "event": "banner", "title": title }));
    }

    fn line(&mut self, text: &str) {
        self.events
            .push(serde_json::json!({ "event": "line", "text": text }));
    }

    fn blank(&mut self) {}

    fn journal(&mut self, journal: &Journal) {
        self.events.push(serde_json::json!({
            "event": "journal",
            "entries": journal.entries(),
        }));
    }

    fn products(&mut self, products: &[&Product]) {
        self.events.push(serde_json::json!({
            "event": "products",
            "products": products,
        }));
    }
}
