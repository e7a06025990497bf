use crate::error::Result;
use crate::product::{Catalog, Color, Product, Size};
use crate::specification::{AndSpecification, ColorSpecification, SizeSpecification};

use super::Printer;

/// Product filter demo: criteria are added as new specifications.
pub struct OpenClosed;

impl OpenClosed {
    pub const TITLE: &'static str = "SOLID Open Close Principle";

    /// The catalog the demo filters.
    pub fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("Apple", Color::Green, Size::Small),
            Product::new("Tree", Color::Green, Size::Large),
            Product::new("House", Color::Blue, Size::Large),
        ])
    }

    pub fn run(printer: &mut dyn Printer) -> Result<()> {
        printer.banner(Self::TITLE);

        let catalog = Self::catalog();
        let all: Vec<&Product> = catalog.iter().collect();
        printer.line("Initial data:");
        printer.products(&all);

        printer.line("Filtering by color (green):");
        let green = ColorSpecification::new(Color::Green);
        printer.products(&catalog.filter(&green));

        printer.line("Filtering by size (large):");
        let large = SizeSpecification::new(Size::Large);
        printer.products(&catalog.filter(&large));

        printer.line("Filtering by size and color (large, green):");
        let large_green = AndSpecification::new(large, green);
        printer.products(&catalog.filter(&large_green));
        Ok(())
    }
}
