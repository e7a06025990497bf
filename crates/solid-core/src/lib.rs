//! # Solid Core
//!
//! Core library for Solid - two small worked examples of SOLID design:
//! a journal that only stores entries (single responsibility) and a product
//! filter that grows through new specifications rather than edits
//! (open/closed).
//!
//! This crate provides plain data and predicates only. Rendering lives
//! behind the [`demo::Printer`] trait so the CLI can choose how to show it.
//!
//! ## Architecture
//!
//! - **sequence**: Monotonic sequence number generator
//! - **journal**: Journal entry store
//! - **product**: Product records and the catalog
//! - **specification**: Composable product predicates and `filter`
//! - **demo**: Scripted runs of both examples

pub mod demo;
pub mod error;
pub mod journal;
pub mod product;
pub mod sequence;
pub mod specification;

pub use demo::{Demo, Printer};
pub use error::{Result, SolidError};
pub use journal::{Journal, JournalEntry};
pub use product::{Catalog, Color, Product, Size};
pub use sequence::SequenceGenerator;
pub use specification::{filter, Specification, SpecificationExt};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
