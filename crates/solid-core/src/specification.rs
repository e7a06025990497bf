//! Composable product predicates.
//!
//! New filtering criteria are added as new [`Specification`] types. The
//! [`filter`] function and the existing specifications never change to
//! accommodate them.

use crate::product::{Color, Product, Size};

/// A pure predicate over a single product.
///
/// Implementations must not have side effects; `filter` and the
/// combinators rely on being free to evaluate in any order, or not at all.
pub trait Specification {
    fn is_satisfied(&self, product: &Product) -> bool;
}

impl<S: Specification + ?Sized> Specification for &S {
    fn is_satisfied(&self, product: &Product) -> bool {
        (**self).is_satisfied(product)
    }
}

impl<S: Specification + ?Sized> Specification for Box<S> {
    fn is_satisfied(&self, product: &Product) -> bool {
        (**self).is_satisfied(product)
    }
}

/// Matches products of one colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    pub color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification for ColorSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.color() == self.color
    }
}

/// Matches products of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    pub size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification for SizeSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.size() == self.size
    }
}

/// Matches products with exactly this name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSpecification {
    pub name: String,
}

impl NameSpecification {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Specification for NameSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.name() == self.name
    }
}

/// Both specifications must hold. `second` is only evaluated when `first` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndSpecification<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Specification, B: Specification> Specification for AndSpecification<A, B> {
    fn is_satisfied(&self, product: &Product) -> bool {
        self.first.is_satisfied(product) && self.second.is_satisfied(product)
    }
}

/// Either specification may hold. `second` is only evaluated when `first` fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrSpecification<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> OrSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Specification, B: Specification> Specification for OrSpecification<A, B> {
    fn is_satisfied(&self, product: &Product) -> bool {
        self.first.is_satisfied(product) || self.second.is_satisfied(product)
    }
}

/// Inverts a specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSpecification<S> {
    pub inner: S,
}

impl<S> NotSpecification<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Specification> Specification for NotSpecification<S> {
    fn is_satisfied(&self, product: &Product) -> bool {
        !self.inner.is_satisfied(product)
    }
}

/// Builder methods for composing specifications.
///
/// ```
/// use solid_core::product::{Color, Size};
/// use solid_core::specification::{ColorSpecification, SizeSpecification};
/// use solid_core::SpecificationExt;
///
/// let large_green = SizeSpecification::new(Size::Large).and(ColorSpecification::new(Color::Green));
/// # let _ = large_green;
/// ```
pub trait SpecificationExt: Specification + Sized {
    fn and<B: Specification>(self, second: B) -> AndSpecification<Self, B> {
        AndSpecification::new(self, second)
    }

    fn or<B: Specification>(self, second: B) -> OrSpecification<Self, B> {
        OrSpecification::new(self, second)
    }

    fn not(self) -> NotSpecification<Self> {
        NotSpecification::new(self)
    }
}

impl<S: Specification> SpecificationExt for S {}

/// Products satisfying `spec`, in their original relative order.
///
/// The input is only borrowed, and the returned references point at the
/// input's own elements. Passing a previous result back in is allowed.
pub fn filter<'a, I, S>(products: I, spec: &S) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
    S: Specification + ?Sized,
{
    let matched: Vec<&'a Product> = products
        .into_iter()
        .filter(|product| spec.is_satisfied(product))
        .collect();
    tracing::trace!(matched = matched.len(), "filtered products");
    matched
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::product::Catalog;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("Apple", Color::Green, Size::Small),
            Product::new("Tree", Color::Green, Size::Large),
            Product::new("House", Color::Blue, Size::Large),
        ])
    }

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name().to_string()).collect()
    }

    /// Counts how often it is evaluated.
    struct Counting<'a> {
        result: bool,
        calls: &'a Cell<usize>,
    }

    impl Specification for Counting<'_> {
        fn is_satisfied(&self, _product: &Product) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.result
        }
    }

    #[test]
    fn test_filter_by_color() {
        let catalog = catalog();
        let green = filter(&catalog, &ColorSpecification::new(Color::Green));
        assert_eq!(names(&green), vec!["Apple", "Tree"]);
    }

    #[test]
    fn test_filter_by_size() {
        let catalog = catalog();
        let large = filter(&catalog, &SizeSpecification::new(Size::Large));
        assert_eq!(names(&large), vec!["Tree", "House"]);
    }

    #[test]
    fn test_filter_by_size_and_color() {
        let catalog = catalog();
        let spec = AndSpecification::new(
            SizeSpecification::new(Size::Large),
            ColorSpecification::new(Color::Green),
        );
        assert_eq!(names(&filter(&catalog, &spec)), vec!["Tree"]);
    }

    #[test]
    fn test_filter_returns_catalog_elements() {
        let catalog = catalog();
        let green = catalog.filter(&ColorSpecification::new(Color::Green));
        let stored: Vec<&Product> = catalog.iter().take(2).collect();
        assert!(std::ptr::eq(green[0], stored[0]));
        assert!(std::ptr::eq(green[1], stored[1]));
    }

    #[test]
    fn test_filter_no_matches() {
        let catalog = catalog();
        assert!(filter(&catalog, &ColorSpecification::new(Color::Red)).is_empty());
    }

    #[test]
    fn test_filter_empty_catalog() {
        let empty = Catalog::default();
        assert!(empty.filter(&SizeSpecification::new(Size::Small)).is_empty());
    }

    #[test]
    fn test_and_short_circuits() {
        let first_calls = Cell::new(0);
        let second_calls = Cell::new(0);
        let spec = AndSpecification::new(
            Counting {
                result: false,
                calls: &first_calls,
            },
            Counting {
                result: true,
                calls: &second_calls,
            },
        );

        let product = Product::new("Apple", Color::Green, Size::Small);
        assert!(!spec.is_satisfied(&product));
        assert_eq!(first_calls.get(), 1);
        assert_eq!(second_calls.get(), 0);
    }

    #[test]
    fn test_or_short_circuits() {
        let first_calls = Cell::new(0);
        let second_calls = Cell::new(0);
        let spec = OrSpecification::new(
            Counting {
                result: true,
                calls: &first_calls,
            },
            Counting {
                result: false,
                calls: &second_calls,
            },
        );

        let product = Product::new("Apple", Color::Green, Size::Small);
        assert!(spec.is_satisfied(&product));
        assert_eq!(second_calls.get(), 0);
    }

    #[test]
    fn test_or_and_not() {
        let catalog = catalog();
        let spec = ColorSpecification::new(Color::Blue).or(SizeSpecification::new(Size::Small));
        assert_eq!(names(&catalog.filter(&spec)), vec!["Apple", "House"]);

        let not_green = ColorSpecification::new(Color::Green).not();
        assert_eq!(names(&catalog.filter(&not_green)), vec!["House"]);
    }

    #[test]
    fn test_name_specification() {
        let catalog = catalog();
        let tree = catalog.filter(&NameSpecification::new("Tree"));
        assert_eq!(names(&tree), vec!["Tree"]);
    }

    #[test]
    fn test_nested_composition() {
        let catalog = catalog();
        let spec = SizeSpecification::new(Size::Large)
            .and(ColorSpecification::new(Color::Green).or(NameSpecification::new("House")))
            .and(NameSpecification::new("Apple").not());
        assert_eq!(names(&catalog.filter(&spec)), vec!["Tree", "House"]);
    }

    #[test]
    fn test_boxed_trait_objects_compose() {
        let catalog = catalog();
        let specs: Vec<Box<dyn Specification>> = vec![
            Box::new(ColorSpecification::new(Color::Green)),
            Box::new(SizeSpecification::new(Size::Large)),
        ];
        let mut iter = specs.into_iter();
        let first = iter.next().expect("first spec");
        let second = iter.next().expect("second spec");
        let both = first.and(second);
        assert_eq!(names(&catalog.filter(&both)), vec!["Tree"]);

        let dynamic: &dyn Specification = &both;
        assert_eq!(names(&filter(&catalog, dynamic)), vec!["Tree"]);
    }
}
