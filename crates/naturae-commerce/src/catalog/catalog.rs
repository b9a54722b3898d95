//! The product catalog.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// The storefront's product collection, in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from externally supplied products.
    ///
    /// The data is taken as-is: beyond defensive price parsing at cart-add
    /// time, the core does not validate it.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by id.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products, in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The first `n` products, for the home-page highlight section.
    pub fn featured(&self, n: usize) -> &[Product] {
        &self.products[..n.min(self.products.len())]
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Price;
    use crate::money::Money;

    fn simple(id: &str, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: "Visage & Corps".to_string(),
            price: Price::Amount(Money::new(1800)),
            description: String::new(),
            ingredients: Vec::new(),
            image: String::new(),
            options: Vec::new(),
            inci: None,
        }
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::new(vec![simple("1", "Baume"), simple("2", "Huile")]);
        assert_eq!(catalog.find(&ProductId::new("2")).unwrap().name, "Huile");
        assert!(catalog.find(&ProductId::new("9")).is_none());
    }

    #[test]
    fn test_featured_clamps_to_len() {
        let catalog = Catalog::new(vec![simple("1", "Baume"), simple("2", "Huile")]);
        assert_eq!(catalog.featured(4).len(), 2);
        assert_eq!(catalog.featured(1).len(), 1);
    }
}
