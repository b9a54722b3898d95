//! Detail-view selection state.

use crate::catalog::{Price, Product, ProductOption};
use serde::{Deserialize, Serialize};

/// The product currently shown in the detail view, with its active option and
/// the quantity selector.
///
/// Selecting a product is one atomic transition that also derives the
/// dependent fields: the first declared option becomes active (none when the
/// product declares no options) and the quantity resets to 1. The derivation
/// fires on every product change, including switching directly from one
/// detail view to another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Selection {
    product: Option<Product>,
    active_option: Option<ProductOption>,
    quantity: u32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            product: None,
            active_option: None,
            quantity: 1,
        }
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `product` the viewed product and derive the defaults.
    pub fn select(&mut self, product: Product) {
        self.active_option = product.first_option().cloned();
        self.quantity = 1;
        self.product = Some(product);
    }

    /// Leave the detail view.
    pub fn clear(&mut self) {
        self.product = None;
        self.active_option = None;
        self.quantity = 1;
    }

    /// Activate one of the selected product's options by label.
    ///
    /// Callers offer only labels belonging to the selected product; anything
    /// else is refused and the active option is unchanged.
    pub fn set_option_by_label(&mut self, label: &str) -> bool {
        let Some(option) = self.product.as_ref().and_then(|p| p.option(label)) else {
            return false;
        };
        self.active_option = Some(option.clone());
        true
    }

    /// Set the quantity selector outright, floored at 1.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    /// Raise the quantity selector. Unbounded: the store tracks no stock.
    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Lower the quantity selector, clamped at the floor of 1.
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    /// The price currently shown: the active option's, else the product's.
    pub fn current_price(&self) -> Option<&Price> {
        let product = self.product.as_ref()?;
        Some(product.effective_price(self.active_option.as_ref()))
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn active_option(&self) -> Option<&ProductOption> {
        self.active_option.as_ref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_some(&self) -> bool {
        self.product.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Money;

    fn with_options() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Baume".to_string(),
            category: String::new(),
            price: Price::Text("à partir de 18".to_string()),
            description: String::new(),
            ingredients: Vec::new(),
            image: String::new(),
            options: vec![
                ProductOption::new("15g", Price::Amount(Money::new(1800))),
                ProductOption::new("30g", Price::Amount(Money::new(3000))),
            ],
            inci: None,
        }
    }

    fn without_options() -> Product {
        Product {
            id: ProductId::new("3"),
            name: "Baume à Lèvres".to_string(),
            category: String::new(),
            price: Price::Unavailable,
            description: String::new(),
            ingredients: Vec::new(),
            image: String::new(),
            options: Vec::new(),
            inci: None,
        }
    }

    #[test]
    fn test_select_activates_first_option() {
        let mut selection = Selection::new();
        selection.select(with_options());
        assert_eq!(selection.active_option().unwrap().label, "15g");
        assert_eq!(selection.quantity(), 1);
    }

    #[test]
    fn test_reselect_resets_option_and_quantity() {
        let mut selection = Selection::new();
        selection.select(with_options());
        selection.set_option_by_label("30g");
        selection.increment();
        selection.increment();
        assert_eq!(selection.quantity(), 3);

        // Switching to an optionless product clears both derived fields.
        selection.select(without_options());
        assert!(selection.active_option().is_none());
        assert_eq!(selection.quantity(), 1);
    }

    #[test]
    fn test_set_option_rejects_foreign_label() {
        let mut selection = Selection::new();
        selection.select(with_options());
        assert!(!selection.set_option_by_label("60g"));
        assert_eq!(selection.active_option().unwrap().label, "15g");
    }

    #[test]
    fn test_quantity_floor() {
        let mut selection = Selection::new();
        selection.select(with_options());
        selection.decrement();
        selection.decrement();
        assert_eq!(selection.quantity(), 1);
        selection.increment();
        assert_eq!(selection.quantity(), 2);
    }

    #[test]
    fn test_set_quantity_floors_at_one() {
        let mut selection = Selection::new();
        selection.select(with_options());
        selection.set_quantity(4);
        assert_eq!(selection.quantity(), 4);
        selection.set_quantity(0);
        assert_eq!(selection.quantity(), 1);
    }

    #[test]
    fn test_current_price_follows_active_option() {
        let mut selection = Selection::new();
        selection.select(with_options());
        assert_eq!(selection.current_price().unwrap().resolve(), Some(Money::new(1800)));
        selection.set_option_by_label("30g");
        assert_eq!(selection.current_price().unwrap().resolve(), Some(Money::new(3000)));
    }
}
