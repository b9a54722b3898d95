//! Cart and line item types.
//!
//! The cart never fails an operation: a sentinel-priced add, an update on a
//! missing row or a remove on a missing row are all silent no-ops. The
//! presentation layer is expected to prevent them; the cart guards anyway.

use crate::catalog::{Product, ProductOption};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Identity of a cart row: one product id plus the chosen option label, or no
/// label for products added without a variant. Updates and removals match on
/// this key exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    /// Product identifier.
    pub product: ProductId,
    /// Chosen option label, absent for no-variant rows.
    pub option: Option<String>,
}

impl LineKey {
    pub fn new(product: ProductId, option: Option<impl Into<String>>) -> Self {
        Self {
            product,
            option: option.map(Into::into),
        }
    }
}

/// A line item in the cart.
///
/// Carries a materialized copy of the product's display fields; the unit
/// price is resolved once at first insertion and never re-derived, so later
/// catalog price changes leave rows already in the cart untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product identifier.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Product image reference (denormalized for display).
    pub image: String,
    /// Chosen option label, if the product was added with a variant.
    pub option_label: Option<String>,
    /// Quantity, always ≥ 1.
    pub quantity: u32,
    /// Resolved unit price.
    pub unit_price: Money,
}

impl LineItem {
    /// The identity key of this row.
    pub fn key(&self) -> LineKey {
        LineKey {
            product: self.product_id.clone(),
            option: self.option_label.clone(),
        }
    }

    /// `unit_price × quantity`.
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart, merging with an existing row.
    ///
    /// The effective listed price is the option's when one is chosen, the
    /// product's base price otherwise. A sentinel-priced product is refused
    /// silently: no state change, `false` returned, and the caller must not
    /// raise the cart-open signal.
    ///
    /// When a row with the same (product, option label) identity already
    /// exists, its quantity is incremented in place and its stored unit price
    /// is left untouched. Otherwise a new row is appended with the price
    /// resolved now (unparseable price text resolves to 0 rather than
    /// blocking the add).
    ///
    /// Returns whether the cart changed.
    pub fn add(&mut self, product: &Product, option: Option<&ProductOption>, quantity: u32) -> bool {
        let listed = product.effective_price(option);
        let Some(unit_price) = listed.resolve() else {
            return false;
        };

        // Quantity floor holds on entry too.
        let quantity = quantity.max(1);

        let key = LineKey::new(product.id.clone(), option.map(|o| o.label.as_str()));
        if let Some(existing) = self.items.iter_mut().find(|item| item.key() == key) {
            existing.quantity += quantity;
            return true;
        }

        self.items.push(LineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            option_label: key.option,
            quantity,
            unit_price,
        });
        true
    }

    /// Apply a quantity delta to the row with the given key.
    ///
    /// The result is clamped at the floor of 1: a row never reaches zero by
    /// decrementing, only by [`Cart::remove`]. No-op when no row matches.
    pub fn update_quantity(&mut self, key: &LineKey, delta: i64) {
        if let Some(item) = self.items.iter_mut().find(|item| &item.key() == key) {
            let new_quantity = i64::from(item.quantity)
                .saturating_add(delta)
                .clamp(1, i64::from(u32::MAX));
            item.quantity = new_quantity as u32;
        }
    }

    /// Remove the row with the given key. Returns whether a row was removed.
    pub fn remove(&mut self, key: &LineKey) -> bool {
        let len_before = self.items.len();
        self.items.retain(|item| &item.key() != key);
        self.items.len() < len_before
    }

    /// Grand total: the sum of every row's `unit_price × quantity`.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Rows in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a row by key.
    pub fn get(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.key() == key)
    }

    /// Total item count (sum of quantities), for the navbar badge.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Number of distinct rows.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every row.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Price;

    fn product(id: &str, price: Price, options: Vec<ProductOption>) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Produit {id}"),
            category: "Visage & Corps".to_string(),
            price,
            description: String::new(),
            ingredients: Vec::new(),
            image: format!("/images/{id}.jpg"),
            options,
            inci: None,
        }
    }

    fn balm() -> Product {
        product(
            "1",
            Price::Text("à partir de 18".to_string()),
            vec![
                ProductOption::new("15g", Price::Amount(Money::new(1800))),
                ProductOption::new("30g", Price::Amount(Money::new(3000))),
            ],
        )
    }

    #[test]
    fn test_add_new_item() {
        let mut cart = Cart::new();
        let balm = balm();
        assert!(cart.add(&balm, balm.option("15g"), 2));
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.items()[0].unit_price, Money::new(1800));
    }

    #[test]
    fn test_add_same_key_merges() {
        let mut cart = Cart::new();
        let balm = balm();
        cart.add(&balm, balm.option("15g"), 1);
        cart.add(&balm, balm.option("15g"), 2);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_merge_keeps_first_resolved_price() {
        let mut cart = Cart::new();
        let mut balm = balm();
        let small = balm.option("15g").cloned().unwrap();
        cart.add(&balm, Some(&small), 1);

        // The catalog price changes mid-session; the row keeps its price.
        balm.options[0].price = Price::Amount(Money::new(9900));
        cart.add(&balm, balm.option("15g"), 2);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.items()[0].unit_price, Money::new(1800));
    }

    #[test]
    fn test_option_and_no_option_are_distinct_rows() {
        let mut cart = Cart::new();
        let balm = balm();
        cart.add(&balm, None, 1);
        cart.add(&balm, balm.option("30g"), 1);
        assert_eq!(cart.unique_item_count(), 2);

        // Each row updates independently of the other.
        cart.update_quantity(&LineKey::new(balm.id.clone(), Some("30g")), 5);
        assert_eq!(cart.get(&LineKey::new(balm.id.clone(), None::<&str>)).unwrap().quantity, 1);
        assert_eq!(
            cart.get(&LineKey::new(balm.id.clone(), Some("30g"))).unwrap().quantity,
            6
        );
    }

    #[test]
    fn test_sentinel_price_is_a_no_op() {
        let mut cart = Cart::new();
        let lip_balm = product("3", Price::Unavailable, Vec::new());
        assert!(!cart.add(&lip_balm, None, 1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unparseable_price_falls_back_to_zero() {
        let mut cart = Cart::new();
        let odd = product("9", Price::Text("prix sur demande".to_string()), Vec::new());
        assert!(cart.add(&odd, None, 3));
        assert_eq!(cart.items()[0].unit_price, Money::ZERO);
        assert_eq!(cart.total(), Money::ZERO);
    }

    #[test]
    fn test_quantity_floor_under_decrements() {
        let mut cart = Cart::new();
        let balm = balm();
        cart.add(&balm, balm.option("15g"), 2);
        let key = LineKey::new(balm.id.clone(), Some("15g"));

        cart.update_quantity(&key, -1); // 2 -> 1
        cart.update_quantity(&key, -1); // clamped at 1
        cart.update_quantity(&key, -5); // still clamped
        assert_eq!(cart.get(&key).unwrap().quantity, 1);

        cart.update_quantity(&key, 3);
        assert_eq!(cart.get(&key).unwrap().quantity, 4);
    }

    #[test]
    fn test_update_missing_row_is_a_no_op() {
        let mut cart = Cart::new();
        cart.update_quantity(&LineKey::new(ProductId::new("42"), None::<&str>), 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        let balm = balm();
        cart.add(&balm, balm.option("15g"), 1);
        let key = LineKey::new(balm.id.clone(), Some("15g"));

        assert!(cart.remove(&key));
        assert!(cart.is_empty());
        assert!(!cart.remove(&key));
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::new();
        let balm = balm();
        let oil = product("4", Price::Amount(Money::new(2800)), Vec::new());
        cart.add(&balm, balm.option("30g"), 2); // 2 × 30$
        cart.add(&oil, None, 1); // 1 × 28$
        assert_eq!(cart.total(), Money::new(8800));
    }

    #[test]
    fn test_zero_quantity_add_is_floored_to_one() {
        let mut cart = Cart::new();
        let balm = balm();
        cart.add(&balm, None, 0);
        assert_eq!(cart.items()[0].quantity, 1);
    }
}
