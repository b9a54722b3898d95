//! The storefront session: one user's view, selection and cart.

use crate::cart::{Cart, LineKey};
use crate::catalog::{Catalog, Glossary, GlossaryItem};
use crate::checkout::{compose_contact, compose_order, ContactForm, MailDraft, StoreInfo};
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::session::{Selection, View};

/// A single storefront session.
///
/// Owns every piece of mutable state behind the page: the current view, the
/// detail-view selection, the glossary letter filter, the cart and the
/// cart-panel flag. All transitions are synchronous; the presentation layer
/// calls a method, then re-reads state and re-renders.
///
/// Catalog, glossary and store identity are read-only inputs fixed at
/// construction. Cart state is ephemeral and dies with the session.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    glossary: Glossary,
    store: StoreInfo,
    view: View,
    selection: Selection,
    active_letter: Option<char>,
    cart: Cart,
    cart_open: bool,
}

impl Session {
    /// Open a session on the given store data.
    pub fn new(catalog: Catalog, glossary: Glossary, store: StoreInfo) -> Self {
        Self {
            catalog,
            glossary,
            store,
            view: View::default(),
            selection: Selection::new(),
            active_letter: None,
            cart: Cart::new(),
            cart_open: false,
        }
    }

    // --- view routing ---

    pub fn view(&self) -> View {
        self.view
    }

    /// Navigate to a view. `Product` without a current selection falls back
    /// to the shop grid.
    pub fn go_to(&mut self, view: View) {
        self.view = if view == View::Product && !self.selection.is_some() {
            View::Shop
        } else {
            view
        };
    }

    /// Open a product's detail view, deriving the default option and
    /// resetting the quantity selector as one transition.
    pub fn view_product(&mut self, id: &ProductId) -> Result<(), StoreError> {
        let product = self
            .catalog
            .find(id)
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))?
            .clone();
        self.selection.select(product);
        self.view = View::Product;
        Ok(())
    }

    // --- detail-view selection ---

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Activate an option of the selected product by label.
    pub fn set_active_option(&mut self, label: &str) -> Result<(), StoreError> {
        let Some(product) = self.selection.product() else {
            return Err(StoreError::NoSelection);
        };
        let product_id = product.id.to_string();
        if self.selection.set_option_by_label(label) {
            Ok(())
        } else {
            Err(StoreError::UnknownOption {
                product: product_id,
                label: label.to_string(),
            })
        }
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.selection.set_quantity(quantity);
    }

    pub fn increment_quantity(&mut self) {
        self.selection.increment();
    }

    pub fn decrement_quantity(&mut self) {
        self.selection.decrement();
    }

    // --- cart ---

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Add one unit of a product straight from a product card, without
    /// option or quantity choice. A successful add opens the cart panel; a
    /// sentinel-priced product changes nothing.
    pub fn quick_add(&mut self, id: &ProductId) -> Result<bool, StoreError> {
        let Some(product) = self.catalog.find(id) else {
            return Err(StoreError::ProductNotFound(id.to_string()));
        };
        let added = self.cart.add(product, None, 1);
        if added {
            self.cart_open = true;
        }
        Ok(added)
    }

    /// Add the detail-view selection (product, active option, chosen
    /// quantity) to the cart. Returns `false` when nothing is selected or
    /// the product is not orderable.
    pub fn add_selection_to_cart(&mut self) -> bool {
        let Some(product) = self.selection.product().cloned() else {
            return false;
        };
        let option = self.selection.active_option().cloned();
        let quantity = self.selection.quantity();
        let added = self.cart.add(&product, option.as_ref(), quantity);
        if added {
            self.cart_open = true;
        }
        added
    }

    /// Apply a quantity delta to a cart row; silent no-op on a missing key.
    pub fn update_cart_quantity(&mut self, key: &LineKey, delta: i64) {
        self.cart.update_quantity(key, delta);
    }

    /// Remove a cart row; silent no-op on a missing key.
    pub fn remove_from_cart(&mut self, key: &LineKey) -> bool {
        self.cart.remove(key)
    }

    // --- glossary filter ---

    pub fn glossary_letter(&self) -> Option<char> {
        self.active_letter
    }

    pub fn set_glossary_letter(&mut self, letter: Option<char>) {
        self.active_letter = letter;
    }

    /// The selectable filter letters.
    pub fn glossary_letters(&self) -> Vec<char> {
        self.glossary.letters()
    }

    /// The glossary entries visible under the active filter, sorted by name.
    pub fn visible_glossary(&self) -> Vec<&GlossaryItem> {
        self.glossary.visible(self.active_letter)
    }

    // --- submission ---

    /// Compose the order mail for the cart. The hand-off itself is the
    /// caller's job and has no result channel.
    pub fn checkout(&self) -> Result<MailDraft, StoreError> {
        if self.cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        Ok(compose_order(&self.cart, &self.store))
    }

    /// Compose the contact mail for a filled-in form.
    pub fn contact(&self, form: &ContactForm) -> MailDraft {
        compose_contact(form, &self.store)
    }

    // --- read-only inputs ---

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn glossary(&self) -> &Glossary {
        &self.glossary
    }

    pub fn store(&self) -> &StoreInfo {
        &self.store
    }
}
