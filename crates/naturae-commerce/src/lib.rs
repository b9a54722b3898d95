//! Storefront domain logic for the Naturaē shop.
//!
//! This crate provides the state-management core behind the storefront:
//!
//! - **Catalog**: immutable products, purchase options, botanical glossary
//! - **Cart**: shopping cart with merged line items and derived totals
//! - **Checkout**: order/contact mail composition and `mailto:` hand-off
//! - **Session**: view routing, product selection, glossary filtering
//!
//! Everything is synchronous, in-memory and presentation-agnostic: the
//! rendering layer calls the operations here and re-renders from the
//! resulting state. Cart contents are ephemeral and die with the session.
//!
//! # Example
//!
//! ```rust,ignore
//! use naturae_commerce::prelude::*;
//!
//! let mut session = Session::new(catalog, glossary, store);
//! session.view_product(&ProductId::new("1"))?;
//! session.set_active_option("30g")?;
//! session.increment_quantity();
//! session.add_selection_to_cart();
//!
//! let draft = session.checkout()?;
//! println!("{}", draft.mailto_url());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod session;

pub use error::StoreError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Glossary, GlossaryItem, Price, Product, ProductOption};

    // Cart
    pub use crate::cart::{Cart, LineItem, LineKey};

    // Checkout
    pub use crate::checkout::{
        compose_contact, compose_order, ContactForm, MailDraft, StoreInfo,
    };

    // Session
    pub use crate::session::{Selection, Session, View};
}
