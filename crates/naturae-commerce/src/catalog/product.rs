//! Product, option and listed-price types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker string used in catalog data for products that cannot be ordered yet.
pub const UNAVAILABLE_MARKER: &str = "Bientôt disponible";

/// A listed price as it appears in the catalog.
///
/// Merchants write prices either as plain numbers, as display text that still
/// carries a number ("à partir de 18"), or as the not-orderable marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Price {
    /// A plain numeric price.
    Amount(Money),
    /// Display text carrying a price ("à partir de 18").
    Text(String),
    /// The product cannot currently be ordered.
    Unavailable,
}

impl Price {
    /// Whether this price permits adding the product to the cart.
    pub fn is_orderable(&self) -> bool {
        !matches!(self, Price::Unavailable)
    }

    /// Resolve to a concrete unit price.
    ///
    /// Returns `None` only for [`Price::Unavailable`]. Text that carries no
    /// parseable number resolves to zero rather than failing: an unparseable
    /// catalog entry must never block adding to the cart.
    pub fn resolve(&self) -> Option<Money> {
        match self {
            Price::Amount(amount) => Some(*amount),
            Price::Text(text) => Some(Money::parse_loose(text).unwrap_or(Money::ZERO)),
            Price::Unavailable => None,
        }
    }

    /// The label shown on product cards and the detail page.
    pub fn label(&self) -> String {
        match self {
            Price::Amount(amount) => amount.to_string(),
            Price::Text(text) => text.clone(),
            Price::Unavailable => UNAVAILABLE_MARKER.to_string(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Price::Amount(amount) => serializer.serialize_f64(amount.to_decimal()),
            Price::Text(text) => serializer.serialize_str(text),
            Price::Unavailable => serializer.serialize_str(UNAVAILABLE_MARKER),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Listed {
            Number(f64),
            Label(String),
        }

        match Listed::deserialize(deserializer)? {
            Listed::Number(n) if n.is_finite() => Ok(Price::Amount(Money::from_decimal(n))),
            Listed::Number(n) => Err(D::Error::custom(format!("non-finite price: {n}"))),
            Listed::Label(s) if s.trim() == UNAVAILABLE_MARKER => Ok(Price::Unavailable),
            Listed::Label(s) => Ok(Price::Text(s)),
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category shown on the detail page (e.g. "Visage & Corps").
    pub category: String,
    /// Listed base price.
    pub price: Price,
    /// Full description.
    pub description: String,
    /// Key ingredient names, in display order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Image or embedded-media reference.
    pub image: String,
    /// Purchasable options (e.g. sizes), in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ProductOption>,
    /// Full INCI disclosure text, when published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inci: Option<String>,
}

impl Product {
    /// Check if the product can be ordered at all.
    pub fn is_orderable(&self) -> bool {
        self.price.is_orderable()
    }

    /// Check if the product declares purchase options.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// The first declared option, which the detail view activates by default.
    pub fn first_option(&self) -> Option<&ProductOption> {
        self.options.first()
    }

    /// Look up an option by its exact label.
    pub fn option(&self, label: &str) -> Option<&ProductOption> {
        self.options.iter().find(|o| o.label == label)
    }

    /// The price in effect for a given option choice: the option's own price
    /// when one is chosen, the base price otherwise.
    pub fn effective_price<'a>(&'a self, option: Option<&'a ProductOption>) -> &'a Price {
        option.map_or(&self.price, |o| &o.price)
    }
}

/// A purchasable configuration of a product (e.g. a size).
///
/// Labels are unique within their parent product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductOption {
    /// Option label (e.g. "30g").
    pub label: String,
    /// The option's own listed price.
    pub price: Price,
}

impl ProductOption {
    pub fn new(label: impl Into<String>, price: Price) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }
}
