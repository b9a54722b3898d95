//! Store data file.
//!
//! The whole storefront is driven by one declarative file: store identity,
//! products and glossary entries. The domain crate treats it as read-only
//! input and never validates it beyond defensive price parsing.

use anyhow::{Context, Result};
use naturae_commerce::prelude::{GlossaryItem, Product};
use serde::{Deserialize, Serialize};

/// The store data file (`naturae.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store identity.
    pub store: StoreSection,

    /// Product catalog, in display order.
    #[serde(default)]
    pub products: Vec<Product>,

    /// Botanical glossary entries.
    #[serde(default)]
    pub glossary: Vec<GlossaryItem>,
}

impl StoreConfig {
    /// Load store data from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read store data file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON store data: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML store data: {}", path))
        }
    }
}

/// Store identity and static page text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    /// Store display name.
    pub name: String,

    /// Address order and contact mail is sent to.
    pub email: String,

    /// Short tagline shown under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    /// About-page text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_toml() {
        let config: StoreConfig = toml::from_str(
            r#"
            [store]
            name = "Espace Naturaē"
            email = "info@espacenaturae.ca"
            "#,
        )
        .unwrap();
        assert_eq!(config.store.name, "Espace Naturaē");
        assert!(config.products.is_empty());
        assert!(config.glossary.is_empty());
    }

    #[test]
    fn test_demo_store_data_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../naturae.toml");
        let config = StoreConfig::load(path).unwrap();

        assert_eq!(config.store.email, "info@espacenaturae.ca");
        assert_eq!(config.products.len(), 4);
        assert_eq!(config.glossary.len(), 12);

        // The lip balm is listed but not orderable yet.
        assert!(!config.products[2].is_orderable());
        // The face balm declares its two sizes.
        assert_eq!(config.products[0].options.len(), 2);
    }

    #[test]
    fn test_products_and_glossary_tables() {
        let config: StoreConfig = toml::from_str(
            r#"
            [store]
            name = "Espace Naturaē"
            email = "info@espacenaturae.ca"

            [[products]]
            id = "1"
            name = "Baume de suif"
            category = "Visage & Corps"
            price = "à partir de 18"
            description = "Baume nourrissant."
            ingredients = ["Suif de bœuf bio"]
            image = "/images/baume.jpg"

            [[products.options]]
            label = "15g"
            price = 18

            [[products.options]]
            label = "30g"
            price = 30

            [[glossary]]
            name = "Calendula"
            inci = "Calendula Officinalis Flower Extract"
            description = "La plante amie des peaux sensibles."
            "#,
        )
        .unwrap();

        assert_eq!(config.products.len(), 1);
        assert_eq!(config.products[0].options.len(), 2);
        assert_eq!(config.glossary.len(), 1);
    }
}
