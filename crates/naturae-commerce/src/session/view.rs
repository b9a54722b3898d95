//! Top-level view routing.

use serde::{Deserialize, Serialize};

/// The storefront's top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum View {
    /// Landing page with the featured products.
    #[default]
    Home,
    /// Full product grid.
    Shop,
    /// Botanical glossary.
    Glossary,
    /// Product detail page (requires a selection).
    Product,
    /// About page with the contact form.
    About,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Shop => "shop",
            View::Glossary => "glossary",
            View::Product => "product",
            View::About => "about",
        }
    }

    /// Heading shown for the view.
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Accueil",
            View::Shop => "La Boutique",
            View::Glossary => "Glossaire Botanique",
            View::Product => "Produit",
            View::About => "À Propos",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_home() {
        assert_eq!(View::default(), View::Home);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(View::Glossary.as_str(), "glossary");
    }
}
