//! Order summary composition.

use crate::cart::Cart;
use crate::checkout::{MailDraft, StoreInfo};
use std::fmt::Write as _;

/// Compose the order mail for the current cart contents.
///
/// The body lists every line item (name, option label when present, quantity,
/// unit price and line total) followed by the grand total and the customer
/// coordinates skeleton the store asks buyers to fill in. Deterministic: rows
/// appear in cart insertion order.
pub fn compose_order(cart: &Cart, store: &StoreInfo) -> MailDraft {
    let mut lines = String::new();
    for item in cart.items() {
        let option = item
            .option_label
            .as_deref()
            .map(|label| format!(" ({label})"))
            .unwrap_or_default();
        let _ = writeln!(
            lines,
            "- {}{} x{} : {} (Total: {})",
            item.name,
            option,
            item.quantity,
            item.unit_price,
            item.line_total()
        );
    }

    let body = format!(
        "Bonjour {name},\n\n\
         Je souhaite passer la commande suivante :\n\n\
         {lines}\n\
         Total : {total}\n\n\
         Coordonnées client :\n\
         Nom :\n\
         Téléphone :\n\
         Adresse de livraison :\n\n\
         Merci !",
        name = store.name,
        lines = lines,
        total = cart.total()
    );

    MailDraft::new(
        store.email.clone(),
        format!("Nouvelle commande - {}", store.name),
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Price, Product, ProductOption};
    use crate::ids::ProductId;
    use crate::money::Money;

    fn store() -> StoreInfo {
        StoreInfo::new("Espace Naturaē", "info@espacenaturae.ca")
    }

    fn product(id: &str, name: &str, price: Price, options: Vec<ProductOption>) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: String::new(),
            price,
            description: String::new(),
            ingredients: Vec::new(),
            image: String::new(),
            options,
            inci: None,
        }
    }

    #[test]
    fn test_compose_order_lists_items_and_total() {
        let mut cart = Cart::new();
        let balm = product(
            "1",
            "Baume de suif",
            Price::Amount(Money::new(1800)),
            vec![ProductOption::new("30g", Price::Amount(Money::new(3000)))],
        );
        let oil = product("4", "Huile Élixir", Price::Amount(Money::new(2800)), Vec::new());
        cart.add(&balm, balm.option("30g"), 2);
        cart.add(&oil, None, 1);

        let draft = compose_order(&cart, &store());

        assert_eq!(draft.to, "info@espacenaturae.ca");
        assert_eq!(draft.subject, "Nouvelle commande - Espace Naturaē");
        assert!(draft.body.contains("- Baume de suif (30g) x2 : 30$ (Total: 60$)"));
        assert!(draft.body.contains("- Huile Élixir x1 : 28$ (Total: 28$)"));
        assert!(draft.body.contains("Total : 88$"));
        assert!(draft.body.starts_with("Bonjour Espace Naturaē,"));
        assert!(draft.body.contains("Adresse de livraison :"));
    }

    #[test]
    fn test_compose_order_is_deterministic() {
        let mut cart = Cart::new();
        let oil = product("4", "Huile Élixir", Price::Amount(Money::new(2800)), Vec::new());
        cart.add(&oil, None, 1);

        let a = compose_order(&cart, &store());
        let b = compose_order(&cart, &store());
        assert_eq!(a, b);
    }
}
