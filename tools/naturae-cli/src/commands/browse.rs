//! Interactive storefront.
//!
//! A terminal rendition of the shop: product grid, detail view with options
//! and quantity, cart panel, glossary and contact form. Every action drives
//! the session API; the screens below only read state back and print it.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use naturae_commerce::prelude::{ContactForm, Session, View};

use crate::context::Context;

/// Run the interactive storefront.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("browse is interactive; --json is not supported");
    }

    let mut session = ctx.session();

    ctx.output.header(&ctx.config.store.name);
    if let Some(ref tagline) = ctx.config.store.tagline {
        ctx.output.para(tagline);
    }

    loop {
        let cart_badge = format!("Votre Panier ({})", session.cart().item_count());
        let menu = [
            "La Boutique",
            "Glossaire Botanique",
            "À Propos",
            cart_badge.as_str(),
            "Quitter",
        ];

        let choice = Select::new()
            .with_prompt("Navigation")
            .items(&menu)
            .default(0)
            .interact()?;

        match choice {
            0 => shop(&mut session, ctx)?,
            1 => glossary(&mut session, ctx)?,
            2 => about(&mut session, ctx)?,
            3 => {
                session.open_cart();
                cart_panel(&mut session, ctx)?;
            }
            _ => break,
        }

        // A successful add raises the cart-open signal; show the panel.
        if session.is_cart_open() {
            cart_panel(&mut session, ctx)?;
        }
    }

    Ok(())
}

/// Product grid.
fn shop(session: &mut Session, ctx: &Context) -> Result<()> {
    session.go_to(View::Shop);

    loop {
        ctx.output.header(session.view().title());

        let mut rows: Vec<String> = session
            .catalog()
            .products()
            .iter()
            .map(|p| format!("{} — {}", p.name, p.price.label()))
            .collect();
        rows.push("Retour".to_string());

        let choice = Select::new()
            .with_prompt("Nos produits")
            .items(&rows)
            .default(0)
            .interact()?;

        if choice == session.catalog().len() {
            return Ok(());
        }

        let id = session.catalog().products()[choice].id.clone();
        session.view_product(&id)?;
        product_detail(session, ctx)?;

        if session.is_cart_open() {
            return Ok(());
        }
    }
}

/// Product detail view.
fn product_detail(session: &mut Session, ctx: &Context) -> Result<()> {
    loop {
        let Some(product) = session.selection().product() else {
            return Ok(());
        };

        ctx.output.header(&product.name);
        ctx.output.kv("Catégorie", &product.category);
        let price_label = session
            .selection()
            .current_price()
            .map(|p| p.label())
            .unwrap_or_default();
        ctx.output.kv("Prix", &format!("{} CAD", price_label));
        ctx.output.para(&product.description);
        if !product.ingredients.is_empty() {
            ctx.output
                .kv("Ingrédients clés", &product.ingredients.join(", "));
        }
        if let Some(ref inci) = product.inci {
            ctx.output.kv("INCI", inci);
        }

        let orderable = product.is_orderable();
        let has_options = product.has_options();
        let quantity = session.selection().quantity();

        let mut actions: Vec<String> = Vec::new();
        if orderable {
            actions.push(format!("Ajouter au Panier (x{})", quantity));
            actions.push("Quantité +".to_string());
            actions.push("Quantité -".to_string());
            if has_options {
                actions.push("Options disponibles".to_string());
            }
        } else {
            ctx.output.info("Épuisé / Bientôt disponible");
        }
        actions.push("Retour".to_string());

        let choice = Select::new().items(&actions).default(0).interact()?;
        let action = actions[choice].as_str();

        if action.starts_with("Ajouter") {
            if session.add_selection_to_cart() {
                ctx.output.success("Ajouté au panier");
            }
            return Ok(());
        } else if action == "Quantité +" {
            session.increment_quantity();
        } else if action == "Quantité -" {
            session.decrement_quantity();
        } else if action == "Options disponibles" {
            choose_option(session, ctx)?;
        } else {
            session.go_to(View::Shop);
            return Ok(());
        }
    }
}

fn choose_option(session: &mut Session, ctx: &Context) -> Result<()> {
    let Some(product) = session.selection().product() else {
        return Ok(());
    };

    let labels: Vec<String> = product
        .options
        .iter()
        .map(|o| format!("{} — {}", o.label, o.price.label()))
        .collect();
    let chosen: Vec<String> = product.options.iter().map(|o| o.label.clone()).collect();

    let choice = Select::new()
        .with_prompt("Options disponibles")
        .items(&labels)
        .default(0)
        .interact()?;

    session.set_active_option(&chosen[choice])?;
    ctx.output.debug(&format!("Option active: {}", chosen[choice]));
    Ok(())
}

/// Cart side panel.
fn cart_panel(session: &mut Session, ctx: &Context) -> Result<()> {
    loop {
        ctx.output.header("Votre Panier");

        if session.cart().is_empty() {
            ctx.output.info("Votre panier est encore vide.");
            session.close_cart();
            return Ok(());
        }

        for item in session.cart().items() {
            let option = item
                .option_label
                .as_deref()
                .map(|l| format!(" (Format: {})", l))
                .unwrap_or_default();
            ctx.output.list_item(&format!(
                "{}{} x{} — {} (Total: {})",
                item.name,
                option,
                item.quantity,
                item.unit_price,
                item.line_total()
            ));
        }
        ctx.output.kv("Sous-total", &format!("{} CAD", session.cart_total()));

        let actions = [
            "Commander par Email",
            "Modifier une ligne",
            "Continuer vos achats",
        ];
        let choice = Select::new().items(&actions).default(0).interact()?;

        match choice {
            0 => {
                let draft = session.checkout()?;
                ctx.output.success("Commande prête. Ouvrez ce lien pour l'envoyer :");
                println!("{}", draft.mailto_url());
                ctx.output.info(
                    "Les commandes sont finalisées par e-mail. Paiement par virement Interac ou PayPal.",
                );
                session.close_cart();
                return Ok(());
            }
            1 => edit_line(session, ctx)?,
            _ => {
                session.close_cart();
                return Ok(());
            }
        }
    }
}

fn edit_line(session: &mut Session, ctx: &Context) -> Result<()> {
    let keys: Vec<_> = session.cart().items().iter().map(|i| i.key()).collect();
    let mut rows: Vec<String> = session
        .cart()
        .items()
        .iter()
        .map(|i| {
            format!(
                "{}{} x{}",
                i.name,
                i.option_label
                    .as_deref()
                    .map(|l| format!(" ({})", l))
                    .unwrap_or_default(),
                i.quantity
            )
        })
        .collect();
    rows.push("Retour".to_string());

    let choice = Select::new()
        .with_prompt("Quelle ligne ?")
        .items(&rows)
        .default(0)
        .interact()?;
    if choice == keys.len() {
        return Ok(());
    }
    let key = &keys[choice];

    let actions = ["+1", "-1", "Supprimer", "Retour"];
    let action = Select::new().items(&actions).default(0).interact()?;
    match action {
        0 => session.update_cart_quantity(key, 1),
        1 => session.update_cart_quantity(key, -1),
        2 => {
            if session.remove_from_cart(key) {
                ctx.output.success("Ligne supprimée");
            }
        }
        _ => {}
    }

    Ok(())
}

/// Glossary with letter filter.
fn glossary(session: &mut Session, ctx: &Context) -> Result<()> {
    session.go_to(View::Glossary);

    loop {
        ctx.output.header(session.view().title());

        let mut filters = vec!["Tous".to_string()];
        filters.extend(session.glossary_letters().iter().map(|l| l.to_string()));
        filters.push("Retour".to_string());

        let choice = Select::new()
            .with_prompt("Filtrer par lettre")
            .items(&filters)
            .default(0)
            .interact()?;

        if choice == filters.len() - 1 {
            return Ok(());
        }
        if choice == 0 {
            session.set_glossary_letter(None);
        } else {
            let letter = session.glossary_letters()[choice - 1];
            session.set_glossary_letter(Some(letter));
        }

        for item in session.visible_glossary() {
            ctx.output.list_item(&format!("{} — INCI: {}", item.name, item.inci));
            ctx.output.para(&item.description);
        }
    }
}

/// About page with the contact form.
fn about(session: &mut Session, ctx: &Context) -> Result<()> {
    session.go_to(View::About);
    ctx.output.header(session.view().title());

    if let Some(ref about) = ctx.config.store.about {
        ctx.output.para(about);
    }

    let write = Confirm::new()
        .with_prompt("Contactez-nous ?")
        .default(false)
        .interact()?;
    if !write {
        return Ok(());
    }

    let form = ContactForm {
        first_name: Input::new().with_prompt("Prénom").interact_text()?,
        last_name: Input::new().with_prompt("Nom").interact_text()?,
        email: Input::new().with_prompt("Email").interact_text()?,
        phone: Input::new()
            .with_prompt("Téléphone")
            .allow_empty(true)
            .interact_text()?,
        subject: Input::new().with_prompt("Sujet").interact_text()?,
        message: Input::new().with_prompt("Message").interact_text()?,
    };

    let draft = session.contact(&form);
    ctx.output.success("Message prêt. Ouvrez ce lien pour l'envoyer :");
    println!("{}", draft.mailto_url());

    Ok(())
}
