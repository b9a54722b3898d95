//! Compose an order mail without the interactive flow.

use anyhow::{bail, Context as _, Result};
use naturae_commerce::prelude::ProductId;

use super::OrderArgs;
use crate::context::Context;

/// Run the order command.
///
/// Drives the same session operations the interactive storefront uses:
/// select the product, activate the option, set the quantity, add to cart,
/// then hand the composed mailto URL back to the user.
pub fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.session();

    for spec in &args.items {
        let (id, option, quantity) = parse_spec(spec)?;

        session
            .view_product(&id)
            .with_context(|| format!("Invalid item \"{}\"", spec))?;
        if let Some(ref label) = option {
            session
                .set_active_option(label)
                .with_context(|| format!("Invalid item \"{}\"", spec))?;
        }
        session.set_quantity(quantity);

        if !session.add_selection_to_cart() {
            bail!(
                "\"{}\" cannot be ordered yet ({})",
                spec,
                session
                    .selection()
                    .product()
                    .map(|p| p.price.label())
                    .unwrap_or_default()
            );
        }
    }

    let draft = session.checkout()?;

    if args.url_only || ctx.output.is_json() {
        if ctx.output.is_json() {
            ctx.output.json(&draft);
        } else {
            println!("{}", draft.mailto_url());
        }
        return Ok(());
    }

    ctx.output.header("Votre commande");
    for item in session.cart().items() {
        let option = item
            .option_label
            .as_deref()
            .map(|l| format!(" ({})", l))
            .unwrap_or_default();
        ctx.output.list_item(&format!(
            "{}{} x{} — {}",
            item.name,
            option,
            item.quantity,
            item.line_total()
        ));
    }
    ctx.output.kv("Sous-total", &session.cart_total().to_string());

    ctx.output.success("Commande prête. Ouvrez ce lien pour l'envoyer :");
    println!("{}", draft.mailto_url());

    Ok(())
}

/// Parse an item spec of the form "id[:option-label[:quantity]]".
fn parse_spec(spec: &str) -> Result<(ProductId, Option<String>, u32)> {
    let mut parts = spec.splitn(3, ':');

    let id = match parts.next() {
        Some(id) if !id.is_empty() => ProductId::new(id),
        _ => bail!("Empty product id in \"{}\"", spec),
    };

    let option = parts.next().filter(|s| !s.is_empty()).map(str::to_string);

    let quantity = match parts.next() {
        Some(q) => q
            .parse::<u32>()
            .ok()
            .filter(|q| *q >= 1)
            .with_context(|| format!("Invalid quantity in \"{}\"", spec))?,
        None => 1,
    };

    Ok((id, option, quantity))
}
