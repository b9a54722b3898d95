//! List the product catalog.

use anyhow::{bail, Result};
use naturae_commerce::prelude::{Product, ProductId};

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session();

    if let Some(id) = args.id {
        let id = ProductId::new(id);
        let Some(product) = session.catalog().find(&id) else {
            bail!("Product not found: {}", id);
        };

        if ctx.output.is_json() {
            ctx.output.json(product);
            return Ok(());
        }

        print_detail(product, ctx);
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(&session.catalog().products());
        return Ok(());
    }

    ctx.output.header("La Boutique");
    for product in session.catalog().products() {
        let options = if product.has_options() {
            let labels: Vec<&str> = product.options.iter().map(|o| o.label.as_str()).collect();
            format!(" [{}]", labels.join(", "))
        } else {
            String::new()
        };
        ctx.output.list_item(&format!(
            "{}  {} — {}{}",
            product.id,
            product.name,
            product.price.label(),
            options
        ));
    }

    Ok(())
}

fn print_detail(product: &Product, ctx: &Context) {
    ctx.output.header(&product.name);
    ctx.output.kv("Catégorie", &product.category);
    ctx.output.kv("Prix", &product.price.label());
    ctx.output.para(&product.description);

    if !product.ingredients.is_empty() {
        ctx.output.kv("Ingrédients clés", &product.ingredients.join(", "));
    }

    for option in &product.options {
        ctx.output
            .list_item(&format!("{} — {}", option.label, option.price.label()));
    }

    if let Some(ref inci) = product.inci {
        ctx.output.kv("INCI", inci);
    }
}
