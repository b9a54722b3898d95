//! CLI command implementations.

pub mod browse;
pub mod catalog;
pub mod glossary;
pub mod order;

use clap::Args;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Show a single product by id.
    pub id: Option<String>,
}

/// Arguments for the glossary command.
#[derive(Args)]
pub struct GlossaryArgs {
    /// Filter entries by first letter.
    #[arg(short, long)]
    pub letter: Option<char>,

    /// List the selectable letters and exit.
    #[arg(long)]
    pub letters: bool,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Items to order, as "product-id[:option-label[:quantity]]"
    /// (e.g. "1:30g:2" or "4").
    #[arg(required = true)]
    pub items: Vec<String>,

    /// Print only the mailto URL.
    #[arg(long)]
    pub url_only: bool,
}
