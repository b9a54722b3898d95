//! Naturaē CLI - terminal storefront for the Naturaē shop.
//!
//! Commands:
//! - `naturae browse` - Browse the shop interactively
//! - `naturae catalog` - List the product catalog
//! - `naturae glossary` - Read the botanical glossary
//! - `naturae order` - Compose an order mail directly

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, GlossaryArgs, OrderArgs};

/// Naturaē CLI - browse the shop and compose orders from the terminal
#[derive(Parser)]
#[command(name = "naturae")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Store data file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the storefront interactively
    Browse,

    /// List the product catalog
    Catalog(CatalogArgs),

    /// Read the botanical glossary
    Glossary(GlossaryArgs),

    /// Compose an order mail without the interactive flow
    Order(OrderArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load store data
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Browse => commands::browse::run(&ctx),
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Glossary(args) => commands::glossary::run(args, &ctx),
        Commands::Order(args) => commands::order::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
