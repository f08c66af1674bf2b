//! Adventure Works CLI - operator tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the session table
//! aw-cli migrate
//!
//! # List the catalog, optionally one product line
//! aw-cli catalog list --type Touring
//!
//! # Render an invoice to PDF and JSON without sending it
//! aw-cli invoice sample > invoice.json
//! aw-cli invoice render --input invoice.json --out-dir ./out
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "aw-cli")]
#[command(author, version, about = "Adventure Works CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the storefront session table
    Migrate,
    /// Inspect the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Render invoices offline
    Invoice {
        #[command(subcommand)]
        action: InvoiceAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products with their prices
    List {
        /// Only this product line (Road, Mountain, Touring, E-Bike, Accessories)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
}

#[derive(Subcommand)]
enum InvoiceAction {
    /// Write `factura-<order>.pdf` and `.json` for an invoice file
    Render {
        /// Invoice as JSON (see `aw-cli invoice sample`)
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for the rendered documents
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print an example invoice file
    Sample {
        /// Print an in-store sale instead of an online order
        #[arg(long)]
        in_store: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::sessions().await?,
        Commands::Catalog { action } => match action {
            CatalogAction::List { kind } => commands::catalog::list(kind.as_deref())?,
        },
        Commands::Invoice { action } => match action {
            InvoiceAction::Render { input, out_dir } => {
                commands::invoice::render(&input, &out_dir)?;
            }
            InvoiceAction::Sample { in_store } => commands::invoice::sample(in_store)?,
        },
    }
    Ok(())
}
