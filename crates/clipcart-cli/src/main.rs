//! Command-line presentation surface for the coupon clipper core.
//!
//! Stands in for the UI layer: it collects the two core inputs (raw
//! item text, retailer selection), calls into `clipcart-core`, and
//! prints what the core returns. It never loads the destination page
//! itself; an embedded browser surface is expected to consume the URL
//! and script this prints.

use clap::{Parser, Subcommand, ValueEnum};
use clipcart_core::{build_request, load_config_from_env, parse_items, CouponRequest, Retailer};

#[derive(Debug, Parser)]
#[command(name = "clipcart")]
#[command(about = "Builds retailer coupon-page URLs and search scripts from a grocery list")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a comma-separated grocery list and print the surviving items
    Items {
        /// Raw grocery list, e.g. "milk, eggs, bread"
        raw: String,
    },
    /// Build the coupon-page URL and search script for a retailer
    Request {
        /// Retailer whose coupon page to target
        #[arg(long, value_enum)]
        retailer: Option<RetailerArg>,

        /// Print the request as JSON instead of plain text
        #[arg(long)]
        json: bool,

        /// Raw grocery list, e.g. "milk, eggs, bread"
        raw: String,
    },
}

/// Clap-facing mirror of [`Retailer`], kept separate so the core type
/// carries no CLI derive.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum RetailerArg {
    Jewel,
    Marianos,
}

impl From<RetailerArg> for Retailer {
    fn from(arg: RetailerArg) -> Self {
        match arg {
            RetailerArg::Jewel => Retailer::Jewel,
            RetailerArg::Marianos => Retailer::Marianos,
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Items { raw } => {
            for item in parse_items(&raw) {
                println!("{item}");
            }
        }
        Commands::Request {
            retailer,
            json,
            raw,
        } => {
            let config = load_config_from_env()?;
            let items = parse_items(&raw);
            let request = build_request(
                retailer.map(Retailer::from),
                &items,
                config.search_delay_ms,
            );
            render_request(&request, json)?;
        }
    }

    Ok(())
}

/// Print a request, honoring the empty-URL guard: an empty URL means no
/// browser surface should be opened, so nothing is printed for it.
fn render_request(request: &CouponRequest, json: bool) -> anyhow::Result<()> {
    if !request.opens_browser() {
        tracing::warn!("empty coupon request; no browser surface would be opened");
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(request)?);
    } else {
        println!("{}", request.url);
        if !request.script.is_empty() {
            println!("{}", request.script);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
