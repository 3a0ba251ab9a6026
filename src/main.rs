use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{error, info, warn, Instrument};

use cart_store::{setup_tracing, CartConfig, CartLineItem, CartSummary, CartSystem};

/// Inspect and edit a persisted storefront cart
#[derive(Debug, Parser)]
#[command(name = "cart", about = "Storefront cart store", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: CartConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add an item, merging with an existing line of the same id and color
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: Decimal,
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
        #[arg(long)]
        color: Option<String>,
    },
    /// Remove the line with the given id and color
    Remove {
        #[arg(long)]
        id: String,
        #[arg(long)]
        color: Option<String>,
    },
    /// Set the quantity of an existing line
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        quantity: u32,
        #[arg(long)]
        color: Option<String>,
    },
    /// Empty the cart
    Clear,
    /// Print the cart
    Show,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_tracing(&cli.config.log_level);

    if cli.config.storage_dir.is_none() {
        warn!("No storage directory configured; the cart will not outlive this process");
    }

    let system = CartSystem::from_config(&cli.config)?;
    let cart = system.cart_client.clone();

    let command = cli.command;
    let span = tracing::info_span!("cart_command");
    let outcome = async {
        match command {
            Command::Add {
                id,
                name,
                price,
                image,
                quantity,
                color,
            } => {
                let mut item = CartLineItem::new(id, name, price, image, quantity);
                if let Some(color) = color {
                    item = item.with_color(color);
                }
                cart.add_to_cart(item).await
            }
            Command::Remove { id, color } => cart.remove_from_cart(id, color).await,
            Command::Update {
                id,
                quantity,
                color,
            } => cart.update_quantity(id, quantity, color).await,
            Command::Clear => cart.clear_cart().await,
            Command::Show => Ok(()),
        }
    }
    .instrument(span)
    .await;

    if let Err(e) = &outcome {
        error!(error = %e, "Cart command failed");
    }

    let summary = cart.summary().await?;
    print_summary(&summary);
    info!(total_items = summary.total_items, "Cart command completed");

    system.shutdown().await?;
    outcome.map_err(Into::into)
}

fn print_summary(summary: &CartSummary) {
    if summary.items.is_empty() {
        println!("Cart is empty");
        return;
    }

    for item in &summary.items {
        let variant = item.color.as_deref().unwrap_or("-");
        println!(
            "{:<12} {:<8} {:<24} {:>4} x {:>10} = {:>10}",
            item.id,
            variant,
            item.name,
            item.quantity,
            item.price,
            item.line_total()
        );
    }
    println!("Items: {}  Subtotal: {}", summary.total_items, summary.subtotal);
}
