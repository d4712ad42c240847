//! quote-preview: fetch live snapshots and price a prospective order.
//!
//! Reads the quoting parameters from the environment, in line with the
//! deployment's env-driven configuration:
//!   QUOTE_CLIENT_ID   client to quote for (required)
//!   QUOTE_SERVICE     service name, e.g. UV or TEXTURIZADO (required)
//!   QUOTE_QUANTITY    meters or panels (required)
//!   QUOTE_UNIT_PRICE  optional manual unit price override
//!
//! Prints the resulting quote (or the blocking pricing error) as JSON.

use anyhow::{Context, Result};
use catalog_client::{observability, CatalogClient, CatalogConfig};
use pricing_core::{quote_order, ServiceType};
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use tracing::info;

fn env_decimal(name: &str) -> Result<Option<Decimal>> {
    match env::var(name) {
        Ok(raw) => {
            let value = Decimal::from_str(raw.trim())
                .with_context(|| format!("{} is not a valid number: {}", name, raw))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = CatalogConfig::load().context("Failed to load configuration")?;
    observability::init_tracing("info");

    let client_id: i64 = env::var("QUOTE_CLIENT_ID")
        .context("QUOTE_CLIENT_ID must be set")?
        .trim()
        .parse()
        .context("QUOTE_CLIENT_ID must be a numeric id")?;
    let service = env::var("QUOTE_SERVICE")
        .ok()
        .as_deref()
        .and_then(ServiceType::from_string);
    let quantity = env_decimal("QUOTE_QUANTITY")?
        .context("QUOTE_QUANTITY must be set")?;
    let manual_unit_price = env_decimal("QUOTE_UNIT_PRICE")?;

    let catalog = CatalogClient::new(config)?;

    let tiers = catalog.fetch_default_prices().await?;
    let client = catalog.fetch_client(client_id).await?;
    info!(
        client_id = client.id,
        client_name = %client.name,
        tier_count = tiers.len(),
        "Snapshots loaded"
    );

    match quote_order(Some(&client), &tiers, service, quantity, manual_unit_price) {
        Ok(quote) => {
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
        Err(err) => {
            println!(
                "{}",
                serde_json::json!({ "error": err.to_string() })
            );
        }
    }

    Ok(())
}
