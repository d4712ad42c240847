//! Domain models for pricing-core.

mod client;
mod order;
mod price_tier;
mod service_type;

pub use client::{Client, ClientPriceOverride};
pub use order::{Order, OrderQuote};
pub use price_tier::PriceTier;
pub use service_type::{ServiceType, TAX_PCT};
