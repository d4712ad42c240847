//! Pricing resolution core for the finishing-shop catalog.
//!
//! Pure, synchronous functions over in-memory snapshots of the tier catalog
//! and client registry: tier resolution, client price overrides, order
//! arithmetic, and the quoting facade that order-entry flows consume.
//! Persistence and transport live with the callers.

pub mod error;
pub mod models;
pub mod pricing;

pub use error::PricingError;
pub use models::{
    Client, ClientPriceOverride, Order, OrderQuote, PriceTier, ServiceType, TAX_PCT,
};
pub use pricing::{
    calculate_order, find_tier, quote_order, resolve_effective_price, OrderTotals, ResolvedPrice,
};
