//! Pricing resolution services for pricing-core.

mod calculator;
mod quote;
mod resolver;

pub use calculator::{calculate_order, OrderTotals};
pub use quote::quote_order;
pub use resolver::{find_tier, resolve_effective_price, ResolvedPrice};
