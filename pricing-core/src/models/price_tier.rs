//! Default price tier model for pricing-core.

use crate::models::ServiceType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default price for one service over an inclusive quantity range.
///
/// `max_quantity` of `None` means the tier is unbounded above. Tiers are
/// owned by the shop-wide default price catalog and are read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub id: i64,
    pub service: ServiceType,
    pub min_quantity: Decimal,
    pub max_quantity: Option<Decimal>,
    pub price: Decimal,
}

impl PriceTier {
    /// True when `quantity` falls inside this tier's inclusive range.
    pub fn matches(&self, quantity: Decimal) -> bool {
        quantity >= self.min_quantity
            && self.max_quantity.map_or(true, |max| quantity <= max)
    }
}
