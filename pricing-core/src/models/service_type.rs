//! Service type model for pricing-core.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Default tax percentage (Chilean IVA) applied to order subtotals.
pub const TAX_PCT: Decimal = dec!(19);

/// Kind of finishing service offered by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    Dtf,
    Sublimacion,
    Uv,
    Texturizado,
}

impl ServiceType {
    /// All service types, in catalog display order.
    pub const ALL: [ServiceType; 4] = [
        ServiceType::Dtf,
        ServiceType::Sublimacion,
        ServiceType::Uv,
        ServiceType::Texturizado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Dtf => "DTF",
            ServiceType::Sublimacion => "SUBLIMACION",
            ServiceType::Uv => "UV",
            ServiceType::Texturizado => "TEXTURIZADO",
        }
    }

    /// Parse a catalog service name. Unknown names are rejected rather than
    /// defaulted: resolving against a guessed service would price the wrong
    /// tier table.
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "DTF" => Some(ServiceType::Dtf),
            "SUBLIMACION" => Some(ServiceType::Sublimacion),
            "UV" => Some(ServiceType::Uv),
            "TEXTURIZADO" => Some(ServiceType::Texturizado),
            _ => None,
        }
    }

    /// True when the service is priced per discrete cloth/panel rather than
    /// per linear meter.
    pub fn is_per_discrete_unit(&self) -> bool {
        matches!(self, ServiceType::Texturizado)
    }

    /// Smallest quantity an order may be placed for: one panel for
    /// discrete-unit services, one decimal meter otherwise.
    pub fn minimum_quantity(&self) -> Decimal {
        if self.is_per_discrete_unit() {
            dec!(1)
        } else {
            dec!(0.1)
        }
    }

    /// Unit label for display ("m" or "paño").
    pub fn unit_label(&self) -> &'static str {
        if self.is_per_discrete_unit() {
            "paño"
        } else {
            "m"
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
