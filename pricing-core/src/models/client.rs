//! Client and client price override models for pricing-core.

use crate::models::ServiceType;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A client's preferential price bound to one specific default tier.
///
/// The range fields are a denormalized snapshot of the referenced tier,
/// carried for display; resolution keys only on `default_price_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientPriceOverride {
    pub id: Option<i64>,
    pub default_price_id: i64,
    pub service: ServiceType,
    pub min_quantity: Decimal,
    pub max_quantity: Option<Decimal>,
    pub price: Decimal,
}

/// A billing party.
///
/// Clients are never hard-deleted; historical orders reference them, so
/// removal is modeled as `is_active = false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub rut: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub billing_addr: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub prices: Vec<ClientPriceOverride>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Client {
    /// Look up this client's override for a specific tier id.
    ///
    /// Overrides with a non-positive price are treated as absent: a zero or
    /// negative charge must never be resolved from a misconfigured row. A
    /// dangling `default_price_id` simply never matches a live tier.
    pub fn override_for_tier(&self, tier_id: i64) -> Option<&ClientPriceOverride> {
        self.prices
            .iter()
            .find(|p| p.default_price_id == tier_id && p.price > Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn client_with_overrides(prices: Vec<ClientPriceOverride>) -> Client {
        Client {
            id: 7,
            name: "Textil Andina".to_string(),
            rut: Some("76.123.456-0".to_string()),
            email: None,
            phone: None,
            billing_addr: None,
            is_active: true,
            prices,
            created_at: None,
            updated_at: None,
        }
    }

    fn override_on(tier_id: i64, price: Decimal) -> ClientPriceOverride {
        ClientPriceOverride {
            id: Some(1),
            default_price_id: tier_id,
            service: ServiceType::Uv,
            min_quantity: dec!(100),
            max_quantity: None,
            price,
        }
    }

    #[test]
    fn override_lookup_matches_tier_id() {
        let client = client_with_overrides(vec![override_on(42, dec!(5500))]);
        assert_eq!(
            client.override_for_tier(42).map(|p| p.price),
            Some(dec!(5500))
        );
        assert!(client.override_for_tier(43).is_none());
    }

    #[test]
    fn non_positive_override_is_treated_as_absent() {
        let client = client_with_overrides(vec![
            override_on(42, dec!(0)),
            override_on(43, dec!(-100)),
        ]);
        assert!(client.override_for_tier(42).is_none());
        assert!(client.override_for_tier(43).is_none());
    }

    #[test]
    fn client_without_overrides_resolves_nothing() {
        let client = client_with_overrides(vec![]);
        assert!(client.override_for_tier(1).is_none());
    }
}
