//! Shared fixtures for pricing-core tests.

#![allow(dead_code)]

use pricing_core::{Client, ClientPriceOverride, PriceTier, ServiceType};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// UV catalog from the shop's standing configuration:
/// [0–99 → 8000], [100–∞ → 6000].
pub fn uv_catalog() -> Vec<PriceTier> {
    vec![
        PriceTier {
            id: 1,
            service: ServiceType::Uv,
            min_quantity: dec!(0),
            max_quantity: Some(dec!(99)),
            price: dec!(8000),
        },
        PriceTier {
            id: 2,
            service: ServiceType::Uv,
            min_quantity: dec!(100),
            max_quantity: None,
            price: dec!(6000),
        },
    ]
}

/// DTF catalog with the per-meter minimum as its lower bound.
pub fn dtf_catalog() -> Vec<PriceTier> {
    vec![PriceTier {
        id: 3,
        service: ServiceType::Dtf,
        min_quantity: dec!(0.1),
        max_quantity: None,
        price: dec!(9000),
    }]
}

pub fn client(id: i64, name: &str) -> Client {
    Client {
        id,
        name: name.to_string(),
        rut: None,
        email: None,
        phone: None,
        billing_addr: None,
        is_active: true,
        prices: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

pub fn with_override(mut client: Client, tier: &PriceTier, price: Decimal) -> Client {
    client.prices.push(ClientPriceOverride {
        id: Some(client.prices.len() as i64 + 1),
        default_price_id: tier.id,
        service: tier.service,
        min_quantity: tier.min_quantity,
        max_quantity: tier.max_quantity,
        price,
    });
    client
}
