//! Effective price resolution tests for pricing-core.

mod common;

use common::{client, uv_catalog, with_override};
use pricing_core::{resolve_effective_price, ClientPriceOverride, ServiceType};
use rust_decimal_macros::dec;

#[test]
fn tier_default_applies_without_override() {
    let tiers = uv_catalog();
    let c = client(1, "Serigrafía Sur");

    let resolved = resolve_effective_price(&c, &tiers, ServiceType::Uv, dec!(150))
        .expect("Failed to resolve price");
    assert_eq!(resolved.price, dec!(6000));
    assert_eq!(resolved.tier.id, 2);
    assert!(!resolved.is_override);
}

#[test]
fn positive_override_on_resolved_tier_wins() {
    let tiers = uv_catalog();
    let c = with_override(client(1, "Serigrafía Sur"), &tiers[1], dec!(5500));

    let resolved = resolve_effective_price(&c, &tiers, ServiceType::Uv, dec!(150))
        .expect("Failed to resolve price");
    assert_eq!(resolved.price, dec!(5500));
    assert!(resolved.is_override);
}

#[test]
fn override_on_a_different_tier_is_ignored() {
    let tiers = uv_catalog();
    // Override bound to the low-volume tier; quoting 150 resolves the
    // high-volume tier, so the default applies.
    let c = with_override(client(1, "Serigrafía Sur"), &tiers[0], dec!(7000));

    let resolved = resolve_effective_price(&c, &tiers, ServiceType::Uv, dec!(150))
        .expect("Failed to resolve price");
    assert_eq!(resolved.price, dec!(6000));
    assert!(!resolved.is_override);
}

#[test]
fn non_positive_override_falls_back_to_default() {
    let tiers = uv_catalog();
    let c = with_override(client(1, "Serigrafía Sur"), &tiers[1], dec!(0));

    let resolved = resolve_effective_price(&c, &tiers, ServiceType::Uv, dec!(150))
        .expect("Failed to resolve price");
    assert_eq!(resolved.price, dec!(6000));
    assert!(!resolved.is_override);
}

#[test]
fn dangling_override_reference_falls_back_to_default() {
    let tiers = uv_catalog();
    let mut c = client(1, "Serigrafía Sur");
    // References a tier id that no longer exists in the supplied catalog.
    c.prices.push(ClientPriceOverride {
        id: Some(1),
        default_price_id: 999,
        service: ServiceType::Uv,
        min_quantity: dec!(100),
        max_quantity: None,
        price: dec!(5000),
    });

    let resolved = resolve_effective_price(&c, &tiers, ServiceType::Uv, dec!(150))
        .expect("Failed to resolve price");
    assert_eq!(resolved.price, dec!(6000));
    assert!(!resolved.is_override);
}

#[test]
fn tier_miss_propagates_as_none() {
    let tiers = uv_catalog();
    let c = with_override(client(1, "Serigrafía Sur"), &tiers[1], dec!(5500));

    assert!(resolve_effective_price(&c, &tiers, ServiceType::Dtf, dec!(150)).is_none());
}

#[test]
fn snapshots_are_not_mutated_by_resolution() {
    let tiers = uv_catalog();
    let c = with_override(client(1, "Serigrafía Sur"), &tiers[1], dec!(5500));
    let tiers_before = tiers.clone();
    let client_before = c.clone();

    resolve_effective_price(&c, &tiers, ServiceType::Uv, dec!(150))
        .expect("Failed to resolve price");

    assert_eq!(tiers, tiers_before);
    assert_eq!(c, client_before);
}
