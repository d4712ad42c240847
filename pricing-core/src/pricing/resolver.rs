//! Tier and effective-price resolution.
//!
//! Resolves which default price tier applies to a service/quantity pair and
//! whether a client's preferential price replaces the tier default. Both
//! functions are pure over the snapshots they are handed and never fabricate
//! a price: a gap in the tier configuration resolves to `None`, not to zero.

use crate::models::{Client, PriceTier, ServiceType};
use rust_decimal::Decimal;
use tracing::debug;

/// Outcome of effective-price resolution: the price to charge, the tier it
/// was resolved against, and whether a client override supplied it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPrice<'a> {
    pub price: Decimal,
    pub tier: &'a PriceTier,
    pub is_override: bool,
}

/// Find the default tier covering `quantity` for `service`.
///
/// When configured ranges overlap, the tier with the smallest `min_quantity`
/// wins; `Iterator::min_by` keeps the first minimal element, so the result
/// is deterministic even for duplicate minimums. Returns `None` when no
/// configured tier covers the quantity.
pub fn find_tier(
    tiers: &[PriceTier],
    service: ServiceType,
    quantity: Decimal,
) -> Option<&PriceTier> {
    tiers
        .iter()
        .filter(|t| t.service == service && t.matches(quantity))
        .min_by(|a, b| a.min_quantity.cmp(&b.min_quantity))
}

/// Resolve the price a client would actually be charged for
/// `service`/`quantity`: the matching tier's default, unless the client
/// carries a positive-price override bound to that tier's id.
///
/// An override referencing a tier id absent from `tiers` can never be the
/// resolved tier, so dangling references fall back to default pricing
/// without special handling.
pub fn resolve_effective_price<'a>(
    client: &Client,
    tiers: &'a [PriceTier],
    service: ServiceType,
    quantity: Decimal,
) -> Option<ResolvedPrice<'a>> {
    let tier = find_tier(tiers, service, quantity)?;

    let resolved = match client.override_for_tier(tier.id) {
        Some(preferential) => ResolvedPrice {
            price: preferential.price,
            tier,
            is_override: true,
        },
        None => ResolvedPrice {
            price: tier.price,
            tier,
            is_override: false,
        },
    };

    debug!(
        client_id = client.id,
        service = %service,
        %quantity,
        tier_id = tier.id,
        price = %resolved.price,
        is_override = resolved.is_override,
        "Resolved effective price"
    );

    Some(resolved)
}
