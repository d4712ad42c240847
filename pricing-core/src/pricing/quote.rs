//! Quoting facade for order-entry flows.

use crate::error::PricingError;
use crate::models::{Client, OrderQuote, PriceTier, ServiceType, TAX_PCT};
use crate::pricing::{calculate_order, resolve_effective_price};
use rust_decimal::Decimal;
use tracing::debug;

/// Resolve the effective price and compute the full breakdown for a
/// prospective order.
///
/// `client` and `service` arrive as options because order-entry forms build
/// up their selections stepwise; each missing step surfaces its own error so
/// the form can point at the field that blocks submission. A supplied
/// positive `manual_unit_price` takes precedence over tier/override
/// resolution entirely, but the auto-resolved price is still reported on the
/// quote. Read-only over every snapshot passed in.
pub fn quote_order(
    client: Option<&Client>,
    tiers: &[PriceTier],
    service: Option<ServiceType>,
    quantity: Decimal,
    manual_unit_price: Option<Decimal>,
) -> Result<OrderQuote, PricingError> {
    let client = client.ok_or(PricingError::NoClientSelected)?;
    let service = service.ok_or(PricingError::NoServiceSelected)?;

    let minimum = service.minimum_quantity();
    if quantity < minimum {
        return Err(PricingError::QuantityBelowMinimum {
            service,
            quantity,
            minimum,
            unit: service.unit_label(),
        });
    }

    if let Some(price) = manual_unit_price {
        if price <= Decimal::ZERO {
            return Err(PricingError::InvalidManualPrice { price });
        }
    }

    let resolved = resolve_effective_price(client, tiers, service, quantity).ok_or(
        PricingError::NoPriceConfigured { service, quantity },
    )?;

    let unit_price = manual_unit_price.unwrap_or(resolved.price);
    let totals = calculate_order(unit_price, quantity, TAX_PCT)?;

    debug!(
        client_id = client.id,
        service = %service,
        %quantity,
        %unit_price,
        is_manual_override = manual_unit_price.is_some(),
        total_amount = %totals.total_amount,
        "Order quoted"
    );

    Ok(OrderQuote {
        unit_price,
        resolved_unit_price: resolved.price,
        tier: resolved.tier.clone(),
        is_override: resolved.is_override,
        is_manual_override: manual_unit_price.is_some(),
        subtotal: totals.subtotal,
        tax_pct: totals.tax_pct,
        tax_amount: totals.tax_amount,
        total_amount: totals.total_amount,
    })
}
