//! Order arithmetic.

use crate::error::PricingError;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Derived monetary breakdown of an order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub tax_pct: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
}

/// Round to whole currency units, half-up.
fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute subtotal, tax and total for a unit price and quantity.
///
/// `subtotal = round(unit_price × quantity)` and
/// `tax_amount = round(subtotal × tax_pct / 100)`, both half-up to whole
/// currency units. `total_amount` is their exact sum and is never rounded
/// independently. Quantity minimums are the caller's concern; non-positive
/// unit price or quantity and negative tax are refused outright rather than
/// turned into nonsensical totals.
pub fn calculate_order(
    unit_price: Decimal,
    quantity: Decimal,
    tax_pct: Decimal,
) -> Result<OrderTotals, PricingError> {
    if unit_price <= Decimal::ZERO {
        return Err(PricingError::InvalidInput {
            field: "unit_price",
            value: unit_price,
        });
    }
    if quantity <= Decimal::ZERO {
        return Err(PricingError::InvalidInput {
            field: "quantity",
            value: quantity,
        });
    }
    if tax_pct < Decimal::ZERO {
        return Err(PricingError::InvalidInput {
            field: "tax_pct",
            value: tax_pct,
        });
    }

    let subtotal = round_currency(unit_price * quantity);
    let tax_amount = round_currency(subtotal * tax_pct / dec!(100));

    Ok(OrderTotals {
        subtotal,
        tax_pct,
        tax_amount,
        total_amount: subtotal + tax_amount,
    })
}
