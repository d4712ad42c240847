//! Order and order quote models for pricing-core.

use crate::models::{PriceTier, ServiceType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of pricing resolution for a prospective order, before persistence.
///
/// `unit_price` is the price the order will actually be charged at;
/// `resolved_unit_price` is what tier/override resolution produced, reported
/// even when a manual price took precedence so order-entry UIs can show both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderQuote {
    pub unit_price: Decimal,
    pub resolved_unit_price: Decimal,
    pub tier: PriceTier,
    pub is_override: bool,
    pub is_manual_override: bool,
    pub subtotal: Decimal,
    pub tax_pct: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
}

/// A service order. Monetary fields are fixed at creation; only payment
/// status and the free-text description may change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub client_id: i64,
    pub service: ServiceType,
    pub description: Option<String>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
    pub tax_pct: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    pub is_paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Build the persistable record from a quote. Identity and creation
    /// timestamp are assigned by the persistence layer and passed in;
    /// orders start unpaid.
    pub fn from_quote(
        id: i64,
        client_id: i64,
        service: ServiceType,
        quantity: Decimal,
        quote: &OrderQuote,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            client_id,
            service,
            description: None,
            quantity,
            unit_price: quote.unit_price,
            subtotal: quote.subtotal,
            tax_pct: quote.tax_pct,
            tax_amount: quote.tax_amount,
            total_amount: quote.total_amount,
            is_paid: false,
            paid_at: None,
            created_at,
        }
    }

    /// Record payment at the given time.
    pub fn mark_paid(&mut self, at: DateTime<Utc>) {
        self.is_paid = true;
        self.paid_at = Some(at);
    }

    /// Revert to unpaid, clearing the payment timestamp.
    pub fn mark_unpaid(&mut self) {
        self.is_paid = false;
        self.paid_at = None;
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Re-check the derived-field identity:
    /// `subtotal = round(quantity × unit_price)`,
    /// `tax_amount = round(subtotal × tax_pct / 100)`,
    /// `total_amount = subtotal + tax_amount`.
    pub fn totals_consistent(&self) -> bool {
        match crate::pricing::calculate_order(self.unit_price, self.quantity, self.tax_pct) {
            Ok(totals) => {
                totals.subtotal == self.subtotal
                    && totals.tax_amount == self.tax_amount
                    && totals.total_amount == self.total_amount
            }
            Err(_) => false,
        }
    }
}
