//! Pricing error taxonomy.
//!
//! Every failure in the pricing core is an explicit result value; nothing
//! here is fatal to a process. The worst outcome is "quote unavailable".

use crate::models::ServiceType;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("no client selected")]
    NoClientSelected,

    #[error("no service selected")]
    NoServiceSelected,

    #[error("quantity {quantity} is below the minimum {minimum} {unit} for {service}")]
    QuantityBelowMinimum {
        service: ServiceType,
        quantity: Decimal,
        minimum: Decimal,
        unit: &'static str,
    },

    #[error("no price configured for {service} at quantity {quantity}")]
    NoPriceConfigured {
        service: ServiceType,
        quantity: Decimal,
    },

    #[error("manual unit price must be positive, got {price}")]
    InvalidManualPrice { price: Decimal },

    #[error("invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: Decimal },
}
