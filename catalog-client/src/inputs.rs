//! Validated request payloads for the catalog backend.
//!
//! Validation runs before any request is sent, so a payload that would be
//! rejected server-side never leaves the process.

use pricing_core::ServiceType;
use rust_decimal::Decimal;
use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// A preferential price bound to a default tier, as sent on client
/// create/update.
#[derive(Debug, Clone, Serialize)]
pub struct ClientPriceInput {
    pub default_price_id: i64,
    pub price: Decimal,
}

/// Payload for creating a client.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateClient {
    #[validate(length(min = 1, message = "Client name is required"))]
    pub name: String,
    pub rut: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub billing_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<ClientPriceInput>>,
}

/// Payload for updating a client. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateClient {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Client name is required"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rut: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<ClientPriceInput>>,
}

/// Payload for creating an order. When `unit_price` is absent the backend
/// resolves the effective price itself; when present it is the operator's
/// manual override.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrder {
    pub client_id: i64,
    pub service: ServiceType,
    pub meters: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for updating an order. Only payment status and the description
/// are mutable post-creation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<bool>,
}

impl CreateClient {
    /// Trim whitespace-only noise so the length check sees the real name.
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
    }
}

impl UpdateClient {
    pub fn normalize(&mut self) {
        if let Some(name) = &self.name {
            self.name = Some(name.trim().to_string());
        }
    }
}

impl CreateOrder {
    /// Check the order against the service's quantity minimum and, when a
    /// manual unit price is given, that it is positive.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let minimum = self.service.minimum_quantity();
        if self.meters < minimum {
            let mut err = ValidationError::new("range");
            err.message = Some(
                format!(
                    "Quantity must be at least {} {}",
                    minimum,
                    self.service.unit_label()
                )
                .into(),
            );
            errors.add("meters", err);
        }

        if let Some(price) = self.unit_price {
            if price <= Decimal::ZERO {
                let mut err = ValidationError::new("range");
                err.message = Some("Unit price must be positive".into());
                errors.add("unit_price", err);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_client(name: &str) -> CreateClient {
        CreateClient {
            name: name.to_string(),
            rut: None,
            email: None,
            phone: None,
            billing_addr: None,
            prices: None,
        }
    }

    #[test]
    fn blank_name_fails_after_normalization() {
        let mut input = create_client("   ");
        input.normalize();
        assert!(input.validate().is_err());
    }

    #[test]
    fn trimmed_name_passes() {
        let mut input = create_client("  Textil Andina  ");
        input.normalize();
        assert!(input.validate().is_ok());
        assert_eq!(input.name, "Textil Andina");
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut input = create_client("Textil Andina");
        input.email = Some("not-an-email".to_string());
        assert!(input.validate().is_err());
    }

    #[test]
    fn order_below_minimum_is_rejected() {
        let order = CreateOrder {
            client_id: 7,
            service: ServiceType::Dtf,
            meters: dec!(0.05),
            unit_price: None,
            description: None,
        };
        assert!(order.validate().is_err());
    }

    #[test]
    fn order_with_non_positive_manual_price_is_rejected() {
        let order = CreateOrder {
            client_id: 7,
            service: ServiceType::Uv,
            meters: dec!(10),
            unit_price: Some(dec!(0)),
            description: None,
        };
        assert!(order.validate().is_err());
    }

    #[test]
    fn valid_order_passes() {
        let order = CreateOrder {
            client_id: 7,
            service: ServiceType::Texturizado,
            meters: dec!(2),
            unit_price: Some(dec!(12000)),
            description: Some("Dos paños".to_string()),
        };
        assert!(order.validate().is_ok());
    }
}
