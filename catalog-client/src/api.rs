//! Wire types for the catalog backend and their domain mappers.
//!
//! The backend speaks `min_meters`/`max_meters` regardless of the service's
//! pricing unit; the domain model calls these `min_quantity`/`max_quantity`.
//! Unknown service names are rejected at decode time instead of being cast
//! through, so a renamed service can never resolve against the wrong tiers.

use chrono::{DateTime, Utc};
use pricing_core::{Client, ClientPriceOverride, Order, PriceTier, ServiceType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Paginated list envelope used by every collection endpoint.
#[derive(Debug, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

/// Single-object envelope.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiPriceTier {
    pub id: i64,
    pub service: ServiceType,
    pub min_meters: Decimal,
    pub max_meters: Option<Decimal>,
    pub price: Decimal,
}

impl From<ApiPriceTier> for PriceTier {
    fn from(api: ApiPriceTier) -> Self {
        PriceTier {
            id: api.id,
            service: api.service,
            min_quantity: api.min_meters,
            max_quantity: api.max_meters,
            price: api.price,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiClientPrice {
    pub id: i64,
    pub default_price_id: i64,
    pub service: ServiceType,
    pub min_meters: Decimal,
    pub max_meters: Option<Decimal>,
    pub price: Decimal,
}

impl From<ApiClientPrice> for ClientPriceOverride {
    fn from(api: ApiClientPrice) -> Self {
        ClientPriceOverride {
            id: Some(api.id),
            default_price_id: api.default_price_id,
            service: api.service,
            min_quantity: api.min_meters,
            max_quantity: api.max_meters,
            price: api.price,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiClient {
    pub id: i64,
    pub name: String,
    pub rut: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub billing_addr: Option<String>,
    pub is_active: bool,
    /// Backend sends `null` for clients without preferential prices.
    #[serde(default)]
    pub prices: Option<Vec<ApiClientPrice>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ApiClient> for Client {
    fn from(api: ApiClient) -> Self {
        Client {
            id: api.id,
            name: api.name,
            rut: api.rut,
            email: api.email,
            phone: api.phone,
            billing_addr: api.billing_addr,
            is_active: api.is_active,
            prices: api
                .prices
                .unwrap_or_default()
                .into_iter()
                .map(ClientPriceOverride::from)
                .collect(),
            created_at: api.created_at,
            updated_at: api.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiOrder {
    pub id: i64,
    pub client_id: i64,
    pub service: ServiceType,
    pub description: Option<String>,
    pub meters: Decimal,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
    pub tax_pct: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    pub is_paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<ApiOrder> for Order {
    fn from(api: ApiOrder) -> Self {
        Order {
            id: api.id,
            client_id: api.client_id,
            service: api.service,
            description: api.description,
            quantity: api.meters,
            unit_price: api.unit_price,
            subtotal: api.subtotal,
            tax_pct: api.tax_pct,
            tax_amount: api.tax_amount,
            total_amount: api.total_amount,
            is_paid: api.is_paid,
            paid_at: api.paid_at,
            created_at: api.created_at,
        }
    }
}

/// Body for creating or replacing a default price tier.
#[derive(Debug, Clone, Serialize)]
pub struct ApiPriceTierInput {
    pub service: ServiceType,
    pub min_meters: Decimal,
    pub max_meters: Option<Decimal>,
    pub price: Decimal,
}
