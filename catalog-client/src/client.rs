//! Catalog backend client.

use crate::api::{
    ApiClient, ApiOrder, ApiPriceTier, ApiPriceTierInput, DataEnvelope, PaginatedResponse,
};
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::inputs::{CreateClient, CreateOrder, UpdateClient, UpdateOrder};
use pricing_core::{Client, Order, PriceTier, ServiceType};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, instrument};
use validator::Validate;

/// Filter and pagination parameters for listing clients.
#[derive(Debug, Clone, Default)]
pub struct FetchClientsParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub active: Option<bool>,
}

/// Filter and pagination parameters for listing orders.
#[derive(Debug, Clone, Default)]
pub struct FetchOrdersParams {
    pub client_id: Option<i64>,
    pub service: Option<ServiceType>,
    pub is_paid: Option<bool>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// One page of clients.
#[derive(Debug, Clone)]
pub struct ClientPage {
    pub clients: Vec<Client>,
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
}

/// One page of orders.
#[derive(Debug, Clone)]
pub struct OrderPage {
    pub orders: Vec<Order>,
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
}

/// HTTP client for the catalog backend.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { http, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    /// Decode a success body, or map a non-2xx response to `ApiError` with
    /// the body preserved for diagnostics.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CatalogError> {
        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, "Catalog API response");
        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(CatalogError::ApiError {
                status: status.as_u16(),
                body,
            })
        }
    }

    // -------------------------------------------------------------------------
    // Default price tiers
    // -------------------------------------------------------------------------

    /// Fetch the full default tier catalog for all services.
    #[instrument(skip(self))]
    pub async fn fetch_default_prices(&self) -> Result<Vec<PriceTier>, CatalogError> {
        let response = self.http.get(self.url("/default-prices")).send().await?;
        let envelope: DataEnvelope<Vec<ApiPriceTier>> = Self::read_json(response).await?;
        Ok(envelope.data.into_iter().map(PriceTier::from).collect())
    }

    /// Create or replace a default tier (admin price-management flow).
    #[instrument(skip(self, input), fields(service = %input.service))]
    pub async fn upsert_default_price(
        &self,
        input: &ApiPriceTierInput,
    ) -> Result<PriceTier, CatalogError> {
        let response = self
            .http
            .post(self.url("/default-prices"))
            .json(input)
            .send()
            .await?;
        let envelope: DataEnvelope<ApiPriceTier> = Self::read_json(response).await?;
        info!(tier_id = envelope.data.id, "Default price tier saved");
        Ok(PriceTier::from(envelope.data))
    }

    // -------------------------------------------------------------------------
    // Clients
    // -------------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn fetch_clients(
        &self,
        params: &FetchClientsParams,
    ) -> Result<ClientPage, CatalogError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(page) = params.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = params.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(search) = &params.search {
            query.push(("search", search.clone()));
        }
        if let Some(active) = params.active {
            query.push(("active", active.to_string()));
        }

        let response = self
            .http
            .get(self.url("/clients"))
            .query(&query)
            .send()
            .await?;
        let page: PaginatedResponse<ApiClient> = Self::read_json(response).await?;
        Ok(ClientPage {
            clients: page.data.into_iter().map(Client::from).collect(),
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
        })
    }

    #[instrument(skip(self))]
    pub async fn fetch_client(&self, id: i64) -> Result<Client, CatalogError> {
        let response = self
            .http
            .get(self.url(&format!("/clients/{}", id)))
            .send()
            .await?;
        let envelope: DataEnvelope<ApiClient> = Self::read_json(response).await?;
        Ok(Client::from(envelope.data))
    }

    /// Create a client. The payload is normalized and validated before the
    /// request is sent; a name that is empty after trimming never reaches
    /// the backend.
    #[instrument(skip(self, input))]
    pub async fn create_client(&self, mut input: CreateClient) -> Result<Client, CatalogError> {
        input.normalize();
        input.validate()?;

        let response = self
            .http
            .post(self.url("/clients"))
            .json(&input)
            .send()
            .await?;
        let envelope: DataEnvelope<ApiClient> = Self::read_json(response).await?;
        info!(client_id = envelope.data.id, "Client created");
        Ok(Client::from(envelope.data))
    }

    #[instrument(skip(self, input))]
    pub async fn update_client(
        &self,
        id: i64,
        mut input: UpdateClient,
    ) -> Result<Client, CatalogError> {
        input.normalize();
        input.validate()?;

        let response = self
            .http
            .put(self.url(&format!("/clients/{}", id)))
            .json(&input)
            .send()
            .await?;
        let envelope: DataEnvelope<ApiClient> = Self::read_json(response).await?;
        info!(client_id = id, "Client updated");
        Ok(Client::from(envelope.data))
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn fetch_orders(
        &self,
        params: &FetchOrdersParams,
    ) -> Result<OrderPage, CatalogError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(client_id) = params.client_id {
            query.push(("client_id", client_id.to_string()));
        }
        if let Some(service) = params.service {
            query.push(("service", service.as_str().to_string()));
        }
        if let Some(is_paid) = params.is_paid {
            query.push(("is_paid", is_paid.to_string()));
        }
        if let Some(page) = params.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = params.limit {
            query.push(("limit", limit.to_string()));
        }

        let response = self
            .http
            .get(self.url("/orders"))
            .query(&query)
            .send()
            .await?;
        let page: PaginatedResponse<ApiOrder> = Self::read_json(response).await?;
        Ok(OrderPage {
            orders: page.data.into_iter().map(Order::from).collect(),
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
        })
    }

    /// Submit an order. The backend re-resolves pricing at creation time,
    /// which also covers the quote-then-submit race on a changed tier.
    #[instrument(skip(self, input), fields(client_id = input.client_id, service = %input.service))]
    pub async fn create_order(&self, input: CreateOrder) -> Result<Order, CatalogError> {
        input.validate()?;

        let response = self
            .http
            .post(self.url("/orders"))
            .json(&input)
            .send()
            .await?;
        let envelope: DataEnvelope<ApiOrder> = Self::read_json(response).await?;
        info!(
            order_id = envelope.data.id,
            total_amount = %envelope.data.total_amount,
            "Order created"
        );
        Ok(Order::from(envelope.data))
    }

    /// Update the mutable fields of an order (description, paid flag).
    #[instrument(skip(self, input))]
    pub async fn update_order(&self, id: i64, input: UpdateOrder) -> Result<Order, CatalogError> {
        let response = self
            .http
            .put(self.url(&format!("/orders/{}", id)))
            .json(&input)
            .send()
            .await?;
        let envelope: DataEnvelope<ApiOrder> = Self::read_json(response).await?;
        info!(order_id = id, "Order updated");
        Ok(Order::from(envelope.data))
    }

    /// URL of the backend-rendered cotización PDF for an order.
    pub fn quote_pdf_url(&self, order_id: i64) -> String {
        self.url(&format!("/orders/{}/cotizacion", order_id))
    }
}
