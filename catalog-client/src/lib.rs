//! REST client for the finishing-shop catalog backend.
//!
//! Fetches the snapshots the pricing core resolves against (default price
//! tiers, clients with their preferential prices) and submits orders. The
//! backend owns persistence, identity assignment and document rendering;
//! this crate owns the wire mapping and pre-flight input validation.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod inputs;
pub mod observability;

pub use client::{CatalogClient, ClientPage, FetchClientsParams, FetchOrdersParams, OrderPage};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use inputs::{
    ClientPriceInput, CreateClient, CreateOrder, UpdateClient, UpdateOrder,
};
