use crate::core::CatalogProvider;
use crate::domain::model::Product;
use crate::utils::error::{Result, StoreError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ProductsPayload {
    products: Vec<Product>,
}

/// Catalog backed by a JSON endpoint shaped `{ "products": [...] }`.
///
/// Failures are returned as-is: no retry, no cached result, no fallback
/// data. The caller decides what to show the user.
pub struct HttpCatalog {
    endpoint: String,
    client: Client,
}

impl HttpCatalog {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        tracing::debug!("Requesting catalog from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("Catalog response status: {}", response.status());
        if !response.status().is_success() {
            return Err(StoreError::CatalogError {
                message: format!("server answered with status {}", response.status()),
            });
        }

        let payload: ProductsPayload = response.json().await?;
        tracing::debug!("Fetched {} products", payload.products.len());
        Ok(payload.products)
    }
}
