use crate::domain::model::Product;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote source of the product catalog. The core consumes an
/// already-resolved result; it never retries or caches on its own.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_endpoint(&self) -> &str;
    fn search_term(&self) -> Option<&str>;
}
