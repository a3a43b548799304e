use async_trait::async_trait;

use super::errors::CatalogError;
use super::model::Product;

/// Port for the external product feed. The adapter owns transport and
/// wire-shape normalization; callers only ever see normalized products.
#[async_trait]
pub trait ProductCatalogSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError>;
}
