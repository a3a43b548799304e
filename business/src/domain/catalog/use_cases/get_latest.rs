use async_trait::async_trait;

use crate::domain::catalog::model::Product;

/// Highest feed ids stand in for "most recently added"; the feed has no
/// timestamp to order on.
#[async_trait]
pub trait GetLatestProductsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Product>;
}
