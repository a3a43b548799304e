use async_trait::async_trait;

use crate::domain::catalog::model::Product;

/// Fail-open read path: a broken feed degrades to an empty catalog,
/// never to an error surfaced to the caller.
#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Product>;
}
