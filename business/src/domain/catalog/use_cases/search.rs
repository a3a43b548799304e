use async_trait::async_trait;

use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::Locale;

pub struct SearchProductsParams {
    pub query: String,
    pub locale: Locale,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Vec<Product>;
}
