use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::Product;
use crate::domain::catalog::source::ProductCatalogSource;
use crate::domain::catalog::use_cases::get_latest::GetLatestProductsUseCase;
use crate::domain::logger::Logger;

/// How many "latest" products the storefront highlights.
const LATEST_PRODUCTS_COUNT: usize = 4;

pub struct GetLatestProductsUseCaseImpl {
    pub source: Arc<dyn ProductCatalogSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetLatestProductsUseCase for GetLatestProductsUseCaseImpl {
    async fn execute(&self) -> Vec<Product> {
        let mut products = match self.source.fetch_all().await {
            Ok(products) => products,
            Err(err) => {
                self.logger.error(&format!("Catalog fetch failed: {err}"));
                return Vec::new();
            }
        };

        // Descending id is the feed's only proxy for recency.
        products.sort_by(|a, b| b.id.cmp(&a.id));
        products.truncate(LATEST_PRODUCTS_COUNT);
        products
    }
}
