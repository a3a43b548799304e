use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::source::ProductCatalogSource;
use crate::domain::catalog::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::catalog::model::Product;
use crate::domain::logger::Logger;

pub struct GetAllProductsUseCaseImpl {
    pub source: Arc<dyn ProductCatalogSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Vec<Product> {
        self.logger.debug("Fetching product catalog");

        match self.source.fetch_all().await {
            Ok(products) => {
                self.logger
                    .info(&format!("Catalog fetched: {} products", products.len()));
                products
            }
            Err(err) => {
                // Fail-open: a broken feed renders as an empty catalog.
                self.logger.error(&format!("Catalog fetch failed: {err}"));
                Vec::new()
            }
        }
    }
}
