use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::source::ProductCatalogSource;
use crate::domain::catalog::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::logger::Logger;

/// The feed has no reliable single-item endpoint, so lookup filters the
/// full catalog. Upstream failure surfaces as not-found rather than a
/// generic error.
pub struct GetProductByIdUseCaseImpl {
    pub source: Arc<dyn ProductCatalogSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, CatalogError> {
        self.logger
            .debug(&format!("Fetching product by id: {}", params.id));

        let products = self.source.fetch_all().await.map_err(|err| {
            self.logger.error(&format!("Catalog fetch failed: {err}"));
            CatalogError::NotFound
        })?;

        products
            .into_iter()
            .find(|p| p.id == params.id)
            .ok_or(CatalogError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::fixtures::product;
    use mockall::mock;

    mock! {
        pub CatalogSource {}

        #[async_trait]
        impl ProductCatalogSource for CatalogSource {
            async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_find_product_in_catalog() {
        let mut mock_source = MockCatalogSource::new();
        mock_source
            .expect_fetch_all()
            .returning(|| Ok(vec![product(1, 5), product(2, 3)]));

        let use_case = GetProductByIdUseCaseImpl {
            source: Arc::new(mock_source),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 2 }).await;

        assert_eq!(result.unwrap().id, 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_id_absent() {
        let mut mock_source = MockCatalogSource::new();
        mock_source
            .expect_fetch_all()
            .returning(|| Ok(vec![product(1, 5)]));

        let use_case = GetProductByIdUseCaseImpl {
            source: Arc::new(mock_source),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 42 }).await;

        assert!(matches!(result.unwrap_err(), CatalogError::NotFound));
    }

    #[tokio::test]
    async fn should_surface_source_error_as_not_found() {
        let mut mock_source = MockCatalogSource::new();
        mock_source
            .expect_fetch_all()
            .returning(|| Err(CatalogError::Unavailable));

        let use_case = GetProductByIdUseCaseImpl {
            source: Arc::new(mock_source),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 1 }).await;

        assert!(matches!(result.unwrap_err(), CatalogError::NotFound));
    }
}
