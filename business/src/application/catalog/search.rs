use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::categories::category_label;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::source::ProductCatalogSource;
use crate::domain::catalog::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::Locale;

pub struct SearchProductsUseCaseImpl {
    pub source: Arc<dyn ProductCatalogSource>,
    pub logger: Arc<dyn Logger>,
}

fn matches(product: &Product, query: &str, locale: Locale) -> bool {
    let needle = query.to_lowercase();

    product.name.to_lowercase().contains(&needle)
        || category_label(&product.category, locale)
            .to_lowercase()
            .contains(&needle)
        || product.reference.contains(query)
        || (locale.is_arabic() && !product.name_ar.is_empty() && product.name_ar.contains(query))
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Vec<Product> {
        let products = match self.source.fetch_all().await {
            Ok(products) => products,
            Err(err) => {
                self.logger.error(&format!("Catalog fetch failed: {err}"));
                return Vec::new();
            }
        };

        let query = params.query.trim();
        if query.is_empty() {
            return products;
        }

        products
            .into_iter()
            .filter(|p| matches(p, query, params.locale))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::errors::CatalogError;
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

    fn catalog() -> Vec<Product> {
        let mut rice = product(1, 5);
        rice.name = "Basmati Rice".to_string();
        rice.category = "Riz".to_string();

        let mut oil = product(2, 5);
        oil.name = "Extra Virgin".to_string();
        oil.name_ar = "زيت الزيتون".to_string();
        oil.category = "Huiles_d_olive".to_string();

        vec![rice, oil]
    }

    fn use_case(products: Vec<Product>) -> SearchProductsUseCaseImpl {
        let mut mock_source = MockCatalogSource::new();
        mock_source
            .expect_fetch_all()
            .returning(move || Ok(products.clone()));

        SearchProductsUseCaseImpl {
            source: Arc::new(mock_source),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_match_name_case_insensitively() {
        let results = use_case(catalog())
            .execute(SearchProductsParams {
                query: "basmati".to_string(),
                locale: Locale::English,
            })
            .await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);
    }

    #[tokio::test]
    async fn should_match_localized_category_label() {
        let results = use_case(catalog())
            .execute(SearchProductsParams {
                query: "olive oil".to_string(),
                locale: Locale::English,
            })
            .await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 2);
    }

    #[tokio::test]
    async fn should_match_reference_code() {
        let results = use_case(catalog())
            .execute(SearchProductsParams {
                query: "SKU-0001".to_string(),
                locale: Locale::French,
            })
            .await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);
    }

    #[tokio::test]
    async fn should_match_arabic_name_only_under_arabic_locale() {
        let arabic = use_case(catalog())
            .execute(SearchProductsParams {
                query: "زيت".to_string(),
                locale: Locale::Arabic,
            })
            .await;
        assert_eq!(arabic.len(), 1);

        let english = use_case(catalog())
            .execute(SearchProductsParams {
                query: "زيت".to_string(),
                locale: Locale::English,
            })
            .await;
        assert!(english.is_empty());
    }

    #[tokio::test]
    async fn should_return_everything_for_blank_query() {
        let results = use_case(catalog())
            .execute(SearchProductsParams {
                query: "  ".to_string(),
                locale: Locale::English,
            })
            .await;

        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn should_degrade_to_empty_on_source_error() {
        let mut mock_source = MockCatalogSource::new();
        mock_source
            .expect_fetch_all()
            .returning(|| Err(CatalogError::Unavailable));

        let use_case = SearchProductsUseCaseImpl {
            source: Arc::new(mock_source),
            logger: mock_logger(),
        };

        let results = use_case
            .execute(SearchProductsParams {
                query: "rice".to_string(),
                locale: Locale::English,
            })
            .await;

        assert!(results.is_empty());
    }
}
