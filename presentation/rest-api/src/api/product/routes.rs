use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::catalog::use_cases::get_all::GetAllProductsUseCase;
use business::domain::catalog::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::catalog::use_cases::get_latest::GetLatestProductsUseCase;
use business::domain::catalog::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::locale::resolve_locale;
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_latest_use_case: Arc<dyn GetLatestProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    search_use_case: Arc<dyn SearchProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_latest_use_case: Arc<dyn GetLatestProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        search_use_case: Arc<dyn SearchProductsUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_latest_use_case,
            get_by_id_use_case,
            search_use_case,
        }
    }
}

/// Product catalog API
///
/// Read-only views over the external product feed. Listing endpoints
/// degrade to an empty list when the feed is unreachable.
#[OpenApi]
impl ProductApi {
    /// List all products
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self, locale: Query<Option<String>>) -> Json<Vec<ProductResponse>> {
        let locale = resolve_locale(&locale.0);
        let products = self.get_all_use_case.execute().await;

        Json(
            products
                .into_iter()
                .map(|p| ProductResponse::from_domain(p, locale))
                .collect(),
        )
    }

    /// List the latest products
    ///
    /// Returns the newest arrivals, newest first.
    #[oai(path = "/products/latest", method = "get", tag = "ApiTags::Products")]
    async fn get_latest_products(
        &self,
        locale: Query<Option<String>>,
    ) -> Json<Vec<ProductResponse>> {
        let locale = resolve_locale(&locale.0);
        let products = self.get_latest_use_case.execute().await;

        Json(
            products
                .into_iter()
                .map(|p| ProductResponse::from_domain(p, locale))
                .collect(),
        )
    }

    /// Search products
    ///
    /// Matches the query against names, category labels, and references.
    /// A blank query returns the full catalog.
    #[oai(path = "/products/search", method = "get", tag = "ApiTags::Products")]
    async fn search_products(
        &self,
        q: Query<Option<String>>,
        locale: Query<Option<String>>,
    ) -> Json<Vec<ProductResponse>> {
        let locale = resolve_locale(&locale.0);
        let products = self
            .search_use_case
            .execute(SearchProductsParams {
                query: q.0.unwrap_or_default(),
                locale,
            })
            .await;

        Json(
            products
                .into_iter()
                .map(|p| ProductResponse::from_domain(p, locale))
                .collect(),
        )
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(
        &self,
        id: Path<u64>,
        locale: Query<Option<String>>,
    ) -> GetProductByIdResponse {
        let locale = resolve_locale(&locale.0);

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => {
                GetProductByIdResponse::Ok(Json(ProductResponse::from_domain(product, locale)))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
