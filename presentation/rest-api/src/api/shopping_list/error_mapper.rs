use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ShoppingListError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "shopping_list.product_not_found",
            ),
            ShoppingListError::OutOfStock => (
                StatusCode::CONFLICT,
                "StockError",
                "shopping_list.out_of_stock",
            ),
            ShoppingListError::Catalog(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "UpstreamError",
                "catalog.unavailable",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
