use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CatalogError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "catalog.not_found"),
            CatalogError::Unavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "UpstreamError",
                "catalog.unavailable",
            ),
            CatalogError::MalformedFeed => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "catalog.malformed_feed",
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
