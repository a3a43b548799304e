use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::client::errors::ClientError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ClientError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ClientError::CompanyNameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "client.company_name_empty",
            ),
            ClientError::VatNumberEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "client.vat_number_empty",
            ),
            ClientError::AlreadyExists => {
                (StatusCode::CONFLICT, "Conflict", "client.already_exists")
            }
            ClientError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
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
