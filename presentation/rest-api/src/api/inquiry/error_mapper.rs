use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::inquiry::errors::InquiryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for InquiryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        // Client-directory failures keep their own mapping so the form
        // can distinguish a rejected save from a bad inquiry.
        if let InquiryError::Client(err) = self {
            return err.into_error_response();
        }

        let (status, name, message) = match &self {
            InquiryError::EmptyList => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "inquiry.empty_list",
            ),
            InquiryError::EmailFormNotOpen => (
                StatusCode::CONFLICT,
                "FlowError",
                "inquiry.email_form_not_open",
            ),
            InquiryError::ClientNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "inquiry.client_not_found")
            }
            InquiryError::MissingCompanyIdentity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "inquiry.missing_company_identity",
            ),
            InquiryError::Client(_) => unreachable!(),
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
