use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Header, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::inquiry::model::{ClientDetails, Sender};
use business::domain::inquiry::use_cases::advance_flow::{
    AdvanceInquiryFlowParams, AdvanceInquiryFlowUseCase,
};
use business::domain::inquiry::use_cases::submit::{SubmitInquiryParams, SubmitInquiryUseCase};
use business::domain::shared::value_objects::{SessionId, UserId};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::inquiry::dto::{
    AdvanceFlowRequest, FlowStateResponse, SubmitInquiryRequest, SubmitInquiryResponse,
};
use crate::api::locale::resolve_locale;
use crate::api::security::{ApiBearer, OptionalApiBearer};
use crate::api::tags::ApiTags;

pub struct InquiryApi {
    advance_flow_use_case: Arc<dyn AdvanceInquiryFlowUseCase>,
    submit_use_case: Arc<dyn SubmitInquiryUseCase>,
}

impl InquiryApi {
    pub fn new(
        advance_flow_use_case: Arc<dyn AdvanceInquiryFlowUseCase>,
        submit_use_case: Arc<dyn SubmitInquiryUseCase>,
    ) -> Self {
        Self {
            advance_flow_use_case,
            submit_use_case,
        }
    }
}

/// Inquiry API
///
/// Drives the list/email-form flow and composes the inquiry message.
/// Submission is open to guests; selecting or saving a client company
/// requires authentication.
#[OpenApi]
impl InquiryApi {
    /// Advance the inquiry flow
    ///
    /// Applies one UI event to the session's flow. Events that do not
    /// apply in the current state leave it unchanged.
    #[oai(path = "/inquiry/flow", method = "post", tag = "ApiTags::Inquiries")]
    async fn advance_flow(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
        body: Json<AdvanceFlowRequest>,
    ) -> Json<FlowStateResponse> {
        let flow = self
            .advance_flow_use_case
            .execute(AdvanceInquiryFlowParams {
                session_id: SessionId::new(session_id.0),
                event: body.0.event.into(),
            })
            .await;

        Json(flow.into())
    }

    /// Submit an inquiry
    ///
    /// Composes the inquiry message for the session's shopping list and
    /// returns it with its `mailto:` handoff URI. Requires the email
    /// form to be open and the list to be non-empty.
    #[oai(path = "/inquiries", method = "post", tag = "ApiTags::Inquiries")]
    async fn submit_inquiry(
        &self,
        auth: OptionalApiBearer,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
        locale: Query<Option<String>>,
        body: Json<SubmitInquiryRequest>,
    ) -> SubmitInquiryApiResponse {
        let locale = resolve_locale(&locale.0);

        let client_id = match body.0.client_id {
            Some(raw) => match Uuid::parse_str(&raw) {
                Ok(uuid) => Some(uuid),
                Err(_) => {
                    return SubmitInquiryApiResponse::BadRequest(Json(ErrorResponse {
                        name: "ValidationError".to_string(),
                        message: "inquiry.invalid_client_id".to_string(),
                    }));
                }
            },
            None => None,
        };

        let (user_id, sender) = match auth {
            OptionalApiBearer::Bearer(ApiBearer(user)) => {
                let sender = match user.email {
                    Some(email) => Sender::User { email },
                    None => Sender::Guest,
                };
                (Some(UserId::new(user.user_id)), sender)
            }
            OptionalApiBearer::Guest => (None, Sender::Guest),
        };

        let params = SubmitInquiryParams {
            session_id: SessionId::new(session_id.0),
            user_id,
            sender,
            client_id,
            new_client: body.0.new_client.map(|c| ClientDetails {
                company_name: c.company_name,
                vat_number: c.vat_number,
            }),
            locale,
        };

        match self.submit_use_case.execute(params).await {
            Ok(inquiry) => SubmitInquiryApiResponse::Ok(Json(inquiry.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitInquiryApiResponse::BadRequest(json),
                    404 => SubmitInquiryApiResponse::NotFound(json),
                    409 => SubmitInquiryApiResponse::Conflict(json),
                    _ => SubmitInquiryApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitInquiryApiResponse {
    #[oai(status = 200)]
    Ok(Json<SubmitInquiryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
