use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::client::use_cases::create::{CreateClientParams, CreateClientUseCase};
use business::domain::client::use_cases::list::{ListClientsParams, ListClientsUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::client::dto::{ClientResponse, CreateClientRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::ApiBearer;
use crate::api::tags::ApiTags;

pub struct ClientApi {
    list_use_case: Arc<dyn ListClientsUseCase>,
    create_use_case: Arc<dyn CreateClientUseCase>,
}

impl ClientApi {
    pub fn new(
        list_use_case: Arc<dyn ListClientsUseCase>,
        create_use_case: Arc<dyn CreateClientUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            create_use_case,
        }
    }
}

/// Client directory API
///
/// Per-user saved company identities, used to pre-fill inquiries.
/// All endpoints require authentication.
#[OpenApi]
impl ClientApi {
    /// List the user's clients
    ///
    /// Ordered by company name. Degrades to an empty list when the
    /// directory is unreachable.
    #[oai(path = "/clients", method = "get", tag = "ApiTags::Clients")]
    async fn list_clients(&self, auth: ApiBearer) -> Json<Vec<ClientResponse>> {
        let clients = self
            .list_use_case
            .execute(ListClientsParams {
                user_id: UserId::new(auth.0.user_id),
            })
            .await;

        Json(clients.into_iter().map(ClientResponse::from).collect())
    }

    /// Register a client company
    #[oai(path = "/clients", method = "post", tag = "ApiTags::Clients")]
    async fn create_client(
        &self,
        auth: ApiBearer,
        body: Json<CreateClientRequest>,
    ) -> CreateClientResponse {
        match self
            .create_use_case
            .execute(CreateClientParams {
                user_id: UserId::new(auth.0.user_id),
                company_name: body.0.company_name,
                vat_number: body.0.vat_number,
            })
            .await
        {
            Ok(record) => CreateClientResponse::Created(Json(record.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateClientResponse::BadRequest(json),
                    409 => CreateClientResponse::Conflict(json),
                    _ => CreateClientResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateClientResponse {
    #[oai(status = 201)]
    Created(Json<ClientResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
