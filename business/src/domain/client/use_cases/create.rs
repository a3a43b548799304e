use async_trait::async_trait;

use crate::domain::client::errors::ClientError;
use crate::domain::client::model::ClientRecord;
use crate::domain::shared::value_objects::UserId;

pub struct CreateClientParams {
    pub user_id: UserId,
    pub company_name: String,
    pub vat_number: String,
}

/// Fail-closed write path: rejected writes propagate so the caller can
/// keep the form open with its entered values intact.
#[async_trait]
pub trait CreateClientUseCase: Send + Sync {
    async fn execute(&self, params: CreateClientParams) -> Result<ClientRecord, ClientError>;
}
