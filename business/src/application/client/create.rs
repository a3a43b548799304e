use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::client::errors::ClientError;
use crate::domain::client::model::ClientRecord;
use crate::domain::client::repository::ClientRepository;
use crate::domain::client::use_cases::create::{CreateClientParams, CreateClientUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct CreateClientUseCaseImpl {
    pub repository: Arc<dyn ClientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateClientUseCase for CreateClientUseCaseImpl {
    async fn execute(&self, params: CreateClientParams) -> Result<ClientRecord, ClientError> {
        self.logger
            .info(&format!("Creating client: {}", params.company_name));

        let record = ClientRecord::new(params.user_id, params.company_name, params.vat_number)?;

        // Fail-closed write path: the record is only returned after a
        // confirmed write, so callers never show an unconfirmed client.
        self.repository.save(&record).await.map_err(|err| match err {
            RepositoryError::Duplicated => ClientError::AlreadyExists,
            other => ClientError::Repository(other),
        })?;

        self.logger.info(&format!("Client created: {}", record.id));
        Ok(record)
    }
}
