use async_trait::async_trait;

use super::model::ClientRecord;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Records owned by the user, ordered by company name ascending.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ClientRecord>, RepositoryError>;
    async fn save(&self, record: &ClientRecord) -> Result<(), RepositoryError>;
}
