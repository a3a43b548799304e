use async_trait::async_trait;

use crate::domain::client::model::ClientRecord;
use crate::domain::shared::value_objects::UserId;

pub struct ListClientsParams {
    pub user_id: UserId,
}

/// Fail-open read path: a repository error degrades to an empty list.
#[async_trait]
pub trait ListClientsUseCase: Send + Sync {
    async fn execute(&self, params: ListClientsParams) -> Vec<ClientRecord>;
}
