use async_trait::async_trait;

use crate::domain::shared::value_objects::SessionId;
use crate::domain::shopping_list::model::ShoppingListState;

pub struct GetListParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait GetListUseCase: Send + Sync {
    async fn execute(&self, params: GetListParams) -> ShoppingListState;
}
