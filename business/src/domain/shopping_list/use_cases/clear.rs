use async_trait::async_trait;

use crate::domain::shared::value_objects::SessionId;
use crate::domain::shopping_list::model::ShoppingListState;

pub struct ClearListParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait ClearListUseCase: Send + Sync {
    async fn execute(&self, params: ClearListParams) -> ShoppingListState;
}
