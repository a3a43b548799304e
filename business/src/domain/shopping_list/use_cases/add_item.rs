use async_trait::async_trait;

use crate::domain::shared::value_objects::SessionId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListState;

pub struct AddItemParams {
    pub session_id: SessionId,
    pub product_id: u64,
}

#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams) -> Result<ShoppingListState, ShoppingListError>;
}
