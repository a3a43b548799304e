use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::store::SessionStore;
use crate::domain::shopping_list::model::{ShoppingListAction, ShoppingListState};
use crate::domain::shopping_list::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};

pub struct RemoveItemUseCaseImpl {
    pub sessions: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveItemUseCase for RemoveItemUseCaseImpl {
    async fn execute(&self, params: RemoveItemParams) -> ShoppingListState {
        self.logger.info(&format!(
            "Removing product {} from list of session {}",
            params.product_id, params.session_id
        ));

        let mut session = self.sessions.load(&params.session_id).await;
        session.list = session
            .list
            .apply(ShoppingListAction::RemoveItem(params.product_id));
        let list = session.list.clone();
        self.sessions.save(&params.session_id, session).await;

        list
    }
}
