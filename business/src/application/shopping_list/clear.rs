use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::store::SessionStore;
use crate::domain::shopping_list::model::{ShoppingListAction, ShoppingListState};
use crate::domain::shopping_list::use_cases::clear::{ClearListParams, ClearListUseCase};

pub struct ClearListUseCaseImpl {
    pub sessions: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearListUseCase for ClearListUseCaseImpl {
    async fn execute(&self, params: ClearListParams) -> ShoppingListState {
        self.logger
            .info(&format!("Clearing list of session {}", params.session_id));

        let mut session = self.sessions.load(&params.session_id).await;
        session.list = session.list.apply(ShoppingListAction::ClearList);
        let list = session.list.clone();
        self.sessions.save(&params.session_id, session).await;

        list
    }
}
