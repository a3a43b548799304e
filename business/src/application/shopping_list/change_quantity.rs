use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::store::SessionStore;
use crate::domain::shopping_list::model::ShoppingListState;
use crate::domain::shopping_list::policy;
use crate::domain::shopping_list::use_cases::change_quantity::{
    ChangeQuantityParams, ChangeQuantityUseCase,
};

pub struct ChangeQuantityUseCaseImpl {
    pub sessions: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ChangeQuantityUseCase for ChangeQuantityUseCaseImpl {
    async fn execute(&self, params: ChangeQuantityParams) -> ShoppingListState {
        let mut session = self.sessions.load(&params.session_id).await;

        let Some(item) = session.list.find(params.product_id) else {
            // No-op for ids not in the list, mirroring the reducer.
            return session.list;
        };

        let action = policy::quantity_change(item, params.quantity);
        self.logger.debug(&format!(
            "Quantity change for product {} in session {}: requested {}",
            params.product_id, params.session_id, params.quantity
        ));

        session.list = session.list.apply(action);
        let list = session.list.clone();
        self.sessions.save(&params.session_id, session).await;

        list
    }
}
