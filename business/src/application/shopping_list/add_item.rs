use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::source::ProductCatalogSource;
use crate::domain::logger::Logger;
use crate::domain::session::store::SessionStore;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{ShoppingListAction, ShoppingListState};
use crate::domain::shopping_list::policy;
use crate::domain::shopping_list::use_cases::add_item::{AddItemParams, AddItemUseCase};

pub struct AddItemUseCaseImpl {
    pub source: Arc<dyn ProductCatalogSource>,
    pub sessions: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemUseCase for AddItemUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<ShoppingListState, ShoppingListError> {
        self.logger.info(&format!(
            "Adding product {} to list of session {}",
            params.product_id, params.session_id
        ));

        let product = self
            .source
            .fetch_all()
            .await?
            .into_iter()
            .find(|p| p.id == params.product_id)
            .ok_or(ShoppingListError::ProductNotFound)?;

        if !product.is_in_stock() {
            return Err(ShoppingListError::OutOfStock);
        }

        let mut session = self.sessions.load(&params.session_id).await;

        // Caller-side stock cap: at the ceiling no action is dispatched.
        if !policy::can_add(session.list.find(product.id), &product) {
            self.logger.debug(&format!(
                "Product {} already at stock ceiling, skipping",
                product.id
            ));
            return Ok(session.list);
        }

        session.list = session.list.apply(ShoppingListAction::AddItem(product));
        let list = session.list.clone();
        self.sessions.save(&params.session_id, session).await;

        Ok(list)
    }
}
