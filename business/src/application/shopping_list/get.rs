use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::store::SessionStore;
use crate::domain::shopping_list::model::ShoppingListState;
use crate::domain::shopping_list::use_cases::get::{GetListParams, GetListUseCase};

pub struct GetListUseCaseImpl {
    pub sessions: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetListUseCase for GetListUseCaseImpl {
    async fn execute(&self, params: GetListParams) -> ShoppingListState {
        let session = self.sessions.load(&params.session_id).await;
        self.logger.debug(&format!(
            "Session {} list holds {} items",
            params.session_id,
            session.list.items.len()
        ));
        session.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::fixtures::product;
    use crate::domain::session::model::ShopperSession;
    use crate::domain::shared::value_objects::SessionId;
    use crate::domain::shopping_list::model::ShoppingListAction;
    use mockall::mock;
    use std::collections::HashMap;
    use std::sync::Mutex;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[derive(Default)]
    pub struct FakeSessionStore {
        sessions: Mutex<HashMap<SessionId, ShopperSession>>,
    }

    #[async_trait]
    impl SessionStore for FakeSessionStore {
        async fn load(&self, session_id: &SessionId) -> ShopperSession {
            self.sessions
                .lock()
                .unwrap()
                .get(session_id)
                .cloned()
                .unwrap_or_default()
        }

        async fn save(&self, session_id: &SessionId, session: ShopperSession) {
            self.sessions
                .lock()
                .unwrap()
                .insert(session_id.clone(), session);
        }
    }

    #[tokio::test]
    async fn should_return_empty_list_for_unknown_session() {
        let use_case = GetListUseCaseImpl {
            sessions: Arc::new(FakeSessionStore::default()),
            logger: mock_logger(),
        };

        let list = use_case
            .execute(GetListParams {
                session_id: SessionId::new("nobody"),
            })
            .await;

        assert!(list.is_empty());
        assert_eq!(list.total_items(), 0);
    }

    #[tokio::test]
    async fn should_return_stored_list_with_derived_total() {
        let sessions = Arc::new(FakeSessionStore::default());
        let mut session = ShopperSession::default();
        session.list = session
            .list
            .apply(ShoppingListAction::AddItem(product(1, 5)))
            .apply(ShoppingListAction::AddItem(product(1, 5)))
            .apply(ShoppingListAction::AddItem(product(2, 5)));
        sessions.save(&SessionId::new("s1"), session).await;

        let use_case = GetListUseCaseImpl {
            sessions,
            logger: mock_logger(),
        };

        let list = use_case
            .execute(GetListParams {
                session_id: SessionId::new("s1"),
            })
            .await;

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.total_items(), 3);
    }
}
