use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::session::model::ShopperSession;
use business::domain::session::store::SessionStore;
use business::domain::shared::value_objects::SessionId;

/// In-memory session store. Lists intentionally do not survive a
/// restart; the lock is the single dispatch point serializing all
/// session mutation.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, ShopperSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, session_id: &SessionId) -> ShopperSession {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn save(&self, session_id: &SessionId, session: ShopperSession) {
        self.sessions
            .write()
            .await
            .insert(session_id.clone(), session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::inquiry::flow::{InquiryFlow, InquiryFlowEvent};

    #[tokio::test]
    async fn should_return_fresh_session_for_unknown_id() {
        let store = InMemorySessionStore::new();

        let session = store.load(&SessionId::new("nobody")).await;

        assert!(session.list.is_empty());
        assert_eq!(session.flow, InquiryFlow::Closed);
    }

    #[tokio::test]
    async fn should_round_trip_saved_session() {
        let store = InMemorySessionStore::new();
        let mut session = ShopperSession::default();
        session.flow = session.flow.on(InquiryFlowEvent::OpenList);

        store.save(&SessionId::new("s1"), session.clone()).await;

        assert_eq!(store.load(&SessionId::new("s1")).await, session);
    }

    #[tokio::test]
    async fn should_isolate_sessions_by_id() {
        let store = InMemorySessionStore::new();
        let mut session = ShopperSession::default();
        session.flow = InquiryFlow::ListOpen;
        store.save(&SessionId::new("s1"), session).await;

        let other = store.load(&SessionId::new("s2")).await;

        assert_eq!(other.flow, InquiryFlow::Closed);
    }
}
