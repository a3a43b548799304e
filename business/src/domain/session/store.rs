use async_trait::async_trait;

use super::model::ShopperSession;
use crate::domain::shared::value_objects::SessionId;

/// Port for session state. Infallible by contract: an unknown session
/// id yields a fresh default session and saves always succeed, so the
/// shopping list operations themselves can never fail on storage.
/// All mutation is serialized through the store's single dispatch point.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, session_id: &SessionId) -> ShopperSession;
    async fn save(&self, session_id: &SessionId, session: ShopperSession);
}
