use async_trait::async_trait;

use crate::domain::shared::value_objects::SessionId;
use crate::domain::shopping_list::model::ShoppingListState;

pub struct ChangeQuantityParams {
    pub session_id: SessionId,
    pub product_id: u64,
    /// Signed on purpose: a decrement below 1 is a valid request and
    /// turns into a removal under the caller-clamp policy.
    pub quantity: i64,
}

/// Infallible: unknown ids are no-ops and out-of-range requests are
/// pre-translated, mirroring the reducer's failure semantics.
#[async_trait]
pub trait ChangeQuantityUseCase: Send + Sync {
    async fn execute(&self, params: ChangeQuantityParams) -> ShoppingListState;
}
