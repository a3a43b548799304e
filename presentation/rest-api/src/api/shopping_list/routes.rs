use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Header, Path, Query},
    payload::Json,
};

use business::domain::shared::value_objects::SessionId;
use business::domain::shopping_list::use_cases::add_item::{AddItemParams, AddItemUseCase};
use business::domain::shopping_list::use_cases::change_quantity::{
    ChangeQuantityParams, ChangeQuantityUseCase,
};
use business::domain::shopping_list::use_cases::clear::{ClearListParams, ClearListUseCase};
use business::domain::shopping_list::use_cases::get::{GetListParams, GetListUseCase};
use business::domain::shopping_list::use_cases::remove_item::{
    RemoveItemParams, RemoveItemUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::locale::resolve_locale;
use crate::api::shopping_list::dto::{
    AddItemRequest, ChangeQuantityRequest, ShoppingListResponse,
};
use crate::api::tags::ApiTags;

pub struct ShoppingListApi {
    get_use_case: Arc<dyn GetListUseCase>,
    add_item_use_case: Arc<dyn AddItemUseCase>,
    change_quantity_use_case: Arc<dyn ChangeQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveItemUseCase>,
    clear_use_case: Arc<dyn ClearListUseCase>,
}

impl ShoppingListApi {
    pub fn new(
        get_use_case: Arc<dyn GetListUseCase>,
        add_item_use_case: Arc<dyn AddItemUseCase>,
        change_quantity_use_case: Arc<dyn ChangeQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveItemUseCase>,
        clear_use_case: Arc<dyn ClearListUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            change_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }
}

/// Shopping list API
///
/// Per-session working set, keyed by the `X-Session-Id` header. Every
/// mutation returns the full resulting list so the client never has to
/// reconcile partial updates.
#[OpenApi]
impl ShoppingListApi {
    /// Get the session's shopping list
    #[oai(path = "/shopping-list", method = "get", tag = "ApiTags::ShoppingList")]
    async fn get_list(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
        locale: Query<Option<String>>,
    ) -> Json<ShoppingListResponse> {
        let locale = resolve_locale(&locale.0);
        let state = self
            .get_use_case
            .execute(GetListParams {
                session_id: SessionId::new(session_id.0),
            })
            .await;

        Json(ShoppingListResponse::from_domain(state, locale))
    }

    /// Add a product to the shopping list
    ///
    /// Adds one unit of the product, or increments the existing entry.
    /// Adding at the stock ceiling leaves the list unchanged.
    #[oai(
        path = "/shopping-list/items",
        method = "post",
        tag = "ApiTags::ShoppingList"
    )]
    async fn add_item(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
        locale: Query<Option<String>>,
        body: Json<AddItemRequest>,
    ) -> AddItemResponse {
        let locale = resolve_locale(&locale.0);

        match self
            .add_item_use_case
            .execute(AddItemParams {
                session_id: SessionId::new(session_id.0),
                product_id: body.0.product_id,
            })
            .await
        {
            Ok(state) => AddItemResponse::Ok(Json(ShoppingListResponse::from_domain(state, locale))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddItemResponse::NotFound(json),
                    409 => AddItemResponse::Conflict(json),
                    _ => AddItemResponse::Unavailable(json),
                }
            }
        }
    }

    /// Set an item's quantity
    ///
    /// Quantities below 1 remove the item; quantities above the stock
    /// ceiling are clamped. Unknown items are left untouched.
    #[oai(
        path = "/shopping-list/items/:id",
        method = "patch",
        tag = "ApiTags::ShoppingList"
    )]
    async fn change_quantity(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
        id: Path<u64>,
        locale: Query<Option<String>>,
        body: Json<ChangeQuantityRequest>,
    ) -> Json<ShoppingListResponse> {
        let locale = resolve_locale(&locale.0);
        let state = self
            .change_quantity_use_case
            .execute(ChangeQuantityParams {
                session_id: SessionId::new(session_id.0),
                product_id: id.0,
                quantity: body.0.quantity,
            })
            .await;

        Json(ShoppingListResponse::from_domain(state, locale))
    }

    /// Remove an item from the shopping list
    ///
    /// Idempotent: removing an absent item returns the list as-is.
    #[oai(
        path = "/shopping-list/items/:id",
        method = "delete",
        tag = "ApiTags::ShoppingList"
    )]
    async fn remove_item(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
        id: Path<u64>,
        locale: Query<Option<String>>,
    ) -> Json<ShoppingListResponse> {
        let locale = resolve_locale(&locale.0);
        let state = self
            .remove_item_use_case
            .execute(RemoveItemParams {
                session_id: SessionId::new(session_id.0),
                product_id: id.0,
            })
            .await;

        Json(ShoppingListResponse::from_domain(state, locale))
    }

    /// Clear the shopping list
    #[oai(
        path = "/shopping-list",
        method = "delete",
        tag = "ApiTags::ShoppingList"
    )]
    async fn clear_list(
        &self,
        #[oai(name = "X-Session-Id")] session_id: Header<String>,
        locale: Query<Option<String>>,
    ) -> Json<ShoppingListResponse> {
        let locale = resolve_locale(&locale.0);
        let state = self
            .clear_use_case
            .execute(ClearListParams {
                session_id: SessionId::new(session_id.0),
            })
            .await;

        Json(ShoppingListResponse::from_domain(state, locale))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 503)]
    Unavailable(Json<ErrorResponse>),
}
