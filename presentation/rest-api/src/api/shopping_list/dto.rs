use poem_openapi::Object;

use business::domain::shared::value_objects::Locale;
use business::domain::shopping_list::model::{ShoppingListItem, ShoppingListState};

use crate::api::product::dto::ProductResponse;

/// Request to add a product to the shopping list
#[derive(Debug, Clone, Object)]
pub struct AddItemRequest {
    /// Catalog product identifier
    pub product_id: u64,
}

/// Request to set an item's quantity
#[derive(Debug, Clone, Object)]
pub struct ChangeQuantityRequest {
    /// Requested quantity; values below 1 remove the item, values above
    /// the product's stock are clamped to it
    pub quantity: i64,
}

/// A shopping list entry
#[derive(Debug, Clone, Object)]
pub struct ShoppingListItemResponse {
    pub product: ProductResponse,
    pub quantity: u32,
}

/// The session's shopping list
#[derive(Debug, Clone, Object)]
pub struct ShoppingListResponse {
    /// Entries in insertion order
    pub items: Vec<ShoppingListItemResponse>,
    /// Sum of all quantities
    pub total_items: u32,
}

impl ShoppingListResponse {
    pub fn from_domain(state: ShoppingListState, locale: Locale) -> Self {
        Self {
            total_items: state.total_items(),
            items: state
                .items
                .into_iter()
                .map(|item| ShoppingListItemResponse::from_domain(item, locale))
                .collect(),
        }
    }
}

impl ShoppingListItemResponse {
    fn from_domain(item: ShoppingListItem, locale: Locale) -> Self {
        Self {
            product: ProductResponse::from_domain(item.product, locale),
            quantity: item.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::catalog::model::fixtures::product;
    use business::domain::shopping_list::model::ShoppingListAction;

    #[test]
    fn should_expose_derived_total() {
        let state = ShoppingListState::default()
            .apply(ShoppingListAction::AddItem(product(1, 5)))
            .apply(ShoppingListAction::AddItem(product(2, 5)))
            .apply(ShoppingListAction::AddItem(product(1, 5)));

        let dto = ShoppingListResponse::from_domain(state, Locale::English);

        assert_eq!(dto.items.len(), 2);
        assert_eq!(dto.total_items, 3);
    }
}
