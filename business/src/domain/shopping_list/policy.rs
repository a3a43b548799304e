use super::model::{ShoppingListAction, ShoppingListItem};
use crate::domain::catalog::model::Product;

/// Caller-side stock policy. The reducer itself holds no notion of a
/// stock ceiling beyond what is embedded in each item, so every dispatch
/// site goes through these translations first.

/// Whether one more unit of `product` may be added given the current
/// item (if any). Out-of-stock products are never addable; at the
/// ceiling the add is suppressed rather than clamped.
pub fn can_add(existing: Option<&ShoppingListItem>, product: &Product) -> bool {
    if !product.is_in_stock() {
        return false;
    }
    match existing {
        Some(item) => item.quantity < item.product.stock,
        None => true,
    }
}

/// Translates a requested quantity for an in-list item into the action
/// to dispatch: below 1 becomes a removal, above the stock ceiling is
/// clamped to it. Never produces an over-stock `UpdateQuantity`.
pub fn quantity_change(item: &ShoppingListItem, requested: i64) -> ShoppingListAction {
    let id = item.product.id;
    if requested < 1 {
        return ShoppingListAction::RemoveItem(id);
    }

    let stock = item.product.stock;
    let quantity = if stock > 0 && requested > i64::from(stock) {
        stock
    } else {
        requested as u32
    };

    ShoppingListAction::UpdateQuantity { id, quantity }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::fixtures::product;

    #[test]
    fn should_allow_add_when_no_existing_item_and_stock_available() {
        assert!(can_add(None, &product(1, 5)));
    }

    #[test]
    fn should_refuse_add_when_product_out_of_stock() {
        assert!(!can_add(None, &product(1, 0)));
    }

    #[test]
    fn should_refuse_add_when_quantity_already_at_stock_ceiling() {
        let mut item = ShoppingListItem::new(product(1, 1));
        assert!(!can_add(Some(&item), &product(1, 1)));

        item.product.stock = 3;
        item.quantity = 2;
        assert!(can_add(Some(&item), &product(1, 3)));
    }

    #[test]
    fn should_translate_sub_one_request_into_removal() {
        let item = ShoppingListItem::new(product(1, 5));

        assert_eq!(quantity_change(&item, 0), ShoppingListAction::RemoveItem(1));
        assert_eq!(quantity_change(&item, -3), ShoppingListAction::RemoveItem(1));
    }

    #[test]
    fn should_clamp_request_above_stock_to_ceiling() {
        let item = ShoppingListItem::new(product(1, 5));

        assert_eq!(
            quantity_change(&item, 12),
            ShoppingListAction::UpdateQuantity { id: 1, quantity: 5 }
        );
    }

    #[test]
    fn should_pass_through_request_within_stock() {
        let item = ShoppingListItem::new(product(1, 5));

        assert_eq!(
            quantity_change(&item, 3),
            ShoppingListAction::UpdateQuantity { id: 1, quantity: 3 }
        );
    }
}
