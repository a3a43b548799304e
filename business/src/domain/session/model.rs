use crate::domain::inquiry::flow::InquiryFlow;
use crate::domain::shopping_list::model::ShoppingListState;

/// Per-session state: the shopping list plus where the shopper is in
/// the inquiry flow. Lives in memory only; a restart starts fresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopperSession {
    pub list: ShoppingListState,
    pub flow: InquiryFlow,
}
