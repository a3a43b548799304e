use crate::domain::catalog::model::Product;

/// A selected product plus how many units the shopper wants.
/// Invariant: quantity >= 1; an item never persists at quantity 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListItem {
    pub product: Product,
    pub quantity: u32,
}

impl ShoppingListItem {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }
}

/// Closed set of transitions on the shopping list.
#[derive(Debug, Clone, PartialEq)]
pub enum ShoppingListAction {
    AddItem(Product),
    RemoveItem(u64),
    UpdateQuantity { id: u64, quantity: u32 },
    ClearList,
}

/// The shopper's working set, unique by product id, insertion order
/// preserved for display. All transitions are pure and infallible;
/// stock-ceiling clamping is the caller's job (see `policy`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingListState {
    pub items: Vec<ShoppingListItem>,
}

impl ShoppingListState {
    /// Pure reducer: old state + action -> new state. No I/O, no failure.
    /// An action targeting an absent id is an identity transition.
    pub fn apply(mut self, action: ShoppingListAction) -> Self {
        match action {
            ShoppingListAction::AddItem(product) => {
                match self.items.iter_mut().find(|i| i.product.id == product.id) {
                    Some(existing) => existing.quantity += 1,
                    None => self.items.push(ShoppingListItem::new(product)),
                }
                self
            }
            ShoppingListAction::RemoveItem(id) => {
                self.items.retain(|i| i.product.id != id);
                self
            }
            // Quantity 0 removes the item outright, so the "no item at
            // quantity 0" invariant holds even against a sloppy caller.
            ShoppingListAction::UpdateQuantity { id, quantity: 0 } => {
                self.apply(ShoppingListAction::RemoveItem(id))
            }
            ShoppingListAction::UpdateQuantity { id, quantity } => {
                if let Some(item) = self.items.iter_mut().find(|i| i.product.id == id) {
                    item.quantity = quantity;
                }
                self
            }
            ShoppingListAction::ClearList => {
                self.items.clear();
                self
            }
        }
    }

    /// Derived total, recomputed on every read, never stored.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: u64) -> Option<&ShoppingListItem> {
        self.items.iter().find(|i| i.product.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::fixtures::product;
    use proptest::prelude::*;

    #[test]
    fn should_append_new_item_with_quantity_one() {
        let state = ShoppingListState::default().apply(ShoppingListAction::AddItem(product(1, 5)));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].quantity, 1);
    }

    #[test]
    fn should_accumulate_repeated_adds_into_one_entry() {
        let mut state = ShoppingListState::default();
        for _ in 0..3 {
            state = state.apply(ShoppingListAction::AddItem(product(1, 5)));
        }

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].product.id, 1);
        assert_eq!(state.items[0].quantity, 3);
    }

    #[test]
    fn should_preserve_insertion_order_across_removal() {
        let state = ShoppingListState::default()
            .apply(ShoppingListAction::AddItem(product(1, 5)))
            .apply(ShoppingListAction::AddItem(product(2, 5)))
            .apply(ShoppingListAction::RemoveItem(1));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].product.id, 2);
    }

    #[test]
    fn should_treat_second_removal_as_no_op() {
        let state = ShoppingListState::default()
            .apply(ShoppingListAction::AddItem(product(1, 5)))
            .apply(ShoppingListAction::RemoveItem(1));
        let again = state.clone().apply(ShoppingListAction::RemoveItem(1));

        assert_eq!(state, again);
    }

    #[test]
    fn should_replace_quantity_on_update() {
        let state = ShoppingListState::default()
            .apply(ShoppingListAction::AddItem(product(1, 5)))
            .apply(ShoppingListAction::UpdateQuantity { id: 1, quantity: 4 });

        assert_eq!(state.items[0].quantity, 4);
    }

    #[test]
    fn should_remove_item_when_quantity_updated_to_zero() {
        let state = ShoppingListState::default()
            .apply(ShoppingListAction::AddItem(product(1, 5)))
            .apply(ShoppingListAction::UpdateQuantity { id: 1, quantity: 0 });

        assert!(state.is_empty());
    }

    #[test]
    fn should_ignore_update_for_absent_id() {
        let state = ShoppingListState::default()
            .apply(ShoppingListAction::AddItem(product(1, 5)))
            .apply(ShoppingListAction::UpdateQuantity { id: 9, quantity: 4 });

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].quantity, 1);
    }

    #[test]
    fn should_clear_regardless_of_prior_state() {
        let state = ShoppingListState::default()
            .apply(ShoppingListAction::AddItem(product(1, 5)))
            .apply(ShoppingListAction::AddItem(product(2, 5)))
            .apply(ShoppingListAction::ClearList);

        assert!(state.is_empty());
        assert_eq!(state.total_items(), 0);
    }

    #[test]
    fn should_sum_quantities_for_total() {
        let state = ShoppingListState::default()
            .apply(ShoppingListAction::AddItem(product(1, 5)))
            .apply(ShoppingListAction::AddItem(product(1, 5)))
            .apply(ShoppingListAction::AddItem(product(2, 5)));

        assert_eq!(state.total_items(), 3);
    }

    fn arbitrary_action() -> impl Strategy<Value = ShoppingListAction> {
        prop_oneof![
            (1u64..6).prop_map(|id| ShoppingListAction::AddItem(product(id, 10))),
            (1u64..6).prop_map(ShoppingListAction::RemoveItem),
            ((1u64..6), (0u32..12))
                .prop_map(|(id, quantity)| ShoppingListAction::UpdateQuantity { id, quantity }),
            Just(ShoppingListAction::ClearList),
        ]
    }

    proptest! {
        #[test]
        fn reducer_upholds_invariants_for_any_action_sequence(
            actions in proptest::collection::vec(arbitrary_action(), 0..40)
        ) {
            let mut state = ShoppingListState::default();
            for action in actions {
                state = state.apply(action);

                // Unique by product id.
                let mut ids: Vec<u64> = state.items.iter().map(|i| i.product.id).collect();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), state.items.len());

                // No item persists at quantity 0.
                prop_assert!(state.items.iter().all(|i| i.quantity >= 1));

                // Derived total is the sum of quantities.
                let sum: u32 = state.items.iter().map(|i| i.quantity).sum();
                prop_assert_eq!(state.total_items(), sum);
            }
        }
    }
}
