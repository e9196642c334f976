//! Shopping list reducer

use super::{ShoppingListAction, ShoppingListState};
use std::sync::Arc;
use tracing::{debug, warn};

/// Apply `action` to `state`.
///
/// A refused transition (see [`ShoppingListState::apply`]) leaves the state
/// untouched and returns the same `Arc`.
pub fn reduce(
    state: &Arc<ShoppingListState>,
    action: &ShoppingListAction,
) -> Arc<ShoppingListState> {
    match state.apply(action) {
        Ok(next) => {
            debug!(
                "Shopping list {}: {} ingredients",
                action.kind(),
                next.ingredients.len()
            );
            Arc::new(next)
        }
        Err(e) => {
            warn!("Ignoring shopping list {}: {}", action.kind(), e);
            Arc::clone(state)
        }
    }
}
