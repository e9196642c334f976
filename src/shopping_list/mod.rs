//! Shopping list slice
//!
//! Holds the ordered ingredient list plus the edit cursor, and the pure
//! reducer that moves it from one state to the next. Every transition
//! returns a fresh state; the ingredient vector is shared behind an `Arc`
//! whenever a transition leaves it untouched.

pub mod actions;
pub mod reducer;
pub mod state;

pub use actions::ShoppingListAction;
pub use reducer::reduce;
pub use state::{EditCursor, ListError, ShoppingListState};

#[cfg(test)]
mod tests;
