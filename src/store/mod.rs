//! Action bus, application state and the store loop
//!
//! The UI layer dispatches [`Action`]s through a [`Dispatcher`]. The
//! [`Store`] reduces each one synchronously into a new [`AppState`], then
//! hands it to every registered [`Effect`] that observes it. Effects run
//! as independent tasks and can only influence state by returning a
//! follow-up action, which re-enters the same queue.

pub mod action;
pub mod bus;
pub mod effect;
pub mod state;

pub use action::Action;
pub use bus::{Dispatcher, StateReader, Store, StoreHandle};
pub use effect::{Effect, EffectContext};
pub use state::AppState;
