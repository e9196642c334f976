//! Effect trait: asynchronous reactions to the action stream

use super::{Action, AppState, StateReader};
use crate::error::Result;
use async_trait::async_trait;

/// Read-only view handed to an effect run
#[derive(Clone)]
pub struct EffectContext {
    /// Live state, for effects that need to see later changes
    pub state: StateReader,
    /// State right after the triggering action was reduced
    pub snapshot: AppState,
}

/// A handler that performs I/O in response to actions.
///
/// Effects never touch state directly. Whatever they want to change comes
/// back as the returned follow-up action, which the store dispatches. An
/// `Err` is logged by the store and dropped; nothing is dispatched for it.
#[async_trait]
pub trait Effect: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Whether this effect reacts to `action`
    fn observes(&self, action: &Action) -> bool;

    /// React to one observed action
    async fn handle(&self, action: Action, ctx: EffectContext) -> Result<Option<Action>>;
}
