//! Testing utilities
//!
//! Test doubles for the external collaborators (identity provider, recipe
//! store, navigator) and helpers for waiting on the action stream.

pub mod mocks;

pub use mocks::{MockIdentityProvider, MockRecipeStore, RecordingNavigator};

use crate::error::{Error, Result};
use crate::store::Action;
use std::time::Duration;
use tokio::sync::broadcast;

/// Default time to wait for an expected action
pub const ACTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Wait for the first action on `actions` matching `predicate`
pub async fn wait_for_action<F>(
    actions: &mut broadcast::Receiver<Action>,
    predicate: F,
) -> Result<Action>
where
    F: Fn(&Action) -> bool,
{
    let wait = async {
        loop {
            match actions.recv().await {
                Ok(action) if predicate(&action) => return Ok(action),
                Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => {
                    return Err(Error::StoreClosed("action stream closed".to_string()))
                }
            }
        }
    };

    tokio::time::timeout(ACTION_TIMEOUT, wait)
        .await
        .map_err(|_| Error::Other("timed out waiting for action".to_string()))?
}
