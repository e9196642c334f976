//! Authentication state and reducer

use super::{AuthAction, Session};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Session>,
    pub auth_error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().is_some_and(Session::is_valid)
    }
}

pub fn reduce(state: &Arc<AuthState>, action: &AuthAction) -> Arc<AuthState> {
    let next = match action {
        AuthAction::SignupStart(_) | AuthAction::LoginStart(_) => AuthState {
            auth_error: None,
            loading: true,
            ..state.as_ref().clone()
        },
        AuthAction::AuthSuccess(success) => AuthState {
            user: Some(success.session()),
            auth_error: None,
            loading: false,
        },
        AuthAction::AuthFail(message) => AuthState {
            user: None,
            auth_error: Some(message.clone()),
            loading: false,
        },
        AuthAction::Logout => AuthState {
            user: None,
            ..state.as_ref().clone()
        },
        AuthAction::ClearError => AuthState {
            auth_error: None,
            ..state.as_ref().clone()
        },
        AuthAction::AutoLogin => return Arc::clone(state),
    };

    debug!("Auth {}: authenticated={}", action.kind(), next.user.is_some());
    Arc::new(next)
}
