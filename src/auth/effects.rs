//! Authentication side effects

use super::{
    error_message, AuthAction, AuthResponse, AuthSessionManager, AuthSuccess, Credentials,
    IdentityProvider, Session,
};
use crate::error::Result;
use crate::navigation::{Navigator, Route};
use crate::store::{Action, Effect, EffectContext};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Signup,
    Login,
}

/// Drives signup, login, restore and logout.
///
/// Provider failures always come back as an `AuthFail` action carrying a
/// user-facing message; this effect never returns an error.
pub struct AuthEffects {
    identity: Arc<dyn IdentityProvider>,
    sessions: Arc<AuthSessionManager>,
    navigator: Arc<dyn Navigator>,
}

impl AuthEffects {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        sessions: Arc<AuthSessionManager>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            identity,
            sessions,
            navigator,
        }
    }

    pub async fn signup(&self, credentials: &Credentials) -> Action {
        self.authenticate(AuthMode::Signup, credentials).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Action {
        self.authenticate(AuthMode::Login, credentials).await
    }

    async fn authenticate(&self, mode: AuthMode, credentials: &Credentials) -> Action {
        let result = match mode {
            AuthMode::Signup => self.identity.sign_up(credentials).await,
            AuthMode::Login => self.identity.sign_in_with_password(credentials).await,
        };

        match result {
            Ok(response) => self.handle_authentication(response).await,
            Err(e) => {
                warn!("{:?} failed for {}: {}", mode, credentials.email, e);
                AuthAction::AuthFail(error_message(&e).to_string()).into()
            }
        }
    }

    async fn handle_authentication(&self, response: AuthResponse) -> Action {
        let lifetime = response.lifetime();
        self.sessions.set_logout_timer(lifetime);

        let session = Session::expiring_in(
            response.email,
            response.local_id,
            response.id_token,
            lifetime,
        );
        if let Err(e) = self.sessions.persist(&session).await {
            warn!("Could not store session for {}: {}", session.email, e);
        }

        info!("Authenticated {}", session.email);
        AuthAction::AuthSuccess(AuthSuccess::from_session(session, true)).into()
    }

    /// Follow up on a reduced `AuthSuccess`.
    ///
    /// An interactive login navigates home. A restored session starts its
    /// logout countdown here, once its success is already in state, so the
    /// `Logout` of an expired session is always reduced after it.
    pub fn on_success(&self, success: &AuthSuccess) {
        if success.redirect {
            self.navigator.navigate(Route::Home);
        } else {
            let remaining = success.session().remaining_at(Utc::now());
            self.sessions.set_logout_timer(remaining);
        }
    }

    /// Restore the stored session, if there is one with a token.
    ///
    /// The stored expiry is trusted as is: a session that already expired
    /// is still restored and logged out as soon as its success is reduced.
    pub async fn auto_login(&self) -> Action {
        let Some(session) = self.sessions.restore().await else {
            return Action::Noop;
        };

        info!("Restored session for {}", session.email);
        AuthAction::AuthSuccess(AuthSuccess::from_session(session, false)).into()
    }

    pub async fn logout(&self) {
        self.sessions.clear_logout_timer();
        if let Err(e) = self.sessions.forget().await {
            warn!("Could not delete stored session: {}", e);
        }
        info!("Logged out");
        self.navigator.navigate(Route::Auth);
    }
}

#[async_trait]
impl Effect for AuthEffects {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn observes(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Auth(
                AuthAction::SignupStart(_)
                    | AuthAction::LoginStart(_)
                    | AuthAction::AuthSuccess(_)
                    | AuthAction::AutoLogin
                    | AuthAction::Logout
            )
        )
    }

    async fn handle(&self, action: Action, _ctx: EffectContext) -> Result<Option<Action>> {
        let Action::Auth(action) = action else {
            return Ok(None);
        };

        let next = match action {
            AuthAction::SignupStart(credentials) => Some(self.signup(&credentials).await),
            AuthAction::LoginStart(credentials) => Some(self.login(&credentials).await),
            AuthAction::AuthSuccess(success) => {
                self.on_success(&success);
                None
            }
            AuthAction::AutoLogin => Some(self.auto_login().await),
            AuthAction::Logout => {
                self.logout().await;
                None
            }
            AuthAction::AuthFail(_) | AuthAction::ClearError => None,
        };

        Ok(next)
    }
}
