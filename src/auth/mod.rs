//! Authentication slice
//!
//! Exchanges credentials for an expiring session with a remote identity
//! provider, keeps exactly one live session, persists it between runs and
//! logs the user out when it expires.

pub mod actions;
pub mod effects;
pub mod identity;
pub mod manager;
pub mod persistence;
pub mod session;
pub mod state;

pub use actions::{AuthAction, AuthSuccess, Credentials};
pub use effects::AuthEffects;
pub use identity::{
    error_message, AuthErrorCode, AuthResponse, HttpIdentityProvider, IdentityError,
    IdentityProvider,
};
pub use manager::AuthSessionManager;
pub use persistence::{PersistedSession, SESSION_KEY, SESSION_SCHEMA_VERSION};
pub use session::Session;
pub use state::{reduce, AuthState};
