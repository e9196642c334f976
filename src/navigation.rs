//! Route changes requested by effects

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Auth,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Auth => "/auth",
        }
    }
}

/// Whatever hosts the UI and can switch the visible route
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator for hosts without a router; records the request in the log
#[derive(Debug, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: Route) {
        info!("Navigating to {}", route.path());
    }
}
