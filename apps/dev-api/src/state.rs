use crate::store::Store;
use seva::domain::config::DevApiConfig;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
pub struct AppStateInner {
    pub config: DevApiConfig,
    pub store: Store,
}

/// Shared by every handler; cloning is a reference count bump.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    #[must_use]
    pub fn new(config: DevApiConfig, store: Store) -> Self {
        Self { inner: Arc::new(AppStateInner { config, store }) }
    }

    /// Artificial delay added in front of every request.
    #[must_use]
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.inner.config.server.latency_ms)
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
