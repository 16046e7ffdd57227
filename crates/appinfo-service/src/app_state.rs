//! Shared application state for the app info service.
//!
//! The environment snapshot and the request counter are owned here and handed
//! to every handler through axum's `State` extractor.

use std::sync::Arc;

use appinfo_core::{EnvConfig, RequestCounter};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    env: EnvConfig,
    counter: RequestCounter,
}

impl AppState {
    pub fn new(env: EnvConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                env,
                counter: RequestCounter::new(),
            }),
        }
    }

    pub fn env(&self) -> &EnvConfig {
        &self.inner.env
    }

    pub fn counter(&self) -> &RequestCounter {
        &self.inner.counter
    }
}
