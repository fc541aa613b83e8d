//! State handed to every handler through `State<AppState>`

use std::sync::Arc;

use sqlx::PgPool;

use crate::{config::Config, services::TokenKeys};

/// Cheap to clone; everything lives behind one `Arc`
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Shared>,
}

struct Shared {
    db: PgPool,
    keys: TokenKeys,
    config: Config,
}

impl AppState {
    /// Token keys are derived here so requests never rebuild them
    pub fn new(db: PgPool, config: Config) -> Self {
        let keys = TokenKeys::new(&config.jwt);
        Self {
            inner: Arc::new(Shared { db, keys, config }),
        }
    }

    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    pub fn keys(&self) -> &TokenKeys {
        &self.inner.keys
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
