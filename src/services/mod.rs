//! Business logic layer.
//!
//! ```text
//! API layer (axum handlers)
//!   -> Service layer (here)
//!     -> Repository layer
//!       -> SQLite
//! ```

mod quote_service;

pub use quote_service::*;

use std::sync::Arc;

use crate::{
    config::Config,
    database::{Database, QuoteRepository},
};

// =====================================
// Application state
// =====================================
/// Shared state injected into every handler.
///
/// Cloning clones `Arc`s, not the underlying services.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub database: Database,
    pub quote_service: Arc<QuoteService>,
}

impl AppState {
    #[must_use]
    pub fn new(db: Database, config: Config) -> Self {
        let quote_repo = QuoteRepository::new(db.clone());
        let config = Arc::new(config);

        let quote_service = Arc::new(QuoteService::new(quote_repo));

        Self {
            config,
            database: db,
            quote_service,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// =====================================
// Service marker trait
// =====================================
/// All services must be shareable across threads.
pub trait Service: Send + Sync {}
