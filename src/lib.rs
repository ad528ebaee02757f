//! HLS Canva Automation Server Library
//!
//! JSON-file backed API for pulling designs, scheduling posts and recording
//! publish attempts. This module exports the core types for testing and reuse.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
pub use routes::router;
pub use store::{open_store, Store};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    pub fn new(store: Store, config: Config) -> Self {
        Self { store, config }
    }
}
