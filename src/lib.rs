//! Bookshelf
//!
//! A small REST JSON service for listing, filtering, creating, updating and
//! deleting books held in an in-memory collection.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state for a configuration, seeding the collection if asked to
    pub fn new(config: AppConfig) -> Self {
        let store = if config.store.seed {
            repository::BookStore::seeded()
        } else {
            repository::BookStore::new()
        };
        let services = services::Services::new(repository::Repository::new(store));

        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
