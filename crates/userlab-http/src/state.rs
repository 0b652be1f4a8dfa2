//! Shared application state handed to every handler

use std::sync::Arc;
use userlab_core::{InMemoryUserRepository, UserRepository};

/// Repositories owned by the application, constructed once at startup.
///
/// The CRUD and search routes each own a separate store; the service-backed
/// routes and the paginated listing share one.
#[derive(Clone)]
pub struct AppState {
    pub crud_users: Arc<dyn UserRepository>,
    pub search_users: Arc<dyn UserRepository>,
    pub user_service: Arc<dyn UserRepository>,
}

impl AppState {
    /// State with the seeded in-memory stores
    pub fn new() -> Self {
        Self {
            crud_users: Arc::new(InMemoryUserRepository::crud_seed()),
            search_users: Arc::new(InMemoryUserRepository::search_seed()),
            user_service: Arc::new(InMemoryUserRepository::service_seed()),
        }
    }

    /// State with caller supplied repositories
    pub fn with_repositories(
        crud_users: Arc<dyn UserRepository>,
        search_users: Arc<dyn UserRepository>,
        user_service: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            crud_users,
            search_users,
            user_service,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
