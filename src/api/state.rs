//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    CatalogService, FavouriteService, ServiceContainer, Services, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Film/character/planet/species service
    pub catalog_service: Arc<dyn CatalogService>,
    /// Favourites service
    pub favourite_service: Arc<dyn FavouriteService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state with every service built over `database`.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::from_container(&container, database)
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            user_service: container.users(),
            catalog_service: container.catalog(),
            favourite_service: container.favourites(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        catalog_service: Arc<dyn CatalogService>,
        favourite_service: Arc<dyn FavouriteService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            user_service,
            catalog_service,
            favourite_service,
            database,
        }
    }
}
