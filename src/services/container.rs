//! Service Container - Centralized service access.
//!
//! Builds every service over one shared Unit of Work and hands them out as
//! trait objects.

use std::sync::Arc;

use super::{
    CatalogManager, CatalogService, FavouriteManager, FavouriteService, UserManager, UserService,
};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get film/character/planet/species service
    fn catalog(&self) -> Arc<dyn CatalogService>;

    /// Get favourites service
    fn favourites(&self) -> Arc<dyn FavouriteService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
    catalog_service: Arc<dyn CatalogService>,
    favourite_service: Arc<dyn FavouriteService>,
}

impl Services {
    /// Create a service container from already-built services
    pub fn new(
        user_service: Arc<dyn UserService>,
        catalog_service: Arc<dyn CatalogService>,
        favourite_service: Arc<dyn FavouriteService>,
    ) -> Self {
        Self {
            user_service,
            catalog_service,
            favourite_service,
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self::new(
            Arc::new(UserManager::new(uow.clone())),
            Arc::new(CatalogManager::new(uow.clone())),
            Arc::new(FavouriteManager::new(uow)),
        )
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    fn favourites(&self) -> Arc<dyn FavouriteService> {
        self.favourite_service.clone()
    }
}
