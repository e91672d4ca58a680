//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate the persistence gateway to fulfill application use
//! cases. Each call runs inside one Unit of Work transaction.

mod catalog_service;
pub mod container;
mod favourite_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use catalog_service::{CatalogManager, CatalogService};
pub use favourite_service::{FavouriteManager, FavouriteService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use catalog_service::MockCatalogService;
#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use favourite_service::MockFavouriteService;
#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserService;
