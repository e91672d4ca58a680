//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{catalog_handler, favourite_handler, user_handler};
use crate::domain::{Catalog, CatalogItem, FavouriteSummary, User};

/// OpenAPI documentation for the Star Wars API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Star Wars API",
        version = "0.1.0",
        description = "Users, films, characters, planets, species and per-user favourites",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::list_users,
        user_handler::create_user,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Catalog endpoints
        catalog_handler::list_items,
        catalog_handler::create_item,
        catalog_handler::get_item,
        catalog_handler::update_item,
        catalog_handler::delete_item,
        // Favourite endpoints
        favourite_handler::favourite_summary,
        favourite_handler::list_favourites,
        favourite_handler::add_favourite,
        favourite_handler::get_favourite,
        favourite_handler::remove_favourite,
    ),
    components(
        schemas(
            // Domain types
            User,
            Catalog,
            CatalogItem,
            FavouriteSummary,
            // Request types
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
            catalog_handler::CatalogRequest,
            favourite_handler::AddFavouriteRequest,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Catalog", description = "Films, characters, planets and species"),
        (name = "Favourites", description = "Per-user favourite entities")
    )
)]
pub struct ApiDoc;
