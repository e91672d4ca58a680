//! Film, character, planet and species handlers.
//!
//! The four collections share one set of handlers; each nested router
//! carries its [`Catalog`] kind as a request extension.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{PathParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Catalog, CatalogItem};
use crate::errors::AppResult;
use crate::types::{DeletedResponse, ItemResponse, ListResponse};

/// Create or rename request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CatalogRequest {
    /// Unique name within the collection
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "A New Hope")]
    pub name: String,
}

/// Create the routes of one catalog collection
pub fn catalog_routes(kind: Catalog) -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
        .layer(Extension(kind))
}

/// List every entry of a collection
#[utoipa::path(
    get,
    path = "/{catalog}",
    tag = "Catalog",
    params(
        ("catalog" = Catalog, Path, description = "films, characters, planets or species")
    ),
    responses(
        (status = 200, description = "All entries in insertion order", body = [CatalogItem])
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    Extension(kind): Extension<Catalog>,
) -> AppResult<Json<ListResponse<Vec<CatalogItem>>>> {
    let items = state.catalog_service.list(kind).await?;
    Ok(Json(ListResponse::new(format!("{} list", kind.label()), items)))
}

/// Create an entry
#[utoipa::path(
    post,
    path = "/{catalog}",
    tag = "Catalog",
    params(
        ("catalog" = Catalog, Path, description = "films, characters, planets or species")
    ),
    request_body = CatalogRequest,
    responses(
        (status = 200, description = "Entry created", body = CatalogItem),
        (status = 400, description = "Missing name or name already taken")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Extension(kind): Extension<Catalog>,
    ValidatedJson(payload): ValidatedJson<CatalogRequest>,
) -> AppResult<Json<ItemResponse<CatalogItem>>> {
    let item = state.catalog_service.create(kind, payload.name).await?;
    Ok(Json(ItemResponse::new(format!("{} added", kind.label()), item)))
}

/// Get an entry by ID
#[utoipa::path(
    get,
    path = "/{catalog}/{id}",
    tag = "Catalog",
    params(
        ("catalog" = Catalog, Path, description = "films, characters, planets or species"),
        ("id" = i32, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "Entry found", body = CatalogItem),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Extension(kind): Extension<Catalog>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<ItemResponse<CatalogItem>>> {
    let item = state.catalog_service.get(kind, id).await?;
    Ok(Json(ItemResponse::new(format!("{} found", kind.label()), item)))
}

/// Replace the name of an entry
#[utoipa::path(
    put,
    path = "/{catalog}/{id}",
    tag = "Catalog",
    params(
        ("catalog" = Catalog, Path, description = "films, characters, planets or species"),
        ("id" = i32, Path, description = "Entry ID")
    ),
    request_body = CatalogRequest,
    responses(
        (status = 200, description = "Entry renamed", body = CatalogItem),
        (status = 400, description = "Missing name or name already taken"),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Extension(kind): Extension<Catalog>,
    PathParams(id): PathParams<i32>,
    ValidatedJson(payload): ValidatedJson<CatalogRequest>,
) -> AppResult<Json<ItemResponse<CatalogItem>>> {
    let item = state.catalog_service.rename(kind, id, payload.name).await?;
    Ok(Json(ItemResponse::new(format!("{} updated", kind.label()), item)))
}

/// Delete an entry; users' favourites of it are removed too
#[utoipa::path(
    delete,
    path = "/{catalog}/{id}",
    tag = "Catalog",
    params(
        ("catalog" = Catalog, Path, description = "films, characters, planets or species"),
        ("id" = i32, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "Entry deleted; body carries the removed row under `<entity> delete`"),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Extension(kind): Extension<Catalog>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<DeletedResponse<CatalogItem>>> {
    let item = state.catalog_service.delete(kind, id).await?;
    Ok(Json(DeletedResponse::new(
        format!("{} deleted", kind.label()),
        kind.singular(),
        item,
    )))
}
