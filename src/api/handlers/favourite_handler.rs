//! Favourite handlers, mounted under `/users`.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{PathParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Catalog, CatalogItem, Favourite, FavouriteSummary};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, ItemResponse, ListResponse};

/// Add-favourite request; only the field matching the relation is read.
///
/// An id with no matching row is a missing target, reported by the service
/// after the user check.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct AddFavouriteRequest {
    #[schema(example = 1)]
    pub film_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
    #[serde(alias = "species_id")]
    pub specie_id: Option<i32>,
}

impl AddFavouriteRequest {
    /// Target id for `kind`
    pub fn target(&self, kind: Catalog) -> AppResult<i32> {
        let id = match kind {
            Catalog::Film => self.film_id,
            Catalog::Planet => self.planet_id,
            Catalog::Character => self.character_id,
            Catalog::Species => self.specie_id,
        };
        id.ok_or_else(|| AppError::validation(format!("{} is required", kind.foreign_key())))
    }
}

pub fn favourite_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/favourites", get(favourite_summary))
        .route(
            "/:id/favourites/:relation",
            get(list_favourites).post(add_favourite),
        )
        .route(
            "/:id/favourites/:relation/:target_id",
            get(get_favourite).delete(remove_favourite),
        )
}

/// Every favourite of a user, grouped by kind
#[utoipa::path(
    get,
    path = "/users/{id}/favourites",
    tag = "Favourites",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favourites grouped by kind", body = FavouriteSummary),
        (status = 404, description = "User not found or no favourites at all")
    )
)]
pub async fn favourite_summary(
    State(state): State<AppState>,
    PathParams(user_id): PathParams<i32>,
) -> AppResult<Json<ListResponse<FavouriteSummary>>> {
    let summary = state.favourite_service.summary(user_id).await?;
    if summary.is_empty() {
        return Err(AppError::not_found("Favourites"));
    }
    Ok(Json(ListResponse::new("User favourites", summary)))
}

/// Favourites of one kind
#[utoipa::path(
    get,
    path = "/users/{id}/favourites/{relation}",
    tag = "Favourites",
    params(
        ("id" = i32, Path, description = "User ID"),
        ("relation" = Catalog, Path, description = "films, characters, planets or species")
    ),
    responses(
        (status = 200, description = "Favourite entities", body = [CatalogItem]),
        (status = 404, description = "User not found or list empty")
    )
)]
pub async fn list_favourites(
    State(state): State<AppState>,
    PathParams((user_id, kind)): PathParams<(i32, Catalog)>,
) -> AppResult<Json<ListResponse<Vec<CatalogItem>>>> {
    let items = state.favourite_service.list(user_id, kind).await?;
    if items.is_empty() {
        return Err(AppError::not_found(format!("Favourite {}", kind.collection())));
    }
    Ok(Json(ListResponse::new(
        format!("Favourite {}", kind.collection()),
        items,
    )))
}

/// Add a favourite
#[utoipa::path(
    post,
    path = "/users/{id}/favourites/{relation}",
    tag = "Favourites",
    params(
        ("id" = i32, Path, description = "User ID"),
        ("relation" = Catalog, Path, description = "films, characters, planets or species")
    ),
    request_body = AddFavouriteRequest,
    responses(
        (status = 201, description = "Relation row with the entity embedded"),
        (status = 400, description = "Missing id field or already a favourite"),
        (status = 404, description = "User or entity not found")
    )
)]
pub async fn add_favourite(
    State(state): State<AppState>,
    PathParams((user_id, kind)): PathParams<(i32, Catalog)>,
    ValidatedJson(payload): ValidatedJson<AddFavouriteRequest>,
) -> AppResult<Created<ItemResponse<Favourite>>> {
    let target_id = payload.target(kind)?;
    let favourite = state.favourite_service.add(user_id, kind, target_id).await?;
    Ok(Created(ItemResponse::new(
        format!("{} added to favourites", kind.label()),
        favourite,
    )))
}

/// One favourite relation row
#[utoipa::path(
    get,
    path = "/users/{id}/favourites/{relation}/{target_id}",
    tag = "Favourites",
    params(
        ("id" = i32, Path, description = "User ID"),
        ("relation" = Catalog, Path, description = "films, characters, planets or species"),
        ("target_id" = i32, Path, description = "Entity ID")
    ),
    responses(
        (status = 200, description = "Relation row with the entity embedded"),
        (status = 400, description = "Entity is not a favourite of the user"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_favourite(
    State(state): State<AppState>,
    PathParams((user_id, kind, target_id)): PathParams<(i32, Catalog, i32)>,
) -> AppResult<Json<ItemResponse<Favourite>>> {
    // An absent pair is a bad request on this route, not a missing resource
    let favourite = state
        .favourite_service
        .get(user_id, kind, target_id)
        .await
        .map_err(|e| match e {
            AppError::FavouriteNotFound(_) => AppError::validation(e.to_string()),
            other => other,
        })?;
    Ok(Json(ItemResponse::new(
        format!("Favourite {} found", kind.singular()),
        favourite,
    )))
}

/// Remove a favourite
#[utoipa::path(
    delete,
    path = "/users/{id}/favourites/{relation}/{target_id}",
    tag = "Favourites",
    params(
        ("id" = i32, Path, description = "User ID"),
        ("relation" = Catalog, Path, description = "films, characters, planets or species"),
        ("target_id" = i32, Path, description = "Entity ID")
    ),
    responses(
        (status = 200, description = "Remaining favourites of that kind", body = [CatalogItem]),
        (status = 404, description = "User not found or entity not a favourite")
    )
)]
pub async fn remove_favourite(
    State(state): State<AppState>,
    PathParams((user_id, kind, target_id)): PathParams<(i32, Catalog, i32)>,
) -> AppResult<Json<ListResponse<Vec<CatalogItem>>>> {
    let remaining = state
        .favourite_service
        .remove(user_id, kind, target_id)
        .await?;
    Ok(Json(ListResponse::new(
        format!("{} removed from favourites", kind.label()),
        remaining,
    )))
}
