//! Favourite service - Per-user favourite films, planets, characters and species.
//!
//! Adding a favourite validates in a fixed order: the user must exist, then
//! the target, then the pair must not already be a favourite. The first
//! failing check decides the error.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Catalog, CatalogItem, Favourite, FavouriteSummary};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Favourite service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FavouriteService: Send + Sync {
    /// Favourite entities of one kind for a user
    async fn list(&self, user_id: i32, kind: Catalog) -> AppResult<Vec<CatalogItem>>;

    /// Mark `target_id` as a favourite of `user_id`
    async fn add(&self, user_id: i32, kind: Catalog, target_id: i32) -> AppResult<Favourite>;

    /// Relation row for one `(user, target)` pair
    async fn get(&self, user_id: i32, kind: Catalog, target_id: i32) -> AppResult<Favourite>;

    /// Remove a favourite and return the user's remaining favourites of that kind
    async fn remove(
        &self,
        user_id: i32,
        kind: Catalog,
        target_id: i32,
    ) -> AppResult<Vec<CatalogItem>>;

    /// All four favourite lists of a user
    async fn summary(&self, user_id: i32) -> AppResult<FavouriteSummary>;
}

/// Concrete implementation of FavouriteService using Unit of Work.
pub struct FavouriteManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> FavouriteManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn items(favourites: Vec<Favourite>) -> Vec<CatalogItem> {
    favourites.into_iter().map(|f| f.item).collect()
}

fn missing(kind: Catalog, target_id: i32) -> AppError {
    AppError::FavouriteNotFound(format!("{} {}", kind.label(), target_id))
}

#[async_trait]
impl<U: UnitOfWork> FavouriteService for FavouriteManager<U> {
    async fn list(&self, user_id: i32, kind: Catalog) -> AppResult<Vec<CatalogItem>> {
        crate::with_transaction!(self.uow, |ctx| {
            ctx.users().get(user_id).await?;
            Ok(items(ctx.favourites(kind).list_for_user(user_id).await?))
        })
    }

    async fn add(&self, user_id: i32, kind: Catalog, target_id: i32) -> AppResult<Favourite> {
        let result = crate::with_transaction!(self.uow, |ctx| {
            ctx.users().get(user_id).await?;
            let item = ctx.catalog(kind).get(target_id).await?;

            let favourites = ctx.favourites(kind);
            if favourites.find(user_id, target_id).await?.is_some() {
                return Err(AppError::DuplicateFavourite(kind.label().to_string()));
            }

            favourites.insert(user_id, item).await
        });

        match &result {
            Ok(favourite) => {
                tracing::info!(user_id, kind = %kind, target_id, id = favourite.id, "Favourite added")
            }
            Err(AppError::DuplicateFavourite(_)) => {
                tracing::warn!(user_id, kind = %kind, target_id, "Favourite already present")
            }
            Err(_) => {}
        }

        result
    }

    async fn get(&self, user_id: i32, kind: Catalog, target_id: i32) -> AppResult<Favourite> {
        crate::with_transaction!(self.uow, |ctx| {
            ctx.users().get(user_id).await?;
            ctx.favourites(kind)
                .find(user_id, target_id)
                .await?
                .ok_or_else(|| missing(kind, target_id))
        })
    }

    async fn remove(
        &self,
        user_id: i32,
        kind: Catalog,
        target_id: i32,
    ) -> AppResult<Vec<CatalogItem>> {
        let remaining = crate::with_transaction!(self.uow, |ctx| {
            ctx.users().get(user_id).await?;

            let favourites = ctx.favourites(kind);
            let favourite = favourites
                .find(user_id, target_id)
                .await?
                .ok_or_else(|| missing(kind, target_id))?;
            favourites.delete(&favourite).await?;

            Ok(items(favourites.list_for_user(user_id).await?))
        })?;

        tracing::info!(user_id, kind = %kind, target_id, "Favourite removed");
        Ok(remaining)
    }

    async fn summary(&self, user_id: i32) -> AppResult<FavouriteSummary> {
        crate::with_transaction!(self.uow, |ctx| {
            ctx.users().get(user_id).await?;

            let mut summary = FavouriteSummary::default();
            for kind in Catalog::ALL {
                summary.set(kind, items(ctx.favourites(kind).list_for_user(user_id).await?));
            }
            Ok(summary)
        })
    }
}
