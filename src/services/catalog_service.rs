//! Catalog service - Films, characters, planets and species.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Catalog, CatalogItem};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Catalog service trait; every operation names the entity kind it targets.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List all rows of `kind` in insertion order
    async fn list(&self, kind: Catalog) -> AppResult<Vec<CatalogItem>>;

    /// Get one row by ID
    async fn get(&self, kind: Catalog, id: i32) -> AppResult<CatalogItem>;

    /// Create a row with a unique name
    async fn create(&self, kind: Catalog, name: String) -> AppResult<CatalogItem>;

    /// Replace the name of a row
    async fn rename(&self, kind: Catalog, id: i32, name: String) -> AppResult<CatalogItem>;

    /// Delete a row, returning it; favourites pointing at it go with it
    async fn delete(&self, kind: Catalog, id: i32) -> AppResult<CatalogItem>;
}

/// Concrete implementation of CatalogService using Unit of Work.
pub struct CatalogManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CatalogManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CatalogService for CatalogManager<U> {
    async fn list(&self, kind: Catalog) -> AppResult<Vec<CatalogItem>> {
        crate::with_transaction!(self.uow, |ctx| ctx.catalog(kind).list().await)
    }

    async fn get(&self, kind: Catalog, id: i32) -> AppResult<CatalogItem> {
        crate::with_transaction!(self.uow, |ctx| ctx.catalog(kind).get(id).await)
    }

    async fn create(&self, kind: Catalog, name: String) -> AppResult<CatalogItem> {
        let item = crate::with_transaction!(self.uow, |ctx| ctx.catalog(kind).create(name).await)?;
        tracing::info!(kind = %kind, id = item.id, "Catalog entry created");
        Ok(item)
    }

    async fn rename(&self, kind: Catalog, id: i32, name: String) -> AppResult<CatalogItem> {
        crate::with_transaction!(self.uow, |ctx| ctx.catalog(kind).rename(id, name).await)
    }

    async fn delete(&self, kind: Catalog, id: i32) -> AppResult<CatalogItem> {
        let item = crate::with_transaction!(self.uow, |ctx| ctx.catalog(kind).delete(id).await)?;
        tracing::info!(kind = %kind, id, "Catalog entry deleted");
        Ok(item)
    }
}
