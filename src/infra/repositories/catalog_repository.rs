//! Transaction-bound repository for films, characters, planets and species.

use sea_orm::DatabaseTransaction;

use super::base::{self, with_catalog_entity};
use crate::domain::{Catalog, CatalogItem};
use crate::errors::{AppResult, OptionExt};

/// Catalog repository for one entity kind, bound to a transaction.
pub struct TxCatalogRepository<'a> {
    txn: &'a DatabaseTransaction,
    kind: Catalog,
}

impl<'a> TxCatalogRepository<'a> {
    pub(crate) fn new(txn: &'a DatabaseTransaction, kind: Catalog) -> Self {
        Self { txn, kind }
    }

    /// All rows in insertion order
    pub async fn list(&self) -> AppResult<Vec<CatalogItem>> {
        with_catalog_entity!(self.kind, E => base::list_items::<E, _>(self.txn).await)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<CatalogItem>> {
        with_catalog_entity!(self.kind, E => base::find_item::<E, _>(self.txn, id).await)
    }

    /// Find by ID, failing with `NotFound` when absent
    pub async fn get(&self, id: i32) -> AppResult<CatalogItem> {
        self.find_by_id(id).await?.ok_or_not_found(self.kind.label())
    }

    pub async fn create(&self, name: String) -> AppResult<CatalogItem> {
        with_catalog_entity!(
            self.kind,
            E => base::insert_item::<E, _>(self.txn, self.kind, name).await
        )
    }

    pub async fn rename(&self, id: i32, name: String) -> AppResult<CatalogItem> {
        with_catalog_entity!(
            self.kind,
            E => base::rename_item::<E, _>(self.txn, self.kind, id, name).await
        )
    }

    /// Delete and return the removed row.
    ///
    /// Favourite rows pointing at it are removed by the foreign-key cascade.
    pub async fn delete(&self, id: i32) -> AppResult<CatalogItem> {
        with_catalog_entity!(
            self.kind,
            E => base::delete_item::<E, _>(self.txn, self.kind, id).await
        )
    }
}
