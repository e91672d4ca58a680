//! Transaction-bound repository for the favourite relation tables.

use sea_orm::DatabaseTransaction;

use super::base::{self, with_favourite_entity};
use crate::domain::{Catalog, CatalogItem, Favourite};
use crate::errors::AppResult;

/// Favourite relation repository for one kind, bound to a transaction.
///
/// Existence checks on the user and target belong to the caller; this type
/// only reads and writes relation rows.
pub struct TxFavouriteRepository<'a> {
    txn: &'a DatabaseTransaction,
    kind: Catalog,
}

impl<'a> TxFavouriteRepository<'a> {
    pub(crate) fn new(txn: &'a DatabaseTransaction, kind: Catalog) -> Self {
        Self { txn, kind }
    }

    /// Favourites of `user_id`, joined with their targets
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Favourite>> {
        with_favourite_entity!(
            self.kind,
            F => base::list_favourites::<F, _>(self.txn, self.kind, user_id).await
        )
    }

    /// Relation row for the `(user_id, target_id)` pair
    pub async fn find(&self, user_id: i32, target_id: i32) -> AppResult<Option<Favourite>> {
        with_favourite_entity!(
            self.kind,
            F => base::find_favourite::<F, _>(self.txn, self.kind, user_id, target_id).await
        )
    }

    /// Insert a relation row; a unique-index hit is a duplicate favourite
    pub async fn insert(&self, user_id: i32, item: CatalogItem) -> AppResult<Favourite> {
        with_favourite_entity!(
            self.kind,
            F => base::insert_favourite::<F, _>(self.txn, self.kind, user_id, item).await
        )
    }

    /// Delete a relation row by its id
    pub async fn delete(&self, favourite: &Favourite) -> AppResult<()> {
        with_favourite_entity!(
            self.kind,
            F => base::delete_favourite::<F, _>(self.txn, favourite.id).await
        )
    }
}
