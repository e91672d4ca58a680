//! Unit of Work pattern implementation.
//!
//! Every service call runs its repository operations inside one database
//! transaction obtained here. The transaction is committed when the closure
//! returns `Ok` and rolled back when it returns `Err`; a transaction dropped
//! mid-flight (panic, cancelled request) is rolled back by SeaORM.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::repositories::{TxCatalogRepository, TxFavouriteRepository, TxUserRepository};
use crate::domain::Catalog;
use crate::errors::{AppError, AppResult};

/// Boxed future returned by transaction closures
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Note: This trait is not object-safe due to its generic method;
/// services take it as a type parameter.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Execute a closure within a transaction.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
#[derive(Clone, Copy)]
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get user repository for this transaction
    pub fn users(&self) -> TxUserRepository<'a> {
        TxUserRepository::new(self.txn)
    }

    /// Get the repository of one catalog kind for this transaction
    pub fn catalog(&self, kind: Catalog) -> TxCatalogRepository<'a> {
        TxCatalogRepository::new(self.txn, kind)
    }

    /// Get the favourite relation repository of one kind for this transaction
    pub fn favourites(&self, kind: Catalog) -> TxFavouriteRepository<'a> {
        TxFavouriteRepository::new(self.txn, kind)
    }
}

/// Concrete implementation of UnitOfWork
#[derive(Clone)]
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let outcome = f(TransactionContext::new(&txn)).await;

        match outcome {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Shorthand for running a block inside a Unit of Work transaction.
///
/// `?` and `return` inside the body leave the transaction closure with an
/// `AppError`, which rolls the transaction back.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(move |$ctx| {
            Box::pin(async move {
                let result: $crate::errors::AppResult<_> = $body;
                result
            })
        })
        .await
    };
}
