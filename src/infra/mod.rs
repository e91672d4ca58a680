//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories (the persistence gateway)
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{TxCatalogRepository, TxFavouriteRepository, TxUserRepository};
pub use unit_of_work::{Persistence, TransactionContext, TxFuture, UnitOfWork};
