//! Repository layer - Data access abstraction
//!
//! Repositories borrow an open transaction from the Unit of Work, so every
//! statement of one service call shares the same commit or rollback.

pub(crate) mod base;
pub(crate) mod entities;
mod catalog_repository;
mod favourite_repository;
mod user_repository;

pub use catalog_repository::TxCatalogRepository;
pub use favourite_repository::TxFavouriteRepository;
pub use user_repository::TxUserRepository;
