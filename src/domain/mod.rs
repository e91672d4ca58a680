//! Domain layer - Core business entities
//!
//! Plain data types shared by the persistence gateway, services and
//! handlers. Nothing here touches the database or HTTP.

pub mod catalog;
pub mod favourite;
pub mod user;

pub use catalog::{Catalog, CatalogItem};
pub use favourite::{Favourite, FavouriteSummary};
pub use user::{NewUser, User, UserPatch};
