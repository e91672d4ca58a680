//! HTTP request handlers.

pub mod catalog_handler;
pub mod favourite_handler;
pub mod user_handler;

pub use catalog_handler::catalog_routes;
pub use favourite_handler::favourite_routes;
pub use user_handler::user_routes;
