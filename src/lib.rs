//! Star Wars API - users, catalog entities and per-user favourites
//!
//! A REST service over films, characters, planets and species, where each
//! user keeps four favourite lists.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and value types
//! - **services**: Application use cases, one transaction each
//! - **infra**: Database, migrations, repositories and the Unit of Work
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Response envelopes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 3000
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Catalog, CatalogItem, Favourite, FavouriteSummary, User};
pub use errors::{AppError, AppResult};
pub use infra::Database;
