//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL: a local file-backed SQLite store
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/starwars.db?mode=rwc";

/// Marker that identifies an in-memory SQLite URL
pub const SQLITE_MEMORY_MARKER: &str = ":memory:";

/// Maximum pooled connections for file-backed or server databases
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Connection acquire timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 8;

// =============================================================================
// Response Messages
// =============================================================================

/// Message returned by the health endpoint when the database answers
pub const HEALTH_STATUS_HEALTHY: &str = "healthy";

/// Message returned by the health endpoint when the database does not answer
pub const HEALTH_STATUS_UNHEALTHY: &str = "unhealthy";
