//! # Application Constants
//!
//! Configuration constants controlling timeouts and pagination limits.

use std::time::Duration;

/// Expiration time for JWT access tokens
///
/// Access tokens are short-lived; re-issuance is handled by the external
/// credential service.
pub const ACCESS_TOKEN_EXPIRY: Duration = Duration::from_secs(15 * 60);

/// Upper bound on acquiring a connection from the database pool
///
/// Every persistence call is bounded by this timeout; an exhausted pool
/// surfaces as a retryable database error rather than a hung request.
pub const DB_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default page size for the monthly hire listing
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Maximum page size accepted for the monthly hire listing
pub const MAX_PAGE_LIMIT: u32 = 100;
