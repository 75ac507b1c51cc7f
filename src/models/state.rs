//! # Application State
//!
//! Shared state for the axum router: the hire engine, the profile
//! directories (kept separately for response enrichment) and the JWT
//! service. Stores are trait objects so tests can substitute in-memory
//! implementations for the Postgres ones.

use std::sync::Arc;

use crate::services::hire::HireService;
use crate::services::jwt::JwtService;
use crate::stores::{ChildDirectory, HireStore, NannyDirectory};

/// Shared application state passed to all request handlers.
pub struct AppState {
    /// The scheduling and availability engine
    pub hire_service: HireService,
    /// Nanny availability directory, used directly for response enrichment
    pub nannies: Arc<dyn NannyDirectory>,
    /// Child ownership directory, used directly for response enrichment
    pub children: Arc<dyn ChildDirectory>,
    /// JWT validation for the auth middleware
    pub jwt_service: JwtService,
}

impl AppState {
    /// Creates application state from the given stores and JWT service.
    pub fn new(
        hires: Arc<dyn HireStore>,
        nannies: Arc<dyn NannyDirectory>,
        children: Arc<dyn ChildDirectory>,
        jwt_service: JwtService,
    ) -> Self {
        Self {
            hire_service: HireService::new(hires, Arc::clone(&nannies), Arc::clone(&children)),
            nannies,
            children,
            jwt_service,
        }
    }
}
