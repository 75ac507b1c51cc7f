//! # Sitterly - Nanny Booking Backend
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the hire endpoints
//! - [`middleware`] - Bearer-token authentication middleware
//! - [`services`] - The scheduling engine, age calculator and JWT service
//! - [`stores`] - Persistence traits with Postgres and in-memory backends
//! - [`utils`] - Constants and month-descriptor parsing

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;

use std::env;
use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use jsonwebtoken::{DecodingKey, EncodingKey};
use secrecy::{ExposeSecret, SecretSlice};
use sqlx::PgPool;

use crate::handlers::{
    cancel_hire, close_hire, create_hire, get_hire, health_check, nanny_month_hires, update_hire,
};
use crate::middleware::auth_middleware;
use crate::models::AppState;
use crate::services::jwt::JwtService;
use crate::stores::pg::{PgChildDirectory, PgHireStore, PgNannyDirectory};
use crate::stores::{ChildDirectory, HireStore, NannyDirectory};

/// Creates an Axum router backed by Postgres stores.
///
/// # Environment Variables
///
/// - `JWT_SECRET` - Required for JWT token validation
///
/// # Returns
///
/// A configured Axum router with all application routes and middleware
pub fn app(db_pool: PgPool) -> Router {
    let jwt_keys = SecretSlice::from(
        env::var("JWT_SECRET")
            .expect("Env variable `JWT_SECRET` should be set")
            .into_bytes(),
    );
    let jwt_service = JwtService::new(
        EncodingKey::from_secret(jwt_keys.expose_secret()),
        DecodingKey::from_secret(jwt_keys.expose_secret()),
    );

    app_with_stores(
        Arc::new(PgHireStore::new(db_pool.clone())),
        Arc::new(PgNannyDirectory::new(db_pool.clone())),
        Arc::new(PgChildDirectory::new(db_pool)),
        jwt_service,
    )
}

/// Creates an Axum router over the given stores.
///
/// Production composition goes through [`app`]; tests inject in-memory
/// stores here and exercise the same router and middleware.
pub fn app_with_stores(
    hires: Arc<dyn HireStore>,
    nannies: Arc<dyn NannyDirectory>,
    children: Arc<dyn ChildDirectory>,
    jwt_service: JwtService,
) -> Router {
    let state = Arc::new(AppState::new(hires, nannies, children, jwt_service));

    let protected_routes = Router::new()
        .route("/hire", post(create_hire))
        .route("/hire/{hire_id}", get(get_hire).put(update_hire))
        .route("/hire/cancel/{hire_id}", get(cancel_hire))
        .route("/hire/close/{hire_id}", get(close_hire))
        .route("/hire/nanny/{nanny_id}", get(nanny_month_hires))
        .route_layer(from_fn_with_state(Arc::clone(&state), auth_middleware));

    let public_routes = Router::new().route("/health-check", get(health_check));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
