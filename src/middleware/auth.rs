//! # Authentication Middleware
//!
//! Validates JWT access tokens and provides caller context to protected
//! routes. Role checks happen in the handlers; this layer only establishes
//! who the caller is.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
};
use tracing::{debug, error, instrument, trace, warn};
use uuid::Uuid;

use crate::models::{AppState, Role};
use crate::services::jwt::Claims;

/// Authentication middleware for protecting routes
///
/// Extracts the `Authorization: Bearer <token>` header, validates the token
/// signature and expiration, and inserts an [`AuthUser`] into request
/// extensions for downstream handlers. Invalid or missing tokens answer
/// `401 Unauthorized`.
#[instrument(
    skip_all,
    fields(
        method = %req.method(),
        uri = %req.uri(),
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    trace!("Processing authentication middleware");

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let Some(auth_header) = auth_header else {
        warn!("Missing Authorization header");
        return Err(StatusCode::UNAUTHORIZED);
    };

    if !auth_header.starts_with("Bearer ") {
        warn!("Invalid Authorization header format");
        return Err(StatusCode::UNAUTHORIZED);
    }

    let token = auth_header.trim_start_matches("Bearer ");

    match state.jwt_service.validate_access_token(token) {
        Ok(claims) => {
            let user_id = Uuid::try_parse(&claims.sub).map_err(|e| {
                error!(error = %e, "Failed to parse user ID from token claims");
                StatusCode::UNAUTHORIZED
            })?;

            debug!(user_id = %user_id, role = %claims.role, "Authentication successful");
            req.extensions_mut().insert(AuthUser {
                user_id,
                role: claims.role,
                claims,
            });

            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(error = %e, "Token validation failed");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

/// Authenticated caller information available to handlers
///
/// Inserted into request extensions by [`auth_middleware`]; handlers extract
/// it with `Extension(user): Extension<AuthUser>` and gate on [`AuthUser::role`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Unique identifier for the authenticated user
    pub user_id: Uuid,
    /// Role granted at sign-in
    pub role: Role,
    /// JWT claims containing additional token metadata
    pub claims: Claims,
}
