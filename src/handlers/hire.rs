//! # Hire Handlers
//!
//! HTTP surface of the scheduling engine. Handlers translate requests into
//! engine calls: they check the caller's role, validate payload shape with
//! `validator`, and enrich the single-hire read with nanny and child summary
//! fields. All booking rules live in [`crate::services::hire`].

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::{debug, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::models::{AppState, Hire, HireChanges, HireStatus, Role};
use crate::services::age::age_today;
use crate::services::hire::NewHire;
use crate::utils::constant::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};

/// Body of `POST /hire`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHireRequest {
    pub nanny: Uuid,
    #[validate(length(min = 1, message = "children must not be empty"))]
    pub children: Vec<Uuid>,
    pub date: Date,
}

/// Body of `PUT /hire/{hireId}`; absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateHireRequest {
    pub date: Option<Date>,
    #[validate(length(min = 1, message = "children must not be empty"))]
    pub children: Option<Vec<Uuid>>,
}

/// Query string of `GET /hire/nanny/{nannyId}`.
#[derive(Debug, Deserialize, Validate)]
pub struct MonthQuery {
    /// 1-12 or an English month name
    pub month: String,
    pub year: i32,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = MAX_PAGE_LIMIT))]
    pub limit: u32,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

fn default_page() -> u32 {
    1
}

/// Nanny fields joined into the single-hire response.
#[derive(Debug, Serialize)]
pub struct NannySummary {
    pub id: Uuid,
    pub first_name: String,
}

/// Child fields joined into the single-hire response; age is derived from
/// the birthdate at read time.
#[derive(Debug, Serialize)]
pub struct ChildSummary {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
}

/// Response of `GET /hire/{hireId}`: the hire with related display fields.
#[derive(Debug, Serialize)]
pub struct HireDetails {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub nanny: Option<NannySummary>,
    pub children: Vec<ChildSummary>,
    pub date: Date,
    pub status: HireStatus,
}

fn require_parent(user: &AuthUser) -> AppResult<()> {
    if user.role != Role::Parent {
        return Err(AppError::Forbidden("Only a parent can manage hires"));
    }
    Ok(())
}

fn validated<T: Validate>(payload: T) -> AppResult<T> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(payload)
}

/// Requests a new hire for the authenticated parent.
///
/// POST /hire
///
/// # Returns
///
/// - `201 Created` with the persisted hire
/// - `400 Bad Request` - a booking rule failed, with the reason in the body
/// - `403 Forbidden` - caller is not a parent
/// - `409 Conflict` - the nanny already has a hire on that day
#[instrument(
    skip_all,
    fields(
        user_id = %user.user_id,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn create_hire(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateHireRequest>,
) -> AppResult<impl IntoResponse> {
    debug!("Processing hire creation request");
    require_parent(&user)?;
    let payload = validated(payload)?;

    let hire = state
        .hire_service
        .create(
            user.user_id,
            NewHire {
                nanny_id: payload.nanny,
                children: payload.children,
                date: payload.date,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(hire)))
}

/// Fetches one hire with nanny and child display fields joined in.
///
/// GET /hire/{hireId}
///
/// Any authenticated caller may read a hire.
#[instrument(
    skip_all,
    fields(
        user_id = %user.user_id,
        hire_id = %hire_id
    )
)]
pub async fn get_hire(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(hire_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let hire = state.hire_service.get(hire_id).await?;

    let nanny = state
        .nannies
        .find_one(hire.nanny_id)
        .await?
        .map(|nanny| NannySummary {
            id: nanny.id,
            first_name: nanny.first_name,
        });

    let own_children = state
        .children
        .find_children_by_parent(hire.parent_id)
        .await?;
    let children = hire
        .children
        .iter()
        .filter_map(|child_id| {
            own_children
                .iter()
                .find(|child| child.id == *child_id)
                .map(|child| ChildSummary {
                    id: child.id,
                    name: child.name.clone(),
                    age: age_today(child.birthdate),
                })
        })
        .collect();

    Ok(Json(HireDetails {
        id: hire.id,
        parent_id: hire.parent_id,
        nanny,
        children,
        date: hire.date,
        status: hire.status,
    }))
}

/// Changes the date and/or children of a scheduled hire.
///
/// PUT /hire/{hireId}
#[instrument(
    skip_all,
    fields(
        user_id = %user.user_id,
        hire_id = %hire_id
    )
)]
pub async fn update_hire(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(hire_id): Path<Uuid>,
    Json(payload): Json<UpdateHireRequest>,
) -> AppResult<Json<Hire>> {
    debug!("Processing hire update request");
    require_parent(&user)?;
    let payload = validated(payload)?;

    let hire = state
        .hire_service
        .update(
            hire_id,
            HireChanges {
                date: payload.date,
                children: payload.children,
            },
        )
        .await?;
    Ok(Json(hire))
}

/// Cancels a scheduled hire.
///
/// GET /hire/cancel/{hireId}
#[instrument(
    skip_all,
    fields(
        user_id = %user.user_id,
        hire_id = %hire_id
    )
)]
pub async fn cancel_hire(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(hire_id): Path<Uuid>,
) -> AppResult<Json<Hire>> {
    require_parent(&user)?;
    let hire = state.hire_service.cancel(hire_id).await?;
    Ok(Json(hire))
}

/// Marks a scheduled hire as completed.
///
/// GET /hire/close/{hireId}
#[instrument(
    skip_all,
    fields(
        user_id = %user.user_id,
        hire_id = %hire_id
    )
)]
pub async fn close_hire(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(hire_id): Path<Uuid>,
) -> AppResult<Json<Hire>> {
    require_parent(&user)?;
    let hire = state.hire_service.close(hire_id).await?;
    Ok(Json(hire))
}

/// Paginated listing of one nanny's hires for a month.
///
/// GET /hire/nanny/{nannyId}?month=&year=&limit=&page=
///
/// Restricted to nannies and admins.
#[instrument(
    skip_all,
    fields(
        user_id = %user.user_id,
        nanny_id = %nanny_id
    )
)]
pub async fn nanny_month_hires(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(nanny_id): Path<Uuid>,
    Query(query): Query<MonthQuery>,
) -> AppResult<impl IntoResponse> {
    if !matches!(user.role, Role::Nanny | Role::Admin) {
        return Err(AppError::Forbidden(
            "Only a nanny or an admin can view this listing",
        ));
    }
    let query = validated(query)?;

    let report = state
        .hire_service
        .month_report(nanny_id, &query.month, query.year, query.limit, query.page)
        .await?;
    Ok(Json(report))
}
