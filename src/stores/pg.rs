//! # Postgres Stores
//!
//! sqlx-backed implementations of the persistence traits. The `hires` table
//! carries a partial unique index on `(nanny_id, date)` filtered to
//! non-canceled rows, so two concurrent creates for the same nanny and day
//! cannot both commit; the losing insert surfaces as a conflict error.

use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Child, Hire, HireChanges, HireStatus, Nanny, Workdays};
use crate::stores::{ChildDirectory, HireStore, NannyDirectory};

/// Maps a unique-index violation on the booking index to the conflict error
/// the engine reports for a double-booked day.
fn map_booking_err(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict("This day is not available".into())
        }
        _ => AppError::Db(e),
    }
}

/// Hire store backed by the `hires` table.
pub struct PgHireStore {
    pool: PgPool,
}

impl PgHireStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HireStore for PgHireStore {
    async fn insert(&self, hire: &Hire) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO hires (id, parent_id, nanny_id, children, date, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(hire.id)
        .bind(hire.parent_id)
        .bind(hire.nanny_id)
        .bind(&hire.children)
        .bind(hire.date)
        .bind(hire.status)
        .execute(&self.pool)
        .await
        .map_err(map_booking_err)?;
        Ok(())
    }

    async fn find(&self, id: Uuid) -> AppResult<Option<Hire>> {
        let hire = sqlx::query_as::<_, Hire>(
            r#"
            SELECT id, parent_id, nanny_id, children, date, status
            FROM hires
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(hire)
    }

    async fn is_day_booked(
        &self,
        nanny_id: Uuid,
        day: Date,
        exclude: Option<Uuid>,
    ) -> AppResult<bool> {
        let booked = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM hires
                WHERE nanny_id = $1
                  AND date = $2
                  AND status <> 'canceled'
                  AND ($3::uuid IS NULL OR id <> $3)
            )
            "#,
        )
        .bind(nanny_id)
        .bind(day)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;
        Ok(booked)
    }

    async fn apply_changes(&self, id: Uuid, changes: &HireChanges) -> AppResult<Option<Hire>> {
        let hire = sqlx::query_as::<_, Hire>(
            r#"
            UPDATE hires
            SET date = COALESCE($2, date),
                children = COALESCE($3, children)
            WHERE id = $1
            RETURNING id, parent_id, nanny_id, children, date, status
            "#,
        )
        .bind(id)
        .bind(changes.date)
        .bind(changes.children.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_booking_err)?;
        Ok(hire)
    }

    async fn set_status(&self, id: Uuid, status: HireStatus) -> AppResult<Option<Hire>> {
        let hire = sqlx::query_as::<_, Hire>(
            r#"
            UPDATE hires
            SET status = $2
            WHERE id = $1
            RETURNING id, parent_id, nanny_id, children, date, status
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;
        Ok(hire)
    }

    async fn month_page(
        &self,
        nanny_id: Uuid,
        start: Date,
        end: Date,
        limit: u32,
        offset: u64,
    ) -> AppResult<(Vec<Hire>, u64)> {
        let data = sqlx::query_as::<_, Hire>(
            r#"
            SELECT id, parent_id, nanny_id, children, date, status
            FROM hires
            WHERE nanny_id = $1 AND date >= $2 AND date <= $3
            ORDER BY date, id
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(nanny_id)
        .bind(start)
        .bind(end)
        .bind(i64::from(limit))
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM hires
            WHERE nanny_id = $1 AND date >= $2 AND date <= $3
            "#,
        )
        .bind(nanny_id)
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok((data, total as u64))
    }
}

#[derive(sqlx::FromRow)]
struct NannyRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    monday: bool,
    tuesday: bool,
    wednesday: bool,
    thursday: bool,
    friday: bool,
    saturday: bool,
    sunday: bool,
    group_size: i32,
    child_min_age: i32,
    child_max_age: i32,
}

impl From<NannyRow> for Nanny {
    fn from(row: NannyRow) -> Self {
        Nanny {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            workdays: Workdays {
                monday: row.monday,
                tuesday: row.tuesday,
                wednesday: row.wednesday,
                thursday: row.thursday,
                friday: row.friday,
                saturday: row.saturday,
                sunday: row.sunday,
            },
            group_size: row.group_size,
            child_min_age: row.child_min_age,
            child_max_age: row.child_max_age,
        }
    }
}

/// Nanny directory backed by the `nannies` table.
pub struct PgNannyDirectory {
    pool: PgPool,
}

impl PgNannyDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NannyDirectory for PgNannyDirectory {
    async fn find_one(&self, id: Uuid) -> AppResult<Option<Nanny>> {
        let row = sqlx::query_as::<_, NannyRow>(
            r#"
            SELECT id, first_name, last_name,
                   monday, tuesday, wednesday, thursday, friday, saturday, sunday,
                   group_size, child_min_age, child_max_age
            FROM nannies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Nanny::from))
    }
}

/// Child directory backed by the `children` table.
pub struct PgChildDirectory {
    pool: PgPool,
}

impl PgChildDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChildDirectory for PgChildDirectory {
    async fn find_children_by_parent(&self, parent_id: Uuid) -> AppResult<Vec<Child>> {
        let children = sqlx::query_as::<_, Child>(
            r#"
            SELECT id, parent_id, name, birthdate
            FROM children
            WHERE parent_id = $1
            "#,
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(children)
    }
}
