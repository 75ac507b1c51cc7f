//! # Persistence Seams
//!
//! The hire engine talks to persistence through these traits so the Postgres
//! implementations can be swapped for in-memory ones in tests. [`pg`] holds
//! the production sqlx stores, [`memory`] the `DashMap`-backed doubles.

pub mod memory;
pub mod pg;

use async_trait::async_trait;
use time::Date;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Child, Hire, HireChanges, HireStatus, Nanny};

/// Storage for hire records, the only mutable state in the system.
#[async_trait]
pub trait HireStore: Send + Sync {
    /// Persists a new hire. Fails with a conflict error if a non-canceled
    /// hire already occupies the nanny on that day.
    async fn insert(&self, hire: &Hire) -> AppResult<()>;

    async fn find(&self, id: Uuid) -> AppResult<Option<Hire>>;

    /// Whether a non-canceled hire other than `exclude` occupies the nanny
    /// on the given calendar day.
    async fn is_day_booked(&self, nanny_id: Uuid, day: Date, exclude: Option<Uuid>)
    -> AppResult<bool>;

    /// Applies the given field changes, returning the updated hire or `None`
    /// if the id does not exist.
    async fn apply_changes(&self, id: Uuid, changes: &HireChanges) -> AppResult<Option<Hire>>;

    /// Overwrites the status, returning the updated hire or `None` if the id
    /// does not exist. Transition legality is the engine's concern.
    async fn set_status(&self, id: Uuid, status: HireStatus) -> AppResult<Option<Hire>>;

    /// One page of a nanny's hires with `date` in `[start, end]` inclusive,
    /// ordered by date, plus the unpaginated total.
    async fn month_page(
        &self,
        nanny_id: Uuid,
        start: Date,
        end: Date,
        limit: u32,
        offset: u64,
    ) -> AppResult<(Vec<Hire>, u64)>;
}

/// Nanny availability directory: weekly working-day flags, accepted child
/// age range and group-size cap, keyed by nanny id.
#[async_trait]
pub trait NannyDirectory: Send + Sync {
    async fn find_one(&self, id: Uuid) -> AppResult<Option<Nanny>>;
}

/// Child ownership directory: the children a parent owns, with the
/// birthdates their ages are derived from.
#[async_trait]
pub trait ChildDirectory: Send + Sync {
    async fn find_children_by_parent(&self, parent_id: Uuid) -> AppResult<Vec<Child>>;
}
