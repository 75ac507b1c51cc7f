//! # Hire Types
//!
//! The central reservation entity and its status enum. `HireStatus`
//! corresponds to the PostgreSQL `hire_status` enum type, so status values
//! round-trip through sqlx without text conversion.

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

/// Lifecycle status of a hire.
///
/// A hire starts out `Scheduled`; `Completed` and `Canceled` are terminal.
/// The only legal transitions are `Scheduled -> Completed` and
/// `Scheduled -> Canceled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "hire_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum HireStatus {
    /// Initial state, set at creation
    Scheduled,
    /// The service day took place
    Completed,
    /// Called off by the parent
    Canceled,
}

impl HireStatus {
    /// Returns true once the hire can no longer be mutated.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, HireStatus::Completed | HireStatus::Canceled)
    }
}

impl std::fmt::Display for HireStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status_str = match self {
            HireStatus::Scheduled => "scheduled",
            HireStatus::Completed => "completed",
            HireStatus::Canceled => "canceled",
        };
        write!(f, "{status_str}")
    }
}

/// A single-day reservation of a nanny by a parent for a set of children.
///
/// `parent_id` is immutable after creation; `date` and `children` may change
/// through an update that re-runs the availability and eligibility checks.
/// `children` maps to a Postgres `uuid[]` column and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Hire {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub nanny_id: Uuid,
    pub children: Vec<Uuid>,
    pub date: Date,
    pub status: HireStatus,
}

/// Field changes accepted by a hire update. `None` leaves the field as is.
#[derive(Debug, Clone, Default)]
pub struct HireChanges {
    pub date: Option<Date>,
    pub children: Option<Vec<Uuid>>,
}
