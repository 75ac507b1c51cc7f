//! # In-Memory Stores
//!
//! `DashMap`-backed implementations of the persistence traits. These back
//! the engine unit tests and the integration-test harness; the production
//! composition in [`crate::app`] always uses the Postgres stores.

use async_trait::async_trait;
use dashmap::DashMap;
use time::Date;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Child, Hire, HireChanges, HireStatus, Nanny};
use crate::stores::{ChildDirectory, HireStore, NannyDirectory};

/// In-memory hire store.
#[derive(Debug, Default)]
pub struct MemoryHireStore {
    hires: DashMap<Uuid, Hire>,
}

impl MemoryHireStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn day_occupied(&self, nanny_id: Uuid, day: Date, exclude: Option<Uuid>) -> bool {
        self.hires.iter().any(|entry| {
            let hire = entry.value();
            hire.nanny_id == nanny_id
                && hire.date == day
                && hire.status != HireStatus::Canceled
                && Some(hire.id) != exclude
        })
    }
}

#[async_trait]
impl HireStore for MemoryHireStore {
    async fn insert(&self, hire: &Hire) -> AppResult<()> {
        // Mirrors the partial unique index the Postgres store relies on
        if self.day_occupied(hire.nanny_id, hire.date, None) {
            return Err(AppError::Conflict("This day is not available".into()));
        }
        self.hires.insert(hire.id, hire.clone());
        Ok(())
    }

    async fn find(&self, id: Uuid) -> AppResult<Option<Hire>> {
        Ok(self.hires.get(&id).map(|entry| entry.value().clone()))
    }

    async fn is_day_booked(
        &self,
        nanny_id: Uuid,
        day: Date,
        exclude: Option<Uuid>,
    ) -> AppResult<bool> {
        Ok(self.day_occupied(nanny_id, day, exclude))
    }

    async fn apply_changes(&self, id: Uuid, changes: &HireChanges) -> AppResult<Option<Hire>> {
        let Some(mut entry) = self.hires.get_mut(&id) else {
            return Ok(None);
        };
        let hire = entry.value_mut();
        if let Some(date) = changes.date {
            hire.date = date;
        }
        if let Some(children) = &changes.children {
            hire.children = children.clone();
        }
        Ok(Some(hire.clone()))
    }

    async fn set_status(&self, id: Uuid, status: HireStatus) -> AppResult<Option<Hire>> {
        let Some(mut entry) = self.hires.get_mut(&id) else {
            return Ok(None);
        };
        entry.value_mut().status = status;
        Ok(Some(entry.value().clone()))
    }

    async fn month_page(
        &self,
        nanny_id: Uuid,
        start: Date,
        end: Date,
        limit: u32,
        offset: u64,
    ) -> AppResult<(Vec<Hire>, u64)> {
        let mut in_month: Vec<Hire> = self
            .hires
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|hire| hire.nanny_id == nanny_id && hire.date >= start && hire.date <= end)
            .collect();
        // Date order with id as tiebreaker for stable pagination
        in_month.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

        let total = in_month.len() as u64;
        let page = in_month
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }
}

/// In-memory nanny directory.
#[derive(Debug, Default)]
pub struct MemoryNannyDirectory {
    nannies: DashMap<Uuid, Nanny>,
}

impl MemoryNannyDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, nanny: Nanny) {
        self.nannies.insert(nanny.id, nanny);
    }
}

#[async_trait]
impl NannyDirectory for MemoryNannyDirectory {
    async fn find_one(&self, id: Uuid) -> AppResult<Option<Nanny>> {
        Ok(self.nannies.get(&id).map(|entry| entry.value().clone()))
    }
}

/// In-memory child directory.
#[derive(Debug, Default)]
pub struct MemoryChildDirectory {
    children: DashMap<Uuid, Child>,
}

impl MemoryChildDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, child: Child) {
        self.children.insert(child.id, child);
    }
}

#[async_trait]
impl ChildDirectory for MemoryChildDirectory {
    async fn find_children_by_parent(&self, parent_id: Uuid) -> AppResult<Vec<Child>> {
        Ok(self
            .children
            .iter()
            .filter(|entry| entry.value().parent_id == parent_id)
            .map(|entry| entry.value().clone())
            .collect())
    }
}
