//! # Hire Scheduling & Availability Engine
//!
//! The sole owner of booking-conflict and eligibility logic. Every mutation
//! of a hire record runs through this service; handlers only translate HTTP
//! requests into calls here.
//!
//! ## Validation order for a new hire
//!
//! 1. the date is strictly in the future;
//! 2. the nanny exists;
//! 3. no non-canceled hire occupies the nanny on that calendar day;
//! 4. the nanny works on that weekday;
//! 5. the group does not exceed the nanny's group size;
//! 6. every child belongs to the requesting parent and is within the
//!    nanny's accepted age range (inclusive).
//!
//! The first failing check wins and produces the error the caller sees.

use std::sync::Arc;

use serde::Serialize;
use time::{Date, OffsetDateTime};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Hire, HireChanges, HireStatus, Nanny};
use crate::services::age::age_today;
use crate::stores::{ChildDirectory, HireStore, NannyDirectory};
use crate::utils::month::{month_bounds, parse_month};

/// Payload for a new hire request, already authenticated and parsed.
#[derive(Debug, Clone)]
pub struct NewHire {
    pub nanny_id: Uuid,
    pub children: Vec<Uuid>,
    pub date: Date,
}

/// One page of a nanny's hires for a month, with pagination metadata.
#[derive(Debug, Serialize)]
pub struct MonthReport {
    pub data: Vec<Hire>,
    pub limit: u32,
    pub page: u32,
    pub pages: u64,
    pub total: u64,
}

/// The scheduling and availability engine.
pub struct HireService {
    hires: Arc<dyn HireStore>,
    nannies: Arc<dyn NannyDirectory>,
    children: Arc<dyn ChildDirectory>,
}

impl HireService {
    pub fn new(
        hires: Arc<dyn HireStore>,
        nannies: Arc<dyn NannyDirectory>,
        children: Arc<dyn ChildDirectory>,
    ) -> Self {
        Self {
            hires,
            nannies,
            children,
        }
    }

    /// Validates and persists a new hire for the requesting parent.
    #[instrument(skip(self, request), fields(nanny_id = %request.nanny_id))]
    pub async fn create(&self, parent_id: Uuid, request: NewHire) -> AppResult<Hire> {
        verify_date(request.date)?;
        let nanny = self
            .check_nanny_availability(request.nanny_id, request.date, None)
            .await?;
        self.verify_children(&nanny, &request.children, parent_id)
            .await?;

        let hire = Hire {
            id: Uuid::new_v4(),
            parent_id,
            nanny_id: request.nanny_id,
            children: request.children,
            date: request.date,
            status: HireStatus::Scheduled,
        };
        self.hires.insert(&hire).await?;
        info!(hire_id = %hire.id, date = %hire.date, "Hire scheduled");
        Ok(hire)
    }

    /// Fetches a single hire.
    pub async fn get(&self, hire_id: Uuid) -> AppResult<Hire> {
        self.hires
            .find(hire_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No hire with such id".into()))
    }

    /// Changes the date and/or the children of a scheduled hire, re-running
    /// the availability and eligibility checks for whatever changed.
    #[instrument(skip(self, changes), fields(hire_id = %hire_id))]
    pub async fn update(&self, hire_id: Uuid, changes: HireChanges) -> AppResult<Hire> {
        let hire = match self.hires.find(hire_id).await? {
            Some(hire) if !hire.status.is_terminal() => hire,
            // A missing hire and a terminal one get the same answer: nothing
            // here can be modified.
            _ => {
                return Err(AppError::Validation(
                    "Hire is not available for modification".into(),
                ));
            }
        };

        let nanny = if let Some(date) = changes.date {
            verify_date(date)?;
            // The occupancy check skips the hire being updated, so moving a
            // hire to its own current date is not a conflict.
            self.check_nanny_availability(hire.nanny_id, date, Some(hire.id))
                .await?
        } else {
            self.nannies
                .find_one(hire.nanny_id)
                .await?
                .ok_or_else(|| AppError::Validation("No such nanny".into()))?
        };

        if let Some(children) = &changes.children {
            self.verify_children(&nanny, children, hire.parent_id)
                .await?;
        }

        let updated = self
            .hires
            .apply_changes(hire_id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("There is no hire with id {hire_id}")))?;
        info!(date = %updated.date, "Hire updated");
        Ok(updated)
    }

    /// Cancels a scheduled hire, freeing the nanny's day.
    pub async fn cancel(&self, hire_id: Uuid) -> AppResult<Hire> {
        self.transition(hire_id, HireStatus::Canceled).await
    }

    /// Marks a scheduled hire as completed.
    pub async fn close(&self, hire_id: Uuid) -> AppResult<Hire> {
        self.transition(hire_id, HireStatus::Completed).await
    }

    /// Paginated listing of a nanny's hires for one month of one year.
    #[instrument(skip(self), fields(nanny_id = %nanny_id))]
    pub async fn month_report(
        &self,
        nanny_id: Uuid,
        month: &str,
        year: i32,
        limit: u32,
        page: u32,
    ) -> AppResult<MonthReport> {
        let month = parse_month(month)
            .ok_or_else(|| AppError::Validation("Invalid month provided".into()))?;
        let (start, end) = month_bounds(year, month)
            .ok_or_else(|| AppError::Validation("Invalid year provided".into()))?;
        if limit == 0 || page == 0 {
            return Err(AppError::Validation(
                "limit and page must be positive".into(),
            ));
        }

        // u64 arithmetic: a huge page number is a valid request that must
        // yield an empty page, not an overflow
        let offset = u64::from(page - 1) * u64::from(limit);
        let (data, total) = self
            .hires
            .month_page(nanny_id, start, end, limit, offset)
            .await?;
        debug!(total, "Month report assembled");

        Ok(MonthReport {
            data,
            limit,
            page,
            pages: total.div_ceil(u64::from(limit)),
            total,
        })
    }

    /// Moves a hire into a terminal status. Only a scheduled hire may leave
    /// its status; repeated or crossing transitions are rejected.
    async fn transition(&self, hire_id: Uuid, target: HireStatus) -> AppResult<Hire> {
        let hire = self
            .hires
            .find(hire_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("There is no hire with id {hire_id}")))?;
        if hire.status.is_terminal() {
            return Err(AppError::Validation(format!(
                "Hire is already {}",
                hire.status
            )));
        }

        let updated = self
            .hires
            .set_status(hire_id, target)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("There is no hire with id {hire_id}")))?;
        info!(hire_id = %hire_id, status = %target, "Hire transitioned");
        Ok(updated)
    }

    /// Resolves the nanny and checks that she is free and working on `date`.
    async fn check_nanny_availability(
        &self,
        nanny_id: Uuid,
        date: Date,
        exclude: Option<Uuid>,
    ) -> AppResult<Nanny> {
        let nanny = self
            .nannies
            .find_one(nanny_id)
            .await?
            .ok_or_else(|| AppError::Validation("No such nanny".into()))?;

        if self.hires.is_day_booked(nanny_id, date, exclude).await? {
            return Err(AppError::Conflict("This day is not available".into()));
        }

        let weekday = date.weekday();
        if !nanny.workdays.allows(weekday) {
            return Err(AppError::Validation(format!(
                "The nanny is not working on {weekday}"
            )));
        }
        Ok(nanny)
    }

    /// Checks group size, ownership and the nanny's accepted age range.
    ///
    /// Ownership and age failures share one coarse message on purpose; the
    /// response does not say which child failed.
    async fn verify_children(
        &self,
        nanny: &Nanny,
        children: &[Uuid],
        parent_id: Uuid,
    ) -> AppResult<()> {
        if children.is_empty() {
            return Err(AppError::Validation("At least one child is required".into()));
        }
        if children.len() > nanny.group_size as usize {
            return Err(AppError::Validation(format!(
                "The group of children cannot exceed {} kids",
                nanny.group_size
            )));
        }

        let own_children = self.children.find_children_by_parent(parent_id).await?;
        let all_eligible = children.iter().all(|child_id| {
            own_children
                .iter()
                .find(|own| own.id == *child_id)
                .is_some_and(|own| {
                    let age = age_today(own.birthdate);
                    age >= nanny.child_min_age && age <= nanny.child_max_age
                })
        });

        if !all_eligible {
            return Err(AppError::Validation(
                "One or more children do not match the parent \
                 or do not meet the age requirements of the nanny"
                    .into(),
            ));
        }
        Ok(())
    }
}

/// The service day must be strictly in the future; same-day bookings are
/// rejected along with past dates.
fn verify_date(date: Date) -> AppResult<()> {
    if date <= OffsetDateTime::now_utc().date() {
        return Err(AppError::Validation("The date must be in the future".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Duration, Weekday};

    use crate::models::{Child, Workdays};
    use crate::stores::memory::{MemoryChildDirectory, MemoryHireStore, MemoryNannyDirectory};

    struct Fixture {
        service: HireService,
        nannies: Arc<MemoryNannyDirectory>,
        children: Arc<MemoryChildDirectory>,
    }

    fn fixture() -> Fixture {
        let hires = Arc::new(MemoryHireStore::new());
        let nannies = Arc::new(MemoryNannyDirectory::new());
        let children = Arc::new(MemoryChildDirectory::new());
        let service = HireService::new(
            hires,
            Arc::clone(&nannies) as Arc<dyn NannyDirectory>,
            Arc::clone(&children) as Arc<dyn ChildDirectory>,
        );
        Fixture {
            service,
            nannies,
            children,
        }
    }

    fn weekday_nanny(workday: Weekday) -> Nanny {
        Nanny {
            id: Uuid::new_v4(),
            first_name: "Mary".into(),
            last_name: "Poppins".into(),
            workdays: Workdays {
                monday: workday == Weekday::Monday,
                tuesday: workday == Weekday::Tuesday,
                wednesday: workday == Weekday::Wednesday,
                thursday: workday == Weekday::Thursday,
                friday: workday == Weekday::Friday,
                saturday: workday == Weekday::Saturday,
                sunday: workday == Weekday::Sunday,
            },
            group_size: 3,
            child_min_age: 2,
            child_max_age: 10,
        }
    }

    fn any_day_nanny() -> Nanny {
        Nanny {
            workdays: Workdays {
                monday: true,
                tuesday: true,
                wednesday: true,
                thursday: true,
                friday: true,
                saturday: true,
                sunday: true,
            },
            ..weekday_nanny(Weekday::Monday)
        }
    }

    fn today() -> Date {
        OffsetDateTime::now_utc().date()
    }

    /// First future date falling on the given weekday.
    fn next(weekday: Weekday) -> Date {
        let mut date = today() + Duration::days(1);
        while date.weekday() != weekday {
            date += Duration::days(1);
        }
        date
    }

    /// Birthdate making a child exactly `age` years old today.
    fn birthdate_for_age(age: i32) -> Date {
        let now = today();
        now.replace_year(now.year() - age)
            .unwrap_or_else(|_| Date::from_calendar_date(now.year() - age, now.month(), 28).unwrap())
    }

    fn child_of(parent_id: Uuid, age: i32) -> Child {
        Child {
            id: Uuid::new_v4(),
            parent_id,
            name: "Jane".into(),
            birthdate: birthdate_for_age(age),
        }
    }

    fn assert_validation(result: AppResult<Hire>, fragment: &str) {
        match result {
            Err(AppError::Validation(msg)) => {
                assert!(msg.contains(fragment), "unexpected message: {msg}")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejects_past_and_same_day_dates() {
        let fx = fixture();
        let nanny = any_day_nanny();
        fx.nannies.insert(nanny.clone());
        let child = child_of(Uuid::new_v4(), 5);

        for date in [today(), today() - Duration::days(30)] {
            let result = fx
                .service
                .create(
                    child.parent_id,
                    NewHire {
                        nanny_id: nanny.id,
                        children: vec![child.id],
                        date,
                    },
                )
                .await;
            assert_validation(result, "must be in the future");
        }
    }

    #[tokio::test]
    async fn rejects_unknown_nanny() {
        let fx = fixture();
        let result = fx
            .service
            .create(
                Uuid::new_v4(),
                NewHire {
                    nanny_id: Uuid::new_v4(),
                    children: vec![Uuid::new_v4()],
                    date: today() + Duration::days(1),
                },
            )
            .await;
        assert_validation(result, "No such nanny");
    }

    #[tokio::test]
    async fn rejects_double_booking_until_canceled() {
        let fx = fixture();
        let nanny = any_day_nanny();
        fx.nannies.insert(nanny.clone());
        let parent_id = Uuid::new_v4();
        let child = child_of(parent_id, 5);
        fx.children.insert(child.clone());

        let date = today() + Duration::days(3);
        let request = NewHire {
            nanny_id: nanny.id,
            children: vec![child.id],
            date,
        };

        let first = fx.service.create(parent_id, request.clone()).await.unwrap();
        assert_eq!(first.status, HireStatus::Scheduled);

        // same nanny, same day: conflict
        let second = fx.service.create(parent_id, request.clone()).await;
        assert!(matches!(second, Err(AppError::Conflict(_))));

        // same nanny, another day: fine
        fx.service
            .create(
                parent_id,
                NewHire {
                    date: date + Duration::days(1),
                    ..request.clone()
                },
            )
            .await
            .unwrap();

        // another nanny, same day: fine
        let other_nanny = any_day_nanny();
        fx.nannies.insert(other_nanny.clone());
        fx.service
            .create(
                parent_id,
                NewHire {
                    nanny_id: other_nanny.id,
                    ..request.clone()
                },
            )
            .await
            .unwrap();

        // canceling the first hire frees the day again
        fx.service.cancel(first.id).await.unwrap();
        fx.service.create(parent_id, request).await.unwrap();
    }

    #[tokio::test]
    async fn rejects_non_working_weekday_naming_it() {
        let fx = fixture();
        let nanny = weekday_nanny(Weekday::Monday);
        fx.nannies.insert(nanny.clone());
        let parent_id = Uuid::new_v4();
        let child = child_of(parent_id, 5);
        fx.children.insert(child.clone());

        let result = fx
            .service
            .create(
                parent_id,
                NewHire {
                    nanny_id: nanny.id,
                    children: vec![child.id],
                    date: next(Weekday::Tuesday),
                },
            )
            .await;
        assert_validation(result, "not working on Tuesday");
    }

    #[tokio::test]
    async fn rejects_groups_over_capacity() {
        let fx = fixture();
        let nanny = any_day_nanny(); // group_size = 3
        fx.nannies.insert(nanny.clone());
        let parent_id = Uuid::new_v4();
        let ids: Vec<Uuid> = (0..4)
            .map(|_| {
                let child = child_of(parent_id, 5);
                fx.children.insert(child.clone());
                child.id
            })
            .collect();

        let result = fx
            .service
            .create(
                parent_id,
                NewHire {
                    nanny_id: nanny.id,
                    children: ids.clone(),
                    date: today() + Duration::days(1),
                },
            )
            .await;
        assert_validation(result, "cannot exceed 3 kids");

        // exactly at capacity is fine
        fx.service
            .create(
                parent_id,
                NewHire {
                    nanny_id: nanny.id,
                    children: ids[..3].to_vec(),
                    date: today() + Duration::days(1),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn age_range_boundaries_are_inclusive() {
        let fx = fixture();
        let nanny = any_day_nanny(); // accepts ages 2..=10
        fx.nannies.insert(nanny.clone());
        let parent_id = Uuid::new_v4();

        for (age, ok) in [(2, true), (10, true), (1, false), (11, false)] {
            let child = child_of(parent_id, age);
            fx.children.insert(child.clone());
            let result = fx
                .service
                .create(
                    parent_id,
                    NewHire {
                        nanny_id: nanny.id,
                        children: vec![child.id],
                        date: today() + Duration::days(1),
                    },
                )
                .await;
            if ok {
                let hire = result.unwrap();
                fx.service.cancel(hire.id).await.unwrap();
            } else {
                assert_validation(result, "age requirements");
            }
        }
    }

    #[tokio::test]
    async fn rejects_children_of_another_parent() {
        let fx = fixture();
        let nanny = any_day_nanny();
        fx.nannies.insert(nanny.clone());
        let stranger_child = child_of(Uuid::new_v4(), 5);
        fx.children.insert(stranger_child.clone());

        let result = fx
            .service
            .create(
                Uuid::new_v4(),
                NewHire {
                    nanny_id: nanny.id,
                    children: vec![stranger_child.id],
                    date: today() + Duration::days(1),
                },
            )
            .await;
        assert_validation(result, "do not match the parent");
    }

    #[tokio::test]
    async fn lifecycle_transitions() {
        let fx = fixture();
        let nanny = any_day_nanny();
        fx.nannies.insert(nanny.clone());
        let parent_id = Uuid::new_v4();
        let child = child_of(parent_id, 5);
        fx.children.insert(child.clone());

        let request = NewHire {
            nanny_id: nanny.id,
            children: vec![child.id],
            date: today() + Duration::days(1),
        };

        let hire = fx.service.create(parent_id, request.clone()).await.unwrap();
        assert_eq!(hire.status, HireStatus::Scheduled);

        let canceled = fx.service.cancel(hire.id).await.unwrap();
        assert_eq!(canceled.status, HireStatus::Canceled);

        // terminal hires accept no further transition
        assert_validation(fx.service.cancel(hire.id).await, "already canceled");
        assert_validation(fx.service.close(hire.id).await, "already canceled");

        let second = fx.service.create(parent_id, request).await.unwrap();
        let completed = fx.service.close(second.id).await.unwrap();
        assert_eq!(completed.status, HireStatus::Completed);
        assert_validation(fx.service.cancel(second.id).await, "already completed");
    }

    #[tokio::test]
    async fn transition_on_unknown_hire_is_not_found() {
        let fx = fixture();
        assert!(matches!(
            fx.service.cancel(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            fx.service.close(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_blocks_terminal_hires() {
        let fx = fixture();
        let nanny = any_day_nanny();
        fx.nannies.insert(nanny.clone());
        let parent_id = Uuid::new_v4();
        let child = child_of(parent_id, 5);
        fx.children.insert(child.clone());

        let hire = fx
            .service
            .create(
                parent_id,
                NewHire {
                    nanny_id: nanny.id,
                    children: vec![child.id],
                    date: today() + Duration::days(1),
                },
            )
            .await
            .unwrap();
        fx.service.close(hire.id).await.unwrap();

        let result = fx
            .service
            .update(
                hire.id,
                HireChanges {
                    date: Some(today() + Duration::days(2)),
                    children: None,
                },
            )
            .await;
        assert_validation(result, "not available for modification");
    }

    #[tokio::test]
    async fn update_revalidates_new_date_but_not_against_itself() {
        let fx = fixture();
        let nanny = weekday_nanny(Weekday::Monday);
        fx.nannies.insert(nanny.clone());
        let parent_id = Uuid::new_v4();
        let child = child_of(parent_id, 5);
        fx.children.insert(child.clone());

        let monday = next(Weekday::Monday);
        let hire = fx
            .service
            .create(
                parent_id,
                NewHire {
                    nanny_id: nanny.id,
                    children: vec![child.id],
                    date: monday,
                },
            )
            .await
            .unwrap();

        // moving to a non-working day fails
        let result = fx
            .service
            .update(
                hire.id,
                HireChanges {
                    date: Some(next(Weekday::Friday)),
                    children: None,
                },
            )
            .await;
        assert_validation(result, "not working on Friday");

        // re-submitting the current date does not collide with itself
        let unchanged = fx
            .service
            .update(
                hire.id,
                HireChanges {
                    date: Some(monday),
                    children: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(unchanged.date, monday);

        // moving onto another hire's day does collide
        let next_monday = monday + Duration::weeks(1);
        fx.service
            .create(
                parent_id,
                NewHire {
                    nanny_id: nanny.id,
                    children: vec![child.id],
                    date: next_monday,
                },
            )
            .await
            .unwrap();
        let result = fx
            .service
            .update(
                hire.id,
                HireChanges {
                    date: Some(next_monday),
                    children: None,
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn update_revalidates_children_with_existing_nanny() {
        let fx = fixture();
        let nanny = any_day_nanny();
        fx.nannies.insert(nanny.clone());
        let parent_id = Uuid::new_v4();
        let child = child_of(parent_id, 5);
        fx.children.insert(child.clone());
        let too_old = child_of(parent_id, 15);
        fx.children.insert(too_old.clone());

        let hire = fx
            .service
            .create(
                parent_id,
                NewHire {
                    nanny_id: nanny.id,
                    children: vec![child.id],
                    date: today() + Duration::days(1),
                },
            )
            .await
            .unwrap();

        let result = fx
            .service
            .update(
                hire.id,
                HireChanges {
                    date: None,
                    children: Some(vec![too_old.id]),
                },
            )
            .await;
        assert_validation(result, "age requirements");

        let updated = fx
            .service
            .update(
                hire.id,
                HireChanges {
                    date: None,
                    children: Some(vec![child.id]),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.children, vec![child.id]);
    }

    #[tokio::test]
    async fn month_report_filters_and_paginates() {
        let fx = fixture();
        let nanny = any_day_nanny();
        fx.nannies.insert(nanny.clone());
        let parent_id = Uuid::new_v4();
        let child = child_of(parent_id, 5);
        fx.children.insert(child.clone());

        // book the nanny on five consecutive days starting two months out,
        // so all five land inside one calendar month
        let mut start = today() + Duration::days(62);
        while start.day() > 20 {
            start += Duration::days(1);
        }
        for offset in 0..5 {
            fx.service
                .create(
                    parent_id,
                    NewHire {
                        nanny_id: nanny.id,
                        children: vec![child.id],
                        date: start + Duration::days(offset),
                    },
                )
                .await
                .unwrap();
        }
        // one hire in a different month, outside the report
        fx.service
            .create(
                parent_id,
                NewHire {
                    nanny_id: nanny.id,
                    children: vec![child.id],
                    date: start + Duration::days(40),
                },
            )
            .await
            .unwrap();

        let month = (start.month() as u8).to_string();
        let report = fx
            .service
            .month_report(nanny.id, &month, start.year(), 2, 1)
            .await
            .unwrap();
        assert_eq!(report.total, 5);
        assert_eq!(report.pages, 3); // ceil(5 / 2)
        assert_eq!(report.data.len(), 2);
        assert_eq!(report.data[0].date, start);

        let last_page = fx
            .service
            .month_report(nanny.id, &month, start.year(), 2, 3)
            .await
            .unwrap();
        assert_eq!(last_page.data.len(), 1);
        assert_eq!(last_page.data[0].date, start + Duration::days(4));

        // month names resolve too
        let by_name = fx
            .service
            .month_report(nanny.id, &start.month().to_string(), start.year(), 10, 1)
            .await
            .unwrap();
        assert_eq!(by_name.total, 5);
    }

    #[tokio::test]
    async fn month_report_far_past_the_data_is_an_empty_page() {
        let fx = fixture();
        let nanny = any_day_nanny();
        fx.nannies.insert(nanny.clone());
        let parent_id = Uuid::new_v4();
        let child = child_of(parent_id, 5);
        fx.children.insert(child.clone());

        let date = today() + Duration::days(1);
        fx.service
            .create(
                parent_id,
                NewHire {
                    nanny_id: nanny.id,
                    children: vec![child.id],
                    date,
                },
            )
            .await
            .unwrap();

        // largest possible page; the offset no longer fits in u32
        let report = fx
            .service
            .month_report(
                nanny.id,
                &(date.month() as u8).to_string(),
                date.year(),
                100,
                u32::MAX,
            )
            .await
            .unwrap();
        assert!(report.data.is_empty());
        assert_eq!(report.total, 1);
        assert_eq!(report.pages, 1);
    }

    #[tokio::test]
    async fn month_report_rejects_bad_descriptors() {
        let fx = fixture();
        let result = fx
            .service
            .month_report(Uuid::new_v4(), "smarch", 2026, 10, 1)
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = fx.service.month_report(Uuid::new_v4(), "5", 2026, 0, 1).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
