//! # Age Calculator
//!
//! Whole-years age from a birthdate, civil calendar rules: the age only
//! increments once the birthday has passed, so the result truncates rather
//! than rounds.

use time::{Date, OffsetDateTime};

/// Number of full years elapsed between `birthdate` and `today`.
///
/// A child born on July 1st is not a year older until July 1st comes around
/// again. A birthdate in the future yields a negative value; callers treat
/// that the same as any other out-of-range age.
pub fn age_in_years(birthdate: Date, today: Date) -> i32 {
    let mut years = today.year() - birthdate.year();
    if (today.month() as u8, today.day()) < (birthdate.month() as u8, birthdate.day()) {
        years -= 1;
    }
    years
}

/// Age in full years as of the current day (UTC).
pub fn age_today(birthdate: Date) -> i32 {
    age_in_years(birthdate, OffsetDateTime::now_utc().date())
}
