//! # Nanny Types
//!
//! The availability profile the hire engine validates against: weekly
//! working-day flags, the accepted child age range and the group-size cap.

use serde::{Deserialize, Serialize};
use time::Weekday;
use uuid::Uuid;

/// Weekly working-day flags for a nanny.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workdays {
    #[serde(default)]
    pub monday: bool,
    #[serde(default)]
    pub tuesday: bool,
    #[serde(default)]
    pub wednesday: bool,
    #[serde(default)]
    pub thursday: bool,
    #[serde(default)]
    pub friday: bool,
    #[serde(default)]
    pub saturday: bool,
    #[serde(default)]
    pub sunday: bool,
}

impl Workdays {
    /// Whether the nanny works on the given weekday.
    #[inline]
    pub fn allows(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Monday => self.monday,
            Weekday::Tuesday => self.tuesday,
            Weekday::Wednesday => self.wednesday,
            Weekday::Thursday => self.thursday,
            Weekday::Friday => self.friday,
            Weekday::Saturday => self.saturday,
            Weekday::Sunday => self.sunday,
        }
    }
}

/// Availability profile of a nanny, keyed by the nanny's user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nanny {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub workdays: Workdays,
    /// Maximum number of children accepted for a single day
    pub group_size: i32,
    /// Inclusive lower bound on a child's age in whole years
    pub child_min_age: i32,
    /// Inclusive upper bound on a child's age in whole years
    pub child_max_age: i32,
}
