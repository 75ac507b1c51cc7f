//! # Month Descriptor Parsing
//!
//! The monthly listing endpoint accepts the month either as a number (1-12)
//! or as an English month name ("may", "May", "MAY", "sep", "september").
//! A parsed month together with a year resolves to the inclusive first/last
//! day pair the reporting query filters on.

use time::{Date, Month};

/// Parses a month descriptor: a 1-12 number or an English month name,
/// case-insensitive, with the common three-letter abbreviation accepted.
pub fn parse_month(descriptor: &str) -> Option<Month> {
    let descriptor = descriptor.trim();
    if let Ok(number) = descriptor.parse::<u8>() {
        return Month::try_from(number).ok();
    }

    let name = descriptor.to_ascii_lowercase();
    let month = match name.as_str() {
        "january" | "jan" => Month::January,
        "february" | "feb" => Month::February,
        "march" | "mar" => Month::March,
        "april" | "apr" => Month::April,
        "may" => Month::May,
        "june" | "jun" => Month::June,
        "july" | "jul" => Month::July,
        "august" | "aug" => Month::August,
        "september" | "sep" => Month::September,
        "october" | "oct" => Month::October,
        "november" | "nov" => Month::November,
        "december" | "dec" => Month::December,
        _ => return None,
    };
    Some(month)
}

/// Returns the first and last calendar day of the given month, inclusive.
pub fn month_bounds(year: i32, month: Month) -> Option<(Date, Date)> {
    let first = Date::from_calendar_date(year, month, 1).ok()?;
    let last = Date::from_calendar_date(year, month, time::util::days_in_year_month(year, month))
        .ok()?;
    Some((first, last))
}
