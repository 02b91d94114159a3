//! Appointment availability and conflict resolution.
//!
//! Everything in this module is pure: handlers fetch the day's
//! appointments and time blocks, and the functions here decide which
//! slots are bookable and whether a proposed placement stands.
//!
//! Date/time convention: the wall-clock value a client picks is stored
//! verbatim as the UTC clock value. "10:00" becomes `T10:00:00Z` no
//! matter where the browser sits. No timezone conversion happens
//! anywhere in the system, and display code relies on that. Do not
//! "fix" this without migrating stored data.

mod availability;
mod conflict;
mod interval;
mod slots;

pub use availability::available_slots;
pub use conflict::{check_slot, SlotConflict};
pub use interval::Interval;
pub use slots::{generate_time_slots, parse_hhmm};

use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, Time};

/// Daily working window and slot granularity, as configured by the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    pub start_hour: i32,
    pub end_hour: i32,
    pub slot_interval_minutes: i32,
}

/// Strict `YYYY-MM-DD` parse.
pub fn parse_date(value: &str) -> Option<Date> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value, &format).ok()
}

/// The instant a slot starts at, under the verbatim-UTC convention.
pub fn slot_start(day: Date, time: Time) -> OffsetDateTime {
    day.with_time(time).assume_utc()
}

/// Half-open `[midnight, next midnight)` bounds of a day, for querying
/// the store.
pub fn day_bounds(day: Date) -> (OffsetDateTime, OffsetDateTime) {
    let start = day.midnight().assume_utc();
    (start, start + Duration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn parse_date_accepts_iso_days() {
        assert_eq!(parse_date("2025-06-10"), Some(date!(2025 - 06 - 10)));
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert_eq!(parse_date("2025-13-01"), None);
        assert_eq!(parse_date("10.06.2025"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn slot_start_is_verbatim_utc() {
        let start = slot_start(date!(2025 - 06 - 10), Time::from_hms(10, 0, 0).unwrap());
        assert_eq!(start, datetime!(2025-06-10 10:00 UTC));
    }

    #[test]
    fn day_bounds_are_half_open() {
        let (start, end) = day_bounds(date!(2025 - 06 - 10));
        assert_eq!(start, datetime!(2025-06-10 00:00 UTC));
        assert_eq!(end, datetime!(2025-06-11 00:00 UTC));
    }
}
