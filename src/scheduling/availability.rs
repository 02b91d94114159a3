use time::{Date, Duration};

use super::interval::Interval;
use super::slots::{generate_time_slots, parse_hhmm};
use super::{slot_start, WorkingHours};

/// Compute the bookable `"HH:MM"` slots for one day.
///
/// `busy` holds the occupied intervals of the day's non-canceled
/// appointments across every service (the provider is a single
/// resource), `blocks` the time blocks overlapping the day. A candidate
/// survives when the service fits before closing and its whole span is
/// clear of both lists. Order follows the generator.
///
/// This list is advisory, for display; [`super::check_slot`] re-decides
/// at write time.
pub fn available_slots(
    duration_minutes: i32,
    day: Date,
    hours: WorkingHours,
    busy: &[Interval],
    blocks: &[Interval],
) -> Vec<String> {
    let closing = day.midnight().assume_utc() + Duration::hours(hours.end_hour as i64);
    let duration = Duration::minutes(duration_minutes as i64);

    generate_time_slots(hours.start_hour, hours.end_hour, hours.slot_interval_minutes)
        .into_iter()
        .filter(|slot| {
            let Some(time) = parse_hhmm(slot) else {
                return false;
            };
            let start = slot_start(day, time);
            let span = Interval::new(start, start + duration);

            span.end <= closing
                && !busy.iter().any(|b| span.overlaps(b))
                && !blocks.iter().any(|b| span.overlaps(b))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::check_slot;
    use time::macros::{date, datetime};
    use time::OffsetDateTime;
    use uuid::Uuid;

    const HOURS: WorkingHours = WorkingHours {
        start_hour: 10,
        end_hour: 18,
        slot_interval_minutes: 30,
    };

    fn span(start: OffsetDateTime, end: OffsetDateTime) -> Interval {
        Interval::new(start, end)
    }

    #[test]
    fn empty_day_offers_every_fitting_slot() {
        let slots = available_slots(60, date!(2025 - 06 - 10), HOURS, &[], &[]);
        assert_eq!(slots.first().map(String::as_str), Some("10:00"));
        assert_eq!(slots.last().map(String::as_str), Some("17:00"));
        assert_eq!(slots.len(), 15);
    }

    #[test]
    fn slot_ending_exactly_at_closing_is_kept() {
        let slots = available_slots(30, date!(2025 - 06 - 10), HOURS, &[], &[]);
        assert!(slots.contains(&"17:30".to_string()));
        assert!(!slots.contains(&"18:00".to_string()));
    }

    #[test]
    fn slot_overrunning_closing_by_a_minute_is_dropped() {
        let slots = available_slots(31, date!(2025 - 06 - 10), HOURS, &[], &[]);
        assert!(!slots.contains(&"17:30".to_string()));
        assert!(slots.contains(&"17:00".to_string()));
    }

    #[test]
    fn booked_hour_hides_every_slot_that_touches_it() {
        let busy = vec![span(
            datetime!(2025-06-10 10:00 UTC),
            datetime!(2025-06-10 11:00 UTC),
        )];
        let slots = available_slots(60, date!(2025 - 06 - 10), HOURS, &busy, &[]);
        assert!(!slots.contains(&"10:00".to_string()));
        assert!(!slots.contains(&"10:30".to_string()));
        assert!(slots.contains(&"11:00".to_string()));
        // a 60-minute service starting 09:30 would run into the booking,
        // but 09:30 is before opening anyway
        assert!(!slots.contains(&"09:30".to_string()));
    }

    #[test]
    fn slot_may_start_where_a_booking_ends() {
        let busy = vec![span(
            datetime!(2025-06-10 12:00 UTC),
            datetime!(2025-06-10 13:00 UTC),
        )];
        let slots = available_slots(30, date!(2025 - 06 - 10), HOURS, &busy, &[]);
        assert!(slots.contains(&"13:00".to_string()));
        assert!(!slots.contains(&"12:30".to_string()));
    }

    #[test]
    fn full_day_block_empties_the_list() {
        let blocks = vec![span(
            datetime!(2025-06-10 00:00 UTC),
            datetime!(2025-06-11 00:00 UTC),
        )];
        let slots = available_slots(60, date!(2025 - 06 - 10), HOURS, &[], &blocks);
        assert!(slots.is_empty());
    }

    #[test]
    fn lunch_break_hides_only_the_covered_slots() {
        let blocks = vec![span(
            datetime!(2025-06-10 13:00 UTC),
            datetime!(2025-06-10 14:00 UTC),
        )];
        let slots = available_slots(30, date!(2025 - 06 - 10), HOURS, &[], &blocks);
        assert!(!slots.contains(&"13:00".to_string()));
        assert!(!slots.contains(&"13:30".to_string()));
        assert!(!slots.contains(&"12:30".to_string()));
        assert!(slots.contains(&"12:00".to_string()));
        assert!(slots.contains(&"14:00".to_string()));
    }

    #[test]
    fn cancelled_appointments_never_reach_the_busy_list() {
        // The store filters CANCELED rows out before this function runs;
        // mirroring that filter here keeps the contract visible.
        let day_rows = [
            ("CANCELED", datetime!(2025-06-10 10:00 UTC)),
            ("CONFIRMED", datetime!(2025-06-10 15:00 UTC)),
        ];
        let busy: Vec<Interval> = day_rows
            .iter()
            .filter(|(status, _)| *status != "CANCELED")
            .map(|(_, start)| span(*start, *start + Duration::hours(1)))
            .collect();

        let slots = available_slots(60, date!(2025 - 06 - 10), HOURS, &busy, &[]);
        assert!(slots.contains(&"10:00".to_string()));
        assert!(!slots.contains(&"15:00".to_string()));
    }

    #[test]
    fn every_listed_slot_passes_the_authoritative_check() {
        let busy_pairs = vec![
            (
                Uuid::new_v4(),
                span(datetime!(2025-06-10 11:00 UTC), datetime!(2025-06-10 12:30 UTC)),
            ),
            (
                Uuid::new_v4(),
                span(datetime!(2025-06-10 16:00 UTC), datetime!(2025-06-10 17:00 UTC)),
            ),
        ];
        let blocks = vec![span(
            datetime!(2025-06-10 14:00 UTC),
            datetime!(2025-06-10 14:30 UTC),
        )];
        let busy: Vec<Interval> = busy_pairs.iter().map(|(_, s)| *s).collect();

        let slots = available_slots(45, date!(2025 - 06 - 10), HOURS, &busy, &blocks);
        assert!(!slots.is_empty());

        for slot in &slots {
            let time = parse_hhmm(slot).unwrap();
            let start = slot_start(date!(2025 - 06 - 10), time);
            let proposed = span(start, start + Duration::minutes(45));
            assert_eq!(
                check_slot(&proposed, &busy_pairs, &blocks, None),
                Ok(()),
                "slot {slot} listed as available but rejected by the validator"
            );
        }
    }
}
