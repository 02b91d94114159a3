use thiserror::Error;
use uuid::Uuid;

use super::interval::Interval;

/// Why a proposed placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotConflict {
    #[error("The time is already taken by another appointment")]
    AlreadyTaken,
    #[error("The time is blocked")]
    Blocked,
}

/// Authoritative placement check, run at write time for both create and
/// update flows.
///
/// `busy` carries the id of each non-canceled appointment so an update
/// can pass its own id as `exclude`: a record never conflicts with
/// itself. Appointments are examined before blocks, so a slot that is
/// both taken and blocked reports [`SlotConflict::AlreadyTaken`].
pub fn check_slot(
    proposed: &Interval,
    busy: &[(Uuid, Interval)],
    blocks: &[Interval],
    exclude: Option<Uuid>,
) -> Result<(), SlotConflict> {
    for (id, occupied) in busy {
        if exclude == Some(*id) {
            continue;
        }
        if proposed.overlaps(occupied) {
            return Err(SlotConflict::AlreadyTaken);
        }
    }

    if blocks.iter().any(|block| proposed.overlaps(block)) {
        return Err(SlotConflict::Blocked);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use time::OffsetDateTime;

    fn span(start: OffsetDateTime, end: OffsetDateTime) -> Interval {
        Interval::new(start, end)
    }

    fn taken(start: OffsetDateTime, end: OffsetDateTime) -> (Uuid, Interval) {
        (Uuid::new_v4(), span(start, end))
    }

    #[test]
    fn free_slot_is_accepted() {
        let busy = vec![taken(
            datetime!(2025-06-10 10:00 UTC),
            datetime!(2025-06-10 11:00 UTC),
        )];
        let proposed = span(datetime!(2025-06-10 12:00 UTC), datetime!(2025-06-10 13:00 UTC));
        assert_eq!(check_slot(&proposed, &busy, &[], None), Ok(()));
    }

    #[test]
    fn overlap_with_appointment_is_rejected() {
        let busy = vec![taken(
            datetime!(2025-06-10 10:00 UTC),
            datetime!(2025-06-10 11:00 UTC),
        )];
        let proposed = span(datetime!(2025-06-10 10:30 UTC), datetime!(2025-06-10 11:30 UTC));
        assert_eq!(
            check_slot(&proposed, &busy, &[], None),
            Err(SlotConflict::AlreadyTaken)
        );
    }

    #[test]
    fn starting_exactly_at_an_appointments_end_is_accepted() {
        let busy = vec![taken(
            datetime!(2025-06-10 10:00 UTC),
            datetime!(2025-06-10 11:00 UTC),
        )];
        let proposed = span(datetime!(2025-06-10 11:00 UTC), datetime!(2025-06-10 12:00 UTC));
        assert_eq!(check_slot(&proposed, &busy, &[], None), Ok(()));
    }

    #[test]
    fn starting_one_minute_before_an_appointments_end_is_rejected() {
        let busy = vec![taken(
            datetime!(2025-06-10 10:00 UTC),
            datetime!(2025-06-10 11:00 UTC),
        )];
        let proposed = span(datetime!(2025-06-10 10:59 UTC), datetime!(2025-06-10 11:59 UTC));
        assert_eq!(
            check_slot(&proposed, &busy, &[], None),
            Err(SlotConflict::AlreadyTaken)
        );
    }

    #[test]
    fn overlap_with_block_is_rejected() {
        let blocks = vec![span(
            datetime!(2025-06-10 13:00 UTC),
            datetime!(2025-06-10 14:00 UTC),
        )];
        let proposed = span(datetime!(2025-06-10 13:30 UTC), datetime!(2025-06-10 14:30 UTC));
        assert_eq!(
            check_slot(&proposed, &[], &blocks, None),
            Err(SlotConflict::Blocked)
        );
    }

    #[test]
    fn appointment_conflict_wins_over_block_conflict() {
        let busy = vec![taken(
            datetime!(2025-06-10 13:00 UTC),
            datetime!(2025-06-10 14:00 UTC),
        )];
        let blocks = vec![span(
            datetime!(2025-06-10 13:00 UTC),
            datetime!(2025-06-10 14:00 UTC),
        )];
        let proposed = span(datetime!(2025-06-10 13:00 UTC), datetime!(2025-06-10 14:00 UTC));
        assert_eq!(
            check_slot(&proposed, &busy, &blocks, None),
            Err(SlotConflict::AlreadyTaken)
        );
    }

    #[test]
    fn updating_onto_ones_own_slot_is_accepted() {
        let own_id = Uuid::new_v4();
        let busy = vec![(
            own_id,
            span(datetime!(2025-06-10 10:00 UTC), datetime!(2025-06-10 11:00 UTC)),
        )];
        let proposed = span(datetime!(2025-06-10 10:30 UTC), datetime!(2025-06-10 11:30 UTC));

        assert_eq!(check_slot(&proposed, &busy, &[], Some(own_id)), Ok(()));
        assert_eq!(
            check_slot(&proposed, &busy, &[], None),
            Err(SlotConflict::AlreadyTaken)
        );
    }

    #[test]
    fn exclusion_does_not_hide_other_appointments() {
        let own_id = Uuid::new_v4();
        let busy = vec![
            (
                own_id,
                span(datetime!(2025-06-10 10:00 UTC), datetime!(2025-06-10 11:00 UTC)),
            ),
            taken(datetime!(2025-06-10 11:00 UTC), datetime!(2025-06-10 12:00 UTC)),
        ];
        let proposed = span(datetime!(2025-06-10 11:30 UTC), datetime!(2025-06-10 12:30 UTC));
        assert_eq!(
            check_slot(&proposed, &busy, &[], Some(own_id)),
            Err(SlotConflict::AlreadyTaken)
        );
    }
}
