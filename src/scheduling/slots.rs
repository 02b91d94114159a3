use time::Time;

/// Enumerate candidate slot starts as `"HH:MM"` strings, from
/// `work_start_hour:00` up to and including `work_end_hour:00`, stepping
/// by `interval_minutes` with minute overflow carried into hours.
///
/// The closing boundary is emitted on purpose: whether a service still
/// fits before closing is the availability filter's decision, not ours.
/// A non-positive interval yields nothing; the settings write path
/// rejects such values before they ever reach here.
pub fn generate_time_slots(
    work_start_hour: i32,
    work_end_hour: i32,
    interval_minutes: i32,
) -> Vec<String> {
    if interval_minutes <= 0 {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut hour = work_start_hour;
    let mut minute = 0;

    while hour < work_end_hour || (hour == work_end_hour && minute == 0) {
        slots.push(format!("{:02}:{:02}", hour, minute));
        minute += interval_minutes;
        while minute >= 60 {
            minute -= 60;
            hour += 1;
        }
    }

    slots
}

/// Strict `"HH:MM"` parse: exactly two digits each side, 00–23 / 00–59.
pub fn parse_hhmm(value: &str) -> Option<Time> {
    let (h, m) = value.split_once(':')?;
    if h.len() != 2 || m.len() != 2 {
        return None;
    }
    if !h.chars().all(|c| c.is_ascii_digit()) || !m.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hour: u8 = h.parse().ok()?;
    let minute: u8 = m.parse().ok()?;
    Time::from_hms(hour, minute, 0).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_minute_grid_includes_closing_boundary() {
        let slots = generate_time_slots(10, 18, 30);
        assert_eq!(slots.first().map(String::as_str), Some("10:00"));
        assert_eq!(slots.last().map(String::as_str), Some("18:00"));
        assert_eq!(slots.len(), 17);
    }

    #[test]
    fn hour_grid() {
        let slots = generate_time_slots(10, 13, 60);
        assert_eq!(slots, vec!["10:00", "11:00", "12:00", "13:00"]);
    }

    #[test]
    fn interval_carry_crosses_hours() {
        let slots = generate_time_slots(10, 12, 45);
        assert_eq!(slots, vec!["10:00", "10:45", "11:30"]);
    }

    #[test]
    fn non_positive_interval_yields_nothing() {
        assert!(generate_time_slots(10, 18, 0).is_empty());
        assert!(generate_time_slots(10, 18, -15).is_empty());
    }

    #[test]
    fn empty_window_yields_only_the_boundary() {
        assert_eq!(generate_time_slots(10, 10, 30), vec!["10:00"]);
    }

    #[test]
    fn parse_hhmm_accepts_valid_times() {
        assert_eq!(parse_hhmm("10:00"), Time::from_hms(10, 0, 0).ok());
        assert_eq!(parse_hhmm("23:59"), Time::from_hms(23, 59, 0).ok());
        assert_eq!(parse_hhmm("00:00"), Time::from_hms(0, 0, 0).ok());
    }

    #[test]
    fn parse_hhmm_rejects_malformed_input() {
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("10:60"), None);
        assert_eq!(parse_hhmm("9:00"), None);
        assert_eq!(parse_hhmm("10-00"), None);
        assert_eq!(parse_hhmm("+1:00"), None);
        assert_eq!(parse_hhmm(""), None);
    }
}
