use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

/// The half-hour appointment labels offered every working day: a morning
/// block, a lunch gap, and an afternoon block. Every slot is always offered;
/// no capacity is tracked against existing bookings.
const DAY_SLOTS: [&str; 12] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30",
    "13:00", "13:30", "14:00", "14:30", "15:00", "15:30",
];

pub fn day_slots() -> &'static [&'static str] {
    &DAY_SLOTS
}

/// Whether an appointment can be placed on `date`: not in the past relative
/// to `today` (dates only, no time component) and not on a weekend.
pub fn is_date_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    if date < today {
        return false;
    }
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Parses a slot label into its time of day, but only if the label is one of
/// the offered slots.
pub fn slot_time(label: &str) -> Option<NaiveTime> {
    if !DAY_SLOTS.contains(&label) {
        return None;
    }
    NaiveTime::parse_from_str(label, "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_slots_ordered_with_lunch_gap() {
        let slots = day_slots();
        assert_eq!(slots.len(), 12);
        assert_eq!(slots.first(), Some(&"09:00"));
        assert_eq!(slots.last(), Some(&"15:30"));
        assert!(!slots.contains(&"12:00"));
        assert!(!slots.contains(&"12:30"));
        let mut sorted = slots.to_vec();
        sorted.sort();
        assert_eq!(sorted, slots);
    }

    #[test]
    fn test_past_date_not_selectable() {
        // 2025-06-16 is a Monday
        let today = date("2025-06-16");
        assert!(!is_date_selectable(date("2025-06-13"), today));
        assert!(!is_date_selectable(date("2024-06-16"), today));
    }

    #[test]
    fn test_today_selectable() {
        let today = date("2025-06-16");
        assert!(is_date_selectable(today, today));
    }

    #[test]
    fn test_weekend_not_selectable() {
        let today = date("2025-06-16");
        // 2025-06-21 is a Saturday, 2025-06-22 a Sunday
        assert!(!is_date_selectable(date("2025-06-21"), today));
        assert!(!is_date_selectable(date("2025-06-22"), today));
    }

    #[test]
    fn test_future_weekday_selectable() {
        let today = date("2025-06-16");
        for day in ["2025-06-17", "2025-06-18", "2025-06-19", "2025-06-20", "2025-06-23"] {
            assert!(is_date_selectable(date(day), today), "{day} should be selectable");
        }
    }

    #[test]
    fn test_slot_time_known_label() {
        assert_eq!(
            slot_time("10:00"),
            Some(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
        );
        assert_eq!(
            slot_time("15:30"),
            Some(NaiveTime::from_hms_opt(15, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_slot_time_rejects_unoffered() {
        // Valid time of day, but not on the grid
        assert_eq!(slot_time("12:00"), None);
        assert_eq!(slot_time("09:15"), None);
        assert_eq!(slot_time("9:00"), None);
        assert_eq!(slot_time(""), None);
    }
}
