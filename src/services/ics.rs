use chrono::Duration;

use crate::models::Booking;

/// Appointment length used for the calendar export, matching the half-hour
/// slot grid.
const APPOINTMENT_MINUTES: i64 = 30;

pub fn generate_ics(booking: &Booking, centre_name: &str) -> String {
    let dtstart = booking.date.format("%Y%m%dT%H%M%S").to_string();
    let dtend = (booking.date + Duration::minutes(APPOINTMENT_MINUTES))
        .format("%Y%m%dT%H%M%S")
        .to_string();
    let uid = format!("{}@motbook", booking.id);

    let summary = format!("MOT test at {centre_name}");
    let description = format!(
        "{} ({}) for {}",
        booking.vehicle_details, booking.registration, booking.customer_name
    );

    format!(
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:-//Motbook//MOT Booking//EN\r\n\
         BEGIN:VEVENT\r\n\
         UID:{uid}\r\n\
         DTSTAMP:{dtstart}\r\n\
         DTSTART:{dtstart}\r\n\
         DTEND:{dtend}\r\n\
         SUMMARY:{summary}\r\n\
         DESCRIPTION:{description}\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;
    use chrono::NaiveDateTime;

    #[test]
    fn test_generate_ics() {
        let booking = Booking {
            id: "1".to_string(),
            customer_name: "John Smith".to_string(),
            registration: "AB12CDE".to_string(),
            vehicle_details: "Ford Focus (2018)".to_string(),
            date: NaiveDateTime::parse_from_str("2025-04-15 09:00", "%Y-%m-%d %H:%M").unwrap(),
            status: BookingStatus::Confirmed,
            messages: vec![],
            unread_count: 0,
        };

        let ics = generate_ics(&booking, "Motbook Test Centre");
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("BEGIN:VEVENT"));
        assert!(ics.contains("DTSTART:20250415T090000"));
        assert!(ics.contains("DTEND:20250415T093000"));
        assert!(ics.contains("SUMMARY:MOT test at Motbook Test Centre"));
        assert!(ics.contains("DESCRIPTION:Ford Focus (2018) (AB12CDE) for John Smith"));
        assert!(ics.contains("UID:1@motbook"));
        assert!(ics.contains("END:VCALENDAR"));
    }
}
