use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{Booking, BookingStatus, Message};

/// One row in the staff inbox: a booking's conversation at a glance.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadSummary {
    pub booking_id: String,
    pub customer_name: String,
    pub registration: String,
    pub last_message: String,
    pub unread_count: u32,
    pub last_activity: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistryStats {
    pub total_bookings: usize,
    pub upcoming_bookings: usize,
    pub completed_mots: usize,
    pub cancelled_bookings: usize,
}

/// The in-memory collection of bookings the staff views operate on. A single
/// logical actor mutates it (behind the state mutex), so ordering is just
/// call order; the message sequence keeps appends totally ordered even when
/// two messages share a timestamp.
#[derive(Debug, Default)]
pub struct BookingRegistry {
    bookings: Vec<Booking>,
    next_message_seq: u64,
}

impl BookingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo dataset the service boots with, matching the staff dashboard
    /// and inbox fixtures.
    pub fn seeded() -> Self {
        let mut registry = Self::new();
        for booking in seed_bookings() {
            registry.insert(booking);
        }
        registry.next_message_seq = registry
            .bookings
            .iter()
            .map(|b| b.messages.len() as u64)
            .sum::<u64>()
            + 1;
        registry
    }

    pub fn all(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn insert(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// Case-insensitive substring match over customer name, registration and
    /// vehicle details, optionally narrowed to one status. Returns a view;
    /// the underlying set is untouched.
    pub fn filtered(&self, term: Option<&str>, status: Option<BookingStatus>) -> Vec<&Booking> {
        let term = term.unwrap_or("").to_lowercase();
        self.bookings
            .iter()
            .filter(|b| status.map_or(true, |s| b.status == s))
            .filter(|b| {
                term.is_empty()
                    || b.customer_name.to_lowercase().contains(&term)
                    || b.registration.to_lowercase().contains(&term)
                    || b.vehicle_details.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Removes exactly one booking. Absent ids are a silent no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.bookings.len();
        self.bookings.retain(|b| b.id != id);
        self.bookings.len() < before
    }

    /// Appends to a booking's thread. Blank content and unresolved ids are
    /// silently dropped. Message ids carry the sequence number, so two
    /// appends with colliding timestamps still order by append order.
    pub fn append_message(
        &mut self,
        booking_id: &str,
        content: &str,
        is_staff: bool,
        now: NaiveDateTime,
    ) -> Option<&Message> {
        if content.trim().is_empty() {
            return None;
        }
        let seq = self.next_message_seq;
        let booking = self.bookings.iter_mut().find(|b| b.id == booking_id)?;
        self.next_message_seq += 1;
        booking.messages.push(Message {
            id: format!("m{seq}"),
            content: content.to_string(),
            timestamp: now,
            is_staff,
        });
        booking.messages.last()
    }

    /// Zeroes the unread counter; calling it on an already-read thread or an
    /// absent id changes nothing.
    pub fn mark_read(&mut self, booking_id: &str) {
        if let Some(booking) = self.bookings.iter_mut().find(|b| b.id == booking_id) {
            booking.unread_count = 0;
        }
    }

    /// Customer-side lookup for the "find my booking" page. The reference is
    /// matched against booking ids after trimming, case-insensitively.
    pub fn find_by_reference(&self, reference: &str) -> Vec<&Booking> {
        let wanted = reference.trim().to_lowercase();
        self.bookings
            .iter()
            .filter(|b| b.id.to_lowercase() == wanted)
            .collect()
    }

    pub fn threads(&self) -> Vec<ThreadSummary> {
        let mut threads: Vec<ThreadSummary> = self
            .bookings
            .iter()
            .map(|b| ThreadSummary {
                booking_id: b.id.clone(),
                customer_name: b.customer_name.clone(),
                registration: b.registration.clone(),
                last_message: b
                    .messages
                    .last()
                    .map(|m| m.content.clone())
                    .unwrap_or_default(),
                unread_count: b.unread_count,
                last_activity: b.messages.last().map(|m| m.timestamp),
            })
            .collect();
        threads.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
        threads
    }

    pub fn stats(&self) -> RegistryStats {
        let count = |status: BookingStatus| {
            self.bookings.iter().filter(|b| b.status == status).count()
        };
        RegistryStats {
            total_bookings: self.bookings.len(),
            upcoming_bookings: count(BookingStatus::Confirmed),
            completed_mots: count(BookingStatus::Completed),
            cancelled_bookings: count(BookingStatus::Cancelled),
        }
    }
}

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap_or_default()
}

fn message(seq: u64, content: &str, timestamp: &str, is_staff: bool) -> Message {
    Message {
        id: format!("m{seq}"),
        content: content.to_string(),
        timestamp: dt(timestamp),
        is_staff,
    }
}

fn seed_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "1".to_string(),
            customer_name: "John Smith".to_string(),
            registration: "AB12CDE".to_string(),
            vehicle_details: "Ford Focus (2018)".to_string(),
            date: dt("2025-04-15 09:00"),
            status: BookingStatus::Confirmed,
            messages: vec![message(
                1,
                "Hello, I need to reschedule my MOT appointment from Friday to next week if possible.",
                "2025-04-02 14:30",
                false,
            )],
            unread_count: 1,
        },
        Booking {
            id: "2".to_string(),
            customer_name: "Sarah Johnson".to_string(),
            registration: "XY58ABC".to_string(),
            vehicle_details: "Volkswagen Golf (2020)".to_string(),
            date: dt("2025-04-16 10:30"),
            status: BookingStatus::Confirmed,
            messages: vec![
                message(
                    2,
                    "Hi there, I just wanted to book an MOT test for my Volkswagen Golf.",
                    "2025-04-01 09:10",
                    false,
                ),
                message(
                    3,
                    "Hello Sarah, I've booked you in for next Wednesday at 10:30am. Does that work for you?",
                    "2025-04-01 09:12",
                    true,
                ),
                message(4, "That's perfect, thanks for your help!", "2025-04-01 09:15", false),
            ],
            unread_count: 0,
        },
        Booking {
            id: "3".to_string(),
            customer_name: "Mike Williams".to_string(),
            registration: "LK70MNO".to_string(),
            vehicle_details: "Toyota Prius (2021)".to_string(),
            date: dt("2025-04-05 14:00"),
            status: BookingStatus::Completed,
            messages: vec![
                message(
                    5,
                    "I completed my MOT test yesterday, when will the report be available?",
                    "2025-03-29 16:40",
                    false,
                ),
                message(
                    6,
                    "Also, will I receive a notification when it's ready?",
                    "2025-03-29 16:41",
                    false,
                ),
            ],
            unread_count: 2,
        },
        Booking {
            id: "4".to_string(),
            customer_name: "Emma Brown".to_string(),
            registration: "PQ19RST".to_string(),
            vehicle_details: "Nissan Qashqai (2019)".to_string(),
            date: dt("2025-04-10 11:00"),
            status: BookingStatus::Cancelled,
            messages: vec![
                message(
                    7,
                    "I received the repair quote but I have some questions about it.",
                    "2025-03-28 11:15",
                    false,
                ),
                message(
                    8,
                    "Hi Emma, I'd be happy to answer any questions you have. What would you like to know?",
                    "2025-03-28 11:18",
                    true,
                ),
                message(9, "Is there any update on my repair quote?", "2025-03-28 11:20", false),
            ],
            unread_count: 0,
        },
    ]
}
