pub mod booking;
pub mod customer;
pub mod message;
pub mod report;
pub mod vehicle;

pub use booking::{Booking, BookingStatus};
pub use customer::CustomerDetails;
pub use message::{Message, MessageEvent};
pub use report::{Report, ReportStatus, ReportType};
pub use vehicle::{normalize_registration, VehicleRecord};
