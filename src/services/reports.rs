use chrono::NaiveDateTime;

use crate::models::{Report, ReportStatus, ReportType};

/// In-memory register of test and inspection reports shown on the staff
/// dashboard. Same single-actor mutation model as the booking registry.
#[derive(Debug, Default)]
pub struct ReportBook {
    reports: Vec<Report>,
}

impl ReportBook {
    pub fn seeded() -> Self {
        Self {
            reports: seed_reports(),
        }
    }

    pub fn all(&self) -> &[Report] {
        &self.reports
    }

    /// Same three-field substring match as booking search, optionally
    /// narrowed to one report type.
    pub fn filtered(&self, term: Option<&str>, report_type: Option<ReportType>) -> Vec<&Report> {
        let term = term.unwrap_or("").to_lowercase();
        self.reports
            .iter()
            .filter(|r| report_type.map_or(true, |t| r.report_type == t))
            .filter(|r| {
                term.is_empty()
                    || r.customer_name.to_lowercase().contains(&term)
                    || r.registration.to_lowercase().contains(&term)
                    || r.vehicle_details.to_lowercase().contains(&term)
            })
            .collect()
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.reports.len();
        self.reports.retain(|r| r.id != id);
        self.reports.len() < before
    }

    /// Distinct registrations with at least one report on file.
    pub fn vehicles_serviced(&self) -> usize {
        let mut regs: Vec<&str> = self.reports.iter().map(|r| r.registration.as_str()).collect();
        regs.sort_unstable();
        regs.dedup();
        regs.len()
    }
}

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap_or_default()
}

fn seed_reports() -> Vec<Report> {
    vec![
        Report {
            id: "1".to_string(),
            customer_name: "John Smith".to_string(),
            registration: "AB12CDE".to_string(),
            vehicle_details: "Ford Focus (2018)".to_string(),
            report_type: ReportType::Mot,
            date: dt("2025-04-05 14:00"),
            status: ReportStatus::Completed,
        },
        Report {
            id: "2".to_string(),
            customer_name: "Sarah Johnson".to_string(),
            registration: "XY58ABC".to_string(),
            vehicle_details: "Volkswagen Golf (2020)".to_string(),
            report_type: ReportType::Mot,
            date: dt("2025-04-10 10:30"),
            status: ReportStatus::Pending,
        },
        Report {
            id: "3".to_string(),
            customer_name: "Mike Williams".to_string(),
            registration: "LK70MNO".to_string(),
            vehicle_details: "Toyota Prius (2021)".to_string(),
            report_type: ReportType::Diagnostic,
            date: dt("2025-04-01 11:15"),
            status: ReportStatus::Completed,
        },
        Report {
            id: "4".to_string(),
            customer_name: "Emma Brown".to_string(),
            registration: "PQ19RST".to_string(),
            vehicle_details: "Nissan Qashqai (2019)".to_string(),
            report_type: ReportType::Service,
            date: dt("2025-03-28 09:45"),
            status: ReportStatus::Completed,
        },
        Report {
            id: "5".to_string(),
            customer_name: "David Lee".to_string(),
            registration: "GH45IJK".to_string(),
            vehicle_details: "Audi A3 (2022)".to_string(),
            report_type: ReportType::Diagnostic,
            date: dt("2025-04-08 15:30"),
            status: ReportStatus::InProgress,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded() {
        let book = ReportBook::seeded();
        assert_eq!(book.all().len(), 5);
    }

    #[test]
    fn test_filter_by_type() {
        let book = ReportBook::seeded();
        assert_eq!(book.filtered(None, Some(ReportType::Mot)).len(), 2);
        assert_eq!(book.filtered(None, Some(ReportType::Diagnostic)).len(), 2);
        assert_eq!(book.filtered(None, Some(ReportType::Service)).len(), 1);
    }

    #[test]
    fn test_filter_by_term_and_type() {
        let book = ReportBook::seeded();
        let hits = book.filtered(Some("prius"), Some(ReportType::Diagnostic));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].customer_name, "Mike Williams");

        assert!(book.filtered(Some("prius"), Some(ReportType::Mot)).is_empty());
    }

    #[test]
    fn test_delete() {
        let mut book = ReportBook::seeded();
        assert!(book.delete("5"));
        assert!(!book.delete("5"));
        assert_eq!(book.all().len(), 4);
    }

    #[test]
    fn test_vehicles_serviced_distinct() {
        let book = ReportBook::seeded();
        assert_eq!(book.vehicles_serviced(), 5);
    }
}
