use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::models::{CustomerDetails, VehicleRecord};
use crate::services::calendar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Vehicle,
    Slot,
    Details,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Vehicle => 1,
            WizardStep::Slot => 2,
            WizardStep::Details => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(WizardStep::Vehicle),
            2 => Some(WizardStep::Slot),
            3 => Some(WizardStep::Details),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum WizardError {
    #[error("that date is not available for booking")]
    DateNotSelectable,

    #[error("unknown time slot: {0}")]
    UnknownSlot(String),

    #[error("please complete all steps of the booking process")]
    MissingSelection,

    #[error("please provide all required contact information ({0} is missing)")]
    MissingContactField(&'static str),

    #[error("a submission is already in progress")]
    SubmissionInFlight,
}

/// Everything begin_submit hands to the submission endpoint once validation
/// passes. The chosen date and slot are already combined into one timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    pub vehicle: VehicleRecord,
    pub scheduled_at: NaiveDateTime,
    pub time_slot: String,
    pub customer: CustomerDetails,
}

/// The three-step booking flow. Selections accumulate as the customer moves
/// forward; a step is only reachable once every earlier step has its data.
///
/// A time slot is only meaningful paired with the date it was chosen for, so
/// re-selecting the date always discards the slot.
#[derive(Debug)]
pub struct BookingWizard {
    step: WizardStep,
    vehicle: Option<VehicleRecord>,
    date: Option<NaiveDate>,
    time_slot: Option<String>,
    customer: CustomerDetails,
    submitting: bool,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Vehicle,
            vehicle: None,
            date: None,
            time_slot: None,
            customer: CustomerDetails::default(),
            submitting: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn vehicle(&self) -> Option<&VehicleRecord> {
        self.vehicle.as_ref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time_slot(&self) -> Option<&str> {
        self.time_slot.as_deref()
    }

    pub fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Date and slot combined, present only when both halves are chosen.
    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        let date = self.date?;
        let time = calendar::slot_time(self.time_slot.as_deref()?)?;
        Some(date.and_time(time))
    }

    pub fn select_vehicle(&mut self, vehicle: VehicleRecord) {
        self.vehicle = Some(vehicle);
        self.step = WizardStep::Slot;
    }

    /// Re-selects the appointment day. Any previously chosen slot belonged to
    /// the old date and is discarded; the customer must pick again.
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), WizardError> {
        if !calendar::is_date_selectable(date, today) {
            return Err(WizardError::DateNotSelectable);
        }
        self.date = Some(date);
        self.time_slot = None;
        Ok(())
    }

    pub fn select_slot(
        &mut self,
        date: NaiveDate,
        label: &str,
        today: NaiveDate,
    ) -> Result<(), WizardError> {
        if !calendar::is_date_selectable(date, today) {
            return Err(WizardError::DateNotSelectable);
        }
        if calendar::slot_time(label).is_none() {
            return Err(WizardError::UnknownSlot(label.to_string()));
        }
        self.date = Some(date);
        self.time_slot = Some(label.to_string());
        self.step = WizardStep::Details;
        Ok(())
    }

    /// Manual step navigation. Moving to a step is allowed only once every
    /// earlier step has its data; otherwise the wizard stays put. Returns
    /// whether the step changed.
    pub fn jump_to_step(&mut self, target: WizardStep) -> bool {
        let reachable = match target {
            WizardStep::Vehicle => true,
            WizardStep::Slot => self.vehicle.is_some(),
            WizardStep::Details => self.vehicle.is_some() && self.scheduled_at().is_some(),
        };
        if reachable && target != self.step {
            self.step = target;
            return true;
        }
        false
    }

    pub fn update_customer(&mut self, customer: CustomerDetails) {
        self.customer = customer;
    }

    /// Validates the accumulated state and, if complete, marks a submission
    /// as in flight and returns the request for the external endpoint. The
    /// caller must call `finish_submit` once the endpoint resolves either
    /// way. Validation failures leave every selection untouched.
    pub fn begin_submit(&mut self) -> Result<BookingRequest, WizardError> {
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        let (vehicle, scheduled_at) = match (&self.vehicle, self.scheduled_at()) {
            (Some(v), Some(at)) => (v.clone(), at),
            _ => return Err(WizardError::MissingSelection),
        };
        if let Some(field) = self.customer.missing_field() {
            return Err(WizardError::MissingContactField(field));
        }

        self.submitting = true;
        Ok(BookingRequest {
            vehicle,
            scheduled_at,
            time_slot: self.time_slot.clone().unwrap_or_default(),
            customer: self.customer.clone(),
        })
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn ford_focus() -> VehicleRecord {
        VehicleRecord {
            registration: "AB12CDE".to_string(),
            make: "Ford".to_string(),
            model: "Focus".to_string(),
            year: "2018".to_string(),
            fuel_type: "Petrol".to_string(),
        }
    }

    fn jane() -> CustomerDetails {
        CustomerDetails {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "07000000000".to_string(),
            notes: String::new(),
        }
    }

    // 2025-06-16 is a Monday; 2025-06-23 the following Monday.
    const TODAY: &str = "2025-06-16";

    fn completed_wizard() -> BookingWizard {
        let mut wizard = BookingWizard::new();
        wizard.select_vehicle(ford_focus());
        wizard
            .select_slot(date("2025-06-23"), "10:00", date(TODAY))
            .unwrap();
        wizard.update_customer(jane());
        wizard
    }

    #[test]
    fn test_starts_on_vehicle_step() {
        let wizard = BookingWizard::new();
        assert_eq!(wizard.step(), WizardStep::Vehicle);
        assert!(wizard.vehicle().is_none());
        assert!(wizard.scheduled_at().is_none());
    }

    #[test]
    fn test_select_vehicle_advances() {
        let mut wizard = BookingWizard::new();
        wizard.select_vehicle(ford_focus());
        assert_eq!(wizard.step(), WizardStep::Slot);
    }

    #[test]
    fn test_select_slot_advances_and_combines() {
        let mut wizard = BookingWizard::new();
        wizard.select_vehicle(ford_focus());
        wizard
            .select_slot(date("2025-06-23"), "10:00", date(TODAY))
            .unwrap();
        assert_eq!(wizard.step(), WizardStep::Details);
        assert_eq!(
            wizard.scheduled_at(),
            Some(
                date("2025-06-23")
                    .and_hms_opt(10, 0, 0)
                    .unwrap()
            )
        );
    }

    #[test]
    fn test_new_date_clears_chosen_slot() {
        let mut wizard = completed_wizard();
        assert!(wizard.time_slot().is_some());
        wizard.select_date(date("2025-06-24"), date(TODAY)).unwrap();
        assert_eq!(wizard.time_slot(), None);
        assert!(wizard.scheduled_at().is_none());
    }

    #[test]
    fn test_select_date_rejects_weekend() {
        let mut wizard = BookingWizard::new();
        assert_eq!(
            wizard.select_date(date("2025-06-21"), date(TODAY)),
            Err(WizardError::DateNotSelectable)
        );
    }

    #[test]
    fn test_select_slot_rejects_unknown_label() {
        let mut wizard = BookingWizard::new();
        wizard.select_vehicle(ford_focus());
        let err = wizard
            .select_slot(date("2025-06-23"), "12:00", date(TODAY))
            .unwrap_err();
        assert_eq!(err, WizardError::UnknownSlot("12:00".to_string()));
        assert_eq!(wizard.step(), WizardStep::Slot);
    }

    #[test]
    fn test_jump_forward_blocked_without_data() {
        let mut wizard = BookingWizard::new();
        assert!(!wizard.jump_to_step(WizardStep::Slot));
        assert_eq!(wizard.step(), WizardStep::Vehicle);

        wizard.select_vehicle(ford_focus());
        assert!(!wizard.jump_to_step(WizardStep::Details));
        assert_eq!(wizard.step(), WizardStep::Slot);
    }

    #[test]
    fn test_jump_backward_always_allowed() {
        let mut wizard = completed_wizard();
        assert!(wizard.jump_to_step(WizardStep::Vehicle));
        assert_eq!(wizard.step(), WizardStep::Vehicle);
        // Data survives the jump, so forward is reachable again
        assert!(wizard.jump_to_step(WizardStep::Details));
    }

    #[test]
    fn test_submit_without_vehicle_is_missing_selection() {
        let mut wizard = BookingWizard::new();
        wizard.update_customer(jane());
        assert_eq!(wizard.begin_submit().unwrap_err(), WizardError::MissingSelection);
        // Customer state untouched by the failed submit
        assert_eq!(wizard.customer().name, "Jane Doe");
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn test_submit_without_slot_is_missing_selection() {
        let mut wizard = BookingWizard::new();
        wizard.select_vehicle(ford_focus());
        wizard.select_date(date("2025-06-23"), date(TODAY)).unwrap();
        wizard.update_customer(jane());
        assert_eq!(wizard.begin_submit().unwrap_err(), WizardError::MissingSelection);
    }

    #[test]
    fn test_submit_with_blank_email_reports_field() {
        let mut wizard = completed_wizard();
        let mut customer = jane();
        customer.email = "  ".to_string();
        wizard.update_customer(customer);
        assert_eq!(
            wizard.begin_submit().unwrap_err(),
            WizardError::MissingContactField("email")
        );
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn test_submit_succeeds_once_and_guards_repeat() {
        let mut wizard = completed_wizard();
        let request = wizard.begin_submit().unwrap();
        assert_eq!(request.vehicle.registration, "AB12CDE");
        assert_eq!(request.time_slot, "10:00");
        assert_eq!(
            request.scheduled_at,
            date("2025-06-23").and_hms_opt(10, 0, 0).unwrap()
        );

        // Second submit while the first is pending is ignored
        assert_eq!(wizard.begin_submit().unwrap_err(), WizardError::SubmissionInFlight);

        wizard.finish_submit();
        assert!(wizard.begin_submit().is_ok());
    }
}
