use crate::error::{AppError, AppResult};
use time::Date;

/// The five ordered steps of the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingStep {
    #[default]
    Pet,
    AppointmentType,
    Veterinarian,
    Schedule,
    Confirmation,
}

impl BookingStep {
    fn next(self) -> Option<Self> {
        match self {
            Self::Pet => Some(Self::AppointmentType),
            Self::AppointmentType => Some(Self::Veterinarian),
            Self::Veterinarian => Some(Self::Schedule),
            Self::Schedule => Some(Self::Confirmation),
            Self::Confirmation => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Self::Pet => None,
            Self::AppointmentType => Some(Self::Pet),
            Self::Veterinarian => Some(Self::AppointmentType),
            Self::Schedule => Some(Self::Veterinarian),
            Self::Confirmation => Some(Self::Schedule),
        }
    }

    fn missing_selection(self) -> &'static str {
        match self {
            Self::Pet => "select a pet to continue",
            Self::AppointmentType => "select an appointment type to continue",
            Self::Veterinarian => "select a veterinarian to continue",
            Self::Schedule => "select a date and time to continue",
            Self::Confirmation => "booking is already at the confirmation step",
        }
    }
}

/// All fields collected by a completed wizard, ready for the single
/// appointment-creation write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedBooking {
    pub pet_id: String,
    pub appointment_type: String,
    pub vet_name: String,
    pub clinic_name: String,
    pub date: Date,
    pub time: String,
}

/// Linear form-state machine for booking an appointment. Selections are
/// held in memory only; nothing is persisted until `confirm`, and `cancel`
/// discards everything.
#[derive(Debug, Clone, Default)]
pub struct BookingWizard {
    step: BookingStep,
    pet_id: Option<String>,
    appointment_type: Option<String>,
    vet_name: Option<String>,
    clinic_name: Option<String>,
    date: Option<Date>,
    time: Option<String>,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn select_pet(&mut self, pet_id: &str) {
        self.pet_id = non_empty(pet_id);
    }

    pub fn select_type(&mut self, appointment_type: &str) {
        self.appointment_type = non_empty(appointment_type);
    }

    pub fn select_veterinarian(&mut self, vet_name: &str, clinic_name: &str) {
        self.vet_name = non_empty(vet_name);
        self.clinic_name = non_empty(clinic_name);
    }

    pub fn select_slot(&mut self, date: Date, time: &str) {
        self.date = Some(date);
        self.time = non_empty(time);
    }

    pub fn can_proceed(&self) -> bool {
        match self.step {
            BookingStep::Pet => self.pet_id.is_some(),
            BookingStep::AppointmentType => self.appointment_type.is_some(),
            BookingStep::Veterinarian => self.vet_name.is_some() && self.clinic_name.is_some(),
            BookingStep::Schedule => self.date.is_some() && self.time.is_some(),
            BookingStep::Confirmation => true,
        }
    }

    pub fn advance(&mut self) -> AppResult<BookingStep> {
        if !self.can_proceed() {
            return Err(AppError::Validation(self.step.missing_selection().to_string()));
        }
        let next = self
            .step
            .next()
            .ok_or_else(|| AppError::Validation(self.step.missing_selection().to_string()))?;
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> Option<BookingStep> {
        let previous = self.step.previous()?;
        self.step = previous;
        Some(previous)
    }

    pub fn cancel(&mut self) {
        *self = Self::new();
    }

    pub fn confirm(&self) -> AppResult<ConfirmedBooking> {
        if self.step != BookingStep::Confirmation {
            return Err(AppError::Validation(
                "booking has not reached the confirmation step".to_string(),
            ));
        }

        match (
            &self.pet_id,
            &self.appointment_type,
            &self.vet_name,
            &self.clinic_name,
            self.date,
            &self.time,
        ) {
            (Some(pet_id), Some(appointment_type), Some(vet_name), Some(clinic_name), Some(date), Some(time)) => {
                Ok(ConfirmedBooking {
                    pet_id: pet_id.clone(),
                    appointment_type: appointment_type.clone(),
                    vet_name: vet_name.clone(),
                    clinic_name: clinic_name.clone(),
                    date,
                    time: time.clone(),
                })
            }
            _ => Err(AppError::Validation(
                "booking is missing a required selection".to_string(),
            )),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn filled_wizard() -> BookingWizard {
        let mut wizard = BookingWizard::new();
        wizard.select_pet("pet-1");
        wizard.advance().unwrap();
        wizard.select_type("Annual Check-up");
        wizard.advance().unwrap();
        wizard.select_veterinarian("Dr. Sarah Johnson", "PetCare Central");
        wizard.advance().unwrap();
        wizard.select_slot(date!(2026 - 09 - 01), "9:30 AM");
        wizard.advance().unwrap();
        wizard
    }

    #[test]
    fn first_step_requires_a_pet() {
        let mut wizard = BookingWizard::new();
        assert!(!wizard.can_proceed());
        assert!(wizard.advance().is_err());

        wizard.select_pet("pet-1");
        assert!(wizard.can_proceed());
        assert_eq!(wizard.advance().unwrap(), BookingStep::AppointmentType);
    }

    #[test]
    fn blank_selection_does_not_satisfy_a_step() {
        let mut wizard = BookingWizard::new();
        wizard.select_pet("   ");
        assert!(!wizard.can_proceed());
    }

    #[test]
    fn full_flow_reaches_confirmation() {
        let wizard = filled_wizard();
        assert_eq!(wizard.step(), BookingStep::Confirmation);

        let booking = wizard.confirm().unwrap();
        assert_eq!(
            booking,
            ConfirmedBooking {
                pet_id: "pet-1".to_string(),
                appointment_type: "Annual Check-up".to_string(),
                vet_name: "Dr. Sarah Johnson".to_string(),
                clinic_name: "PetCare Central".to_string(),
                date: date!(2026 - 09 - 01),
                time: "9:30 AM".to_string(),
            }
        );
    }

    #[test]
    fn confirm_before_final_step_is_refused() {
        let mut wizard = BookingWizard::new();
        wizard.select_pet("pet-1");
        assert!(wizard.confirm().is_err());
    }

    #[test]
    fn advance_without_schedule_is_refused() {
        let mut wizard = BookingWizard::new();
        wizard.select_pet("pet-1");
        wizard.advance().unwrap();
        wizard.select_type("Vaccination");
        wizard.advance().unwrap();
        wizard.select_veterinarian("Dr. Mike Chen", "Healthy Paws Clinic");
        wizard.advance().unwrap();

        let err = wizard.advance().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(wizard.step(), BookingStep::Schedule);
    }

    #[test]
    fn back_steps_towards_the_start() {
        let mut wizard = filled_wizard();
        assert_eq!(wizard.back(), Some(BookingStep::Schedule));
        assert_eq!(wizard.back(), Some(BookingStep::Veterinarian));

        let mut fresh = BookingWizard::new();
        assert_eq!(fresh.back(), None);
    }

    #[test]
    fn cancel_discards_every_selection() {
        let mut wizard = filled_wizard();
        wizard.cancel();

        assert_eq!(wizard.step(), BookingStep::Pet);
        assert!(!wizard.can_proceed());
        assert!(wizard.confirm().is_err());
    }
}
