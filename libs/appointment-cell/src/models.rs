// libs/appointment-cell/src/models.rs
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use doctor_cell::models::{HealthProfessional, Professional, SharedProfessional};
use shared_models::error::{AppError, Result};
use shared_utils::validation::{
    is_blank, is_valid_mobile, is_valid_time_slot, validate_mobile, validate_non_blank,
    validate_time_slot,
};

// ==============================================================================
// CORE APPOINTMENT MODEL
// ==============================================================================

pub const APPOINTMENT_HEADER: &str = "=== Appointment Details ===";
pub const APPOINTMENT_FOOTER: &str = "===========================";

pub const DEFAULT_PATIENT_NAME: &str = "Unknown Patient";
pub const DEFAULT_PATIENT_MOBILE: &str = "0000000000";
pub const DEFAULT_TIME_SLOT: &str = "09:00";

/// A patient booked with a professional.
///
/// All four fields are valid for the lifetime of the value: `new` refuses
/// invalid input and the setters keep the previous value when handed one.
#[derive(Debug, Clone)]
pub struct Appointment {
    patient_name: String,
    patient_mobile: String,
    time_slot: String,
    selected_doctor: SharedProfessional,
}

impl Appointment {
    /// Checks run in order: name, mobile, time slot, doctor. Only the first
    /// failure is reported.
    pub fn new(
        patient_name: &str,
        patient_mobile: &str,
        time_slot: &str,
        selected_doctor: Option<SharedProfessional>,
    ) -> Result<Self> {
        validate_non_blank(patient_name, "Patient name cannot be empty")?;
        validate_mobile(patient_mobile, "Mobile must be 10 digits (e.g., 1234567890)")?;
        validate_time_slot(time_slot, "Time slot must be HH:mm (e.g., 08:30, 17:00)")?;
        let selected_doctor = selected_doctor
            .ok_or_else(|| AppError::validation("Selected doctor cannot be null"))?;

        Ok(Self {
            patient_name: patient_name.to_string(),
            patient_mobile: patient_mobile.to_string(),
            time_slot: time_slot.to_string(),
            selected_doctor,
        })
    }

    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    pub fn patient_mobile(&self) -> &str {
        &self.patient_mobile
    }

    pub fn time_slot(&self) -> &str {
        &self.time_slot
    }

    pub fn selected_doctor(&self) -> &SharedProfessional {
        &self.selected_doctor
    }

    pub fn set_patient_name(&mut self, patient_name: &str) -> bool {
        if is_blank(patient_name) {
            warn!("Error: Patient name cannot be empty");
            return false;
        }
        self.patient_name = patient_name.to_string();
        true
    }

    pub fn set_patient_mobile(&mut self, patient_mobile: &str) -> bool {
        if !is_valid_mobile(patient_mobile) {
            warn!("Error: Mobile must be 10 digits");
            return false;
        }
        self.patient_mobile = patient_mobile.to_string();
        true
    }

    pub fn set_time_slot(&mut self, time_slot: &str) -> bool {
        if !is_valid_time_slot(time_slot) {
            warn!("Error: Time slot must be HH:mm");
            return false;
        }
        self.time_slot = time_slot.to_string();
        true
    }

    pub fn set_selected_doctor(&mut self, selected_doctor: Option<SharedProfessional>) -> bool {
        match selected_doctor {
            Some(doctor) => {
                self.selected_doctor = doctor;
                true
            }
            None => {
                warn!("Error: Doctor cannot be null");
                false
            }
        }
    }

    /// Patient block followed by the bound professional's own rendering.
    pub fn render_details(&self) -> Vec<String> {
        let mut lines = vec![
            APPOINTMENT_HEADER.to_string(),
            format!("Patient Name: {}", self.patient_name),
            format!("Patient Mobile: {}", self.patient_mobile),
            format!("Preferred Time Slot: {}", self.time_slot),
            "Assigned Doctor Info:".to_string(),
        ];
        lines.extend(self.selected_doctor.render_details());
        lines.push(APPOINTMENT_FOOTER.to_string());
        lines
    }
}

impl Default for Appointment {
    fn default() -> Self {
        Self {
            patient_name: DEFAULT_PATIENT_NAME.to_string(),
            patient_mobile: DEFAULT_PATIENT_MOBILE.to_string(),
            time_slot: DEFAULT_TIME_SLOT.to_string(),
            selected_doctor: Arc::new(HealthProfessional::default()),
        }
    }
}

// ==============================================================================
// REGISTRY REPORTS
// ==============================================================================

/// One message produced by a registry operation.
///
/// `Display` gives the exact console text; multi-line variants are joined
/// with `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryReport {
    Created { patient_name: String },
    CreateFailed { error: AppError },
    Listed { position: usize, lines: Vec<String> },
    NoAppointments,
    Cancelled { patient_mobile: String },
    NotFound { patient_mobile: String },
    UsageError { error: AppError },
}

impl RegistryReport {
    pub fn is_success(&self) -> bool {
        matches!(self, RegistryReport::Created { .. } | RegistryReport::Cancelled { .. })
    }

    /// A missing list or key, as opposed to an operation that ran and found
    /// nothing.
    pub fn is_usage_error(&self) -> bool {
        match self {
            RegistryReport::UsageError { .. } => true,
            RegistryReport::CreateFailed { error } => error.is_usage(),
            _ => false,
        }
    }

    pub fn render_lines(&self) -> Vec<String> {
        match self {
            RegistryReport::Created { patient_name } => {
                vec![format!("Success: Appointment created for {}", patient_name)]
            }
            RegistryReport::CreateFailed { error } => {
                vec![format!("Failed to create appointment: {}", error)]
            }
            RegistryReport::Listed { position, lines } => {
                let mut out = Vec::with_capacity(lines.len() + 2);
                out.push(String::new());
                out.push(format!("Appointment {}:", position));
                out.extend(lines.iter().cloned());
                out
            }
            RegistryReport::NoAppointments => vec!["No existing appointments.".to_string()],
            RegistryReport::Cancelled { patient_mobile } => {
                vec![format!("Success: Cancelled appointment for mobile {}", patient_mobile)]
            }
            RegistryReport::NotFound { patient_mobile } => {
                vec![format!("Error: No appointments found for mobile {}", patient_mobile)]
            }
            RegistryReport::UsageError { error } => vec![format!("Error: {}", error)],
        }
    }
}

impl fmt::Display for RegistryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_lines().join("\n"))
    }
}
