// libs/appointment-cell/src/services/registry.rs
use tracing::{debug, info, instrument, warn};

use doctor_cell::models::SharedProfessional;
use shared_config::{AppConfig, CancellationPolicy};
use shared_models::error::AppError;

use crate::models::{Appointment, RegistryReport};

/// Create, list and cancel operations over an ordered appointment list.
///
/// The list itself belongs to the caller. Every operation takes it as an
/// `Option` so a missing list is reported as a usage error instead of being
/// confused with an empty one.
pub struct AppointmentRegistryService {
    cancellation_policy: CancellationPolicy,
}

impl AppointmentRegistryService {
    pub fn new(cancellation_policy: CancellationPolicy) -> Self {
        Self { cancellation_policy }
    }

    pub fn with_default_config() -> Self {
        Self::new(CancellationPolicy::default())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.cancellation_policy)
    }

    pub fn cancellation_policy(&self) -> CancellationPolicy {
        self.cancellation_policy
    }

    /// Validate and append a new appointment.
    ///
    /// Validation failures become a `CreateFailed` report and leave the list
    /// untouched.
    #[instrument(skip(self, appointments, professional))]
    pub fn create_appointment(
        &self,
        appointments: Option<&mut Vec<Appointment>>,
        patient_name: &str,
        patient_mobile: &str,
        time_slot: &str,
        professional: Option<SharedProfessional>,
    ) -> RegistryReport {
        let Some(appointments) = appointments else {
            warn!("Appointment list missing, nothing created");
            return RegistryReport::CreateFailed {
                error: AppError::usage("Appointment list cannot be null"),
            };
        };

        match Appointment::new(patient_name, patient_mobile, time_slot, professional) {
            Ok(appointment) => {
                appointments.push(appointment);
                info!("Appointment created for {} ({} booked)", patient_name, appointments.len());
                RegistryReport::Created {
                    patient_name: patient_name.to_string(),
                }
            }
            Err(error) => {
                warn!("Appointment rejected: {}", error);
                RegistryReport::CreateFailed { error }
            }
        }
    }

    /// One `Listed` report per appointment, numbered from 1 in booking order.
    #[instrument(skip_all)]
    pub fn list_appointments(&self, appointments: Option<&[Appointment]>) -> Vec<RegistryReport> {
        let Some(appointments) = appointments else {
            warn!("Appointment list missing, nothing to list");
            return vec![RegistryReport::UsageError {
                error: AppError::usage("Appointment list is null"),
            }];
        };

        if appointments.is_empty() {
            debug!("No appointments to list");
            return vec![RegistryReport::NoAppointments];
        }

        debug!("Listing {} appointments", appointments.len());
        appointments
            .iter()
            .enumerate()
            .map(|(index, appointment)| RegistryReport::Listed {
                position: index + 1,
                lines: appointment.render_details(),
            })
            .collect()
    }

    /// Remove appointments booked under `patient_mobile`.
    ///
    /// With `AllMatches` every match goes; with `FirstMatch` only the
    /// earliest. The list is rebuilt in a single pass, so runs of adjacent
    /// matches are neither skipped nor double counted. Emits one `Cancelled`
    /// per removal, or a single `NotFound`.
    #[instrument(skip(self, appointments))]
    pub fn cancel_by_mobile(
        &self,
        appointments: Option<&mut Vec<Appointment>>,
        patient_mobile: Option<&str>,
    ) -> Vec<RegistryReport> {
        let Some(appointments) = appointments else {
            warn!("Appointment list missing, nothing cancelled");
            return vec![RegistryReport::UsageError {
                error: AppError::usage("Appointment list is null"),
            }];
        };
        let Some(patient_mobile) = patient_mobile else {
            warn!("Mobile number missing, nothing cancelled");
            return vec![RegistryReport::UsageError {
                error: AppError::usage("Mobile number cannot be null"),
            }];
        };

        let mut reports: Vec<RegistryReport> = Vec::new();
        let mut retained = Vec::with_capacity(appointments.len());

        for appointment in std::mem::take(appointments) {
            let limit_reached = self.cancellation_policy == CancellationPolicy::FirstMatch
                && !reports.is_empty();

            if !limit_reached && appointment.patient_mobile() == patient_mobile {
                info!("Cancelled appointment for {}", appointment.patient_name());
                reports.push(RegistryReport::Cancelled {
                    patient_mobile: patient_mobile.to_string(),
                });
            } else {
                retained.push(appointment);
            }
        }

        *appointments = retained;

        if reports.is_empty() {
            warn!("No appointments found for mobile {}", patient_mobile);
            reports.push(RegistryReport::NotFound {
                patient_mobile: patient_mobile.to_string(),
            });
        }

        reports
    }

    /// Number of bookings currently held under `patient_mobile`.
    pub fn count_for_mobile(&self, appointments: &[Appointment], patient_mobile: &str) -> usize {
        appointments
            .iter()
            .filter(|appointment| appointment.patient_mobile() == patient_mobile)
            .count()
    }
}

impl Default for AppointmentRegistryService {
    fn default() -> Self {
        Self::with_default_config()
    }
}
