// libs/doctor-cell/src/models.rs
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use shared_models::error::Result;
use shared_utils::validation::{is_blank, validate_non_blank, validate_non_negative};

// ==============================================================================
// RENDERING CONSTANTS
// ==============================================================================

pub const BASE_INFO_HEADER: &str = "=== Health Professional Base Info ===";
pub const DETAILS_RULE: &str = "----------------------------------------";

pub const DEFAULT_PROFESSIONAL_ID: i32 = 0;
pub const DEFAULT_PROFESSIONAL_NAME: &str = "Unknown Health Professional";
pub const DEFAULT_SPECIALIZATION: &str = "General Health Care";
pub const DEFAULT_SUB_SPECIALTY: &str = "General Cardiology";

pub const GENERAL_MEDICINE: &str = "General Medicine";
pub const CARDIOLOGY: &str = "Cardiology";

/// Handle shared by every appointment booked with the same professional.
pub type SharedProfessional = Arc<dyn Professional>;

// ==============================================================================
// PROFESSIONAL CAPABILITY
// ==============================================================================

/// Common surface of every health professional.
///
/// Each variant embeds a [`HealthProfessional`] and exposes it through
/// `base`/`base_mut`. `render_details` always starts with the base block;
/// variants only contribute `variant_details`, which is appended after it
/// and closed with [`DETAILS_RULE`].
pub trait Professional: fmt::Debug + Send + Sync {
    fn base(&self) -> &HealthProfessional;

    fn base_mut(&mut self) -> &mut HealthProfessional;

    /// Lines specific to the variant. Empty for the bare base record.
    fn variant_details(&self) -> Vec<String> {
        Vec::new()
    }

    fn render_details(&self) -> Vec<String> {
        let mut lines = self.base().base_details();
        let extra = self.variant_details();
        if !extra.is_empty() {
            lines.extend(extra);
            lines.push(DETAILS_RULE.to_string());
        }
        lines
    }

    fn id(&self) -> i32 {
        self.base().id()
    }

    fn name(&self) -> &str {
        self.base().name()
    }

    fn specialization(&self) -> &str {
        self.base().specialization()
    }

    fn set_id(&mut self, id: i32) -> bool {
        self.base_mut().set_id(id)
    }

    fn set_name(&mut self, name: &str) -> bool {
        self.base_mut().set_name(name)
    }

    fn set_specialization(&mut self, specialization: &str) -> bool {
        self.base_mut().set_specialization(specialization)
    }

    fn into_shared(self) -> SharedProfessional
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

// ==============================================================================
// BASE RECORD
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthProfessional {
    id: i32,
    name: String,
    specialization: String,
}

impl HealthProfessional {
    /// Checks run in order: id, name, specialization. The first failure wins.
    pub fn new(id: i32, name: &str, specialization: &str) -> Result<Self> {
        validate_non_negative(id, "ID cannot be negative")?;
        validate_non_blank(name, "Name cannot be empty")?;
        validate_non_blank(specialization, "Specialization cannot be empty")?;

        Ok(Self {
            id,
            name: name.to_string(),
            specialization: specialization.to_string(),
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    pub fn set_id(&mut self, id: i32) -> bool {
        if id < 0 {
            warn!("Error: ID cannot be negative");
            return false;
        }
        self.id = id;
        true
    }

    pub fn set_name(&mut self, name: &str) -> bool {
        if is_blank(name) {
            warn!("Error: Name cannot be empty");
            return false;
        }
        self.name = name.to_string();
        true
    }

    pub fn set_specialization(&mut self, specialization: &str) -> bool {
        if is_blank(specialization) {
            warn!("Error: Specialization cannot be empty");
            return false;
        }
        self.specialization = specialization.to_string();
        true
    }

    pub fn base_details(&self) -> Vec<String> {
        vec![
            BASE_INFO_HEADER.to_string(),
            format!("ID: {}", self.id),
            format!("Name: {}", self.name),
            format!("Specialization: {}", self.specialization),
        ]
    }
}

impl Default for HealthProfessional {
    fn default() -> Self {
        Self {
            id: DEFAULT_PROFESSIONAL_ID,
            name: DEFAULT_PROFESSIONAL_NAME.to_string(),
            specialization: DEFAULT_SPECIALIZATION.to_string(),
        }
    }
}

impl Professional for HealthProfessional {
    fn base(&self) -> &HealthProfessional {
        self
    }

    fn base_mut(&mut self) -> &mut HealthProfessional {
        self
    }
}

// ==============================================================================
// GENERAL PRACTITIONER
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneralPractitioner {
    base: HealthProfessional,
    is_family_doctor: bool,
}

impl GeneralPractitioner {
    pub fn new(id: i32, name: &str, is_family_doctor: bool) -> Result<Self> {
        Ok(Self {
            base: HealthProfessional::new(id, name, GENERAL_MEDICINE)?,
            is_family_doctor,
        })
    }

    pub fn is_family_doctor(&self) -> bool {
        self.is_family_doctor
    }

    pub fn set_family_doctor(&mut self, is_family_doctor: bool) {
        self.is_family_doctor = is_family_doctor;
    }
}

impl Professional for GeneralPractitioner {
    fn base(&self) -> &HealthProfessional {
        &self.base
    }

    fn base_mut(&mut self) -> &mut HealthProfessional {
        &mut self.base
    }

    fn variant_details(&self) -> Vec<String> {
        vec![
            "Health Professional Type: General Practitioner".to_string(),
            format!(
                "Is Family Doctor: {}",
                if self.is_family_doctor { "Yes" } else { "No" }
            ),
        ]
    }
}

// ==============================================================================
// CARDIOLOGIST
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cardiologist {
    base: HealthProfessional,
    sub_specialty: String,
}

impl Cardiologist {
    pub fn new(id: i32, name: &str, sub_specialty: &str) -> Result<Self> {
        let base = HealthProfessional::new(id, name, CARDIOLOGY)?;
        validate_non_blank(sub_specialty, "Sub-specialty cannot be empty")?;

        Ok(Self {
            base,
            sub_specialty: sub_specialty.to_string(),
        })
    }

    pub fn sub_specialty(&self) -> &str {
        &self.sub_specialty
    }

    pub fn set_sub_specialty(&mut self, sub_specialty: &str) -> bool {
        if is_blank(sub_specialty) {
            warn!("Error: Sub-specialty cannot be empty");
            return false;
        }
        self.sub_specialty = sub_specialty.to_string();
        true
    }
}

impl Default for Cardiologist {
    fn default() -> Self {
        Self {
            base: HealthProfessional::default(),
            sub_specialty: DEFAULT_SUB_SPECIALTY.to_string(),
        }
    }
}

impl Professional for Cardiologist {
    fn base(&self) -> &HealthProfessional {
        &self.base
    }

    fn base_mut(&mut self) -> &mut HealthProfessional {
        &mut self.base
    }

    fn variant_details(&self) -> Vec<String> {
        vec![
            "Health Professional Type: Cardiologist".to_string(),
            format!("Sub-specialty: {}", self.sub_specialty),
        ]
    }
}
