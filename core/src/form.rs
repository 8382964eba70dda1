//! Patient information form
//!
//! The form state lives only for one submission. Submissions go through the
//! [`Predictor`] trait; the only implementation is [`PendingBackend`], which
//! acknowledges the request without computing anything.

use std::fmt;
use std::str::FromStr;

/// Patient age, always within `[Age::MIN, Age::MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(u8);

impl Age {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 120;
    pub const DEFAULT: Age = Age(45);

    /// Clamp any integer into the accepted range
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self::clamped(self.0 as i64 + 1)
    }

    pub fn decrement(self) -> Self {
        Self::clamped(self.0 as i64 - 1)
    }
}

impl Default for Age {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error for a choice label that matches no option
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {field} '{value}', expected one of: {expected}")]
pub struct ChoiceError {
    pub field: &'static str,
    pub value: String,
    pub expected: String,
}

/// Fixed set of options rendered as a select box
pub trait Choice: Copy + PartialEq + Sized + 'static {
    const FIELD: &'static str;
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn parse_choice(value: &str) -> Result<Self, ChoiceError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ChoiceError {
                field: Self::FIELD,
                value: value.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|c| c.label())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Choice for Gender {
    const FIELD: &'static str = "gender";
    const ALL: &'static [Self] = &[Gender::Male, Gender::Female, Gender::Other];

    fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdmissionType {
    #[default]
    Emergency,
    Elective,
    Urgent,
}

impl Choice for AdmissionType {
    const FIELD: &'static str = "admission type";
    const ALL: &'static [Self] = &[
        AdmissionType::Emergency,
        AdmissionType::Elective,
        AdmissionType::Urgent,
    ];

    fn label(&self) -> &'static str {
        match self {
            AdmissionType::Emergency => "Emergency",
            AdmissionType::Elective => "Elective",
            AdmissionType::Urgent => "Urgent",
        }
    }
}

impl FromStr for Gender {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_choice(s)
    }
}

impl FromStr for AdmissionType {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_choice(s)
    }
}

/// Inputs of the Patient Predictions page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatientForm {
    pub age: Age,
    pub gender: Gender,
    pub admission_type: AdmissionType,
    pub diagnosis: String,
}

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    Age,
    Gender,
    AdmissionType,
    Diagnosis,
    Predict,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Age,
        FormField::Gender,
        FormField::AdmissionType,
        FormField::Diagnosis,
        FormField::Predict,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Age => "Age",
            FormField::Gender => "Gender",
            FormField::AdmissionType => "Admission Type",
            FormField::Diagnosis => "Diagnosis",
            FormField::Predict => "Predict",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub const BACKEND_PENDING_MESSAGE: &str = "Predictions will appear here once backend is integrated.";

/// Result of submitting the patient form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acknowledgement {
    /// No prediction service is connected; nothing was computed
    BackendPending,
}

impl Acknowledgement {
    pub fn message(&self) -> &'static str {
        match self {
            Acknowledgement::BackendPending => BACKEND_PENDING_MESSAGE,
        }
    }
}

/// Seam for an external length-of-stay / readmission prediction service
pub trait Predictor {
    fn predict(&self, form: &PatientForm) -> Acknowledgement;
}

/// Stand-in used until a prediction service exists
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingBackend;

impl Predictor for PendingBackend {
    fn predict(&self, form: &PatientForm) -> Acknowledgement {
        tracing::debug!(
            age = form.age.value(),
            gender = form.gender.label(),
            admission_type = form.admission_type.label(),
            "prediction requested without a backend"
        );
        Acknowledgement::BackendPending
    }
}
