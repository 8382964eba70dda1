//! Patient form submission command

use anyhow::Result;
use hms_core::form::{Acknowledgement, Age, PatientForm, PendingBackend, Predictor};
use hms_core::form::{AdmissionType, Gender};
use tracing::info;

/// Values for the patient form; omitted fields take the form defaults
#[derive(Debug, Clone, Default)]
pub struct PredictArgs {
    pub age: Option<i64>,
    pub gender: Option<Gender>,
    pub admission_type: Option<AdmissionType>,
    pub diagnosis: Option<String>,
}

impl PredictArgs {
    /// Build the form, clamping the age into its accepted range
    pub fn into_form(self) -> PatientForm {
        let defaults = PatientForm::default();
        PatientForm {
            age: self.age.map(Age::clamped).unwrap_or(defaults.age),
            gender: self.gender.unwrap_or(defaults.gender),
            admission_type: self.admission_type.unwrap_or(defaults.admission_type),
            diagnosis: self.diagnosis.unwrap_or(defaults.diagnosis),
        }
    }
}

/// Submit the form to the prediction backend and return its acknowledgement
pub fn submit(args: PredictArgs, predictor: &dyn Predictor) -> (PatientForm, Acknowledgement) {
    let form = args.into_form();
    let ack = predictor.predict(&form);
    (form, ack)
}

/// Fill in the patient form and press Predict
pub async fn predict_command(args: PredictArgs) -> Result<()> {
    if let Some(age) = args.age {
        if age != Age::clamped(age).value() as i64 {
            info!("Age {} clamped to [{}, {}]", age, Age::MIN, Age::MAX);
        }
    }

    let (form, ack) = submit(args, &PendingBackend);
    info!("Submitted patient form: {:?}", form);

    println!("{}", ack.message());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let form = PredictArgs::default().into_form();
        assert_eq!(form, PatientForm::default());
    }

    #[test]
    fn test_age_clamped_and_acknowledged() {
        let (form, ack) = submit(
            PredictArgs {
                age: Some(200),
                gender: Some(Gender::Other),
                admission_type: Some(AdmissionType::Elective),
                diagnosis: Some("Fracture".into()),
            },
            &PendingBackend,
        );
        assert_eq!(form.age.value(), 120);
        assert_eq!(form.gender, Gender::Other);
        assert_eq!(ack, Acknowledgement::BackendPending);
    }
}
