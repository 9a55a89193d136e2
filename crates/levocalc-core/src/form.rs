//! Raw wizard form and its conversion into a [`PatientInput`].
//!
//! Every numeric field arrives as text. Required fields are checked per
//! wizard step; optional fields that are blank or not a number are absent,
//! never zero.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::dose_options::{DEFAULT_INDICATION, find_dose_option};
use crate::models::patient::{
    Comorbidities, LabValues, Lifestyle, Medications, PatientInput, Pregnancy, Route, Sex,
};

/// The three input steps of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FormStep {
    PatientInfo,
    MedicalHistory,
    LabValues,
}

impl FormStep {
    pub const ALL: [FormStep; 3] = [
        FormStep::PatientInfo,
        FormStep::MedicalHistory,
        FormStep::LabValues,
    ];

    /// 1-based position shown in the step indicator.
    pub fn number(&self) -> u8 {
        match self {
            FormStep::PatientInfo => 1,
            FormStep::MedicalHistory => 2,
            FormStep::LabValues => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FormField {
    Name,
    Age,
    Weight,
    Indication,
    SerumCreatinine,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Name => "name",
            FormField::Age => "age",
            FormField::Weight => "weight",
            FormField::Indication => "indication",
            FormField::SerumCreatinine => "serum creatinine",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldProblem {
    /// Missing, not a number, or not greater than zero.
    Required,
    UnknownIndication,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{field}: {problem:?}")]
pub struct FieldError {
    pub field: FormField,
    pub problem: FieldProblem,
}

/// Every field error found, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("form has {} invalid field(s)", .errors.len())]
pub struct FormErrors {
    pub errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn contains(&self, field: FormField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Parse a numeric text field. Blank, unparsable and non-finite text is
/// absent.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_positive(text: &str) -> Option<f64> {
    parse_number(text).filter(|v| *v > 0.0)
}

/// Wizard state as typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientForm {
    pub name: String,
    pub age: String,
    pub weight: String,
    pub height: String,
    pub sex: Sex,
    pub pregnancy: Pregnancy,
    pub route: Route,
    pub indication_id: String,
    pub serum_creatinine: String,
    pub qtc: String,
    pub heart_rate: String,
    pub respiratory_rate: String,
    pub potassium: String,
    pub magnesium: String,
    pub calcium: String,
    pub comorbidities: Comorbidities,
    pub medications: Medications,
    pub lifestyle: Lifestyle,
}

impl Default for PatientForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            weight: String::new(),
            height: String::new(),
            sex: Sex::default(),
            pregnancy: Pregnancy::default(),
            route: Route::default(),
            indication_id: DEFAULT_INDICATION.to_string(),
            serum_creatinine: String::new(),
            qtc: String::new(),
            heart_rate: String::new(),
            respiratory_rate: String::new(),
            potassium: String::new(),
            magnesium: String::new(),
            calcium: String::new(),
            comorbidities: Comorbidities::default(),
            medications: Medications::default(),
            lifestyle: Lifestyle::default(),
        }
    }
}

impl PatientForm {
    fn step_errors(&self, step: FormStep) -> Vec<FieldError> {
        let required = |field| FieldError {
            field,
            problem: FieldProblem::Required,
        };
        let mut errors = Vec::new();
        match step {
            FormStep::PatientInfo => {
                if self.name.trim().is_empty() {
                    errors.push(required(FormField::Name));
                }
                if parse_positive(&self.age).is_none() {
                    errors.push(required(FormField::Age));
                }
                if parse_positive(&self.weight).is_none() {
                    errors.push(required(FormField::Weight));
                }
                if find_dose_option(&self.indication_id).is_none() {
                    errors.push(FieldError {
                        field: FormField::Indication,
                        problem: FieldProblem::UnknownIndication,
                    });
                }
            }
            FormStep::MedicalHistory => {}
            FormStep::LabValues => {
                if parse_positive(&self.serum_creatinine).is_none() {
                    errors.push(required(FormField::SerumCreatinine));
                }
            }
        }
        errors
    }

    /// Check the fields a single wizard step requires before moving on.
    pub fn validate_step(&self, step: FormStep) -> Result<(), FormErrors> {
        let errors = self.step_errors(step);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormErrors { errors })
        }
    }

    /// Validate every step and build the engine input.
    pub fn to_input(&self) -> Result<PatientInput, FormErrors> {
        let errors: Vec<FieldError> = FormStep::ALL
            .iter()
            .flat_map(|step| self.step_errors(*step))
            .collect();

        let (Some(age_years), Some(weight_kg), Some(serum_creatinine), Some(option)) = (
            parse_positive(&self.age),
            parse_positive(&self.weight),
            parse_positive(&self.serum_creatinine),
            find_dose_option(&self.indication_id),
        ) else {
            return Err(FormErrors { errors });
        };
        if !errors.is_empty() {
            return Err(FormErrors { errors });
        }

        Ok(PatientInput {
            name: self.name.trim().to_string(),
            age_years,
            weight_kg,
            height_cm: parse_positive(&self.height),
            sex: self.sex,
            pregnancy: self.pregnancy,
            route: self.route,
            indication_id: option.id.to_string(),
            dose: option.dose,
            serum_creatinine,
            labs: LabValues {
                qtc_ms: parse_number(&self.qtc),
                potassium: parse_number(&self.potassium),
                magnesium: parse_number(&self.magnesium),
                calcium: parse_number(&self.calcium),
                heart_rate: parse_number(&self.heart_rate),
                respiratory_rate: parse_number(&self.respiratory_rate),
            },
            comorbidities: self.comorbidities,
            medications: self.medications,
            lifestyle: self.lifestyle,
        })
    }
}
