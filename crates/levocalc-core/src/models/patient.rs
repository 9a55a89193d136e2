use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dose_options::DoseStrength;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    #[default]
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Pregnancy {
    #[default]
    No,
    Yes,
}

/// Administration route. Oral and IV are bioequivalent (F ≈ 1), so this is
/// informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Route {
    #[default]
    Oral,
    Iv,
}

/// Laboratory and vital-sign values. Every field is optional; `None` means the
/// value was not entered and is skipped by every threshold check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabValues {
    /// QTc interval, ms.
    pub qtc_ms: Option<f64>,
    /// mEq/L
    pub potassium: Option<f64>,
    /// mg/dL
    pub magnesium: Option<f64>,
    /// mg/dL
    pub calcium: Option<f64>,
    /// bpm
    pub heart_rate: Option<f64>,
    /// breaths/min
    pub respiratory_rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Comorbidities {
    pub myasthenia_gravis: bool,
    pub epilepsy: bool,
    pub fluoroquinolone_allergy: bool,
    pub qt_prolongation_history: bool,
    pub heart_disease: bool,
    pub kidney_disease: bool,
}

/// Concurrent medications relevant to QT risk and interaction warnings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Medications {
    pub antiarrhythmics: bool,
    pub antipsychotics: bool,
    pub antidepressants: bool,
    pub macrolides: bool,
    pub antifungals: bool,
    pub other_qt_drugs: bool,
    pub corticosteroids: bool,
    /// Insulin or sulfonylureas.
    pub diabetes_meds: bool,
    pub nsaids: bool,
}

impl Medications {
    /// True when any QT-prolonging drug class is in use.
    pub fn any_qt_prolonging(&self) -> bool {
        self.antiarrhythmics
            || self.antipsychotics
            || self.antidepressants
            || self.macrolides
            || self.antifungals
            || self.other_qt_drugs
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Lifestyle {
    pub caffeine: bool,
    pub alcohol: bool,
}

/// A validated patient record, immutable for the duration of one calculation.
///
/// Age, weight and serum creatinine are guaranteed present and > 0 by the
/// form layer; everything else may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientInput {
    pub name: String,
    pub age_years: f64,
    pub weight_kg: f64,
    pub height_cm: Option<f64>,
    pub sex: Sex,
    pub pregnancy: Pregnancy,
    pub route: Route,
    pub indication_id: String,
    #[ts(as = "u32")]
    pub dose: DoseStrength,
    /// mg/dL
    pub serum_creatinine: f64,
    pub labs: LabValues,
    pub comorbidities: Comorbidities,
    pub medications: Medications,
    pub lifestyle: Lifestyle,
}

impl PatientInput {
    /// Pregnancy only counts for female patients.
    pub fn is_pregnant(&self) -> bool {
        self.sex == Sex::Female && self.pregnancy == Pregnancy::Yes
    }
}
