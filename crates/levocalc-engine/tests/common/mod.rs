#![allow(dead_code)]

use levocalc_core::dose_options::DoseStrength;
use levocalc_core::models::patient::{
    Comorbidities, LabValues, Lifestyle, Medications, PatientInput, Pregnancy, Route, Sex,
};

pub fn patient(age: f64, weight: f64, sex: Sex, scr: f64, dose: DoseStrength) -> PatientInput {
    PatientInput {
        name: "Test Patient".to_string(),
        age_years: age,
        weight_kg: weight,
        height_cm: None,
        sex,
        pregnancy: Pregnancy::No,
        route: Route::Oral,
        indication_id: match dose {
            DoseStrength::Mg250 => "cuti_250",
            DoseStrength::Mg500 => "cap_500",
            DoseStrength::Mg750 => "cap_750",
        }
        .to_string(),
        dose,
        serum_creatinine: scr,
        labs: LabValues::default(),
        comorbidities: Comorbidities::default(),
        medications: Medications::default(),
        lifestyle: Lifestyle::default(),
    }
}

/// 50 y, 70 kg male, SCr 1.0, 500 mg: CrCl 87.5, no risk factors.
pub fn healthy_adult() -> PatientInput {
    patient(50.0, 70.0, Sex::Male, 1.0, DoseStrength::Mg500)
}

pub fn at() -> jiff::Timestamp {
    jiff::Timestamp::from_second(1_760_000_000).unwrap()
}
