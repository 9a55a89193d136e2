//! Additive QT-prolongation risk score (0–7).

use levocalc_core::models::patient::{PatientInput, Sex};
use levocalc_core::models::result::{QtRisk, RiskLevel};

use crate::messages::Messages;

pub const AGE_THRESHOLD_YEARS: f64 = 65.0;
/// mEq/L
pub const LOW_POTASSIUM: f64 = 3.5;
/// mg/dL
pub const LOW_MAGNESIUM: f64 = 1.7;
/// mg/dL
pub const LOW_CALCIUM: f64 = 8.5;

pub const MODERATE_MIN_SCORE: u8 = 3;
pub const HIGH_MIN_SCORE: u8 = 5;

/// True only for a present value below `threshold`. Absent labs never score.
fn below(value: Option<f64>, threshold: f64) -> bool {
    value.is_some_and(|v| v < threshold)
}

pub fn level_for(score: u8) -> RiskLevel {
    if score >= HIGH_MIN_SCORE {
        RiskLevel::High
    } else if score >= MODERATE_MIN_SCORE {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// Score every factor independently; each present factor adds one point and
/// its label, in evaluation order.
pub fn assess(input: &PatientInput, messages: &Messages) -> QtRisk {
    let factors = [
        (input.age_years > AGE_THRESHOLD_YEARS, messages.age_factor),
        (input.sex == Sex::Female, messages.female_factor),
        (input.comorbidities.heart_disease, messages.heart_factor),
        (
            below(input.labs.potassium, LOW_POTASSIUM),
            messages.potassium_factor,
        ),
        (
            below(input.labs.magnesium, LOW_MAGNESIUM),
            messages.magnesium_factor,
        ),
        (
            below(input.labs.calcium, LOW_CALCIUM),
            messages.calcium_factor,
        ),
        (
            input.medications.any_qt_prolonging(),
            messages.qt_drug_factor,
        ),
    ];

    let present: Vec<String> = factors
        .iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, label)| label.to_string())
        .collect();
    let score = present.len() as u8;
    let level = level_for(score);

    let (level_label, recommendation) = match level {
        RiskLevel::High => (messages.high_risk, messages.high_risk_monitoring),
        RiskLevel::Moderate => (messages.moderate_risk, messages.moderate_monitoring),
        RiskLevel::Low => (messages.low_risk, messages.routine_monitoring),
    };

    QtRisk {
        score,
        factors: present,
        level,
        level_label: level_label.to_string(),
        recommendation: recommendation.to_string(),
        color: level.color(),
    }
}
