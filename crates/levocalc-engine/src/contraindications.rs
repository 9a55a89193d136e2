use levocalc_core::models::patient::PatientInput;
use levocalc_core::models::result::{Contraindication, ContraindicationKind};

use crate::messages::Messages;

/// Below this age levofloxacin is not given (cartilage damage).
pub const ADULT_AGE_YEARS: f64 = 18.0;

/// Collect every absolute contraindication, in fixed precedence order.
///
/// All checks run; an empty list means the assessment may proceed.
pub fn screen(input: &PatientInput, messages: &Messages) -> Vec<Contraindication> {
    let checks = [
        (
            input.age_years < ADULT_AGE_YEARS,
            ContraindicationKind::Pediatric,
            &messages.pediatric,
        ),
        (
            input.is_pregnant(),
            ContraindicationKind::Pregnancy,
            &messages.pregnancy,
        ),
        (
            input.comorbidities.myasthenia_gravis,
            ContraindicationKind::MyastheniaGravis,
            &messages.myasthenia_gravis,
        ),
        (
            input.comorbidities.epilepsy,
            ContraindicationKind::Epilepsy,
            &messages.epilepsy,
        ),
        (
            input.comorbidities.fluoroquinolone_allergy,
            ContraindicationKind::FluoroquinoloneAllergy,
            &messages.allergy,
        ),
    ];

    checks
        .into_iter()
        .filter(|(applies, _, _)| *applies)
        .map(|(_, kind, finding)| Contraindication {
            kind,
            title: finding.title.to_string(),
            message: finding.message.to_string(),
        })
        .collect()
}
