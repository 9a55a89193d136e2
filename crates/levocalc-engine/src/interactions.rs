use levocalc_core::models::patient::PatientInput;
use levocalc_core::models::result::{InteractionWarning, Severity};

use crate::messages::Messages;

/// Concurrent-medication and lifestyle warnings, in fixed order.
///
/// Caffeine and alcohol share a single CNS warning.
pub fn scan(input: &PatientInput, messages: &Messages) -> Vec<InteractionWarning> {
    let meds = &input.medications;
    let checks = [
        (meds.corticosteroids, Severity::Danger, messages.tendon_warning),
        (meds.diabetes_meds, Severity::Warning, messages.hypoglycemia_warning),
        (meds.nsaids, Severity::Warning, messages.seizure_warning),
        (
            input.lifestyle.caffeine || input.lifestyle.alcohol,
            Severity::Info,
            messages.cns_warning,
        ),
    ];

    checks
        .into_iter()
        .filter(|(applies, _, _)| *applies)
        .map(|(_, severity, message)| InteractionWarning {
            severity,
            message: message.to_string(),
        })
        .collect()
}
