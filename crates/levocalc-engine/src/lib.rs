//! levocalc-engine
//!
//! The levofloxacin dosing calculation. Pure and synchronous: a validated
//! [`PatientInput`] goes in, a [`ClinicalResult`] comes out. Stages run in a
//! fixed order: contraindication screen, pharmacokinetics, renal dose
//! adjustment, QT risk, interaction warnings.

pub mod clearance;
pub mod contraindications;
pub mod error;
pub mod interactions;
pub mod messages;
pub mod pharmacokinetics;
pub mod qt_risk;
pub mod renal;

use std::sync::Arc;

use levocalc_core::clock::Clock;
use levocalc_core::locale::Locale;
use levocalc_core::models::patient::PatientInput;
use levocalc_core::models::result::{ClinicalResult, Evaluation, Outcome};

use clearance::{ClearanceModel, ClearanceModelKind};

/// Run every stage for `input`.
///
/// Any contraindication blocks the assessment outright; otherwise the result
/// is fully evaluated. `locale` only affects attached text.
pub fn compute_result(
    input: &PatientInput,
    locale: Locale,
    model: &dyn ClearanceModel,
    computed_at: jiff::Timestamp,
) -> ClinicalResult {
    let messages = messages::for_locale(locale);

    let contraindications = contraindications::screen(input, messages);
    if !contraindications.is_empty() {
        tracing::debug!(
            count = contraindications.len(),
            "assessment blocked by contraindications"
        );
        return ClinicalResult {
            computed_at,
            outcome: Outcome::Blocked { contraindications },
        };
    }

    let pk = pharmacokinetics::compute(input, model);
    let dose_recommendation = renal::recommend(pk.crcl, input.dose, messages);
    let qt_risk = qt_risk::assess(input, messages);
    let warnings = interactions::scan(input, messages);

    tracing::debug!(
        crcl = pk.crcl,
        clearance_model = %model.kind(),
        band = ?dose_recommendation.band,
        qt_score = qt_risk.score,
        warnings = warnings.len(),
        "assessment evaluated"
    );

    ClinicalResult {
        computed_at,
        outcome: Outcome::Evaluated(Evaluation {
            dose_mg: input.dose.mg(),
            route: input.route,
            pk_params: pk.to_parameters(),
            dose_recommendation,
            qt_risk,
            warnings,
        }),
    }
}

/// A configured calculator: one clearance strategy and a clock for stamping
/// results.
#[derive(Clone)]
pub struct Engine {
    model: ClearanceModelKind,
    clock: Arc<dyn Clock>,
}

impl Engine {
    pub fn new(model: ClearanceModelKind, clock: Arc<dyn Clock>) -> Self {
        Self { model, clock }
    }

    pub fn clearance_model(&self) -> ClearanceModelKind {
        self.model
    }

    pub fn compute_result(&self, input: &PatientInput, locale: Locale) -> ClinicalResult {
        compute_result(input, locale, self.model.model(), self.clock.now())
    }
}
