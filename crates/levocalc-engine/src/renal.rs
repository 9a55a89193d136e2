//! Renal dose adjustment: CrCl band × starting strength.

use levocalc_core::dose_options::DoseStrength;
use levocalc_core::models::result::{DoseRecommendation, RenalBand};

use crate::messages::Messages;

/// Lower bound (inclusive) of the normal band, mL/min.
pub const NORMAL_MIN_CRCL: f64 = 50.0;
/// Lower bound (inclusive) of the mild-moderate band, mL/min.
pub const MILD_MODERATE_MIN_CRCL: f64 = 20.0;
/// Lower bound (inclusive) of the severe band, mL/min.
pub const SEVERE_MIN_CRCL: f64 = 10.0;

/// Lower-inclusive banding; every CrCl lands in exactly one band.
pub fn band_for(crcl: f64) -> RenalBand {
    if crcl >= NORMAL_MIN_CRCL {
        RenalBand::Normal
    } else if crcl >= MILD_MODERATE_MIN_CRCL {
        RenalBand::MildModerate
    } else if crcl >= SEVERE_MIN_CRCL {
        RenalBand::Severe
    } else {
        RenalBand::Esrd
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DosingInterval {
    Every24h,
    Every48h,
    /// Every 48 h, or after each dialysis session.
    Every48hOrAfterDialysis,
}

/// Maintenance strength and interval after the first dose.
pub fn maintenance_for(band: RenalBand, dose: DoseStrength) -> (DoseStrength, DosingInterval) {
    use DoseStrength::{Mg250, Mg500, Mg750};
    use DosingInterval::{Every24h, Every48h, Every48hOrAfterDialysis};

    match (band, dose) {
        (RenalBand::Normal, dose) => (dose, Every24h),
        (RenalBand::MildModerate, Mg750) => (Mg750, Every48h),
        (RenalBand::MildModerate, Mg500 | Mg250) => (Mg250, Every24h),
        (RenalBand::Severe, Mg750) => (Mg500, Every48h),
        (RenalBand::Severe, Mg500 | Mg250) => (Mg250, Every48h),
        (RenalBand::Esrd, Mg750) => (Mg500, Every48hOrAfterDialysis),
        (RenalBand::Esrd, Mg500 | Mg250) => (Mg250, Every48hOrAfterDialysis),
    }
}

fn interval_text(interval: DosingInterval, messages: &Messages) -> String {
    match interval {
        DosingInterval::Every24h => messages.every_24h.to_string(),
        DosingInterval::Every48h => messages.every_48h.to_string(),
        DosingInterval::Every48hOrAfterDialysis => {
            format!("{} {}", messages.every_48h, messages.after_dialysis)
        }
    }
}

/// Build the regimen for `dose` given the patient's CrCl.
pub fn recommend(crcl: f64, dose: DoseStrength, messages: &Messages) -> DoseRecommendation {
    let band = band_for(crcl);
    let (maintenance_dose, interval) = maintenance_for(band, dose);
    let maintenance = format!("{maintenance_dose} {}", interval_text(interval, messages));

    let (status, regimen) = match band {
        RenalBand::Normal => (messages.normal_renal, maintenance.clone()),
        RenalBand::MildModerate => (
            messages.mild_moderate_renal,
            messages.mild_moderate_regimens.for_dose(dose).to_string(),
        ),
        RenalBand::Severe => (
            messages.severe_renal,
            messages.severe_regimens.for_dose(dose).to_string(),
        ),
        RenalBand::Esrd => (
            messages.esrd_renal,
            messages.esrd_regimens.for_dose(dose).to_string(),
        ),
    };

    DoseRecommendation {
        band,
        status: status.to_string(),
        regimen,
        initial: dose.to_string(),
        maintenance,
    }
}
