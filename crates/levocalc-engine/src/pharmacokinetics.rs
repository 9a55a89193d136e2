//! Single-dose pharmacokinetic estimates.
//!
//! CrCl from Cockcroft-Gault, CL from the configured [`ClearanceModel`],
//! one-compartment derivations from there.

use levocalc_core::models::patient::{PatientInput, Sex};
use levocalc_core::models::result::PkParameters;

use crate::clearance::ClearanceModel;

/// Vd per kg body weight (L/kg).
pub const VD_L_PER_KG: f64 = 1.1;

/// ln 2, to three places.
pub const LN2: f64 = 0.693;

pub const FEMALE_CRCL_FACTOR: f64 = 0.85;

/// Oral and IV are bioequivalent; Tmax is quoted, not computed.
pub const TMAX_HOURS: &str = "1-2";

/// Raw (unrounded) values. `crcl` drives the renal band lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PkComputation {
    pub crcl: f64,
    pub cl: f64,
    pub vd: f64,
    pub k: f64,
    pub half_life: f64,
    pub auc: f64,
    pub cmax: f64,
    pub bmi: Option<f64>,
}

/// Cockcroft-Gault creatinine clearance, mL/min.
pub fn creatinine_clearance(age_years: f64, weight_kg: f64, serum_creatinine: f64, sex: Sex) -> f64 {
    let crcl = weight_kg * (140.0 - age_years) / (72.0 * serum_creatinine);
    match sex {
        Sex::Female => crcl * FEMALE_CRCL_FACTOR,
        Sex::Male => crcl,
    }
}

/// kg/m², when a positive height is known.
pub fn body_mass_index(weight_kg: f64, height_cm: Option<f64>) -> Option<f64> {
    let height_m = height_cm.filter(|h| *h > 0.0)? / 100.0;
    Some(weight_kg / (height_m * height_m))
}

pub fn compute(input: &PatientInput, model: &dyn ClearanceModel) -> PkComputation {
    let dose = f64::from(input.dose.mg());
    let crcl = creatinine_clearance(
        input.age_years,
        input.weight_kg,
        input.serum_creatinine,
        input.sex,
    );
    let cl = model.clearance(crcl, input.serum_creatinine);
    let vd = VD_L_PER_KG * input.weight_kg;
    let k = cl / vd;

    PkComputation {
        crcl,
        cl,
        vd,
        k,
        half_life: if k > 0.0 { LN2 / k } else { 0.0 },
        auc: if cl > 0.0 { dose / cl } else { 0.0 },
        cmax: if vd > 0.0 { dose / vd } else { 0.0 },
        bmi: body_mass_index(input.weight_kg, input.height_cm),
    }
}

impl PkComputation {
    /// Round for display: 2 dp, except k (4 dp) and BMI (1 dp).
    pub fn to_parameters(&self) -> PkParameters {
        PkParameters {
            crcl: format!("{:.2}", self.crcl),
            cl: format!("{:.2}", self.cl),
            vd: format!("{:.2}", self.vd),
            k: format!("{:.4}", self.k),
            half_life: format!("{:.2}", self.half_life),
            auc: format!("{:.2}", self.auc),
            cmax: format!("{:.2}", self.cmax),
            tmax: TMAX_HOURS.to_string(),
            bmi: self.bmi.map(|b| format!("{b:.1}")),
        }
    }
}
