//! Indication → fixed dose lookup.
//!
//! Pure configuration data. Each indication maps to exactly one of the three
//! marketed strengths.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The three fixed tablet/infusion strengths.
/// Serialized as the plain milligram number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DoseStrength {
    Mg250,
    Mg500,
    Mg750,
}

impl DoseStrength {
    pub fn mg(&self) -> u32 {
        match self {
            DoseStrength::Mg250 => 250,
            DoseStrength::Mg500 => 500,
            DoseStrength::Mg750 => 750,
        }
    }
}

impl fmt::Display for DoseStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mg", self.mg())
    }
}

impl TryFrom<u32> for DoseStrength {
    type Error = CoreError;

    fn try_from(mg: u32) -> Result<Self, Self::Error> {
        match mg {
            250 => Ok(DoseStrength::Mg250),
            500 => Ok(DoseStrength::Mg500),
            750 => Ok(DoseStrength::Mg750),
            other => Err(CoreError::UnsupportedDose(other)),
        }
    }
}

impl From<DoseStrength> for u32 {
    fn from(dose: DoseStrength) -> Self {
        dose.mg()
    }
}

/// One selectable indication in the dose picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoseOption {
    pub id: &'static str,
    pub dose: DoseStrength,
    pub label: &'static str,
}

/// Indication selected when the form is first opened.
pub const DEFAULT_INDICATION: &str = "cap_500";

static DOSE_OPTIONS: [DoseOption; 13] = [
    DoseOption { id: "cap_500", dose: DoseStrength::Mg500, label: "CAP 500 mg" },
    DoseOption { id: "cap_750", dose: DoseStrength::Mg750, label: "CAP 750 mg" },
    DoseOption { id: "hap_vap_750", dose: DoseStrength::Mg750, label: "HAP/VAP 750 mg" },
    DoseOption { id: "abecb_500", dose: DoseStrength::Mg500, label: "ABECB 500 mg" },
    DoseOption { id: "sin_500", dose: DoseStrength::Mg500, label: "Sinusitis 500 mg" },
    DoseOption { id: "sin_750", dose: DoseStrength::Mg750, label: "Sinusitis 750 mg" },
    DoseOption { id: "cuti_750", dose: DoseStrength::Mg750, label: "cUTI 750 mg" },
    DoseOption { id: "cuti_250", dose: DoseStrength::Mg250, label: "cUTI 250 mg" },
    DoseOption { id: "pyelo_750", dose: DoseStrength::Mg750, label: "Pyelonephritis 750 mg" },
    DoseOption { id: "pyelo_250", dose: DoseStrength::Mg250, label: "Pyelonephritis 250 mg" },
    DoseOption { id: "unc_uti_250", dose: DoseStrength::Mg250, label: "Uncomplicated UTI 250 mg" },
    DoseOption { id: "pros_500", dose: DoseStrength::Mg500, label: "Prostatitis 500 mg" },
    DoseOption { id: "csssi_750", dose: DoseStrength::Mg750, label: "cSSSI 750 mg" },
];

/// Return every indication in picker order.
pub fn all_dose_options() -> &'static [DoseOption] {
    &DOSE_OPTIONS
}

/// Look up an indication by id.
pub fn find_dose_option(id: &str) -> Option<&'static DoseOption> {
    DOSE_OPTIONS.iter().find(|o| o.id == id)
}

/// Resolve an indication id to its dose, failing on unknown ids.
pub fn resolve_dose(id: &str) -> Result<DoseStrength, CoreError> {
    find_dose_option(id)
        .map(|o| o.dose)
        .ok_or_else(|| CoreError::UnknownIndication(id.to_string()))
}
