use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::patient::Route;

/// The outcome of one engine invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalResult {
    /// Supplied by the caller's clock. Display and dedup only.
    pub computed_at: jiff::Timestamp,
    pub outcome: Outcome,
}

impl ClinicalResult {
    pub fn is_blocked(&self) -> bool {
        matches!(self.outcome, Outcome::Blocked { .. })
    }

    pub fn contraindications(&self) -> &[Contraindication] {
        match &self.outcome {
            Outcome::Blocked { contraindications } => contraindications,
            Outcome::Evaluated(_) => &[],
        }
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        match &self.outcome {
            Outcome::Evaluated(evaluation) => Some(evaluation),
            Outcome::Blocked { .. } => None,
        }
    }

    /// Formatted creatinine clearance, if the assessment got that far.
    pub fn crcl(&self) -> Option<&str> {
        self.evaluation().map(|e| e.pk_params.crcl.as_str())
    }
}

/// Either a hard stop or a full evaluation; never a partial one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum Outcome {
    /// At least one absolute contraindication. The list is non-empty and in
    /// screening order.
    Blocked {
        contraindications: Vec<Contraindication>,
    },
    Evaluated(Evaluation),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Contraindication {
    pub kind: ContraindicationKind,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContraindicationKind {
    Pediatric,
    Pregnancy,
    MyastheniaGravis,
    Epilepsy,
    FluoroquinoloneAllergy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub dose_mg: u32,
    pub route: Route,
    pub pk_params: PkParameters,
    pub dose_recommendation: DoseRecommendation,
    pub qt_risk: QtRisk,
    pub warnings: Vec<InteractionWarning>,
}

/// Pharmacokinetic parameters, fixed-precision formatted for display.
///
/// Stored as text so a saved result reproduces exactly what was shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PkParameters {
    /// Creatinine clearance, mL/min (2 dp).
    pub crcl: String,
    /// Systemic clearance, L/h (2 dp).
    pub cl: String,
    /// Volume of distribution, L (2 dp).
    pub vd: String,
    /// Elimination rate constant, 1/h (4 dp).
    pub k: String,
    /// Hours (2 dp).
    pub half_life: String,
    /// mg·h/L (2 dp).
    pub auc: String,
    /// mg/L (2 dp).
    pub cmax: String,
    /// Hours, literal range.
    pub tmax: String,
    /// kg/m² (1 dp), absent without a usable height.
    pub bmi: Option<String>,
}

/// Creatinine-clearance band driving the dose adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RenalBand {
    /// CrCl ≥ 50
    Normal,
    /// 20 ≤ CrCl < 50
    MildModerate,
    /// 10 ≤ CrCl < 20
    Severe,
    /// CrCl < 10
    Esrd,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DoseRecommendation {
    pub band: RenalBand,
    pub status: String,
    pub regimen: String,
    pub initial: String,
    pub maintenance: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskColor {
    Green,
    Orange,
    Red,
}

impl RiskLevel {
    pub fn color(&self) -> RiskColor {
        match self {
            RiskLevel::Low => RiskColor::Green,
            RiskLevel::Moderate => RiskColor::Orange,
            RiskLevel::High => RiskColor::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QtRisk {
    /// 0–7, one point per factor present.
    pub score: u8,
    /// Labels of the factors present, in evaluation order.
    pub factors: Vec<String>,
    pub level: RiskLevel,
    pub level_label: String,
    pub recommendation: String,
    pub color: RiskColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Danger,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InteractionWarning {
    pub severity: Severity,
    pub message: String,
}
