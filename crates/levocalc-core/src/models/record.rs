use serde::{Deserialize, Serialize, de::DeserializeOwned};
use ts_rs::TS;
use uuid::Uuid;

use super::patient::PatientInput;
use super::result::ClinicalResult;
use crate::record_keys;

/// A record kind the local store can hold.
pub trait StoredRecord: Serialize + DeserializeOwned + Send + Sync {
    /// Collection prefix in the store layout (see [`record_keys`]).
    const PREFIX: &'static str;

    fn id(&self) -> Uuid;

    /// Creation time; listings are ordered newest first by this.
    fn timestamp(&self) -> jiff::Timestamp;
}

/// A calculation the clinician chose to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavedCalculation {
    pub id: Uuid,
    pub timestamp: jiff::Timestamp,
    pub input: PatientInput,
    pub result: ClinicalResult,
}

impl StoredRecord for SavedCalculation {
    const PREFIX: &'static str = record_keys::CALCULATIONS_PREFIX;

    fn id(&self) -> Uuid {
        self.id
    }

    fn timestamp(&self) -> jiff::Timestamp {
        self.timestamp
    }
}

/// Free-text report of an unexpected reaction observed in a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SideEffectReport {
    pub id: Uuid,
    pub text: String,
    pub timestamp: jiff::Timestamp,
}

impl StoredRecord for SideEffectReport {
    const PREFIX: &'static str = record_keys::OBSERVATIONS_PREFIX;

    fn id(&self) -> Uuid {
        self.id
    }

    fn timestamp(&self) -> jiff::Timestamp {
        self.timestamp
    }
}

/// When is a new calculation "the same" as one already saved.
///
/// Same patient age, weight and formatted CrCl. With a window, the existing
/// record must also have been saved no more than `window` before the
/// candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DuplicatePolicy {
    pub window: Option<jiff::SignedDuration>,
}

impl DuplicatePolicy {
    pub const DEFAULT_WINDOW: jiff::SignedDuration = jiff::SignedDuration::from_secs(60);

    /// Match on patient values only, regardless of age of the existing record.
    pub fn unwindowed() -> Self {
        Self { window: None }
    }

    pub fn windowed(window: jiff::SignedDuration) -> Self {
        Self {
            window: Some(window),
        }
    }

    pub fn is_duplicate(&self, candidate: &SavedCalculation, existing: &SavedCalculation) -> bool {
        let same_patient = candidate.input.age_years == existing.input.age_years
            && candidate.input.weight_kg == existing.input.weight_kg
            && candidate.result.crcl() == existing.result.crcl();
        if !same_patient {
            return false;
        }
        match self.window {
            Some(window) => candidate.timestamp.duration_since(existing.timestamp) <= window,
            None => true,
        }
    }

    /// First record in `existing` that `candidate` duplicates.
    pub fn find_duplicate<'a>(
        &self,
        candidate: &SavedCalculation,
        existing: &'a [SavedCalculation],
    ) -> Option<&'a SavedCalculation> {
        existing.iter().find(|e| self.is_duplicate(candidate, e))
    }
}
