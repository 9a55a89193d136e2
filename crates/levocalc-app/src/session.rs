use std::sync::Arc;

use levocalc_core::clock::{Clock, IdGenerator, RandomIds, SystemClock};
use levocalc_core::form::PatientForm;
use levocalc_core::locale::Locale;
use levocalc_core::models::patient::PatientInput;
use levocalc_core::models::record::{DuplicatePolicy, SavedCalculation, SideEffectReport};
use levocalc_core::models::result::ClinicalResult;
use levocalc_engine::Engine;
use levocalc_storage::LocalStore;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::config::LevoCalcConfig;
use crate::error::AppError;

/// A validated input together with its computed result.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub input: PatientInput,
    pub result: ClinicalResult,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved(SavedCalculation),
    /// An equivalent calculation is already stored; nothing was written.
    Duplicate { existing_id: Uuid },
}

/// Command surface for a front end: calculate, keep, browse and annotate.
pub struct LevoCalc {
    engine: Engine,
    store: LocalStore,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    locale: Locale,
    duplicates: DuplicatePolicy,
    /// Held across the duplicate check and the insert.
    save_lock: Mutex<()>,
}

impl LevoCalc {
    pub fn new(
        config: &LevoCalcConfig,
        store: LocalStore,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            engine: Engine::new(config.clearance_model, Arc::clone(&clock)),
            store,
            clock,
            ids,
            locale: config.locale,
            duplicates: config.duplicate_policy(),
            save_lock: Mutex::new(()),
        }
    }

    /// Wire up against the system clock, random ids and the configured
    /// data directory.
    pub fn from_config(config: &LevoCalcConfig) -> eyre::Result<Self> {
        let root = config.resolve_data_dir()?;
        tracing::info!(
            data_dir = %root.display(),
            locale = %config.locale,
            clearance_model = %config.clearance_model,
            "levocalc ready"
        );
        Ok(Self::new(
            config,
            LocalStore::new(root),
            Arc::new(SystemClock),
            Arc::new(RandomIds),
        ))
    }

    /// Configured display language.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// Validate the whole form and run the assessment.
    pub fn calculate(&self, form: &PatientForm, locale: Locale) -> Result<Calculation, AppError> {
        let input = form.to_input()?;
        let result = self.engine.compute_result(&input, locale);
        tracing::info!(
            indication = %input.indication_id,
            blocked = result.is_blocked(),
            "calculation performed"
        );
        Ok(Calculation { input, result })
    }

    /// Keep a calculation unless an equivalent one is already stored.
    pub async fn save_calculation(
        &self,
        input: PatientInput,
        result: ClinicalResult,
    ) -> Result<SaveOutcome, AppError> {
        let candidate = SavedCalculation {
            id: self.ids.next_id(),
            timestamp: self.clock.now(),
            input,
            result,
        };

        let _guard = self.save_lock.lock().await;
        let existing: Vec<SavedCalculation> = self.store.list().await?;
        if let Some(dup) = self.duplicates.find_duplicate(&candidate, &existing) {
            tracing::info!(existing_id = %dup.id, "calculation already saved, skipping");
            return Ok(SaveOutcome::Duplicate {
                existing_id: dup.id,
            });
        }

        self.store.insert(&candidate).await?;
        tracing::info!(id = %candidate.id, "calculation saved");
        Ok(SaveOutcome::Saved(candidate))
    }

    /// Saved calculations, newest first.
    pub async fn history(&self) -> Result<Vec<SavedCalculation>, AppError> {
        Ok(self.store.list().await?)
    }

    pub async fn load_calculation(&self, id: Uuid) -> Result<SavedCalculation, AppError> {
        Ok(self.store.get(id).await?)
    }

    pub async fn delete_calculation(&self, id: Uuid) -> Result<(), AppError> {
        self.store.delete::<SavedCalculation>(id).await?;
        Ok(())
    }

    /// Record a free-text side-effect observation. Surrounding whitespace is
    /// trimmed; blank text is rejected.
    pub async fn submit_observation(&self, text: &str) -> Result<SideEffectReport, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::EmptyObservation);
        }

        let report = SideEffectReport {
            id: self.ids.next_id(),
            text: text.to_string(),
            timestamp: self.clock.now(),
        };
        self.store.insert(&report).await?;
        tracing::info!(id = %report.id, "side-effect observation recorded");
        Ok(report)
    }

    pub async fn observations(&self) -> Result<Vec<SideEffectReport>, AppError> {
        Ok(self.store.list().await?)
    }

    pub async fn delete_observation(&self, id: Uuid) -> Result<(), AppError> {
        self.store.delete::<SideEffectReport>(id).await?;
        Ok(())
    }
}
