use jiff::{SignedDuration, Timestamp};
use levocalc_core::dose_options::DoseStrength;
use levocalc_core::models::patient::{
    Comorbidities, LabValues, Lifestyle, Medications, PatientInput, Pregnancy, Route, Sex,
};
use levocalc_core::models::record::{DuplicatePolicy, SavedCalculation, SideEffectReport, StoredRecord};
use levocalc_core::models::result::{
    ClinicalResult, Contraindication, ContraindicationKind, DoseRecommendation, Evaluation,
    Outcome, PkParameters, QtRisk, RenalBand, RiskColor, RiskLevel,
};
use levocalc_core::record_keys;
use uuid::Uuid;

fn input(age: f64, weight: f64) -> PatientInput {
    PatientInput {
        name: "Omar".to_string(),
        age_years: age,
        weight_kg: weight,
        height_cm: None,
        sex: Sex::Male,
        pregnancy: Pregnancy::No,
        route: Route::Oral,
        indication_id: "cap_500".to_string(),
        dose: DoseStrength::Mg500,
        serum_creatinine: 1.0,
        labs: LabValues::default(),
        comorbidities: Comorbidities::default(),
        medications: Medications::default(),
        lifestyle: Lifestyle::default(),
    }
}

fn evaluated(at: Timestamp, crcl: &str) -> ClinicalResult {
    ClinicalResult {
        computed_at: at,
        outcome: Outcome::Evaluated(Evaluation {
            dose_mg: 500,
            route: Route::Oral,
            pk_params: PkParameters {
                crcl: crcl.to_string(),
                cl: "61.25".to_string(),
                vd: "77.00".to_string(),
                k: "0.7955".to_string(),
                half_life: "0.87".to_string(),
                auc: "8.16".to_string(),
                cmax: "6.49".to_string(),
                tmax: "1-2".to_string(),
                bmi: None,
            },
            dose_recommendation: DoseRecommendation {
                band: RenalBand::Normal,
                status: "Normal Renal Function".to_string(),
                regimen: "500mg every 24 hours".to_string(),
                initial: "500mg".to_string(),
                maintenance: "500mg every 24 hours".to_string(),
            },
            qt_risk: QtRisk {
                score: 0,
                factors: vec![],
                level: RiskLevel::Low,
                level_label: "Low Risk".to_string(),
                recommendation: "Routine monitoring recommended".to_string(),
                color: RiskColor::Green,
            },
            warnings: vec![],
        }),
    }
}

fn saved(at: Timestamp, age: f64, weight: f64, crcl: &str) -> SavedCalculation {
    SavedCalculation {
        id: Uuid::new_v4(),
        timestamp: at,
        input: input(age, weight),
        result: evaluated(at, crcl),
    }
}

fn t(secs: i64) -> Timestamp {
    Timestamp::from_second(1_760_000_000 + secs).unwrap()
}

#[test]
fn same_age_weight_crcl_is_duplicate_without_window() {
    let existing = saved(t(0), 50.0, 70.0, "87.50");
    let candidate = saved(t(86_400), 50.0, 70.0, "87.50");
    assert!(DuplicatePolicy::unwindowed().is_duplicate(&candidate, &existing));
}

#[test]
fn any_differing_value_is_not_duplicate() {
    let existing = saved(t(0), 50.0, 70.0, "87.50");
    let policy = DuplicatePolicy::unwindowed();
    assert!(!policy.is_duplicate(&saved(t(1), 51.0, 70.0, "87.50"), &existing));
    assert!(!policy.is_duplicate(&saved(t(1), 50.0, 71.0, "87.50"), &existing));
    assert!(!policy.is_duplicate(&saved(t(1), 50.0, 70.0, "87.49"), &existing));
}

#[test]
fn window_limits_how_far_back_duplicates_reach() {
    let existing = saved(t(0), 50.0, 70.0, "87.50");
    let policy = DuplicatePolicy::windowed(DuplicatePolicy::DEFAULT_WINDOW);
    assert!(policy.is_duplicate(&saved(t(60), 50.0, 70.0, "87.50"), &existing));
    assert!(!policy.is_duplicate(&saved(t(61), 50.0, 70.0, "87.50"), &existing));
}

#[test]
fn blocked_results_match_on_absent_crcl() {
    let blocked = |at| ClinicalResult {
        computed_at: at,
        outcome: Outcome::Blocked {
            contraindications: vec![Contraindication {
                kind: ContraindicationKind::Epilepsy,
                title: "Epilepsy".to_string(),
                message: "Increased risk of seizures - contraindicated.".to_string(),
            }],
        },
    };
    let existing = SavedCalculation {
        result: blocked(t(0)),
        ..saved(t(0), 40.0, 80.0, "")
    };
    let candidate = SavedCalculation {
        result: blocked(t(5)),
        ..saved(t(5), 40.0, 80.0, "")
    };
    assert_eq!(existing.result.crcl(), None);
    assert!(DuplicatePolicy::unwindowed().is_duplicate(&candidate, &existing));
}

#[test]
fn find_duplicate_returns_first_match() {
    let records = vec![
        saved(t(0), 60.0, 70.0, "70.00"),
        saved(t(1), 50.0, 70.0, "87.50"),
        saved(t(2), 50.0, 70.0, "87.50"),
    ];
    let candidate = saved(t(3), 50.0, 70.0, "87.50");
    let found = DuplicatePolicy::unwindowed()
        .find_duplicate(&candidate, &records)
        .unwrap();
    assert_eq!(found.id, records[1].id);
}

#[test]
fn saved_calculation_round_trips_through_json() {
    let record = saved(t(0), 50.0, 70.0, "87.50");
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"status\":\"evaluated\""));
    assert!(json.contains("\"crcl\":\"87.50\""));
    assert!(json.contains("\"k\":\"0.7955\""));
    let back: SavedCalculation = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn record_prefixes_follow_key_layout() {
    let id = Uuid::new_v4();
    assert_eq!(
        record_keys::record(SavedCalculation::PREFIX, id),
        record_keys::calculation(id)
    );
    assert_eq!(
        record_keys::record(SideEffectReport::PREFIX, id),
        format!("observations/{id}.json")
    );
}

#[test]
fn window_is_sixty_seconds() {
    assert_eq!(DuplicatePolicy::DEFAULT_WINDOW, SignedDuration::from_secs(60));
}
