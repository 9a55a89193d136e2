mod common;

use levocalc_core::dose_options::DoseStrength;
use levocalc_core::models::patient::Sex;
use levocalc_engine::clearance::{
    ClearanceModel, ClearanceModelKind, CreatinineThresholdClearance, ProportionalClearance,
};
use levocalc_engine::pharmacokinetics::{body_mass_index, compute, creatinine_clearance};

use common::{healthy_adult, patient};

#[test]
fn cockcroft_gault_with_female_factor() {
    assert_eq!(creatinine_clearance(50.0, 70.0, 1.0, Sex::Male), 87.5);
    let female = creatinine_clearance(50.0, 70.0, 1.0, Sex::Female);
    assert!((female - 87.5 * 0.85).abs() < 1e-9);
}

#[test]
fn proportional_clearance_ignores_creatinine() {
    let model = ProportionalClearance;
    assert!((model.clearance(100.0, 0.8) - 70.0).abs() < 1e-9);
    assert!((model.clearance(100.0, 3.0) - 70.0).abs() < 1e-9);
}

#[test]
fn threshold_clearance_switches_above_1_2() {
    let model = CreatinineThresholdClearance;
    assert!((model.clearance(50.0, 1.2) - 3.9).abs() < 1e-9);
    assert!((model.clearance(50.0, 1.21) - 3.8).abs() < 1e-9);
}

#[test]
fn clearance_kinds_parse_and_resolve() {
    assert_eq!(
        "creatinine_threshold".parse::<ClearanceModelKind>().unwrap(),
        ClearanceModelKind::CreatinineThreshold
    );
    assert!("linear".parse::<ClearanceModelKind>().is_err());
    for kind in [
        ClearanceModelKind::Proportional,
        ClearanceModelKind::CreatinineThreshold,
    ] {
        assert_eq!(kind.model().kind(), kind);
        assert_eq!(kind.to_string().parse::<ClearanceModelKind>().unwrap(), kind);
    }
    assert_eq!(ClearanceModelKind::default(), ClearanceModelKind::Proportional);
}

#[test]
fn derived_parameters_follow_one_compartment_relations() {
    let pk = compute(&healthy_adult(), &ProportionalClearance);
    assert!((pk.vd - 77.0).abs() < 1e-9);
    assert!((pk.k - pk.cl / pk.vd).abs() < 1e-12);
    assert!((pk.half_life - 0.693 / pk.k).abs() < 1e-9);
    assert!((pk.auc - 500.0 / pk.cl).abs() < 1e-9);
    assert!((pk.cmax - 500.0 / pk.vd).abs() < 1e-9);
}

#[test]
fn zero_clearance_gives_zero_half_life_and_auc() {
    // CrCl is 0 at age 140.
    let input = patient(140.0, 70.0, Sex::Male, 1.0, DoseStrength::Mg750);
    let params = compute(&input, &ProportionalClearance).to_parameters();
    assert_eq!(params.crcl, "0.00");
    assert_eq!(params.cl, "0.00");
    assert_eq!(params.k, "0.0000");
    assert_eq!(params.half_life, "0.00");
    assert_eq!(params.auc, "0.00");
    assert_eq!(params.cmax, "9.74");
}

#[test]
fn bmi_needs_positive_height() {
    assert_eq!(body_mass_index(70.0, None), None);
    assert_eq!(body_mass_index(70.0, Some(0.0)), None);
    let bmi = body_mass_index(70.0, Some(175.0)).unwrap();
    assert!((bmi - 22.857).abs() < 1e-3);

    let mut input = healthy_adult();
    input.height_cm = Some(175.0);
    let params = compute(&input, &ProportionalClearance).to_parameters();
    assert_eq!(params.bmi.as_deref(), Some("22.9"));
}

#[test]
fn precision_is_fixed_per_parameter() {
    let params = compute(&healthy_adult(), &CreatinineThresholdClearance).to_parameters();
    for value in [
        &params.crcl,
        &params.cl,
        &params.vd,
        &params.half_life,
        &params.auc,
        &params.cmax,
    ] {
        assert_eq!(value.split('.').nth(1).map(str::len), Some(2), "{value}");
    }
    assert_eq!(params.k.split('.').nth(1).map(str::len), Some(4));
}
