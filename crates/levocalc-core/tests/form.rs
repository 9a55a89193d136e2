use levocalc_core::dose_options::DoseStrength;
use levocalc_core::form::{FieldProblem, FormField, FormStep, PatientForm, parse_number};
use levocalc_core::models::patient::{Pregnancy, Sex};

fn filled_form() -> PatientForm {
    PatientForm {
        name: "Layla".to_string(),
        age: "50".to_string(),
        weight: "70".to_string(),
        serum_creatinine: "1.0".to_string(),
        ..PatientForm::default()
    }
}

#[test]
fn parse_number_treats_blank_and_garbage_as_absent() {
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("   "), None);
    assert_eq!(parse_number("abc"), None);
    assert_eq!(parse_number("NaN"), None);
    assert_eq!(parse_number("inf"), None);
}

#[test]
fn parse_number_keeps_zero_as_a_value() {
    assert_eq!(parse_number("0"), Some(0.0));
    assert_eq!(parse_number(" 3.2 "), Some(3.2));
}

#[test]
fn default_form_selects_cap_500() {
    let form = PatientForm::default();
    assert_eq!(form.indication_id, "cap_500");
    assert_eq!(form.sex, Sex::Male);
    assert_eq!(form.pregnancy, Pregnancy::No);
}

#[test]
fn patient_info_step_requires_name_age_weight() {
    let form = PatientForm::default();
    let errors = form.validate_step(FormStep::PatientInfo).unwrap_err();
    assert!(errors.contains(FormField::Name));
    assert!(errors.contains(FormField::Age));
    assert!(errors.contains(FormField::Weight));
    assert!(!errors.contains(FormField::SerumCreatinine));
}

#[test]
fn non_positive_age_is_rejected() {
    let form = PatientForm {
        age: "0".to_string(),
        ..filled_form()
    };
    let errors = form.validate_step(FormStep::PatientInfo).unwrap_err();
    assert_eq!(errors.errors.len(), 1);
    assert_eq!(errors.errors[0].field, FormField::Age);
    assert_eq!(errors.errors[0].problem, FieldProblem::Required);
}

#[test]
fn medical_history_step_requires_nothing() {
    assert!(
        PatientForm::default()
            .validate_step(FormStep::MedicalHistory)
            .is_ok()
    );
}

#[test]
fn lab_step_requires_positive_creatinine() {
    let form = PatientForm {
        serum_creatinine: "-1".to_string(),
        ..filled_form()
    };
    let errors = form.validate_step(FormStep::LabValues).unwrap_err();
    assert!(errors.contains(FormField::SerumCreatinine));
}

#[test]
fn unknown_indication_is_a_field_error() {
    let form = PatientForm {
        indication_id: "cap_1000".to_string(),
        ..filled_form()
    };
    let errors = form.to_input().unwrap_err();
    assert_eq!(errors.errors.len(), 1);
    assert_eq!(errors.errors[0].problem, FieldProblem::UnknownIndication);
}

#[test]
fn to_input_resolves_dose_and_optional_labs() {
    let form = PatientForm {
        indication_id: "pyelo_250".to_string(),
        height: "170".to_string(),
        potassium: "3.1".to_string(),
        magnesium: "".to_string(),
        calcium: "n/a".to_string(),
        ..filled_form()
    };
    let input = form.to_input().unwrap();
    assert_eq!(input.dose, DoseStrength::Mg250);
    assert_eq!(input.indication_id, "pyelo_250");
    assert_eq!(input.height_cm, Some(170.0));
    assert_eq!(input.labs.potassium, Some(3.1));
    assert_eq!(input.labs.magnesium, None);
    assert_eq!(input.labs.calcium, None);
    assert_eq!(input.age_years, 50.0);
    assert_eq!(input.serum_creatinine, 1.0);
}

#[test]
fn non_positive_height_is_absent() {
    let form = PatientForm {
        height: "0".to_string(),
        ..filled_form()
    };
    assert_eq!(form.to_input().unwrap().height_cm, None);
}

#[test]
fn to_input_collects_errors_from_every_step() {
    let errors = PatientForm::default().to_input().unwrap_err();
    let fields: Vec<FormField> = errors.errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            FormField::Name,
            FormField::Age,
            FormField::Weight,
            FormField::SerumCreatinine
        ]
    );
}

#[test]
fn blank_name_alone_blocks_conversion() {
    let form = PatientForm {
        name: "  ".to_string(),
        ..filled_form()
    };
    assert!(form.to_input().unwrap_err().contains(FormField::Name));
}

#[test]
fn steps_are_numbered_in_wizard_order() {
    let numbers: Vec<u8> = FormStep::ALL.iter().map(FormStep::number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}
