use symcheck_core::error::CoreError;
use symcheck_core::models::condition::Condition;
use symcheck_core::models::severity::Severity;
use symcheck_core::models::symptom::Symptom;

fn sample_condition() -> Condition {
    Condition {
        id: "migraine".to_string(),
        name: "Migraine".to_string(),
        description: "Intense headaches.".to_string(),
        severity: Severity::Moderate,
        common_symptoms: vec!["headache".to_string(), "nausea".to_string()],
        recommendations: vec!["Rest in a quiet, dark room".to_string()],
        when_to_seek_help: "If the headache is sudden and severe".to_string(),
    }
}

#[test]
fn severity_parses_case_insensitively() {
    assert_eq!("low".parse::<Severity>().unwrap(), Severity::Low);
    assert_eq!("Moderate".parse::<Severity>().unwrap(), Severity::Moderate);
    assert_eq!(" HIGH ".parse::<Severity>().unwrap(), Severity::High);
}

#[test]
fn severity_rejects_unknown_values() {
    let err = "critical".parse::<Severity>().unwrap_err();
    assert!(matches!(err, CoreError::InvalidSeverity(ref s) if s == "critical"));
}

#[test]
fn severity_label_is_title_cased() {
    assert_eq!(Severity::Low.label(), "Low");
    assert_eq!(Severity::Moderate.label(), "Moderate");
    assert_eq!(Severity::High.label(), "High");
    assert_eq!(Severity::High.to_string(), "high");
}

#[test]
fn severity_serializes_lowercase() {
    let json = serde_json::to_string(&Severity::Moderate).unwrap();
    assert_eq!(json, "\"moderate\"");
    let back: Severity = serde_json::from_str("\"high\"").unwrap();
    assert_eq!(back, Severity::High);
}

#[test]
fn condition_uses_camel_case_field_names() {
    let value = serde_json::to_value(sample_condition()).unwrap();
    assert!(value.get("commonSymptoms").is_some());
    assert!(value.get("whenToSeekHelp").is_some());
    assert!(value.get("common_symptoms").is_none());
    assert_eq!(value["severity"], "moderate");
}

#[test]
fn condition_has_symptom() {
    let condition = sample_condition();
    assert!(condition.has_symptom("nausea"));
    assert!(!condition.has_symptom("rash"));
}

#[test]
fn condition_without_symptoms_is_invalid() {
    let mut condition = sample_condition();
    condition.common_symptoms.clear();
    let err = condition.validate().unwrap_err();
    assert!(matches!(
        err,
        CoreError::EmptyField { field: "commonSymptoms", .. }
    ));
}

#[test]
fn symptom_with_blank_name_is_invalid() {
    let symptom = Symptom::new("fever", "  ", "General");
    let err = symptom.validate().unwrap_err();
    assert_eq!(err.to_string(), "symptom 'fever' has an empty name");
}

#[test]
fn valid_records_pass_validation() {
    assert!(Symptom::new("fever", "Fever", "General").validate().is_ok());
    assert!(sample_condition().validate().is_ok());
}
