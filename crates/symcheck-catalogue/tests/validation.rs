use symcheck_catalogue::{Catalogue, CatalogueError};
use symcheck_core::error::CoreError;
use symcheck_core::models::condition::Condition;
use symcheck_core::models::severity::Severity;
use symcheck_core::models::symptom::Symptom;

fn symptoms() -> Vec<Symptom> {
    vec![
        Symptom::new("fever", "Fever", "General"),
        Symptom::new("cough", "Cough", "Respiratory"),
    ]
}

fn condition(id: &str, common: &[&str]) -> Condition {
    Condition {
        id: id.to_string(),
        name: id.to_uppercase(),
        description: String::new(),
        severity: Severity::Low,
        common_symptoms: common.iter().map(|s| s.to_string()).collect(),
        recommendations: vec![],
        when_to_seek_help: String::new(),
    }
}

#[test]
fn valid_parts_build_a_catalogue() {
    let catalogue = Catalogue::new(symptoms(), vec![condition("cold", &["cough"])]).unwrap();
    assert_eq!(catalogue.conditions().len(), 1);
}

#[test]
fn dangling_reference_is_rejected() {
    let err = Catalogue::new(symptoms(), vec![condition("cold", &["cough", "sneeze"])])
        .unwrap_err();
    match err {
        CatalogueError::UnknownSymptom {
            condition_id,
            symptom_id,
        } => {
            assert_eq!(condition_id, "cold");
            assert_eq!(symptom_id, "sneeze");
        }
        other => panic!("expected UnknownSymptom, got {other:?}"),
    }
}

#[test]
fn duplicate_symptom_id_is_rejected() {
    let mut parts = symptoms();
    parts.push(Symptom::new("fever", "High Temperature", "General"));
    let err = Catalogue::new(parts, vec![]).unwrap_err();
    assert!(matches!(err, CatalogueError::DuplicateSymptom(ref id) if id == "fever"));
}

#[test]
fn duplicate_condition_id_is_rejected() {
    let err = Catalogue::new(
        symptoms(),
        vec![condition("cold", &["cough"]), condition("cold", &["fever"])],
    )
    .unwrap_err();
    assert!(matches!(err, CatalogueError::DuplicateCondition(ref id) if id == "cold"));
}

#[test]
fn repeated_common_symptom_is_rejected() {
    let err = Catalogue::new(symptoms(), vec![condition("cold", &["cough", "cough"])])
        .unwrap_err();
    assert!(matches!(err, CatalogueError::RepeatedSymptom { .. }));
}

#[test]
fn empty_record_fields_are_rejected() {
    let err = Catalogue::new(vec![Symptom::new("", "Fever", "General")], vec![]).unwrap_err();
    assert!(matches!(
        err,
        CatalogueError::Record(CoreError::EmptyField { field: "id", .. })
    ));
}

#[test]
fn validate_parts_reports_every_problem() {
    let mut parts = symptoms();
    parts.push(Symptom::new("cough", "Cough", "Respiratory"));
    let conditions = vec![
        condition("cold", &["sneeze"]),
        condition("flu", &["fever", "chills"]),
    ];

    let errors = Catalogue::validate_parts(&parts, &conditions);
    assert_eq!(errors.len(), 3);
    assert!(matches!(errors[0], CatalogueError::DuplicateSymptom(_)));
    assert_eq!(
        errors[1].to_string(),
        "condition 'cold' references unknown symptom 'sneeze'"
    );
    assert_eq!(
        errors[2].to_string(),
        "condition 'flu' references unknown symptom 'chills'"
    );
}

#[test]
fn empty_catalogue_is_valid() {
    let catalogue = Catalogue::new(vec![], vec![]).unwrap();
    assert!(catalogue.symptoms().is_empty());
    assert!(catalogue.categories().is_empty());
}
