use symcheck_catalogue::{Catalogue, CatalogueError};
use symcheck_cli::render::{
    DISCLAIMER, NO_MATCHES, NO_SYMPTOMS, render_condition, render_condition_list, render_problems,
    render_results, render_symptoms,
};
use symcheck_core::models::symptom::Symptom;
use symcheck_matching::rank_conditions;
use symcheck_matching::search::filter_symptoms;

#[test]
fn symptom_list_groups_by_category() {
    let symptoms = filter_symptoms(Catalogue::builtin().symptoms(), "pain");
    let text = render_symptoms(&symptoms);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "Cardiovascular:",
            "  Chest Pain      chest-pain",
            "Gastrointestinal:",
            "  Abdominal Pain  abdominal-pain",
            "Musculoskeletal:",
            "  Joint Pain      joint-pain",
            "  Back Pain       back-pain",
        ]
    );
}

#[test]
fn symptom_list_aligns_non_ascii_names() {
    let nausea = Symptom::new("nausea", "Übelkeit", "Magen");
    let fever = Symptom::new("fever", "Fieber", "Magen");
    let text = render_symptoms(&[&nausea, &fever]);
    assert_eq!(text, "Magen:\n  Übelkeit  nausea\n  Fieber    fever");
}

#[test]
fn empty_symptom_list_says_so() {
    assert_eq!(render_symptoms(&[]), NO_SYMPTOMS);
}

#[test]
fn condition_list_shows_severity_label() {
    let text = render_condition_list(Catalogue::builtin().conditions());
    assert_eq!(text.lines().count(), 7);
    assert!(text.starts_with("Common Cold (common-cold): Low Severity"));
    assert!(text.contains("Influenza (Flu) (flu): Moderate Severity"));
}

#[test]
fn condition_card_has_all_sections() {
    let migraine = Catalogue::builtin().condition("migraine").unwrap();
    let card = render_condition(migraine);
    assert!(card.starts_with("## Migraine\nModerate Severity\n"));
    assert!(card.contains("### Recommendations\n- Rest in a quiet, dark room\n"));
    assert!(card.contains("### When to Seek Medical Help\nIf experiencing sudden severe headache"));
}

#[test]
fn results_include_disclaimer_and_cards_in_rank_order() {
    let ranked = rank_conditions(Catalogue::builtin(), ["headache", "nausea", "dizziness"]);
    let text = render_results(&ranked, false);
    assert!(text.contains(DISCLAIMER));

    let migraine = text.find("## Migraine").unwrap();
    let cold = text.find("## Common Cold").unwrap();
    let flu = text.find("## Influenza (Flu)").unwrap();
    assert!(migraine < cold && cold < flu);
    assert!(!text.contains("Matched"));
}

#[test]
fn results_can_show_scores() {
    let ranked = rank_conditions(Catalogue::builtin(), ["headache", "nausea", "dizziness"]);
    let text = render_results(&ranked, true);
    assert!(text.contains("Matched 3 (100%): headache, nausea, dizziness"));
    assert!(text.contains("Matched 1 (33%): headache"));
}

#[test]
fn empty_results_show_no_match_message() {
    let ranked = rank_conditions(Catalogue::builtin(), ["unknown-symptom-xyz"]);
    let text = render_results(&ranked, false);
    assert!(text.contains(DISCLAIMER));
    assert!(text.ends_with(NO_MATCHES));
}

#[test]
fn problems_are_listed() {
    let problems = vec![
        CatalogueError::DuplicateSymptom("fever".to_string()),
        CatalogueError::UnknownSymptom {
            condition_id: "flu".to_string(),
            symptom_id: "chills".to_string(),
        },
    ];
    assert_eq!(
        render_problems(&problems),
        "2 problem(s) found:\n- duplicate symptom id: fever\n\
         - condition 'flu' references unknown symptom 'chills'"
    );
}
