//! Plain-text rendering. Every function returns a `String` so output can be
//! checked without a terminal.

use symcheck_catalogue::CatalogueError;
use symcheck_core::models::condition::Condition;
use symcheck_core::models::symptom::Symptom;
use symcheck_matching::ConditionMatch;

pub const DISCLAIMER: &str = "Important: This tool provides general information only and is \
not a substitute for professional medical advice. Always consult a healthcare provider for \
proper diagnosis and treatment.";

pub const NO_MATCHES: &str =
    "No matching conditions found. Please try selecting different symptoms.";

pub const NO_SYMPTOMS: &str = "No symptoms match your search.";

/// Symptoms grouped under their category, categories in first-seen order.
pub fn render_symptoms(symptoms: &[&Symptom]) -> String {
    if symptoms.is_empty() {
        return NO_SYMPTOMS.to_string();
    }
    // Padding counts chars, so width must too.
    let width = symptoms
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut categories: Vec<&str> = Vec::new();
    for symptom in symptoms {
        if !categories.contains(&symptom.category.as_str()) {
            categories.push(&symptom.category);
        }
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(&format!("{category}:\n"));
        for symptom in symptoms.iter().filter(|s| s.category == category) {
            output.push_str(&format!("  {:<width$}  {}\n", symptom.name, symptom.id));
        }
    }
    output.trim_end().to_string()
}

pub fn render_condition_list(conditions: &[Condition]) -> String {
    conditions
        .iter()
        .map(|c| format!("{} ({}): {} Severity", c.name, c.id, c.severity.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One result card: description, severity, recommendations and escalation
/// guidance.
pub fn render_condition(condition: &Condition) -> String {
    let mut output = format!("## {}\n", condition.name);
    output.push_str(&format!("{} Severity\n", condition.severity.label()));
    output.push_str(&format!("{}\n\n", condition.description));
    output.push_str("### Recommendations\n");
    for rec in &condition.recommendations {
        output.push_str(&format!("- {rec}\n"));
    }
    output.push_str("\n### When to Seek Medical Help\n");
    output.push_str(&condition.when_to_seek_help);
    output.push('\n');
    output
}

pub fn render_results(matches: &[ConditionMatch<'_>], show_scores: bool) -> String {
    let mut output = String::from("# Your Results\n\n");
    output.push_str(DISCLAIMER);
    output.push_str("\n\n");

    if matches.is_empty() {
        output.push_str(NO_MATCHES);
        return output;
    }

    let cards: Vec<String> = matches
        .iter()
        .map(|m| {
            let mut card = render_condition(m.condition);
            if show_scores {
                card.push_str(&format!(
                    "\nMatched {} ({:.0}%): {}\n",
                    m.match_count,
                    m.match_percentage,
                    m.matched_symptoms.join(", ")
                ));
            }
            card
        })
        .collect();
    output.push_str(cards.join("\n").trim_end());
    output
}

pub fn render_problems(problems: &[CatalogueError]) -> String {
    let mut output = format!("{} problem(s) found:", problems.len());
    for problem in problems {
        output.push_str(&format!("\n- {problem}"));
    }
    output
}
