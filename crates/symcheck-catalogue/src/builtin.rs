//! Compiled-in reference data.
//!
//! Declaration order is significant: it is the listing order shown to users
//! and the tie-break order when two conditions score the same.

use symcheck_core::models::condition::Condition;
use symcheck_core::models::severity::Severity;
use symcheck_core::models::symptom::Symptom;

/// (id, name, category)
const SYMPTOMS: &[(&str, &str, &str)] = &[
    ("fever", "Fever", "General"),
    ("cough", "Cough", "Respiratory"),
    ("headache", "Headache", "Neurological"),
    ("fatigue", "Fatigue", "General"),
    ("sore-throat", "Sore Throat", "Respiratory"),
    ("body-aches", "Body Aches", "Musculoskeletal"),
    ("runny-nose", "Runny Nose", "Respiratory"),
    ("nausea", "Nausea", "Gastrointestinal"),
    ("vomiting", "Vomiting", "Gastrointestinal"),
    ("diarrhea", "Diarrhea", "Gastrointestinal"),
    ("shortness-breath", "Shortness of Breath", "Respiratory"),
    ("chest-pain", "Chest Pain", "Cardiovascular"),
    ("dizziness", "Dizziness", "Neurological"),
    ("rash", "Rash", "Dermatological"),
    ("chills", "Chills", "General"),
    ("loss-taste-smell", "Loss of Taste or Smell", "Sensory"),
    ("abdominal-pain", "Abdominal Pain", "Gastrointestinal"),
    ("joint-pain", "Joint Pain", "Musculoskeletal"),
    ("congestion", "Congestion", "Respiratory"),
    ("back-pain", "Back Pain", "Musculoskeletal"),
];

struct ConditionDef {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    severity: Severity,
    common_symptoms: &'static [&'static str],
    recommendations: &'static [&'static str],
    when_to_seek_help: &'static str,
}

const CONDITIONS: &[ConditionDef] = &[
    ConditionDef {
        id: "common-cold",
        name: "Common Cold",
        description: "A viral infection of the upper respiratory tract, typically mild and self-limiting.",
        severity: Severity::Low,
        common_symptoms: &[
            "runny-nose",
            "sore-throat",
            "cough",
            "congestion",
            "body-aches",
            "headache",
        ],
        recommendations: &[
            "Get plenty of rest",
            "Stay hydrated with water and warm fluids",
            "Use over-the-counter pain relievers if needed",
            "Gargle with warm salt water for sore throat",
            "Use a humidifier to ease congestion",
        ],
        when_to_seek_help: "If symptoms persist beyond 10 days or worsen significantly",
    },
    ConditionDef {
        id: "flu",
        name: "Influenza (Flu)",
        description: "A contagious respiratory illness caused by influenza viruses, more severe than a common cold.",
        severity: Severity::Moderate,
        common_symptoms: &[
            "fever",
            "cough",
            "sore-throat",
            "body-aches",
            "headache",
            "fatigue",
            "chills",
        ],
        recommendations: &[
            "Rest and isolate to prevent spread",
            "Drink plenty of fluids",
            "Take antiviral medication if prescribed within 48 hours",
            "Use fever reducers as recommended",
            "Monitor symptoms closely",
        ],
        when_to_seek_help: "If experiencing difficulty breathing, chest pain, persistent fever, or if you're in a high-risk group",
    },
    ConditionDef {
        id: "covid-19",
        name: "COVID-19",
        description: "A respiratory illness caused by the SARS-CoV-2 virus, with symptoms ranging from mild to severe.",
        severity: Severity::Moderate,
        common_symptoms: &[
            "fever",
            "cough",
            "fatigue",
            "loss-taste-smell",
            "shortness-breath",
            "body-aches",
            "sore-throat",
        ],
        recommendations: &[
            "Self-isolate immediately",
            "Get tested to confirm diagnosis",
            "Monitor oxygen levels if possible",
            "Rest and stay hydrated",
            "Contact healthcare provider for guidance on treatment options",
        ],
        when_to_seek_help: "If experiencing severe shortness of breath, persistent chest pain, confusion, or bluish lips/face",
    },
    ConditionDef {
        id: "gastroenteritis",
        name: "Gastroenteritis (Stomach Flu)",
        description: "Inflammation of the digestive tract, usually caused by viral or bacterial infection.",
        severity: Severity::Moderate,
        common_symptoms: &[
            "nausea",
            "vomiting",
            "diarrhea",
            "abdominal-pain",
            "fever",
            "body-aches",
        ],
        recommendations: &[
            "Stay hydrated with clear fluids and oral rehydration solutions",
            "Eat bland foods when able (BRAT diet: bananas, rice, applesauce, toast)",
            "Avoid dairy and fatty foods temporarily",
            "Rest as much as possible",
            "Wash hands frequently to prevent spread",
        ],
        when_to_seek_help: "If severe dehydration, bloody stools, high fever, or symptoms lasting more than 3 days",
    },
    ConditionDef {
        id: "migraine",
        name: "Migraine",
        description: "A neurological condition characterized by intense, debilitating headaches often accompanied by other symptoms.",
        severity: Severity::Moderate,
        common_symptoms: &["headache", "nausea", "dizziness", "fatigue"],
        recommendations: &[
            "Rest in a quiet, dark room",
            "Apply cold compress to forehead",
            "Take prescribed migraine medication early",
            "Stay hydrated",
            "Identify and avoid triggers (stress, certain foods, lack of sleep)",
        ],
        when_to_seek_help: "If experiencing sudden severe headache, headache with fever/stiff neck, or neurological symptoms like vision changes",
    },
    ConditionDef {
        id: "sinusitis",
        name: "Sinusitis",
        description: "Inflammation or infection of the sinuses, often following a cold or allergies.",
        severity: Severity::Low,
        common_symptoms: &["congestion", "headache", "fever", "runny-nose", "cough"],
        recommendations: &[
            "Use saline nasal irrigation",
            "Apply warm compresses to face",
            "Stay hydrated",
            "Use a humidifier",
            "Take decongestants or pain relievers as needed",
        ],
        when_to_seek_help: "If symptoms persist beyond 10 days, severe headache, or high fever",
    },
    ConditionDef {
        id: "bronchitis",
        name: "Acute Bronchitis",
        description: "Inflammation of the bronchial tubes, usually following a respiratory infection.",
        severity: Severity::Moderate,
        common_symptoms: &["cough", "fatigue", "shortness-breath", "chest-pain", "fever"],
        recommendations: &[
            "Get plenty of rest",
            "Drink warm fluids",
            "Use a humidifier",
            "Avoid smoke and irritants",
            "Take over-the-counter cough suppressants if needed",
        ],
        when_to_seek_help: "If cough lasts more than 3 weeks, coughing up blood, or experiencing severe breathing difficulties",
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The built-in symptoms, in declaration order.
pub fn symptoms() -> Vec<Symptom> {
    SYMPTOMS
        .iter()
        .map(|(id, name, category)| Symptom::new(*id, *name, *category))
        .collect()
}

/// The built-in conditions, in declaration order.
pub fn conditions() -> Vec<Condition> {
    CONDITIONS
        .iter()
        .map(|def| Condition {
            id: def.id.to_string(),
            name: def.name.to_string(),
            description: def.description.to_string(),
            severity: def.severity,
            common_symptoms: owned(def.common_symptoms),
            recommendations: owned(def.recommendations),
            when_to_seek_help: def.when_to_seek_help.to_string(),
        })
        .collect()
}
