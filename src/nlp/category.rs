//! Clinical category context for an utterance.
//!
//! A coarser, phrase-level view than the entity extractors: which organ
//! systems the patient is describing, how bad it sounds, and whatever time
//! of day, onset and trigger cues the sentence carries. Matching is plain
//! case-insensitive substring containment over the whole text.

use serde::{Deserialize, Serialize};

use crate::models::{OnsetPattern, SeverityLevel, SymptomCategory, TimeContext, Trigger};

// ═══════════════════════════════════════════
// Rule tables
// ═══════════════════════════════════════════

struct CategoryRule {
    category: SymptomCategory,
    keywords: &'static [&'static str],
    mild: &'static [&'static str],
    moderate: &'static [&'static str],
    severe: &'static [&'static str],
}

const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: SymptomCategory::Respiratory,
        keywords: &[
            "cough", "breathing", "shortness of breath", "chest tightness", "wheezing",
            "sputum", "khansi", "sans lene mein takleef", "seene mein bharipan",
        ],
        mild: &["occasional cough", "light cough", "halki khansi"],
        moderate: &["persistent cough", "productive cough", "lagatar khansi"],
        severe: &["blood in cough", "severe breathing difficulty", "khoon ke saath khansi"],
    },
    CategoryRule {
        category: SymptomCategory::Cardiovascular,
        keywords: &[
            "chest pain", "heart palpitations", "irregular heartbeat", "dizziness",
            "seene mein dard", "dil ki dharakne mein gadbadi",
        ],
        mild: &["mild chest discomfort", "halka seene mein dard"],
        moderate: &["chest tightness", "palpitations", "seene mein bharipan"],
        severe: &["severe chest pain", "crushing pain", "tez seene mein dard"],
    },
    CategoryRule {
        category: SymptomCategory::Gastrointestinal,
        keywords: &[
            "nausea", "vomiting", "diarrhea", "stomach pain", "indigestion", "ulti",
            "pet mein dard", "loose motion", "acidity",
        ],
        mild: &["mild nausea", "halki ulti"],
        moderate: &["frequent vomiting", "bar bar ulti"],
        severe: &["blood in vomit", "severe dehydration", "khoon ki ulti"],
    },
    CategoryRule {
        category: SymptomCategory::Neurological,
        keywords: &[
            "headache", "migraine", "dizziness", "confusion", "sir dard", "chakkar", "bhram",
        ],
        mild: &["mild headache", "halka sir dard"],
        moderate: &["throbbing headache", "tez sir dard"],
        severe: &["severe migraine", "unbearable headache", "asahaniya sir dard"],
    },
    CategoryRule {
        category: SymptomCategory::Musculoskeletal,
        keywords: &[
            "joint pain", "muscle pain", "back pain", "stiffness", "jodon mein dard",
            "muscles mein dard", "kamar dard",
        ],
        mild: &["mild joint stiffness", "halka jodon ka dard"],
        moderate: &["joint swelling", "jodon mein sujan"],
        severe: &["severe joint pain", "inability to move", "tez jodon ka dard"],
    },
    CategoryRule {
        category: SymptomCategory::Dermatological,
        keywords: &[
            "rash", "itching", "skin irritation", "redness", "khujli", "skin par daag", "lali",
        ],
        mild: &["mild itching", "halki khujli"],
        moderate: &["persistent rash", "lagatar khujli"],
        severe: &["severe allergic reaction", "tez allergy"],
    },
    CategoryRule {
        category: SymptomCategory::Infectious,
        keywords: &[
            "fever", "chills", "sweating", "fatigue", "bukhar", "kmpkampi", "pasina", "kamzori",
        ],
        mild: &["low grade fever", "halka bukhar"],
        moderate: &["moderate fever", "persistent fever", "lagatar bukhar"],
        severe: &["high fever", "tez bukhar", "dangerous fever"],
    },
];

const TIME_HINTS: &[(TimeContext, &[&str])] = &[
    (TimeContext::Morning, &["morning sickness", "early morning symptoms", "subah ki takleef"]),
    (TimeContext::Evening, &["evening fatigue", "night symptoms", "shaam ki kamzori"]),
    (TimeContext::Night, &["night sweats", "sleep disturbance", "raat ko pasina"]),
];

const ONSET_HINTS: &[(OnsetPattern, &[&str])] = &[
    (OnsetPattern::Acute, &["sudden onset", "achanak shuru", "immediate"]),
    (OnsetPattern::Chronic, &["long term", "lambe samay se", "persistent", "lagatar"]),
];

const TRIGGER_HINTS: &[(Trigger, &[&str])] = &[
    (Trigger::Food, &["after eating", "khane ke baad", "food related"]),
    (Trigger::Exercise, &["after physical activity", "vyayam ke baad"]),
    (Trigger::Stress, &["during stress", "tension mein", "stress related"]),
];

/// Any of these anywhere in the text marks the utterance as an emergency.
const EMERGENCY_KEYWORDS: &[&str] = &[
    "severe", "unbearable", "crushing", "sharp", "sudden", "emergency",
    "tez", "asahaniya", "achanak", "bharipan",
];

// ═══════════════════════════════════════════
// Result types
// ═══════════════════════════════════════════

/// One organ system the utterance touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub category: SymptomCategory,
    pub keywords: Vec<String>,
    pub severity: SeverityLevel,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextAnalysis {
    pub detected: Vec<CategoryMatch>,
    pub severity: SeverityLevel,
    pub time_context: Option<TimeContext>,
    pub onset: Option<OnsetPattern>,
    pub triggers: Vec<Trigger>,
    pub emergency_flag: bool,
    pub original_text: String,
    /// 0..=100.
    pub confidence: u8,
}

impl ContextAnalysis {
    pub fn categories(&self) -> Vec<SymptomCategory> {
        self.detected.iter().map(|m| m.category).collect()
    }
}

// ═══════════════════════════════════════════
// Detection
// ═══════════════════════════════════════════

pub fn detect_symptom_context(text: &str) -> ContextAnalysis {
    let lower = text.to_lowercase();
    let contains_any = |phrases: &[&str]| phrases.iter().any(|p| lower.contains(p));

    let emergency_flag = contains_any(EMERGENCY_KEYWORDS);
    let mut severity = if emergency_flag {
        SeverityLevel::Severe
    } else {
        SeverityLevel::Mild
    };

    let mut detected = Vec::new();
    for rule in CATEGORY_RULES {
        let keywords: Vec<String> = rule
            .keywords
            .iter()
            .filter(|k| lower.contains(*k))
            .map(|k| k.to_string())
            .collect();
        if keywords.is_empty() {
            continue;
        }

        let category_severity = if contains_any(rule.mild) {
            SeverityLevel::Mild
        } else if contains_any(rule.moderate) {
            SeverityLevel::Moderate
        } else if contains_any(rule.severe) {
            SeverityLevel::Severe
        } else {
            SeverityLevel::Mild
        };

        // A severe overall rating only yields to another severe category.
        if category_severity == SeverityLevel::Severe || severity != SeverityLevel::Severe {
            severity = category_severity;
        }

        detected.push(CategoryMatch {
            category: rule.category,
            keywords,
            severity: category_severity,
            description: category_description(rule.category, category_severity).to_string(),
        });
    }

    let time_context = TIME_HINTS
        .iter()
        .find(|(_, phrases)| contains_any(phrases))
        .map(|(time, _)| *time);
    let onset = ONSET_HINTS
        .iter()
        .find(|(_, phrases)| contains_any(phrases))
        .map(|(onset, _)| *onset);
    let triggers: Vec<Trigger> = TRIGGER_HINTS
        .iter()
        .filter(|(_, phrases)| contains_any(phrases))
        .map(|(trigger, _)| *trigger)
        .collect();

    let confidence = analysis_confidence(
        detected.len(),
        time_context.is_some(),
        onset.is_some(),
        !triggers.is_empty(),
    );

    ContextAnalysis {
        detected,
        severity,
        time_context,
        onset,
        triggers,
        emergency_flag,
        original_text: text.to_string(),
        confidence,
    }
}

fn analysis_confidence(categories: usize, has_time: bool, has_onset: bool, has_triggers: bool) -> u8 {
    let bonus = [has_time, has_onset, has_triggers]
        .iter()
        .filter(|b| **b)
        .count();
    (categories * 20 + bonus * 10).min(100) as u8
}

pub fn category_description(category: SymptomCategory, severity: SeverityLevel) -> &'static str {
    use SeverityLevel::*;
    use SymptomCategory::*;
    match (category, severity) {
        (Respiratory, Mild) => "Mild respiratory discomfort - monitor symptoms",
        (Respiratory, Moderate) => "Moderate breathing issues - consider medical consultation",
        (Respiratory, Severe) => "Severe respiratory distress - seek immediate medical attention",
        (Cardiovascular, Mild) => "Minor heart-related symptoms - lifestyle monitoring recommended",
        (Cardiovascular, Moderate) => "Notable cardiovascular symptoms - medical evaluation advised",
        (Cardiovascular, Severe) => "Critical heart symptoms - emergency medical care required",
        (Gastrointestinal, Mild) => "Minor digestive issues - dietary adjustments may help",
        (Gastrointestinal, Moderate) => "Persistent digestive problems - medical review suggested",
        (Gastrointestinal, Severe) => "Severe gastrointestinal distress - urgent medical care needed",
        (Neurological, Mild) => "Mild neurological symptoms - rest and observation",
        (Neurological, Moderate) => "Concerning neurological signs - medical consultation recommended",
        (Neurological, Severe) => "Serious neurological symptoms - immediate medical attention required",
        (Musculoskeletal, Mild) => "Minor muscle/joint discomfort - rest and gentle movement",
        (Musculoskeletal, Moderate) => "Persistent musculoskeletal pain - consider physiotherapy",
        (Musculoskeletal, Severe) => "Severe musculoskeletal injury - medical examination needed",
        (Dermatological, Mild) => "Minor skin irritation - topical care recommended",
        (Dermatological, Moderate) => "Persistent skin condition - dermatological consultation advised",
        (Dermatological, Severe) => "Severe skin reaction - immediate medical attention required",
        (Infectious, Mild) => "Mild infection signs - rest and hydration",
        (Infectious, Moderate) => "Developing infection - medical monitoring recommended",
        (Infectious, Severe) => "Severe infection symptoms - urgent medical treatment needed",
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tez_bukhar_is_severe_emergency() {
        let analysis = detect_symptom_context("Mujhe tez bukhar hai");
        assert!(analysis.emergency_flag);
        assert_eq!(analysis.severity, SeverityLevel::Severe);
        assert_eq!(analysis.categories(), vec![SymptomCategory::Infectious]);
        assert_eq!(analysis.detected[0].severity, SeverityLevel::Severe);
        assert_eq!(analysis.detected[0].keywords, vec!["bukhar"]);
        assert_eq!(analysis.confidence, 20);
        assert_eq!(analysis.original_text, "Mujhe tez bukhar hai");
    }

    #[test]
    fn mild_headache_with_time_and_trigger() {
        let analysis = detect_symptom_context("halka sir dard, subah ki takleef, khane ke baad");
        assert!(!analysis.emergency_flag);
        assert_eq!(analysis.categories(), vec![SymptomCategory::Neurological]);
        assert_eq!(analysis.severity, SeverityLevel::Mild);
        assert_eq!(analysis.time_context, Some(TimeContext::Morning));
        assert_eq!(analysis.triggers, vec![Trigger::Food]);
        assert_eq!(analysis.onset, None);
        assert_eq!(analysis.confidence, 40);
        assert_eq!(
            analysis.detected[0].description,
            "Mild neurological symptoms - rest and observation"
        );
    }

    #[test]
    fn emergency_severity_survives_milder_category() {
        let analysis = detect_symptom_context("sudden lagatar khansi");
        assert!(analysis.emergency_flag);
        assert_eq!(analysis.detected[0].severity, SeverityLevel::Moderate);
        assert_eq!(analysis.severity, SeverityLevel::Severe);
        assert_eq!(analysis.onset, Some(OnsetPattern::Chronic));
    }

    #[test]
    fn last_category_sets_overall_severity_without_emergency() {
        let analysis = detect_symptom_context("lagatar khansi aur halki ulti");
        assert_eq!(
            analysis.categories(),
            vec![SymptomCategory::Respiratory, SymptomCategory::Gastrointestinal]
        );
        assert_eq!(analysis.detected[0].severity, SeverityLevel::Moderate);
        assert_eq!(analysis.detected[1].severity, SeverityLevel::Mild);
        assert_eq!(analysis.severity, SeverityLevel::Mild);
        assert_eq!(analysis.confidence, 50);
    }

    #[test]
    fn confidence_is_capped() {
        let analysis =
            detect_symptom_context("cough, chest pain, nausea, headache, joint pain, rash, fever");
        assert_eq!(analysis.detected.len(), 7);
        assert_eq!(analysis.confidence, 100);
    }

    #[test]
    fn all_triggers_collected() {
        let analysis = detect_symptom_context("after eating and during stress");
        assert_eq!(analysis.triggers, vec![Trigger::Food, Trigger::Stress]);
        assert!(analysis.detected.is_empty());
        assert_eq!(analysis.confidence, 10);
    }

    #[test]
    fn empty_text() {
        let analysis = detect_symptom_context("");
        assert!(analysis.detected.is_empty());
        assert_eq!(analysis.severity, SeverityLevel::Mild);
        assert!(!analysis.emergency_flag);
        assert_eq!(analysis.confidence, 0);
    }

    #[test]
    fn serializes_snake_case_enums() {
        let analysis = detect_symptom_context("raat ko pasina");
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["time_context"], "night");
        assert_eq!(json["detected"][0]["category"], "infectious");
    }
}
