use std::sync::LazyLock;

use regex::Regex;

use super::normalize::normalize_word;
use crate::config::{MULTI_WORD_CONFIDENCE, SINGLE_WORD_CONFIDENCE};
use crate::models::Entity;

/// A compiled sentence-level pattern with the symptom it implies.
struct SymptomPattern {
    regex: Regex,
    symptom: &'static str,
    location: &'static str,
}

/// Location word + optional "mein"/"me" + pain word, plus bare symptom
/// names in their common spellings. Evaluated in order.
static MULTI_WORD_PATTERNS: LazyLock<Vec<SymptomPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?i)(?:pet|paet|stomach)\s*(?:mein|me)?\s*(?:dard|pain|ache)",
            "abdominal_pain",
            "abdomen",
        ),
        pattern(
            r"(?i)(?:seene|chest|sina)\s*(?:mein|me)?\s*(?:dard|pain|jalan|burning)",
            "chest_pain",
            "chest",
        ),
        pattern(
            r"(?i)(?:sar|head|sir)\s*(?:mein|me)?\s*(?:dard|pain|ache)",
            "headache",
            "head",
        ),
        pattern(
            r"(?i)(?:kamr|kamar|back)\s*(?:mein|me)?\s*(?:dard|pain)",
            "back_pain",
            "back",
        ),
        pattern(
            r"(?i)(?:gale|throat|gala)\s*(?:mein|me)?\s*(?:dard|pain|kharas)",
            "throat_pain",
            "throat",
        ),
        pattern(
            r"(?i)(?:loose\s*motion|diarrhea|dast|patlaa)",
            "diarrhea",
            "digestive",
        ),
        pattern(r"(?i)(?:cough|khaansi|khasi)", "cough", "respiratory"),
        pattern(r"(?i)(?:cold|zukaam|jukam|nazla)", "cold", "respiratory"),
    ]
});

/// Canonical terms the token pass accepts as symptoms.
const SYMPTOM_TERMS: &[&str] = &[
    "pain",
    "fever",
    "headache",
    "nausea",
    "vomiting",
    "diarrhea",
    "cough",
    "cold",
    "burning",
    "swelling",
    "weakness",
    "dizziness",
    "fatigue",
    "constipation",
    "bloating",
    "indigestion",
    "acidity",
    "gas",
];

fn pattern(regex_str: &str, symptom: &'static str, location: &'static str) -> SymptomPattern {
    SymptomPattern {
        regex: Regex::new(regex_str).expect("Invalid symptom regex pattern"),
        symptom,
        location,
    }
}

/// Whether a canonical term counts as a single-word symptom.
pub fn is_symptom_term(term: &str) -> bool {
    SYMPTOM_TERMS.contains(&term)
}

/// Two independent passes: every multi-word pattern match in `full_text`
/// (confidence 0.9, with location), then every token whose normalized form
/// is a symptom term (confidence 0.7). Overlap between the passes is kept.
pub fn extract_symptoms(tokens: &[&str], full_text: &str) -> Vec<Entity> {
    let mut symptoms = Vec::new();

    for sp in MULTI_WORD_PATTERNS.iter() {
        for mat in sp.regex.find_iter(full_text) {
            symptoms.push(
                Entity::symptom(sp.symptom, mat.as_str(), MULTI_WORD_CONFIDENCE)
                    .with_location(sp.location),
            );
        }
    }

    for token in tokens {
        let normalized = normalize_word(token);
        if is_symptom_term(&normalized) {
            symptoms.push(Entity::symptom(normalized, *token, SINGLE_WORD_CONFIDENCE));
        }
    }

    symptoms
}
