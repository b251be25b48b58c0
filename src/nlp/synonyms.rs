//! Hindi / Hinglish / regional-variant vocabulary mapped to canonical
//! English medical terms.
//!
//! Keys are lowercase. Several keys are multi-word phrases; they are only
//! reachable through a direct [`super::normalize::normalize_word`] call on
//! the whole phrase, never through the token pass.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Source term → canonical term, grouped by clinical area.
const SYNONYM_ENTRIES: &[(&str, &str)] = &[
    // Pain
    ("dard", "pain"),
    ("takleef", "pain"),
    ("peeda", "pain"),
    ("kasht", "pain"),
    ("vedana", "pain"),
    ("dukhna", "pain"),
    ("dukhti", "pain"),
    ("ache", "pain"),
    ("hurt", "pain"),
    // Fever
    ("bukhaar", "fever"),
    ("bukhar", "fever"),
    ("tap", "fever"),
    ("tez bukhaar", "high_fever"),
    ("halka bukhaar", "mild_fever"),
    ("fever", "fever"),
    ("temperature", "fever"),
    ("garmi", "fever"),
    // Burning
    ("jalan", "burning"),
    ("jalaa", "burning"),
    ("sooja", "burning"),
    ("jalana", "burning"),
    ("burn", "burning"),
    ("burning", "burning"),
    ("khaarish", "itching"),
    // Swelling
    ("sujan", "swelling"),
    ("soojan", "swelling"),
    ("soojana", "swelling"),
    ("phoola", "swelling"),
    ("phoolna", "swelling"),
    ("swelling", "swelling"),
    ("inflammation", "swelling"),
    // Vomiting / nausea
    ("ulti", "vomiting"),
    ("vomit", "vomiting"),
    ("vomiting", "vomiting"),
    ("qaai", "vomiting"),
    ("jee machalna", "nausea"),
    ("nausea", "nausea"),
    ("chakkar", "nausea"),
    ("ghabrahat", "nausea"),
    // Diarrhea
    ("dast", "diarrhea"),
    ("loose motion", "diarrhea"),
    ("loose motions", "diarrhea"),
    ("patlaa", "diarrhea"),
    ("patli", "diarrhea"),
    ("diarrhea", "diarrhea"),
    ("loose stools", "diarrhea"),
    ("pait kharab", "stomach_upset"),
    // Cough
    ("khaansi", "cough"),
    ("khasi", "cough"),
    ("khaanskhaasi", "cough"),
    ("cough", "cough"),
    ("sukhi khaansi", "dry_cough"),
    ("geeli khaansi", "wet_cough"),
    ("kaff", "phlegm"),
    ("balgam", "phlegm"),
    // Cold / flu
    ("zukaam", "cold"),
    ("jukam", "cold"),
    ("nazla", "cold"),
    ("cold", "cold"),
    ("sardi", "cold"),
    ("naak behna", "runny_nose"),
    ("naak band", "blocked_nose"),
    ("congestion", "congestion"),
    // Headache
    ("sar dard", "headache"),
    ("sardard", "headache"),
    ("sir dard", "headache"),
    ("headache", "headache"),
    ("sar mein dard", "headache"),
    ("migraine", "migraine"),
    ("chakkar aana", "dizziness"),
    // Stomach / abdomen
    ("pet dard", "abdominal_pain"),
    ("paet dard", "abdominal_pain"),
    ("stomach pain", "abdominal_pain"),
    ("pet mein dard", "abdominal_pain"),
    ("acidity", "acidity"),
    ("gas", "gas"),
    ("bloating", "bloating"),
    ("pait phoola", "bloating"),
    ("constipation", "constipation"),
    ("kabz", "constipation"),
    ("qabz", "constipation"),
    // Chest
    ("seene mein dard", "chest_pain"),
    ("sina dard", "chest_pain"),
    ("chest pain", "chest_pain"),
    ("saas lene mein takleef", "breathing_difficulty"),
    ("saas phoolna", "shortness_of_breath"),
    ("breathlessness", "shortness_of_breath"),
    // Throat
    ("gale mein dard", "throat_pain"),
    ("gala dard", "throat_pain"),
    ("throat pain", "throat_pain"),
    ("kharas", "throat_irritation"),
    ("gala sukha", "dry_throat"),
    ("sore throat", "throat_pain"),
    // Back
    ("kamr dard", "back_pain"),
    ("kamar dard", "back_pain"),
    ("back pain", "back_pain"),
    ("peeth dard", "back_pain"),
    // General
    ("kamzori", "weakness"),
    ("weakness", "weakness"),
    ("thakaan", "fatigue"),
    ("fatigue", "fatigue"),
    ("neend na aana", "insomnia"),
    ("insomnia", "insomnia"),
    ("bhookh na lagna", "loss_of_appetite"),
    ("appetite loss", "loss_of_appetite"),
    // Skin
    ("khujli", "itching"),
    ("itching", "itching"),
    ("daane", "rash"),
    ("rash", "rash"),
    ("skin problem", "skin_irritation"),
    ("chamdi ki samasya", "skin_problem"),
    // Joints
    ("jodon mein dard", "joint_pain"),
    ("joints pain", "joint_pain"),
    ("arthritis", "joint_pain"),
    ("gathiya", "joint_pain"),
    // Eyes
    ("aankh mein dard", "eye_pain"),
    ("eye pain", "eye_pain"),
    ("aankhon mein jalan", "eye_irritation"),
    ("dhundla dikhna", "blurred_vision"),
    ("blurred vision", "blurred_vision"),
    // Ears
    ("kan mein dard", "ear_pain"),
    ("ear pain", "ear_pain"),
    ("kan se awaaz", "tinnitus"),
    ("kaan bajna", "tinnitus"),
    // Urinary
    ("peshab mein jalan", "urinary_burning"),
    ("urine burning", "urinary_burning"),
    ("baar baar peshab", "frequent_urination"),
    ("frequent urination", "frequent_urination"),
    // Women's health
    ("periods ki samasya", "menstrual_problems"),
    ("mahavari", "menstruation"),
    ("pet mein marod", "cramps"),
    ("cramps", "cramps"),
    // Severity
    ("bahut", "severe"),
    ("zyada", "moderate"),
    ("thoda", "mild"),
    ("halka", "mild"),
    ("tej", "severe"),
    ("kam", "mild"),
    ("very", "severe"),
    ("little", "mild"),
    ("moderate", "moderate"),
    ("mild", "mild"),
    ("severe", "severe"),
    // Duration
    ("kal se", "since_yesterday"),
    ("aaj se", "since_today"),
    ("kuch din se", "few_days"),
    ("hafte se", "since_week"),
    ("mahine se", "since_month"),
    ("abhi", "just_now"),
    ("recently", "recently"),
    // Body parts
    ("pet", "abdomen"),
    ("paet", "abdomen"),
    ("seena", "chest"),
    ("sina", "chest"),
    ("sar", "head"),
    ("sir", "head"),
    ("gala", "throat"),
    ("kamr", "back"),
    ("kamar", "back"),
    ("haath", "hand"),
    ("pair", "leg"),
    ("paer", "leg"),
    ("aankh", "eye"),
    ("aankhein", "eyes"),
    ("kan", "ear"),
    ("kaan", "ear"),
    ("naak", "nose"),
];

/// The read-only synonym table, built once on first use.
pub static SYMPTOM_SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SYNONYM_ENTRIES.iter().copied().collect());

/// Borrow the synonym table for direct lookups.
pub fn symptom_synonyms() -> &'static HashMap<&'static str, &'static str> {
    &SYMPTOM_SYNONYMS
}

/// Direct table lookup, no normalization.
pub fn lookup(term: &str) -> Option<&'static str> {
    SYMPTOM_SYNONYMS.get(term).copied()
}
