//! Lightweight language resolution for patient utterances.
//!
//! Speech layers usually send a locale hint (`hi-IN`, `en-US`); typed input
//! arrives without one. Detection is a keyword-frequency heuristic: any
//! Devanagari codepoint means Hindi, otherwise Hindi function words and
//! common Hinglish medical words are weighed against English ones.

use super::tokenize::tokenize;
use crate::models::Language;

/// Latin-script Hindi words that rarely appear in English sentences.
const HINGLISH_INDICATORS: &[&str] = &[
    "mujhe", "mera", "meri", "mere", "hai", "hain", "tha", "thi", "se", "mein",
    "ka", "ki", "ke", "ko", "nahi", "nahin", "aur", "bhi", "ho", "raha", "rahi",
    "kya", "kab", "kal", "din", "bahut", "thoda", "zyada",
    // Medical Hinglish
    "dard", "bukhar", "bukhaar", "khaansi", "khasi", "zukaam", "ulti", "chakkar",
    "pet", "sar", "sir", "gala", "kamar", "seena", "jalan", "kamzori",
];

/// English words common in symptom descriptions.
const ENGLISH_INDICATORS: &[&str] = &[
    "i", "my", "me", "have", "has", "had", "the", "and", "is", "am", "was", "since",
    "for", "with", "feel", "feeling", "very", "days", "hours", "it", "a",
    // Medical English
    "pain", "fever", "cough", "headache", "stomach", "chest", "throat", "nausea",
    "vomiting", "dizzy", "tired",
];

/// Guess the language of a single utterance.
///
/// Hinglish wins ties, including text with no indicators at all, since it
/// is the register this pipeline is tuned for.
pub fn detect_language(text: &str) -> Language {
    if text.chars().any(is_devanagari) {
        return Language::Hindi;
    }

    let lower = text.to_lowercase();
    let tokens = tokenize(&lower);

    let hinglish_score = count_indicators(&tokens, HINGLISH_INDICATORS);
    let english_score = count_indicators(&tokens, ENGLISH_INDICATORS);

    if hinglish_score >= english_score {
        Language::Hinglish
    } else {
        Language::English
    }
}

/// Map a caller-supplied locale hint onto a [`Language`], falling back to
/// [`detect_language`] when the hint is absent or unrecognised.
pub fn resolve_language(hint: Option<&str>, text: &str) -> Language {
    hint.and_then(language_from_hint)
        .unwrap_or_else(|| detect_language(text))
}

fn language_from_hint(hint: &str) -> Option<Language> {
    let hint = hint.trim().to_lowercase();
    let primary = hint.split(['-', '_']).next().unwrap_or_default();

    match (hint.as_str(), primary) {
        ("hinglish" | "hi-latn" | "hi_latn", _) => Some(Language::Hinglish),
        (_, "hi") => Some(Language::Hindi),
        (_, "en") => Some(Language::English),
        _ => None,
    }
}

fn count_indicators(tokens: &[&str], indicators: &[&str]) -> u32 {
    tokens.iter().filter(|t| indicators.contains(t)).count() as u32
}

fn is_devanagari(ch: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&ch)
}
