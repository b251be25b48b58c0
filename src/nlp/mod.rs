pub mod body_part;
pub mod category;
pub mod duration;
pub mod language;
pub mod merge;
pub mod normalize;
pub mod severity;
pub mod symptom;
pub mod synonyms;
pub mod tokenize;

pub use category::{detect_symptom_context, CategoryMatch, ContextAnalysis};
pub use language::{detect_language, resolve_language};
pub use merge::merge_related_entities;
pub use normalize::normalize_word;
pub use synonyms::{symptom_synonyms, SYMPTOM_SYNONYMS};

use crate::models::Entity;

/// Run the four extractors over one utterance without merging.
///
/// Output order is symptoms, body parts, durations, severities, each in
/// the order its extractor produced them.
pub fn extract_raw_entities(text: &str) -> Vec<Entity> {
    let normalized = tokenize::normalize_text(text);
    if normalized.is_empty() {
        return Vec::new();
    }
    let tokens = tokenize::tokenize(&normalized);

    let mut entities = symptom::extract_symptoms(&tokens, &normalized);
    entities.extend(body_part::extract_body_parts(&tokens));
    entities.extend(duration::extract_durations(&normalized));
    entities.extend(severity::extract_severities(&tokens));
    entities
}

/// Extract and merge the entities of one patient utterance.
///
/// Never fails: empty or unrecognised input yields an empty list. The
/// language hint only affects logging; the rule tables are mixed-script.
pub fn extract_entities(text: &str, language_hint: Option<&str>) -> Vec<Entity> {
    let raw = extract_raw_entities(text);
    let raw_count = raw.len();
    let merged = merge_related_entities(raw);

    tracing::debug!(
        language = %resolve_language(language_hint, text),
        raw = raw_count,
        merged = merged.len(),
        "Extracted entities"
    );

    merged
}
