/// Application-level constants
pub const APP_NAME: &str = "JeevanCare NLP";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language hint assumed by the voice layer when it does not send one.
pub const DEFAULT_LANGUAGE_HINT: &str = "hi-IN";

/// Environment variable the triage binary reads its language hint from.
pub const LANGUAGE_HINT_ENV: &str = "JEEVANCARE_LANG";

/// Number of transcript turns included in LLM conversation history.
pub const DEFAULT_HISTORY_TURNS: usize = 6;

// ── Extraction confidence scores ─────────────────────────
// Multi-word pattern matches outrank single-token dictionary hits.

/// Sentence-level symptom pattern, e.g. "pet mein dard".
pub const MULTI_WORD_CONFIDENCE: f32 = 0.9;
/// Body-part dictionary hit.
pub const BODY_PART_CONFIDENCE: f32 = 0.8;
/// Duration pattern or idiom.
pub const DURATION_CONFIDENCE: f32 = 0.8;
/// Single normalized token found in the symptom vocabulary.
pub const SINGLE_WORD_CONFIDENCE: f32 = 0.7;
/// Severity dictionary hit.
pub const SEVERITY_CONFIDENCE: f32 = 0.7;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "jeevancare_nlp=info,jeevancare_triage=info,warn"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn multi_word_outranks_single_word() {
        assert!(MULTI_WORD_CONFIDENCE > SINGLE_WORD_CONFIDENCE);
        assert!(BODY_PART_CONFIDENCE > SEVERITY_CONFIDENCE);
    }

    #[test]
    fn confidences_are_probabilities() {
        for c in [
            MULTI_WORD_CONFIDENCE,
            BODY_PART_CONFIDENCE,
            DURATION_CONFIDENCE,
            SINGLE_WORD_CONFIDENCE,
            SEVERITY_CONFIDENCE,
        ] {
            assert!((0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn log_filter_targets_crate() {
        assert!(default_log_filter().contains("jeevancare_nlp"));
    }
}
