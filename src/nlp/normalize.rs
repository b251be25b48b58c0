//! Synonym normalization with transliteration tolerance.
//!
//! Latin-script Hindi has no single spelling ("bukhaar" / "bukhar",
//! "khaansi" / "kansi"), so a miss on the direct lookup is retried with
//! the long forms below collapsed to their short forms.

use super::synonyms;

/// Long spelling → short spelling, tried in this order.
const SPELLING_VARIATIONS: &[(&str, &str)] = &[
    ("aa", "a"),
    ("ee", "i"),
    ("oo", "u"),
    ("kh", "k"),
    ("gh", "g"),
    ("th", "t"),
    ("dh", "d"),
];

/// Map a word to its canonical medical term.
///
/// Lowercases and trims, then tries the synonym table directly and with
/// each spelling variation. Returns the lowercased word unchanged when
/// nothing matches.
pub fn normalize_word(word: &str) -> String {
    let normalized = word.to_lowercase().trim().to_string();

    if let Some(canonical) = synonyms::lookup(&normalized) {
        return canonical.to_string();
    }

    spelling_variations(&normalized)
        .iter()
        .find_map(|variant| synonyms::lookup(variant))
        .map(str::to_string)
        .unwrap_or(normalized)
}

/// One variant per applicable substitution, each applied to the original
/// word (substitutions are not chained).
fn spelling_variations(word: &str) -> Vec<String> {
    let mut variants: Vec<String> = Vec::new();
    for (long, short) in SPELLING_VARIATIONS {
        if word.contains(long) {
            let variant = word.replace(long, short);
            if !variants.contains(&variant) {
                variants.push(variant);
            }
        }
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::synonyms::SYMPTOM_SYNONYMS;

    #[test]
    fn direct_lookup() {
        assert_eq!(normalize_word("dard"), "pain");
        assert_eq!(normalize_word("bukhar"), "fever");
        assert_eq!(normalize_word("zukaam"), "cold");
    }

    #[test]
    fn case_and_whitespace_insensitive() {
        assert_eq!(normalize_word("  DARD "), "pain");
        assert_eq!(normalize_word("Khaansi"), "cough");
    }

    #[test]
    fn long_vowel_collapsed() {
        // "dast" is in the table, "daast" is not.
        assert_eq!(normalize_word("daast"), "diarrhea");
        // "kharas" is in the table, "khaaras" is not.
        assert_eq!(normalize_word("khaaras"), "throat_irritation");
    }

    #[test]
    fn aspirate_collapsed() {
        // "tap" via th → t.
        assert_eq!(normalize_word("thap"), "fever");
        // "jukam" via kh → k.
        assert_eq!(normalize_word("jukham"), "cold");
    }

    #[test]
    fn remaining_variations_reach_table() {
        let cases = [
            ("khujlee", "itching"), // ee → i
            ("bookhar", "fever"),   // oo → u
            ("ghala", "throat"),    // gh → g
            ("dhard", "pain"),      // dh → d
        ];
        for (word, expected) in cases {
            assert_eq!(normalize_word(word), expected, "{word}");
        }
    }

    #[test]
    fn unknown_word_returned_lowercased() {
        assert_eq!(normalize_word("Mujhe"), "mujhe");
        assert_eq!(normalize_word("xyz"), "xyz");
    }

    #[test]
    fn empty_input_is_unchanged() {
        assert_eq!(normalize_word(""), "");
        assert_eq!(normalize_word("   "), "");
    }

    #[test]
    fn multi_word_key_reachable_directly() {
        assert_eq!(normalize_word("sir dard"), "headache");
        assert_eq!(normalize_word("Pet Mein Dard"), "abdominal_pain");
    }

    #[test]
    fn every_synonym_key_normalizes_to_its_value() {
        for (key, value) in SYMPTOM_SYNONYMS.iter() {
            assert_eq!(normalize_word(key), *value, "key {key:?}");
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut words: Vec<&str> = SYMPTOM_SYNONYMS.keys().copied().collect();
        words.extend(["mujhe", "hai", "daast", "thap", "pain", "head", "headache", "fever"]);
        for word in words {
            let once = normalize_word(word);
            assert_eq!(normalize_word(&once), once, "word {word:?}");
        }
    }

    #[test]
    fn variations_are_not_chained() {
        let variants = spelling_variations("khaansi");
        assert!(variants.contains(&"khansi".to_string()));
        assert!(variants.contains(&"kaansi".to_string()));
        assert!(!variants.contains(&"kansi".to_string()));
    }
}
