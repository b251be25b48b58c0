use std::sync::LazyLock;

use regex::Regex;

use crate::config::DURATION_CONFIDENCE;
use crate::models::{DurationUnit, Entity};

/// A compiled duration pattern. Numeric patterns capture the amount in
/// group 1; idioms carry a fixed amount.
struct DurationPattern {
    regex: Regex,
    unit: DurationUnit,
    fixed_value: Option<&'static str>,
}

static DURATION_PATTERNS: LazyLock<Vec<DurationPattern>> = LazyLock::new(|| {
    vec![
        numeric(r"(?i)([0-9]+)\s*(?:days|day|din)", DurationUnit::Days),
        numeric(r"(?i)([0-9]+)\s*(?:ghante|ghanta|hours|hour)", DurationUnit::Hours),
        numeric(r"(?i)([0-9]+)\s*(?:hafte|weeks|week)", DurationUnit::Weeks),
        numeric(r"(?i)([0-9]+)\s*(?:mahine|months|month)", DurationUnit::Months),
        idiom(r"(?i)\b(?:since yesterday|kal se|yesterday)\b", "1", DurationUnit::Days),
        idiom(r"(?i)\b(?:parsho se|day before)\b", "2", DurationUnit::Days),
        idiom(r"(?i)\b(?:just now|abhi|now)\b", "0", DurationUnit::Minutes),
    ]
});

fn numeric(regex_str: &str, unit: DurationUnit) -> DurationPattern {
    DurationPattern {
        regex: Regex::new(regex_str).expect("Invalid duration regex pattern"),
        unit,
        fixed_value: None,
    }
}

fn idiom(regex_str: &str, value: &'static str, unit: DurationUnit) -> DurationPattern {
    DurationPattern {
        regex: Regex::new(regex_str).expect("Invalid duration regex pattern"),
        unit,
        fixed_value: Some(value),
    }
}

/// Every duration expression in the normalized text, pattern by pattern.
pub fn extract_durations(full_text: &str) -> Vec<Entity> {
    let mut durations = Vec::new();

    for dp in DURATION_PATTERNS.iter() {
        for caps in dp.regex.captures_iter(full_text) {
            let Some(whole) = caps.get(0) else { continue };
            let value = match dp.fixed_value {
                Some(v) => v,
                None => caps.get(1).map_or("1", |m| m.as_str()),
            };
            durations.push(Entity::duration(
                value,
                dp.unit,
                whole.as_str(),
                DURATION_CONFIDENCE,
            ));
        }
    }

    durations
}
