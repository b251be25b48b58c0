use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::SEVERITY_CONFIDENCE;
use crate::models::{Entity, SeverityLevel};

static SEVERITY_MAP: LazyLock<HashMap<&'static str, SeverityLevel>> = LazyLock::new(|| {
    use SeverityLevel::*;
    [
        ("bahut", Severe),
        ("very", Severe),
        ("extreme", Severe),
        ("tej", Severe),
        ("tez", Severe),
        ("intense", Severe),
        ("sharp", Severe),
        ("zyada", Moderate),
        ("moderate", Moderate),
        ("medium", Moderate),
        ("thoda", Mild),
        ("little", Mild),
        ("mild", Mild),
        ("halka", Mild),
        ("kam", Mild),
        ("less", Mild),
        ("dheema", Mild),
        ("slow", Mild),
    ]
    .into_iter()
    .collect()
});

/// Severity level named by a single token, if any.
pub fn severity_of(token: &str) -> Option<SeverityLevel> {
    SEVERITY_MAP.get(token.to_lowercase().as_str()).copied()
}

/// One entity per token found in the severity dictionary.
pub fn extract_severities(tokens: &[&str]) -> Vec<Entity> {
    tokens
        .iter()
        .filter_map(|token| {
            severity_of(token)
                .map(|level| Entity::severity(level.as_str(), *token, SEVERITY_CONFIDENCE))
        })
        .collect()
}
