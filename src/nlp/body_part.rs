use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::BODY_PART_CONFIDENCE;
use crate::models::Entity;

/// Hindi / Hinglish / English body-part words → canonical region.
static BODY_PART_MAP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("pet", "abdomen"),
        ("paet", "abdomen"),
        ("stomach", "abdomen"),
        ("seena", "chest"),
        ("sina", "chest"),
        ("chest", "chest"),
        ("sar", "head"),
        ("sir", "head"),
        ("head", "head"),
        ("gala", "throat"),
        ("throat", "throat"),
        ("kamr", "back"),
        ("kamar", "back"),
        ("back", "back"),
        ("haath", "hand"),
        ("hand", "hand"),
        ("arm", "arm"),
        ("paer", "leg"),
        ("pair", "leg"),
        ("leg", "leg"),
        ("foot", "foot"),
        ("aankh", "eye"),
        ("eyes", "eye"),
        ("eye", "eye"),
        ("kan", "ear"),
        ("ear", "ear"),
        ("naak", "nose"),
        ("nose", "nose"),
    ]
    .into_iter()
    .collect()
});

/// Canonical region for a single token, if it names one.
pub fn body_region(token: &str) -> Option<&'static str> {
    BODY_PART_MAP.get(token.to_lowercase().as_str()).copied()
}

/// One entity per token found in the body-part dictionary.
pub fn extract_body_parts(tokens: &[&str]) -> Vec<Entity> {
    tokens
        .iter()
        .filter_map(|token| {
            body_region(token).map(|region| Entity::body_part(region, *token, BODY_PART_CONFIDENCE))
        })
        .collect()
}
