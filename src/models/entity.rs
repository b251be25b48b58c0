use serde::{Deserialize, Serialize};

use super::enums::{DurationUnit, EntityType};

/// Qualifiers attached to a symptom: where, how long, how bad.
///
/// Values are canonical entity ids (`head`, `2_days`, `severe`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.duration.is_none() && self.severity.is_none()
    }

    /// Copy every field that is set on `other`. Unset fields never clear
    /// an existing value.
    pub fn overlay(&mut self, other: &Modifiers) {
        if let Some(ref location) = other.location {
            self.location = Some(location.clone());
        }
        if let Some(ref duration) = other.duration {
            self.duration = Some(duration.clone());
        }
        if let Some(ref severity) = other.severity {
            self.severity = Some(severity.clone());
        }
    }
}

/// One typed, confidence-scored unit of meaning extracted from a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Canonical id: `abdominal_pain`, `head`, `3_days`, `severe`.
    pub entity: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// Exact substring matched in the normalized input.
    pub original: String,
    pub confidence: f32,
    /// Body region implied by a multi-word symptom pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Duration amount, kept as the matched digits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<DurationUnit>,
    /// Set by the entity merger on symptom entities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Modifiers>,
}

impl Entity {
    pub fn new(
        entity_type: EntityType,
        entity: impl Into<String>,
        original: impl Into<String>,
        confidence: f32,
    ) -> Self {
        Self {
            entity: entity.into(),
            entity_type,
            original: original.into(),
            confidence,
            location: None,
            value: None,
            unit: None,
            modifiers: None,
        }
    }

    pub fn symptom(entity: impl Into<String>, original: impl Into<String>, confidence: f32) -> Self {
        Self::new(EntityType::Symptom, entity, original, confidence)
    }

    pub fn body_part(entity: impl Into<String>, original: impl Into<String>, confidence: f32) -> Self {
        Self::new(EntityType::BodyPart, entity, original, confidence)
    }

    pub fn severity(entity: impl Into<String>, original: impl Into<String>, confidence: f32) -> Self {
        Self::new(EntityType::Severity, entity, original, confidence)
    }

    /// Duration entity; the canonical id is `<value>_<unit>`.
    pub fn duration(
        value: impl Into<String>,
        unit: DurationUnit,
        original: impl Into<String>,
        confidence: f32,
    ) -> Self {
        let value = value.into();
        let mut entity = Self::new(
            EntityType::Duration,
            format!("{value}_{}", unit.as_str()),
            original,
            confidence,
        );
        entity.value = Some(value);
        entity.unit = Some(unit);
        entity
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = Some(modifiers);
        self
    }

    pub fn is_symptom(&self) -> bool {
        self.entity_type == EntityType::Symptom
    }

    pub fn is_modifier(&self) -> bool {
        matches!(
            self.entity_type,
            EntityType::BodyPart | EntityType::Duration | EntityType::Severity
        )
    }
}
