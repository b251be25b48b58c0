//! Read-only views of a session for the diagnosis layer.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::types::{SessionContext, SymptomRecord, UserInfo};
use crate::config;

/// Structured snapshot handed to the response generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalContext {
    pub user_info: UserInfo,
    pub symptoms_count: usize,
    pub symptoms_summary: String,
    pub tests_ordered: Vec<String>,
    pub medicines_given: Vec<String>,
    pub conversation_turns: usize,
    pub session_duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessAssessment {
    pub has_basic_info: bool,
    pub has_symptoms: bool,
    pub has_detailed_symptoms: bool,
    pub missing_info: Vec<String>,
    pub ready_for_prescription: bool,
}

impl SessionContext {
    /// `name (location) - severity intensity - duration: d (mentioned n times)`
    /// per symptom, joined with `; ` in insertion order.
    pub fn symptoms_summary(&self) -> String {
        if self.symptom_count() == 0 {
            return "No symptoms reported yet.".to_string();
        }
        self.symptoms_in_order()
            .map(describe_symptom)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// The last `last_n` transcript turns as `ROLE: content` lines.
    pub fn conversation_history(&self, last_n: usize) -> String {
        let start = self.transcript.len().saturating_sub(last_n);
        self.transcript[start..]
            .iter()
            .map(|turn| format!("{}: {}", turn.role.as_str().to_uppercase(), turn.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn recent_history(&self) -> String {
        self.conversation_history(config::DEFAULT_HISTORY_TURNS)
    }

    pub fn session_duration(&self) -> String {
        self.session_duration_at(Local::now().naive_local())
    }

    pub fn session_duration_at(&self, now: NaiveDateTime) -> String {
        let minutes = (now - self.conversation_started).num_minutes().max(0);
        format_duration_minutes(minutes)
    }

    pub fn medical_context(&self) -> MedicalContext {
        self.medical_context_at(Local::now().naive_local())
    }

    pub fn medical_context_at(&self, now: NaiveDateTime) -> MedicalContext {
        MedicalContext {
            user_info: self.user_info.clone(),
            symptoms_count: self.symptom_count(),
            symptoms_summary: self.symptoms_summary(),
            tests_ordered: self.tests_ordered.iter().map(|t| t.name.clone()).collect(),
            medicines_given: self
                .medicines_given
                .iter()
                .map(|m| m.order.name.clone())
                .collect(),
            conversation_turns: self.transcript.len(),
            session_duration: self.session_duration_at(now),
        }
    }

    pub fn assess_completeness(&self) -> CompletenessAssessment {
        let has_name = is_filled(&self.user_info.name);
        let has_age = is_filled(&self.user_info.age);
        let has_gender = is_filled(&self.user_info.gender);
        let has_symptoms = self.symptom_count() > 0;
        let has_detailed_symptoms = self
            .symptoms()
            .values()
            .any(|s| !s.modifiers.is_empty());

        let missing_info = [
            (!has_name, "patient name"),
            (!has_age, "patient age"),
            (!has_gender, "patient gender"),
            (!has_symptoms, "symptoms description"),
        ]
        .into_iter()
        .filter(|(missing, _)| *missing)
        .map(|(_, label)| label.to_string())
        .collect();

        let has_basic_info = has_name && has_age;
        CompletenessAssessment {
            has_basic_info,
            has_symptoms,
            has_detailed_symptoms,
            missing_info,
            ready_for_prescription: has_basic_info && has_symptoms && has_detailed_symptoms,
        }
    }
}

fn is_filled(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn describe_symptom(symptom: &SymptomRecord) -> String {
    let mut summary = symptom.name.clone();
    let m = &symptom.modifiers;
    if let Some(ref location) = m.location {
        summary.push_str(&format!(" ({location})"));
    }
    if let Some(ref severity) = m.severity {
        summary.push_str(&format!(" - {severity} intensity"));
    }
    if let Some(ref duration) = m.duration {
        summary.push_str(&format!(" - duration: {duration}"));
    }
    if symptom.occurrences > 1 {
        summary.push_str(&format!(" (mentioned {} times)", symptom.occurrences));
    }
    summary
}

fn format_duration_minutes(minutes: i64) -> String {
    match minutes {
        m if m < 1 => "less than 1 minute".to_string(),
        1 => "1 minute".to_string(),
        m if m < 60 => format!("{m} minutes"),
        m => {
            let (hours, rest) = (m / 60, m % 60);
            let hours_part = if hours == 1 {
                "1 hour".to_string()
            } else {
                format!("{hours} hours")
            };
            if rest == 0 {
                hours_part
            } else {
                format!("{hours_part} {rest} minutes")
            }
        }
    }
}
