//! Per-consultation state: accumulated symptoms, the per-turn timeline,
//! patient details and the role-tagged transcript.

use std::collections::{HashMap, HashSet};

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::SessionError;
use crate::models::{Entity, Language, Modifiers, TestStatus, TimelineEntryType, TurnRole};

// ═══════════════════════════════════════════
// Records
// ═══════════════════════════════════════════

/// Everything known about one canonical symptom in this session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomRecord {
    pub name: String,
    /// Wording of the first mention.
    pub original: String,
    pub first_reported: NaiveDateTime,
    pub last_reported: NaiveDateTime,
    pub occurrences: u32,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl SymptomRecord {
    fn new(name: &str, original: &str, now: NaiveDateTime) -> Self {
        Self {
            name: name.to_string(),
            original: original.to_string(),
            first_reported: now,
            last_reported: now,
            occurrences: 0,
            modifiers: Modifiers::default(),
        }
    }
}

/// One user turn as it reached the context merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub timestamp: NaiveDateTime,
    pub entities: Vec<Entity>,
    #[serde(rename = "type")]
    pub entry_type: TimelineEntryType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub timestamp: NaiveDateTime,
    pub role: TurnRole,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub allergies: Vec<String>,
    pub medical_history: Vec<String>,
}

impl UserInfo {
    /// Fields set on `other` replace ours; unset fields and empty lists
    /// leave the current value alone.
    fn update(&mut self, other: UserInfo) {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.age.is_some() {
            self.age = other.age;
        }
        if other.gender.is_some() {
            self.gender = other.gender;
        }
        if !other.allergies.is_empty() {
            self.allergies = other.allergies;
        }
        if !other.medical_history.is_empty() {
            self.medical_history = other.medical_history;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedTest {
    pub name: String,
    #[serde(default)]
    pub reason: String,
    pub ordered_at: NaiveDateTime,
    pub status: TestStatus,
}

/// What the prescriber supplies; the session stamps it on insert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicineOrder {
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub duration: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescribedMedicine {
    #[serde(flatten)]
    pub order: MedicineOrder,
    pub prescribed_at: NaiveDateTime,
}

// ═══════════════════════════════════════════
// SessionContext
// ═══════════════════════════════════════════

/// The accumulating state of one consultation.
///
/// Symptom keys are never removed. `symptom_order` lists every key exactly
/// once, in the order it was first inserted; the context merge attaches
/// standalone modifiers to its last element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub session_id: Uuid,
    pub conversation_started: NaiveDateTime,
    pub last_modified: NaiveDateTime,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub user_info: UserInfo,
    #[serde(default)]
    pub(super) symptoms: HashMap<String, SymptomRecord>,
    #[serde(default)]
    pub(super) symptom_order: Vec<String>,
    #[serde(default)]
    pub(super) timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub tests_ordered: Vec<OrderedTest>,
    #[serde(default)]
    pub medicines_given: Vec<PrescribedMedicine>,
    #[serde(default)]
    pub transcript: Vec<ConversationTurn>,
    #[serde(default)]
    pub last_user_turn: Option<String>,
    #[serde(default)]
    pub last_assistant_turn: Option<String>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self::new_at(Local::now().naive_local())
    }

    pub fn new_at(now: NaiveDateTime) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            conversation_started: now,
            last_modified: now,
            language: None,
            user_info: UserInfo::default(),
            symptoms: HashMap::new(),
            symptom_order: Vec::new(),
            timeline: Vec::new(),
            tests_ordered: Vec::new(),
            medicines_given: Vec::new(),
            transcript: Vec::new(),
            last_user_turn: None,
            last_assistant_turn: None,
        }
    }

    /// Start a new consultation: fresh id, everything cleared.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ── Symptoms ─────────────────────────────────────────

    pub fn symptom(&self, name: &str) -> Option<&SymptomRecord> {
        self.symptoms.get(name)
    }

    pub fn symptoms(&self) -> &HashMap<String, SymptomRecord> {
        &self.symptoms
    }

    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }

    /// Records in first-insertion order.
    pub fn symptoms_in_order(&self) -> impl Iterator<Item = &SymptomRecord> + '_ {
        self.symptom_order
            .iter()
            .filter_map(|name| self.symptoms.get(name))
    }

    /// Key of the most recently inserted symptom.
    pub fn last_inserted_symptom(&self) -> Option<&str> {
        self.symptom_order.last().map(String::as_str)
    }

    pub(super) fn last_inserted_symptom_mut(&mut self) -> Option<&mut SymptomRecord> {
        let name = self.symptom_order.last()?;
        self.symptoms.get_mut(name)
    }

    /// Fetch or create the record for `name`, counting it as a new key on
    /// first sight. Returns whether it was created.
    pub(super) fn upsert_symptom(
        &mut self,
        name: &str,
        original: &str,
        now: NaiveDateTime,
    ) -> (&mut SymptomRecord, bool) {
        let created = !self.symptoms.contains_key(name);
        if created {
            self.symptom_order.push(name.to_string());
        }
        let record = self
            .symptoms
            .entry(name.to_string())
            .or_insert_with(|| SymptomRecord::new(name, original, now));
        (record, created)
    }

    // ── Timeline & transcript ────────────────────────────

    /// One entry per merged user turn, oldest first.
    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    pub fn record_turn(&mut self, role: TurnRole, content: &str) {
        self.record_turn_at(role, content, Local::now().naive_local());
    }

    pub fn record_turn_at(&mut self, role: TurnRole, content: &str, now: NaiveDateTime) {
        self.transcript.push(ConversationTurn {
            timestamp: now,
            role,
            content: content.to_string(),
        });
        match role {
            TurnRole::User => self.last_user_turn = Some(content.to_string()),
            TurnRole::Assistant => self.last_assistant_turn = Some(content.to_string()),
        }
        self.last_modified = now;
    }

    // ── Patient, tests, medicines ────────────────────────

    pub fn set_user_info(&mut self, info: UserInfo) {
        self.set_user_info_at(info, Local::now().naive_local());
    }

    pub fn set_user_info_at(&mut self, info: UserInfo, now: NaiveDateTime) {
        self.user_info.update(info);
        self.last_modified = now;
    }

    pub fn add_ordered_test(&mut self, name: &str, reason: &str) {
        self.add_ordered_test_at(name, reason, Local::now().naive_local());
    }

    pub fn add_ordered_test_at(&mut self, name: &str, reason: &str, now: NaiveDateTime) {
        self.tests_ordered.push(OrderedTest {
            name: name.to_string(),
            reason: reason.to_string(),
            ordered_at: now,
            status: TestStatus::Pending,
        });
        self.last_modified = now;
    }

    /// Set the status of the most recent order for `name`.
    /// Returns `false` when no such test was ordered.
    pub fn update_test_status(&mut self, name: &str, status: TestStatus) -> bool {
        self.update_test_status_at(name, status, Local::now().naive_local())
    }

    pub fn update_test_status_at(
        &mut self,
        name: &str,
        status: TestStatus,
        now: NaiveDateTime,
    ) -> bool {
        match self.tests_ordered.iter_mut().rev().find(|t| t.name == name) {
            Some(test) => {
                test.status = status;
                self.last_modified = now;
                true
            }
            None => false,
        }
    }

    pub fn add_prescribed_medicine(&mut self, order: MedicineOrder) {
        self.add_prescribed_medicine_at(order, Local::now().naive_local());
    }

    pub fn add_prescribed_medicine_at(&mut self, order: MedicineOrder, now: NaiveDateTime) {
        self.medicines_given.push(PrescribedMedicine {
            order,
            prescribed_at: now,
        });
        self.last_modified = now;
    }

    // ── Import / export ──────────────────────────────────

    pub fn export_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an exported context. The insertion-order log is rebuilt so it
    /// names every symptom key exactly once: known keys keep their logged
    /// position, unlogged ones follow by first report time.
    pub fn import_json(json: &str) -> Result<Self, SessionError> {
        let mut ctx: SessionContext = serde_json::from_str(json)?;
        ctx.rebuild_symptom_order();
        Ok(ctx)
    }

    fn rebuild_symptom_order(&mut self) {
        let mut seen = HashSet::new();
        let mut order: Vec<String> = std::mem::take(&mut self.symptom_order)
            .into_iter()
            .filter(|name| self.symptoms.contains_key(name) && seen.insert(name.clone()))
            .collect();

        let mut unlogged: Vec<&SymptomRecord> = self
            .symptoms
            .iter()
            .filter(|(name, _)| !seen.contains(*name))
            .map(|(_, record)| record)
            .collect();
        unlogged.sort_by(|a, b| {
            a.first_reported
                .cmp(&b.first_reported)
                .then_with(|| a.name.cmp(&b.name))
        });
        order.extend(unlogged.iter().map(|r| r.name.clone()));

        self.symptom_order = order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn new_context_is_empty() {
        let ctx = SessionContext::new_at(at(9, 0));
        assert_eq!(ctx.symptom_count(), 0);
        assert!(ctx.timeline().is_empty());
        assert!(ctx.tests_ordered.is_empty());
        assert!(ctx.medicines_given.is_empty());
        assert_eq!(ctx.user_info, UserInfo::default());
        assert_eq!(ctx.conversation_started, at(9, 0));
        assert!(ctx.last_inserted_symptom().is_none());
    }

    #[test]
    fn upsert_tracks_first_insertion_only() {
        let mut ctx = SessionContext::new_at(at(9, 0));
        assert!(ctx.upsert_symptom("cough", "khaansi", at(9, 1)).1);
        assert!(ctx.upsert_symptom("fever", "bukhar", at(9, 2)).1);
        assert!(!ctx.upsert_symptom("cough", "cough", at(9, 3)).1);

        assert_eq!(ctx.last_inserted_symptom(), Some("fever"));
        let names: Vec<&str> = ctx.symptoms_in_order().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["cough", "fever"]);
        assert_eq!(ctx.symptom("cough").unwrap().original, "khaansi");
        assert_eq!(ctx.symptom("cough").unwrap().first_reported, at(9, 1));
    }

    #[test]
    fn record_turn_updates_last_turns() {
        let mut ctx = SessionContext::new_at(at(9, 0));
        ctx.record_turn_at(TurnRole::User, "sir dard hai", at(9, 1));
        ctx.record_turn_at(TurnRole::Assistant, "Kab se?", at(9, 2));

        assert_eq!(ctx.transcript.len(), 2);
        assert_eq!(ctx.last_user_turn.as_deref(), Some("sir dard hai"));
        assert_eq!(ctx.last_assistant_turn.as_deref(), Some("Kab se?"));
        assert_eq!(ctx.last_modified, at(9, 2));
    }

    #[test]
    fn user_info_updates_only_present_fields() {
        let mut ctx = SessionContext::new_at(at(9, 0));
        ctx.set_user_info_at(
            UserInfo {
                name: Some("Ravi".into()),
                age: Some("42".into()),
                ..Default::default()
            },
            at(9, 1),
        );
        ctx.set_user_info_at(
            UserInfo {
                gender: Some("male".into()),
                allergies: vec!["penicillin".into()],
                ..Default::default()
            },
            at(9, 3),
        );

        assert_eq!(ctx.user_info.name.as_deref(), Some("Ravi"));
        assert_eq!(ctx.user_info.age.as_deref(), Some("42"));
        assert_eq!(ctx.user_info.gender.as_deref(), Some("male"));
        assert_eq!(ctx.user_info.allergies, vec!["penicillin"]);
        assert_eq!(ctx.last_modified, at(9, 3));
    }

    #[test]
    fn test_status_updates_latest_order() {
        let mut ctx = SessionContext::new_at(at(9, 0));
        ctx.add_ordered_test_at("CBC", "fever", at(9, 5));
        ctx.add_ordered_test_at("Dengue NS1", "fever with rash", at(9, 6));
        ctx.add_ordered_test_at("CBC", "repeat", at(9, 7));

        assert!(ctx.update_test_status_at("CBC", TestStatus::Completed, at(9, 30)));
        assert_eq!(ctx.tests_ordered[0].status, TestStatus::Pending);
        assert_eq!(ctx.tests_ordered[2].status, TestStatus::Completed);
        assert_eq!(ctx.last_modified, at(9, 30));

        assert!(ctx.update_test_status_at("Dengue NS1", TestStatus::Cancelled, at(9, 31)));
        assert_eq!(ctx.tests_ordered[1].status, TestStatus::Cancelled);

        assert!(!ctx.update_test_status_at("X-ray", TestStatus::Completed, at(9, 40)));
        assert_eq!(ctx.last_modified, at(9, 31));
    }

    #[test]
    fn tests_and_medicines_are_stamped() {
        let mut ctx = SessionContext::new_at(at(9, 0));
        ctx.add_ordered_test_at("CBC", "persistent fever", at(9, 10));
        ctx.add_prescribed_medicine_at(
            MedicineOrder {
                name: "Paracetamol".into(),
                dosage: Some("500mg".into()),
                frequency: Some("twice daily".into()),
                ..Default::default()
            },
            at(9, 12),
        );

        assert_eq!(ctx.tests_ordered[0].status, TestStatus::Pending);
        assert_eq!(ctx.tests_ordered[0].ordered_at, at(9, 10));
        assert_eq!(ctx.medicines_given[0].order.name, "Paracetamol");
        assert_eq!(ctx.medicines_given[0].prescribed_at, at(9, 12));
        assert_eq!(ctx.last_modified, at(9, 12));
    }

    #[test]
    fn medicine_serializes_flat() {
        let mut ctx = SessionContext::new_at(at(9, 0));
        ctx.add_prescribed_medicine_at(
            MedicineOrder {
                name: "ORS".into(),
                ..Default::default()
            },
            at(9, 5),
        );
        let json = serde_json::to_value(&ctx.medicines_given[0]).unwrap();
        assert_eq!(json["name"], "ORS");
        assert!(json.get("prescribed_at").is_some());
        assert!(json.get("order").is_none());
    }

    #[test]
    fn reset_starts_new_session() {
        let mut ctx = SessionContext::new();
        let old_id = ctx.session_id;
        ctx.upsert_symptom("fever", "bukhar", at(9, 0));
        ctx.add_ordered_test("CBC", "");
        ctx.reset();

        assert_ne!(ctx.session_id, old_id);
        assert_eq!(ctx.symptom_count(), 0);
        assert!(ctx.tests_ordered.is_empty());
        assert!(ctx.last_inserted_symptom().is_none());
    }

    #[test]
    fn export_import_round_trip_keeps_order() {
        let mut ctx = SessionContext::new_at(at(9, 0));
        ctx.upsert_symptom("fever", "bukhar", at(9, 1));
        ctx.upsert_symptom("cough", "khaansi", at(9, 2));
        ctx.upsert_symptom("headache", "sir dard", at(9, 3));

        let json = ctx.export_json().unwrap();
        let restored = SessionContext::import_json(&json).unwrap();

        assert_eq!(restored, ctx);
        assert_eq!(restored.last_inserted_symptom(), Some("headache"));
    }

    #[test]
    fn import_repairs_order_log() {
        let mut ctx = SessionContext::new_at(at(9, 0));
        ctx.upsert_symptom("fever", "bukhar", at(9, 1));
        ctx.upsert_symptom("cough", "khaansi", at(9, 2));
        ctx.upsert_symptom("nausea", "ji machlana", at(9, 3));

        let mut json: serde_json::Value = serde_json::to_value(&ctx).unwrap();
        // Duplicate, unknown key, and two keys missing from the log.
        json["symptom_order"] = serde_json::json!(["cough", "cough", "ghost"]);

        let restored = SessionContext::import_json(&json.to_string()).unwrap();
        let names: Vec<&str> = restored
            .symptoms_in_order()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["cough", "fever", "nausea"]);
        assert_eq!(restored.symptom_order.len(), 3);
    }

    #[test]
    fn import_without_order_log_uses_first_report() {
        let mut ctx = SessionContext::new_at(at(9, 0));
        ctx.upsert_symptom("fever", "bukhar", at(9, 5));
        ctx.upsert_symptom("cough", "khaansi", at(9, 1));

        let mut json: serde_json::Value = serde_json::to_value(&ctx).unwrap();
        json.as_object_mut().unwrap().remove("symptom_order");

        let restored = SessionContext::import_json(&json.to_string()).unwrap();
        assert_eq!(restored.last_inserted_symptom(), Some("fever"));
    }

    #[test]
    fn import_rejects_malformed_json() {
        let err = SessionContext::import_json("{not json").unwrap_err();
        assert!(matches!(err, SessionError::Serialization(_)));
    }
}
