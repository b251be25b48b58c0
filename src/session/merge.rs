//! Fold one turn's entities into the session context.

use std::collections::HashSet;

use chrono::{Local, NaiveDateTime};

use super::types::{SessionContext, TimelineEntry};
use crate::models::{Entity, EntityType, TimelineEntryType};

/// Merge a turn into `ctx` and hand the same context back.
///
/// Symptom entities create or update their record. Body-part, duration and
/// severity entities go to the most recently *inserted* symptom; a body
/// part only fills an empty location while durations and severities always
/// overwrite. Every call appends one timeline entry.
pub fn merge_with_context<'a>(
    entities: &[Entity],
    ctx: &'a mut SessionContext,
) -> &'a mut SessionContext {
    merge_with_context_at(entities, ctx, Local::now().naive_local())
}

pub fn merge_with_context_at<'a>(
    entities: &[Entity],
    ctx: &'a mut SessionContext,
    now: NaiveDateTime,
) -> &'a mut SessionContext {
    let mut mentioned: HashSet<&str> = HashSet::new();

    for entity in entities {
        match entity.entity_type {
            EntityType::Symptom => {
                mentioned.insert(entity.entity.as_str());
                merge_symptom(ctx, entity, now);
            }
            EntityType::BodyPart | EntityType::Duration | EntityType::Severity => {
                attach_to_last_inserted(ctx, entity, &mentioned);
            }
        }
    }

    ctx.timeline.push(TimelineEntry {
        timestamp: now,
        entities: entities.to_vec(),
        entry_type: TimelineEntryType::UserInput,
    });
    ctx.last_modified = now;
    ctx
}

/// Same as [`merge_with_context`] on a brand-new context.
pub fn merge_into_new_context(entities: &[Entity]) -> SessionContext {
    let mut ctx = SessionContext::new();
    merge_with_context(entities, &mut ctx);
    ctx
}

fn merge_symptom(ctx: &mut SessionContext, entity: &Entity, now: NaiveDateTime) {
    let (record, created) = ctx.upsert_symptom(&entity.entity, &entity.original, now);
    record.occurrences += 1;
    record.last_reported = now;
    if let Some(ref modifiers) = entity.modifiers {
        record.modifiers.overlay(modifiers);
    }
    if let Some(ref location) = entity.location {
        record.modifiers.location = Some(location.clone());
    }

    if created {
        tracing::debug!(symptom = %entity.entity, "New symptom recorded");
    }
}

fn attach_to_last_inserted(ctx: &mut SessionContext, entity: &Entity, mentioned: &HashSet<&str>) {
    let Some(record) = ctx.last_inserted_symptom_mut() else {
        tracing::debug!(
            entity = %entity.entity,
            kind = %entity.entity_type,
            "No symptom to attach modifier to"
        );
        return;
    };

    if !mentioned.contains(record.name.as_str()) {
        tracing::warn!(
            symptom = %record.name,
            entity = %entity.entity,
            kind = %entity.entity_type,
            "Attaching modifier to a symptom not mentioned in this turn"
        );
    }

    let value = Some(entity.entity.clone());
    match entity.entity_type {
        EntityType::BodyPart => {
            if record.modifiers.location.is_none() {
                record.modifiers.location = value;
            }
        }
        EntityType::Duration => record.modifiers.duration = value,
        EntityType::Severity => record.modifiers.severity = value,
        EntityType::Symptom => {}
    }
}
