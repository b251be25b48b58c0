use crate::models::{Entity, EntityType, Modifiers};

/// Attach modifier entities to symptoms within a single turn.
///
/// The first symptom receives the first body part, the first duration and
/// the first severity, and those modifier entities (along with any later
/// ones of the same kinds) are consumed. Every other symptom carries empty
/// modifiers. Entities that are neither symptoms nor consumed follow the
/// symptoms in their original relative order.
pub fn merge_related_entities(entities: Vec<Entity>) -> Vec<Entity> {
    let first_of = |kind: EntityType| {
        entities
            .iter()
            .find(|e| e.entity_type == kind)
            .map(|e| e.entity.clone())
    };

    let Some(first_symptom) = entities.iter().position(Entity::is_symptom) else {
        return entities;
    };

    let attached = Modifiers {
        location: first_of(EntityType::BodyPart),
        duration: first_of(EntityType::Duration),
        severity: first_of(EntityType::Severity),
    };

    let mut symptoms = Vec::new();
    let mut rest = Vec::new();

    for (index, entity) in entities.into_iter().enumerate() {
        if entity.is_symptom() {
            let modifiers = if index == first_symptom {
                attached.clone()
            } else {
                Modifiers::default()
            };
            symptoms.push(entity.with_modifiers(modifiers));
        } else if !entity.is_modifier() {
            rest.push(entity);
        }
    }

    symptoms.extend(rest);
    symptoms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DurationUnit;

    #[test]
    fn first_symptom_takes_all_modifiers() {
        let merged = merge_related_entities(vec![
            Entity::symptom("headache", "sir dard", 0.9).with_location("head"),
            Entity::body_part("head", "sir", 0.8),
            Entity::duration("2", DurationUnit::Days, "2 din", 0.8),
            Entity::severity("severe", "bahut", 0.7),
        ]);

        assert_eq!(merged.len(), 1);
        let headache = &merged[0];
        assert_eq!(headache.entity, "headache");
        let m = headache.modifiers.as_ref().expect("modifiers set");
        assert_eq!(m.location.as_deref(), Some("head"));
        assert_eq!(m.duration.as_deref(), Some("2_days"));
        assert_eq!(m.severity.as_deref(), Some("severe"));
    }

    #[test]
    fn later_symptoms_get_empty_modifiers() {
        let merged = merge_related_entities(vec![
            Entity::symptom("fever", "bukhar", 0.7),
            Entity::symptom("cough", "khaansi", 0.9),
            Entity::severity("mild", "halka", 0.7),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(
            merged[0].modifiers.as_ref().and_then(|m| m.severity.as_deref()),
            Some("mild")
        );
        let second = merged[1].modifiers.as_ref().expect("modifiers set");
        assert!(second.is_empty());
        assert_eq!(second.severity, None);
    }

    #[test]
    fn first_of_each_kind_wins() {
        let merged = merge_related_entities(vec![
            Entity::severity("mild", "thoda", 0.7),
            Entity::symptom("pain", "dard", 0.7),
            Entity::severity("severe", "bahut", 0.7),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged[0].modifiers.as_ref().and_then(|m| m.severity.as_deref()),
            Some("mild")
        );
    }

    #[test]
    fn modifiers_pass_through_without_symptom() {
        let input = vec![
            Entity::duration("3", DurationUnit::Days, "3 din", 0.8),
            Entity::body_part("abdomen", "pet", 0.8),
        ];
        let merged = merge_related_entities(input.clone());
        assert_eq!(merged, input);
    }

    #[test]
    fn empty_input() {
        assert!(merge_related_entities(Vec::new()).is_empty());
    }

    #[test]
    fn symptom_alone_gets_empty_modifiers() {
        let merged = merge_related_entities(vec![Entity::symptom("fever", "bukhar", 0.7)]);
        assert_eq!(merged[0].modifiers, Some(Modifiers::default()));
    }
}
