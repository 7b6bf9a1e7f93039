//! Construction-totality properties
//!
//! For any seed map and any skill list, building a character succeeds and the
//! reserved `type`/`name` fields override same-named seed fields.

use classforge_core::{
    make_class, Ability, AbilityMap, BindContext, SkillMixin, SkillRef, StatValue, StateSeed,
    NAME_FIELD, TYPE_FIELD,
};
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug)]
struct Drains {
    field: String,
}

impl SkillMixin for Drains {
    fn id(&self) -> &'static str {
        "drains"
    }

    fn bind(&self, ctx: &BindContext) -> AbilityMap {
        let state = ctx.state.clone();
        let field = self.field.clone();
        let mut map = AbilityMap::new();
        map.insert(
            "drain".to_string(),
            Ability::new(move |_| state.adjust(&field, -1).map(|_| ())),
        );
        map
    }
}

fn field_name() -> impl Strategy<Value = String> {
    // Plain identifiers plus the reserved names, to exercise precedence.
    prop_oneof![
        "[a-z]{1,8}",
        Just("type".to_string()),
        Just("name".to_string()),
    ]
}

proptest! {
    #[test]
    fn construction_is_total(
        kind in ".{0,16}",
        name in ".{0,16}",
        seed_fields in proptest::collection::hash_map(field_name(), any::<i64>(), 0..8),
        skill_count in 0usize..4,
    ) {
        let skills: Vec<SkillRef> = (0..skill_count)
            .map(|i| Arc::new(Drains { field: format!("f{i}") }) as SkillRef)
            .collect();

        let mut seed = StateSeed::new();
        for (field, value) in &seed_fields {
            seed.set(field.clone(), *value);
        }

        let instance = make_class(kind.clone())
            .with_skills(skills)
            .with_state(seed)
            .named(name.clone());

        // Reserved fields always reflect the construction arguments.
        prop_assert_eq!(
            instance.status().get(TYPE_FIELD),
            Some(StatValue::from(kind))
        );
        prop_assert_eq!(
            instance.status().get(NAME_FIELD),
            Some(StatValue::from(name))
        );

        // Every non-reserved seed field made it into the view.
        for field in seed_fields.keys() {
            prop_assert!(instance.status().contains(field));
        }
    }

    #[test]
    fn status_keys_match_construction_key_set(
        seed_fields in proptest::collection::hash_map("[a-z]{1,8}", any::<i64>(), 0..8),
    ) {
        let mut seed = StateSeed::new();
        for (field, value) in &seed_fields {
            seed.set(field.clone(), *value);
        }

        let instance = make_class("probe")
            .with_skills(Vec::<SkillRef>::new())
            .with_state(seed)
            .named("P");

        let expected: HashMap<&str, ()> = seed_fields.keys().map(|k| (k.as_str(), ())).collect();
        let captured: Vec<&str> = instance.status().fields().collect();

        // type + name + distinct non-reserved seed fields, nothing else.
        let non_reserved = expected
            .keys()
            .filter(|k| **k != "type" && **k != "name")
            .count();
        prop_assert_eq!(captured.len(), non_reserved + 2);
        for field in expected.keys() {
            prop_assert!(captured.contains(field));
        }
    }
}

#[test]
fn draining_missing_field_fails_without_mutation() {
    let instance = make_class("wisp")
        .with_skills(vec![Arc::new(Drains {
            field: "mana".to_string(),
        }) as SkillRef])
        .with_state(StateSeed::new().with("health", 3))
        .named("Wisp");

    let before = instance.status().entries();
    assert!(instance.invoke("drain", &[]).is_err());
    assert_eq!(instance.status().entries(), before);
}
