//! Preset character classes
//!
//! Demonstrations of partial application: label and skills are bound once,
//! seed and name are supplied per instance.

use crate::{CanCast, CanFight};
use classforge_core::{make_class, CharacterClass};

/// The `fighter` class: [`CanFight`] only
#[must_use]
pub fn fighter() -> CharacterClass {
    make_class("fighter").with_skills([CanFight::skill()])
}

/// The `mage` class: [`CanCast`] only
#[must_use]
pub fn mage() -> CharacterClass {
    make_class("mage").with_skills([CanCast::skill()])
}

/// The `paladin` class: [`CanCast`] then [`CanFight`]
///
/// Order is only significant for ability-name collisions, of which the stock
/// skills have none.
#[must_use]
pub fn paladin() -> CharacterClass {
    make_class("paladin").with_skills([CanCast::skill(), CanFight::skill()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use classforge_core::{StatValue, StateSeed, TYPE_FIELD};

    #[test]
    fn presets_carry_label_and_skills() {
        assert_eq!(fighter().kind(), "fighter");
        assert_eq!(fighter().skill_count(), 1);
        assert_eq!(mage().kind(), "mage");
        assert_eq!(paladin().skill_count(), 2);
    }

    #[test]
    fn paladin_gets_both_abilities() {
        let pally = paladin()
            .with_state(StateSeed::new().with("stamina", 80).with("mana", 100))
            .named("Holy Roller");

        assert!(pally.can("cast"));
        assert!(pally.can("fight"));
        assert_eq!(
            pally.status().get(TYPE_FIELD),
            Some(StatValue::from("paladin"))
        );
    }
}
