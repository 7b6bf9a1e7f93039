//! Spellcasting skill

use classforge_core::{
    Ability, AbilityMap, BindContext, CharacterInstance, ForgeError, SkillMixin, SkillRef,
    StatValue,
};
use std::sync::Arc;

/// Ability name contributed by [`CanCast`]
pub const CAST: &str = "cast";

/// State field consumed by casting
pub const MANA_FIELD: &str = "mana";

/// Skill granting the `cast` ability
///
/// Each cast costs exactly 1 mana. There is no bound check: mana goes
/// negative freely. Casting on an instance seeded without a `mana` field
/// fails the call with [`ForgeError::MissingField`] and leaves state and
/// console untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanCast;

impl CanCast {
    /// Create the skill
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Create a shared skill reference for class construction
    #[must_use]
    pub fn skill() -> SkillRef {
        Arc::new(Self)
    }
}

impl SkillMixin for CanCast {
    fn id(&self) -> &'static str {
        "can-cast"
    }

    fn bind(&self, ctx: &BindContext) -> AbilityMap {
        let state = ctx.state.clone();
        let console = ctx.console.clone();

        let mut map = AbilityMap::new();
        map.insert(
            CAST.to_string(),
            Ability::new(move |args| {
                let spell = args
                    .first()
                    .and_then(StatValue::as_text)
                    .ok_or_else(|| ForgeError::invalid_argument(CAST, "expected a spell name"))?
                    .to_string();

                let remaining = state.adjust(MANA_FIELD, -1)?;
                console.line(&format!("{} casts {spell}!", state.name()));
                tracing::trace!(%remaining, spell, "cast resolved");
                Ok(())
            }),
        );
        map
    }
}

/// Typed call surface for the `cast` ability
pub trait Caster {
    /// Cast a spell by name
    ///
    /// # Errors
    /// [`ForgeError::UnknownAbility`] if this character has no `cast`
    /// ability, [`ForgeError::MissingField`] if it has no mana field.
    fn cast(&self, spell: &str) -> Result<(), ForgeError>;
}

impl Caster for CharacterInstance {
    fn cast(&self, spell: &str) -> Result<(), ForgeError> {
        self.invoke(CAST, &[StatValue::from(spell)])
    }
}
