//! Healing skill

use classforge_core::{
    Ability, AbilityMap, BindContext, CharacterInstance, ForgeError, SkillMixin, SkillRef,
};
use std::sync::Arc;

/// Ability name contributed by [`CanHeal`]
pub const HEAL: &str = "heal";

/// State field restored by healing
pub const HEALTH_FIELD: &str = "health";

/// Skill granting the `heal` ability
///
/// Each call restores exactly 1 health, with no ceiling.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanHeal;

impl CanHeal {
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

impl SkillMixin for CanHeal {
    fn id(&self) -> &'static str {
        "can-heal"
    }

    fn bind(&self, ctx: &BindContext) -> AbilityMap {
        let state = ctx.state.clone();
        let console = ctx.console.clone();

        let mut map = AbilityMap::new();
        map.insert(
            HEAL.to_string(),
            Ability::new(move |_args| {
                let restored = state.adjust(HEALTH_FIELD, 1)?;
                console.line(&format!("{} lays on healing hands!", state.name()));
                tracing::trace!(%restored, "heal resolved");
                Ok(())
            }),
        );
        map
    }
}

/// Typed call surface for the `heal` ability
pub trait Healer {
    /// Restore one point of health
    ///
    /// # Errors
    /// [`ForgeError::UnknownAbility`] if this character has no `heal`
    /// ability, [`ForgeError::MissingField`] if it has no health field.
    fn heal(&self) -> Result<(), ForgeError>;
}

impl Healer for CharacterInstance {
    fn heal(&self) -> Result<(), ForgeError> {
        self.invoke(HEAL, &[])
    }
}
