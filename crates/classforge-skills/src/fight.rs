//! Melee skill

use classforge_core::{
    Ability, AbilityMap, BindContext, CharacterInstance, ForgeError, SkillMixin, SkillRef,
};
use std::sync::Arc;

/// Ability name contributed by [`CanFight`]
pub const FIGHT: &str = "fight";

/// State field consumed by fighting
pub const STAMINA_FIELD: &str = "stamina";

/// Skill granting the `fight` ability
///
/// Each swing costs exactly 1 stamina, with no floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanFight;

impl CanFight {
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

impl SkillMixin for CanFight {
    fn id(&self) -> &'static str {
        "can-fight"
    }

    fn bind(&self, ctx: &BindContext) -> AbilityMap {
        let state = ctx.state.clone();
        let console = ctx.console.clone();

        let mut map = AbilityMap::new();
        map.insert(
            FIGHT.to_string(),
            Ability::new(move |_args| {
                let remaining = state.adjust(STAMINA_FIELD, -1)?;
                console.line(&format!("{} slashes at the foe!", state.name()));
                tracing::trace!(%remaining, "fight resolved");
                Ok(())
            }),
        );
        map
    }
}

/// Typed call surface for the `fight` ability
pub trait Fighter {
    /// Swing at the foe
    ///
    /// # Errors
    /// [`ForgeError::UnknownAbility`] if this character has no `fight`
    /// ability, [`ForgeError::MissingField`] if it has no stamina field.
    fn fight(&self) -> Result<(), ForgeError>;
}

impl Fighter for CharacterInstance {
    fn fight(&self) -> Result<(), ForgeError> {
        self.invoke(FIGHT, &[])
    }
}
