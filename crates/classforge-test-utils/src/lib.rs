//! Testing utilities for the classforge workspace
//!
//! Shared fixtures: capture console, stock seeds, throwaway skills.

#![allow(missing_docs)]

use classforge_core::{
    Ability, AbilityMap, BindContext, BufferConsole, ConsoleHandle, SkillMixin, StateSeed,
};
use std::sync::Arc;

/// A buffer console plus its sink handle, ready for `with_console`.
#[must_use]
pub fn capture_console() -> (Arc<BufferConsole>, ConsoleHandle) {
    BufferConsole::shared()
}

/// Seed used by most scenario tests: full caster-warrior stat line.
#[must_use]
pub fn full_seed() -> StateSeed {
    StateSeed::new()
        .with("health", 150)
        .with("stamina", 100)
        .with("mana", 120)
}

/// Seed without a mana field, for missing-field failure paths.
#[must_use]
pub fn manaless_seed() -> StateSeed {
    StateSeed::new().with("health", 150).with("stamina", 100)
}

/// Skill binding a single ability that emits a fixed console line.
///
/// Handy for collision tests: two `FixedLine` skills bound under the same
/// ability name make the override order observable.
#[derive(Debug)]
pub struct FixedLine {
    pub ability: &'static str,
    pub line: &'static str,
}

impl FixedLine {
    #[must_use]
    pub fn new(ability: &'static str, line: &'static str) -> Self {
        Self { ability, line }
    }
}

impl SkillMixin for FixedLine {
    fn id(&self) -> &'static str {
        "fixed-line"
    }

    fn bind(&self, ctx: &BindContext) -> AbilityMap {
        let console = ctx.console.clone();
        let line = self.line;
        let mut map = AbilityMap::new();
        map.insert(
            self.ability.to_string(),
            Ability::new(move |_| {
                console.line(line);
                Ok(())
            }),
        );
        map
    }
}
