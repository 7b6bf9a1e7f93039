//! Skill mixins and the abilities they contribute
//!
//! A skill is bound once, at construction time, against the instance's shared
//! state handle. Binding returns an ordered map of named abilities; the
//! factory merges those maps in skill order, later skills silently overriding
//! earlier ones on a name collision.

use crate::console::ConsoleHandle;
use crate::error::ForgeError;
use crate::state::{StatValue, StateHandle};
use indexmap::IndexMap;
use std::sync::Arc;

/// A bound, callable ability
///
/// The closure owns whatever it captured at bind time, normally a clone of
/// the instance's [`StateHandle`] and [`ConsoleHandle`].
pub struct Ability {
    func: Box<dyn Fn(&[StatValue]) -> Result<(), ForgeError> + Send + Sync>,
}

impl Ability {
    /// Wrap a closure as an ability
    #[must_use]
    pub fn new(
        func: impl Fn(&[StatValue]) -> Result<(), ForgeError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            func: Box::new(func),
        }
    }

    /// Invoke the ability
    ///
    /// # Errors
    /// Whatever the bound closure reports: bad arguments, missing or
    /// non-numeric state fields.
    pub fn call(&self, args: &[StatValue]) -> Result<(), ForgeError> {
        (self.func)(args)
    }
}

impl std::fmt::Debug for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Ability(..)")
    }
}

/// Ordered map of ability name to bound ability
///
/// Insertion order is the merge order; re-inserting a name replaces the
/// ability (last writer wins) while keeping the original position.
pub type AbilityMap = IndexMap<String, Ability>;

/// Everything a skill sees when it binds to an instance
#[derive(Debug, Clone)]
pub struct BindContext {
    /// The instance's shared state handle
    pub state: StateHandle,

    /// Sink for the instance's narration lines
    pub console: ConsoleHandle,
}

impl BindContext {
    /// Create a bind context
    #[inline]
    #[must_use]
    pub fn new(state: StateHandle, console: ConsoleHandle) -> Self {
        Self { state, console }
    }
}

/// A capability mixin
///
/// Skills are an open set: any number may be attached to a class, they may
/// contribute any ability names, and they may read or write any state field,
/// including fields they never declared. A skill holds no per-instance data
/// itself; everything per-instance lives in the closures it returns.
pub trait SkillMixin: Send + Sync + std::fmt::Debug {
    /// Stable identifier, used in traces
    fn id(&self) -> &'static str;

    /// Bind this skill to an instance, producing its abilities
    fn bind(&self, ctx: &BindContext) -> AbilityMap;
}

/// Shared reference to a skill, as stored by classes
pub type SkillRef = Arc<dyn SkillMixin>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferConsole;
    use crate::state::{StateRecord, StateSeed};

    #[derive(Debug)]
    struct Shout;

    impl SkillMixin for Shout {
        fn id(&self) -> &'static str {
            "shout"
        }

        fn bind(&self, ctx: &BindContext) -> AbilityMap {
            let state = ctx.state.clone();
            let console = ctx.console.clone();
            let mut map = AbilityMap::new();
            map.insert(
                "shout".to_string(),
                Ability::new(move |_args| {
                    console.line(&format!("{} shouts!", state.name()));
                    Ok(())
                }),
            );
            map
        }
    }

    #[test]
    fn bound_ability_closes_over_shared_state() {
        let state = StateHandle::new(StateRecord::seed("bard", "Lute", &StateSeed::new()));
        let (console, handle) = BufferConsole::shared();
        let ctx = BindContext::new(state, handle);

        let abilities = Shout.bind(&ctx);
        abilities["shout"].call(&[]).unwrap();
        assert_eq!(console.last_line().as_deref(), Some("Lute shouts!"));
    }

    #[test]
    fn map_reinsert_replaces_value() {
        let mut map = AbilityMap::new();
        map.insert("hit".to_string(), Ability::new(|_| Ok(())));
        map.insert(
            "hit".to_string(),
            Ability::new(|_| Err(ForgeError::UnknownAbility("hit".to_string()))),
        );

        assert_eq!(map.len(), 1);
        assert!(map["hit"].call(&[]).is_err());
    }
}
