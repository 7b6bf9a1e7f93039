//! Character factory - the four-stage curried construction chain
//!
//! ```text
//! make_class(kind) -> with_skills(..) -> with_state(..) -> named(..) -> instance
//! ```
//!
//! The first two stages produce a reusable [`CharacterClass`] (a preset
//! factory such as "mage" or "paladin"); the last two supply the per-instance
//! seed and name. All real construction work happens in [`CharacterBuilder::named`]:
//! the name is merged into the record before any skill binds, so every bound
//! closure sees the final name.

use crate::ability::{AbilityMap, BindContext, SkillRef};
use crate::console::{ConsoleHandle, StdoutConsole};
use crate::error::ForgeError;
use crate::state::{StatValue, StateHandle, StateRecord, StateSeed};
use crate::status::StatusView;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique character instance identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Ulid);

impl CharacterId {
    /// Generate a new character ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Start the construction chain with a class label
///
/// The label is caller-controlled and not validated; it becomes the reserved
/// `type` field of every instance built from the resulting class.
#[must_use]
pub fn make_class(kind: impl Into<String>) -> ClassPrototype {
    ClassPrototype { kind: kind.into() }
}

/// Stage one: a class label awaiting its skills
#[derive(Debug, Clone)]
pub struct ClassPrototype {
    kind: String,
}

impl ClassPrototype {
    /// Attach the class's skills, in order
    ///
    /// Order only matters for ability-name collisions (last skill wins); each
    /// skill independently closes over the same state handle regardless.
    #[must_use]
    pub fn with_skills<I>(self, skills: I) -> CharacterClass
    where
        I: IntoIterator<Item = SkillRef>,
    {
        CharacterClass {
            kind: self.kind,
            skills: skills.into_iter().collect(),
            console: StdoutConsole::handle(),
        }
    }
}

/// A reusable preset factory: class label plus skill list
///
/// Cloning a class clones the skill references, not the skills; instances
/// built from any clone still get their own private state.
#[derive(Debug, Clone)]
pub struct CharacterClass {
    kind: String,
    skills: Vec<SkillRef>,
    console: ConsoleHandle,
}

impl CharacterClass {
    /// Class label
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Number of attached skills
    #[inline]
    #[must_use]
    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    /// Replace the console sink for instances built from this class
    ///
    /// Defaults to stdout.
    #[must_use]
    pub fn with_console(mut self, console: ConsoleHandle) -> Self {
        self.console = console;
        self
    }

    /// Stage three: supply the per-instance initial fields
    #[must_use]
    pub fn with_state(&self, seed: StateSeed) -> CharacterBuilder {
        CharacterBuilder {
            class: self.clone(),
            seed,
        }
    }
}

/// Stage three result: class plus seed, awaiting a name
#[derive(Debug, Clone)]
pub struct CharacterBuilder {
    class: CharacterClass,
    seed: StateSeed,
}

impl CharacterBuilder {
    /// Stage four: name the character and build it
    ///
    /// Construction is total: any seed and any skill list produce an
    /// instance. Seeds missing the fields a skill's abilities touch only fail
    /// later, when such an ability is invoked.
    #[must_use]
    pub fn named(self, name: impl Into<String>) -> CharacterInstance {
        let name = name.into();
        let record = StateRecord::seed(&self.class.kind, &name, &self.seed);
        let state = StateHandle::new(record);
        let ctx = BindContext::new(state.clone(), self.class.console.clone());

        let mut abilities = AbilityMap::new();
        for skill in &self.class.skills {
            let contributed = skill.bind(&ctx);
            tracing::debug!(
                skill = skill.id(),
                abilities = contributed.len(),
                kind = %self.class.kind,
                name = %name,
                "bound skill"
            );
            for (ability, bound) in contributed {
                // Last skill wins on collision, silently.
                abilities.insert(ability, bound);
            }
        }

        // Key set frozen here: fields added later stay outside the view.
        let status = StatusView::capture(&state);

        CharacterInstance {
            id: CharacterId::new(),
            status,
            abilities,
            state,
        }
    }
}

/// A built character: status view plus the union of its skills' abilities
#[derive(Debug)]
pub struct CharacterInstance {
    id: CharacterId,
    status: StatusView,
    abilities: AbilityMap,
    state: StateHandle,
}

impl CharacterInstance {
    /// Instance identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    /// Read-only status view over this instance's live state
    #[inline]
    #[must_use]
    pub fn status(&self) -> &StatusView {
        &self.status
    }

    /// Check whether an ability is bound
    #[inline]
    #[must_use]
    pub fn can(&self, ability: &str) -> bool {
        self.abilities.contains_key(ability)
    }

    /// Bound ability names, in merge order
    pub fn ability_names(&self) -> impl Iterator<Item = &str> {
        self.abilities.keys().map(String::as_str)
    }

    /// Invoke a bound ability
    ///
    /// # Errors
    /// [`ForgeError::UnknownAbility`] if no skill bound `ability`; otherwise
    /// whatever the ability itself reports.
    pub fn invoke(&self, ability: &str, args: &[StatValue]) -> Result<(), ForgeError> {
        let bound = self
            .abilities
            .get(ability)
            .ok_or_else(|| ForgeError::UnknownAbility(ability.to_string()))?;
        tracing::trace!(ability, args = args.len(), "invoking ability");
        bound.call(args)
    }

    /// The shared state handle backing this instance
    ///
    /// Exposed for custom skills and tests; normal mutation goes through the
    /// abilities.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &StateHandle {
        &self.state
    }
}
