//! classforge core
//!
//! Builds character instances by binding an ordered list of skill mixins to a
//! single shared state record, then exposing a read-only status view plus the
//! union of the abilities the mixins contribute.
//!
//! # Core Concepts
//!
//! - [`StateRecord`] / [`StateHandle`]: the mutable per-instance field map and
//!   the shared-ownership handle every bound skill closes over
//! - [`SkillMixin`]: a capability that, given a state handle, returns a named
//!   map of callable [`Ability`] closures
//! - [`StatusView`]: read-only projection over the state, key set frozen at
//!   construction time
//! - [`make_class`]: entry point of the four-stage curried construction chain
//!
//! # Example
//!
//! ```rust,ignore
//! use classforge_core::{make_class, StateSeed};
//!
//! let mage = make_class("mage").with_skills([cast_skill()]);
//! let scorcher = mage
//!     .with_state(StateSeed::new().with("health", 150).with("mana", 120))
//!     .named("Scorcher");
//! scorcher.invoke("cast", &["fireball".into()])?;
//! assert_eq!(scorcher.status().get("mana"), Some(119.into()));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod ability;
mod compose;
mod console;
mod error;
mod factory;
mod state;
mod status;

// Re-exports
pub use ability::{Ability, AbilityMap, BindContext, SkillMixin, SkillRef};
pub use compose::{compose, pipe, Unary};
pub use console::{BufferConsole, Console, ConsoleHandle, StdoutConsole};
pub use error::ForgeError;
pub use factory::{
    make_class, CharacterBuilder, CharacterClass, CharacterId, CharacterInstance, ClassPrototype,
};
pub use state::{StatValue, StateHandle, StateRecord, StateSeed, NAME_FIELD, TYPE_FIELD};
pub use status::StatusView;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
