//! Bundled capability mixins
//!
//! The open-set skill contract lives in `classforge-core`; this crate ships
//! the stock skills ([`CanCast`], [`CanFight`], [`CanHeal`]), one capability
//! trait per skill for typed call sites, and the preset classes
//! ([`fighter`], [`mage`], [`paladin`]).

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod cast;
mod fight;
mod heal;
mod presets;

// Re-exports
pub use cast::{CanCast, Caster, CAST, MANA_FIELD};
pub use fight::{CanFight, Fighter, FIGHT, STAMINA_FIELD};
pub use heal::{CanHeal, Healer, HEAL, HEALTH_FIELD};
pub use presets::{fighter, mage, paladin};
