//! Effect kinds - the atomic steps an ability graph is built from.
//!
//! # Architecture
//!
//! This module uses an **Enum + Struct hybrid** approach:
//! - Individual effect kinds are structs (DealDamageEffect, ApplyStateEffect, ...)
//! - [`EffectKind`] wraps them for serialization and dispatching
//! - Each struct implements `validate` (registry load) and `apply` (execution)
//!
//! Adding an effect kind is a closed-set extension: one new struct, one enum
//! variant, one arm in each dispatcher.

mod damage;
mod healing;
mod kinds;
mod select;
mod state;

pub use damage::DealDamageEffect;
pub use healing::ApplyHealingEffect;
pub use kinds::EffectKind;
pub use select::SelectTargetsEffect;
pub use state::ApplyStateEffect;
