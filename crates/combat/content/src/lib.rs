//! Static combat definitions and the loaders that turn them into registries.
//!
//! `combat-content` owns the canonical stat/ability definition data (RON
//! files embedded at compile time) and the loaders that read definition files
//! from a data directory. Loading always goes through the core registry
//! constructors, so every malformed definition fails fast at startup rather
//! than surfacing during a combat action.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{AbilityLoader, ContentFactory, StatLoader, bundled_registries};
