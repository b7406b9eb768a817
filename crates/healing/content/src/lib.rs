//! Data-driven effect configuration and loaders.
//!
//! This crate owns the on-disk JSON format for the consumable effect table:
//! the versioned config document, the shipped default catalog, and the
//! loaders that turn a config file into a [`healing_core::EffectTable`].
//!
//! Content is consumed by the runtime and never appears in subject state.

pub mod config;
pub mod loaders;

pub use config::{CONFIG_VERSION, EffectsConfig, default_config};
pub use loaders::{EffectsLoader, LoadOutcome, LoadResult, load_or_default};
