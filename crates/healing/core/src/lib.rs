//! Deterministic consumable-effect logic shared across the runtime and tools.
//!
//! `healing-core` defines the canonical rules for resolving an item
//! identifier to an [`EffectProfile`] and applying that profile to a
//! [`Subject`]. All subject mutation flows through [`apply_effects`], and
//! supporting crates depend on the types re-exported here.
pub mod apply;
pub mod error;
pub mod profile;
pub mod subject;
pub mod table;

pub use apply::apply_effects;
pub use error::ConfigError;
pub use profile::EffectProfile;
pub use subject::{
    Accumulator, AccumulatorKind, HealthMeter, Metabolism, RegenChannel, Subject,
};
pub use table::{EffectTable, ProfileOracle};
