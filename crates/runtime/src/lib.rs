//! Process-facing glue around the effect table.
//!
//! The runtime owns the loaded [`healing_core::EffectTable`] snapshot, swaps
//! it wholesale on reload, and exposes the two calls the game integration
//! layer drives: profile resolution and effect application.
mod error;
mod oracle;
mod service;

pub use error::RuntimeError;
pub use oracle::TableHandle;
pub use service::EffectService;
