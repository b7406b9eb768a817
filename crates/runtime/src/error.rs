//! Runtime error types.

use healing_core::ConfigError;

/// Errors surfaced by [`EffectService`](crate::EffectService) loads and
/// reloads.
///
/// A failed reload leaves the previous table snapshot in place.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Config file could not be read, parsed, or written back.
    #[error("failed to load effects config: {0}")]
    Load(#[source] anyhow::Error),

    /// Config parsed but its entries are structurally invalid.
    #[error("invalid effects config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
