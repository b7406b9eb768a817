//! Typed errors raised while building the effect table.

/// Raised during [`EffectTable`](crate::EffectTable) construction when the
/// configuration entries are structurally invalid.
///
/// A lookup miss is not an error; it is the normal "no effect applies"
/// outcome signaled through `Option`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An entry used an empty item identifier.
    #[error("item identifier must not be empty")]
    EmptyItemId,

    /// Two entries share the same item identifier.
    #[error("duplicate item entry: {0}")]
    DuplicateItem(String),
}
