//! Effect resolution and application service.

use std::path::Path;

use healing_content::{LoadOutcome, load_or_default};
use healing_core::{EffectProfile, EffectTable, Subject, apply_effects};

use crate::error::RuntimeError;
use crate::oracle::TableHandle;

/// Front door for the integration layer.
///
/// Holds the table snapshot and dispatches the resolve → apply sequence
/// whenever a consumption or healing-item action is observed.
pub struct EffectService {
    table: TableHandle,
}

impl EffectService {
    /// Build a service around an already-constructed table.
    pub fn new(table: EffectTable) -> Self {
        Self {
            table: TableHandle::new(table),
        }
    }

    /// Build a service from a config file, generating or migrating the file
    /// as needed.
    pub fn from_config(path: &Path) -> Result<Self, RuntimeError> {
        let service = Self::new(EffectTable::default());
        service.reload(path)?;
        Ok(service)
    }

    /// Resolve the profile configured for `item_id`.
    pub fn resolve(&self, item_id: &str) -> Option<EffectProfile> {
        self.table.snapshot().lookup(item_id)
    }

    /// Resolve `item_id` and apply its profile to `subject`.
    ///
    /// Returns `false` when no profile is configured; the subject is left
    /// untouched in that case.
    pub fn consume(&self, subject: &mut dyn Subject, item_id: &str) -> bool {
        let Some(profile) = self.resolve(item_id) else {
            tracing::debug!("No effect profile for item {:?}", item_id);
            return false;
        };

        apply_effects(subject, &profile);
        tracing::debug!("Applied effect profile for item {:?}", item_id);
        true
    }

    /// Reload the table from `path`, swapping the snapshot wholesale.
    ///
    /// On failure the previous snapshot stays in place. Returns the number of
    /// loaded entries.
    pub fn reload(&self, path: &Path) -> Result<usize, RuntimeError> {
        let (config, outcome) = load_or_default(path).map_err(RuntimeError::Load)?;
        match outcome {
            LoadOutcome::Generated => {
                tracing::info!("Generated default effects config at {}", path.display());
            }
            LoadOutcome::Migrated => {
                tracing::warn!(
                    "Config changes detected! Updated {} to version {}",
                    path.display(),
                    config.version
                );
            }
            LoadOutcome::Loaded => {}
        }

        let table = config.into_table()?;
        let len = table.len();
        self.table.replace(table);
        tracing::debug!("Effect table loaded with {} entries", len);
        Ok(len)
    }

    /// Shared handle to the current table snapshot.
    pub fn table(&self) -> &TableHandle {
        &self.table
    }
}
