//! Item identifier → effect profile lookup table.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::ConfigError;
use crate::profile::EffectProfile;

/// Oracle seam for profile resolution.
///
/// Implemented by [`EffectTable`] directly and by runtime wrappers that hold
/// a table snapshot.
pub trait ProfileOracle: Send + Sync {
    fn profile(&self, item_id: &str) -> Option<EffectProfile>;
}

/// Read-only mapping from item identifier to [`EffectProfile`].
///
/// Built once from configuration and replaced wholesale on reload. Lookups
/// return profile copies, so callers never alias table storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectTable {
    profiles: HashMap<String, EffectProfile>,
}

impl EffectTable {
    /// Build a table from `(item id, profile)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyItemId`] for an empty identifier and
    /// [`ConfigError::DuplicateItem`] when a key appears twice.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, EffectProfile)>,
    ) -> Result<Self, ConfigError> {
        let mut profiles = HashMap::new();
        for (item_id, profile) in entries {
            if item_id.is_empty() {
                return Err(ConfigError::EmptyItemId);
            }
            match profiles.entry(item_id) {
                Entry::Occupied(occupied) => {
                    return Err(ConfigError::DuplicateItem(occupied.key().clone()));
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(profile);
                }
            }
        }
        Ok(Self { profiles })
    }

    /// Look up the profile configured for `item_id`.
    ///
    /// Keys are compared by exact string equality; no case or whitespace
    /// normalization is performed.
    pub fn lookup(&self, item_id: &str) -> Option<EffectProfile> {
        self.profiles.get(item_id).copied()
    }

    /// Check if an item has a profile.
    pub fn contains(&self, item_id: &str) -> bool {
        self.profiles.contains_key(item_id)
    }

    /// Get all configured item identifiers.
    pub fn item_ids(&self) -> impl Iterator<Item = &String> {
        self.profiles.keys()
    }

    /// Get number of entries in the table.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileOracle for EffectTable {
    fn profile(&self, item_id: &str) -> Option<EffectProfile> {
        self.lookup(item_id)
    }
}
