//! Versioned effects configuration document.

use std::collections::HashMap;

use healing_core::{ConfigError, EffectProfile, EffectTable};
use serde::{Deserialize, Serialize};

/// Version written into freshly generated config files.
pub const CONFIG_VERSION: &str = "1.1.0";

/// On-disk configuration: a version marker plus the item → profile map.
///
/// Profile fields omitted in the file read as 0.0 (no effect).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    pub version: String,
    pub items: HashMap<String, EffectProfile>,
}

impl EffectsConfig {
    /// Build the lookup table from this document.
    pub fn into_table(self) -> Result<EffectTable, ConfigError> {
        EffectTable::from_entries(self.items)
    }

    /// True when the stored version sorts below [`CONFIG_VERSION`].
    pub fn is_outdated(&self) -> bool {
        version_lt(&self.version, CONFIG_VERSION)
    }

    /// Migrate an outdated document in place.
    ///
    /// Documents older than 1.0.0 predate the current item schema and are
    /// replaced wholesale by the default catalog. Newer documents keep their
    /// entries; only the version marker moves forward.
    pub fn migrate(&mut self) {
        if version_lt(&self.version, "1.0.0") {
            *self = default_config();
            return;
        }
        self.version = CONFIG_VERSION.to_string();
    }
}

// Ordinal comparison, matching the shipped major.minor.patch shapes.
fn version_lt(stored: &str, current: &str) -> bool {
    stored < current
}

/// Default catalog shipped with the crate.
pub fn default_config() -> EffectsConfig {
    let items = HashMap::from([
        (
            "bandage".to_string(),
            EffectProfile {
                instant_health: 5.0,
                poison: -2.0,
                ..Default::default()
            },
        ),
        (
            "syringe.medical".to_string(),
            EffectProfile {
                instant_health: 15.0,
                health_over_time: 20.0,
                poison: -5.0,
                radiation: -10.0,
                ..Default::default()
            },
        ),
        (
            "largemedkit".to_string(),
            EffectProfile {
                health_over_time: 100.0,
                poison: -10.0,
                ..Default::default()
            },
        ),
        (
            "pumpkin".to_string(),
            EffectProfile {
                health_over_time: 10.0,
                calories: 100.0,
                hydration: 30.0,
                ..Default::default()
            },
        ),
        (
            "corn".to_string(),
            EffectProfile {
                health_over_time: 6.0,
                calories: 75.0,
                hydration: 10.0,
                ..Default::default()
            },
        ),
        (
            "mushroom".to_string(),
            EffectProfile {
                instant_health: 3.0,
                calories: 15.0,
                hydration: 5.0,
                ..Default::default()
            },
        ),
        (
            "apple".to_string(),
            EffectProfile {
                instant_health: 2.0,
                calories: 30.0,
                hydration: 15.0,
                ..Default::default()
            },
        ),
    ]);

    EffectsConfig {
        version: CONFIG_VERSION.to_string(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_builds_a_table() {
        let table = default_config().into_table().unwrap();

        assert_eq!(table.len(), 7);
        let bandage = table.lookup("bandage").unwrap();
        assert_eq!(bandage.instant_health, 5.0);
        assert_eq!(bandage.poison, -2.0);
        assert_eq!(bandage.calories, 0.0);
    }

    #[test]
    fn pre_one_zero_migration_replaces_wholesale() {
        let mut config = EffectsConfig {
            version: "0.9.0".to_string(),
            items: HashMap::from([("old_item".to_string(), EffectProfile::NONE)]),
        };

        assert!(config.is_outdated());
        config.migrate();

        assert_eq!(config.version, CONFIG_VERSION);
        assert!(!config.items.contains_key("old_item"));
        assert!(config.items.contains_key("bandage"));
    }

    #[test]
    fn post_one_zero_migration_keeps_entries() {
        let custom = EffectProfile {
            calories: 42.0,
            ..Default::default()
        };
        let mut config = EffectsConfig {
            version: "1.0.0".to_string(),
            items: HashMap::from([("jerky".to_string(), custom)]),
        };

        config.migrate();

        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.items.get("jerky"), Some(&custom));
    }

    #[test]
    fn current_version_is_not_outdated() {
        assert!(!default_config().is_outdated());
    }
}
