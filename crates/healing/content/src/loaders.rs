//! Loaders for reading effect configuration from files.
//!
//! All loaders report failures through [`LoadResult`] with file context
//! attached; structural validation of entries happens later in
//! [`EffectsConfig::into_table`](crate::EffectsConfig::into_table).

use std::fs;
use std::path::Path;

use crate::config::{EffectsConfig, default_config};

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Loader for effect configuration from JSON files.
pub struct EffectsLoader;

impl EffectsLoader {
    /// Load an effects config from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing an `EffectsConfig`
    pub fn load(path: &Path) -> LoadResult<EffectsConfig> {
        let content = read_file(path)?;
        let config: EffectsConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse effects config JSON: {}", e))?;

        Ok(config)
    }

    /// Write a config document back as pretty-printed JSON.
    pub fn save(path: &Path, config: &EffectsConfig) -> LoadResult<()> {
        let content = serde_json::to_string_pretty(config)
            .map_err(|e| anyhow::anyhow!("Failed to serialize effects config: {}", e))?;
        fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))?;

        Ok(())
    }
}

/// How [`load_or_default`] obtained its document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File existed and carried the current version.
    Loaded,
    /// File was missing; the default catalog was generated and written.
    Generated,
    /// File carried an older version and was migrated in place.
    Migrated,
}

/// Load `path`, generating or migrating the document as needed.
///
/// A missing file is replaced by the default catalog; an outdated version
/// marker triggers migration. Either way the document is written back, so
/// the on-disk file always matches what was loaded.
pub fn load_or_default(path: &Path) -> LoadResult<(EffectsConfig, LoadOutcome)> {
    if !path.exists() {
        let config = default_config();
        EffectsLoader::save(path, &config)?;
        return Ok((config, LoadOutcome::Generated));
    }

    let mut config = EffectsLoader::load(path)?;
    if config.is_outdated() {
        config.migrate();
        EffectsLoader::save(path, &config)?;
        return Ok((config, LoadOutcome::Migrated));
    }

    Ok((config, LoadOutcome::Loaded))
}
