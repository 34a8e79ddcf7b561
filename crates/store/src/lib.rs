//! Persistence for the calculator's settings.
//!
//! The settings live in one JSON document mapping string keys to values,
//! mirroring the key-value storage the app always used. The document is
//! read once when a screen mounts and written whole on every committed
//! change; last write wins, there is no versioning and no retry. A missing
//! file means "use the defaults", a malformed value falls back to the
//! default for that key only.

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use engine::{
    DEFAULT_ENTRY_RATES, DEFAULT_OVERHEAD_RATES, DEFAULT_REVENUE_LEVEL, DEFAULT_VISIBLE_LEVELS,
    LevelSettings, RateConfig, default_levels,
};

pub use error::{Result, StoreError};

mod error;

/// Storage keys, kept byte-identical to the original app's so an existing
/// settings file stays readable.
pub mod keys {
    pub const ENTRY_RATES: &str = "hundredPercentRates";
    pub const OVERHEAD_RATES: &str = "overheadRates";
    pub const LEVEL_RATES: &str = "levelRates";
    pub const VISIBLE_LEVELS: &str = "visibleLevels";
    pub const REVENUE_LEVEL: &str = "revenueLevel";
}

/// The key→JSON-value document backing all settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    values: BTreeMap<String, Value>,
}

impl SettingsStore {
    /// Reads the document from `path`. A missing file yields the empty
    /// store; any other failure is a real error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            values: serde_json::from_str(&content)?,
        })
    }

    /// Writes the whole document to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(&self.values)?;
        fs::write(path, payload)?;
        Ok(())
    }

    /// Deserializes the value under `key`. Returns `None` both for a
    /// missing key and for a malformed value; the latter is logged, never
    /// surfaced to the user.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                tracing::warn!("malformed value for key \"{key}\": {err}");
                None
            }
        }
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        self.values.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }
}

/// Builds the engine's `RateConfig` from the store, defaulting every
/// missing or malformed key.
#[must_use]
pub fn load_rate_config(store: &SettingsStore) -> RateConfig {
    RateConfig {
        entry_rates: store.get(keys::ENTRY_RATES).unwrap_or(DEFAULT_ENTRY_RATES),
        overhead_rates: store
            .get(keys::OVERHEAD_RATES)
            .unwrap_or(DEFAULT_OVERHEAD_RATES),
        levels: store.get(keys::LEVEL_RATES).unwrap_or_else(default_levels),
    }
}

/// Builds the editor's `LevelSettings` from the store.
///
/// The revenue level is clamped into the loaded table in case an older
/// file carries an index past the end.
#[must_use]
pub fn load_level_settings(store: &SettingsStore) -> LevelSettings {
    let levels = store.get(keys::LEVEL_RATES).unwrap_or_else(default_levels);
    let revenue_level = store
        .get(keys::REVENUE_LEVEL)
        .unwrap_or(DEFAULT_REVENUE_LEVEL)
        .min(levels.len().saturating_sub(1));
    let visible_levels = store
        .get(keys::VISIBLE_LEVELS)
        .unwrap_or(DEFAULT_VISIBLE_LEVELS);
    LevelSettings {
        levels,
        revenue_level,
        visible_levels,
    }
}

/// Persists a committed editor snapshot as a unit: the level table, the
/// revenue level and the visible-level count.
///
/// A failure is logged and returned; the in-memory state is left alone and
/// the user has to re-trigger the save.
pub fn save_level_settings(
    store: &mut SettingsStore,
    path: &Path,
    settings: &LevelSettings,
) -> Result<()> {
    store.set(keys::LEVEL_RATES, &settings.levels)?;
    store.set(keys::REVENUE_LEVEL, &settings.revenue_level)?;
    store.set(keys::VISIBLE_LEVELS, &settings.visible_levels)?;
    store.save(path).inspect_err(|err| {
        tracing::error!("failed to persist level settings: {err}");
    })
}

/// Persists the division rates edited on the settings screen.
pub fn save_rate_config(
    store: &mut SettingsStore,
    path: &Path,
    config: &RateConfig,
) -> Result<()> {
    store.set(keys::ENTRY_RATES, &config.entry_rates)?;
    store.set(keys::OVERHEAD_RATES, &config.overhead_rates)?;
    store.set(keys::LEVEL_RATES, &config.levels)?;
    store.save(path).inspect_err(|err| {
        tracing::error!("failed to persist rate config: {err}");
    })
}
