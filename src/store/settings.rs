use crate::core::settings::{SettingsUpdate, UserSettings};
use crate::store::KeyValueStore;
use anyhow::{Context, Result, bail};
use std::sync::Arc;
use tracing::{debug, info, warn};

const SETTINGS_KEY: &str = "userSettings";

pub struct SettingsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored settings, or defaults when none are stored. Incomplete or
    /// unreadable settings are discarded.
    pub async fn load(&self) -> Result<UserSettings> {
        let Some(raw) = self.store.get(SETTINGS_KEY).await? else {
            debug!("No saved settings found, using defaults");
            return Ok(UserSettings::default());
        };

        match serde_json::from_str::<UserSettings>(&raw) {
            Ok(settings) if settings.is_complete() => {
                debug!("Loaded settings: {settings:?}");
                Ok(settings)
            }
            Ok(_) => {
                info!("Incomplete settings found, resetting to defaults");
                self.reset().await
            }
            Err(e) => {
                warn!("Failed to parse saved settings, resetting to defaults: {e}");
                self.reset().await
            }
        }
    }

    /// Applies `update` on top of `current` and stores the result. The
    /// result must be complete, otherwise the next load would discard it.
    pub async fn update(
        &self,
        current: &UserSettings,
        update: SettingsUpdate,
    ) -> Result<UserSettings> {
        let mut settings = current.clone();
        settings.apply(update)?;
        if !settings.is_complete() {
            bail!("Set a timezone with --timezone before changing other settings");
        }

        let json = serde_json::to_string(&settings).context("Failed to serialize settings")?;
        self.store.set(SETTINGS_KEY, &json).await?;
        info!("Settings updated: {settings:?}");
        Ok(settings)
    }

    pub async fn reset(&self) -> Result<UserSettings> {
        self.store.remove(SETTINGS_KEY).await?;
        debug!("Settings reset to defaults");
        Ok(UserSettings::default())
    }
}
