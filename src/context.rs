//! Application state shared by every command.
use crate::core::config::AppConfig;
use crate::core::format::CurrencyFormatter;
use crate::core::period::local_date;
use crate::core::settings::UserSettings;
use crate::store::{self, ExpenseRepository, KeyValueStore, SettingsRepository};
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::debug;

pub struct AppContext {
    pub config: AppConfig,
    pub expenses: ExpenseRepository,
    pub settings_store: SettingsRepository,
    pub settings: UserSettings,
}

impl AppContext {
    /// Opens the on-disk store described by `config` and loads settings.
    pub async fn open(config: AppConfig) -> Result<Self> {
        let store = store::open_store(&config)?;
        Self::with_store(config, store).await
    }

    pub async fn with_store(config: AppConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let settings_store = SettingsRepository::new(Arc::clone(&store));
        let settings = settings_store.load().await?;
        debug!("Using settings: {settings:?}");

        Ok(Self {
            config,
            expenses: ExpenseRepository::new(store),
            settings_store,
            settings,
        })
    }

    pub fn tz(&self) -> Tz {
        self.settings.tz()
    }

    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        local_date(now, self.tz())
    }

    pub fn formatter(&self) -> CurrencyFormatter {
        CurrencyFormatter::new(&self.settings.currency_symbol)
    }
}
