//! User preferences: timezone and display currency
use crate::core::currency::find_currency;
use anyhow::{Result, anyhow};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// IANA timezone name. Empty until setup is complete.
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub currency_symbol: String,
    #[serde(default)]
    pub is_setup_complete: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            timezone: String::new(),
            currency: "USD".to_string(),
            currency_symbol: "$".to_string(),
            is_setup_complete: false,
        }
    }
}

/// Fields to change; `None` leaves the current value untouched.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub timezone: Option<String>,
    pub currency: Option<String>,
    pub currency_symbol: Option<String>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.timezone.is_none() && self.currency.is_none() && self.currency_symbol.is_none()
    }
}

impl UserSettings {
    /// Stored settings are only trusted when every field is filled in.
    pub fn is_complete(&self) -> bool {
        !self.timezone.is_empty()
            && !self.currency.is_empty()
            && !self.currency_symbol.is_empty()
            && self.is_setup_complete
    }

    /// Configured timezone, or UTC when unset or unparsable.
    pub fn tz(&self) -> Tz {
        if self.timezone.is_empty() {
            return Tz::UTC;
        }
        parse_timezone(&self.timezone).unwrap_or_else(|e| {
            warn!("{e}, falling back to UTC");
            Tz::UTC
        })
    }

    /// Merges `update` into these settings. Setting a timezone completes
    /// setup; a known currency code without an explicit symbol picks the
    /// symbol from the currency table.
    pub fn apply(&mut self, update: SettingsUpdate) -> Result<()> {
        if let Some(timezone) = update.timezone {
            let tz = parse_timezone(&timezone)?;
            self.timezone = tz.name().to_string();
            self.is_setup_complete = true;
        }

        if let Some(code) = update.currency {
            let code = code.trim().to_uppercase();
            if code.is_empty() {
                return Err(anyhow!("Currency code must not be empty"));
            }
            if update.currency_symbol.is_none() {
                match find_currency(&code) {
                    Some(currency) => self.currency_symbol = currency.symbol.to_string(),
                    None => warn!("Unknown currency {code}, keeping symbol {}", self.currency_symbol),
                }
            }
            self.currency = code;
        }

        if let Some(symbol) = update.currency_symbol {
            if symbol.is_empty() {
                return Err(anyhow!("Currency symbol must not be empty"));
            }
            self.currency_symbol = symbol;
        }

        Ok(())
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| anyhow!("invalid timezone: {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_incomplete() {
        let settings = UserSettings::default();
        assert!(!settings.is_complete());
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.tz(), Tz::UTC);
    }

    #[test]
    fn test_setting_timezone_completes_setup() {
        let mut settings = UserSettings::default();
        settings
            .apply(SettingsUpdate {
                timezone: Some("Europe/Berlin".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert!(settings.is_setup_complete);
        assert!(settings.is_complete());
        assert_eq!(settings.tz(), chrono_tz::Europe::Berlin);
    }

    #[test]
    fn test_invalid_timezone_is_rejected() {
        let mut settings = UserSettings::default();
        let result = settings.apply(SettingsUpdate {
            timezone: Some("Mars/Olympus".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
        assert!(!settings.is_setup_complete);
    }

    #[test]
    fn test_currency_code_picks_symbol() {
        let mut settings = UserSettings::default();
        settings
            .apply(SettingsUpdate {
                currency: Some("gbp".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(settings.currency, "GBP");
        assert_eq!(settings.currency_symbol, "£");

        settings
            .apply(SettingsUpdate {
                currency: Some("XTS".to_string()),
                currency_symbol: Some("T".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(settings.currency, "XTS");
        assert_eq!(settings.currency_symbol, "T");
    }

    #[test]
    fn test_deserialize_stored_settings() {
        let json = r#"{"timezone":"Asia/Kolkata","currency":"INR","currencySymbol":"₹","isSetupComplete":true}"#;
        let settings: UserSettings = serde_json::from_str(json).unwrap();
        assert!(settings.is_complete());
        assert_eq!(settings.currency_symbol, "₹");

        let partial: UserSettings = serde_json::from_str(r#"{"currency":"EUR"}"#).unwrap();
        assert!(!partial.is_complete());
    }
}
