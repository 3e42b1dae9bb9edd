use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::PathBuf,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::mood_series::{offset_from_minutes, RangeMode, SeriesConfig};
use crate::{log_error, log_warn};

const ENABLE_LOGS: bool = true;

pub const DEFAULT_BACKGROUND_COLOR: &str = "#FCE4EC";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceSettings {
    pub background_color: String,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND_COLOR.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartSettings {
    pub default_range: RangeMode,
    /// Render axis dates in this UTC offset instead of each timestamp's own.
    pub label_utc_offset_minutes: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct UserSettings {
    appearance: AppearanceSettings,
    chart: ChartSettings,
}

/// `#RGB` or `#RRGGBB`.
fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// User preferences persisted as JSON next to the database.
pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!(
                    "Ignoring unreadable settings in {}: {err}",
                    path.display()
                );
                UserSettings::default()
            })
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, UserSettings> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, UserSettings> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn appearance(&self) -> AppearanceSettings {
        self.read().appearance.clone()
    }

    pub fn chart(&self) -> ChartSettings {
        self.read().chart.clone()
    }

    /// Series configuration derived from the chart preferences.
    pub fn series_config(&self) -> SeriesConfig {
        SeriesConfig::with_offset_minutes(self.read().chart.label_utc_offset_minutes)
    }

    pub fn update_background_color(&self, color: &str) -> Result<AppearanceSettings> {
        let color = color.trim();
        if !is_hex_color(color) {
            bail!("Invalid background color '{color}', expected #RGB or #RRGGBB");
        }

        let mut guard = self.write();
        let mut next = guard.clone();
        next.appearance.background_color = color.to_string();
        self.persist(&next)?;
        *guard = next;
        Ok(guard.appearance.clone())
    }

    pub fn update_chart(&self, settings: ChartSettings) -> Result<()> {
        if let Some(minutes) = settings.label_utc_offset_minutes {
            if offset_from_minutes(minutes).is_none() {
                bail!("Invalid label offset {minutes} min, expected less than 24h either side of UTC");
            }
        }

        let mut guard = self.write();
        let mut next = guard.clone();
        next.chart = settings;
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }

    /// Write `data` to disk; the in-memory copy is only replaced once this succeeds.
    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
            .inspect_err(|err| log_error!("Settings not saved: {err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();

        assert_eq!(store.appearance().background_color, DEFAULT_BACKGROUND_COLOR);
        assert_eq!(store.chart(), ChartSettings::default());
        assert!(store.series_config().label_offset.is_none());
    }

    #[test]
    fn updates_survive_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::new(path.clone()).unwrap();
        store.update_background_color("#E0CAFF").unwrap();
        store
            .update_chart(ChartSettings {
                default_range: RangeMode::Month,
                label_utc_offset_minutes: Some(120),
            })
            .unwrap();

        let reloaded = SettingsStore::new(path).unwrap();
        assert_eq!(reloaded.appearance().background_color, "#E0CAFF");
        assert_eq!(reloaded.chart().default_range, RangeMode::Month);
        assert_eq!(
            reloaded.series_config().label_offset.map(|o| o.local_minus_utc()),
            Some(7200)
        );
    }

    #[test]
    fn rejects_non_hex_colors() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();

        assert!(store.update_background_color("pink").is_err());
        assert!(store.update_background_color("#12345").is_err());
        assert!(store.update_background_color("#fff").is_ok());
        assert_eq!(store.appearance().background_color, "#fff");
    }

    #[test]
    fn rejects_offsets_beyond_a_day() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();

        let result = store.update_chart(ChartSettings {
            default_range: RangeMode::Month,
            label_utc_offset_minutes: Some(24 * 60 + 1),
        });

        assert!(result.is_err());
        assert_eq!(store.chart(), ChartSettings::default());
        assert!(!dir.path().join("settings.json").exists());

        store
            .update_chart(ChartSettings {
                default_range: RangeMode::Week,
                label_utc_offset_minutes: Some(-(24 * 60 - 1)),
            })
            .unwrap();
        assert!(store.series_config().label_offset.is_some());
    }

    #[test]
    fn failed_write_leaves_settings_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let store = SettingsStore::new(path.clone()).unwrap();

        // A directory in place of the file makes every write fail.
        fs::create_dir(&path).unwrap();

        assert!(store.update_background_color("#000").is_err());
        assert_eq!(store.appearance().background_color, DEFAULT_BACKGROUND_COLOR);

        let result = store.update_chart(ChartSettings {
            default_range: RangeMode::All,
            label_utc_offset_minutes: Some(60),
        });
        assert!(result.is_err());
        assert_eq!(store.chart(), ChartSettings::default());
        assert!(store.series_config().label_offset.is_none());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert_eq!(store.appearance(), AppearanceSettings::default());
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "chart": { "defaultRange": "all" } }"#).unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert_eq!(store.chart().default_range, RangeMode::All);
        assert_eq!(store.appearance().background_color, DEFAULT_BACKGROUND_COLOR);
    }
}
