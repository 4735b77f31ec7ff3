use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::painter::PainterSettings;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfigData {
    /// Brush, prefab and randomization settings from the last save
    #[serde(default)]
    pub painter: PainterSettings,
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether the live settings differ from what is on disk
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: get_config_path(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Get the path to the config file (platform-appropriate location)
fn get_config_path() -> PathBuf {
    crate::paths::config_file()
}

/// Result of loading config from disk
struct LoadConfigResult {
    data: AppConfigData,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Parse config file contents, falling back to defaults on error
fn parse_config(json: &str) -> LoadConfigResult {
    match serde_json::from_str::<AppConfigData>(json) {
        Ok(data) => {
            if let Err(e) = data.painter.validate() {
                warn!("Stored painter settings are invalid: {}", e);
                return LoadConfigResult {
                    data: AppConfigData::default(),
                    reset_reason: Some(format!("Stored painter settings were invalid: {}", e)),
                };
            }
            LoadConfigResult {
                data,
                reset_reason: None,
            }
        }
        Err(e) => {
            warn!("Failed to parse config file: {}", e);
            LoadConfigResult {
                data: AppConfigData::default(),
                reset_reason: Some(format!("Configuration file was corrupted: {}", e)),
            }
        }
    }
}

/// Load configuration from disk
fn load_config(config_path: &std::path::Path) -> LoadConfigResult {
    if !config_path.exists() {
        info!("No config file found, using defaults");
        return LoadConfigResult {
            data: AppConfigData::default(),
            reset_reason: None,
        };
    }

    match std::fs::read_to_string(config_path) {
        Ok(json) => {
            let result = parse_config(&json);
            if result.reset_reason.is_none() {
                info!("Loaded config from {:?}", config_path);
            }
            result
        }
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            LoadConfigResult {
                data: AppConfigData::default(),
                reset_reason: Some(format!("Could not read configuration file: {}", e)),
            }
        }
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) -> bool {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
                false
            } else {
                info!("Config saved to {:?}", config.config_path);
                true
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
            false
        }
    }
}

/// Startup system to load config from disk and apply it to the painter
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut settings: ResMut<PainterSettings>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config(&config.config_path);
    config.data = result.data;
    config.dirty = false;
    *settings = config.data.painter.clone();

    // Set notification if config was reset due to an error
    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// Track whether the live settings have diverged from the saved ones
fn track_settings_changes(settings: Res<PainterSettings>, mut config: ResMut<AppConfig>) {
    let dirty = *settings != config.data.painter;
    if config.dirty != dirty {
        config.dirty = dirty;
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    settings: Res<PainterSettings>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if let Err(e) = settings.validate() {
            warn!("Not saving invalid settings: {}", e);
            continue;
        }
        config.data.painter = settings.clone();
        if save_config(&config) {
            config.dirty = false;
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .init_resource::<PainterSettings>()
            .add_message::<SaveConfigRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    track_settings_changes.run_if(resource_changed::<PainterSettings>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert_eq!(data.painter, PainterSettings::default());
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            painter: PainterSettings {
                brush_size: 6.0,
                prefab_path: "models/tree.glb".to_string(),
                random_scale: true,
                random_scale_min: 0.8,
                random_scale_max: 1.2,
                ..default()
            },
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, data);
    }

    #[test]
    fn test_parse_valid_config() {
        let result = parse_config(r#"{"painter": {"brush_size": 3.0}}"#);
        assert!(result.reset_reason.is_none());
        assert_eq!(result.data.painter.brush_size, 3.0);
    }

    #[test]
    fn test_parse_empty_object_uses_defaults() {
        let result = parse_config("{}");
        assert!(result.reset_reason.is_none());
        assert_eq!(result.data, AppConfigData::default());
    }

    #[test]
    fn test_parse_corrupt_config_resets() {
        let result = parse_config("{ not json");
        assert!(
            result
                .reset_reason
                .as_deref()
                .is_some_and(|r| r.starts_with("Configuration file was corrupted"))
        );
        assert_eq!(result.data, AppConfigData::default());
    }

    #[test]
    fn test_parse_invalid_settings_resets() {
        let result = parse_config(
            r#"{"painter": {"random_scale": true, "random_scale_min": 2.0, "random_scale_max": 1.0}}"#,
        );
        assert!(result.reset_reason.is_some());
        assert_eq!(result.data.painter, PainterSettings::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let result = load_config(std::path::Path::new("does/not/exist/painter.json"));
        assert!(result.reset_reason.is_none());
        assert_eq!(result.data, AppConfigData::default());
    }

    #[test]
    fn test_config_reset_notification_default() {
        let notification = ConfigResetNotification::default();
        assert!(!notification.show);
        assert!(notification.reason.is_none());
    }
}
