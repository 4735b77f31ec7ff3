//! Where the painter keeps `painter.json` and its log file.
//!
//! Debug builds and `cargo run` use the working directory. Installed builds
//! use the platform config and data directories under `prefab-painter`.

use std::path::PathBuf;

const APP_DIR: &str = "prefab-painter";
const CONFIG_FILE: &str = "painter.json";

/// Which kind of per-user directory to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    Config,
    Data,
}

/// `cargo run` sets `CARGO`, and tests run with debug assertions
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

fn resolve(location: Location) -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    let base = match location {
        // Only Linux separates config from data; elsewhere both live together
        Location::Config if cfg!(target_os = "linux") => dirs::config_dir(),
        Location::Config | Location::Data => dirs::data_dir(),
    };
    base.map(|dir| dir.join(APP_DIR))
}

pub fn config_dir() -> Option<PathBuf> {
    resolve(Location::Config)
}

pub fn data_dir() -> Option<PathBuf> {
    resolve(Location::Data)
}

/// Saved painter settings, falling back to the working directory
pub fn config_file() -> PathBuf {
    config_dir().unwrap_or_default().join(CONFIG_FILE)
}

pub fn logs_dir() -> PathBuf {
    data_dir().unwrap_or_default().join("logs")
}

/// Create the config and log directories before logging starts
pub fn ensure_directories() -> std::io::Result<()> {
    if let Some(config) = config_dir() {
        std::fs::create_dir_all(config)?;
    }
    std::fs::create_dir_all(logs_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tests_run_in_dev_mode() {
        assert!(is_dev_mode());
    }

    #[test]
    fn test_dev_paths_are_local() {
        assert_eq!(config_dir(), Some(PathBuf::from(".")));
        assert_eq!(data_dir(), Some(PathBuf::from(".")));
        assert_eq!(config_file(), PathBuf::from("./painter.json"));
        assert_eq!(logs_dir(), PathBuf::from("./logs"));
    }
}
