//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Smallest brush diameter the Ctrl+wheel resize and validation allow
pub const MIN_BRUSH_SIZE: f32 = 1.0;

/// Largest brush diameter offered by the settings slider
pub const MAX_BRUSH_SIZE: f32 = 100.0;

/// Brush diameter change per Ctrl+wheel notch
pub const BRUSH_SIZE_STEP: f32 = 1.0;

/// Prefab loaded when no config file exists
pub const DEFAULT_PREFAB_PATH: &str = "models/prefab.glb";

/// Side length of the ground plane spawned at startup
pub const GROUND_SIZE: f32 = 60.0;
