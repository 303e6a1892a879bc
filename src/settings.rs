//! Game settings
//!
//! Physics tuning plus composition choices (which render back-end, where the
//! asset manifest lives). Read from a JSON file; every field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::sim::PhysicsConfig;

/// Render back-end selected at composition time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Procedurally drawn character from colored quads
    #[default]
    Vector,
    /// Character drawn from the sprite sheet
    Sprite,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Vector => "vector",
            BackendKind::Sprite => "sprite",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "vector" | "vec" => Some(BackendKind::Vector),
            "sprite" | "sprites" => Some(BackendKind::Sprite),
            _ => None,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: PhysicsConfig,
    pub backend: BackendKind,
    /// Asset manifest path; built-in assets when unset
    pub asset_manifest: Option<PathBuf>,
    /// Frames the headless runner simulates before exiting
    pub frame_limit: u32,
    /// Host refresh rate the headless runner pretends to have
    pub refresh_hz: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            backend: BackendKind::Vector,
            asset_manifest: None,
            frame_limit: 600,
            refresh_hz: 60.0,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let settings = Self::from_json(&json).map_err(|e| LoadError::parse(path, e))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Milliseconds between host callbacks
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / f64::from(self.refresh_hz.max(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::CollisionPolicy;

    #[test]
    fn test_defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.physics.gravity, GRAVITY);
        assert_eq!(settings.physics.jump_velocity, JUMP_VELOCITY);
        assert_eq!(settings.physics.collision_policy, CollisionPolicy::LastMatch);
        assert_eq!(settings.backend, BackendKind::Vector);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings =
            Settings::from_json(r#"{ "backend": "sprite", "physics": { "gravity": 0.6 } }"#)
                .unwrap();
        assert_eq!(settings.backend, BackendKind::Sprite);
        assert_eq!(settings.physics.gravity, 0.6);
        assert_eq!(settings.physics.max_vx, MAX_VX);
        assert_eq!(settings.frame_limit, 600);
    }

    #[test]
    fn test_collision_policy_from_json() {
        let settings =
            Settings::from_json(r#"{ "physics": { "collision_policy": "HighestSurface" } }"#)
                .unwrap();
        assert_eq!(settings.physics.collision_policy, CollisionPolicy::HighestSurface);
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!(BackendKind::from_str("Sprite"), Some(BackendKind::Sprite));
        assert_eq!(BackendKind::from_str("VECTOR"), Some(BackendKind::Vector));
        assert_eq!(BackendKind::from_str("ascii"), None);
        assert_eq!(BackendKind::Sprite.as_str(), "sprite");
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load_from("/nonexistent/coin-dash/settings.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_frame_interval() {
        let settings = Settings::default();
        assert!((settings.frame_interval_ms() - 1000.0 / 60.0).abs() < 1e-9);
    }
}
