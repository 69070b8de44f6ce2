//! Input Configuration
//!
//! Initial settings applied to an [`crate::state::InputState`] at
//! construction: navigation enablement, gamepad presence, GUI cursor
//! drawing, and the analog dead zone. Loadable from TOML with per-field
//! defaults so partial files work.

use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

fn default_axis_dead_zone() -> f32 {
    0.166
}

/// Input bridge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Enable keyboard navigation of GUI widgets at startup.
    #[serde(default)]
    pub keyboard_navigation: bool,

    /// Enable gamepad navigation of GUI widgets at startup.
    #[serde(default)]
    pub gamepad_navigation: bool,

    /// Advertise an attached gamepad to the GUI library at startup.
    #[serde(default)]
    pub gamepad_attached: bool,

    /// Let the GUI library draw the mouse cursor instead of the engine.
    #[serde(default)]
    pub draw_mouse_cursor: bool,

    /// Magnitude below which gamepad axis deflection is ignored.
    ///
    /// Filters out small values from worn controllers. Must be in `[0, 1)`.
    #[serde(default = "default_axis_dead_zone")]
    pub axis_dead_zone: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            keyboard_navigation: false,
            gamepad_navigation: false,
            gamepad_attached: false,
            draw_mouse_cursor: false,
            axis_dead_zone: default_axis_dead_zone(),
        }
    }
}

impl InputConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| BridgeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&contents)?;
        config.validate()?;

        debug!(path = %path.display(), "input config loaded");
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.axis_dead_zone) {
            return Err(BridgeError::InvalidConfig(format!(
                "axis_dead_zone must be in [0, 1), got {}",
                self.axis_dead_zone
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = InputConfig::default();
        assert!(!config.keyboard_navigation);
        assert!(!config.gamepad_navigation);
        assert!(!config.gamepad_attached);
        assert!(!config.draw_mouse_cursor);
        assert!((config.axis_dead_zone - 0.166).abs() < f32::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: InputConfig = toml::from_str("keyboard_navigation = true").unwrap();
        assert!(config.keyboard_navigation);
        assert!(!config.gamepad_navigation);
        assert!((config.axis_dead_zone - 0.166).abs() < f32::EPSILON);
    }

    #[test]
    fn full_toml() {
        let config: InputConfig = toml::from_str(
            r#"
            keyboard_navigation = true
            gamepad_navigation = true
            gamepad_attached = true
            draw_mouse_cursor = true
            axis_dead_zone = 0.2
            "#,
        )
        .unwrap();
        assert!(config.gamepad_navigation);
        assert!(config.gamepad_attached);
        assert!(config.draw_mouse_cursor);
        assert!((config.axis_dead_zone - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn validate_rejects_out_of_range_dead_zone() {
        let mut config = InputConfig::default();

        config.axis_dead_zone = 1.0;
        assert!(matches!(
            config.validate(),
            Err(BridgeError::InvalidConfig(_))
        ));

        config.axis_dead_zone = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = InputConfig::load_from_file("/nonexistent/input.toml").unwrap_err();
        assert!(matches!(err, BridgeError::ConfigRead { .. }));
    }
}
