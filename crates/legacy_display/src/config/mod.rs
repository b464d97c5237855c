//! Configuration system
//!
//! [`DisplayConfig`] describes everything that has to be decided before the
//! window exists: its title, the creation hints and the GL context request.
//! It can be loaded from and saved to TOML or RON files through [`Config`].

pub use serde::{Deserialize, Serialize};

use crate::display::{ContextAttribs, PixelFormat};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Format is picked from the extension
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Semantically invalid configuration
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// # Display Configuration
///
/// Window creation settings applied once, before the native window is
/// created. Anything here that GLFW treats as a creation hint (visibility,
/// decoration, context version, framebuffer bits) only takes effect at that
/// point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Initial window title
    pub title: String,
    /// Whether the window starts resizable
    pub resizable: bool,
    /// Whether the window starts with decorations
    pub decorated: bool,
    /// Vsync preference recorded before `create()`
    pub vsync: bool,
    /// GL context request used when the window is created
    pub context: ContextAttribs,
    /// Framebuffer bits requested when the window is created
    pub pixel_format: PixelFormat,
    /// Log level for `logging::init_with_level`
    pub log_level: String,
    /// Frame cap for applications that drive `sync()` from config
    pub target_fps: Option<u32>,
}

impl DisplayConfig {
    /// Create a new display configuration with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            resizable: true,
            decorated: true,
            vsync: false,
            context: ContextAttribs::new(3, 3).with_profile_core(true),
            pixel_format: PixelFormat::default(),
            log_level: "info".to_string(),
            target_fps: None,
        }
    }

    /// Set the GL context request
    pub fn with_context(mut self, context: ContextAttribs) -> Self {
        self.context = context;
        self
    }

    /// Set the framebuffer format request
    pub fn with_pixel_format(mut self, pixel_format: PixelFormat) -> Self {
        self.pixel_format = pixel_format;
        self
    }

    /// Set the initial vsync preference
    pub fn with_vsync(mut self, enabled: bool) -> Self {
        self.vsync = enabled;
        self
    }

    /// Set whether the window starts resizable
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set target FPS
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = Some(fps);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.is_empty() {
            return Err(ConfigError::Invalid("Window title cannot be empty".to_string()));
        }

        if self.context.major == 0 {
            return Err(ConfigError::Invalid(format!(
                "GL context version {} is not valid",
                self.context
            )));
        }

        if self.target_fps == Some(0) {
            return Err(ConfigError::Invalid(
                "Target FPS must be at least 1 when set".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new("Legacy Display")
    }
}

impl Config for DisplayConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_requests_core_3_3() {
        let config = DisplayConfig::default();

        assert_eq!(config.context, ContextAttribs::new(3, 3).with_profile_core(true));
        assert!(config.resizable);
        assert!(config.decorated);
        assert!(!config.vsync);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let empty_title = DisplayConfig::new("");
        assert!(matches!(empty_title.validate(), Err(ConfigError::Invalid(_))));

        let no_context = DisplayConfig::default().with_context(ContextAttribs::new(0, 0));
        assert!(no_context.validate().is_err());

        let zero_fps = DisplayConfig {
            target_fps: Some(0),
            ..DisplayConfig::default()
        };
        assert!(zero_fps.validate().is_err());
    }

    #[test]
    fn test_toml_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("display.toml");
        let path = path.to_str().unwrap();

        let config = DisplayConfig::new("Saved Window")
            .with_vsync(true)
            .with_target_fps(120)
            .with_context(ContextAttribs::new(4, 1));
        config.save_to_file(path).unwrap();

        let loaded = DisplayConfig::load_from_file(path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("display.ron");
        std::fs::write(&path, r#"(title: "From RON", vsync: true)"#).unwrap();

        let loaded = DisplayConfig::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.title, "From RON");
        assert!(loaded.vsync);
        assert_eq!(loaded.context, DisplayConfig::default().context);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = DisplayConfig::load_from_file("display.yaml");
        // Missing file is reported before the extension check
        assert!(matches!(result, Err(ConfigError::Io(_))));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("display.json");
        let result = DisplayConfig::default().save_to_file(path.to_str().unwrap());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
