use crate::render::Color;
use crate::widget::{
    step_gap, BarGeometry, Palette, WidgetSettings, DEFAULT_BACKGROUND, DEFAULT_FRAME_DELAY, DEFAULT_ROTATION_DEGREES,
    DEFAULT_SIZE_FACTOR, DEFAULT_STEP,
};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE_NAME: &str = "config.yaml";

/// The user's configuration. Every key is optional.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// The colors to sweep through, one node per color.
    pub(crate) palette: Vec<Color>,

    pub(crate) background: Color,

    /// Milliseconds between animation frames.
    pub(crate) frame_delay_ms: u64,

    /// How much of a leg is covered per frame, before it's split across the rotate and slide
    /// phases.
    pub(crate) step: f32,

    /// The bar thickness is the shortest side of the surface divided by this.
    pub(crate) size_factor: f32,

    pub(crate) rotation_degrees: f32,
}

impl Default for Config {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            palette: (0..palette.len()).map(|index| palette.color(index)).collect(),
            background: DEFAULT_BACKGROUND,
            frame_delay_ms: DEFAULT_FRAME_DELAY.as_millis() as u64,
            step: DEFAULT_STEP,
            size_factor: DEFAULT_SIZE_FACTOR,
            rotation_degrees: DEFAULT_ROTATION_DEGREES,
        }
    }
}

impl Config {
    /// Load and validate the config at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config: Self = if contents.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load the config at `explicit_path` if given, otherwise the one in the user's config
    /// directory if it exists, otherwise the defaults. Returns the path that was loaded, if any.
    pub(crate) fn resolve(explicit_path: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let path = match explicit_path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok((Self::default(), None)),
            },
        };
        let config = Self::load(&path)?;
        Ok((config, Some(path)))
    }

    pub(crate) fn default_path() -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "barrotdown")?;
        Some(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if !(self.step > 0.0 && self.step <= 1.0) {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if !(self.size_factor.is_finite() && self.size_factor > 0.0) {
            return Err(ConfigError::InvalidSizeFactor(self.size_factor));
        }
        if !self.rotation_degrees.is_finite() {
            return Err(ConfigError::InvalidRotation(self.rotation_degrees));
        }
        if self.frame_delay_ms == 0 {
            return Err(ConfigError::ZeroFrameDelay);
        }
        Ok(())
    }

    /// Validate and turn this into the settings a widget is built from.
    pub(crate) fn settings(&self) -> Result<WidgetSettings, ConfigError> {
        self.validate()?;
        let palette = Palette::new(self.palette.clone()).ok_or(ConfigError::EmptyPalette)?;
        Ok(WidgetSettings {
            palette,
            background: self.background,
            gap: step_gap(self.step),
            frame_delay: Duration::from_millis(self.frame_delay_ms),
            geometry: BarGeometry { size_factor: self.size_factor, rotation_degrees: self.rotation_degrees },
        })
    }
}

/// Errors that can occur when loading the configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("reading config file '{path}': {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("parsing config file '{path}': {source}")]
    Parse { path: PathBuf, source: serde_yaml::Error },

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("step must be greater than 0 and at most 1, got {0}")]
    InvalidStep(f32),

    #[error("size factor must be a positive number, got {0}")]
    InvalidSizeFactor(f32),

    #[error("rotation must be a finite number of degrees, got {0}")]
    InvalidRotation(f32),

    #[error("frame delay must be at least 1ms")]
    ZeroFrameDelay,
}
