use crate::units::{Bounds, Unit, DEFAULT_MIN, DEFAULT_STEP, PERCENT_MAX};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config: {}", e),
            ConfigError::Parse(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// Construction settings for a controller.
///
/// ```toml
/// initial_value = 25
/// initial_unit = "px"
/// min = 0
/// step = 5
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerConfig {
    #[serde(default)]
    pub initial_value: f64,

    #[serde(default)]
    pub initial_unit: Unit,

    #[serde(default = "default_min")]
    pub min: f64,

    #[serde(default = "default_step")]
    pub step: f64,
}

fn default_min() -> f64 {
    DEFAULT_MIN
}

fn default_step() -> f64 {
    DEFAULT_STEP
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            initial_value: 0.0,
            initial_unit: Unit::default(),
            min: default_min(),
            step: default_step(),
        }
    }
}

impl ControllerConfig {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: ControllerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_initial_value(mut self, value: f64) -> Self {
        self.initial_value = value;
        self
    }

    pub fn with_initial_unit(mut self, unit: Unit) -> Self {
        self.initial_unit = unit;
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::for_unit(self.initial_unit, self.min)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Both units share the lower bound, so it must fit inside the percent range
        if !self.min.is_finite() || !(0.0..=PERCENT_MAX).contains(&self.min) {
            return Err(ConfigError::Invalid(format!(
                "min must be between 0 and {}, got {}",
                PERCENT_MAX, self.min
            )));
        }

        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "step must be a positive number, got {}",
                self.step
            )));
        }

        let bounds = self.bounds();
        if !self.initial_value.is_finite() || !bounds.contains(self.initial_value) {
            return Err(ConfigError::Invalid(format!(
                "initial_value {} is outside [{}, {}] for unit '{}'",
                self.initial_value, bounds.min, bounds.max, self.initial_unit
            )));
        }

        Ok(())
    }
}
