use crate::units::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_STEP: f64 = 1.0;
pub const PERCENT_MAX: f64 = 100.0;

/// Measurement mode of the value; decides the upper bound policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "%", alias = "percent")]
    Percent,
    #[serde(rename = "px", alias = "pixel")]
    Pixel,
}

impl Unit {
    /// Every selectable unit, in toggle order
    pub const ALL: [Unit; 2] = [Unit::Percent, Unit::Pixel];

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Pixel => "px",
        }
    }

    /// Upper bound for this unit; pixels are unbounded above
    pub fn max(&self) -> f64 {
        match self {
            Unit::Percent => PERCENT_MAX,
            Unit::Pixel => f64::INFINITY,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "%" | "percent" => Ok(Unit::Percent),
            "px" | "pixel" => Ok(Unit::Pixel),
            _ => Err(UnitError::UnknownUnit(s.to_string())),
        }
    }
}

/// Range derived from the selected unit and the configured minimum.
/// Never stored; recompute whenever the unit changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn for_unit(unit: Unit, min: f64) -> Self {
        Self {
            min,
            max: unit.max(),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn is_bounded_above(&self) -> bool {
        self.max.is_finite()
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::for_unit(Unit::default(), DEFAULT_MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_str() {
        assert_eq!("%".parse::<Unit>().unwrap(), Unit::Percent);
        assert_eq!("Percent".parse::<Unit>().unwrap(), Unit::Percent);
        assert_eq!("px".parse::<Unit>().unwrap(), Unit::Pixel);
        assert_eq!(" PIXEL ".parse::<Unit>().unwrap(), Unit::Pixel);

        assert_eq!(
            "em".parse::<Unit>(),
            Err(UnitError::UnknownUnit("em".to_string()))
        );
    }

    #[test]
    fn test_unit_serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Unit::Percent).unwrap(), "\"%\"");
        assert_eq!(serde_json::to_string(&Unit::Pixel).unwrap(), "\"px\"");

        let unit: Unit = serde_json::from_str("\"pixel\"").unwrap();
        assert_eq!(unit, Unit::Pixel);
    }

    #[test]
    fn test_bounds_for_unit() {
        let percent = Bounds::for_unit(Unit::Percent, 0.0);
        assert_eq!(percent.max, 100.0);
        assert!(percent.is_bounded_above());
        assert!(percent.contains(100.0));
        assert!(!percent.contains(100.5));
        assert!(!percent.contains(-0.1));

        let pixel = Bounds::for_unit(Unit::Pixel, 0.0);
        assert!(!pixel.is_bounded_above());
        assert!(pixel.contains(1e12));
    }

    #[test]
    fn test_bounds_clamp() {
        let percent = Bounds::for_unit(Unit::Percent, 0.0);
        assert_eq!(percent.clamp(-5.0), 0.0);
        assert_eq!(percent.clamp(150.0), 100.0);
        assert_eq!(percent.clamp(42.5), 42.5);

        let pixel = Bounds::for_unit(Unit::Pixel, 10.0);
        assert_eq!(pixel.clamp(3.0), 10.0);
        assert_eq!(pixel.clamp(5000.0), 5000.0);
    }
}
