//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! prayer-times.toml file: the observer's site and UTC offset, and the
//! calculation method with any overrides on top of its preset.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::engine::{Location, PrayTimes, ZoneOffset};
use crate::method::{AsrJuristic, HighLatRule, Method, MidnightMode};

/// Default file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "prayer-times.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Application configuration loaded from prayer-times.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub location: LocationConfig,
    pub calculation: CalculationConfig,
}

/// Observer site and clock.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocationConfig {
    /// Degrees, north positive
    pub latitude: f64,
    /// Degrees, east positive
    pub longitude: f64,
    /// Metres above sea level
    #[serde(default)]
    pub elevation: f64,
    /// Hours from UTC
    pub timezone: f64,
    /// Daylight-saving hours in effect
    #[serde(default)]
    pub dst: f64,
}

/// Method preset plus optional overrides.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CalculationConfig {
    #[serde(default)]
    pub method: Method,
    /// Minutes added to every slot
    #[serde(default)]
    pub tune: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asr: Option<AsrJuristic>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "high-lats")]
    pub high_lats: Option<HighLatRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midnight: Option<MidnightMode>,
    /// Minutes before Fajr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imsak: Option<f64>,
    /// Minutes after solar noon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dhuhr: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            location: LocationConfig {
                latitude: 3.583333,
                longitude: 97.666667,
                elevation: 0.0,
                timezone: 7.0,
                dst: 0.0,
            },
            calculation: CalculationConfig {
                method: Method::Indonesia,
                tune: 2.0,
                asr: None,
                high_lats: None,
                midnight: None,
                imsak: None,
                dhuhr: None,
            },
        }
    }
}

impl Config {
    /// Load configuration from prayer-times.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::try_load_from_path(path) {
            Ok(config) => {
                log::info!(
                    "loaded {} ({}, {:.4}/{:.4})",
                    path.display(),
                    config.calculation.method,
                    config.location.latitude,
                    config.location.longitude
                );
                config
            }
            Err(ConfigError::Io(e)) => {
                log::info!("no config at {} ({}), using defaults", path.display(), e);
                Self::default()
            }
            Err(e) => {
                log::warn!("{}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load configuration, reporting why it could not be read.
    pub fn try_load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save current configuration to prayer-times.toml
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(CONFIG_FILE)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        log::info!("configuration saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Engine with the method preset, then the overrides, then tuning.
    pub fn engine(&self) -> PrayTimes {
        let calc = &self.calculation;
        let mut engine = PrayTimes::with_method(calc.method);

        let mut params = engine.adjustments();
        if let Some(asr) = calc.asr {
            params.asr = asr;
        }
        if let Some(rule) = calc.high_lats {
            params.high_lats = rule;
        }
        if let Some(midnight) = calc.midnight {
            params.midnight = midnight;
        }
        if let Some(imsak) = calc.imsak {
            params.imsak = imsak;
        }
        if let Some(dhuhr) = calc.dhuhr {
            params.dhuhr = dhuhr;
        }
        engine.adjust(params);
        engine.tune(calc.tune);
        engine
    }

    pub fn location(&self) -> Location {
        Location::new(
            self.location.latitude,
            self.location.longitude,
            self.location.elevation,
        )
    }

    pub fn zone(&self) -> ZoneOffset {
        ZoneOffset::new(self.location.timezone, self.location.dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TimeSlot;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.calculation.method, Method::Indonesia);
        assert_eq!(config.calculation.tune, 2.0);
        assert_eq!(config.location.latitude, 3.583333);
        assert_eq!(config.zone(), ZoneOffset::new(7.0, 0.0));
    }

    #[test]
    fn test_default_engine_matches_reference_output() {
        let config = Config::default();
        let times = config
            .engine()
            .times(2022, 1, 21, &config.location(), config.zone());
        assert_eq!(times.format(TimeSlot::Imsak), "05:12");
        assert_eq!(times.format(TimeSlot::Isha), "19:54");
        assert_eq!(times.format(TimeSlot::Midnight), "00:42");
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.calculation.asr = Some(AsrJuristic::Hanafi);
        config.calculation.high_lats = Some(HighLatRule::OneSeventh);

        let file = NamedTempFile::new().unwrap();
        config.save_to_path(file.path()).unwrap();
        let parsed = Config::try_load_from_path(file.path()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[location]\nlatitude = 51.5\nlongitude = -0.13\ntimezone = 0.0\n\n\
             [calculation]\nmethod = \"isna\"\nhigh_lats = \"angle-based\"\nimsak = 15.0\n"
        )
        .unwrap();

        let config = Config::try_load_from_path(file.path()).unwrap();
        assert_eq!(config.location.elevation, 0.0);
        assert_eq!(config.location.dst, 0.0);
        assert_eq!(config.calculation.tune, 0.0);

        let engine = config.engine();
        assert_eq!(engine.method(), Method::Isna);
        assert_eq!(engine.adjustments().high_lats, HighLatRule::AngleBased);
        assert_eq!(engine.adjustments().imsak, 15.0);
        assert_eq!(engine.adjustments().fajr, 15.0);
        assert_eq!(engine.tuning_offset(), 0.0);
    }

    #[test]
    fn test_overrides_follow_preset() {
        let mut config = Config::default();
        config.calculation.method = Method::Tehran;
        config.calculation.midnight = Some(MidnightMode::Standard);
        config.calculation.dhuhr = Some(1.0);

        let params = config.engine().adjustments();
        assert_eq!(params.fajr, 17.7);
        assert_eq!(params.maghrib, 4.5);
        assert_eq!(params.midnight, MidnightMode::Standard);
        assert_eq!(params.dhuhr, 1.0);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_path("/nonexistent/path/prayer-times.toml");
        // Should fallback to default
        assert_eq!(config, Config::default());
        assert!(matches!(
            Config::try_load_from_path("/nonexistent/path/prayer-times.toml"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[calculation]\nmethod = \"sunni\"\n").unwrap();

        assert!(matches!(
            Config::try_load_from_path(file.path()),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(Config::load_from_path(file.path()), Config::default());
    }
}
