use std::collections::HashMap;
use std::env;
use std::fs;
use std::time::Duration;

use log::{info, warn};

use crate::utilities::error::{ConfigError, PressError};

const CONFIG_FILE_PATH: &str = "config.json";
const FALLBACK_CONFIG_FILE_PATH: &str = "_config.json";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ConfigFile {
    pub elevator: HashMap<String, i32>,
    pub timing: HashMap<String, u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorSettings {
    pub bottom_floor: i32,
    pub top_floor: i32,
}

impl ElevatorSettings {
    pub fn new(bottom_floor: i32, top_floor: i32) -> Result<Self, ConfigError> {
        let span = top_floor.checked_sub(bottom_floor).and_then(|span| span.checked_add(1));
        if bottom_floor >= top_floor || span.is_none() {
            return Err(ConfigError::InvalidFloorRange {
                bottom: bottom_floor,
                top: top_floor,
            });
        }
        Ok(ElevatorSettings { bottom_floor, top_floor })
    }

    pub fn num_floors(&self) -> usize {
        (self.top_floor - self.bottom_floor + 1) as usize
    }

    pub fn contains(&self, floor: i32) -> bool {
        (self.bottom_floor..=self.top_floor).contains(&floor)
    }

    pub fn check_floor(&self, floor: i32) -> Result<i32, PressError> {
        if self.contains(floor) {
            Ok(floor)
        } else {
            Err(PressError::InvalidFloor {
                floor,
                bottom: self.bottom_floor,
                top: self.top_floor,
            })
        }
    }

    pub fn floors(&self) -> impl DoubleEndedIterator<Item = i32> {
        self.bottom_floor..=self.top_floor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// Travel time between two adjacent floors.
    pub movement_interval: Duration,
    /// Dwell time at a floor with a call to service.
    pub stoppage_interval: Duration,
}

impl TimingConfig {
    pub fn from_millis(movement_interval_ms: u64, stoppage_interval_ms: u64) -> Self {
        TimingConfig {
            movement_interval: Duration::from_millis(movement_interval_ms),
            stoppage_interval: Duration::from_millis(stoppage_interval_ms),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub elevator: ElevatorSettings,
    pub timing: TimingConfig,
}

impl Config {
    pub fn get() -> Result<Self, ConfigError> {
        let contents = match parse_env_args() {
            Some(path) => read_file(&path)?,
            None => match fs::read_to_string(CONFIG_FILE_PATH) {
                Ok(content) => content,
                Err(_) => {
                    warn!("No configuration file provided, using default settings...");
                    read_file(FALLBACK_CONFIG_FILE_PATH)?
                }
            },
        };
        let config = Config::from_json(&contents)?;
        info!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config_file: ConfigFile = serde_json::from_str(contents)?;

        let elevator = ElevatorSettings::new(
            lookup(&config_file.elevator, "bottom_floor")?,
            lookup(&config_file.elevator, "top_floor")?,
        )?;
        let timing = TimingConfig::from_millis(
            lookup(&config_file.timing, "movement_interval_ms")?,
            lookup(&config_file.timing, "stoppage_interval_ms")?,
        );

        Ok(Config { elevator, timing })
    }
}

fn lookup<T: Copy>(section: &HashMap<String, T>, key: &'static str) -> Result<T, ConfigError> {
    section.get(key).copied().ok_or(ConfigError::MissingKey(key))
}

fn read_file(path: &str) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })
}

fn parse_env_args() -> Option<String> {
    let mut config_path = None;

    let args: Vec<String> = env::args().skip(1).collect();
    for arg_pair in args.chunks(2) {
        match (arg_pair[0].as_str(), arg_pair.get(1)) {
            ("--config", Some(path)) => config_path = Some(path.clone()),
            (arg, _) => warn!("illegal argument {}, skipping...", arg),
        }
    }
    config_path
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r#"{
        "elevator": { "bottom_floor": 0, "top_floor": 2 },
        "timing": { "movement_interval_ms": 5000, "stoppage_interval_ms": 2000 }
    }"#;

    #[test]
    fn parses_example_config() {
        let config = Config::from_json(EXAMPLE).unwrap();
        assert_eq!(config.elevator, ElevatorSettings { bottom_floor: 0, top_floor: 2 });
        assert_eq!(config.timing.movement_interval, Duration::from_millis(5000));
        assert_eq!(config.timing.stoppage_interval, Duration::from_millis(2000));
    }

    #[test]
    fn missing_key_is_reported() {
        let contents = r#"{
            "elevator": { "bottom_floor": 0 },
            "timing": { "movement_interval_ms": 5000, "stoppage_interval_ms": 2000 }
        }"#;
        match Config::from_json(contents) {
            Err(ConfigError::MissingKey(key)) => assert_eq!(key, "top_floor"),
            other => panic!("expected missing key, got {:?}", other),
        }
    }

    #[test]
    fn floor_range_must_be_increasing() {
        assert!(matches!(
            ElevatorSettings::new(2, 2),
            Err(ConfigError::InvalidFloorRange { bottom: 2, top: 2 })
        ));
        assert!(ElevatorSettings::new(-1, 3).is_ok());
    }

    #[test]
    fn floor_range_too_wide_is_rejected() {
        assert!(matches!(
            ElevatorSettings::new(-1, i32::MAX),
            Err(ConfigError::InvalidFloorRange { bottom: -1, top: i32::MAX })
        ));
        assert!(ElevatorSettings::new(i32::MIN, 0).is_err());
        assert!(ElevatorSettings::new(0, i32::MAX).is_err());

        let contents = r#"{"elevator":{"bottom_floor":-1,"top_floor":2147483647},
            "timing":{"movement_interval_ms":50,"stoppage_interval_ms":20}}"#;
        assert!(matches!(
            Config::from_json(contents),
            Err(ConfigError::InvalidFloorRange { .. })
        ));
    }

    #[test]
    fn check_floor_rejects_out_of_range() {
        let settings = ElevatorSettings::new(0, 2).unwrap();
        assert_eq!(settings.check_floor(1), Ok(1));
        assert_eq!(
            settings.check_floor(3),
            Err(PressError::InvalidFloor { floor: 3, bottom: 0, top: 2 })
        );
        assert_eq!(settings.num_floors(), 3);
    }

    #[test]
    fn fallback_config_file_is_valid() {
        let contents = fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/_config.json")).unwrap();
        let config = Config::from_json(&contents).unwrap();
        assert_eq!(config.elevator.top_floor, 2);
    }
}
