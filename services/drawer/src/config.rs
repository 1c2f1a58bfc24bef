//! Config file loading
//!
//! The config file is a flat list of `KEY=INTEGER` lines. Every value is
//! parsed as a signed integer and nothing else is checked. Missing keys and
//! lines that do not parse are fatal. Values are narrowed to the domain that
//! uses them (pool numbers, step counts) only where they are used.

use serde::Serialize;
use shared::errors::ServiceError;
use shared::{
    NumberRange, DEFAULT_ASSET_DIR, DEFAULT_CONFIG_PATH, DEFAULT_ROULETTE_ACCEL_CS,
    DEFAULT_ROULETTE_ACCEL_LENGTH, DEFAULT_ROULETTE_LENGTH_MARGIN, DEFAULT_ROULETTE_SPEED_CS,
};
use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::Result;

/// Keys of the second config variant. Either all of them or none.
const ROULETTE_TIMING_KEYS: [&str; 4] = [
    "ROULETTE_DEFAULT_SPEED",
    "ROULETTE_LENGTH_MARGINE",
    "ROULETTE_ACCEL",
    "ROULETTE_ACCEL_LENGTH",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub min_value: i64,
    pub max_value: i64,
    pub layout: LayoutConfig,
    pub roulette: RouletteConfig,
    pub assets_dir: PathBuf,
    /// Fixed RNG seed, for reproducible sessions
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutConfig {
    pub digit1: Position,
    pub digit2: Position,
    pub main_window: WindowSize,
    pub history_window: WindowSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouletteConfig {
    pub length: i64,
    /// Starting per-step delay, hundredths of a second
    pub speed_cs: i64,
    pub length_margin: i64,
    /// Added to the delay for every step outside the acceleration window
    pub accel_cs: i64,
    pub accel_length: i64,
    /// True when the file carried the timing keys; sound cues are played only then
    pub sound_cues: bool,
}

impl Config {
    /// Load the config file named by `BINGO_CONFIG` (default `config.txt`)
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = env::var("BINGO_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_path(&path)?;

        if let Ok(dir) = env::var("BINGO_ASSETS") {
            config.assets_dir = PathBuf::from(dir);
        }
        if let Ok(seed) = env::var("BINGO_SEED") {
            config.seed = Some(
                seed.parse()
                    .map_err(|_| ServiceError::invalid_config_value("BINGO_SEED", &seed))?,
            );
        }

        Ok(config)
    }

    /// The drawable numbers: `[MIN_VALUE, MAX_VALUE]` cut down to the
    /// non-negative numbers a pool can hold
    pub fn number_range(&self) -> NumberRange {
        let min = u32::try_from(self.min_value.max(0));
        let max = u32::try_from(self.max_value.min(u32::MAX as i64));
        match (min, max) {
            (Ok(min), Ok(max)) => NumberRange::new(min, max),
            _ => NumberRange::empty(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| ServiceError::unreadable_config(path.display(), e))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let entries = Entries::parse(reader)?;

        let roulette = if ROULETTE_TIMING_KEYS.iter().any(|key| entries.contains(key)) {
            RouletteConfig {
                length: entries.require("ROULETTE_LENGTH")?,
                speed_cs: entries.require("ROULETTE_DEFAULT_SPEED")?,
                length_margin: entries.require("ROULETTE_LENGTH_MARGINE")?,
                accel_cs: entries.require("ROULETTE_ACCEL")?,
                accel_length: entries.require("ROULETTE_ACCEL_LENGTH")?,
                sound_cues: true,
            }
        } else {
            RouletteConfig {
                length: entries.require("ROULETTE_LENGTH")?,
                speed_cs: DEFAULT_ROULETTE_SPEED_CS,
                length_margin: DEFAULT_ROULETTE_LENGTH_MARGIN,
                accel_cs: DEFAULT_ROULETTE_ACCEL_CS,
                accel_length: DEFAULT_ROULETTE_ACCEL_LENGTH,
                sound_cues: false,
            }
        };

        Ok(Config {
            min_value: entries.require("MIN_VALUE")?,
            max_value: entries.require("MAX_VALUE")?,
            layout: LayoutConfig {
                digit1: Position {
                    x: entries.require("DIGIT1_X")?,
                    y: entries.require("DIGIT1_Y")?,
                },
                digit2: Position {
                    x: entries.require("DIGIT2_X")?,
                    y: entries.require("DIGIT2_Y")?,
                },
                main_window: WindowSize {
                    width: entries.require("MAIN_WIDTH")?,
                    height: entries.require("MAIN_HEIGHT")?,
                },
                history_window: WindowSize {
                    width: entries.require("SUB_WIDTH")?,
                    height: entries.require("SUB_HEIGHT")?,
                },
            },
            roulette,
            assets_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            seed: None,
        })
    }
}

/// Raw `KEY=VALUE` pairs, later keys overriding earlier ones
struct Entries(HashMap<String, String>);

impl Entries {
    fn parse<R: Read>(reader: R) -> Result<Self> {
        let mut map = HashMap::new();
        for item in dotenvy::from_read_iter(reader) {
            let (key, value) = item.map_err(ServiceError::malformed_config_line)?;
            map.insert(key, value);
        }
        Ok(Self(map))
    }

    fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    fn require<T: FromStr>(&self, key: &'static str) -> Result<T> {
        let value = self
            .0
            .get(key)
            .ok_or_else(|| ServiceError::missing_config_key(key))?;
        Ok(value
            .trim()
            .parse()
            .map_err(|_| ServiceError::invalid_config_value(key, value))?)
    }
}
