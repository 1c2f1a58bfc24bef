/// Shared constants for the bingo roulette drawer
///
/// This module centralizes the timing defaults, asset names and layout numbers
/// so the config loader, sequencer and front end agree on them.

/// Number shown before the first draw and after a reset
pub const DISPLAY_RESET_NUMBER: u32 = 0;

/// Largest number the two-digit display can show
pub const MAX_DISPLAYABLE_NUMBER: u32 = 99;

/// Default per-step delay in hundredths of a second (0.05 s)
///
/// Used when the config does not carry ROULETTE_DEFAULT_SPEED.
pub const DEFAULT_ROULETTE_SPEED_CS: i64 = 5;

/// Default length jitter (steps) when ROULETTE_LENGTH_MARGINE is absent
pub const DEFAULT_ROULETTE_LENGTH_MARGIN: i64 = 0;

/// Default per-step slowdown in hundredths of a second
pub const DEFAULT_ROULETTE_ACCEL_CS: i64 = 0;

/// Default acceleration window when ROULETTE_ACCEL_LENGTH is absent
pub const DEFAULT_ROULETTE_ACCEL_LENGTH: i64 = 0;

/// Floor applied to the acceleration window before jitter
pub const MIN_ACCEL_LENGTH: u32 = 6;

/// Acceleration window jitter, applied as a uniform offset in [-N, +N]
pub const ACCEL_LENGTH_JITTER: i64 = 5;

/// Numbers per row in the history grid
pub const HISTORY_GRID_COLUMNS: u32 = 10;

/// Hundredths of a second per second
pub const CENTISECONDS_PER_SECOND: f64 = 100.0;

/// Asset file names, relative to the asset directory
pub const BACKGROUND_ASSET: &str = "background.png";
pub const SPIN_SOUND_ASSET: &str = "spin.wav";
pub const CONFIRM_SOUND_ASSET: &str = "confirm.wav";

/// Default locations, overridable through the environment
pub const DEFAULT_CONFIG_PATH: &str = "config.txt";
pub const DEFAULT_ASSET_DIR: &str = "assets";
