/// Domain types shared between the drawer library and its front ends
///
/// Delays travel as integer hundredths of a second so sequences compare
/// exactly; seconds and `Duration` views are derived on demand.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::constants::CENTISECONDS_PER_SECOND;

/// Inclusive range of drawable numbers, `[min, max]`
///
/// An inverted range (`min > max`) is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: u32,
    pub max: u32,
}

impl NumberRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self { min: 1, max: 0 }
    }

    pub fn contains(&self, number: u32) -> bool {
        self.min <= number && number <= self.max
    }

    pub fn len(&self) -> usize {
        if self.min > self.max {
            0
        } else {
            (self.max - self.min) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ascending list of every number in the range
    pub fn to_pool(&self) -> Vec<u32> {
        (self.min..=self.max).collect()
    }
}

/// Sound cue requested by the roulette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// Played on every intermediate roulette step
    SpinTick,
    /// Played once the roulette settles on the drawn number
    Confirm,
}

/// One frame of the roulette: the number to show and how long to hold it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub number: u32,
    /// Hold time in hundredths of a second
    pub delay_cs: u32,
}

impl Step {
    pub fn new(number: u32, delay_cs: u32) -> Self {
        Self { number, delay_cs }
    }

    pub fn delay_secs(&self) -> f64 {
        self.delay_cs as f64 / CENTISECONDS_PER_SECOND
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_cs as u64 * 10)
    }
}

/// A committed draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    /// 1-based position of the draw within the session
    pub sequence: u32,
    pub number: u32,
    pub drawn_at: DateTime<Utc>,
    /// Number of roulette frames shown before settling
    pub steps: usize,
}

/// Serializable snapshot of a drawing session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub range: NumberRange,
    /// Drawn numbers in ascending order
    pub drawn: Vec<u32>,
    pub remaining: usize,
    pub draws: Vec<DrawRecord>,
}
