//! Roulette sequencer
//!
//! Works out, for one draw, which numbers the roulette flashes and how long
//! each one stays on screen. The sequence always ends on the target.

use rand::Rng;
use serde::Serialize;
use shared::errors::ServiceError;
use shared::{Step, ACCEL_LENGTH_JITTER, MIN_ACCEL_LENGTH};

use crate::config::RouletteConfig;

/// Timing parameters for one roulette run, before jitter is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouletteParams {
    /// Delay of the final frames, hundredths of a second
    pub base_delay_cs: u32,
    pub length: u32,
    pub length_margin: u32,
    /// Extra delay per frame outside the acceleration window, hundredths of a second
    pub accel_step_cs: u32,
    pub accel_length: u32,
}

/// Negative config values count as zero steps or zero delay
impl From<&RouletteConfig> for RouletteParams {
    fn from(config: &RouletteConfig) -> Self {
        Self {
            base_delay_cs: non_negative(config.speed_cs),
            length: non_negative(config.length),
            length_margin: non_negative(config.length_margin),
            accel_step_cs: non_negative(config.accel_cs),
            accel_length: non_negative(config.accel_length),
        }
    }
}

fn non_negative(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Element immediately before `value` in `pool`, wrapping from the first
/// element to the last. `None` if `value` is not in the pool.
pub fn previous_value(pool: &[u32], value: u32) -> Option<u32> {
    let index = pool.iter().position(|&n| n == value)?;
    if index == 0 {
        pool.last().copied()
    } else {
        Some(pool[index - 1])
    }
}

/// `max(length, margin + 1)` shifted by a uniform offset in `[-margin, +margin]`.
/// Never below 1.
pub fn effective_length<R: Rng + ?Sized>(length: u32, margin: u32, rng: &mut R) -> usize {
    let margin = margin as i64;
    let floor = (length as i64).max(margin + 1);
    let offset = rng.gen_range(-margin..=margin);
    (floor + offset) as usize
}

/// `max(accel_length, 6)` shifted by a uniform offset in `[-5, +5]`. Never below 1.
pub fn effective_accel_length<R: Rng + ?Sized>(accel_length: u32, rng: &mut R) -> usize {
    let floor = accel_length.max(MIN_ACCEL_LENGTH) as i64;
    let offset = rng.gen_range(-ACCEL_LENGTH_JITTER..=ACCEL_LENGTH_JITTER);
    (floor + offset) as usize
}

/// Deterministic part of the sequencer.
///
/// Walks `length` frames backward from `target` through `available`. The last
/// `accel_length` frames hold `base_delay_cs`; each frame before them holds
/// `accel_step_cs` more than the frame after it.
pub fn build_steps(
    available: &[u32],
    target: u32,
    base_delay_cs: u32,
    accel_step_cs: u32,
    length: usize,
    accel_length: usize,
) -> Result<Vec<Step>, ServiceError> {
    if !available.contains(&target) {
        return Err(ServiceError::number_not_in_pool(target));
    }

    let mut steps = Vec::with_capacity(length);
    let mut current = target;
    let mut delay_cs = base_delay_cs;

    for distance in 0..length {
        if distance > 0 {
            current = previous_value(available, current)
                .ok_or_else(|| ServiceError::number_not_in_pool(current))?;
        }
        if distance >= accel_length {
            delay_cs = delay_cs.saturating_add(accel_step_cs);
        }
        steps.push(Step::new(current, delay_cs));
    }

    steps.reverse();
    Ok(steps)
}

/// Full sequencer: applies length and acceleration jitter, then builds the frames.
pub fn compute_sequence<R: Rng + ?Sized>(
    available: &[u32],
    target: u32,
    params: &RouletteParams,
    rng: &mut R,
) -> Result<Vec<Step>, ServiceError> {
    let length = effective_length(params.length, params.length_margin, rng);
    let accel_length = effective_accel_length(params.accel_length, rng);

    tracing::trace!(number = target, length, accel_length, "Roulette sequence sized");

    build_steps(
        available,
        target,
        params.base_delay_cs,
        params.accel_step_cs,
        length,
        accel_length,
    )
}
