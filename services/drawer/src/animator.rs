//! Roulette animator
//!
//! Plays a precomputed step list: show the number, tick, yield to the event
//! loop, hold for the step's delay. The hold races a cancellation token so a
//! spin can be abandoned without committing the draw.
//!
//! States: `Idle -> Spinning(step) -> Settled -> Idle`.

use shared::errors::ServiceError;
use shared::{Cue, Step};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::display::{DigitRenderer, NumberDisplay};
use crate::errors::Result;
use crate::sound::SoundPlayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    Spinning { step: usize, total: usize },
    Settled { number: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    Completed { number: u32 },
    Cancelled { step: usize, total: usize },
}

#[derive(Debug)]
pub struct RouletteAnimator {
    state: AnimationState,
}

impl Default for RouletteAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl RouletteAnimator {
    pub fn new() -> Self {
        Self {
            state: AnimationState::Idle,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == AnimationState::Idle
    }

    /// Run the roulette to completion or cancellation.
    ///
    /// Leaves the animator `Settled` on completion and `Idle` otherwise.
    pub async fn run<D, S>(
        &mut self,
        steps: &[Step],
        display: &mut NumberDisplay<D>,
        sound: &mut S,
        cancel: &CancellationToken,
    ) -> Result<AnimationOutcome>
    where
        D: DigitRenderer,
        S: SoundPlayer,
    {
        if !self.is_idle() {
            return Err(ServiceError::internal(format!(
                "Roulette started while {:?}",
                self.state
            ))
            .into());
        }

        let outcome = self.spin(steps, display, sound, cancel).await;
        if !matches!(outcome, Ok(AnimationOutcome::Completed { .. })) {
            self.state = AnimationState::Idle;
        }
        outcome
    }

    /// Return to `Idle` once the settled number has been committed
    pub fn finish(&mut self) {
        self.state = AnimationState::Idle;
    }

    async fn spin<D, S>(
        &mut self,
        steps: &[Step],
        display: &mut NumberDisplay<D>,
        sound: &mut S,
        cancel: &CancellationToken,
    ) -> Result<AnimationOutcome>
    where
        D: DigitRenderer,
        S: SoundPlayer,
    {
        let total = steps.len();
        let Some(last) = steps.last() else {
            return Err(ServiceError::internal("Roulette started with no steps").into());
        };

        for (step, frame) in steps.iter().enumerate() {
            if cancel.is_cancelled() {
                return Ok(AnimationOutcome::Cancelled { step, total });
            }

            self.state = AnimationState::Spinning { step, total };
            display.show(frame.number)?;
            sound.play(Cue::SpinTick)?;
            tokio::task::yield_now().await;

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!(step, total, "Roulette cancelled");
                    return Ok(AnimationOutcome::Cancelled { step, total });
                }
                _ = sleep(frame.delay()) => {}
            }
        }

        self.state = AnimationState::Settled {
            number: last.number,
        };
        sound.play(Cue::Confirm)?;

        Ok(AnimationOutcome::Completed {
            number: last.number,
        })
    }
}
