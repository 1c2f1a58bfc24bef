//! Draw controller
//!
//! Owns the session and is the only place that mutates it: a draw commits
//! its target once the roulette settles, and a reset clears everything.

use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::errors::{ErrorCategory, ServiceError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::animator::{AnimationOutcome, RouletteAnimator};
use crate::config::Config;
use crate::display::{DigitRenderer, NumberDisplay};
use crate::errors::{AppError, Result};
use crate::history::HistoryGrid;
use crate::sequencer::{compute_sequence, RouletteParams};
use crate::session::DrawSession;
use crate::sound::SoundPlayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn { number: u32, steps: usize },
    /// Every number has been drawn; nothing changed
    Exhausted,
    /// The roulette was interrupted; nothing was committed
    Cancelled,
}

pub struct DrawController<D, S> {
    session: DrawSession,
    params: RouletteParams,
    display: NumberDisplay<D>,
    sound: S,
    animator: RouletteAnimator,
    rng: StdRng,
}

impl<D, S> DrawController<D, S>
where
    D: DigitRenderer,
    S: SoundPlayer,
{
    pub fn new(config: &Config, renderer: D, sound: S) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, renderer, sound, rng)
    }

    pub fn with_rng(config: &Config, renderer: D, sound: S, rng: StdRng) -> Self {
        let range = config.number_range();
        let session = DrawSession::new(range);
        info!(
            session_id = %session.session_id(),
            min = range.min,
            max = range.max,
            "Drawing session created"
        );

        if config.min_value < 0 {
            warn!(
                min_value = config.min_value,
                "Negative numbers cannot be drawn; the pool starts at 0"
            );
        }
        let undisplayable = session.undisplayable();
        if undisplayable > 0 {
            warn!(
                max_value = config.max_value,
                undisplayable,
                "Numbers above 99 do not fit the display; spins through them fail and the pool can never be emptied"
            );
        }

        Self {
            session,
            params: RouletteParams::from(&config.roulette),
            display: NumberDisplay::new(renderer, &config.layout),
            sound,
            animator: RouletteAnimator::new(),
            rng,
        }
    }

    pub fn session(&self) -> &DrawSession {
        &self.session
    }

    pub fn display(&self) -> &NumberDisplay<D> {
        &self.display
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn renderer_mut(&mut self) -> &mut D {
        self.display.renderer_mut()
    }

    pub fn animator(&self) -> &RouletteAnimator {
        &self.animator
    }

    pub fn history(&self) -> HistoryGrid {
        HistoryGrid::from_session(&self.session)
    }

    /// Show whatever the session currently displays (0 on a fresh session)
    pub fn refresh(&mut self) -> Result<()> {
        self.display.show(self.session.displayed())
    }

    /// Pick a target, spin the roulette, commit the target once it settles
    pub async fn draw(&mut self, cancel: &CancellationToken) -> Result<DrawOutcome> {
        let target = match self.session.choose_target(&mut self.rng) {
            Ok(target) => target,
            Err(e) if e.category == ErrorCategory::Exhausted => {
                info!(drawn = self.session.drawn().len(), "All numbers have been drawn");
                metrics::counter!("draws_exhausted_total").increment(1);
                return Ok(DrawOutcome::Exhausted);
            }
            Err(e) => return Err(e.into()),
        };

        let available = self.session.available();
        let steps = compute_sequence(&available, target, &self.params, &mut self.rng)?;
        debug!(number = target, steps = steps.len(), "Roulette starting");

        let outcome = self
            .animator
            .run(&steps, &mut self.display, &mut self.sound, cancel)
            .await?;

        match outcome {
            AnimationOutcome::Completed { number } => {
                self.session.mark_drawn(number, steps.len())?;
                self.animator.finish();

                let remaining = self.session.remaining();
                metrics::counter!("draws_total").increment(1);
                metrics::gauge!("numbers_remaining").set(remaining as f64);
                info!(number, steps = steps.len(), remaining, "Number drawn");

                Ok(DrawOutcome::Drawn {
                    number,
                    steps: steps.len(),
                })
            }
            AnimationOutcome::Cancelled { step, total } => {
                self.display.show(self.session.displayed())?;
                metrics::counter!("draws_cancelled_total").increment(1);
                AppError::from(ServiceError::animation_cancelled(step, total)).log();
                Ok(DrawOutcome::Cancelled)
            }
        }
    }

    /// Clear the drawn set and history, show 0 again
    pub fn reset(&mut self) -> Result<()> {
        let cleared = self.session.drawn().len();
        self.session.reset();
        self.display.show(self.session.displayed())?;

        metrics::counter!("resets_total").increment(1);
        metrics::gauge!("numbers_remaining").set(self.session.remaining() as f64);
        info!(cleared, "Session reset");
        Ok(())
    }
}
