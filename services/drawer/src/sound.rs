//! Sound cue seam
//!
//! The roulette only says which cue to play. Decoding and mixing belong to
//! whatever implements [`SoundPlayer`].

use shared::Cue;

use crate::errors::Result;

pub trait SoundPlayer {
    fn play(&mut self, cue: Cue) -> Result<()>;
}

impl<T: SoundPlayer + ?Sized> SoundPlayer for Box<T> {
    fn play(&mut self, cue: Cue) -> Result<()> {
        (**self).play(cue)
    }
}

/// Player for configs without sound clips
#[derive(Debug, Default, Clone, Copy)]
pub struct Muted;

impl SoundPlayer for Muted {
    fn play(&mut self, cue: Cue) -> Result<()> {
        tracing::trace!(?cue, "Sound cue skipped (muted)");
        Ok(())
    }
}
