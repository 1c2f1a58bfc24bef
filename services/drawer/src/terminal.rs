//! Terminal front end: block-glyph digits, bell cues, line commands

use shared::Cue;
use std::io::Write;

use crate::assets::AssetManifest;
use crate::config::Position;
use crate::display::{Digit, DigitRenderer, DigitSlot};
use crate::errors::Result;
use crate::sound::SoundPlayer;

const GLYPH_ROWS: usize = 5;

/// Pixels per terminal column when mapping configured digit positions
const PIXELS_PER_COLUMN: i32 = 16;

const GLYPHS: [[&str; GLYPH_ROWS]; 10] = [
    ["###", "# #", "# #", "# #", "###"],
    ["  #", "  #", "  #", "  #", "  #"],
    ["###", "  #", "###", "#  ", "###"],
    ["###", "  #", "###", "  #", "###"],
    ["# #", "# #", "###", "  #", "  #"],
    ["###", "#  ", "###", "  #", "###"],
    ["###", "#  ", "###", "# #", "###"],
    ["###", "  #", "  #", "  #", "  #"],
    ["###", "# #", "###", "# #", "###"],
    ["###", "# #", "###", "  #", "###"],
];

pub fn glyph(digit: Digit) -> [&'static str; GLYPH_ROWS] {
    GLYPHS[digit.value() as usize]
}

/// Renders the two digits as block glyphs, redrawing in place
pub struct TerminalDigits<W> {
    out: W,
    tens: Option<(Digit, Position)>,
    ones: Option<(Digit, Position)>,
    drawn_once: bool,
}

impl<W: Write> TerminalDigits<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            tens: None,
            ones: None,
            drawn_once: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Frame lines for the digits currently held, without cursor control
    pub fn frame(&self) -> Vec<String> {
        let (Some((tens, tens_at)), Some((ones, ones_at))) = (self.tens, self.ones) else {
            return Vec::new();
        };

        // Positions left of the screen edge collapse to column 0
        let indent = (tens_at.x.max(0) / PIXELS_PER_COLUMN) as usize;
        let spread = ones_at.x.saturating_sub(tens_at.x).max(0);
        let gap = (spread / PIXELS_PER_COLUMN).max(4) as usize - 3;

        glyph(tens)
            .iter()
            .zip(glyph(ones).iter())
            .map(|(left, right)| format!("{:indent$}{left}{:gap$}{right}", "", ""))
            .collect()
    }

    /// Forget the in-place position, e.g. after other output was printed
    pub fn detach(&mut self) {
        self.drawn_once = false;
    }
}

impl<W: Write> DigitRenderer for TerminalDigits<W> {
    fn render_digit(&mut self, slot: DigitSlot, digit: Digit, position: Position) -> Result<()> {
        match slot {
            DigitSlot::Tens => self.tens = Some((digit, position)),
            DigitSlot::Ones => self.ones = Some((digit, position)),
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let lines = self.frame();
        if self.drawn_once {
            write!(self.out, "\x1b[{}A", lines.len())?;
        }
        for line in &lines {
            writeln!(self.out, "\x1b[2K{line}")?;
        }
        self.out.flush()?;
        self.drawn_once = true;
        Ok(())
    }
}

/// Rings the terminal bell on confirmation; spin ticks are only logged
pub struct TerminalBell<W> {
    out: W,
    manifest: AssetManifest,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, manifest: AssetManifest) -> Self {
        Self { out, manifest }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundPlayer for TerminalBell<W> {
    fn play(&mut self, cue: Cue) -> Result<()> {
        tracing::trace!(?cue, clip = %self.manifest.sound(cue).display(), "Sound cue");
        if cue == Cue::Confirm {
            self.out.write_all(b"\x07")?;
            self.out.flush()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Draw,
    Reset,
    History,
    Quit,
}

impl Command {
    /// Blank line, space or `d` draws; `r` resets; `h` shows history; `q` quits
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.trim().is_empty() {
            return Some(Command::Draw);
        }
        match trimmed.trim().to_ascii_lowercase().as_str() {
            "d" | "draw" => Some(Command::Draw),
            "r" | "reset" => Some(Command::Reset),
            "h" | "history" => Some(Command::History),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}
