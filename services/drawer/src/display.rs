//! Two-digit number display
//!
//! The display never draws anything itself: it splits a number into tens and
//! ones and hands each digit to a [`DigitRenderer`] together with the slot's
//! configured position.

use shared::errors::ServiceError;
use shared::MAX_DISPLAYABLE_NUMBER;

use crate::config::{LayoutConfig, Position};
use crate::errors::Result;

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Left (tens) or right (ones) digit slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitSlot {
    Tens,
    Ones,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitPair {
    pub tens: Digit,
    pub ones: Digit,
}

impl DigitPair {
    pub fn split(number: u32) -> std::result::Result<Self, ServiceError> {
        if number > MAX_DISPLAYABLE_NUMBER {
            return Err(ServiceError::number_out_of_display_range(number));
        }
        Ok(Self {
            tens: Digit((number / 10) as u8),
            ones: Digit((number % 10) as u8),
        })
    }
}

/// Draws digit glyphs somewhere: a window, a terminal, a test buffer
pub trait DigitRenderer {
    fn render_digit(&mut self, slot: DigitSlot, digit: Digit, position: Position) -> Result<()>;

    /// Flush the frame after both digits were rendered
    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: DigitRenderer + ?Sized> DigitRenderer for Box<T> {
    fn render_digit(&mut self, slot: DigitSlot, digit: Digit, position: Position) -> Result<()> {
        (**self).render_digit(slot, digit, position)
    }

    fn present(&mut self) -> Result<()> {
        (**self).present()
    }
}

pub struct NumberDisplay<R> {
    renderer: R,
    tens_position: Position,
    ones_position: Position,
}

impl<R: DigitRenderer> NumberDisplay<R> {
    pub fn new(renderer: R, layout: &LayoutConfig) -> Self {
        Self {
            renderer,
            tens_position: layout.digit1,
            ones_position: layout.digit2,
        }
    }

    pub fn show(&mut self, number: u32) -> Result<()> {
        let pair = DigitPair::split(number)?;
        self.renderer
            .render_digit(DigitSlot::Tens, pair.tens, self.tens_position)?;
        self.renderer
            .render_digit(DigitSlot::Ones, pair.ones, self.ones_position)?;
        self.renderer.present()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
