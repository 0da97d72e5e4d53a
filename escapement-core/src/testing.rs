//! Host-side fakes for the hardware traits

use core::cell::Cell;

use crate::traits::{ButtonId, ButtonSource, Clock, Color, DisplayError, PixelSink};

/// Records every call made to it
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub initialized: bool,
    pub fills: Vec<Color>,
    pub pixels: Vec<(u16, u16, Color)>,
    /// Fail every draw after this many successful ones
    pub fail_after: Option<usize>,
}

impl PixelSink for RecordingDisplay {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.initialized = true;
        Ok(())
    }

    fn fill(&mut self, color: Color) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.fills.push(color);
        Ok(())
    }

    fn draw_pixel(&mut self, row: u16, column: u16, color: Color) -> Result<(), DisplayError> {
        if self.fail_after.is_some_and(|n| self.pixels.len() >= n) {
            return Err(DisplayError::Communication);
        }
        self.pixels.push((row, column, color));
        Ok(())
    }
}

/// Clock that moves forward a fixed step every time it is read
#[derive(Debug)]
pub struct SteppingClock {
    now_us: Cell<u64>,
    step_us: u64,
}

impl SteppingClock {
    pub fn new(start_us: u64, step_us: u64) -> Self {
        Self {
            now_us: Cell::new(start_us),
            step_us,
        }
    }
}

impl Clock for SteppingClock {
    fn now_us(&self) -> u64 {
        let now = self.now_us.get();
        self.now_us.set(now + self.step_us);
        now
    }
}

/// Button levels set directly by the test
#[derive(Debug, Default)]
pub struct ScriptedButtons {
    pub a: Cell<bool>,
    pub b: Cell<bool>,
}

impl ButtonSource for ScriptedButtons {
    fn is_pressed(&self, button: ButtonId) -> bool {
        match button {
            ButtonId::A => self.a.get(),
            ButtonId::B => self.b.get(),
        }
    }
}
