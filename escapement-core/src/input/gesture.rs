//! Button gesture decoder
//!
//! Debounces one button and classifies presses into click, long click and
//! double click. Driven by polling: feed the raw level and the current time
//! on every tick.
//!
//! State transitions:
//!
//! ```text
//! Idle --press--> Pressed --release (held >= long)--> Idle      => LongClick
//!                 Pressed --release (short)---------> Released
//! Released --window expired--> Idle                             => Click
//! Released --press-----------> SecondPress --release--> Idle    => DoubleClick
//! ```

use crate::config::GestureTiming;

/// Classified button gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Short press with no follow-up press
    Click,
    /// Press held past the long-click threshold
    LongClick,
    /// Two short presses within the double-click window
    DoubleClick,
}

/// Decoder state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    Idle,
    Pressed { since_ms: u32 },
    Released { at_ms: u32 },
    SecondPress,
}

/// Per-button debounce and gesture state
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureDecoder {
    timing: GestureTiming,
    state: State,
    /// Last raw level seen
    raw: bool,
    /// When the raw level last changed
    raw_changed_ms: u32,
    /// Debounced level
    stable: bool,
}

impl Default for GestureDecoder {
    fn default() -> Self {
        Self::new(GestureTiming::DEFAULT)
    }
}

impl GestureDecoder {
    /// Create a decoder for a released button
    pub fn new(timing: GestureTiming) -> Self {
        Self {
            timing,
            state: State::Idle,
            raw: false,
            raw_changed_ms: 0,
            stable: false,
        }
    }

    /// Feed the current raw level
    ///
    /// Returns at most one gesture per call.
    pub fn update(&mut self, pressed: bool, now_ms: u32) -> Option<Gesture> {
        if pressed != self.raw {
            self.raw = pressed;
            self.raw_changed_ms = now_ms;
        }

        let mut edge = None;
        if self.raw != self.stable
            && now_ms.wrapping_sub(self.raw_changed_ms) >= self.timing.debounce_ms
        {
            self.stable = self.raw;
            edge = Some(self.stable);
        }

        match (self.state, edge) {
            (State::Idle, Some(true)) => {
                self.state = State::Pressed { since_ms: now_ms };
                None
            }
            (State::Pressed { since_ms }, Some(false)) => {
                if now_ms.wrapping_sub(since_ms) >= self.timing.long_click_ms {
                    self.state = State::Idle;
                    Some(Gesture::LongClick)
                } else {
                    self.state = State::Released { at_ms: now_ms };
                    None
                }
            }
            (State::Released { .. }, Some(true)) => {
                self.state = State::SecondPress;
                None
            }
            (State::Released { at_ms }, None) => {
                if now_ms.wrapping_sub(at_ms) >= self.timing.double_click_ms {
                    self.state = State::Idle;
                    Some(Gesture::Click)
                } else {
                    None
                }
            }
            (State::SecondPress, Some(false)) => {
                self.state = State::Idle;
                Some(Gesture::DoubleClick)
            }
            _ => None,
        }
    }
}
