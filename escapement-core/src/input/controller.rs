//! Input controller
//!
//! Owns one [`GestureDecoder`] per button and translates decoded gestures
//! into viewport mutations through a static bindings table. The controller
//! never owns the viewport; the target is passed in on every poll.

use heapless::Vec;

use super::gesture::{Gesture, GestureDecoder};
use crate::config::GestureTiming;
use crate::traits::{ButtonId, ButtonSource};

/// At most one gesture per button per poll
pub const MAX_ACTIONS_PER_POLL: usize = 2;

/// Viewport mutations that can be bound to gestures
pub trait ViewportActions {
    fn pan_up(&mut self);
    fn pan_down(&mut self);
    fn pan_left(&mut self);
    fn pan_right(&mut self);
    fn zoom_in(&mut self);
    fn zoom_out(&mut self);
}

/// A bindable viewport action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
}

impl Action {
    /// Perform this action on a target
    pub fn apply<T: ViewportActions + ?Sized>(self, target: &mut T) {
        match self {
            Action::PanUp => target.pan_up(),
            Action::PanDown => target.pan_down(),
            Action::PanLeft => target.pan_left(),
            Action::PanRight => target.pan_right(),
            Action::ZoomIn => target.zoom_in(),
            Action::ZoomOut => target.zoom_out(),
        }
    }
}

/// Gesture to action table for both buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bindings {
    /// Indexed by `[button][gesture]`: click, long click, double click
    table: [[Action; 3]; 2],
}

impl Bindings {
    /// A: click up, long right, double zoom in.
    /// B: click down, long left, double zoom out.
    pub const DEFAULT: Self = Self {
        table: [
            [Action::PanUp, Action::PanRight, Action::ZoomIn],
            [Action::PanDown, Action::PanLeft, Action::ZoomOut],
        ],
    };

    /// Look up the action bound to a gesture
    pub fn lookup(&self, button: ButtonId, gesture: Gesture) -> Action {
        self.table[button.index()][gesture_index(gesture)]
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn gesture_index(gesture: Gesture) -> usize {
    match gesture {
        Gesture::Click => 0,
        Gesture::LongClick => 1,
        Gesture::DoubleClick => 2,
    }
}

/// Polls buttons and dispatches bound actions
#[derive(Debug, Clone)]
pub struct InputController {
    decoders: [GestureDecoder; 2],
    bindings: Bindings,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(Bindings::DEFAULT, GestureTiming::DEFAULT)
    }
}

impl InputController {
    /// Create a controller with the given bindings and timing
    pub fn new(bindings: Bindings, timing: GestureTiming) -> Self {
        Self {
            decoders: [GestureDecoder::new(timing), GestureDecoder::new(timing)],
            bindings,
        }
    }

    /// Sample both buttons once and apply any completed gestures
    ///
    /// Returns the actions that were applied, in button order.
    pub fn poll<B, T>(
        &mut self,
        buttons: &B,
        now_ms: u32,
        target: &mut T,
    ) -> Vec<Action, MAX_ACTIONS_PER_POLL>
    where
        B: ButtonSource + ?Sized,
        T: ViewportActions + ?Sized,
    {
        let mut applied = Vec::new();

        for button in ButtonId::ALL {
            let pressed = buttons.is_pressed(button);
            if let Some(gesture) = self.decoders[button.index()].update(pressed, now_ms) {
                let action = self.dispatch(button, gesture, target);
                // Capacity matches the number of buttons
                let _ = applied.push(action);
            }
        }

        applied
    }

    /// Apply the action bound to one gesture
    pub fn dispatch<T: ViewportActions + ?Sized>(
        &self,
        button: ButtonId,
        gesture: Gesture,
        target: &mut T,
    ) -> Action {
        let action = self.bindings.lookup(button, gesture);
        action.apply(target);
        action
    }
}
