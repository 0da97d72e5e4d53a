//! Button input handling
//!
//! Raw button levels are debounced and classified into gestures by
//! [`GestureDecoder`]; the [`InputController`] maps each gesture through
//! its [`Bindings`] table onto a [`ViewportActions`] target.

pub mod controller;
pub mod gesture;

pub use controller::{Action, Bindings, InputController, ViewportActions, MAX_ACTIONS_PER_POLL};
pub use gesture::{Gesture, GestureDecoder};
