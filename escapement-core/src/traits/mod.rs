//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod buttons;
pub mod clock;
pub mod display;

pub use buttons::{ButtonId, ButtonSource};
pub use clock::Clock;
pub use display::{Color, DisplayError, PixelSink};
