//! Board-agnostic core logic for the fractal explorer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Compiled-in configuration (geometry, viewport defaults and limits)
//! - Coordinate mapping between display indices, screen and plane
//! - Escape-time evaluation of the Mandelbrot recurrence
//! - Viewport state and its pan/zoom mutations
//! - Button gesture decoding and the input controller
//! - The time-sliced render scheduler
//! - Boundary traits (pixel sink, clock, button source)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod escape;
pub mod explorer;
pub mod input;
pub mod mapping;
pub mod scheduler;
pub mod traits;
pub mod viewport;

#[cfg(test)]
mod testing;

pub use explorer::{Explorer, TickReport};
