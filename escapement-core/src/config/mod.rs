//! Configuration types
//!
//! Compiled-in configuration for the explorer. There is no runtime
//! configuration surface; every value here is a `const` default.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
