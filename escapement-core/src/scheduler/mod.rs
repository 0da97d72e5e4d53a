//! Render scheduler
//!
//! Spreads full-frame rendering over many short, time-budgeted slices so
//! input polling stays responsive.

pub mod cursor;
pub mod render;

pub use cursor::RenderCursor;
pub use render::{RenderScheduler, SliceReport};
