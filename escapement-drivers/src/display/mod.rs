//! Display panel drivers

pub mod st7789;

pub use st7789::{rgb565_bytes, PanelConfig, St7789};
