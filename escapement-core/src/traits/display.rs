//! Pixel display trait
//!
//! The render scheduler treats the display as a write-only sink: it never
//! reads pixels back and does not wait for paint completion.

/// Errors that can occur while painting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus or pin error talking to the panel
    Communication,
    /// Row or column outside the panel
    OutOfBounds,
    /// Drawing attempted before `init`
    NotInitialized,
}

/// RGBA pixel value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgba(0, 0, 0, 0);
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Create a color from its four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Write-only pixel display
pub trait PixelSink {
    /// Bring the panel up; must be called before drawing
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Paint every pixel with one color
    fn fill(&mut self, color: Color) -> Result<(), DisplayError>;

    /// Paint one pixel
    ///
    /// - `row`: logical row, `0..height`
    /// - `column`: logical column, `0..width`
    fn draw_pixel(&mut self, row: u16, column: u16, color: Color) -> Result<(), DisplayError>;
}
