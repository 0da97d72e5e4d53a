//! ST7789 TFT display driver
//!
//! Driver for ST7789-based IPS panels over 4-wire SPI (separate
//! data/command pin). The 240x135 panel is a window into the controller's
//! 240x320 RAM, so every address is shifted by the panel offsets.
//!
//! The explorer's landscape scan is drawn onto the portrait panel with rows
//! on the panel's x axis and columns on its y axis.

use embedded_graphics::pixelcolor::{IntoStorage, Rgb565, Rgb888};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use escapement_core::config::DisplayGeometry;
use escapement_core::traits::{Color, DisplayError, PixelSink};

/// ST7789 commands
#[allow(dead_code)]
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVOFF: u8 = 0x20;
    pub const INVON: u8 = 0x21;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// 16 bits per pixel, 65k colors
const COLMOD_RGB565: u8 = 0x55;

/// Pixels streamed per SPI write during a fill
const FILL_CHUNK_PIXELS: usize = 32;

/// Panel placement inside controller RAM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// RAM column of the panel's first x
    pub x_offset: u16,
    /// RAM row of the panel's first y
    pub y_offset: u16,
    /// Memory access control (orientation) byte
    pub madctl: u8,
    /// IPS panels need inversion on to show true colors
    pub invert: bool,
}

impl PanelConfig {
    /// 1.14" 135x240 IPS panel in portrait orientation
    pub const PICO_DISPLAY: Self = Self {
        x_offset: 52,
        y_offset: 40,
        madctl: 0x00,
        invert: true,
    };
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::PICO_DISPLAY
    }
}

/// Convert to the big-endian RGB565 bytes the panel expects
///
/// Alpha is ignored; the panel is opaque.
pub fn rgb565_bytes(color: Color) -> [u8; 2] {
    let raw: u16 = Rgb565::from(Rgb888::new(color.r, color.g, color.b)).into_storage();
    raw.to_be_bytes()
}

/// ST7789 display driver
pub struct St7789<SPI, DC, CS, D> {
    spi: SPI,
    dc: DC,
    cs: CS,
    delay: D,
    geometry: DisplayGeometry,
    panel: PanelConfig,
    initialized: bool,
}

impl<SPI, DC, CS, D> St7789<SPI, DC, CS, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    D: DelayNs,
{
    /// Create a driver; call [`PixelSink::init`] before drawing
    pub fn new(
        spi: SPI,
        dc: DC,
        cs: CS,
        delay: D,
        geometry: DisplayGeometry,
        panel: PanelConfig,
    ) -> Self {
        Self {
            spi,
            dc,
            cs,
            delay,
            geometry,
            panel,
            initialized: false,
        }
    }

    /// Send a command followed by optional parameter bytes
    fn command(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::Communication)?;
        let result = self.command_inner(command, params);
        self.cs.set_high().map_err(|_| DisplayError::Communication)?;
        result
    }

    fn command_inner(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::Communication)?;
        self.spi.write(&[command]).map_err(|_| DisplayError::Communication)?;
        if !params.is_empty() {
            self.dc.set_high().map_err(|_| DisplayError::Communication)?;
            self.spi.write(params).map_err(|_| DisplayError::Communication)?;
        }
        self.spi.flush().map_err(|_| DisplayError::Communication)
    }

    /// Set the RAM write window (inclusive bounds, panel coordinates)
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();
        self.command(cmd::CASET, &[x0h, x0l, x1h, x1l])?;
        self.command(cmd::RASET, &[y0h, y0l, y1h, y1l])
    }

    /// Stream one color into the current window `count` times
    fn write_repeated(&mut self, bytes: [u8; 2], count: usize) -> Result<(), DisplayError> {
        let mut chunk = [0u8; FILL_CHUNK_PIXELS * 2];
        for pair in chunk.chunks_exact_mut(2) {
            pair.copy_from_slice(&bytes);
        }

        self.cs.set_low().map_err(|_| DisplayError::Communication)?;
        let result = self.write_repeated_inner(&chunk, count);
        self.cs.set_high().map_err(|_| DisplayError::Communication)?;
        result
    }

    fn write_repeated_inner(&mut self, chunk: &[u8], count: usize) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::Communication)?;
        self.spi.write(&[cmd::RAMWR]).map_err(|_| DisplayError::Communication)?;
        self.dc.set_high().map_err(|_| DisplayError::Communication)?;

        let mut remaining = count;
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK_PIXELS);
            self.spi
                .write(&chunk[..n * 2])
                .map_err(|_| DisplayError::Communication)?;
            remaining -= n;
        }
        self.spi.flush().map_err(|_| DisplayError::Communication)
    }

    fn ensure_initialized(&self) -> Result<(), DisplayError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }
}

impl<SPI, DC, CS, D> PixelSink for St7789<SPI, DC, CS, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    D: DelayNs,
{
    fn init(&mut self) -> Result<(), DisplayError> {
        self.cs.set_high().map_err(|_| DisplayError::Communication)?;

        self.command(cmd::SWRESET, &[])?;
        self.delay.delay_ms(150);
        self.command(cmd::SLPOUT, &[])?;
        self.delay.delay_ms(120);

        self.command(cmd::COLMOD, &[COLMOD_RGB565])?;
        self.command(cmd::MADCTL, &[self.panel.madctl])?;
        let inversion = if self.panel.invert {
            cmd::INVON
        } else {
            cmd::INVOFF
        };
        self.command(inversion, &[])?;
        self.command(cmd::NORON, &[])?;
        self.command(cmd::DISPON, &[])?;
        self.delay.delay_ms(10);

        self.initialized = true;
        Ok(())
    }

    fn fill(&mut self, color: Color) -> Result<(), DisplayError> {
        self.ensure_initialized()?;

        let x0 = self.panel.x_offset;
        let y0 = self.panel.y_offset;
        let x1 = x0 + self.geometry.height() - 1;
        let y1 = y0 + self.geometry.width() - 1;
        self.set_window(x0, y0, x1, y1)?;
        self.write_repeated(rgb565_bytes(color), self.geometry.pixel_count())
    }

    fn draw_pixel(&mut self, row: u16, column: u16, color: Color) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        if !self.geometry.contains(row, column) {
            return Err(DisplayError::OutOfBounds);
        }

        let x = self.panel.x_offset + row;
        let y = self.panel.y_offset + column;
        self.set_window(x, y, x, y)?;
        self.command(cmd::RAMWR, &rgb565_bytes(color))
    }
}
