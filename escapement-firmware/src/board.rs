//! Board support for the Pimoroni Pico Display pack
//!
//! Pin map (RP2040 GPIO):
//!
//! | Function      | GPIO |
//! |---------------|------|
//! | SPI0 SCK      | 18   |
//! | SPI0 MOSI     | 19   |
//! | LCD CS        | 17   |
//! | LCD DC        | 16   |
//! | Backlight     | 20   |
//! | Button A      | 12   |
//! | Button B      | 13   |
//!
//! Buttons are active-low with internal pull-ups.

use embassy_rp::gpio::Input;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::{Delay, Instant};

use escapement_core::traits::{ButtonId, ButtonSource, Clock};
use escapement_drivers::display::St7789;

/// SPI clock for the panel (ST7789 write cycle limit is ~62.5 MHz)
pub const SPI_FREQUENCY_HZ: u32 = 62_500_000;

/// The panel driver as wired on this board
pub type PanelDisplay =
    St7789<Spi<'static, SPI0, Blocking>, Output<'static>, Output<'static>, Delay>;

/// The two front buttons
pub struct PicoButtons {
    a: Input<'static>,
    b: Input<'static>,
}

impl PicoButtons {
    pub fn new(a: Input<'static>, b: Input<'static>) -> Self {
        Self { a, b }
    }
}

impl ButtonSource for PicoButtons {
    fn is_pressed(&self, button: ButtonId) -> bool {
        match button {
            ButtonId::A => self.a.is_low(),
            ButtonId::B => self.b.is_low(),
        }
    }
}

/// Monotonic clock backed by the embassy time driver
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}
