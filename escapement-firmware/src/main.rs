//! Escapement - Fractal Explorer Firmware
//!
//! Renders the Mandelbrot set on a 240x135 ST7789 panel and lets the user
//! pan and zoom with two buttons. Rendering is spread over short time
//! slices interleaved with button polling.
//!
//! Button A: click pans up, long click pans right, double click zooms in.
//! Button B: click pans down, long click pans left, double click zooms out.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use static_cell::ConstStaticCell;
use {defmt_rtt as _, panic_probe as _};

use escapement_core::config::{
    DisplayGeometry, GestureTiming, Palette, PanZoomSteps, RenderConfig, ViewportDefaults,
    ViewportLimits, DISPLAY_PIXELS,
};
use escapement_core::input::{Bindings, InputController};
use escapement_core::mapping::{ScanTable, ScreenPosition};
use escapement_core::scheduler::RenderScheduler;
use escapement_core::viewport::Viewport;
use escapement_core::Explorer;
use escapement_drivers::display::{PanelConfig, St7789};

mod board;
mod tasks;

use crate::board::{PicoButtons, SPI_FREQUENCY_HZ};

/// Display index to screen position table, built once at boot
static SCAN_TABLE: ConstStaticCell<[ScreenPosition; DISPLAY_PIXELS]> =
    ConstStaticCell::new([ScreenPosition::ORIGIN; DISPLAY_PIXELS]);

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Escapement firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Panel on SPI0 (write-only, SCK=GPIO18, MOSI=GPIO19)
    let mut spi_config = spi::Config::default();
    spi_config.frequency = SPI_FREQUENCY_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);

    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    // Dropping the pin would release it and turn the backlight off
    let backlight = Output::new(p.PIN_20, Level::High);
    core::mem::forget(backlight);

    let geometry = DisplayGeometry::REFERENCE;
    let display = St7789::new(spi, dc, cs, Delay, geometry, PanelConfig::PICO_DISPLAY);
    info!("SPI display configured ({}x{})", geometry.width(), geometry.height());

    let buttons = PicoButtons::new(
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_13, Pull::Up),
    );

    let table = unwrap!(ScanTable::build(geometry, SCAN_TABLE.take()));
    info!("Scan table built: {} pixels", table.len());

    let viewport = Viewport::new(
        ViewportDefaults::DEFAULT,
        ViewportLimits::DEFAULT,
        PanZoomSteps::DEFAULT,
    );
    let input = InputController::new(Bindings::DEFAULT, GestureTiming::DEFAULT);
    let scheduler = RenderScheduler::new(table, Palette::DEFAULT);
    let explorer = Explorer::new(viewport, input, scheduler);

    unwrap!(spawner.spawn(tasks::render_task(
        explorer,
        display,
        buttons,
        RenderConfig::DEFAULT,
    )));

    info!("All tasks spawned");
}
