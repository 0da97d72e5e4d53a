//! Render task
//!
//! Runs the explorer's cooperative loop: one tick polls the buttons and
//! renders a time-bounded slice, then yields back to the executor.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::{Duration, Timer};

use escapement_core::config::RenderConfig;
use escapement_core::traits::{DisplayError, PixelSink};
use escapement_core::Explorer;

use crate::board::{EmbassyClock, PanelDisplay, PicoButtons};

/// Wait between restart attempts while the panel stays down
const RESTART_BACKOFF: Duration = Duration::from_millis(500);

/// Render task - never returns
#[embassy_executor::task]
pub async fn render_task(
    mut explorer: Explorer<'static>,
    mut display: PanelDisplay,
    buttons: PicoButtons,
    config: RenderConfig,
) {
    info!("Render task started");

    let clock = EmbassyClock;

    if let Err(e) = explorer.start(&mut display) {
        warn!("Display start failed: {:?}", e);
    } else {
        info!("Display ready");
    }

    loop {
        match explorer.run_one_tick(&buttons, &mut display, &clock, config.slice_budget_us) {
            Ok(report) => {
                if !report.actions.is_empty() {
                    let viewport = explorer.viewport();
                    let center = viewport.center();
                    for action in report.actions.iter() {
                        debug!(
                            "{}: center ({}, {}) spacing {} iterations {}",
                            action,
                            center.x,
                            center.y,
                            viewport.pixel_spacing(),
                            viewport.iteration_budget()
                        );
                    }
                }
                if report.slice.frames_completed > 0 {
                    debug!("Frame {} complete", explorer.frames_rendered());
                }
            }
            Err(e) => {
                warn!("Display error: {:?}", e);
                // Panel lost its state: init and clear again
                if e == DisplayError::NotInitialized {
                    match explorer.start(&mut display) {
                        Ok(()) => info!("Display restarted"),
                        Err(e) => {
                            warn!("Display restart failed: {:?}", e);
                            Timer::after(RESTART_BACKOFF).await;
                        }
                    }
                }
            }
        }

        yield_now().await;
    }
}
