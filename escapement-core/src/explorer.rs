//! Application context
//!
//! Ties the viewport, input controller and render scheduler together and
//! exposes the single cooperative entry point, [`Explorer::run_one_tick`].
//! Each tick polls both buttons once, then spends one render slice.

use heapless::Vec;

use crate::input::{Action, InputController, MAX_ACTIONS_PER_POLL};
use crate::scheduler::{RenderScheduler, SliceReport};
use crate::traits::{ButtonSource, Clock, DisplayError, PixelSink};
use crate::viewport::Viewport;

/// Result of one tick
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Actions applied during the poll phase
    pub actions: Vec<Action, MAX_ACTIONS_PER_POLL>,
    /// Work done during the render phase
    pub slice: SliceReport,
}

/// Explorer state owned by the render loop
#[derive(Debug)]
pub struct Explorer<'a> {
    viewport: Viewport,
    input: InputController,
    scheduler: RenderScheduler<'a>,
}

impl<'a> Explorer<'a> {
    pub fn new(viewport: Viewport, input: InputController, scheduler: RenderScheduler<'a>) -> Self {
        Self {
            viewport,
            input,
            scheduler,
        }
    }

    /// Current viewport
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Render scheduler state
    pub fn scheduler(&self) -> &RenderScheduler<'a> {
        &self.scheduler
    }

    /// Full scans completed since start
    pub fn frames_rendered(&self) -> u32 {
        self.scheduler.frames_completed()
    }

    /// Initialize the display and clear it to the background color
    pub fn start<D: PixelSink + ?Sized>(&mut self, display: &mut D) -> Result<(), DisplayError> {
        display.init()?;
        display.fill(self.scheduler.palette().background)
    }

    /// Poll input, then render for up to `budget_us`
    pub fn run_one_tick<B, D, C>(
        &mut self,
        buttons: &B,
        display: &mut D,
        clock: &C,
        budget_us: u32,
    ) -> Result<TickReport, DisplayError>
    where
        B: ButtonSource + ?Sized,
        D: PixelSink + ?Sized,
        C: Clock + ?Sized,
    {
        let actions = self.input.poll(buttons, clock.now_ms(), &mut self.viewport);
        let slice = self
            .scheduler
            .render_slice(&self.viewport, display, clock, budget_us)?;

        Ok(TickReport { actions, slice })
    }
}
