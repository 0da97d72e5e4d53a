//! Viewport state
//!
//! The viewport maps the fixed screen onto the plane: `center` is the
//! plane point shown at the middle of the screen, `pixel_spacing` is the
//! plane distance between neighbouring pixels, and `iteration_budget`
//! bounds the evaluator work per pixel. It is mutated only through
//! [`ViewportActions`].

use crate::config::{PanZoomSteps, ViewportDefaults, ViewportLimits};
use crate::input::ViewportActions;
use crate::mapping::PlanePoint;

/// Current pan/zoom state
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Viewport {
    center: PlanePoint,
    pixel_spacing: f64,
    iteration_budget: u32,
    limits: ViewportLimits,
    steps: PanZoomSteps,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            ViewportDefaults::DEFAULT,
            ViewportLimits::DEFAULT,
            PanZoomSteps::DEFAULT,
        )
    }
}

impl Viewport {
    /// Create a viewport at `defaults`
    ///
    /// The starting spacing and budget are clamped into `limits`.
    pub fn new(defaults: ViewportDefaults, limits: ViewportLimits, steps: PanZoomSteps) -> Self {
        Self {
            center: defaults.center,
            pixel_spacing: limits.clamp_spacing(defaults.pixel_spacing),
            iteration_budget: limits.clamp_iterations(defaults.iteration_budget),
            limits,
            steps,
        }
    }

    /// Plane point at the screen center
    pub fn center(&self) -> PlanePoint {
        self.center
    }

    /// Plane distance between adjacent pixels
    pub fn pixel_spacing(&self) -> f64 {
        self.pixel_spacing
    }

    /// Evaluator iterations per pixel
    pub fn iteration_budget(&self) -> u32 {
        self.iteration_budget
    }

    /// Shift the center by a number of pixel widths along each axis
    pub fn pan_by(&mut self, dx_pixels: f64, dy_pixels: f64) {
        self.center.x += self.pixel_spacing * dx_pixels;
        self.center.y += self.pixel_spacing * dy_pixels;
    }

    /// Zoom in by one step
    ///
    /// Returns `false` and leaves the viewport untouched when the new
    /// spacing would fall below the limit.
    pub fn try_zoom_in(&mut self) -> bool {
        let spacing = self.pixel_spacing * self.steps.zoom_factor;
        let budget = self.iteration_budget as f64 * self.steps.iteration_scale;
        self.apply_zoom(spacing, budget)
    }

    /// Zoom out by one step
    ///
    /// Returns `false` and leaves the viewport untouched when the new
    /// spacing would exceed the limit.
    pub fn try_zoom_out(&mut self) -> bool {
        let spacing = self.pixel_spacing / self.steps.zoom_factor;
        let budget = self.iteration_budget as f64 / self.steps.iteration_scale;
        self.apply_zoom(spacing, budget)
    }

    fn apply_zoom(&mut self, spacing: f64, budget: f64) -> bool {
        if !self.limits.spacing_allowed(spacing) {
            return false;
        }
        self.pixel_spacing = spacing;
        // `as` truncates toward zero and saturates
        self.iteration_budget = self.limits.clamp_iterations(budget as u32);
        true
    }
}

impl ViewportActions for Viewport {
    fn pan_up(&mut self) {
        self.pan_by(0.0, -self.steps.pan_pixels);
    }

    fn pan_down(&mut self) {
        self.pan_by(0.0, self.steps.pan_pixels);
    }

    fn pan_left(&mut self) {
        self.pan_by(-self.steps.pan_pixels, 0.0);
    }

    fn pan_right(&mut self) {
        self.pan_by(self.steps.pan_pixels, 0.0);
    }

    fn zoom_in(&mut self) {
        self.try_zoom_in();
    }

    fn zoom_out(&mut self) {
        self.try_zoom_out();
    }
}
