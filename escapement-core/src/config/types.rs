//! Viewport and render configuration types

use crate::mapping::PlanePoint;
use crate::traits::Color;

/// Initial viewport values
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ViewportDefaults {
    /// Plane point shown at the screen center
    pub center: PlanePoint,
    /// Plane distance between adjacent pixels
    pub pixel_spacing: f64,
    /// Evaluator iteration budget per pixel
    pub iteration_budget: u32,
}

impl ViewportDefaults {
    pub const DEFAULT: Self = Self {
        center: PlanePoint::ORIGIN,
        pixel_spacing: 0.015,
        iteration_budget: 20,
    };
}

impl Default for ViewportDefaults {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Bounds applied to viewport mutations
///
/// A zoom that would move the spacing outside `[min_spacing, max_spacing]`
/// is refused. Iteration budgets are clamped into
/// `[min_iterations, max_iterations]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ViewportLimits {
    pub min_spacing: f64,
    pub max_spacing: f64,
    pub min_iterations: u32,
    pub max_iterations: u32,
}

impl ViewportLimits {
    pub const DEFAULT: Self = Self {
        min_spacing: 1e-13,
        max_spacing: 0.25,
        min_iterations: 8,
        max_iterations: 1000,
    };

    /// Clamp an iteration budget into range
    ///
    /// `max_iterations` wins if the bounds are inverted.
    pub fn clamp_iterations(&self, budget: u32) -> u32 {
        budget.max(self.min_iterations).min(self.max_iterations)
    }

    /// Clamp a pixel spacing into range
    ///
    /// `max_spacing` wins if the bounds are inverted. NaN is passed through.
    pub fn clamp_spacing(&self, spacing: f64) -> f64 {
        spacing.max(self.min_spacing).min(self.max_spacing)
    }

    /// Check whether a spacing is allowed
    pub fn spacing_allowed(&self, spacing: f64) -> bool {
        spacing >= self.min_spacing && spacing <= self.max_spacing
    }
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Pan and zoom step sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanZoomSteps {
    /// Pan distance per gesture, in pixel widths
    pub pan_pixels: f64,
    /// Spacing multiplier for zoom in (zoom out divides by it)
    pub zoom_factor: f64,
    /// Iteration budget multiplier for zoom in (zoom out divides by it)
    pub iteration_scale: f64,
}

impl PanZoomSteps {
    pub const DEFAULT: Self = Self {
        pan_pixels: 50.0,
        zoom_factor: 0.5,
        iteration_scale: 1.3,
    };
}

impl Default for PanZoomSteps {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The two colors used for the binary inside/outside rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Palette {
    /// Points that stayed bounded for the whole budget
    pub bounded: Color,
    /// Points that escaped
    pub escaped: Color,
    /// Screen fill at startup
    pub background: Color,
}

impl Palette {
    pub const DEFAULT: Self = Self {
        bounded: Color::BLACK,
        escaped: Color::WHITE,
        background: Color::BLACK,
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Render scheduler settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderConfig {
    /// Wall-clock budget for one render slice, in microseconds
    pub slice_budget_us: u32,
}

impl RenderConfig {
    pub const DEFAULT: Self = Self {
        slice_budget_us: 5_000,
    };
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
