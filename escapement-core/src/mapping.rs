//! Coordinate mapping
//!
//! A *display index* enumerates every screen position in row-major scan
//! order (`row = index / width`, `column = index % width`). The bijection is
//! computed once into a [`ScanTable`] because the screen geometry never
//! changes. Mapping a screen position onto the plane depends on the current
//! [`Viewport`] and is recomputed per pixel.

use crate::config::DisplayGeometry;
use crate::viewport::Viewport;

/// A point on the mathematical plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared distance from the origin
    pub fn norm_sqr(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}

/// A pixel position on the logical (landscape) screen
///
/// Both coordinates fit a `u8` because [`DisplayGeometry`] caps extents
/// at 256.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenPosition {
    pub row: u8,
    pub column: u8,
}

impl ScreenPosition {
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }
}

/// Errors building a scan table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanTableError {
    /// Backing buffer length does not match the pixel count
    BufferSize { expected: usize, actual: usize },
}

/// Precomputed display index to screen position lookup
///
/// The table borrows its storage so the firmware can place the 32 400
/// entries in a static instead of on the stack.
#[derive(Debug)]
pub struct ScanTable<'a> {
    geometry: DisplayGeometry,
    positions: &'a [ScreenPosition],
}

impl<'a> ScanTable<'a> {
    /// Fill `buffer` with the row-major scan order for `geometry`
    pub fn build(
        geometry: DisplayGeometry,
        buffer: &'a mut [ScreenPosition],
    ) -> Result<Self, ScanTableError> {
        let expected = geometry.pixel_count();
        if buffer.len() != expected {
            return Err(ScanTableError::BufferSize {
                expected,
                actual: buffer.len(),
            });
        }

        let width = geometry.width() as usize;
        for (index, slot) in buffer.iter_mut().enumerate() {
            // Extents are capped at 256, so both fit u8
            *slot = ScreenPosition::new((index / width) as u8, (index % width) as u8);
        }

        Ok(Self {
            geometry,
            positions: buffer,
        })
    }

    /// Screen geometry the table was built for
    pub fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    /// Number of display indices
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Look up the screen position of a display index
    ///
    /// `index` must be below [`len`](Self::len).
    pub fn to_screen(&self, index: usize) -> ScreenPosition {
        self.positions[index]
    }
}

/// Map a screen position onto the plane
///
/// Rows and columns are deliberately swapped and the x axis negated so the
/// landscape panel shows the plane in its conventional orientation:
///
/// ```text
/// x = -(center.x + spacing * (width / 2 - column))
/// y =   center.y + spacing * (height / 2 - row)
/// ```
pub fn to_plane(
    position: ScreenPosition,
    viewport: &Viewport,
    geometry: DisplayGeometry,
) -> PlanePoint {
    let center = viewport.center();
    let spacing = viewport.pixel_spacing();
    let half_width = geometry.width() as f64 / 2.0;
    let half_height = geometry.height() as f64 / 2.0;

    PlanePoint {
        x: -(center.x + spacing * (half_width - position.column as f64)),
        y: center.y + spacing * (half_height - position.row as f64),
    }
}
