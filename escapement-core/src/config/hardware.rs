//! Hardware configuration types
//!
//! Display extents and button timing for the target board.

/// Reference display width in pixels (landscape)
pub const DISPLAY_WIDTH: u16 = 240;

/// Reference display height in pixels (landscape)
pub const DISPLAY_HEIGHT: u16 = 135;

/// Number of pixels on the reference display
pub const DISPLAY_PIXELS: usize = DISPLAY_WIDTH as usize * DISPLAY_HEIGHT as usize;

/// Largest extent that still fits a `u8` screen coordinate
pub const MAX_EXTENT: u16 = 256;

/// Errors constructing a display geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GeometryError {
    /// Width or height is zero
    ZeroExtent,
    /// Width or height exceeds [`MAX_EXTENT`]
    TooLarge,
}

/// Fixed screen extents
///
/// Rows run top to bottom and columns left to right in the logical
/// (landscape) orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayGeometry {
    width: u16,
    height: u16,
}

impl DisplayGeometry {
    /// The 240x135 reference panel
    pub const REFERENCE: Self = Self {
        width: DISPLAY_WIDTH,
        height: DISPLAY_HEIGHT,
    };

    /// Create a geometry, validating both extents
    pub const fn new(width: u16, height: u16) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::ZeroExtent);
        }
        if width > MAX_EXTENT || height > MAX_EXTENT {
            return Err(GeometryError::TooLarge);
        }
        Ok(Self { width, height })
    }

    /// Number of columns
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total pixel count (`width * height`)
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check whether a row/column pair lies on the screen
    pub const fn contains(&self, row: u16, column: u16) -> bool {
        row < self.height && column < self.width
    }
}

impl Default for DisplayGeometry {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Button gesture timing in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureTiming {
    /// A level change must be stable this long before it counts
    pub debounce_ms: u32,
    /// Presses held at least this long are long clicks
    pub long_click_ms: u32,
    /// Window after a short release in which a second press makes a double click
    pub double_click_ms: u32,
}

impl GestureTiming {
    pub const DEFAULT: Self = Self {
        debounce_ms: 50,
        long_click_ms: 400,
        double_click_ms: 300,
    };
}

impl Default for GestureTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_geometry() {
        let geometry = DisplayGeometry::default();
        assert_eq!(geometry.width(), 240);
        assert_eq!(geometry.height(), 135);
        assert_eq!(geometry.pixel_count(), 32_400);
        assert_eq!(geometry.pixel_count(), DISPLAY_PIXELS);
    }

    #[test]
    fn test_geometry_validation() {
        assert_eq!(DisplayGeometry::new(0, 10), Err(GeometryError::ZeroExtent));
        assert_eq!(DisplayGeometry::new(10, 0), Err(GeometryError::ZeroExtent));
        assert_eq!(DisplayGeometry::new(257, 10), Err(GeometryError::TooLarge));
        assert!(DisplayGeometry::new(256, 256).is_ok());
    }

    #[test]
    fn test_contains() {
        let geometry = DisplayGeometry::new(4, 3).unwrap();
        assert!(geometry.contains(0, 0));
        assert!(geometry.contains(2, 3));
        assert!(!geometry.contains(3, 0));
        assert!(!geometry.contains(0, 4));
    }
}
