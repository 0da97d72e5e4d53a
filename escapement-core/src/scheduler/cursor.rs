//! Persistent scan cursor

/// Next display index to render
///
/// Wraps modulo the pixel count, so it always holds a valid index and
/// produces an endless repeating scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderCursor {
    index: usize,
    total: usize,
}

impl RenderCursor {
    /// Create a cursor at index 0 over `total` pixels
    ///
    /// `total` must be non-zero.
    pub const fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    /// Current display index
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Step to the next index
    ///
    /// Returns `true` when the cursor wrapped back to 0.
    pub fn advance(&mut self) -> bool {
        self.index += 1;
        if self.index >= self.total {
            self.index = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DISPLAY_PIXELS;

    #[test]
    fn test_full_scan_returns_to_start() {
        let mut cursor = RenderCursor::new(DISPLAY_PIXELS);
        let mut wraps = 0;
        for _ in 0..DISPLAY_PIXELS {
            assert!(cursor.index() < DISPLAY_PIXELS);
            if cursor.advance() {
                wraps += 1;
            }
        }
        assert_eq!(cursor.index(), 0);
        assert_eq!(wraps, 1);
    }

    #[test]
    fn test_wrap_only_at_end() {
        let mut cursor = RenderCursor::new(3);
        assert!(!cursor.advance());
        assert!(!cursor.advance());
        assert!(cursor.advance());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_single_pixel_always_wraps() {
        let mut cursor = RenderCursor::new(1);
        assert!(cursor.advance());
        assert!(cursor.advance());
        assert_eq!(cursor.index(), 0);
    }
}
