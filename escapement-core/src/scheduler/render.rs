//! Time-sliced renderer
//!
//! Each slice renders pixels in ascending display-index order starting at
//! the persistent cursor, checking the clock after every pixel and
//! returning once the budget is used up. A slice therefore always renders
//! at least one pixel and may overrun by one pixel's evaluation.
//!
//! The cursor is not reset when the viewport changes: pixels after the
//! change use the new viewport while older pixels stay on screen until the
//! scan wraps around to them.

use crate::config::Palette;
use crate::escape::{mandelbrot, Verdict};
use crate::mapping::{to_plane, ScanTable};
use crate::traits::{Clock, Color, DisplayError, PixelSink};
use crate::viewport::Viewport;

use super::cursor::RenderCursor;

/// Work done by one slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SliceReport {
    /// Pixels submitted to the display
    pub pixels: u32,
    /// Times the cursor wrapped back to index 0
    pub frames_completed: u32,
}

/// Incremental renderer state
#[derive(Debug)]
pub struct RenderScheduler<'a> {
    table: ScanTable<'a>,
    cursor: RenderCursor,
    palette: Palette,
    frames_completed: u32,
}

impl<'a> RenderScheduler<'a> {
    /// Create a scheduler starting at display index 0
    pub fn new(table: ScanTable<'a>, palette: Palette) -> Self {
        let cursor = RenderCursor::new(table.len());
        Self {
            table,
            cursor,
            palette,
            frames_completed: 0,
        }
    }

    /// Next display index to render
    pub fn cursor(&self) -> RenderCursor {
        self.cursor
    }

    /// Cursor wraps since creation, including slices that ended in an error
    pub fn frames_completed(&self) -> u32 {
        self.frames_completed
    }

    /// Colors in use
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Color for an evaluator verdict
    pub fn color_for(&self, verdict: Verdict) -> Color {
        match verdict {
            Verdict::Bounded => self.palette.bounded,
            Verdict::Escaped(_) => self.palette.escaped,
        }
    }

    /// Render pixels until `budget_us` has elapsed
    pub fn render_slice<D, C>(
        &mut self,
        viewport: &Viewport,
        display: &mut D,
        clock: &C,
        budget_us: u32,
    ) -> Result<SliceReport, DisplayError>
    where
        D: PixelSink + ?Sized,
        C: Clock + ?Sized,
    {
        let start = clock.now_us();
        let mut report = SliceReport::default();

        loop {
            if self.render_next(viewport, display)? {
                report.frames_completed += 1;
            }
            report.pixels += 1;

            if clock.now_us().saturating_sub(start) >= budget_us as u64 {
                break;
            }
        }

        Ok(report)
    }

    /// Render the pixel under the cursor and advance
    ///
    /// Returns `true` when the cursor wrapped. On a display error the
    /// cursor stays put so the same pixel is retried next time.
    pub fn render_next<D>(
        &mut self,
        viewport: &Viewport,
        display: &mut D,
    ) -> Result<bool, DisplayError>
    where
        D: PixelSink + ?Sized,
    {
        let position = self.table.to_screen(self.cursor.index());
        let c = to_plane(position, viewport, self.table.geometry());
        let color = self.color_for(mandelbrot(c, viewport.iteration_budget()));

        display.draw_pixel(position.row as u16, position.column as u16, color)?;
        let wrapped = self.cursor.advance();
        if wrapped {
            self.frames_completed = self.frames_completed.wrapping_add(1);
        }
        Ok(wrapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayGeometry, PanZoomSteps, ViewportDefaults, ViewportLimits};
    use crate::input::ViewportActions;
    use crate::mapping::{PlanePoint, ScreenPosition};
    use crate::testing::{RecordingDisplay, SteppingClock};

    fn small_table(buffer: &mut [ScreenPosition; 16]) -> ScanTable<'_> {
        ScanTable::build(DisplayGeometry::new(4, 4).unwrap(), buffer).unwrap()
    }

    /// Unit spacing so the 4x4 screen spans roughly [-2, 2] on both axes
    fn unit_viewport() -> Viewport {
        let defaults = ViewportDefaults {
            center: PlanePoint::ORIGIN,
            pixel_spacing: 1.0,
            iteration_budget: 50,
        };
        let limits = ViewportLimits {
            max_spacing: 4.0,
            ..ViewportLimits::DEFAULT
        };
        Viewport::new(defaults, limits, PanZoomSteps::DEFAULT)
    }

    #[test]
    fn test_slice_stops_when_budget_spent() {
        let mut buffer = [ScreenPosition::ORIGIN; 16];
        let mut scheduler = RenderScheduler::new(small_table(&mut buffer), Palette::DEFAULT);
        let mut display = RecordingDisplay::default();
        let clock = SteppingClock::new(0, 1_000);

        let report = scheduler
            .render_slice(&unit_viewport(), &mut display, &clock, 5_000)
            .unwrap();

        assert_eq!(report.pixels, 5);
        assert_eq!(report.frames_completed, 0);
        assert_eq!(scheduler.cursor().index(), 5);
    }

    #[test]
    fn test_slice_renders_at_least_one_pixel() {
        let mut buffer = [ScreenPosition::ORIGIN; 16];
        let mut scheduler = RenderScheduler::new(small_table(&mut buffer), Palette::DEFAULT);
        let mut display = RecordingDisplay::default();
        let clock = SteppingClock::new(0, 0);

        let report = scheduler
            .render_slice(&unit_viewport(), &mut display, &clock, 0)
            .unwrap();
        assert_eq!(report.pixels, 1);
        assert_eq!(display.pixels.len(), 1);
    }

    #[test]
    fn test_pixels_in_scan_order_with_wrap() {
        let mut buffer = [ScreenPosition::ORIGIN; 16];
        let mut scheduler = RenderScheduler::new(small_table(&mut buffer), Palette::DEFAULT);
        let mut display = RecordingDisplay::default();
        let clock = SteppingClock::new(0, 1);

        let report = scheduler
            .render_slice(&unit_viewport(), &mut display, &clock, 40)
            .unwrap();

        assert_eq!(report.pixels, 40);
        assert_eq!(report.frames_completed, 2);
        assert_eq!(scheduler.cursor().index(), 8);
        for (i, &(row, column, _)) in display.pixels.iter().enumerate() {
            assert_eq!(row as usize, (i % 16) / 4);
            assert_eq!(column as usize, i % 4);
        }
    }

    #[test]
    fn test_colors_follow_verdict() {
        let mut buffer = [ScreenPosition::ORIGIN; 16];
        let mut scheduler = RenderScheduler::new(small_table(&mut buffer), Palette::DEFAULT);
        let mut display = RecordingDisplay::default();
        let viewport = unit_viewport();

        for _ in 0..16 {
            scheduler.render_next(&viewport, &mut display).unwrap();
        }

        // (0, 0) maps to (-2, 2), far outside the set
        assert_eq!(display.pixels[0], (0, 0, Palette::DEFAULT.escaped));
        // (2, 2) maps to the origin
        assert_eq!(display.pixels[10], (2, 2, Palette::DEFAULT.bounded));
    }

    #[test]
    fn test_viewport_change_applies_from_next_pixel() {
        let mut buffer = [ScreenPosition::ORIGIN; 16];
        let mut scheduler = RenderScheduler::new(small_table(&mut buffer), Palette::DEFAULT);
        let mut display = RecordingDisplay::default();
        let mut viewport = unit_viewport();

        for _ in 0..10 {
            scheduler.render_next(&viewport, &mut display).unwrap();
        }
        assert_eq!(display.pixels[9].2, Palette::DEFAULT.bounded);

        // Move the origin off screen mid-scan; no cursor reset
        viewport.pan_right();
        scheduler.render_next(&viewport, &mut display).unwrap();
        assert_eq!(scheduler.cursor().index(), 11);
        assert_eq!(display.pixels[10], (2, 2, Palette::DEFAULT.escaped));
    }

    #[test]
    fn test_display_error_keeps_cursor() {
        let mut buffer = [ScreenPosition::ORIGIN; 16];
        let mut scheduler = RenderScheduler::new(small_table(&mut buffer), Palette::DEFAULT);
        let mut display = RecordingDisplay {
            fail_after: Some(3),
            ..Default::default()
        };
        let clock = SteppingClock::new(0, 1);

        let err = scheduler
            .render_slice(&unit_viewport(), &mut display, &clock, 100)
            .unwrap_err();
        assert_eq!(err, DisplayError::Communication);
        assert_eq!(scheduler.cursor().index(), 3);
    }

    #[test]
    fn test_wrap_before_error_is_counted() {
        let mut buffer = [ScreenPosition::ORIGIN; 16];
        let mut scheduler = RenderScheduler::new(small_table(&mut buffer), Palette::DEFAULT);
        let mut display = RecordingDisplay {
            fail_after: Some(18),
            ..Default::default()
        };
        let clock = SteppingClock::new(0, 1);

        assert!(scheduler
            .render_slice(&unit_viewport(), &mut display, &clock, 1_000)
            .is_err());
        assert_eq!(scheduler.cursor().index(), 2);
        assert_eq!(scheduler.frames_completed(), 1);
    }
}
