//! Escape-time evaluation
//!
//! Iterates `z <- z*z + c` until `|z|^2 >= 4` or the iteration budget runs
//! out. The Mandelbrot set uses `z0 = 0` and tests `c`.

use crate::mapping::PlanePoint;

/// Squared radius beyond which the orbit is known to diverge
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// Outcome of evaluating one point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// Never escaped within the budget
    Bounded,
    /// Escaped after the given number of steps
    Escaped(u32),
}

impl Verdict {
    /// Classify an iteration count against the budget it was computed with
    pub fn from_count(count: u32, max_iterations: u32) -> Self {
        if count == max_iterations {
            Verdict::Bounded
        } else {
            Verdict::Escaped(count)
        }
    }

    pub fn is_bounded(&self) -> bool {
        matches!(self, Verdict::Bounded)
    }
}

/// Count iterations until escape, capped at `max_iterations`
///
/// The result is always in `0..=max_iterations`; a result equal to
/// `max_iterations` means the orbit stayed bounded.
pub fn iterate(z0: PlanePoint, c: PlanePoint, max_iterations: u32) -> u32 {
    let mut z = z0;
    let mut iterations = 0;

    while z.norm_sqr() < ESCAPE_RADIUS_SQR && iterations < max_iterations {
        z = PlanePoint {
            x: z.x * z.x - z.y * z.y + c.x,
            y: 2.0 * z.x * z.y + c.y,
        };
        iterations += 1;
    }

    iterations
}

/// Evaluate `c` for membership in the Mandelbrot set
pub fn mandelbrot(c: PlanePoint, max_iterations: u32) -> Verdict {
    Verdict::from_count(iterate(PlanePoint::ORIGIN, c, max_iterations), max_iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_origin_never_escapes() {
        for n in [0, 1, 2, 20, 1000] {
            assert_eq!(iterate(PlanePoint::ORIGIN, PlanePoint::ORIGIN, n), n);
        }
    }

    #[test]
    fn test_two_escapes_immediately() {
        let c = PlanePoint::new(2.0, 0.0);
        for n in [2, 3, 20, 1000] {
            assert_eq!(iterate(PlanePoint::ORIGIN, c, n), 1);
        }
    }

    #[test]
    fn test_start_outside_radius() {
        let z0 = PlanePoint::new(3.0, 0.0);
        assert_eq!(iterate(z0, PlanePoint::ORIGIN, 50), 0);
    }

    #[test]
    fn test_known_members() {
        // -1 cycles between -1 and 0
        assert!(mandelbrot(PlanePoint::new(-1.0, 0.0), 500).is_bounded());
        // Edge of the main cardioid
        assert!(mandelbrot(PlanePoint::new(0.25, 0.0), 500).is_bounded());
        assert!(!mandelbrot(PlanePoint::new(0.5, 0.5), 500).is_bounded());
        assert!(!mandelbrot(PlanePoint::new(-2.5, 0.0), 500).is_bounded());
    }

    #[test]
    fn test_verdict_classification() {
        assert_eq!(Verdict::from_count(20, 20), Verdict::Bounded);
        assert_eq!(Verdict::from_count(3, 20), Verdict::Escaped(3));
        // A zero budget degenerates to "bounded"
        assert_eq!(mandelbrot(PlanePoint::new(10.0, 10.0), 0), Verdict::Bounded);
    }

    proptest! {
        #[test]
        fn prop_result_within_budget(
            zx in -3.0f64..3.0, zy in -3.0f64..3.0,
            cx in -3.0f64..3.0, cy in -3.0f64..3.0,
            n in 0u32..300,
        ) {
            let count = iterate(PlanePoint::new(zx, zy), PlanePoint::new(cx, cy), n);
            prop_assert!(count <= n);
        }

        #[test]
        fn prop_more_budget_never_escapes_earlier(
            cx in -2.5f64..1.5, cy in -1.5f64..1.5,
            n in 0u32..200, extra in 0u32..200,
        ) {
            let c = PlanePoint::new(cx, cy);
            let short = iterate(PlanePoint::ORIGIN, c, n);
            let long = iterate(PlanePoint::ORIGIN, c, n + extra);
            prop_assert!(short <= long);
        }
    }
}
