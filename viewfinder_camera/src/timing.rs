// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use viewfinder_easing::CameraEasing;
use viewfinder_spatial::PathEasing;

/// A cubic Bézier timing curve in the CSS `cubic-bezier(x1, y1, x2, y2)`
/// convention: implicit endpoints at `(0,0)` and `(1,1)`, progress on the x
/// axis, output on the y axis.
///
/// Evaluation solves `x(s) = t` for the curve parameter `s` with a few
/// Newton iterations (falling back to bisection when the derivative
/// collapses), then returns `y(s)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    /// X of the first control point, expected in `[0, 1]`.
    pub x1: f64,
    /// Y of the first control point.
    pub y1: f64,
    /// X of the second control point, expected in `[0, 1]`.
    pub x2: f64,
    /// Y of the second control point.
    pub y2: f64,
}

impl CubicBezier {
    /// The dolly-zoom house curve: a pronounced slow-in/slow-out.
    pub const DOLLY: Self = Self::new(0.645, 0.045, 0.355, 1.0);

    /// Creates a curve from its two control points.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Evaluates the timing curve at progress `t` in `[0, 1]`.
    #[must_use]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let s = self.solve_for_x(t);
        Self::axis(s, self.y1, self.y2)
    }

    /// One axis of the Bézier with endpoints pinned at 0 and 1.
    fn axis(s: f64, c1: f64, c2: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * c1 + 3.0 * inv * s * s * c2 + s * s * s
    }

    fn axis_derivative(s: f64, c1: f64, c2: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * c1 + 6.0 * inv * s * (c2 - c1) + 3.0 * s * s * (1.0 - c2)
    }

    fn solve_for_x(&self, x: f64) -> f64 {
        // Newton's method converges in a handful of steps for well-behaved
        // control points.
        let mut s = x;
        for _ in 0..8 {
            let err = Self::axis(s, self.x1, self.x2) - x;
            if err.abs() < 1e-7 {
                return s;
            }
            let d = Self::axis_derivative(s, self.x1, self.x2);
            if d.abs() < 1e-6 {
                break;
            }
            s -= err / d;
        }

        // Bisection fallback; x(s) is monotone for control x in [0, 1].
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        s = x;
        for _ in 0..32 {
            let mid = Self::axis(s, self.x1, self.x2);
            if (mid - x).abs() < 1e-7 {
                break;
            }
            if mid < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }
}

/// The timing curve applied when generating movement frames.
///
/// [`TimingCurve::Path`] covers the plain CSS-style curves,
/// [`TimingCurve::Bezier`] the tunable cubic curves, and
/// [`TimingCurve::Camera`] any photography curve from `viewfinder_easing`
/// (evaluated deterministically, variance off).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimingCurve {
    /// Quadratic CSS-style easing.
    Path(PathEasing),
    /// Cubic Bézier easing.
    Bezier(CubicBezier),
    /// Photography equipment easing from the catalog.
    Camera(CameraEasing),
}

impl TimingCurve {
    /// Applies the curve to a progress value; the result maps `0 → 0` and
    /// `1 → 1`.
    #[must_use]
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Self::Path(easing) => easing.apply(t),
            Self::Bezier(bezier) => bezier.apply(t),
            Self::Camera(easing) => easing.evaluate(t),
        }
    }
}

impl Default for TimingCurve {
    fn default() -> Self {
        Self::Path(PathEasing::EaseInOut)
    }
}
