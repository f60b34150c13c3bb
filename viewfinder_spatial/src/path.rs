// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::position::CanvasPosition;

/// Default number of interpolation steps for [`transition_path`].
pub const DEFAULT_TRANSITION_STEPS: usize = 60;

/// Weighted distance at which [`estimate_duration`] saturates to its maximum.
const REFERENCE_DISTANCE: f64 = 1000.0;

/// Default base duration for [`estimate_duration`], in milliseconds.
const DEFAULT_BASE_MS: f64 = 600.0;

/// Default maximum duration for [`estimate_duration`], in milliseconds.
const DEFAULT_MAX_MS: f64 = 1200.0;

/// Progress-shaping curves for generic transition paths.
///
/// These are the plain quadratic CSS-style curves used by
/// [`transition_path`]. The cinematic equipment-simulation curves live in
/// `viewfinder_easing`; this enum exists so the spatial crate stays free of
/// that dependency for simple paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PathEasing {
    /// Constant-velocity interpolation.
    Linear,
    /// Quadratic acceleration from rest.
    EaseIn,
    /// Quadratic deceleration to rest.
    EaseOut,
    /// Quadratic acceleration then deceleration.
    #[default]
    EaseInOut,
}

impl PathEasing {
    /// Applies the curve to a progress value in `[0, 1]`.
    ///
    /// Inputs outside the unit interval are clamped first, so the result is
    /// always in `[0, 1]` with `apply(0) == 0` and `apply(1) == 1`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Produces `steps + 1` positions from `from` to `to` inclusive, spacing
/// progress evenly and shaping it with `easing`.
///
/// Both endpoints are returned exactly. This is the generic building block
/// that `viewfinder_camera` specializes per movement archetype.
#[must_use]
pub fn transition_path(
    from: CanvasPosition,
    to: CanvasPosition,
    steps: usize,
    easing: PathEasing,
) -> Vec<CanvasPosition> {
    let steps = steps.max(1);
    let mut path = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        path.push(from.lerp(to, easing.apply(t)));
    }
    path
}

/// Estimates a movement duration proportional to the weighted distance
/// between the endpoints, using the default 600–1200 ms window.
#[must_use]
pub fn estimate_duration(from: CanvasPosition, to: CanvasPosition) -> f64 {
    estimate_duration_with(from, to, DEFAULT_BASE_MS, DEFAULT_MAX_MS)
}

/// Estimates a movement duration in milliseconds, blending linearly from
/// `base_ms` (zero distance) to `max_ms` (at or beyond the reference
/// distance of 1000 weighted units).
///
/// Used as the default when a caller does not specify an explicit duration.
#[must_use]
pub fn estimate_duration_with(
    from: CanvasPosition,
    to: CanvasPosition,
    base_ms: f64,
    max_ms: f64,
) -> f64 {
    let distance = from.distance_to(to);
    let fraction = (distance / REFERENCE_DISTANCE).clamp(0.0, 1.0);
    base_ms + (max_ms - base_ms) * fraction
}
