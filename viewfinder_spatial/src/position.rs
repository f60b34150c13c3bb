// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Weight applied to scale differences in the canvas distance metric.
///
/// A scale delta of `0.01` contributes as much as one canvas unit of spatial
/// distance, which keeps zoom differences commensurate with pan differences
/// when ranking anchors by proximity.
pub const SCALE_DISTANCE_WEIGHT: f64 = 100.0;

/// A camera framing on the abstract 2D canvas plane.
///
/// `point` is the canvas-space center of the framing and `scale` is a uniform
/// zoom factor where `1.0` means natural size. The core math treats `scale`
/// as an unconstrained positive value; callers that need the documented sane
/// range should clamp with [`CanvasPosition::clamp`] and
/// [`CanvasBounds::DEFAULT`] before applying the position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasPosition {
    /// Canvas-space center of the framing.
    pub point: Point,
    /// Uniform zoom factor; `1.0` is natural size. Expected positive.
    pub scale: f64,
}

impl CanvasPosition {
    /// The neutral framing: origin at natural size.
    ///
    /// This is the documented degradation target for unknown-section lookups.
    pub const NEUTRAL: Self = Self {
        point: Point::ZERO,
        scale: 1.0,
    };

    /// Creates a position from raw coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self {
            point: Point::new(x, y),
            scale,
        }
    }

    /// Linearly interpolates toward `other`, component-wise.
    ///
    /// `t` is not clamped; `0.0` returns `self` and `1.0` returns `other`
    /// exactly.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        Self {
            point: self.point.lerp(other.point, t),
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }

    /// Weighted distance to `other`: Euclidean in x/y plus
    /// [`SCALE_DISTANCE_WEIGHT`] times the absolute scale difference.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        let spatial = self.point.distance(other.point);
        spatial + (self.scale - other.scale).abs() * SCALE_DISTANCE_WEIGHT
    }

    /// Clamps each component into the given bounds.
    #[must_use]
    pub fn clamp(self, bounds: &CanvasBounds) -> Self {
        Self {
            point: Point::new(
                self.point.x.clamp(bounds.rect.x0, bounds.rect.x1),
                self.point.y.clamp(bounds.rect.y0, bounds.rect.y1),
            ),
            scale: self.scale.clamp(bounds.scale_min, bounds.scale_max),
        }
    }
}

impl Default for CanvasPosition {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Per-axis clamp box for canvas positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasBounds {
    /// Allowed x/y region.
    pub rect: Rect,
    /// Minimum zoom factor.
    pub scale_min: f64,
    /// Maximum zoom factor.
    pub scale_max: f64,
}

impl CanvasBounds {
    /// The documented spatial box: x∈[-300,300], y∈[-200,200], scale∈[0.5,3.0].
    pub const DEFAULT: Self = Self {
        rect: Rect::new(-300.0, -200.0, 300.0, 200.0),
        scale_min: 0.5,
        scale_max: 3.0,
    };
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
