// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use viewfinder_spatial::PathEasing;

use crate::frames::FrameOptions;
use crate::timing::TimingCurve;

/// Complexity score above which fps drops to 60% of the base rate.
const HEAVY_COMPLEXITY: f64 = 500.0;

/// Complexity score above which fps drops to 80% of the base rate.
const MODERATE_COMPLEXITY: f64 = 300.0;

/// Memory below which a device is treated as constrained, in megabytes.
const LOW_MEMORY_MB: u32 = 2048;

/// Frame-rate ceiling applied on constrained devices.
const CONSTRAINED_FPS: f64 = 30.0;

/// Coarse CPU capability class, as hinted by the host environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CpuClass {
    /// Few cores or a known-slow profile.
    Low,
    /// Typical hardware.
    Medium,
    /// Plenty of headroom.
    High,
}

/// Host device capabilities relevant to movement generation.
///
/// All hints are best-effort; hosts without a signal should pass the
/// defaults (medium CPU, 4 GB, GPU present), which leave options untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceCapabilities {
    /// Coarse CPU class.
    pub cpu: CpuClass,
    /// Device memory in megabytes.
    pub memory_mb: u32,
    /// Whether GPU-accelerated compositing is available.
    pub has_gpu: bool,
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self {
            cpu: CpuClass::Medium,
            memory_mb: 4096,
            has_gpu: true,
        }
    }
}

/// Adjusts frame options for the device the host reports.
///
/// Low-CPU or low-memory devices get their target fps capped at 30; without
/// a GPU, Bézier timing (which the presentation layer composites on the
/// GPU path) is downgraded to plain ease-out. Pure function over its inputs
/// and idempotent: applying it twice yields the same options as once.
#[must_use]
pub fn optimize_for_device(options: FrameOptions, caps: &DeviceCapabilities) -> FrameOptions {
    let mut adjusted = options;
    if caps.cpu == CpuClass::Low || caps.memory_mb < LOW_MEMORY_MB {
        adjusted.fps = adjusted.fps.min(CONSTRAINED_FPS);
    }
    if !caps.has_gpu {
        if let TimingCurve::Bezier(_) = adjusted.curve {
            adjusted.curve = TimingCurve::Path(PathEasing::EaseOut);
        }
    }
    adjusted
}

/// Estimates a sensible frame rate for a movement of the given size.
///
/// Complexity is `distance + 100·|scale_change|`; crossing 500 drops the
/// rate to 60% of `base_fps`, crossing 300 to 80%. Small movements keep the
/// full base rate.
#[must_use]
pub fn estimate_optimal_fps(distance: f64, scale_change: f64, base_fps: f64) -> f64 {
    let complexity = distance.abs() + 100.0 * scale_change.abs();
    if complexity > HEAVY_COMPLEXITY {
        base_fps * 0.6
    } else if complexity > MODERATE_COMPLEXITY {
        base_fps * 0.8
    } else {
        base_fps
    }
}
