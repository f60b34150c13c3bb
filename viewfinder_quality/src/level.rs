// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use viewfinder_easing::CameraEasing;

/// Discrete rendering quality, totally ordered by capability.
///
/// `Minimal` is the floor the manager degrades to under pressure;
/// `Highest` is the default on capable hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QualityLevel {
    /// Bare navigation: no optional effects, shortest animations.
    Minimal,
    /// Reduced: opacity transitions only.
    Low,
    /// Balanced: opacity and scale effects, no blur or shadows.
    Medium,
    /// Near-full: everything except shadows.
    High,
    /// Full visual treatment.
    Highest,
}

impl QualityLevel {
    /// All levels in ascending capability order.
    pub const ALL: [Self; 5] = [
        Self::Minimal,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Highest,
    ];

    /// Maps a measured frame rate to the level it supports.
    ///
    /// Thresholds: below 20 fps → `Minimal`, below 30 → `Low`, below 45 →
    /// `Medium`, below 55 → `High`, otherwise `Highest`.
    #[must_use]
    pub fn from_fps(fps: f64) -> Self {
        if fps < 20.0 {
            Self::Minimal
        } else if fps < 30.0 {
            Self::Low
        } else if fps < 45.0 {
            Self::Medium
        } else if fps < 55.0 {
            Self::High
        } else {
            Self::Highest
        }
    }

    /// Returns the static configuration for this level.
    #[must_use]
    pub const fn config(self) -> &'static QualityConfig {
        match self {
            Self::Minimal => &MINIMAL,
            Self::Low => &LOW,
            Self::Medium => &MEDIUM,
            Self::High => &HIGH,
            Self::Highest => &HIGHEST,
        }
    }
}

/// Optional visual effects gated by quality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Backdrop/filter blur.
    Blur,
    /// Opacity fades.
    Opacity,
    /// Scale transitions.
    Scale,
    /// Drop shadows.
    Shadows,
}

/// Per-level configuration read by every animation-producing component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualityConfig {
    /// Baseline animation duration in milliseconds; archetype multipliers
    /// apply on top of this.
    pub base_duration_ms: f64,
    /// Easing character used for quality-managed transitions.
    pub easing: CameraEasing,
    /// Blur effects enabled.
    pub enable_blur: bool,
    /// Opacity effects enabled.
    pub enable_opacity: bool,
    /// Scale effects enabled.
    pub enable_scale: bool,
    /// Shadow effects enabled.
    pub enable_shadows: bool,
    /// Hint the presentation layer to keep GPU-accelerated compositing on.
    pub use_gpu: bool,
    /// Ceiling on simultaneously running animations.
    pub max_concurrent_animations: usize,
    /// Frame rate this level is budgeted for.
    pub target_fps: f64,
    /// Frame-time budget in milliseconds.
    pub max_frame_time_ms: f64,
}

impl QualityConfig {
    /// Whether a given optional effect is enabled at this level.
    #[must_use]
    pub const fn effect_enabled(&self, effect: Effect) -> bool {
        match effect {
            Effect::Blur => self.enable_blur,
            Effect::Opacity => self.enable_opacity,
            Effect::Scale => self.enable_scale,
            Effect::Shadows => self.enable_shadows,
        }
    }
}

static HIGHEST: QualityConfig = QualityConfig {
    base_duration_ms: 800.0,
    easing: CameraEasing::CraneSweep,
    enable_blur: true,
    enable_opacity: true,
    enable_scale: true,
    enable_shadows: true,
    use_gpu: true,
    max_concurrent_animations: 6,
    target_fps: 60.0,
    max_frame_time_ms: 16.7,
};

static HIGH: QualityConfig = QualityConfig {
    base_duration_ms: 700.0,
    easing: CameraEasing::GimbalStabilized,
    enable_blur: true,
    enable_opacity: true,
    enable_scale: true,
    enable_shadows: false,
    use_gpu: true,
    max_concurrent_animations: 5,
    target_fps: 60.0,
    max_frame_time_ms: 18.0,
};

static MEDIUM: QualityConfig = QualityConfig {
    base_duration_ms: 500.0,
    easing: CameraEasing::TripodFluid,
    enable_blur: false,
    enable_opacity: true,
    enable_scale: true,
    enable_shadows: false,
    use_gpu: true,
    max_concurrent_animations: 3,
    target_fps: 45.0,
    max_frame_time_ms: 22.0,
};

static LOW: QualityConfig = QualityConfig {
    base_duration_ms: 350.0,
    easing: CameraEasing::TripodFluid,
    enable_blur: false,
    enable_opacity: true,
    enable_scale: false,
    enable_shadows: false,
    use_gpu: true,
    max_concurrent_animations: 2,
    target_fps: 30.0,
    max_frame_time_ms: 33.0,
};

static MINIMAL: QualityConfig = QualityConfig {
    base_duration_ms: 200.0,
    easing: CameraEasing::SliderMechanical,
    enable_blur: false,
    enable_opacity: false,
    enable_scale: false,
    enable_shadows: false,
    use_gpu: false,
    max_concurrent_animations: 1,
    target_fps: 24.0,
    max_frame_time_ms: 42.0,
};
