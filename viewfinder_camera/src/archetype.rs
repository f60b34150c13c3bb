// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use viewfinder_spatial::PathEasing;

use crate::timing::{CubicBezier, TimingCurve};

/// The six named movement archetypes.
///
/// Each archetype carries a default duration and timing curve; the wrapper
/// functions in this crate apply them unless the caller overrides the
/// duration. [`Movement::MatchCut`] is special: its two phases are eased
/// independently (ease-out into the anchor, ease-in out of it), so its
/// default curve here only covers the single-position morph reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Straight interpolation between two framings.
    PanTilt,
    /// Scale-only change toward a larger scale.
    ZoomIn,
    /// Scale-only change toward a smaller scale.
    ZoomOut,
    /// Dolly-zoom counter-movement: the target scale is amplified before
    /// interpolation.
    DollyZoom,
    /// Focus-plane swap: a small scale bump around a fixed position.
    RackFocus,
    /// Two-phase transition through a caller-supplied anchor framing.
    MatchCut,
}

impl Movement {
    /// Default movement duration in milliseconds.
    #[must_use]
    pub const fn default_duration_ms(self) -> f64 {
        match self {
            Self::PanTilt => 800.0,
            Self::ZoomIn | Self::ZoomOut => 600.0,
            Self::DollyZoom => 1200.0,
            Self::RackFocus => 300.0,
            Self::MatchCut => 1000.0,
        }
    }

    /// Default timing curve for the archetype.
    #[must_use]
    pub const fn default_curve(self) -> TimingCurve {
        match self {
            Self::PanTilt | Self::ZoomOut => TimingCurve::Path(PathEasing::EaseOut),
            Self::ZoomIn => TimingCurve::Path(PathEasing::EaseIn),
            Self::DollyZoom => TimingCurve::Bezier(CubicBezier::DOLLY),
            Self::RackFocus | Self::MatchCut => TimingCurve::Path(PathEasing::EaseInOut),
        }
    }
}
