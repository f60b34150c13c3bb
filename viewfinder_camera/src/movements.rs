// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

use kurbo::Point;
use viewfinder_spatial::{CanvasPosition, PathEasing};

use crate::archetype::Movement;
use crate::frames::{DEFAULT_FPS, FrameOptions, FrameSequence, compute_frames, compute_frames_with};
use crate::timing::TimingCurve;

/// Progress value at which a match-cut passes through its anchor framing.
pub const MATCH_CUT_PHASE_SPLIT: f64 = 0.6;

/// Default scale bump intensity for rack-focus movements.
const DEFAULT_FOCUS_INTENSITY: f64 = 0.05;

/// Scale amplification slope for dolly-zoom counter-movement.
const DOLLY_SCALE_GAIN: f64 = 0.3;

/// Peak opacity reduction during a rack focus.
const RACK_FOCUS_OPACITY_DIP: f64 = 0.3;

/// Peak blur radius during a rack focus, in pixels.
const RACK_FOCUS_MAX_BLUR: f64 = 4.0;

fn options_for(movement: Movement, duration_override: Option<f64>) -> FrameOptions {
    FrameOptions {
        duration_ms: duration_override.unwrap_or(movement.default_duration_ms()),
        curve: movement.default_curve(),
        fps: DEFAULT_FPS,
        enable_optimization: true,
    }
}

/// Straight eased interpolation between two framings (pan/tilt archetype).
#[must_use]
pub fn pan_tilt_frames(
    from: CanvasPosition,
    to: CanvasPosition,
    duration_override: Option<f64>,
) -> FrameSequence {
    compute_frames(from, to, &options_for(Movement::PanTilt, duration_override))
}

/// Scale-only zoom toward `target_scale`, holding x/y fixed.
///
/// The zoom direction picks the archetype: growing scale uses the
/// accelerating zoom-in curve, shrinking scale the decelerating zoom-out
/// curve.
#[must_use]
pub fn zoom_frames(
    from: CanvasPosition,
    target_scale: f64,
    duration_override: Option<f64>,
) -> FrameSequence {
    let movement = if target_scale >= from.scale {
        Movement::ZoomIn
    } else {
        Movement::ZoomOut
    };
    let to = CanvasPosition {
        point: from.point,
        scale: target_scale,
    };
    compute_frames(from, to, &options_for(movement, duration_override))
}

/// Dolly-zoom: interpolation toward `to` with the target scale amplified by
/// `1 + intensity·0.3`, producing the counter-movement effect.
#[must_use]
pub fn dolly_zoom_frames(
    from: CanvasPosition,
    to: CanvasPosition,
    intensity: f64,
    duration_override: Option<f64>,
) -> FrameSequence {
    let amplified = amplify_dolly_target(to, intensity);
    compute_frames(
        from,
        amplified,
        &options_for(Movement::DollyZoom, duration_override),
    )
}

/// Rack focus: a small scale bump around a fixed framing. The bump rises and
/// falls with a `sin(π·p)` envelope so the sequence starts and ends at the
/// original framing.
#[must_use]
pub fn rack_focus_frames(
    position: CanvasPosition,
    focus_intensity: Option<f64>,
    duration_override: Option<f64>,
) -> FrameSequence {
    let intensity = focus_intensity.unwrap_or(DEFAULT_FOCUS_INTENSITY);
    let options = options_for(Movement::RackFocus, duration_override);
    compute_frames_with(&options, |p| {
        let eased = options.curve.apply(p);
        rack_focus_position(position, intensity, eased)
    })
}

/// Match cut: a two-phase transition through `anchor`. The first phase
/// (progress below [`MATCH_CUT_PHASE_SPLIT`]) eases out from `from` into the
/// anchor; the second eases in from the anchor toward `to`. At the split the
/// position equals the anchor exactly.
#[must_use]
pub fn match_cut_frames(
    from: CanvasPosition,
    to: CanvasPosition,
    anchor: CanvasPosition,
    duration_override: Option<f64>,
) -> FrameSequence {
    let options = options_for(Movement::MatchCut, duration_override);
    compute_frames_with(&options, |p| match_cut_position(from, to, anchor, p))
}

/// Single interpolated position at `progress`, for scroll-linked driving.
#[must_use]
pub fn position_at(
    from: CanvasPosition,
    to: CanvasPosition,
    progress: f64,
    curve: TimingCurve,
) -> CanvasPosition {
    from.lerp(to, curve.apply(progress))
}

/// Single dolly-zoom position at `progress`, with the target amplification
/// applied.
#[must_use]
pub fn dolly_zoom_at(
    from: CanvasPosition,
    to: CanvasPosition,
    intensity: f64,
    progress: f64,
) -> CanvasPosition {
    let amplified = amplify_dolly_target(to, intensity);
    from.lerp(
        amplified,
        Movement::DollyZoom.default_curve().apply(progress),
    )
}

/// Side-channel payload of a rack-focus movement at one progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RackFocusEffect {
    /// Framing at this progress (base position with the scale bump applied).
    pub position: CanvasPosition,
    /// Opacity the presentation layer should apply, in `[0, 1]`.
    pub opacity: f64,
    /// Blur radius in pixels.
    pub blur_radius: f64,
}

/// Single rack-focus state at `progress`: the bumped framing plus the
/// opacity/blur effect values (`1 − 0.3·sin(πp)` and `4·sin(πp)` px).
#[must_use]
pub fn rack_focus_at(
    position: CanvasPosition,
    focus_intensity: Option<f64>,
    progress: f64,
) -> RackFocusEffect {
    let intensity = focus_intensity.unwrap_or(DEFAULT_FOCUS_INTENSITY);
    let p = progress.clamp(0.0, 1.0);
    let eased = Movement::RackFocus.default_curve().apply(p);
    let envelope = (p * PI).sin();
    RackFocusEffect {
        position: rack_focus_position(position, intensity, eased),
        opacity: 1.0 - RACK_FOCUS_OPACITY_DIP * envelope,
        blur_radius: RACK_FOCUS_MAX_BLUR * envelope,
    }
}

/// Side-channel payload of a match-cut movement at one progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchCutState {
    /// Framing at this progress.
    pub position: CanvasPosition,
    /// Overall morph progress, eased across both phases.
    pub morph_progress: f64,
    /// Transform origin for the morph: the anchor's canvas point.
    pub transform_origin: Point,
}

/// Single match-cut state at `progress`, reporting the morph progress and
/// the transform origin (the anchor point) alongside the position.
#[must_use]
pub fn match_cut_at(
    from: CanvasPosition,
    to: CanvasPosition,
    anchor: CanvasPosition,
    progress: f64,
) -> MatchCutState {
    let p = progress.clamp(0.0, 1.0);
    MatchCutState {
        position: match_cut_position(from, to, anchor, p),
        morph_progress: Movement::MatchCut.default_curve().apply(p),
        transform_origin: anchor.point,
    }
}

fn amplify_dolly_target(to: CanvasPosition, intensity: f64) -> CanvasPosition {
    CanvasPosition {
        point: to.point,
        scale: to.scale * (1.0 + intensity * DOLLY_SCALE_GAIN),
    }
}

fn rack_focus_position(base: CanvasPosition, intensity: f64, eased: f64) -> CanvasPosition {
    let envelope = (eased * PI).sin();
    CanvasPosition {
        point: base.point,
        scale: base.scale * (1.0 + intensity * envelope),
    }
}

fn match_cut_position(
    from: CanvasPosition,
    to: CanvasPosition,
    anchor: CanvasPosition,
    progress: f64,
) -> CanvasPosition {
    let p = progress.clamp(0.0, 1.0);
    if p < MATCH_CUT_PHASE_SPLIT {
        let local = p / MATCH_CUT_PHASE_SPLIT;
        from.lerp(anchor, PathEasing::EaseOut.apply(local))
    } else {
        let local = (p - MATCH_CUT_PHASE_SPLIT) / (1.0 - MATCH_CUT_PHASE_SPLIT);
        anchor.lerp(to, PathEasing::EaseIn.apply(local))
    }
}
