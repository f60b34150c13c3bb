// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::profile::PhaseProfile;

// Equipment character constants. Acceleration/plateau/deceleration fractions
// sum to 1.0 per profile; oscillation/variance/damping set the texture.
const HANDHELD_NATURAL: PhaseProfile = PhaseProfile::new(0.3, 0.4, 0.3, 0.015, 0.01, 0.85);
const TRIPOD_FLUID: PhaseProfile = PhaseProfile::new(0.2, 0.6, 0.2, 0.0, 0.0, 1.0);
const GIMBAL_STABILIZED: PhaseProfile = PhaseProfile::new(0.25, 0.5, 0.25, 0.002, 0.0, 0.95);
const SLIDER_MECHANICAL: PhaseProfile = PhaseProfile::new(0.1, 0.8, 0.1, 0.0, 0.0, 1.0);
const JIB_ARM: PhaseProfile = PhaseProfile::new(0.35, 0.3, 0.35, 0.008, 0.004, 0.9);
const STEADICAM_FLOAT: PhaseProfile = PhaseProfile::new(0.3, 0.4, 0.3, 0.006, 0.005, 0.88);
const FOCUS_PULL_MANUAL: PhaseProfile = PhaseProfile::new(0.4, 0.2, 0.4, 0.01, 0.008, 0.82);
const FOCUS_PULL_FOLLOW: PhaseProfile = PhaseProfile::new(0.25, 0.5, 0.25, 0.004, 0.002, 0.93);
const ZOOM_CINEMATIC: PhaseProfile = PhaseProfile::new(0.45, 0.1, 0.45, 0.0, 0.0, 1.0);
const TILT_FLUID_HEAD: PhaseProfile = PhaseProfile::new(0.2, 0.55, 0.25, 0.003, 0.0, 0.96);
const PAN_WHIP: PhaseProfile = PhaseProfile::new(0.6, 0.25, 0.15, 0.02, 0.012, 0.8);
const RACK_FOCUS_SMOOTH: PhaseProfile = PhaseProfile::new(0.35, 0.3, 0.35, 0.0, 0.0, 1.0);
const DOLLY_TRACK: PhaseProfile = PhaseProfile::new(0.15, 0.7, 0.15, 0.004, 0.002, 0.97);
const CRANE_SWEEP: PhaseProfile = PhaseProfile::new(0.3, 0.45, 0.25, 0.006, 0.003, 0.92);

/// The fixed catalog of named photography easing curves.
///
/// Each variant models the motion character of one piece of camera support
/// equipment or one manual technique. Use [`CameraEasing::profile`] for the
/// underlying [`PhaseProfile`] parameters, or evaluate directly via
/// [`CameraEasing::evaluate`] / [`CameraEasing::evaluate_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CameraEasing {
    /// Handheld camera: visible sway and jitter, softened response.
    HandheldNatural,
    /// Fluid tripod head: clean trapezoid, no perturbation.
    #[default]
    TripodFluid,
    /// Motorized gimbal: near-perfect with a trace of correction sway.
    GimbalStabilized,
    /// Mechanical slider: long constant-velocity cruise, hard ramps.
    SliderMechanical,
    /// Jib arm: broad ramps with inertia sway at the extremes.
    JibArm,
    /// Steadicam: floating character between handheld and gimbal.
    SteadicamFloat,
    /// Manual focus pull: hesitant ramps, operator jitter.
    FocusPullManual,
    /// Follow-focus unit: smoother assisted pull.
    FocusPullFollow,
    /// Cinematic zoom: symmetric slow-in/slow-out, no cruise to speak of.
    ZoomCinematic,
    /// Fluid-head tilt: slightly asymmetric drag.
    TiltFluidHead,
    /// Whip pan: violent acceleration, short settle.
    PanWhip,
    /// Rack focus: symmetric ramps tuned for focus-plane swaps.
    RackFocusSmooth,
    /// Dolly on track: long cruise with faint track rumble.
    DollyTrack,
    /// Crane sweep: stately ramps with mild boom sway.
    CraneSweep,
}

impl CameraEasing {
    /// Every curve in the catalog, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::HandheldNatural,
        Self::TripodFluid,
        Self::GimbalStabilized,
        Self::SliderMechanical,
        Self::JibArm,
        Self::SteadicamFloat,
        Self::FocusPullManual,
        Self::FocusPullFollow,
        Self::ZoomCinematic,
        Self::TiltFluidHead,
        Self::PanWhip,
        Self::RackFocusSmooth,
        Self::DollyTrack,
        Self::CraneSweep,
    ];

    /// Returns the parameter record backing this curve.
    #[must_use]
    pub const fn profile(self) -> &'static PhaseProfile {
        match self {
            Self::HandheldNatural => &HANDHELD_NATURAL,
            Self::TripodFluid => &TRIPOD_FLUID,
            Self::GimbalStabilized => &GIMBAL_STABILIZED,
            Self::SliderMechanical => &SLIDER_MECHANICAL,
            Self::JibArm => &JIB_ARM,
            Self::SteadicamFloat => &STEADICAM_FLOAT,
            Self::FocusPullManual => &FOCUS_PULL_MANUAL,
            Self::FocusPullFollow => &FOCUS_PULL_FOLLOW,
            Self::ZoomCinematic => &ZOOM_CINEMATIC,
            Self::TiltFluidHead => &TILT_FLUID_HEAD,
            Self::PanWhip => &PAN_WHIP,
            Self::RackFocusSmooth => &RACK_FOCUS_SMOOTH,
            Self::DollyTrack => &DOLLY_TRACK,
            Self::CraneSweep => &CRANE_SWEEP,
        }
    }

    /// Deterministic evaluation at progress `t`; see
    /// [`PhaseProfile::evaluate`].
    #[must_use]
    pub fn evaluate(self, t: f64) -> f64 {
        self.profile().evaluate(t)
    }

    /// Evaluation with random micro-jitter; see
    /// [`PhaseProfile::evaluate_with`].
    #[must_use]
    pub fn evaluate_with<R: rand::Rng + ?Sized>(self, t: f64, rng: &mut R) -> f64 {
        self.profile().evaluate_with(t, rng)
    }
}

/// Broad category of camera movement, used to pick an easing curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MovementKind {
    /// Horizontal rotation.
    Pan,
    /// Vertical rotation.
    Tilt,
    /// Focal-length change.
    Zoom,
    /// Focus-plane change.
    Focus,
    /// Translation along a track.
    Dolly,
    /// Vertical boom movement.
    Crane,
}

/// Simulated camera support equipment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Equipment {
    /// No support; operator's hands.
    Handheld,
    /// Fluid-head tripod.
    Tripod,
    /// Motorized gimbal.
    Gimbal,
    /// Mechanical slider.
    Slider,
    /// Jib arm.
    Jib,
    /// Steadicam rig.
    Steadicam,
}

/// Stylistic override applied on top of the movement/equipment pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ShotStyle {
    /// Use the plain movement × equipment mapping.
    #[default]
    Standard,
    /// Force the most aggressive curve for the movement.
    Dramatic,
    /// Force the handheld character regardless of equipment.
    Natural,
}

/// Picks a catalog curve for a movement performed on given equipment.
///
/// [`ShotStyle::Dramatic`] overrides to [`CameraEasing::FocusPullManual`]
/// for focus movements and [`CameraEasing::PanWhip`] for everything else;
/// [`ShotStyle::Natural`] always yields [`CameraEasing::HandheldNatural`].
/// Pairings without a more specific curve fall back to
/// [`CameraEasing::TripodFluid`].
#[must_use]
pub fn select_easing(
    movement: MovementKind,
    equipment: Equipment,
    style: ShotStyle,
) -> CameraEasing {
    match style {
        ShotStyle::Dramatic => {
            return match movement {
                MovementKind::Focus => CameraEasing::FocusPullManual,
                _ => CameraEasing::PanWhip,
            };
        }
        ShotStyle::Natural => return CameraEasing::HandheldNatural,
        ShotStyle::Standard => {}
    }

    match (movement, equipment) {
        (MovementKind::Pan | MovementKind::Tilt, Equipment::Handheld) => {
            CameraEasing::HandheldNatural
        }
        (MovementKind::Pan, Equipment::Tripod) => CameraEasing::TripodFluid,
        (MovementKind::Tilt, Equipment::Tripod) => CameraEasing::TiltFluidHead,
        (MovementKind::Pan | MovementKind::Tilt, Equipment::Gimbal) => {
            CameraEasing::GimbalStabilized
        }
        (MovementKind::Pan | MovementKind::Tilt, Equipment::Slider) => {
            CameraEasing::SliderMechanical
        }
        (MovementKind::Pan | MovementKind::Tilt, Equipment::Jib) => CameraEasing::JibArm,
        (MovementKind::Pan | MovementKind::Tilt, Equipment::Steadicam) => {
            CameraEasing::SteadicamFloat
        }
        (MovementKind::Zoom, Equipment::Handheld) => CameraEasing::HandheldNatural,
        (MovementKind::Zoom, _) => CameraEasing::ZoomCinematic,
        (MovementKind::Focus, Equipment::Handheld) => CameraEasing::FocusPullManual,
        (MovementKind::Focus, _) => CameraEasing::FocusPullFollow,
        (MovementKind::Dolly, Equipment::Slider) => CameraEasing::SliderMechanical,
        (MovementKind::Dolly, Equipment::Handheld) => CameraEasing::HandheldNatural,
        (MovementKind::Dolly, _) => CameraEasing::DollyTrack,
        (MovementKind::Crane, Equipment::Jib) => CameraEasing::JibArm,
        (MovementKind::Crane, _) => CameraEasing::CraneSweep,
    }
}
