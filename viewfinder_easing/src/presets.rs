// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

use crate::catalog::CameraEasing;

/// Named shot presets: thin aliases over the base catalog, some with a
/// secondary harmonic layered on top.
///
/// Presets are evaluated through [`ShotPreset::evaluate`]; the extra
/// harmonics vanish at both endpoints, so presets obey the same boundary law
/// as the base curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShotPreset {
    /// Wide opening move; crane character.
    EstablishingShot,
    /// Tightening move onto a subject; assisted focus pull.
    CloseUpTransition,
    /// Tracking a moving subject; gimbal character.
    ActionFollow,
    /// Sudden subject reveal; whip-pan character.
    DramaticReveal,
    /// Slow personal framing; handheld character.
    IntimateMovement,
    /// Measured product-shot move; slider character.
    TechnicalPrecision,
    /// Weightless drift; steadicam character.
    FloatingDream,
    /// Hard cut cover move; cinematic zoom character.
    FastTransition,
    /// Focus oscillation while holding framing; adds a slow breath cycle.
    FocusBreathing,
    /// Old-glass feel; manual pull with a decaying flutter.
    VintageLens,
}

impl ShotPreset {
    /// The base catalog curve this preset aliases.
    #[must_use]
    pub const fn base(self) -> CameraEasing {
        match self {
            Self::EstablishingShot => CameraEasing::CraneSweep,
            Self::CloseUpTransition => CameraEasing::FocusPullFollow,
            Self::ActionFollow => CameraEasing::GimbalStabilized,
            Self::DramaticReveal => CameraEasing::PanWhip,
            Self::IntimateMovement => CameraEasing::HandheldNatural,
            Self::TechnicalPrecision => CameraEasing::SliderMechanical,
            Self::FloatingDream => CameraEasing::SteadicamFloat,
            Self::FastTransition => CameraEasing::ZoomCinematic,
            Self::FocusBreathing => CameraEasing::RackFocusSmooth,
            Self::VintageLens => CameraEasing::FocusPullManual,
        }
    }

    /// Evaluates the preset at progress `t` (deterministic; variance off).
    #[must_use]
    pub fn evaluate(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let base = self.base().evaluate(t);
        base + self.harmonic(t)
    }

    fn harmonic(self, t: f64) -> f64 {
        match self {
            // One slow breath across the whole move.
            Self::FocusBreathing => (t * PI).sin() * 0.02,
            // Decaying third-harmonic flutter, strongest early.
            Self::VintageLens => (t * 3.0 * PI).sin() * 0.01 * (1.0 - t),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ShotPreset;

    const ALL: [ShotPreset; 10] = [
        ShotPreset::EstablishingShot,
        ShotPreset::CloseUpTransition,
        ShotPreset::ActionFollow,
        ShotPreset::DramaticReveal,
        ShotPreset::IntimateMovement,
        ShotPreset::TechnicalPrecision,
        ShotPreset::FloatingDream,
        ShotPreset::FastTransition,
        ShotPreset::FocusBreathing,
        ShotPreset::VintageLens,
    ];

    #[test]
    fn presets_obey_the_boundary_law() {
        for preset in ALL {
            assert!(preset.evaluate(0.0).abs() <= 0.01, "{preset:?}");
            assert!((preset.evaluate(1.0) - 1.0).abs() <= 0.01, "{preset:?}");
        }
    }

    #[test]
    fn harmonic_presets_differ_from_their_base_curve_mid_move() {
        let plain = ShotPreset::FocusBreathing.base().evaluate(0.5);
        let breathed = ShotPreset::FocusBreathing.evaluate(0.5);
        assert!((breathed - plain - 0.02).abs() < 1e-12);

        let vintage = ShotPreset::VintageLens.evaluate(0.5);
        let manual = ShotPreset::VintageLens.base().evaluate(0.5);
        // sin(1.5π) = −1, envelope 0.5.
        assert!((vintage - (manual - 0.005)).abs() < 1e-12);
    }

    #[test]
    fn alias_presets_match_their_base_exactly() {
        for t in [0.1, 0.35, 0.5, 0.82] {
            assert_eq!(
                ShotPreset::EstablishingShot.evaluate(t),
                ShotPreset::EstablishingShot.base().evaluate(t)
            );
        }
    }
}
