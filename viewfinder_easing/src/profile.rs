// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

/// Angular frequency of the equipment micro-sway term, in half-turns across
/// the progress range. Eight half-turns reads as a gentle tremor rather than
/// a visible wobble at typical movement durations.
const SWAY_CYCLES: f64 = 8.0;

/// Three-phase motion profile with equipment-character perturbations.
///
/// The base curve integrates a trapezoidal velocity profile: quadratic ramp
/// over the `acceleration` fraction of progress, constant velocity over the
/// `plateau` fraction, quadratic ramp-down over the `deceleration` fraction.
/// The three fractions must sum to `1.0`.
///
/// On top of the base curve:
/// - `oscillation` scales a decaying sine sway, `sin(t·π·8)·osc·(1−t)`;
/// - `variance` scales a random jitter, `(r−0.5)·var·sin(t·π)` with `r`
///   drawn uniformly from `[0, 1)` by the caller's generator;
/// - `damping` blends the shaped value with raw progress:
///   `shaped·damping + t·(1−damping)`.
///
/// Both perturbation envelopes vanish at `t = 0` and `t = 1`, so every
/// profile maps `0 → 0` and `1 → 1` regardless of its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseProfile {
    /// Fraction of progress spent accelerating from rest.
    pub acceleration: f64,
    /// Fraction of progress spent at constant velocity.
    pub plateau: f64,
    /// Fraction of progress spent decelerating to rest.
    pub deceleration: f64,
    /// Amplitude of the deterministic micro-sway term.
    pub oscillation: f64,
    /// Amplitude of the random micro-jitter term.
    pub variance: f64,
    /// Blend factor between the shaped curve (`1.0`) and raw progress (`0.0`).
    pub damping: f64,
}

impl PhaseProfile {
    /// Creates a profile from its six parameters.
    ///
    /// `acceleration + plateau + deceleration` is expected to equal `1.0`;
    /// this is checked with a debug assertion, not at runtime.
    #[must_use]
    pub const fn new(
        acceleration: f64,
        plateau: f64,
        deceleration: f64,
        oscillation: f64,
        variance: f64,
        damping: f64,
    ) -> Self {
        Self {
            acceleration,
            plateau,
            deceleration,
            oscillation,
            variance,
            damping,
        }
    }

    /// Evaluates the profile at progress `t`, with the variance term off.
    ///
    /// Input is clamped to `[0, 1]`. This path is fully deterministic.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        self.shaped(t, 0.0)
    }

    /// Evaluates the profile at progress `t` with random micro-jitter drawn
    /// from `rng`.
    ///
    /// The jitter amplitude is `(r − 0.5)·variance` with `r` uniform in
    /// `[0, 1)`, enveloped by `sin(t·π)` so the endpoints stay exact.
    #[must_use]
    pub fn evaluate_with<R: rand::Rng + ?Sized>(&self, t: f64, rng: &mut R) -> f64 {
        let r: f64 = rng.random();
        self.shaped(t, (r - 0.5) * self.variance)
    }

    fn shaped(&self, t: f64, jitter_amplitude: f64) -> f64 {
        debug_assert!(
            (self.acceleration + self.plateau + self.deceleration - 1.0).abs() < 1e-9,
            "phase fractions must sum to 1.0"
        );
        let t = t.clamp(0.0, 1.0);
        let shaped = self.base(t)
            + (t * PI * SWAY_CYCLES).sin() * self.oscillation * (1.0 - t)
            + jitter_amplitude * (t * PI).sin();
        shaped * self.damping + t * (1.0 - self.damping)
    }

    /// Integrated trapezoidal velocity profile. Monotone on `[0, 1]` with
    /// `base(0) = 0` and `base(1) = 1`.
    fn base(&self, t: f64) -> f64 {
        let a = self.acceleration;
        let d = self.deceleration;
        // Peak velocity that makes the trapezoid integrate to exactly 1.
        let v = 2.0 / (2.0 - a - d);

        if a > 0.0 && t < a {
            return v * t * t / (2.0 * a);
        }
        let cruise_end = 1.0 - d;
        if t <= cruise_end || d <= 0.0 {
            return v * (a / 2.0 + (t - a));
        }
        let td = t - cruise_end;
        v * (a / 2.0 + (cruise_end - a) + td - td * td / (2.0 * d))
    }
}
