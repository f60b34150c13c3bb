// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Default sample count for [`validate_easing`].
pub const DEFAULT_VALIDATION_SAMPLES: usize = 100;

/// Tolerance for the boundary law: `|f(0)|` and `|f(1) − 1|` must not exceed
/// this.
const BOUNDARY_TOLERANCE: f64 = 0.01;

/// Largest tolerated backward step between adjacent samples. The intentional
/// sway/variance terms may regress by small amounts; anything larger is
/// flagged.
const REGRESSION_TOLERANCE: f64 = 0.05;

/// One problem found by [`validate_easing`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EasingIssue {
    /// `f(0)` was farther than the tolerance from `0`.
    StartOffset {
        /// The observed `f(0)`.
        value: f64,
    },
    /// `f(1)` was farther than the tolerance from `1`.
    EndOffset {
        /// The observed `f(1)`.
        value: f64,
    },
    /// A backward step larger than the regression tolerance.
    Regression {
        /// Progress at which the regression was observed.
        at: f64,
        /// Size of the backward step.
        drop: f64,
    },
}

impl fmt::Display for EasingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOffset { value } => write!(f, "f(0) = {value}, expected ≈ 0"),
            Self::EndOffset { value } => write!(f, "f(1) = {value}, expected ≈ 1"),
            Self::Regression { at, drop } => {
                write!(f, "backward step of {drop} at progress {at}")
            }
        }
    }
}

/// Structured result of an easing validation run.
#[derive(Clone, Debug, PartialEq)]
pub struct EasingReport {
    /// `true` when no issues were found.
    pub valid: bool,
    /// Every issue found, in scan order.
    pub issues: Vec<EasingIssue>,
}

/// Samples an easing function and checks the boundary law and
/// near-monotonicity.
///
/// Boundary values must be within `0.01` of `0` / `1`; backward steps up to
/// `0.05` between adjacent samples are tolerated (the intentional
/// oscillation and variance terms produce them), larger regressions are
/// reported. Intended for tests and diagnostics, not runtime control flow.
///
/// Curves carrying random variance should be validated with the variance
/// term disabled (or the generator seeded) for reproducible reports.
#[must_use]
pub fn validate_easing(f: impl Fn(f64) -> f64, samples: usize) -> EasingReport {
    let samples = samples.max(2);
    let mut issues = Vec::new();

    let start = f(0.0);
    if start.abs() > BOUNDARY_TOLERANCE {
        issues.push(EasingIssue::StartOffset { value: start });
    }
    let end = f(1.0);
    if (end - 1.0).abs() > BOUNDARY_TOLERANCE {
        issues.push(EasingIssue::EndOffset { value: end });
    }

    let mut prev = start;
    for i in 1..=samples {
        let t = i as f64 / samples as f64;
        let v = f(t);
        let drop = prev - v;
        if drop > REGRESSION_TOLERANCE {
            issues.push(EasingIssue::Regression { at: t, drop });
        }
        prev = v;
    }

    EasingReport {
        valid: issues.is_empty(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_VALIDATION_SAMPLES, EasingIssue, validate_easing};
    use crate::catalog::CameraEasing;
    use crate::presets::ShotPreset;

    #[test]
    fn the_whole_catalog_validates_cleanly() {
        for easing in CameraEasing::ALL {
            let report = validate_easing(|t| easing.evaluate(t), DEFAULT_VALIDATION_SAMPLES);
            assert!(report.valid, "{easing:?}: {:?}", report.issues);
        }
    }

    #[test]
    fn presets_validate_cleanly() {
        let report = validate_easing(
            |t| ShotPreset::FocusBreathing.evaluate(t),
            DEFAULT_VALIDATION_SAMPLES,
        );
        assert!(report.valid, "{:?}", report.issues);
    }

    #[test]
    fn boundary_violations_are_reported() {
        let report = validate_easing(|t| t + 0.1, DEFAULT_VALIDATION_SAMPLES);
        assert!(!report.valid);
        assert!(matches!(
            report.issues[0],
            EasingIssue::StartOffset { value } if (value - 0.1).abs() < 1e-12
        ));
        assert!(matches!(report.issues[1], EasingIssue::EndOffset { .. }));
    }

    #[test]
    fn large_regressions_are_reported_but_small_ones_tolerated() {
        // A dip of 0.02 stays under the tolerance.
        let wobbly = |t: f64| t - 0.02 * (t * 20.0).sin().max(0.0);
        assert!(validate_easing(wobbly, DEFAULT_VALIDATION_SAMPLES).valid);

        // A step function that falls by 0.3 mid-way must be flagged.
        let broken = |t: f64| if t < 0.5 { t * 2.0 } else { t * 2.0 - 0.3 };
        let report = validate_easing(broken, DEFAULT_VALIDATION_SAMPLES);
        assert!(!report.valid);
        assert!(
            report
                .issues
                .iter()
                .any(|i| matches!(i, EasingIssue::Regression { .. })),
            "expected a regression issue: {:?}",
            report.issues
        );
    }
}
