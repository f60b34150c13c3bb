// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;
use viewfinder_spatial::CanvasPosition;

use crate::timing::TimingCurve;

/// Default frame rate for generated sequences.
pub const DEFAULT_FPS: f64 = 60.0;

/// Raw frame count at or above which load shedding kicks in when
/// [`FrameOptions::enable_optimization`] is set.
const OPTIMIZATION_THRESHOLD: usize = 120;

/// Load shedding never reduces a sequence below this many segments.
const OPTIMIZATION_FLOOR: usize = 60;

/// Fraction of segments kept when load shedding triggers.
const OPTIMIZATION_KEEP: f64 = 0.7;

/// Options for [`compute_frames`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOptions {
    /// Total movement duration in milliseconds.
    pub duration_ms: f64,
    /// Timing curve shaping the interpolation progress.
    pub curve: TimingCurve,
    /// Target frames per second.
    pub fps: f64,
    /// Allow automatic frame-count reduction for long/high-fps requests.
    pub enable_optimization: bool,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            duration_ms: 600.0,
            curve: TimingCurve::default(),
            fps: DEFAULT_FPS,
            enable_optimization: false,
        }
    }
}

/// One frame of a movement sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementFrame {
    /// Camera framing at this frame.
    pub position: CanvasPosition,
    /// Milliseconds from movement start.
    pub timestamp_ms: f64,
    /// Raw (un-eased) progress in `[0, 1]`.
    pub progress: f64,
}

/// An eagerly generated, fully ordered movement sequence.
///
/// Frames are ordered by non-decreasing timestamp with
/// `frames[0].progress == 0` and `frames[last].progress == 1`. Consumers
/// needing cancellation simply discard the remaining frames; there is no
/// built-in cancellation token.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSequence {
    /// Ordered frames, inclusive of both endpoints.
    pub frames: Vec<MovementFrame>,
    /// Total duration in milliseconds.
    pub total_duration_ms: f64,
    /// Effective frame rate of the generated sequence.
    pub expected_fps: f64,
    /// `true` when load shedding reduced the frame count.
    pub optimized: bool,
}

/// Generates a timestamped frame sequence from `from` to `to`.
///
/// The raw segment count is `ceil(duration/1000 · fps)`; the sequence holds
/// one more frame than segments so both endpoints are included. When
/// [`FrameOptions::enable_optimization`] is set and the raw count reaches
/// 120 segments, the count is reduced to `max(60, ⌊count·0.7⌋)` and the
/// result is flagged [`FrameSequence::optimized`] — this is the load-shedding
/// mechanism invoked under quality pressure.
#[must_use]
pub fn compute_frames(
    from: CanvasPosition,
    to: CanvasPosition,
    options: &FrameOptions,
) -> FrameSequence {
    compute_frames_with(options, |progress| {
        from.lerp(to, options.curve.apply(progress))
    })
}

/// Shared sequence machinery: archetypes with non-linear position functions
/// (match-cut, rack-focus) route through here with their own `position_at`.
pub(crate) fn compute_frames_with(
    options: &FrameOptions,
    position_at: impl Fn(f64) -> CanvasPosition,
) -> FrameSequence {
    let duration = options.duration_ms.max(0.0);
    let fps = options.fps.max(1.0);

    let raw_segments = ((duration / 1000.0) * fps).ceil().max(1.0) as usize;
    let (segments, optimized) =
        if options.enable_optimization && raw_segments >= OPTIMIZATION_THRESHOLD {
            let kept = (raw_segments as f64 * OPTIMIZATION_KEEP).floor() as usize;
            (kept.max(OPTIMIZATION_FLOOR), true)
        } else {
            (raw_segments, false)
        };

    let mut frames = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let progress = i as f64 / segments as f64;
        frames.push(MovementFrame {
            position: position_at(progress),
            timestamp_ms: progress * duration,
            progress,
        });
    }

    let expected_fps = if duration > 0.0 {
        segments as f64 * 1000.0 / duration
    } else {
        fps
    };

    FrameSequence {
        frames,
        total_duration_ms: duration,
        expected_fps,
        optimized,
    }
}

/// Optional ceilings for [`validate_frames`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameConstraints {
    /// Maximum allowed total duration in milliseconds.
    pub max_duration_ms: Option<f64>,
    /// Maximum allowed effective fps.
    pub max_fps: Option<f64>,
    /// Maximum allowed frame count.
    pub max_frames: Option<usize>,
}

/// One problem found by [`validate_frames`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameIssue {
    /// The sequence holds no frames at all.
    Empty,
    /// A timestamp went backwards between adjacent frames.
    TimestampRegression {
        /// Index of the offending frame.
        index: usize,
    },
    /// The first frame's progress was not `0`.
    MissingStart,
    /// The last frame's progress was not `1`.
    MissingEnd,
    /// Total duration exceeded the constraint ceiling.
    DurationExceeded,
    /// Effective fps exceeded the constraint ceiling.
    FpsExceeded,
    /// Frame count exceeded the constraint ceiling.
    FrameCountExceeded,
}

/// Structured result of a frame-sequence validation run.
///
/// Used for testing and diagnostics, never for runtime control flow.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// `true` when no issues were found.
    pub valid: bool,
    /// Every issue found, in scan order.
    pub errors: SmallVec<[FrameIssue; 4]>,
}

/// Checks timestamp monotonicity, endpoint progress, and any supplied
/// constraint ceilings. Returns structured errors rather than panicking.
#[must_use]
pub fn validate_frames(
    sequence: &FrameSequence,
    constraints: Option<&FrameConstraints>,
) -> FrameReport {
    let mut errors = SmallVec::new();

    if sequence.frames.is_empty() {
        errors.push(FrameIssue::Empty);
    } else {
        for (i, pair) in sequence.frames.windows(2).enumerate() {
            if pair[1].timestamp_ms < pair[0].timestamp_ms {
                errors.push(FrameIssue::TimestampRegression { index: i + 1 });
            }
        }
        if sequence.frames[0].progress != 0.0 {
            errors.push(FrameIssue::MissingStart);
        }
        if sequence.frames[sequence.frames.len() - 1].progress != 1.0 {
            errors.push(FrameIssue::MissingEnd);
        }
    }

    if let Some(c) = constraints {
        if c.max_duration_ms
            .is_some_and(|max| sequence.total_duration_ms > max)
        {
            errors.push(FrameIssue::DurationExceeded);
        }
        if c.max_fps.is_some_and(|max| sequence.expected_fps > max) {
            errors.push(FrameIssue::FpsExceeded);
        }
        if c.max_frames.is_some_and(|max| sequence.frames.len() > max) {
            errors.push(FrameIssue::FrameCountExceeded);
        }
    }

    FrameReport {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        FrameConstraints, FrameIssue, FrameOptions, compute_frames, validate_frames,
    };
    use crate::timing::TimingCurve;
    use viewfinder_spatial::{CanvasPosition, PathEasing};

    fn linear_options(duration_ms: f64, fps: f64, optimize: bool) -> FrameOptions {
        FrameOptions {
            duration_ms,
            curve: TimingCurve::Path(PathEasing::Linear),
            fps,
            enable_optimization: optimize,
        }
    }

    #[test]
    fn one_second_at_ten_fps_yields_eleven_frames() {
        let from = CanvasPosition::new(0.0, 0.0, 1.0);
        let to = CanvasPosition::new(100.0, 0.0, 1.0);
        let seq = compute_frames(from, to, &linear_options(1000.0, 10.0, false));

        assert_eq!(seq.frames.len(), 11);
        assert!(!seq.optimized);
        assert!((seq.frames[5].position.point.x - 50.0).abs() < 1e-9);
        assert!((seq.frames[5].timestamp_ms - 500.0).abs() < 1e-9);
        assert_eq!(seq.frames[0].progress, 0.0);
        assert_eq!(seq.frames[10].progress, 1.0);
    }

    #[test]
    fn load_shedding_trips_at_the_threshold() {
        let from = CanvasPosition::NEUTRAL;
        let to = CanvasPosition::new(10.0, 0.0, 1.0);

        // 2000 ms at 60 fps: 120 raw segments.
        let shed = compute_frames(from, to, &linear_options(2000.0, 60.0, true));
        assert!(shed.optimized);
        assert!(shed.frames.len() < 120);
        // max(60, floor(120 · 0.7)) = 84 segments → 85 frames.
        assert_eq!(shed.frames.len(), 85);

        let full = compute_frames(from, to, &linear_options(2000.0, 60.0, false));
        assert!(!full.optimized);
        assert_eq!(full.frames.len(), 121);
    }

    #[test]
    fn load_shedding_never_goes_below_the_floor() {
        for duration in [2000.0, 2050.0, 10_000.0] {
            let seq = compute_frames(
                CanvasPosition::NEUTRAL,
                CanvasPosition::new(1.0, 0.0, 1.0),
                &linear_options(duration, 60.0, true),
            );
            assert!(seq.optimized);
            assert!(seq.frames.len() - 1 >= 60, "duration {duration}");
        }
    }

    #[test]
    fn timestamps_are_monotone_and_endpoints_exact() {
        let seq = compute_frames(
            CanvasPosition::NEUTRAL,
            CanvasPosition::new(50.0, -20.0, 1.4),
            &FrameOptions::default(),
        );
        let report = validate_frames(&seq, None);
        assert!(report.valid, "{:?}", report.errors);
        assert_eq!(seq.frames[0].position, CanvasPosition::NEUTRAL);
        assert_eq!(
            seq.frames[seq.frames.len() - 1].position,
            CanvasPosition::new(50.0, -20.0, 1.4)
        );
    }

    #[test]
    fn zero_duration_still_produces_a_complete_sequence() {
        let seq = compute_frames(
            CanvasPosition::NEUTRAL,
            CanvasPosition::new(5.0, 5.0, 1.0),
            &linear_options(0.0, 60.0, false),
        );
        assert_eq!(seq.frames.len(), 2);
        assert!(validate_frames(&seq, None).valid);
    }

    #[test]
    fn constraints_flag_ceiling_violations() {
        let seq = compute_frames(
            CanvasPosition::NEUTRAL,
            CanvasPosition::new(5.0, 5.0, 1.0),
            &linear_options(1000.0, 60.0, false),
        );
        let constraints = FrameConstraints {
            max_duration_ms: Some(500.0),
            max_fps: Some(30.0),
            max_frames: Some(10),
        };
        let report = validate_frames(&seq, Some(&constraints));
        assert!(!report.valid);
        assert!(report.errors.contains(&FrameIssue::DurationExceeded));
        assert!(report.errors.contains(&FrameIssue::FpsExceeded));
        assert!(report.errors.contains(&FrameIssue::FrameCountExceeded));
    }

    #[test]
    fn broken_sequences_are_reported() {
        let mut seq = compute_frames(
            CanvasPosition::NEUTRAL,
            CanvasPosition::new(5.0, 5.0, 1.0),
            &linear_options(500.0, 30.0, false),
        );
        seq.frames[3].timestamp_ms = 0.0;
        seq.frames.last_mut().unwrap().progress = 0.99;

        let report = validate_frames(&seq, None);
        assert!(!report.valid);
        assert!(
            report
                .errors
                .iter()
                .any(|e| matches!(e, FrameIssue::TimestampRegression { .. }))
        );
        assert!(report.errors.contains(&FrameIssue::MissingEnd));
    }
}
