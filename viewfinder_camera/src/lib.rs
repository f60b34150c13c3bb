// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Camera: cinematic movement calculation between canvas positions.
//!
//! Given a start and end [`CanvasPosition`](viewfinder_spatial::CanvasPosition),
//! this crate produces either a single interpolated position at a given
//! progress value, or a full timestamped frame sequence, for one of six named
//! movement archetypes:
//!
//! | Archetype | Default duration | Character |
//! |---|---|---|
//! | [`Movement::PanTilt`] | 800 ms | straight eased interpolation |
//! | [`Movement::ZoomIn`] | 600 ms | scale-only change, accelerating |
//! | [`Movement::ZoomOut`] | 600 ms | scale-only change, decelerating |
//! | [`Movement::DollyZoom`] | 1200 ms | counter-movement scale amplification |
//! | [`Movement::RackFocus`] | 300 ms | scale bump in place, opacity/blur side channel |
//! | [`Movement::MatchCut`] | 1000 ms | two-phase move through an anchor point |
//!
//! Everything here is a pure, total function: no archetype call can fail
//! given well-typed inputs, and no global state is consulted. Quality
//! pressure from `viewfinder_quality` reaches this crate only through the
//! *parameters* callers pass in (shorter durations, simpler curves, load
//! shedding via [`FrameOptions::enable_optimization`]).
//!
//! ## Example
//!
//! ```rust
//! use viewfinder_camera::{FrameOptions, TimingCurve, compute_frames};
//! use viewfinder_spatial::{CanvasPosition, PathEasing};
//!
//! let from = CanvasPosition::new(0.0, 0.0, 1.0);
//! let to = CanvasPosition::new(100.0, 0.0, 1.0);
//! let options = FrameOptions {
//!     duration_ms: 1000.0,
//!     curve: TimingCurve::Path(PathEasing::Linear),
//!     fps: 10.0,
//!     enable_optimization: false,
//! };
//!
//! let sequence = compute_frames(from, to, &options);
//! assert_eq!(sequence.frames.len(), 11);
//! assert!((sequence.frames[5].position.point.x - 50.0).abs() < 1e-9);
//! ```

mod archetype;
mod device;
mod frames;
mod movements;
mod timing;

pub use archetype::Movement;
pub use device::{CpuClass, DeviceCapabilities, estimate_optimal_fps, optimize_for_device};
pub use frames::{
    DEFAULT_FPS, FrameConstraints, FrameIssue, FrameOptions, FrameReport, FrameSequence,
    MovementFrame, compute_frames, validate_frames,
};
pub use movements::{
    MATCH_CUT_PHASE_SPLIT, MatchCutState, RackFocusEffect, dolly_zoom_at, dolly_zoom_frames,
    match_cut_at, match_cut_frames, pan_tilt_frames, position_at, rack_focus_at,
    rack_focus_frames, zoom_frames,
};
pub use timing::{CubicBezier, TimingCurve};
