// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Quality: closed-loop performance monitoring and adaptive
//! quality management.
//!
//! This crate observes the host's frame timing and memory usage and turns
//! the measurements into a discrete [`QualityLevel`] with a per-level
//! [`QualityConfig`] (animation duration baselines, effect toggles, GPU
//! hints, concurrency ceilings) that every animation-producing component
//! reads to decide how much work to do.
//!
//! The control loop is caller-driven and fully synchronous: the host's
//! animation-frame callback feeds [`PerformanceMonitor::record_frame`] and
//! periodically calls [`QualityManager::check_thresholds`]; environment
//! signals (tab visibility, window resizes, device profile, battery) arrive
//! through explicit methods. There are no timers or threads inside the
//! crate, which keeps every state transition deterministic under test.
//!
//! Key invariants:
//! - There is exactly one active [`QualityLevel`] per manager instance at
//!   any instant; all changes flow through a single internal mutator and
//!   land in an append-only, bounded history.
//! - A manual quality choice suspends automatic adjustment entirely until
//!   explicitly cleared. Automatic degradation never fights the user.
//! - Observers are notified synchronously, after the config is already
//!   updated; a failing observer is logged and isolated, never propagated.
//!
//! ## Example
//!
//! ```rust
//! use viewfinder_quality::{PerformanceMonitor, QualityLevel, QualityManager};
//!
//! let mut monitor = PerformanceMonitor::new();
//! let mut manager = QualityManager::new();
//! monitor.start();
//!
//! // Simulate a stretch of 25 fps frames (40 ms each).
//! let mut now = 0.0;
//! for _ in 0..60 {
//!     now += 40.0;
//!     monitor.record_frame(40.0, now);
//! }
//! manager.check_thresholds(&monitor, now);
//! assert_eq!(manager.level(), QualityLevel::Low);
//! ```

mod culling;
mod diagnostics;
mod level;
mod manager;
mod monitor;

pub use culling::{CULL_BUFFER_PX, SectionCuller, SectionVisibility, ViewportSize};
pub use diagnostics::DiagnosticsSnapshot;
pub use level::{Effect, QualityConfig, QualityLevel};
pub use manager::{
    AnimationConfig, BatteryState, DeviceProfile, QualityChange, QualityManager, QualityObserver,
    QualityReason, QualityTransition,
};
pub use monitor::{
    Confidence, FpsEstimates, OverheadReport, PerformanceMonitor, ProbeClock, measure_overhead,
};
