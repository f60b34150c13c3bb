// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::level::QualityLevel;
use crate::manager::QualityManager;
use crate::monitor::{Confidence, PerformanceMonitor};

/// Point-in-time view of the performance and quality state, for overlays
/// and bug reports.
///
/// GPU utilization is a heuristic derived from frame pacing; there is no
/// direct GPU counter available to a host page.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosticsSnapshot {
    /// Current frames per second from the rolling window, if any frames
    /// have been recorded.
    pub fps: Option<f64>,
    /// Mean frame time over the rolling window, in milliseconds.
    pub average_frame_time_ms: Option<f64>,
    /// Most recent heap sample in megabytes, if the host reports one.
    pub memory_mb: Option<f64>,
    /// Estimated GPU load in `[0, 1]`: the fraction of the active level's
    /// frame budget that the average frame consumes.
    pub gpu_utilization_estimate: Option<f64>,
    /// Number of camera movements currently in flight, reported by the
    /// caller.
    pub active_operations: usize,
    /// Agreement between the independent fps estimators.
    pub confidence: Confidence,
    /// The active quality level.
    pub quality_level: QualityLevel,
}

impl DiagnosticsSnapshot {
    /// Captures a snapshot from the monitor and manager.
    #[must_use]
    pub fn capture(
        monitor: &PerformanceMonitor,
        manager: &QualityManager,
        active_operations: usize,
    ) -> Self {
        let average_frame_time_ms = monitor.average_frame_time_ms();
        let budget = manager.config().max_frame_time_ms;
        let gpu_utilization_estimate =
            average_frame_time_ms.map(|avg| (avg / budget).clamp(0.0, 1.0));
        Self {
            fps: monitor.fps(),
            average_frame_time_ms,
            memory_mb: monitor.memory_mb(),
            gpu_utilization_estimate,
            active_operations,
            confidence: monitor.confidence(),
            quality_level: manager.level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DiagnosticsSnapshot;
    use crate::level::QualityLevel;
    use crate::manager::QualityManager;
    use crate::monitor::{Confidence, PerformanceMonitor};

    #[test]
    fn empty_monitor_yields_an_empty_snapshot() {
        let monitor = PerformanceMonitor::new();
        let manager = QualityManager::new();

        let snapshot = DiagnosticsSnapshot::capture(&monitor, &manager, 0);
        assert_eq!(snapshot.fps, None);
        assert_eq!(snapshot.average_frame_time_ms, None);
        assert_eq!(snapshot.memory_mb, None);
        assert_eq!(snapshot.gpu_utilization_estimate, None);
        assert_eq!(snapshot.active_operations, 0);
        assert_eq!(snapshot.quality_level, QualityLevel::Highest);
    }

    #[test]
    fn snapshot_reflects_the_rolling_window() {
        let mut monitor = PerformanceMonitor::new();
        monitor.start();
        let mut now = 0.0;
        for _ in 0..60 {
            now += 16.0;
            monitor.record_frame(16.0, now);
        }
        monitor.record_memory(80.0);
        let manager = QualityManager::new();

        let snapshot = DiagnosticsSnapshot::capture(&monitor, &manager, 2);
        assert!((snapshot.fps.unwrap() - 62.5).abs() < 1e-9);
        assert!((snapshot.average_frame_time_ms.unwrap() - 16.0).abs() < 1e-9);
        assert_eq!(snapshot.memory_mb, Some(80.0));
        assert_eq!(snapshot.active_operations, 2);
        assert_eq!(snapshot.confidence, Confidence::Full);
    }

    #[test]
    fn utilization_is_frame_time_over_budget_clamped() {
        let mut monitor = PerformanceMonitor::new();
        monitor.start();
        let mut now = 0.0;
        for _ in 0..10 {
            // Way over any budget.
            now += 100.0;
            monitor.record_frame(100.0, now);
        }
        let manager = QualityManager::new();

        let snapshot = DiagnosticsSnapshot::capture(&monitor, &manager, 0);
        assert_eq!(snapshot.gpu_utilization_estimate, Some(1.0));
    }
}
