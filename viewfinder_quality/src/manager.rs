// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::VecDeque;
use std::error::Error;

use viewfinder_camera::Movement;
use viewfinder_easing::CameraEasing;

use crate::level::{Effect, QualityConfig, QualityLevel};
use crate::monitor::PerformanceMonitor;

/// Heap usage above which quality is capped at [`QualityLevel::Low`], in
/// megabytes.
const MEMORY_PRESSURE_MB: f64 = 150.0;

/// How long a resize dip to [`QualityLevel::Medium`] lasts before the prior
/// level is restored.
const RESIZE_DIP_MS: f64 = 500.0;

/// Bounded length of the transition history.
const HISTORY_LIMIT: usize = 100;

/// Battery fraction below which a discharging device is capped at
/// [`QualityLevel::Low`].
const LOW_BATTERY: f64 = 0.2;

/// Why a quality transition happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QualityReason {
    /// Measured frame rate crossed a threshold.
    Automatic,
    /// Measured heap exceeded the pressure limit.
    MemoryPressure,
    /// The tab became hidden.
    TabHidden,
    /// The tab became visible again.
    TabVisible,
    /// A window resize is in progress.
    Resize,
    /// Startup device detection (memory/core count).
    DeviceProfile,
    /// Battery is low and not charging.
    BatteryLow,
    /// An explicit caller-requested change.
    Manual,
    /// A temporary dip expired and the prior level came back.
    Restored,
}

/// Payload delivered to observers on every transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualityChange {
    /// Level before the transition.
    pub previous: QualityLevel,
    /// Level after the transition.
    pub new_level: QualityLevel,
    /// Why the transition happened.
    pub reason: QualityReason,
    /// Host timestamp of the transition in milliseconds.
    pub at_ms: f64,
}

/// One record of the append-only transition history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualityTransition {
    /// The transition itself.
    pub change: QualityChange,
    /// Configuration active after the transition.
    pub config: &'static QualityConfig,
}

/// Typed observer of quality transitions.
///
/// Observers are notified synchronously, in registration order, after the
/// active configuration has already been updated — an observer reading
/// [`QualityManager::config`] during the callback sees the new state. A
/// returned error is logged as a warning and isolated; remaining observers
/// are still notified.
pub trait QualityObserver {
    /// Called once per transition.
    fn quality_changed(&mut self, change: &QualityChange) -> Result<(), Box<dyn Error>>;
}

/// Battery signal from the host, if one exists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatteryState {
    /// Charge fraction in `[0, 1]`.
    pub level: f64,
    /// Whether the device is on external power.
    pub charging: bool,
}

/// Startup device detection hints. Every field is optional; a missing
/// signal simply skips the corresponding adjustment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviceProfile {
    /// Device memory hint in gigabytes.
    pub memory_gb: Option<f64>,
    /// Logical CPU count.
    pub logical_cores: Option<u32>,
    /// Battery state, if the host exposes one.
    pub battery: Option<BatteryState>,
}

/// Per-archetype animation parameters derived from the active quality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    /// Duration to request from the camera calculator, in milliseconds.
    pub duration_ms: f64,
    /// Easing to request.
    pub easing: CameraEasing,
    /// Whether to keep GPU-accelerated compositing hints on.
    pub use_gpu: bool,
    /// Whether the driver should drop alternate frames.
    pub skip_frames: bool,
}

struct PendingRestore {
    level: QualityLevel,
    due_ms: f64,
    generation: u64,
}

/// The quality state machine: one active [`QualityLevel`] per instance,
/// mutated only through the methods below, with every transition recorded
/// and broadcast.
///
/// The manager is an explicit instance meant to be injected into its
/// consumers, never a process-global; tests instantiate as many independent
/// managers as they need.
///
/// Manual-override discipline: once [`QualityManager::set_manual`] runs,
/// every automatic pathway ([`QualityManager::check_thresholds`], resize
/// dips, device profiling, battery) becomes a no-op until
/// [`QualityManager::clear_manual`]. The one exception is tab visibility:
/// a hidden tab always drops to [`QualityLevel::Minimal`] because nothing
/// is visible to degrade, and the prior level (manual or not) is restored
/// when visibility returns.
pub struct QualityManager {
    level: QualityLevel,
    manual_override: bool,
    observers: Vec<Option<Box<dyn QualityObserver>>>,
    history: VecDeque<QualityTransition>,
    resize_generation: u64,
    pending_restore: Option<PendingRestore>,
    level_before_hidden: Option<QualityLevel>,
}

impl Default for QualityManager {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for QualityManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QualityManager")
            .field("level", &self.level)
            .field("manual_override", &self.manual_override)
            .field("observers", &self.observers.len())
            .field("history_len", &self.history.len())
            .finish_non_exhaustive()
    }
}

impl QualityManager {
    /// Creates a manager starting at [`QualityLevel::Highest`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: QualityLevel::Highest,
            manual_override: false,
            observers: Vec::new(),
            history: VecDeque::new(),
            resize_generation: 0,
            pending_restore: None,
            level_before_hidden: None,
        }
    }

    /// The active quality level.
    #[must_use]
    pub fn level(&self) -> QualityLevel {
        self.level
    }

    /// Configuration for the active level.
    #[must_use]
    pub fn config(&self) -> &'static QualityConfig {
        self.level.config()
    }

    /// Whether a manual override is suspending automatic adjustment.
    #[must_use]
    pub fn is_manual(&self) -> bool {
        self.manual_override
    }

    fn is_hidden(&self) -> bool {
        self.level_before_hidden.is_some()
    }

    /// Registers an observer; returns a handle for
    /// [`QualityManager::remove_observer`].
    pub fn add_observer(&mut self, observer: Box<dyn QualityObserver>) -> usize {
        self.observers.push(Some(observer));
        self.observers.len() - 1
    }

    /// Removes a previously registered observer. Unknown handles are
    /// ignored.
    pub fn remove_observer(&mut self, handle: usize) {
        if let Some(slot) = self.observers.get_mut(handle) {
            *slot = None;
        }
    }

    /// The bounded, append-only transition history, oldest first.
    #[must_use]
    pub fn history(&self) -> impl Iterator<Item = &QualityTransition> {
        self.history.iter()
    }

    /// Explicit caller-requested quality change. Suspends automatic
    /// adjustment and cancels any pending resize restore.
    pub fn set_manual(&mut self, level: QualityLevel, now_ms: f64) {
        self.manual_override = true;
        self.resize_generation += 1;
        self.pending_restore = None;
        self.transition(level, QualityReason::Manual, now_ms);
    }

    /// Re-enables automatic adjustment. The level stays where it is until
    /// the next threshold check moves it.
    pub fn clear_manual(&mut self) {
        self.manual_override = false;
    }

    /// Applies the fps- and memory-derived quality policy from the
    /// monitor's current rolling metrics.
    ///
    /// No-op while a manual override is active, while the tab is hidden,
    /// while the monitor is stopped, or before any frame samples exist.
    pub fn check_thresholds(&mut self, monitor: &PerformanceMonitor, now_ms: f64) {
        if self.manual_override || self.is_hidden() || !monitor.is_running() {
            return;
        }
        let Some(fps) = monitor.fps() else {
            return;
        };

        let mut target = QualityLevel::from_fps(fps);
        let mut reason = QualityReason::Automatic;
        if let Some(memory) = monitor.memory_mb() {
            if memory > MEMORY_PRESSURE_MB && target > QualityLevel::Low {
                target = QualityLevel::Low;
                reason = QualityReason::MemoryPressure;
            }
        }

        self.transition(target, reason, now_ms);
    }

    /// Reports a tab-visibility change. Hidden forces
    /// [`QualityLevel::Minimal`]; becoming visible restores the level that
    /// was active when the tab hid. Applies even under manual override —
    /// nothing is visible to degrade — and the manual level comes back on
    /// return.
    pub fn set_tab_visible(&mut self, visible: bool, now_ms: f64) {
        if visible {
            if let Some(prior) = self.level_before_hidden.take() {
                self.transition(prior, QualityReason::TabVisible, now_ms);
            }
        } else if self.level_before_hidden.is_none() {
            self.level_before_hidden = Some(self.level);
            self.transition(QualityLevel::Minimal, QualityReason::TabHidden, now_ms);
        }
    }

    /// Reports a window resize: quality dips to [`QualityLevel::Medium`]
    /// for 500 ms, then [`QualityManager::tick`] restores the prior level.
    ///
    /// A newer resize extends the dip; the generation counter ensures a
    /// stale restore never fires after it was superseded. No-op under
    /// manual override or while the tab is hidden.
    pub fn note_resize(&mut self, now_ms: f64) {
        if self.manual_override || self.is_hidden() {
            return;
        }
        self.resize_generation += 1;
        match &mut self.pending_restore {
            Some(pending) => {
                pending.due_ms = now_ms + RESIZE_DIP_MS;
                pending.generation = self.resize_generation;
            }
            None => {
                let prior = self.level;
                self.pending_restore = Some(PendingRestore {
                    level: prior,
                    due_ms: now_ms + RESIZE_DIP_MS,
                    generation: self.resize_generation,
                });
                self.transition(QualityLevel::Medium, QualityReason::Resize, now_ms);
            }
        }
    }

    /// Advances time-driven state: fires a due resize restore. Hosts call
    /// this from the same cadence that drives the monitor.
    ///
    /// A due restore is deferred while the tab is hidden; the hidden tab
    /// stays at [`QualityLevel::Minimal`] and the restore fires on the
    /// first tick after visibility returns.
    pub fn tick(&mut self, now_ms: f64) {
        if self.is_hidden() {
            return;
        }
        let Some(pending) = self.pending_restore.take() else {
            return;
        };
        if now_ms >= pending.due_ms && pending.generation == self.resize_generation {
            self.transition(pending.level, QualityReason::Restored, now_ms);
        } else {
            self.pending_restore = Some(pending);
        }
    }

    /// Applies startup device detection: <2 GB memory caps at
    /// [`QualityLevel::Low`], fewer than 4 logical cores at
    /// [`QualityLevel::Medium`], and a low, discharging battery at
    /// [`QualityLevel::Low`]. Missing signals skip their adjustment; no-op
    /// under manual override.
    pub fn apply_device_profile(&mut self, profile: &DeviceProfile, now_ms: f64) {
        if self.manual_override {
            return;
        }
        if let Some(memory_gb) = profile.memory_gb {
            if memory_gb < 2.0 {
                self.cap(QualityLevel::Low, QualityReason::DeviceProfile, now_ms);
            }
        }
        if let Some(cores) = profile.logical_cores {
            if cores < 4 {
                self.cap(QualityLevel::Medium, QualityReason::DeviceProfile, now_ms);
            }
        }
        if let Some(battery) = profile.battery {
            if battery.level < LOW_BATTERY && !battery.charging {
                self.cap(QualityLevel::Low, QualityReason::BatteryLow, now_ms);
            }
        }
    }

    /// Derives the animation parameters a caller should pass to the camera
    /// calculator for the given archetype: the level's base duration scaled
    /// by a per-archetype multiplier, plus the level's easing and GPU hint.
    #[must_use]
    pub fn animation_config(&self, movement: Movement) -> AnimationConfig {
        let config = self.config();
        let multiplier = match movement {
            Movement::ZoomIn | Movement::ZoomOut => 0.8,
            Movement::MatchCut => 0.4,
            Movement::RackFocus => 0.6,
            Movement::PanTilt | Movement::DollyZoom => 1.0,
        };
        AnimationConfig {
            duration_ms: config.base_duration_ms * multiplier,
            easing: config.easing,
            use_gpu: config.use_gpu,
            skip_frames: self.level <= QualityLevel::Low,
        }
    }

    /// Whether the presentation layer should apply the given optional
    /// effect at the current level.
    #[must_use]
    pub fn effect_enabled(&self, effect: Effect) -> bool {
        self.config().effect_enabled(effect)
    }

    fn cap(&mut self, ceiling: QualityLevel, reason: QualityReason, now_ms: f64) {
        if self.level > ceiling {
            self.transition(ceiling, reason, now_ms);
        }
    }

    /// Sole mutator of the active level. Records history and notifies
    /// observers synchronously; a no-op when the level is unchanged.
    fn transition(&mut self, level: QualityLevel, reason: QualityReason, now_ms: f64) {
        if level == self.level {
            return;
        }
        let change = QualityChange {
            previous: self.level,
            new_level: level,
            reason,
            at_ms: now_ms,
        };
        self.level = level;

        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(QualityTransition {
            change,
            config: level.config(),
        });

        tracing::debug!(
            previous = ?change.previous,
            new_level = ?change.new_level,
            reason = ?change.reason,
            "quality transition"
        );

        for slot in &mut self.observers {
            if let Some(observer) = slot {
                if let Err(error) = observer.quality_changed(&change) {
                    tracing::warn!(%error, "quality observer failed; continuing");
                }
            }
        }
    }
}
