// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Easing: photography-equipment easing curves.
//!
//! This crate supplies a fixed catalog of named easing functions, each a pure
//! `[0, 1] → [0, 1]` progress mapping modeled on how real camera support
//! equipment moves:
//!
//! - A **three-phase motion profile** ([`PhaseProfile`]): an acceleration
//!   fraction, a constant-velocity plateau, and a deceleration fraction that
//!   together cover the whole progress range.
//! - A deterministic **oscillation** term simulating equipment micro-sway.
//! - An optional **variance** term simulating natural micro-jitter, drawn
//!   from a caller-supplied random source so tests stay reproducible.
//! - A **damping** factor blending the shaped curve with raw progress.
//!
//! The model intentionally trades strict mathematical smoothness for
//! perceptual authenticity: a handheld shot should feel different from a
//! mechanical slider.
//!
//! ## Determinism
//!
//! [`PhaseProfile::evaluate`] never touches randomness and is fully
//! deterministic. The variance term only participates through
//! [`PhaseProfile::evaluate_with`], which takes `&mut impl rand::Rng`; pass a
//! seeded [`rand::rngs::SmallRng`] for reproducible output or an
//! entropy-backed generator in production.
//!
//! ## Example
//!
//! ```rust
//! use viewfinder_easing::{CameraEasing, Equipment, MovementKind, ShotStyle, select_easing};
//!
//! let easing = select_easing(MovementKind::Pan, Equipment::Tripod, ShotStyle::Standard);
//! assert_eq!(easing, CameraEasing::TripodFluid);
//!
//! let halfway = easing.evaluate(0.5);
//! assert!(halfway > 0.0 && halfway < 1.0);
//! assert_eq!(easing.evaluate(0.0), 0.0);
//! assert_eq!(easing.evaluate(1.0), 1.0);
//! ```

mod catalog;
mod presets;
mod profile;
mod validate;

pub use catalog::{CameraEasing, Equipment, MovementKind, ShotStyle, select_easing};
pub use presets::ShotPreset;
pub use profile::PhaseProfile;
pub use validate::{DEFAULT_VALIDATION_SAMPLES, EasingIssue, EasingReport, validate_easing};
