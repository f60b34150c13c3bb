// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Spatial: scroll↔canvas coordinate transforms and section anchors.
//!
//! This crate provides the deterministic mapping between a 1D scroll progress
//! value (0–100) and a position on an abstract 2D canvas. It focuses on:
//! - The [`CanvasPosition`] value type (x/y point plus a zoom scale).
//! - A fixed, ordered [`SectionMap`] of anchor positions, one per logical
//!   section, evenly spaced along the scroll axis.
//! - Forward interpolation ([`SectionMap::scroll_to_canvas`]) and
//!   nearest-anchor reverse lookup ([`SectionMap::canvas_to_scroll`]).
//! - Generic transition paths ([`transition_path`]) and distance-based
//!   duration estimation ([`estimate_duration`]).
//!
//! It does **not** own any rendering or animation driving. Callers are
//! expected to:
//! - Feed scroll progress in once per interaction tick and apply the
//!   resulting position to their own canvas transform.
//! - Use `viewfinder_camera` on top of this crate to produce full cinematic
//!   movement sequences between two positions.
//!
//! ## Minimal example
//!
//! ```rust
//! use viewfinder_spatial::{CanvasPosition, SectionMap};
//!
//! let map = SectionMap::new(&[
//!     ("capture", CanvasPosition::new(0.0, -100.0, 1.0)),
//!     ("focus", CanvasPosition::new(200.0, -100.0, 1.0)),
//! ]);
//!
//! // Halfway between the two anchors.
//! let mid = map.scroll_to_canvas(50.0);
//! assert_eq!(mid.point.x, 100.0);
//!
//! // An exact anchor position resolves back to its own scroll value.
//! let scroll = map.canvas_to_scroll(map.section_position("focus"));
//! assert_eq!(scroll, 100.0);
//! ```
//!
//! ## Design notes
//!
//! - All operations are total: out-of-range scroll values are clamped and
//!   unknown section ids degrade to a neutral position rather than failing.
//!   Strict `try_*` lookups are available for development-time validation.
//! - [`SectionMap::canvas_to_scroll`] is deliberately *not* the mathematical
//!   inverse of [`SectionMap::scroll_to_canvas`]; it answers "which named
//!   section is this closest to". See its documentation for the midpoint
//!   discontinuity this implies.

mod map;
mod path;
mod position;

pub use map::{DEFAULT_SECTION_TOLERANCE, SectionAnchor, SectionMap, UnknownSection};
pub use path::{
    DEFAULT_TRANSITION_STEPS, PathEasing, estimate_duration, estimate_duration_with,
    transition_path,
};
pub use position::{CanvasBounds, CanvasPosition, SCALE_DISTANCE_WEIGHT};
