// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::position::{CanvasBounds, CanvasPosition};

/// Default proximity tolerance for [`SectionMap::section_at`], in weighted
/// canvas distance units.
pub const DEFAULT_SECTION_TOLERANCE: f64 = 50.0;

/// Error returned by the strict section lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown section id: {id}")]
pub struct UnknownSection {
    /// The id that was requested.
    pub id: &'static str,
}

/// One entry of the section spatial mapping table.
///
/// Pairs a logical section id with its designated canvas position and the
/// equivalent scroll percentage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionAnchor {
    /// Logical section identifier.
    pub id: &'static str,
    /// Designated canvas framing for this section.
    pub position: CanvasPosition,
    /// Scroll percentage equivalent to the framing, in [0, 100].
    pub scroll: f64,
}

/// Fixed, ordered table of section anchors: the single source of truth for
/// converting between scroll-based and spatial navigation.
///
/// Anchors are evenly spaced along the scroll axis: anchor `i` of `n` sits at
/// `i · 100 / (n − 1)` percent, so both scroll extremes land exactly on
/// anchors. The table is built once at startup and never mutated.
///
/// All lookups are total. Defaulting lookups degrade to
/// [`CanvasPosition::NEUTRAL`] (or scroll `0.0`) on an unknown id so that a
/// mistyped section never fails navigation; the `try_*` companions return
/// [`UnknownSection`] instead for callers that want to detect configuration
/// drift during development.
#[derive(Clone, Debug, Default)]
pub struct SectionMap {
    anchors: Vec<SectionAnchor>,
}

impl SectionMap {
    /// Builds a map from ordered `(id, position)` pairs.
    ///
    /// Scroll percentages are assigned by even spacing. A single-entry map
    /// places its anchor at scroll `0.0`.
    #[must_use]
    pub fn new(sections: &[(&'static str, CanvasPosition)]) -> Self {
        let n = sections.len();
        let anchors = sections
            .iter()
            .enumerate()
            .map(|(i, &(id, position))| SectionAnchor {
                id,
                position,
                scroll: if n > 1 {
                    i as f64 * 100.0 / (n - 1) as f64
                } else {
                    0.0
                },
            })
            .collect();
        Self { anchors }
    }

    /// The default photography-workflow table used by the portfolio canvas.
    #[must_use]
    pub fn portfolio() -> Self {
        Self::new(&[
            ("capture", CanvasPosition::new(0.0, -100.0, 1.0)),
            ("focus", CanvasPosition::new(200.0, -100.0, 1.0)),
            ("frame", CanvasPosition::new(400.0, 50.0, 1.2)),
            ("exposure", CanvasPosition::new(100.0, 150.0, 0.9)),
            ("develop", CanvasPosition::new(-200.0, 100.0, 1.1)),
            ("portfolio", CanvasPosition::new(0.0, 0.0, 1.0)),
        ])
    }

    /// Returns the ordered anchor table.
    #[must_use]
    pub fn anchors(&self) -> &[SectionAnchor] {
        &self.anchors
    }

    /// Number of sections in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Returns `true` if the table has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Maps a scroll percentage to a canvas position by linear interpolation
    /// between the two bracketing anchors.
    ///
    /// Input is clamped to `[0, 100]`. Scroll values that land exactly on an
    /// anchor return that anchor's stored position bit-for-bit, which makes
    /// anchors fixed points of the interpolation.
    #[must_use]
    pub fn scroll_to_canvas(&self, scroll_percent: f64) -> CanvasPosition {
        let n = self.anchors.len();
        match n {
            0 => return CanvasPosition::NEUTRAL,
            1 => return self.anchors[0].position,
            _ => {}
        }

        let scroll = if scroll_percent.is_nan() {
            0.0
        } else {
            scroll_percent.clamp(0.0, 100.0)
        };

        // Position along the anchor strip in units of one segment.
        let u = scroll / 100.0 * (n - 1) as f64;
        let mut idx = u.floor() as usize;
        if idx >= n - 1 {
            idx = n - 2;
        }
        let t = u - idx as f64;

        // Snap to the stored anchor when we are at (or within floating-point
        // noise of) a segment boundary, so anchors round-trip exactly.
        if t <= 1e-9 {
            return self.anchors[idx].position;
        }
        if t >= 1.0 - 1e-9 {
            return self.anchors[idx + 1].position;
        }
        self.anchors[idx].position.lerp(self.anchors[idx + 1].position, t)
    }

    /// Maps a canvas position to the scroll value of the *nearest* anchor,
    /// using the weighted distance metric of
    /// [`CanvasPosition::distance_to`].
    ///
    /// This is a nearest-anchor lookup, not the inverse of
    /// [`SectionMap::scroll_to_canvas`]: positions near the midpoint between
    /// two anchors snap to one side or the other, so round-tripping an
    /// interpolated position generally does not recover the original scroll
    /// value. A position exactly at an anchor does resolve to that anchor's
    /// scroll value. Returns `0.0` for an empty table.
    #[must_use]
    pub fn canvas_to_scroll(&self, position: CanvasPosition) -> f64 {
        self.nearest_anchor(position)
            .map_or(0.0, |(anchor, _)| anchor.scroll)
    }

    /// Looks up a section's designated position, degrading to
    /// [`CanvasPosition::NEUTRAL`] on an unknown id.
    #[must_use]
    pub fn section_position(&self, id: &str) -> CanvasPosition {
        self.find(id)
            .map_or(CanvasPosition::NEUTRAL, |a| a.position)
    }

    /// Looks up a section's scroll percentage, degrading to `0.0` on an
    /// unknown id.
    #[must_use]
    pub fn section_scroll(&self, id: &str) -> f64 {
        self.find(id).map_or(0.0, |a| a.scroll)
    }

    /// Strict variant of [`SectionMap::section_position`].
    pub fn try_section_position(
        &self,
        id: &'static str,
    ) -> Result<CanvasPosition, UnknownSection> {
        self.find(id)
            .map(|a| a.position)
            .ok_or(UnknownSection { id })
    }

    /// Strict variant of [`SectionMap::section_scroll`].
    pub fn try_section_scroll(&self, id: &'static str) -> Result<f64, UnknownSection> {
        self.find(id).map(|a| a.scroll).ok_or(UnknownSection { id })
    }

    /// Returns the id of the nearest section within `tolerance` weighted
    /// distance units of `position`, or `None` if nothing is close enough.
    ///
    /// Pass [`DEFAULT_SECTION_TOLERANCE`] for the standard proximity window.
    #[must_use]
    pub fn section_at(&self, position: CanvasPosition, tolerance: f64) -> Option<&'static str> {
        self.nearest_anchor(position)
            .filter(|&(_, dist)| dist <= tolerance)
            .map(|(anchor, _)| anchor.id)
    }

    /// Clamps a position into `bounds`; convenience re-export of
    /// [`CanvasPosition::clamp`] for callers holding a map reference.
    #[must_use]
    pub fn clamp_position(&self, position: CanvasPosition, bounds: &CanvasBounds) -> CanvasPosition {
        position.clamp(bounds)
    }

    fn find(&self, id: &str) -> Option<&SectionAnchor> {
        self.anchors.iter().find(|a| a.id == id)
    }

    fn nearest_anchor(&self, position: CanvasPosition) -> Option<(&SectionAnchor, f64)> {
        let mut best: Option<(&SectionAnchor, f64)> = None;
        for anchor in &self.anchors {
            let dist = anchor.position.distance_to(position);
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((anchor, dist));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_SECTION_TOLERANCE, SectionMap, UnknownSection};
    use crate::position::CanvasPosition;

    fn two_sections() -> SectionMap {
        SectionMap::new(&[
            ("capture", CanvasPosition::new(0.0, -100.0, 1.0)),
            ("focus", CanvasPosition::new(200.0, -100.0, 1.0)),
        ])
    }

    #[test]
    fn anchors_are_evenly_spaced() {
        let map = SectionMap::portfolio();
        let scrolls: Vec<f64> = map.anchors().iter().map(|a| a.scroll).collect();
        assert_eq!(scrolls, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn anchors_are_fixed_points_of_the_interpolation() {
        let map = SectionMap::portfolio();
        for anchor in map.anchors() {
            let pos = map.scroll_to_canvas(map.section_scroll(anchor.id));
            assert_eq!(pos, anchor.position, "anchor {} must round-trip", anchor.id);
        }
    }

    #[test]
    fn midpoint_interpolates_linearly() {
        // capture@0% → (0,-100,1.0), focus@100% → (200,-100,1.0); with only
        // two sections the anchors land at the scroll extremes, and the
        // midpoint must be the exact linear blend.
        let map = two_sections();
        let mid = map.scroll_to_canvas(50.0);
        assert!((mid.point.x - 100.0).abs() < 1e-9);
        assert!((mid.point.y - -100.0).abs() < 1e-9);
        assert!((mid.scale - 1.0).abs() < 1e-9);
    }

    #[test]
    fn portfolio_midpoint_between_first_two_sections() {
        // capture@0% and focus@20%: scroll 10 is the exact midpoint.
        let map = SectionMap::portfolio();
        let mid = map.scroll_to_canvas(10.0);
        assert!((mid.point.x - 100.0).abs() < 1e-9);
        assert!((mid.point.y - -100.0).abs() < 1e-9);
        assert!((mid.scale - 1.0).abs() < 1e-9);
    }

    #[test]
    fn interpolation_is_monotone_between_adjacent_anchors() {
        let map = SectionMap::portfolio();
        // capture → focus: x rises 0 → 200 while y and scale stay flat.
        let mut prev_x = f64::NEG_INFINITY;
        for step in 0..=40 {
            let scroll = f64::from(step) * 0.5; // 0..=20
            let pos = map.scroll_to_canvas(scroll);
            assert!(pos.point.x >= prev_x, "x must be non-decreasing");
            prev_x = pos.point.x;
        }
    }

    #[test]
    fn out_of_range_scroll_clamps_to_boundary_anchors() {
        let map = SectionMap::portfolio();
        assert_eq!(map.scroll_to_canvas(-25.0), map.section_position("capture"));
        assert_eq!(
            map.scroll_to_canvas(400.0),
            map.section_position("portfolio")
        );
        assert_eq!(map.scroll_to_canvas(f64::NAN), map.section_position("capture"));
    }

    #[test]
    fn reverse_lookup_resolves_anchor_positions_to_their_own_scroll() {
        let map = SectionMap::portfolio();
        for anchor in map.anchors() {
            let scroll = map.canvas_to_scroll(anchor.position);
            assert_eq!(scroll, anchor.scroll, "anchor {}", anchor.id);
        }
    }

    #[test]
    fn reverse_lookup_snaps_to_nearest_anchor_at_midpoints() {
        // Positions on either side of the midpoint between capture and focus
        // snap to different anchors even though the forward interpolation is
        // continuous there. The discontinuity is intended.
        let map = two_sections();
        let slightly_left = map.scroll_to_canvas(49.0);
        let slightly_right = map.scroll_to_canvas(51.0);
        assert_eq!(map.canvas_to_scroll(slightly_left), 0.0);
        assert_eq!(map.canvas_to_scroll(slightly_right), 100.0);
    }

    #[test]
    fn unknown_section_degrades_to_neutral() {
        let map = SectionMap::portfolio();
        assert_eq!(map.section_position("darkroom"), CanvasPosition::NEUTRAL);
        assert_eq!(map.section_scroll("darkroom"), 0.0);
    }

    #[test]
    fn strict_lookup_reports_unknown_ids() {
        let map = SectionMap::portfolio();
        assert!(map.try_section_position("capture").is_ok());
        assert_eq!(
            map.try_section_scroll("darkroom"),
            Err(UnknownSection { id: "darkroom" })
        );
    }

    #[test]
    fn section_at_respects_tolerance() {
        let map = SectionMap::portfolio();
        let near_capture = CanvasPosition::new(10.0, -90.0, 1.0);
        assert_eq!(
            map.section_at(near_capture, DEFAULT_SECTION_TOLERANCE),
            Some("capture")
        );

        let nowhere = CanvasPosition::new(10_000.0, 0.0, 1.0);
        assert_eq!(map.section_at(nowhere, DEFAULT_SECTION_TOLERANCE), None);
    }

    #[test]
    fn empty_map_is_total() {
        let map = SectionMap::new(&[]);
        assert_eq!(map.scroll_to_canvas(50.0), CanvasPosition::NEUTRAL);
        assert_eq!(map.canvas_to_scroll(CanvasPosition::NEUTRAL), 0.0);
        assert_eq!(map.section_at(CanvasPosition::NEUTRAL, 50.0), None);
    }

    #[test]
    fn single_section_map_pins_everything_to_its_anchor() {
        let map = SectionMap::new(&[("solo", CanvasPosition::new(5.0, 6.0, 1.5))]);
        assert_eq!(map.anchors()[0].scroll, 0.0);
        assert_eq!(map.scroll_to_canvas(0.0), map.section_position("solo"));
        assert_eq!(map.scroll_to_canvas(100.0), map.section_position("solo"));
    }
}
