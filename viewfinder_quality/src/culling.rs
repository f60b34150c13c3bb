// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use viewfinder_spatial::{CanvasPosition, SectionMap};

/// Margin around the viewport, in screen pixels, inside which a section
/// still counts as visible. Keeps sections warm just before they scroll
/// into frame.
pub const CULL_BUFFER_PX: f64 = 100.0;

/// Minimum interval between recomputations, in milliseconds. Calls inside
/// the interval return the cached result.
const THROTTLE_MS: f64 = 100.0;

/// Viewport dimensions in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ViewportSize {
    /// Creates a viewport size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Per-section visibility verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionVisibility {
    /// Section identifier from the [`SectionMap`].
    pub id: &'static str,
    /// Whether the section lands inside the buffered viewport.
    pub visible: bool,
    /// Whether the presentation layer should keep compositing hints warm
    /// for this section. Tracks `visible`.
    pub hint_will_change: bool,
}

/// Throttled visibility culler for the sections of a [`SectionMap`].
///
/// The culler projects each anchor into screen space relative to the
/// camera, then tests it against the viewport expanded by
/// [`CULL_BUFFER_PX`]. Results are cached and recomputed at most once per
/// 100 ms of caller-supplied time, so hosts can call it every frame.
#[derive(Debug, Default)]
pub struct SectionCuller {
    last_run_ms: Option<f64>,
    cached: Vec<SectionVisibility>,
}

impl SectionCuller {
    /// Creates a culler with no cached result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces the next [`SectionCuller::cull`] to recompute regardless of
    /// the throttle. Hosts call this after a resize or a section-map swap.
    pub fn invalidate(&mut self) {
        self.last_run_ms = None;
    }

    /// Computes (or returns the cached) visibility of every section for
    /// the given camera position and viewport.
    ///
    /// A section's screen position is its anchor offset from the camera,
    /// scaled by the camera's zoom, relative to the viewport center.
    pub fn cull(
        &mut self,
        camera: CanvasPosition,
        viewport: ViewportSize,
        map: &SectionMap,
        now_ms: f64,
    ) -> &[SectionVisibility] {
        let throttled = self
            .last_run_ms
            .is_some_and(|last| now_ms - last < THROTTLE_MS);
        if throttled {
            return &self.cached;
        }
        self.last_run_ms = Some(now_ms);

        let half_w = viewport.width / 2.0;
        let half_h = viewport.height / 2.0;
        self.cached.clear();
        self.cached.extend(map.anchors().iter().map(|anchor| {
            let screen_x = (anchor.position.point.x - camera.point.x) * camera.scale + half_w;
            let screen_y = (anchor.position.point.y - camera.point.y) * camera.scale + half_h;
            let visible = screen_x >= -CULL_BUFFER_PX
                && screen_x <= viewport.width + CULL_BUFFER_PX
                && screen_y >= -CULL_BUFFER_PX
                && screen_y <= viewport.height + CULL_BUFFER_PX;
            SectionVisibility {
                id: anchor.id,
                visible,
                hint_will_change: visible,
            }
        }));
        &self.cached
    }
}

#[cfg(test)]
mod tests {
    use super::{SectionCuller, ViewportSize, CULL_BUFFER_PX};
    use viewfinder_spatial::{CanvasPosition, SectionMap};

    const VIEWPORT: ViewportSize = ViewportSize::new(1280.0, 800.0);

    #[test]
    fn camera_on_a_section_sees_it() {
        let map = SectionMap::portfolio();
        let mut culler = SectionCuller::new();
        let camera = map.section_position("capture");

        let visible = culler.cull(camera, VIEWPORT, &map, 0.0);
        let capture = visible.iter().find(|v| v.id == "capture").unwrap();
        assert!(capture.visible);
        assert!(capture.hint_will_change);
    }

    #[test]
    fn distant_sections_are_culled() {
        let map = SectionMap::portfolio();
        let mut culler = SectionCuller::new();
        // Far off to the side of every anchor.
        let camera = CanvasPosition::new(5000.0, 5000.0, 1.0);

        let visible = culler.cull(camera, VIEWPORT, &map, 0.0);
        assert!(visible.iter().all(|v| !v.visible));
    }

    #[test]
    fn the_buffer_extends_the_viewport() {
        let map = SectionMap::new(&[
            ("center", CanvasPosition::NEUTRAL),
            ("edge", CanvasPosition::new(VIEWPORT.width / 2.0 + CULL_BUFFER_PX - 1.0, 0.0, 1.0)),
            ("beyond", CanvasPosition::new(VIEWPORT.width / 2.0 + CULL_BUFFER_PX + 1.0, 0.0, 1.0)),
        ]);
        let mut culler = SectionCuller::new();

        let visible = culler.cull(CanvasPosition::NEUTRAL, VIEWPORT, &map, 0.0);
        assert!(visible.iter().find(|v| v.id == "edge").unwrap().visible);
        assert!(!visible.iter().find(|v| v.id == "beyond").unwrap().visible);
    }

    #[test]
    fn zoom_pushes_offscreen_sections_further_out() {
        let map = SectionMap::new(&[(
            "near",
            CanvasPosition::new(400.0, 0.0, 1.0),
        )]);
        let mut culler = SectionCuller::new();

        let at_1x = culler.cull(CanvasPosition::NEUTRAL, VIEWPORT, &map, 0.0);
        assert!(at_1x[0].visible);

        culler.invalidate();
        let camera = CanvasPosition::new(0.0, 0.0, 3.0);
        let at_3x = culler.cull(camera, VIEWPORT, &map, 0.0);
        // 400 * 3 = 1200 from center, past 640 + 100.
        assert!(!at_3x[0].visible);
    }

    #[test]
    fn calls_inside_the_throttle_window_reuse_the_cache() {
        let map = SectionMap::portfolio();
        let mut culler = SectionCuller::new();
        let near = map.section_position("capture");
        let far = CanvasPosition::new(5000.0, 5000.0, 1.0);

        let first: Vec<_> = culler.cull(near, VIEWPORT, &map, 0.0).to_vec();
        // Position changed, but only 50ms elapsed.
        let second: Vec<_> = culler.cull(far, VIEWPORT, &map, 50.0).to_vec();
        assert_eq!(first, second);

        let third = culler.cull(far, VIEWPORT, &map, 100.0);
        assert!(third.iter().all(|v| !v.visible));
    }

    #[test]
    fn invalidate_bypasses_the_throttle() {
        let map = SectionMap::portfolio();
        let mut culler = SectionCuller::new();
        let near = map.section_position("capture");
        let far = CanvasPosition::new(5000.0, 5000.0, 1.0);

        let _ = culler.cull(near, VIEWPORT, &map, 0.0);
        culler.invalidate();
        let refreshed = culler.cull(far, VIEWPORT, &map, 10.0);
        assert!(refreshed.iter().all(|v| !v.visible));
    }
}
