//! Alignment snapping of a dragged widget against the other widgets on screen.
//!
//! X and Y are decided independently: each axis takes its nearest candidate,
//! so a widget can line up with one neighbour horizontally and another
//! vertically at the same time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use touchdeck_core::{
    LayerKey, Layout, PercentPosition, Rect, ScreenMetrics, Size, Vec2, WidgetKey,
    min_rect_distance, to_percent_position,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SnapMode {
    /// Every eligible widget is a candidate.
    #[default]
    FullScreen,
    /// Only widgets within a radius of the dragged one.
    Local,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SnapScope {
    #[default]
    AllLayers,
    CurrentLayer,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SnapConfig {
    pub enabled: bool,
    pub mode: SnapMode,
    pub threshold_dp: f32,
    pub local_radius_dp: f32,
    pub scope: SnapScope,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: SnapMode::FullScreen,
            threshold_dp: 10.0,
            local_radius_dp: 80.0,
            scope: SnapScope::AllLayers,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuidelineAxis {
    /// A vertical line at an x coordinate.
    Vertical,
    /// A horizontal line at a y coordinate.
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Guideline {
    pub axis: GuidelineAxis,
    pub position: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct SnapRequest<'a> {
    /// Tentative top-left offset, already clamped to the screen.
    pub offset: Vec2,
    pub size: Size,
    pub screen: Size,
    /// Rectangles of the other eligible widgets, in declaration order.
    pub candidates: &'a [Rect],
    /// Pixel gap below which an alignment snaps.
    pub threshold: f32,
    pub mode: SnapMode,
    /// Pixel radius for [`SnapMode::Local`].
    pub local_radius: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SnapOutcome {
    pub position: PercentPosition,
    /// Pixel offset the position was derived from.
    pub offset: Vec2,
    /// Empty when nothing snapped; the guideline display should be cancelled.
    pub guidelines: Vec<Guideline>,
}

/// Candidate coordinates for one axis, keyed by the resulting coordinate.
/// A repeated coordinate replaces the guideline but keeps its first slot.
#[derive(Default)]
struct AxisCandidates {
    slots: Vec<(f32, Guideline)>,
}

impl AxisCandidates {
    fn record(&mut self, coord: f32, guideline: Guideline) {
        match self.slots.iter_mut().find(|(c, _)| *c == coord) {
            Some(slot) => slot.1 = guideline,
            None => self.slots.push((coord, guideline)),
        }
    }

    /// Nearest to `from`; the earliest slot wins ties.
    fn nearest(&self, from: f32) -> Option<(f32, Guideline)> {
        let mut best: Option<(f32, Guideline)> = None;
        for &(coord, g) in &self.slots {
            let closer = match best {
                Some((b, _)) => (coord - from).abs() < (b - from).abs(),
                None => true,
            };
            if closer {
                best = Some((coord, g));
            }
        }
        best
    }
}

pub fn compute_snap(req: &SnapRequest<'_>) -> SnapOutcome {
    let dragged = Rect::from_origin_size(req.offset, req.size);
    let mut xs = AxisCandidates::default();
    let mut ys = AxisCandidates::default();
    let near = |a: f32, b: f32| (a - b).abs() < req.threshold;
    let v = |position| Guideline {
        axis: GuidelineAxis::Vertical,
        position,
    };
    let h = |position| Guideline {
        axis: GuidelineAxis::Horizontal,
        position,
    };

    for other in req.candidates {
        if req.mode == SnapMode::Local && min_rect_distance(&dragged, other) > req.local_radius {
            continue;
        }

        // edge to opposite edge
        if near(dragged.right(), other.x) {
            xs.record(other.x - dragged.w, v(other.x));
        }
        if near(dragged.x, other.right()) {
            xs.record(other.right(), v(other.right()));
        }
        if near(dragged.bottom(), other.y) {
            ys.record(other.y - dragged.h, h(other.y));
        }
        if near(dragged.y, other.bottom()) {
            ys.record(other.bottom(), h(other.bottom()));
        }
        // edge to same edge
        if near(dragged.x, other.x) {
            xs.record(other.x, v(other.x));
        }
        if near(dragged.right(), other.right()) {
            xs.record(other.right() - dragged.w, v(other.right()));
        }
        if near(dragged.y, other.y) {
            ys.record(other.y, h(other.y));
        }
        if near(dragged.bottom(), other.bottom()) {
            ys.record(other.bottom() - dragged.h, h(other.bottom()));
        }
    }

    let snap_x = xs.nearest(dragged.x);
    let snap_y = ys.nearest(dragged.y);
    log::trace!("snap: x {:?}, y {:?}", snap_x, snap_y);

    let offset = Vec2 {
        x: snap_x.map(|(c, _)| c).unwrap_or(dragged.x),
        y: snap_y.map(|(c, _)| c).unwrap_or(dragged.y),
    };
    let guidelines = snap_x.into_iter().chain(snap_y).map(|(_, g)| g).collect();

    SnapOutcome {
        position: to_percent_position(offset, req.size, req.screen),
        offset,
        guidelines,
    }
}

/// Rectangles of every widget `dragged` may align with.
///
/// Hidden layers, `editor_hidden` layers and zero-size widgets (such as
/// unmeasured `Wrap` text) are skipped. With
/// [`SnapScope::CurrentLayer`] only `current_layer` (or the dragged widget's
/// own layer when `None`) contributes. Order follows layer order, then each
/// layer's normal widgets and text widgets as stored.
pub fn snap_candidates(
    layout: &Layout,
    dragged: WidgetKey,
    scope: SnapScope,
    current_layer: Option<LayerKey>,
    editor_hidden: &[LayerKey],
    metrics: &ScreenMetrics,
) -> Vec<Rect> {
    let current = current_layer.or_else(|| layout.layer_of(dragged));
    layout
        .layers()
        .filter(|(key, layer)| !layer.hide && !editor_hidden.contains(key))
        .filter(|(key, _)| scope == SnapScope::AllLayers || Some(*key) == current)
        .flat_map(|(_, layer)| layer.widgets())
        .filter(|key| *key != dragged)
        .map(|key| layout.widget_rect(key, metrics))
        .filter(|rect| !rect.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect { x, y, w, h }
    }

    fn request(offset: Vec2, candidates: &[Rect]) -> SnapRequest<'_> {
        SnapRequest {
            offset,
            size: Size::new(100.0, 100.0),
            screen: Size::new(2000.0, 1000.0),
            candidates,
            threshold: 10.0,
            mode: SnapMode::FullScreen,
            local_radius: 50.0,
        }
    }

    #[test]
    fn test_left_edge_snaps_to_right_edge() {
        let others = [rect(0.0, 500.0, 300.0, 100.0)];
        let out = compute_snap(&request(Vec2::new(306.0, 100.0), &others));
        assert_eq!(out.offset, Vec2::new(300.0, 100.0));
        assert_eq!(
            out.guidelines,
            vec![Guideline {
                axis: GuidelineAxis::Vertical,
                position: 300.0
            }]
        );
    }

    #[test]
    fn test_no_candidate_returns_tentative_position() {
        let others = [rect(1500.0, 800.0, 100.0, 100.0)];
        let out = compute_snap(&request(Vec2::new(950.0, 450.0), &others));
        assert!(out.guidelines.is_empty());
        assert_eq!(out.offset, Vec2::new(950.0, 450.0));
        assert_eq!(out.position, PercentPosition::new(5000, 5000));
    }

    #[test]
    fn test_axes_snap_to_different_widgets() {
        let others = [
            rect(500.0, 700.0, 50.0, 50.0), // left-aligned candidate for x
            rect(1200.0, 203.0, 50.0, 50.0), // top-aligned candidate for y
        ];
        let out = compute_snap(&request(Vec2::new(497.0, 200.0), &others));
        assert_eq!(out.offset, Vec2::new(500.0, 203.0));
        assert_eq!(out.guidelines.len(), 2);
        assert_eq!(out.guidelines[0].axis, GuidelineAxis::Vertical);
        assert_eq!(out.guidelines[1].axis, GuidelineAxis::Horizontal);
    }

    #[test]
    fn test_nearest_candidate_per_axis_wins() {
        let others = [
            rect(408.0, 700.0, 50.0, 50.0), // left-left, 8px away
            rect(403.0, 900.0, 50.0, 50.0), // left-left, 3px away
        ];
        let out = compute_snap(&request(Vec2::new(400.0, 100.0), &others));
        assert_eq!(out.offset.x, 403.0);
    }

    #[test]
    fn test_equal_distance_first_declared_wins() {
        let others = [
            rect(404.0, 700.0, 50.0, 50.0),
            rect(396.0, 900.0, 50.0, 50.0),
        ];
        let out = compute_snap(&request(Vec2::new(400.0, 100.0), &others));
        assert_eq!(out.offset.x, 404.0);

        let swapped = [others[1], others[0]];
        let out = compute_snap(&request(Vec2::new(400.0, 100.0), &swapped));
        assert_eq!(out.offset.x, 396.0);
    }

    #[test]
    fn test_same_coordinate_last_guideline_wins() {
        // both alignments land on x = 300: right-to-left against the first
        // widget (line at 400), left-to-left against the second (line at 300)
        let others = [
            rect(400.0, 700.0, 50.0, 50.0),
            rect(300.0, 900.0, 50.0, 50.0),
        ];
        let out = compute_snap(&request(Vec2::new(302.0, 100.0), &others));
        assert_eq!(out.offset.x, 300.0);
        assert_eq!(
            out.guidelines,
            vec![Guideline {
                axis: GuidelineAxis::Vertical,
                position: 300.0
            }]
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let others = [rect(0.0, 500.0, 300.0, 100.0)];
        let out = compute_snap(&request(Vec2::new(310.0, 100.0), &others));
        assert!(out.guidelines.is_empty());
    }

    #[test]
    fn test_candidates_skip_zero_size_widgets() {
        use touchdeck_core::{Layer, Widget, WidgetSize};

        let metrics = ScreenMetrics::new(1000.0, 1000.0, 1.0);
        let mut layout = Layout::new();
        let layer = layout.add_layer(Layer::new("main", "Main")).unwrap();
        let dragged = layout.add_widget(layer, Widget::text("d", "D")).unwrap();
        let label = layout
            .add_widget(layer, Widget::text("label", "hi").sized(WidgetSize::Wrap))
            .unwrap();

        let found = |layout: &Layout| {
            snap_candidates(layout, dragged, SnapScope::AllLayers, None, &[], &metrics)
        };
        assert!(found(&layout).is_empty());

        layout.set_measured_size(label, Size::new(40.0, 20.0)).unwrap();
        assert_eq!(found(&layout), vec![rect(0.0, 0.0, 40.0, 20.0)]);
    }

    #[test]
    fn test_local_mode_excludes_far_candidates() {
        // x edges line up within threshold but the widget is 400px below
        let others = [rect(0.0, 600.0, 300.0, 100.0)];
        let mut req = request(Vec2::new(305.0, 100.0), &others);
        req.mode = SnapMode::Local;
        let out = compute_snap(&req);
        assert!(out.guidelines.is_empty());
        assert_eq!(out.offset.x, 305.0);

        req.mode = SnapMode::FullScreen;
        assert_eq!(compute_snap(&req).offset.x, 300.0);

        req.mode = SnapMode::Local;
        req.local_radius = 500.0;
        assert_eq!(compute_snap(&req).offset.x, 300.0);
    }
}
