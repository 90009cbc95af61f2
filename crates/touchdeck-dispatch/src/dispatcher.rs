use std::collections::HashMap;

use touchdeck_core::{
    Layout, PointerEvent, PointerId, PointerKind, ScreenMetrics, Vec2, VisibilityContext,
    WidgetKey, is_layer_visible, visibility_matches,
};

use crate::button::{self, ActiveList, ActiveWidget, TouchResponse, TouchSession};
use crate::PointerHost;

/// What happened to one pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Not a touch pointer.
    Ignored,
    /// Claimed by another input layer.
    Occupied,
    /// A target widget is already mid-gesture; nothing was delivered.
    Rejected,
    /// The press was offered to the targets. `consumed_by` is the widget that
    /// stopped delivery, if any.
    Pressed { consumed_by: Option<WidgetKey> },
    /// Pointer lifted; this many widgets were associated with it.
    Released { widgets: usize },
}

/// Routes pointer samples to the widgets of a [`Layout`].
///
/// The only state kept between events is which widgets each pointer is
/// currently associated with. Pressed/toggled flags live on the widgets.
#[derive(Debug, Default)]
pub struct TouchDispatcher {
    active: HashMap<PointerId, ActiveList>,
}

impl TouchDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_widgets(&self, id: PointerId) -> &[ActiveWidget] {
        self.active.get(&id).map(|l| l.as_slice()).unwrap_or(&[])
    }

    pub fn active_pointer_count(&self) -> usize {
        self.active.len()
    }

    pub fn dispatch(
        &mut self,
        layout: &mut Layout,
        event: &PointerEvent,
        ctx: &VisibilityContext,
        metrics: &ScreenMetrics,
        host: &mut dyn PointerHost,
    ) -> DispatchOutcome {
        if event.kind != PointerKind::Touch {
            return DispatchOutcome::Ignored;
        }
        if host.is_pointer_occupied(event.id) {
            return DispatchOutcome::Occupied;
        }

        if !event.pressed {
            let widgets = self.release_pointer(layout, event.id, host);
            return DispatchOutcome::Released { widgets };
        }

        let hits = hit_test(layout, event.position, ctx, metrics);
        let targets = resolve_targets(layout, hits);
        log::trace!(
            "pointer {:?} at ({}, {}): targets {:?}",
            event.id,
            event.position.x,
            event.position.y,
            targets
        );

        if let Some(busy) = targets
            .iter()
            .find(|k| layout.widget(**k).is_some_and(|w| w.can_process()))
        {
            log::debug!("pointer {:?} rejected: {:?} is mid-gesture", event.id, busy);
            return DispatchOutcome::Rejected;
        }

        let mut active = self.active.remove(&event.id).unwrap_or_default();
        let mut consumed_by = None;
        {
            let mut session = TouchSession::new(event.id, &mut active);
            for key in targets {
                match button::on_touch(layout, key, &mut session, host) {
                    TouchResponse::Consumed => {
                        consumed_by = Some(key);
                        break;
                    }
                    TouchResponse::PassThrough => {}
                    TouchResponse::Declined => {
                        log::debug!("pointer {:?} declined by {:?}, move-only", event.id, key);
                        host.mark_move_only(event.id);
                    }
                }
            }
        }

        check_bounds(layout, event.id, event.position, &mut active, metrics, host);

        if !active.is_empty() {
            self.active.insert(event.id, active);
        }
        DispatchOutcome::Pressed { consumed_by }
    }

    /// Releases everything a pointer holds and forgets it. Returns how many
    /// widgets were associated with it.
    pub fn release_pointer(
        &mut self,
        layout: &mut Layout,
        id: PointerId,
        host: &mut dyn PointerHost,
    ) -> usize {
        let Some(active) = self.active.remove(&id) else {
            return 0;
        };
        for a in &active {
            if !a.out_of_bounds {
                button::on_release(layout, a.key, id, host);
            }
        }
        active.len()
    }

    /// Force-releases every pointer. Call on lifecycle boundaries (app paused,
    /// surface torn down) where lift events may never arrive.
    pub fn release_all(&mut self, layout: &mut Layout, host: &mut dyn PointerHost) {
        let mut ids: Vec<PointerId> = self.active.keys().copied().collect();
        ids.sort();
        if !ids.is_empty() {
            log::debug!("force-releasing {} pointers", ids.len());
        }
        for id in ids {
            self.release_pointer(layout, id, host);
        }
    }
}

/// Touchable, visible normal widgets under `pos`, highest priority first.
///
/// Layers are walked in declared order; within a layer, later widgets come
/// first so the most recently added one wins overlaps.
pub fn hit_test(
    layout: &Layout,
    pos: Vec2,
    ctx: &VisibilityContext,
    metrics: &ScreenMetrics,
) -> Vec<WidgetKey> {
    layout
        .layers()
        .filter(|(_, layer)| is_layer_visible(layer, ctx))
        .flat_map(|(_, layer)| layer.normal_widgets().iter().rev().copied())
        .filter(|key| {
            let Some(w) = layout.widget(*key) else {
                return false;
            };
            if !w.can_touch() || !visibility_matches(w.visibility, ctx.cursor_grabbed) {
                return false;
            }
            let rect = layout.widget_rect(*key, metrics);
            !rect.is_empty() && rect.contains(pos)
        })
        .collect()
}

/// Applies deep-touch occlusion. Without a deep-touch widget every hit is a
/// target. Otherwise only hits up to and including the first deep-touch one,
/// minus those already mid-gesture.
pub fn resolve_targets(layout: &Layout, hits: Vec<WidgetKey>) -> Vec<WidgetKey> {
    let deep = hits
        .iter()
        .position(|k| layout.widget(*k).is_some_and(|w| w.supports_deep_touch()));
    match deep {
        None => hits,
        Some(k) => hits
            .into_iter()
            .take(k + 1)
            .filter(|key| layout.widget(*key).is_some_and(|w| !w.can_process()))
            .collect(),
    }
}

fn check_bounds(
    layout: &mut Layout,
    pointer: PointerId,
    pos: Vec2,
    active: &mut ActiveList,
    metrics: &ScreenMetrics,
    host: &mut dyn PointerHost,
) {
    for entry in active.iter_mut() {
        let releases = layout
            .widget(entry.key)
            .and_then(|w| w.as_normal())
            .is_some_and(|n| n.release_on_exit);
        if !releases {
            continue;
        }
        let rect = layout.widget_rect(entry.key, metrics);
        let inside = !rect.is_empty() && rect.contains(pos);
        if !inside && !entry.out_of_bounds {
            log::debug!("pointer {:?} left {:?}, releasing", pointer, entry.key);
            entry.out_of_bounds = true;
            button::on_release(layout, entry.key, pointer, host);
        } else if inside && entry.out_of_bounds {
            entry.out_of_bounds = false;
            button::on_back_in_bounds(layout, entry.key, pointer, host);
        }
    }
}
