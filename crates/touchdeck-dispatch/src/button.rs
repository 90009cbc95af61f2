//! Per-widget touch handling for normal widgets: momentary press, toggle, and
//! sliding a finger across swipeable widgets.

use smallvec::SmallVec;
use touchdeck_core::{Layout, NormalWidget, PointerId, WidgetKey};

use crate::PointerHost;

/// A widget currently associated with a pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveWidget {
    pub key: WidgetKey,
    /// Released because the pointer left the widget; waiting for it to come back.
    pub out_of_bounds: bool,
}

pub type ActiveList = SmallVec<[ActiveWidget; 4]>;

/// What a widget did with a press it was offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchResponse {
    /// Handled; widgets behind it do not see this event.
    Consumed,
    /// Handled, but the widget is penetrable so the event keeps going.
    PassThrough,
    /// Not handled. The pointer becomes move-only.
    Declined,
}

/// One pointer's view of the active-widget bookkeeping during a single event.
pub struct TouchSession<'a> {
    pub pointer: PointerId,
    active: &'a mut ActiveList,
    prior: usize,
}

impl<'a> TouchSession<'a> {
    pub fn new(pointer: PointerId, active: &'a mut ActiveList) -> Self {
        let prior = active.len();
        Self {
            pointer,
            active,
            prior,
        }
    }

    /// Widgets this pointer held before the current event.
    pub fn held(&self) -> &[ActiveWidget] {
        &self.active[..self.prior]
    }

    pub fn is_active(&self, key: WidgetKey) -> bool {
        self.active.iter().any(|a| a.key == key)
    }

    pub fn activate(&mut self, key: WidgetKey) {
        self.active.push(ActiveWidget {
            key,
            out_of_bounds: false,
        });
    }
}

fn normal(layout: &Layout, key: WidgetKey) -> Option<&NormalWidget> {
    layout.widget(key).and_then(|w| w.as_normal())
}

/// Offers a press to a normal widget.
pub fn on_touch(
    layout: &mut Layout,
    key: WidgetKey,
    session: &mut TouchSession<'_>,
    host: &mut dyn PointerHost,
) -> TouchResponse {
    let Some(n) = normal(layout, key) else {
        return TouchResponse::Declined;
    };
    let handled = if n.penetrable {
        TouchResponse::PassThrough
    } else {
        TouchResponse::Consumed
    };

    // continuing gesture on a widget this pointer already owns
    if session.is_active(key) {
        return handled;
    }

    let held = session.held();
    if !held.is_empty() {
        let swipe = n.swipeable
            && held
                .iter()
                .all(|a| normal(layout, a.key).is_some_and(|h| h.swipeable));
        if !swipe {
            return TouchResponse::Declined;
        }
        log::debug!("pointer {:?} swiped onto {:?}", session.pointer, key);
    }

    press(layout, key, session.pointer, host);
    session.activate(key);
    handled
}

fn fire(layout: &Layout, key: WidgetKey, pressed: bool, host: &mut dyn PointerHost) {
    let Some(w) = layout.widget(key) else {
        return;
    };
    if let Some(n) = w.as_normal() {
        for event in &n.click_events {
            host.on_click_event(&w.id, event, pressed);
        }
    }
}

fn press(layout: &mut Layout, key: WidgetKey, pointer: PointerId, host: &mut dyn PointerHost) {
    let toggleable = normal(layout, key).is_some_and(|n| n.toggleable);
    let state = layout.update_runtime(key, |rt| {
        rt.held_by = Some(pointer);
        if toggleable {
            rt.toggled = !rt.toggled;
        }
        if toggleable { rt.toggled } else { true }
    });
    if let Ok(pressed) = state {
        fire(layout, key, pressed, host);
    }
}

/// Releases `key` if `pointer` is the one holding it. Toggle widgets keep
/// their toggle state and fire nothing.
pub fn on_release(
    layout: &mut Layout,
    key: WidgetKey,
    pointer: PointerId,
    host: &mut dyn PointerHost,
) {
    let Some(w) = layout.widget(key) else {
        return;
    };
    if w.runtime.held_by != Some(pointer) {
        return;
    }
    let toggleable = w.as_normal().is_some_and(|n| n.toggleable);
    if layout.update_runtime(key, |rt| rt.held_by = None).is_ok() && !toggleable {
        fire(layout, key, false, host);
    }
}

/// The pointer came back inside a widget it had left: hold it again without
/// flipping toggles.
pub fn on_back_in_bounds(
    layout: &mut Layout,
    key: WidgetKey,
    pointer: PointerId,
    host: &mut dyn PointerHost,
) {
    let Some(w) = layout.widget(key) else {
        return;
    };
    if w.runtime.held_by.is_some() {
        return;
    }
    let toggleable = w.as_normal().is_some_and(|n| n.toggleable);
    if layout.update_runtime(key, |rt| rt.held_by = Some(pointer)).is_ok() && !toggleable {
        fire(layout, key, true, host);
    }
}
