//! Loads a layout document, plays a few multi-touch gestures against it and
//! then drags a widget in edit mode.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p layout_sim -- [layout.json]
//! ```

use anyhow::{Context, Result, bail};
use touchdeck_core::*;
use touchdeck_dispatch::{PointerHost, TouchDispatcher};
use touchdeck_editor::{EditGesture, EditGestureDetector, EditorController, SnapConfig};

const DEFAULT_LAYOUT: &str = include_str!("layout.json");

/// Logs every binding and queues the layer visibility ones until the
/// dispatcher lets go of the layout.
#[derive(Default)]
struct SimHost {
    fired: usize,
    layer_events: Vec<(WidgetId, ClickEvent)>,
}

impl PointerHost for SimHost {
    fn mark_move_only(&mut self, id: PointerId) {
        log::info!("pointer {} is move-only now", id.0);
    }

    fn on_click_event(&mut self, widget: &WidgetId, event: &ClickEvent, pressed: bool) {
        log::info!("{widget}: {:?} `{}` pressed={pressed}", event.kind, event.key);
        self.fired += 1;
        if pressed && event.kind.is_layer_visibility() {
            self.layer_events.push((widget.clone(), event.clone()));
        }
    }
}

impl SimHost {
    fn apply_layer_events(&mut self, layout: &mut Layout) -> Result<()> {
        for (widget, event) in self.layer_events.drain(..) {
            let target = layout
                .find_layer(&event.key)
                .with_context(|| format!("`{widget}` names unknown layer `{}`", event.key))?;
            let hidden = layout.layer(target).is_some_and(|l| l.hide);
            match event.kind {
                ClickEventKind::ShowLayer => layout.set_layer_hidden(target, false)?,
                ClickEventKind::HideLayer => layout.set_layer_hidden(target, true)?,
                ClickEventKind::ToggleLayer => layout.set_layer_hidden(target, !hidden)?,
                ClickEventKind::SwitchLayer => {
                    if let Some(own) = layout.find(&widget).and_then(|k| layout.layer_of(k)) {
                        layout.set_layer_hidden(own, true)?;
                    }
                    layout.set_layer_hidden(target, false)?;
                }
                ClickEventKind::Key | ClickEventKind::LauncherEvent | ClickEventKind::SendText => {
                    bail!("{:?} is not a layer event", event.kind)
                }
            }
            log::info!("layer `{}` hidden={}", event.key, layout.layer(target).is_some_and(|l| l.hide));
        }
        Ok(())
    }
}

fn center_of(layout: &Layout, id: &str, metrics: &ScreenMetrics) -> Result<Vec2> {
    let key = layout
        .find(&id.into())
        .with_context(|| format!("layout has no widget `{id}`"))?;
    let r = layout.widget_rect(key, metrics);
    Ok(Vec2::new(r.x + r.w / 2.0, r.y + r.h / 2.0))
}

fn load_layout() -> Result<Layout> {
    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?,
        None => DEFAULT_LAYOUT.to_string(),
    };
    let doc: LayoutDocument = serde_json::from_str(&json).context("parsing layout document")?;
    Ok(Layout::from_document(doc)?)
}

fn play_touches(layout: &mut Layout, metrics: &ScreenMetrics) -> Result<()> {
    let ctx = VisibilityContext::default();
    let mut dispatcher = TouchDispatcher::new();
    let mut host = SimHost::default();

    let stick = center_of(layout, "stick", metrics)?;
    let jump = center_of(layout, "jump", metrics)?;
    let crouch = center_of(layout, "crouch", metrics)?;
    let inventory = center_of(layout, "inventory", metrics)?;

    // thumb on the stick while the other hand swipes from jump onto crouch
    let trace = [
        PointerEvent::touch(0, stick, true),
        PointerEvent::touch(0, stick + Vec2::new(12.0, -8.0), true),
        PointerEvent::touch(1, jump, true),
        PointerEvent::touch(1, crouch, true),
        PointerEvent::touch(1, crouch, false),
        PointerEvent::touch(2, inventory, true),
        PointerEvent::touch(2, inventory, false),
    ];
    for event in &trace {
        let outcome = dispatcher.dispatch(layout, event, &ctx, metrics, &mut host);
        log::debug!("pointer {} -> {:?}", event.id.0, outcome);
        host.apply_layer_events(layout)?;
    }

    // the menu opened by the inventory button covers the middle of the screen
    let close = center_of(layout, "close", metrics)?;
    for pressed in [true, false] {
        let event = PointerEvent::touch(3, close, pressed);
        dispatcher.dispatch(layout, &event, &ctx, metrics, &mut host);
        host.apply_layer_events(layout)?;
    }

    log::info!(
        "{} pointers still down, force-releasing",
        dispatcher.active_pointer_count()
    );
    dispatcher.release_all(layout, &mut host);
    log::info!("{} binding events fired", host.fired);
    Ok(())
}

fn edit_jump(layout: &mut Layout, metrics: &ScreenMetrics) -> Result<()> {
    let mut detector = EditGestureDetector::default();
    let mut editor = EditorController::new(SnapConfig::default());
    editor.set_on_tap(|key| log::info!("tapped {key:?} in edit mode"));

    let jump = layout
        .find(&"jump".into())
        .context("layout has no widget `jump`")?;
    let crouch = layout
        .find(&"crouch".into())
        .context("layout has no widget `crouch`")?;
    let start = center_of(layout, "jump", metrics)?;
    // land jump's left edge a few pixels right of crouch's right edge
    let gap = layout.widget_rect(jump, metrics).x - layout.widget_rect(crouch, metrics).right();
    let end = start - Vec2::new(gap - 3.0, 40.0);

    let moves = [
        PointerEvent::touch(0, start, true),
        PointerEvent::touch(0, Vec2::new((start.x + end.x) / 2.0, start.y - 20.0), true),
        PointerEvent::touch(0, end, true),
        PointerEvent::touch(0, end, false),
    ];
    for event in &moves {
        for gesture in detector.handle_pointer(event) {
            if editor.is_dragging() && gesture == EditGesture::DragEnd {
                for g in editor.guidelines() {
                    log::info!("guideline {:?} at {}", g.axis, g.position);
                }
            }
            if let Some((key, position)) = editor.handle_gesture(layout, gesture, metrics)? {
                layout.set_position(key, position)?;
                log::info!("committed {key:?} at {position:?}");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let metrics = ScreenMetrics::default();
    let mut layout = load_layout()?;
    layout.on_change(|v| log::trace!("layout version {v}"));
    log::info!(
        "loaded {} widgets on {} layers",
        layout.widget_count(),
        layout.layer_keys().len()
    );

    play_touches(&mut layout, &metrics)?;
    edit_jump(&mut layout, &metrics)?;

    println!("{}", serde_json::to_string_pretty(&layout.to_document())?);
    Ok(())
}
