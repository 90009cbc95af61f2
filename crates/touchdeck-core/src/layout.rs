//! # Layouts
//!
//! A [`Layout`] is an arena of widgets plus an ordered list of layers. Layers
//! hold ordered key lists into the arena, so the renderer, the touch
//! dispatcher and the editor all address widgets by [`WidgetKey`] and never
//! keep references into each other.
//!
//! ```rust
//! use touchdeck_core::*;
//!
//! let mut layout = Layout::new();
//! let layer = layout.add_layer(Layer::new("main", "Main")).unwrap();
//! let jump = layout
//!     .add_widget(
//!         layer,
//!         Widget::normal("jump", NormalWidget::new(vec![ClickEvent::key("SPACE")]))
//!             .at(PercentPosition::new(9000, 9000)),
//!     )
//!     .unwrap();
//!
//! assert_eq!(layout.find(&"jump".into()), Some(jump));
//! ```
//!
//! Layer order is priority order: the first layer is front-most for both
//! painting and touch. Every setter bumps [`Layout::version`]; subscribe with
//! [`Layout::on_change`] to repaint.

use std::collections::HashMap;

use slotmap::{SecondaryMap, SlotMap, new_key_type};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::{
    PercentPosition, Rect, RuntimeState, ScreenMetrics, Signal, Size, StyleRef, SubId, Vec2,
    VisibilityType, Widget, WidgetId, WidgetKind, WidgetSize, resolve_position, resolve_size,
};
use crate::widget::filter_send_text;

new_key_type! {
    pub struct WidgetKey;
    pub struct LayerKey;
}

/// Which of a layer's two widget lists a widget lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetList {
    Normal,
    Text,
}

impl WidgetList {
    fn name(self) -> &'static str {
        match self {
            WidgetList::Normal => "normal",
            WidgetList::Text => "text",
        }
    }

    fn of(kind: &WidgetKind) -> Self {
        match kind {
            WidgetKind::Normal(_) => WidgetList::Normal,
            WidgetKind::Text => WidgetList::Text,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub id: String,
    pub name: String,
    pub hide: bool,
    pub hide_when_mouse: bool,
    pub hide_when_gamepad: bool,
    pub visibility: VisibilityType,
    pub(crate) normal: Vec<WidgetKey>,
    pub(crate) text: Vec<WidgetKey>,
}

impl Layer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hide: false,
            hide_when_mouse: false,
            hide_when_gamepad: false,
            visibility: VisibilityType::Always,
            normal: Vec::new(),
            text: Vec::new(),
        }
    }

    /// Interactive widgets in stored order (oldest first).
    pub fn normal_widgets(&self) -> &[WidgetKey] {
        &self.normal
    }

    /// Passive widgets in stored order.
    pub fn text_widgets(&self) -> &[WidgetKey] {
        &self.text
    }

    pub fn widgets(&self) -> impl Iterator<Item = WidgetKey> + '_ {
        self.normal.iter().chain(self.text.iter()).copied()
    }

    fn list_mut(&mut self, list: WidgetList) -> &mut Vec<WidgetKey> {
        match list {
            WidgetList::Normal => &mut self.normal,
            WidgetList::Text => &mut self.text,
        }
    }
}

pub struct Layout {
    widgets: SlotMap<WidgetKey, Widget>,
    layers: SlotMap<LayerKey, Layer>,
    order: Vec<LayerKey>,
    index: HashMap<WidgetId, WidgetKey>,
    owner: SecondaryMap<WidgetKey, LayerKey>,
    version: Signal<u64>,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layout")
            .field("layers", &self.order.len())
            .field("widgets", &self.widgets.len())
            .field("version", &self.version())
            .finish()
    }
}

impl Layout {
    pub fn new() -> Self {
        Self {
            widgets: SlotMap::with_key(),
            layers: SlotMap::with_key(),
            order: Vec::new(),
            index: HashMap::new(),
            owner: SecondaryMap::new(),
            version: Signal::new(0),
        }
    }

    pub fn version(&self) -> u64 {
        self.version.get()
    }

    /// Called with the new version after every mutation. Callbacks run while
    /// the counter is borrowed and must not call back into the layout.
    pub fn on_change(&self, f: impl Fn(u64) + 'static) -> SubId {
        self.version.subscribe(move |v| f(*v))
    }

    pub fn remove_on_change(&self, id: SubId) {
        self.version.unsubscribe(id);
    }

    fn changed(&self) {
        self.version.bump();
    }

    // ---- layers ----

    /// Appends a layer behind all existing ones. Any widget keys already in
    /// `layer` are discarded; add widgets with [`Layout::add_widget`].
    pub fn add_layer(&mut self, layer: Layer) -> Result<LayerKey, LayoutError> {
        let index = self.order.len();
        self.insert_layer(index, layer)
    }

    pub fn insert_layer(&mut self, index: usize, mut layer: Layer) -> Result<LayerKey, LayoutError> {
        if index > self.order.len() {
            return Err(LayoutError::LayerIndexOutOfRange {
                index,
                len: self.order.len(),
            });
        }
        if self.layers.values().any(|l| l.id == layer.id) {
            return Err(LayoutError::DuplicateLayerId(layer.id));
        }
        layer.normal.clear();
        layer.text.clear();
        let key = self.layers.insert(layer);
        self.order.insert(index, key);
        self.changed();
        Ok(key)
    }

    /// Removes a layer and every widget it owns.
    pub fn remove_layer(&mut self, key: LayerKey) -> Result<(Layer, Vec<Widget>), LayoutError> {
        let layer = self
            .layers
            .remove(key)
            .ok_or(LayoutError::UnknownLayer(key))?;
        self.order.retain(|k| *k != key);
        let mut removed = Vec::with_capacity(layer.normal.len() + layer.text.len());
        for wk in layer.widgets() {
            self.owner.remove(wk);
            if let Some(w) = self.widgets.remove(wk) {
                self.index.remove(&w.id);
                removed.push(w);
            }
        }
        self.changed();
        Ok((layer, removed))
    }

    /// Moves the layer at `from` so it ends up at index `to`.
    pub fn move_layer(&mut self, from: usize, to: usize) -> Result<(), LayoutError> {
        let len = self.order.len();
        if from >= len || to >= len {
            return Err(LayoutError::LayerIndexOutOfRange {
                index: from.max(to),
                len,
            });
        }
        let key = self.order.remove(from);
        self.order.insert(to, key);
        self.changed();
        Ok(())
    }

    /// Layers in priority order, front-most first.
    pub fn layers(&self) -> impl Iterator<Item = (LayerKey, &Layer)> + '_ {
        self.order.iter().filter_map(|k| self.layers.get(*k).map(|l| (*k, l)))
    }

    pub fn layer_keys(&self) -> &[LayerKey] {
        &self.order
    }

    pub fn layer(&self, key: LayerKey) -> Option<&Layer> {
        self.layers.get(key)
    }

    pub fn find_layer(&self, id: &str) -> Option<LayerKey> {
        self.layers().find(|(_, l)| l.id == id).map(|(k, _)| k)
    }

    /// Edits a layer's flags and names. Widget lists are left untouched.
    pub fn update_layer(
        &mut self,
        key: LayerKey,
        f: impl FnOnce(&mut LayerProps<'_>),
    ) -> Result<(), LayoutError> {
        let layer = self
            .layers
            .get_mut(key)
            .ok_or(LayoutError::UnknownLayer(key))?;
        f(&mut LayerProps {
            name: &mut layer.name,
            hide: &mut layer.hide,
            hide_when_mouse: &mut layer.hide_when_mouse,
            hide_when_gamepad: &mut layer.hide_when_gamepad,
            visibility: &mut layer.visibility,
        });
        self.changed();
        Ok(())
    }

    pub fn set_layer_hidden(&mut self, key: LayerKey, hide: bool) -> Result<(), LayoutError> {
        self.update_layer(key, |p| *p.hide = hide)
    }

    // ---- widgets ----

    /// Appends a widget to the list of `layer` matching its kind.
    pub fn add_widget(&mut self, layer: LayerKey, widget: Widget) -> Result<WidgetKey, LayoutError> {
        let list = WidgetList::of(&widget.kind);
        self.push_widget(layer, list, widget)
    }

    /// Like [`Layout::add_widget`] but with an explicit target list, rejecting
    /// widgets of the wrong kind.
    pub fn push_widget(
        &mut self,
        layer: LayerKey,
        list: WidgetList,
        mut widget: Widget,
    ) -> Result<WidgetKey, LayoutError> {
        if WidgetList::of(&widget.kind) != list {
            return Err(LayoutError::WrongWidgetList {
                id: widget.id,
                list: list.name(),
            });
        }
        if !self.layers.contains_key(layer) {
            return Err(LayoutError::UnknownLayer(layer));
        }
        if self.index.contains_key(&widget.id) {
            return Err(LayoutError::DuplicateWidgetId(widget.id));
        }
        if let WidgetKind::Normal(n) = &mut widget.kind {
            n.click_events = filter_send_text(std::mem::take(&mut n.click_events));
        }
        let id = widget.id.clone();
        let key = self.widgets.insert(widget);
        self.index.insert(id, key);
        self.owner.insert(key, layer);
        if let Some(l) = self.layers.get_mut(layer) {
            l.list_mut(list).push(key);
        }
        self.changed();
        Ok(key)
    }

    pub fn remove_widget(&mut self, key: WidgetKey) -> Result<Widget, LayoutError> {
        let widget = self
            .widgets
            .remove(key)
            .ok_or(LayoutError::UnknownWidget(key))?;
        self.index.remove(&widget.id);
        if let Some(layer) = self.owner.remove(key).and_then(|lk| self.layers.get_mut(lk)) {
            layer.normal.retain(|k| *k != key);
            layer.text.retain(|k| *k != key);
        }
        self.changed();
        Ok(widget)
    }

    pub fn widget(&self, key: WidgetKey) -> Option<&Widget> {
        self.widgets.get(key)
    }

    pub fn find(&self, id: &WidgetId) -> Option<WidgetKey> {
        self.index.get(id).copied()
    }

    pub fn layer_of(&self, key: WidgetKey) -> Option<LayerKey> {
        self.owner.get(key).copied()
    }

    pub fn widgets(&self) -> impl Iterator<Item = (WidgetKey, &Widget)> + '_ {
        self.widgets.iter()
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    fn widget_mut(&mut self, key: WidgetKey) -> Result<&mut Widget, LayoutError> {
        self.widgets
            .get_mut(key)
            .ok_or(LayoutError::UnknownWidget(key))
    }

    pub fn set_position(&mut self, key: WidgetKey, position: PercentPosition) -> Result<(), LayoutError> {
        self.widget_mut(key)?.position = PercentPosition::new(position.x, position.y);
        self.changed();
        Ok(())
    }

    pub fn set_size(&mut self, key: WidgetKey, size: WidgetSize) -> Result<(), LayoutError> {
        self.widget_mut(key)?.size = size;
        self.changed();
        Ok(())
    }

    pub fn set_style(&mut self, key: WidgetKey, style: Option<StyleRef>) -> Result<(), LayoutError> {
        self.widget_mut(key)?.style = style;
        self.changed();
        Ok(())
    }

    pub fn set_widget_visibility(
        &mut self,
        key: WidgetKey,
        visibility: VisibilityType,
    ) -> Result<(), LayoutError> {
        self.widget_mut(key)?.visibility = visibility;
        self.changed();
        Ok(())
    }

    /// Content size reported by the renderer for `Wrap` widgets.
    pub fn set_measured_size(&mut self, key: WidgetKey, size: Size) -> Result<(), LayoutError> {
        let w = self.widget_mut(key)?;
        if w.runtime.measured == Some(size) {
            return Ok(());
        }
        w.runtime.measured = Some(size);
        self.changed();
        Ok(())
    }

    /// Mutates runtime-only state (pressed, toggled, drag override).
    pub fn update_runtime<R>(
        &mut self,
        key: WidgetKey,
        f: impl FnOnce(&mut RuntimeState) -> R,
    ) -> Result<R, LayoutError> {
        let r = f(&mut self.widget_mut(key)?.runtime);
        self.changed();
        Ok(r)
    }

    /// Drops every pressed/toggled/drag flag, keeping measurements.
    pub fn clear_runtime(&mut self) {
        for w in self.widgets.values_mut() {
            let measured = w.runtime.measured;
            w.runtime = RuntimeState {
                measured,
                ..Default::default()
            };
        }
        self.changed();
    }

    // ---- geometry ----

    pub fn resolved_size(&self, key: WidgetKey, metrics: &ScreenMetrics) -> Size {
        self.widgets
            .get(key)
            .map(|w| resolve_size(&w.size, metrics, w.runtime.measured))
            .unwrap_or_default()
    }

    /// Top-left pixel offset. While a drag is in progress the drag preview wins
    /// over the stored position.
    pub fn resolved_offset(&self, key: WidgetKey, metrics: &ScreenMetrics) -> Vec2 {
        let Some(w) = self.widgets.get(key) else {
            return Vec2::ZERO;
        };
        let size = resolve_size(&w.size, metrics, w.runtime.measured);
        let position = w.runtime.drag.map(|d| d.preview).unwrap_or(w.position);
        resolve_position(position, size, metrics.size)
    }

    pub fn widget_rect(&self, key: WidgetKey, metrics: &ScreenMetrics) -> Rect {
        Rect::from_origin_size(
            self.resolved_offset(key, metrics),
            self.resolved_size(key, metrics),
        )
    }

    // ---- documents ----

    /// Builds a layout from an already-migrated document.
    pub fn from_document(doc: LayoutDocument) -> Result<Self, LayoutError> {
        let mut layout = Layout::new();
        for ld in doc.layers {
            let mut layer = Layer::new(ld.id, ld.name);
            layer.hide = ld.hide;
            layer.hide_when_mouse = ld.hide_when_mouse;
            layer.hide_when_gamepad = ld.hide_when_gamepad;
            layer.visibility = ld.visibility;
            let lk = layout.add_layer(layer)?;
            for w in ld.normal {
                layout.push_widget(lk, WidgetList::Normal, w)?;
            }
            for w in ld.text {
                layout.push_widget(lk, WidgetList::Text, w)?;
            }
        }
        log::debug!(
            "loaded layout: {} layers, {} widgets",
            layout.order.len(),
            layout.widgets.len()
        );
        Ok(layout)
    }

    /// Snapshot of the persisted parts of this layout. Runtime state is dropped.
    pub fn to_document(&self) -> LayoutDocument {
        let collect = |keys: &[WidgetKey]| -> Vec<Widget> {
            keys.iter()
                .filter_map(|k| self.widgets.get(*k))
                .map(|w| Widget {
                    runtime: RuntimeState::default(),
                    ..w.clone()
                })
                .collect()
        };
        LayoutDocument {
            layers: self
                .layers()
                .map(|(_, l)| LayerDocument {
                    id: l.id.clone(),
                    name: l.name.clone(),
                    hide: l.hide,
                    hide_when_mouse: l.hide_when_mouse,
                    hide_when_gamepad: l.hide_when_gamepad,
                    visibility: l.visibility,
                    normal: collect(&l.normal),
                    text: collect(&l.text),
                })
                .collect(),
        }
    }
}

/// Mutable view of a layer's editable properties.
pub struct LayerProps<'a> {
    pub name: &'a mut String,
    pub hide: &'a mut bool,
    pub hide_when_mouse: &'a mut bool,
    pub hide_when_gamepad: &'a mut bool,
    pub visibility: &'a mut VisibilityType,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutDocument {
    pub layers: Vec<LayerDocument>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct LayerDocument {
    pub id: String,
    pub name: String,
    pub hide: bool,
    pub hide_when_mouse: bool,
    pub hide_when_gamepad: bool,
    pub visibility: VisibilityType,
    pub normal: Vec<Widget>,
    pub text: Vec<Widget>,
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::{ClickEvent, ClickEventKind, DragOverride, NormalWidget, PointerId};

    fn button(id: &str) -> Widget {
        Widget::normal(id, NormalWidget::new(vec![ClickEvent::key("KEY_A")]))
    }

    #[test]
    fn test_widget_ids_unique_across_layers() {
        let mut layout = Layout::new();
        let a = layout.add_layer(Layer::new("a", "A")).unwrap();
        let b = layout.add_layer(Layer::new("b", "B")).unwrap();
        layout.add_widget(a, button("w1")).unwrap();
        assert_eq!(
            layout.add_widget(b, button("w1")),
            Err(LayoutError::DuplicateWidgetId("w1".into()))
        );
        assert_eq!(
            layout.add_layer(Layer::new("a", "again")),
            Err(LayoutError::DuplicateLayerId("a".into()))
        );
    }

    #[test]
    fn test_widgets_go_to_matching_list() {
        let mut layout = Layout::new();
        let l = layout.add_layer(Layer::new("main", "Main")).unwrap();
        let b = layout.add_widget(l, button("btn")).unwrap();
        let t = layout.add_widget(l, Widget::text("txt", "hi")).unwrap();
        let layer = layout.layer(l).unwrap();
        assert_eq!(layer.normal_widgets(), &[b]);
        assert_eq!(layer.text_widgets(), &[t]);

        let err = layout.push_widget(l, WidgetList::Normal, Widget::text("t2", "x"));
        assert!(matches!(err, Err(LayoutError::WrongWidgetList { list: "normal", .. })));
    }

    #[test]
    fn test_remove_keeps_index_consistent() {
        let mut layout = Layout::new();
        let l = layout.add_layer(Layer::new("main", "Main")).unwrap();
        let k = layout.add_widget(l, button("btn")).unwrap();
        layout.remove_widget(k).unwrap();
        assert_eq!(layout.find(&"btn".into()), None);
        assert!(layout.layer(l).unwrap().normal_widgets().is_empty());
        // id is free again
        layout.add_widget(l, button("btn")).unwrap();

        let (_, removed) = layout.remove_layer(l).unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(layout.widget_count(), 0);
        assert_eq!(layout.find(&"btn".into()), None);
    }

    #[test]
    fn test_move_layer() {
        let mut layout = Layout::new();
        let a = layout.add_layer(Layer::new("a", "A")).unwrap();
        let b = layout.add_layer(Layer::new("b", "B")).unwrap();
        let c = layout.add_layer(Layer::new("c", "C")).unwrap();
        layout.move_layer(2, 0).unwrap();
        assert_eq!(layout.layer_keys(), &[c, a, b]);
        assert!(layout.move_layer(0, 3).is_err());
    }

    #[test]
    fn test_setters_bump_version_and_notify() {
        let mut layout = Layout::new();
        let seen = Rc::new(Cell::new(0u64));
        let sub = layout.on_change({
            let seen = seen.clone();
            move |v| seen.set(v)
        });
        let l = layout.add_layer(Layer::new("main", "Main")).unwrap();
        let k = layout.add_widget(l, button("btn")).unwrap();
        let before = layout.version();
        layout.set_position(k, PercentPosition::new(100, 200)).unwrap();
        assert_eq!(layout.version(), before + 1);
        assert_eq!(seen.get(), before + 1);

        layout.remove_on_change(sub);
        layout.set_layer_hidden(l, true).unwrap();
        assert_eq!(seen.get(), before + 1);
        assert!(layout.layer(l).unwrap().hide);
    }

    #[test]
    fn test_drag_preview_overrides_position() {
        let metrics = ScreenMetrics::new(1100.0, 600.0, 1.0);
        let mut layout = Layout::new();
        let l = layout.add_layer(Layer::new("main", "Main")).unwrap();
        let k = layout
            .add_widget(
                l,
                button("btn").sized(WidgetSize::Fixed {
                    width_dp: 100.0,
                    height_dp: 100.0,
                }),
            )
            .unwrap();
        assert_eq!(layout.resolved_offset(k, &metrics), Vec2::ZERO);

        layout
            .update_runtime(k, |rt| {
                rt.drag = Some(DragOverride {
                    raw_offset: Vec2::new(500.0, 250.0),
                    preview: PercentPosition::new(5000, 5000),
                })
            })
            .unwrap();
        assert_eq!(layout.resolved_offset(k, &metrics), Vec2::new(500.0, 250.0));
        assert_eq!(layout.widget(k).unwrap().position, PercentPosition::default());
    }

    #[test]
    fn test_unmeasured_wrap_is_empty() {
        let metrics = ScreenMetrics::default();
        let mut layout = Layout::new();
        let l = layout.add_layer(Layer::new("main", "Main")).unwrap();
        let k = layout
            .add_widget(l, Widget::text("t", "hi").sized(WidgetSize::Wrap))
            .unwrap();
        assert!(layout.widget_rect(k, &metrics).is_empty());
        layout.set_measured_size(k, Size::new(40.0, 20.0)).unwrap();
        assert_eq!(layout.resolved_size(k, &metrics), Size::new(40.0, 20.0));
    }

    #[test]
    fn test_document_round_trip_drops_runtime() {
        let mut layout = Layout::new();
        let l = layout.add_layer(Layer::new("main", "Main")).unwrap();
        let k = layout.add_widget(l, button("btn")).unwrap();
        layout.add_widget(l, Widget::text("txt", "hello")).unwrap();
        layout
            .update_runtime(k, |rt| rt.held_by = Some(PointerId(1)))
            .unwrap();

        let doc = layout.to_document();
        assert_eq!(doc.layers[0].normal[0].runtime, RuntimeState::default());

        let again = Layout::from_document(doc.clone()).unwrap();
        assert_eq!(again.to_document(), doc);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_document_from_json() {
        let json = r#"{
            "layers": [{
                "id": "main",
                "name": "Main",
                "hide_when_gamepad": true,
                "normal": [{
                    "id": "jump",
                    "position": { "x": 9000, "y": 8000 },
                    "size": { "Fixed": { "width_dp": 60.0, "height_dp": 60.0 } },
                    "kind": { "Normal": {
                        "click_events": [{ "kind": "Key", "key": "SPACE" }],
                        "swipeable": true
                    } }
                }]
            }]
        }"#;
        let doc: LayoutDocument = serde_json::from_str(json).unwrap();
        let layout = Layout::from_document(doc).unwrap();
        let k = layout.find(&"jump".into()).unwrap();
        let w = layout.widget(k).unwrap();
        assert_eq!(w.position, PercentPosition::new(9000, 8000));
        assert!(w.as_normal().unwrap().swipeable);
        assert!(layout.layers().next().unwrap().1.hide_when_gamepad);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_loaded_widgets_are_normalized() {
        let json = r#"{
            "layers": [{
                "id": "main",
                "name": "Main",
                "normal": [{
                    "id": "chat",
                    "position": { "x": 20000, "y": 65535 },
                    "kind": { "Normal": {
                        "click_events": [
                            { "kind": "SendText", "key": "" },
                            { "kind": "Key", "key": "T" },
                            { "kind": "SendText", "key": "/home" },
                            { "kind": "SendText", "key": "/spawn" }
                        ]
                    } }
                }]
            }]
        }"#;
        let doc: LayoutDocument = serde_json::from_str(json).unwrap();
        let layout = Layout::from_document(doc).unwrap();
        let w = layout.widget(layout.find(&"chat".into()).unwrap()).unwrap();

        let keys: Vec<&str> = w
            .as_normal()
            .unwrap()
            .click_events
            .iter()
            .map(|e| e.key.as_str())
            .collect();
        assert_eq!(keys, ["T", "/home"]);
        assert_eq!(w.position, PercentPosition::new(10000, 10000));

        let saved = serde_json::to_value(layout.to_document()).unwrap();
        assert_eq!(
            saved["layers"][0]["normal"][0]["position"],
            serde_json::json!({ "x": 10000, "y": 10000 })
        );
    }

    #[test]
    fn test_push_widget_filters_send_text() {
        // fields set directly, bypassing NormalWidget::new
        let normal = NormalWidget {
            click_events: vec![
                ClickEvent::new(ClickEventKind::SendText, "/a"),
                ClickEvent::new(ClickEventKind::SendText, "/b"),
            ],
            ..Default::default()
        };
        let mut layout = Layout::new();
        let l = layout.add_layer(Layer::new("main", "Main")).unwrap();
        let k = layout.add_widget(l, Widget::normal("say", normal)).unwrap();
        let events = &layout.widget(k).unwrap().as_normal().unwrap().click_events;
        assert_eq!(events, &[ClickEvent::new(ClickEventKind::SendText, "/a")]);
    }
}
