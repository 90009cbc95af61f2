//! Edit-mode drag lifecycle.
//!
//! While a widget is dragged its stored position is left alone; the preview
//! kept in [`DragOverride`] is what the renderer and hit tests see. The final
//! position is handed back from [`EditorController::end_drag`] and committed
//! by whoever persists the layout.

use touchdeck_core::{
    DragOverride, LayerKey, Layout, LayoutError, PercentPosition, ScreenMetrics, Vec2, WidgetKey,
    clamp_offset, to_percent_position,
};

use crate::error::EditorError;
use crate::gesture::EditGesture;
use crate::snap::{Guideline, SnapConfig, SnapRequest, compute_snap, snap_candidates};

type TapHandler = Box<dyn FnMut(WidgetKey)>;

pub struct EditorController {
    pub config: SnapConfig,
    /// Layer being edited; also the snap scope for [`crate::SnapScope::CurrentLayer`].
    pub current_layer: Option<LayerKey>,
    /// Layers the user has hidden inside the editor only.
    pub editor_hidden: Vec<LayerKey>,
    session: Option<WidgetKey>,
    guidelines: Vec<Guideline>,
    on_tap: Option<TapHandler>,
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new(SnapConfig::default())
    }
}

impl EditorController {
    pub fn new(config: SnapConfig) -> Self {
        Self {
            config,
            current_layer: None,
            editor_hidden: Vec::new(),
            session: None,
            guidelines: Vec::new(),
            on_tap: None,
        }
    }

    /// Called when a widget is tapped (not dragged) in edit mode.
    pub fn set_on_tap(&mut self, f: impl FnMut(WidgetKey) + 'static) {
        self.on_tap = Some(Box::new(f));
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn dragged(&self) -> Option<WidgetKey> {
        self.session
    }

    /// Guidelines of the last drag step. Empty means none are shown.
    pub fn guidelines(&self) -> &[Guideline] {
        &self.guidelines
    }

    pub fn begin_drag(
        &mut self,
        layout: &mut Layout,
        key: WidgetKey,
        metrics: &ScreenMetrics,
    ) -> Result<(), EditorError> {
        if let Some(current) = self.session {
            return Err(EditorError::AlreadyDragging(current));
        }
        let position = layout
            .widget(key)
            .map(|w| w.position)
            .ok_or(LayoutError::UnknownWidget(key))?;
        let raw_offset = layout.resolved_offset(key, metrics);
        layout.update_runtime(key, |rt| {
            rt.drag = Some(DragOverride {
                raw_offset,
                preview: position,
            })
        })?;
        log::debug!("drag start {:?} at {:?}", key, raw_offset);
        self.session = Some(key);
        self.guidelines.clear();
        Ok(())
    }

    /// Moves the dragged widget by `delta` pixels and returns its preview
    /// position, snapped when snapping is enabled.
    pub fn drag_by(
        &mut self,
        layout: &mut Layout,
        delta: Vec2,
        metrics: &ScreenMetrics,
    ) -> Result<PercentPosition, EditorError> {
        let key = self.session.ok_or(EditorError::NotDragging)?;
        let Some(raw) = layout
            .widget(key)
            .and_then(|w| w.runtime.drag)
            .map(|d| d.raw_offset)
        else {
            // widget vanished mid-drag
            self.session = None;
            self.guidelines.clear();
            return Err(LayoutError::UnknownWidget(key).into());
        };

        let size = layout.resolved_size(key, metrics);
        let offset = clamp_offset(raw + delta, size, metrics.size);

        let position = if self.config.enabled {
            let candidates = snap_candidates(
                layout,
                key,
                self.config.scope,
                self.current_layer,
                &self.editor_hidden,
                metrics,
            );
            let outcome = compute_snap(&SnapRequest {
                offset,
                size,
                screen: metrics.size,
                candidates: &candidates,
                threshold: metrics.dp_to_px(self.config.threshold_dp),
                mode: self.config.mode,
                local_radius: metrics.dp_to_px(self.config.local_radius_dp),
            });
            self.guidelines = outcome.guidelines;
            outcome.position
        } else {
            self.guidelines.clear();
            to_percent_position(offset, size, metrics.size)
        };

        layout.update_runtime(key, |rt| {
            rt.drag = Some(DragOverride {
                raw_offset: offset,
                preview: position,
            })
        })?;
        Ok(position)
    }

    /// Ends the drag, returning the widget and the position to commit.
    pub fn end_drag(&mut self, layout: &mut Layout) -> Option<(WidgetKey, PercentPosition)> {
        let key = self.session.take()?;
        self.guidelines.clear();
        let drag = layout.update_runtime(key, |rt| rt.drag.take()).ok()??;
        log::debug!("drag end {:?} at {:?}", key, drag.preview);
        Some((key, drag.preview))
    }

    /// Ends the drag without a result; the stored position is untouched.
    pub fn cancel_drag(&mut self, layout: &mut Layout) {
        let Some(key) = self.session.take() else {
            return;
        };
        self.guidelines.clear();
        if layout.update_runtime(key, |rt| rt.drag = None).is_err() {
            log::warn!("cancelled drag of removed widget {:?}", key);
        }
    }

    /// Forwards a tap to the tap handler. Ignored while dragging.
    pub fn tap(&mut self, key: WidgetKey) -> bool {
        if self.session.is_some() {
            return false;
        }
        match self.on_tap.as_mut() {
            Some(f) => {
                f(key);
                true
            }
            None => false,
        }
    }

    /// Topmost widget under `pos` among the layers shown in the editor.
    /// Text widgets are included since they can be moved too.
    pub fn widget_at(&self, layout: &Layout, pos: Vec2, metrics: &ScreenMetrics) -> Option<WidgetKey> {
        layout
            .layers()
            .filter(|(key, layer)| !layer.hide && !self.editor_hidden.contains(key))
            .flat_map(|(_, layer)| {
                layer
                    .normal_widgets()
                    .iter()
                    .rev()
                    .chain(layer.text_widgets().iter().rev())
                    .copied()
            })
            .find(|key| {
                let rect = layout.widget_rect(*key, metrics);
                !rect.is_empty() && rect.contains(pos)
            })
    }

    /// Applies one gesture from [`crate::EditGestureDetector`]. Returns the
    /// position to commit when a drag ends.
    pub fn handle_gesture(
        &mut self,
        layout: &mut Layout,
        gesture: EditGesture,
        metrics: &ScreenMetrics,
    ) -> Result<Option<(WidgetKey, PercentPosition)>, EditorError> {
        match gesture {
            EditGesture::Tap { position } => {
                if let Some(key) = self.widget_at(layout, position, metrics) {
                    self.tap(key);
                }
            }
            EditGesture::DragStart { position } => {
                if let Some(key) = self.widget_at(layout, position, metrics) {
                    self.begin_drag(layout, key, metrics)?;
                }
            }
            EditGesture::Drag { delta } => {
                // drags that started on empty space move nothing
                if self.session.is_some() {
                    self.drag_by(layout, delta, metrics)?;
                }
            }
            EditGesture::DragEnd => return Ok(self.end_drag(layout)),
            EditGesture::DragCancel => self.cancel_drag(layout),
        }
        Ok(None)
    }
}
