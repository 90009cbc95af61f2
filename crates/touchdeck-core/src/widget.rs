//! Widget entities: the interactive "normal" variant and the passive text variant.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{PercentPosition, PointerId, Size, Vec2, VisibilityType};

/// Stable, document-level widget identifier. Unique across every layer of a layout.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct WidgetId(pub String);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(s: &str) -> Self {
        WidgetId(s.to_string())
    }
}

impl From<String> for WidgetId {
    fn from(s: String) -> Self {
        WidgetId(s)
    }
}

/// Screen axis a percentage size refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    #[default]
    Width,
    Height,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WidgetSize {
    /// Density-independent pixels.
    Fixed { width_dp: f32, height_dp: f32 },
    /// Percentages in `[0, 10000]`, each of the referenced screen axis.
    Percentage {
        width: u16,
        height: u16,
        width_ref: Axis,
        height_ref: Axis,
    },
    /// Sized by content; the renderer reports the measured size.
    Wrap,
}

impl Default for WidgetSize {
    fn default() -> Self {
        WidgetSize::Fixed {
            width_dp: 50.0,
            height_dp: 50.0,
        }
    }
}

/// Reference to a named style owned by the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct StyleRef(pub String);

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct TextStyle {
    pub text: String,
    pub font_size: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClickEventKind {
    Key,
    LauncherEvent,
    SendText,
    SwitchLayer,
    ShowLayer,
    HideLayer,
    ToggleLayer,
}

impl ClickEventKind {
    /// Bindings whose key names a layer whose visibility should change.
    pub fn is_layer_visibility(self) -> bool {
        matches!(
            self,
            ClickEventKind::SwitchLayer
                | ClickEventKind::ShowLayer
                | ClickEventKind::HideLayer
                | ClickEventKind::ToggleLayer
        )
    }
}

/// A binding fired when a normal widget is pressed or released.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClickEvent {
    pub kind: ClickEventKind,
    pub key: String,
}

impl ClickEvent {
    pub fn new(kind: ClickEventKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
        }
    }

    pub fn key(key: impl Into<String>) -> Self {
        Self::new(ClickEventKind::Key, key)
    }
}

/// Interactive widget capabilities.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "NormalWidgetFields")
)]
pub struct NormalWidget {
    pub click_events: Vec<ClickEvent>,
    /// A pointer already holding a swipeable widget may slide onto this one.
    pub swipeable: bool,
    /// Touches also reach the widgets beneath.
    pub penetrable: bool,
    /// Sticky: each press flips the toggled state instead of press/release.
    pub toggleable: bool,
    /// Released as soon as the holding pointer leaves the widget's bounds.
    pub release_on_exit: bool,
    /// Joystick-like widgets with their own touch handling. They claim priority
    /// over everything behind them.
    pub deep_touch: bool,
}

impl NormalWidget {
    /// Keeps at most one `SendText` binding: the first one with a non-empty key.
    pub fn new(click_events: Vec<ClickEvent>) -> Self {
        Self {
            click_events: filter_send_text(click_events),
            ..Default::default()
        }
    }

    pub fn swipeable(mut self, v: bool) -> Self {
        self.swipeable = v;
        self
    }

    pub fn penetrable(mut self, v: bool) -> Self {
        self.penetrable = v;
        self
    }

    pub fn toggleable(mut self, v: bool) -> Self {
        self.toggleable = v;
        self
    }

    pub fn release_on_exit(mut self, v: bool) -> Self {
        self.release_on_exit = v;
        self
    }

    pub fn deep_touch(mut self, v: bool) -> Self {
        self.deep_touch = v;
        self
    }
}

/// Loaded documents go through the same binding filter as [`NormalWidget::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(default)]
struct NormalWidgetFields {
    click_events: Vec<ClickEvent>,
    swipeable: bool,
    penetrable: bool,
    toggleable: bool,
    release_on_exit: bool,
    deep_touch: bool,
}

#[cfg(feature = "serde")]
impl Default for NormalWidgetFields {
    fn default() -> Self {
        let n = NormalWidget::default();
        Self {
            click_events: n.click_events,
            swipeable: n.swipeable,
            penetrable: n.penetrable,
            toggleable: n.toggleable,
            release_on_exit: n.release_on_exit,
            deep_touch: n.deep_touch,
        }
    }
}

#[cfg(feature = "serde")]
impl From<NormalWidgetFields> for NormalWidget {
    fn from(f: NormalWidgetFields) -> Self {
        NormalWidget::new(f.click_events)
            .swipeable(f.swipeable)
            .penetrable(f.penetrable)
            .toggleable(f.toggleable)
            .release_on_exit(f.release_on_exit)
            .deep_touch(f.deep_touch)
    }
}

pub(crate) fn filter_send_text(events: Vec<ClickEvent>) -> Vec<ClickEvent> {
    let mut seen_text = false;
    events
        .into_iter()
        .filter(|e| {
            if e.kind != ClickEventKind::SendText {
                return true;
            }
            if seen_text || e.key.is_empty() {
                return false;
            }
            seen_text = true;
            true
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WidgetKind {
    Normal(NormalWidget),
    Text,
}

/// Ephemeral editor state while a widget is being dragged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOverride {
    /// Accumulated, clamped, unsnapped pixel offset.
    pub raw_offset: Vec2,
    /// Position shown while dragging (possibly snapped).
    pub preview: PercentPosition,
}

/// State that only exists while a layout is live. Never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuntimeState {
    pub held_by: Option<PointerId>,
    pub toggled: bool,
    pub drag: Option<DragOverride>,
    pub measured: Option<Size>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Widget {
    pub id: WidgetId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: PercentPosition,
    #[cfg_attr(feature = "serde", serde(default))]
    pub size: WidgetSize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: Option<StyleRef>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub visibility: VisibilityType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: TextStyle,
    pub kind: WidgetKind,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub runtime: RuntimeState,
}

impl Widget {
    pub fn new(id: impl Into<WidgetId>, kind: WidgetKind) -> Self {
        Self {
            id: id.into(),
            position: PercentPosition::default(),
            size: WidgetSize::default(),
            style: None,
            visibility: VisibilityType::Always,
            text: TextStyle::default(),
            kind,
            runtime: RuntimeState::default(),
        }
    }

    pub fn normal(id: impl Into<WidgetId>, normal: NormalWidget) -> Self {
        Self::new(id, WidgetKind::Normal(normal))
    }

    pub fn text(id: impl Into<WidgetId>, text: impl Into<String>) -> Self {
        let mut w = Self::new(id, WidgetKind::Text);
        w.text.text = text.into();
        w
    }

    pub fn at(mut self, position: PercentPosition) -> Self {
        self.position = position;
        self
    }

    pub fn sized(mut self, size: WidgetSize) -> Self {
        self.size = size;
        self
    }

    pub fn visible_when(mut self, visibility: VisibilityType) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn as_normal(&self) -> Option<&NormalWidget> {
        match &self.kind {
            WidgetKind::Normal(n) => Some(n),
            WidgetKind::Text => None,
        }
    }

    pub fn is_normal(&self) -> bool {
        self.as_normal().is_some()
    }

    /// Whether this widget may take part in touch dispatch right now.
    pub fn can_touch(&self) -> bool {
        if self.runtime.drag.is_some() {
            return false;
        }
        match &self.kind {
            WidgetKind::Normal(n) => n.deep_touch || !n.click_events.is_empty(),
            WidgetKind::Text => false,
        }
    }

    /// Mid-gesture: some pointer currently holds this widget.
    pub fn can_process(&self) -> bool {
        self.runtime.held_by.is_some()
    }

    pub fn supports_deep_touch(&self) -> bool {
        self.as_normal().is_some_and(|n| n.deep_touch)
    }

    /// Pressed visual state: held right now, or toggled on.
    pub fn is_pressed(&self) -> bool {
        self.runtime.held_by.is_some() || self.runtime.toggled
    }
}
