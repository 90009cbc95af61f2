//! Layer and widget visibility rules.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Layer, Widget};

/// When a layer or widget is shown, relative to whether the game grabs the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VisibilityType {
    #[default]
    Always,
    /// Only while the cursor is grabbed (in game).
    InGame,
    /// Only while the cursor is free (menus, inventories).
    InMenu,
}

/// Which input device is currently driving the game, if it should hide layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HideContext {
    #[default]
    None,
    WhenMouse,
    WhenGamepad,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisibilityContext {
    pub hide: HideContext,
    pub cursor_grabbed: bool,
}

impl VisibilityContext {
    pub fn new(hide: HideContext, cursor_grabbed: bool) -> Self {
        Self {
            hide,
            cursor_grabbed,
        }
    }
}

pub fn visibility_matches(kind: VisibilityType, cursor_grabbed: bool) -> bool {
    match kind {
        VisibilityType::Always => true,
        VisibilityType::InGame => cursor_grabbed,
        VisibilityType::InMenu => !cursor_grabbed,
    }
}

pub fn is_layer_visible(layer: &Layer, ctx: &VisibilityContext) -> bool {
    let base = !layer.hide && visibility_matches(layer.visibility, ctx.cursor_grabbed);
    let context = match ctx.hide {
        HideContext::WhenMouse => !layer.hide_when_mouse,
        HideContext::WhenGamepad => !layer.hide_when_gamepad,
        HideContext::None => true,
    };
    base && context
}

/// Both the owning layer and the widget's own rule must allow it.
pub fn is_widget_visible(layer: &Layer, widget: &Widget, ctx: &VisibilityContext) -> bool {
    is_layer_visible(layer, ctx) && visibility_matches(widget.visibility, ctx.cursor_grabbed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_matches() {
        assert!(visibility_matches(VisibilityType::Always, true));
        assert!(visibility_matches(VisibilityType::Always, false));
        assert!(visibility_matches(VisibilityType::InGame, true));
        assert!(!visibility_matches(VisibilityType::InGame, false));
        assert!(!visibility_matches(VisibilityType::InMenu, true));
        assert!(visibility_matches(VisibilityType::InMenu, false));
    }

    #[test]
    fn test_layer_hide_flags() {
        let mut layer = Layer::new("main", "Main");
        let grabbed = VisibilityContext::new(HideContext::None, true);
        assert!(is_layer_visible(&layer, &grabbed));

        layer.hide_when_mouse = true;
        assert!(is_layer_visible(&layer, &grabbed));
        assert!(!is_layer_visible(
            &layer,
            &VisibilityContext::new(HideContext::WhenMouse, true)
        ));
        assert!(is_layer_visible(
            &layer,
            &VisibilityContext::new(HideContext::WhenGamepad, true)
        ));

        layer.hide_when_mouse = false;
        layer.hide = true;
        assert!(!is_layer_visible(&layer, &grabbed));
    }

    #[test]
    fn test_widget_needs_layer_and_own_rule() {
        let mut layer = Layer::new("menu", "Menu");
        layer.visibility = VisibilityType::InMenu;
        let w = Widget::text("hint", "Inventory").visible_when(VisibilityType::Always);
        assert!(is_widget_visible(&layer, &w, &VisibilityContext::default()));
        assert!(!is_widget_visible(
            &layer,
            &w,
            &VisibilityContext::new(HideContext::None, true)
        ));

        let ingame = Widget::text("hud", "HP").visible_when(VisibilityType::InGame);
        let mut always = Layer::new("all", "All");
        always.visibility = VisibilityType::Always;
        assert!(!is_widget_visible(&always, &ingame, &VisibilityContext::default()));
    }
}
