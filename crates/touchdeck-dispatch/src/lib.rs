//! # Touch dispatch
//!
//! [`TouchDispatcher`] takes raw pointer samples and decides, per pointer,
//! which widgets of a [`touchdeck_core::Layout`] receive them.
//!
//! For every touch sample that is still down:
//!
//! 1. visible layers are flattened into a priority list of normal widgets;
//! 2. widgets under the pointer that can be touched are kept;
//! 3. the first deep-touch widget, if any, hides everything behind it;
//! 4. the press is offered to each target until one consumes it;
//! 5. widgets that release on exit are released (or resumed) as the pointer
//!    leaves (or re-enters) them.
//!
//! When the pointer lifts, everything it held is released.
//!
//! ```rust
//! use touchdeck_core::*;
//! use touchdeck_dispatch::*;
//!
//! struct Keys(Vec<(String, bool)>);
//! impl PointerHost for Keys {
//!     fn on_click_event(&mut self, _w: &WidgetId, e: &ClickEvent, pressed: bool) {
//!         self.0.push((e.key.clone(), pressed));
//!     }
//! }
//!
//! let metrics = ScreenMetrics::new(1000.0, 1000.0, 1.0);
//! let mut layout = Layout::new();
//! let layer = layout.add_layer(Layer::new("main", "Main")).unwrap();
//! layout
//!     .add_widget(
//!         layer,
//!         Widget::normal("jump", NormalWidget::new(vec![ClickEvent::key("SPACE")]))
//!             .sized(WidgetSize::Fixed { width_dp: 100.0, height_dp: 100.0 }),
//!     )
//!     .unwrap();
//!
//! let mut dispatcher = TouchDispatcher::new();
//! let mut keys = Keys(Vec::new());
//! let ctx = VisibilityContext::default();
//! let down = PointerEvent::touch(0, Vec2::new(50.0, 50.0), true);
//! let up = PointerEvent::touch(0, Vec2::new(50.0, 50.0), false);
//! dispatcher.dispatch(&mut layout, &down, &ctx, &metrics, &mut keys);
//! dispatcher.dispatch(&mut layout, &up, &ctx, &metrics, &mut keys);
//! assert_eq!(keys.0, vec![("SPACE".to_string(), true), ("SPACE".to_string(), false)]);
//! ```

pub mod button;
pub mod dispatcher;
pub mod host;


pub use button::{ActiveList, ActiveWidget, TouchResponse, TouchSession};
pub use dispatcher::*;
pub use host::PointerHost;
