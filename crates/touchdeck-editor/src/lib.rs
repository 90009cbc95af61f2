//! # Touchdeck editor
//!
//! Edit-mode support for touchdeck layouts: dragging widgets around the
//! screen, snapping them into alignment with their neighbours and reporting
//! the guidelines to draw while they are aligned.
//!
//! Raw pointer samples go through an [`EditGestureDetector`], which tells
//! taps from drags. The resulting [`EditGesture`]s drive an
//! [`EditorController`], which keeps the live drag preview on the widget and
//! hands back the final position when the drag ends.
//!
//! ```rust
//! use touchdeck_core::*;
//! use touchdeck_editor::*;
//!
//! let metrics = ScreenMetrics::new(1100.0, 1000.0, 1.0);
//! let mut layout = Layout::new();
//! let layer = layout.add_layer(Layer::new("main", "Main")).unwrap();
//! let size = WidgetSize::Fixed { width_dp: 100.0, height_dp: 100.0 };
//! let a = layout
//!     .add_widget(layer, Widget::text("a", "A").sized(size))
//!     .unwrap();
//! layout
//!     .add_widget(layer, Widget::text("b", "B").sized(size).at(PercentPosition::new(5000, 0)))
//!     .unwrap();
//!
//! let mut editor = EditorController::default();
//! editor.begin_drag(&mut layout, a, &metrics).unwrap();
//! // B sits at x = 500; a's right edge lands 5px short of it
//! editor.drag_by(&mut layout, Vec2::new(395.0, 300.0), &metrics).unwrap();
//! assert_eq!(editor.guidelines()[0].position, 500.0);
//!
//! let (key, position) = editor.end_drag(&mut layout).unwrap();
//! layout.set_position(key, position).unwrap();
//! assert_eq!(layout.widget_rect(a, &metrics).right(), 500.0);
//! ```

pub mod controller;
pub mod error;
pub mod gesture;
pub mod snap;


pub use controller::EditorController;
pub use error::EditorError;
pub use gesture::{EditGesture, EditGestureDetector, GestureConfig, Gestures};
pub use snap::*;
