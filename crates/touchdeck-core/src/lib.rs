//! # Touchdeck core
//!
//! On-screen virtual controls are described by a [`Layout`]: ordered layers,
//! each holding interactive ("normal") widgets and passive text widgets.
//! This crate owns the model and the pure pieces every other crate leans on:
//!
//! - [`geometry`]: percentage ↔ pixel conversions and rectangle distance.
//! - [`visibility`]: which layers and widgets are live for the current
//!   input context (cursor grabbed, mouse or gamepad in use).
//! - [`layout`]: the widget arena, layer ordering and mutation setters.
//! - [`input`]: raw pointer samples fed in by the platform.
//!
//! ```rust
//! use touchdeck_core::*;
//!
//! let metrics = ScreenMetrics::new(1920.0, 1080.0, 2.0);
//! let mut layout = Layout::new();
//! let layer = layout.add_layer(Layer::new("main", "Main")).unwrap();
//! let key = layout
//!     .add_widget(
//!         layer,
//!         Widget::normal("fire", NormalWidget::new(vec![ClickEvent::key("MOUSE_LEFT")]))
//!             .sized(WidgetSize::Fixed { width_dp: 60.0, height_dp: 60.0 })
//!             .at(PercentPosition::new(10000, 10000)),
//!     )
//!     .unwrap();
//!
//! // 120px square pinned to the bottom-right corner
//! let rect = layout.widget_rect(key, &metrics);
//! assert_eq!((rect.x, rect.y, rect.w), (1800.0, 960.0, 120.0));
//! ```
//!
//! Everything here is single-threaded: a layout is mutated only by the thread
//! that processes its input events.

pub mod error;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod signal;
pub mod visibility;
pub mod widget;

pub use error::LayoutError;
pub use geometry::*;
pub use input::*;
pub use layout::*;
pub use signal::*;
pub use visibility::*;
pub use widget::*;
