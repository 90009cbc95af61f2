use touchdeck_core::{ClickEvent, PointerId, WidgetId};

/// The outside world as seen by the dispatcher.
///
/// Implemented by whatever owns the control surface: it knows which pointers
/// other input layers have claimed, and it acts on the bindings of pressed
/// widgets (key presses, layer switches, sending text...).
pub trait PointerHost {
    /// Pointers claimed by another input layer are skipped entirely.
    fn is_pointer_occupied(&self, _id: PointerId) -> bool {
        false
    }

    /// A widget declined the pointer: from now on it should only drive
    /// movement (camera look, for example), never taps.
    fn mark_move_only(&mut self, _id: PointerId) {}

    /// Called once per binding when a widget is pressed (`pressed == true`) or
    /// released. Toggle widgets report their new toggle state instead.
    fn on_click_event(&mut self, widget: &WidgetId, event: &ClickEvent, pressed: bool);
}
